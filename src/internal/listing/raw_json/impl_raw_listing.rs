use crate::internal::listing::enums::EntryKind;
use crate::internal::listing::raw_json::raw_listing::{RawEntry, RawListing};
use crate::internal::remote_entry::structs::remote_entry::RemoteEntry;

pub trait ToRemoteEntries {
    fn to_remote_entries(self) -> Vec<RemoteEntry>;
}

impl ToRemoteEntries for RawListing {
    fn to_remote_entries(self) -> Vec<RemoteEntry> {
        // 消耗 files 中的每个条目，保持接口返回的顺序
        self.files
            .into_iter()
            .map(
                |RawEntry {
                     file_name,
                     is_directory,
                     is_regular_file,
                     last_modified_time,
                 }| {
                    RemoteEntry::new(
                        file_name,
                        EntryKind::from_flags(is_directory, is_regular_file),
                        &last_modified_time.as_raw(),
                    )
                },
            )
            .collect()
    }
}

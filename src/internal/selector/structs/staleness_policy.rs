use chrono::{DateTime, TimeDelta, Utc};

use crate::internal::remote_entry::modified_time::{
    is_update_required, parse_epoch_seconds, rfc_date,
};
use crate::internal::remote_entry::structs::remote_entry::RemoteEntry;

use super::select_error::SelectError;

/// 过期判断所用的时刻和窗口；同一次选择内所有条目共用一个 `now`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StalenessPolicy {
    pub now: DateTime<Utc>,
    pub retention: TimeDelta,
}

impl StalenessPolicy {
    pub fn new(now: DateTime<Utc>, retention: TimeDelta) -> Self {
        Self { now, retention }
    }

    /// 以当前时间、一天窗口构造。
    pub fn one_day() -> Self {
        Self::new(Utc::now(), TimeDelta::days(1))
    }

    /// 解析条目的修改时间，返回 `(秒, RFC 日期, 是否需要更新)`。
    pub fn evaluate(&self, entry: &RemoteEntry) -> Result<(i64, String, bool), SelectError> {
        let invalid = || SelectError::InvalidModifiedTime {
            name: entry.name.clone(),
            raw: entry.modified.clone(),
        };

        let modified = parse_epoch_seconds(&entry.modified).ok_or_else(invalid)?;
        let rfc = rfc_date(modified).ok_or_else(invalid)?;
        let update_required = is_update_required(modified, self.now, self.retention);

        Ok((modified, rfc, update_required))
    }
}

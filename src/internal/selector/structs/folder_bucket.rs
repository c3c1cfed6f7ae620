use crate::internal::remote_entry::structs::processed_entry::ProcessedEntry;

/// 按名字索引、保持插入顺序的条目集合。
///
/// 同名条目再次插入时原地替换，位置不变。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderBucket {
    entries: Vec<ProcessedEntry>,
}

impl FolderBucket {
    /// 插入或替换；返回被替换掉的旧条目。
    pub fn insert(&mut self, entry: ProcessedEntry) -> Option<ProcessedEntry> {
        match self.entries.iter_mut().find(|e| e.name == entry.name) {
            Some(slot) => Some(std::mem::replace(slot, entry)),
            None => {
                self.entries.push(entry);
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&ProcessedEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProcessedEntry> {
        self.entries.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a FolderBucket {
    type Item = &'a ProcessedEntry;
    type IntoIter = std::slice::Iter<'a, ProcessedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

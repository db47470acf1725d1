//! 髒標記追蹤

use std::collections::HashSet;
use std::hash::Hash;

/// 髒標記追蹤器（記錄哪些曲線的快取已過期）
#[derive(Debug)]
pub struct DirtyTracker<K> {
    dirty_keys: HashSet<K>,
}

impl<K: Eq + Hash + Clone> DirtyTracker<K> {
    /// 創建新的追蹤器
    pub fn new() -> Self {
        Self {
            dirty_keys: HashSet::new(),
        }
    }

    /// 標記為髒
    pub fn mark_dirty(&mut self, key: K) {
        self.dirty_keys.insert(key);
    }

    /// 檢查是否為髒
    pub fn is_dirty(&self, key: &K) -> bool {
        self.dirty_keys.contains(key)
    }

    /// 清除單一髒標記，回傳原本是否為髒
    pub fn clear_key(&mut self, key: &K) -> bool {
        self.dirty_keys.remove(key)
    }

    /// 清除所有髒標記
    pub fn clear(&mut self) {
        self.dirty_keys.clear();
    }
}

impl<K: Eq + Hash + Clone> Default for DirtyTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}

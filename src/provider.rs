//! 雞群快照提供者

use layplan_core::FlockSnapshot;
use std::collections::HashMap;

/// 雞群快照來源（依租戶限定查詢範圍）
pub trait FlockSnapshotProvider {
    /// 查詢屬於 `owner_id` 的雞群；不存在或不屬於該租戶時回傳 `None`
    fn find_flock(&self, flock_id: u64, owner_id: u64) -> Option<FlockSnapshot>;
}

/// 記憶體中的雞群資料
#[derive(Debug, Clone, Default)]
pub struct InMemoryFlockProvider {
    flocks: HashMap<u64, FlockSnapshot>,
}

impl InMemoryFlockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：加入雞群
    pub fn with_flock(mut self, flock: FlockSnapshot) -> Self {
        self.insert(flock);
        self
    }

    /// 新增或更新雞群
    pub fn insert(&mut self, flock: FlockSnapshot) {
        self.flocks.insert(flock.id, flock);
    }

    pub fn len(&self) -> usize {
        self.flocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flocks.is_empty()
    }
}

impl FlockSnapshotProvider for InMemoryFlockProvider {
    fn find_flock(&self, flock_id: u64, owner_id: u64) -> Option<FlockSnapshot> {
        self.flocks
            .get(&flock_id)
            .filter(|flock| flock.owner_id == owner_id)
            .cloned()
    }
}

//! # Layer Planning Reference Store
//!
//! 品種標準資料的唯讀存放區與查詢（記憶化曲線、髒標記重建）

pub mod dataset;
pub mod dirty_tracking;
pub mod lookup;
pub mod store;

// Re-export 主要類型
pub use dataset::StandardsDataset;
pub use dirty_tracking::DirtyTracker;
pub use lookup::{ReferenceLookup, ResolvedCurve};
pub use store::{ClearSummary, LoadSummary, StandardsStore};

/// 存放區載入錯誤
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("無法讀取標準資料檔 {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("標準資料格式錯誤: {0}")]
    Json(#[from] serde_json::Error),
}

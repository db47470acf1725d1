//! # Layer Planning Core
//!
//! 核心資料模型與類型定義

pub mod calendar;
pub mod config;
pub mod flock;
pub mod plan;
pub mod product;
pub mod standards;

// Re-export 主要類型
pub use config::{PlanningConfig, RoundingRule};
pub use flock::FlockSnapshot;
pub use plan::{
    FlockSummary, PlanWarning, PlanningResult, PlanningRow, ProductSummary, WarningSeverity,
};
pub use product::{Product, ProductId};
pub use standards::{Sex, StandardsCurve, StandardsEntry};

/// 錯誤分類（對應呼叫端可見的失敗種類）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 實體不存在
    NotFound,
    /// 實體存在但缺少計算所需資料
    PreconditionFailed,
    /// 參照格式錯誤
    BadRequest,
    /// 非預期的內部錯誤
    Internal,
}

/// 產蛋計劃錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum PlanningError {
    #[error("flock not found: {0}")]
    FlockNotFound(u64),

    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    #[error("flock does not have a hatch date set")]
    MissingHatchDate,

    #[error("flock does not have a product assigned")]
    MissingProduct,

    #[error("invalid product id format: {0:?}")]
    InvalidProductId(String),

    #[error("standards not found for the assigned product ({product_id}, {sex})")]
    StandardsNotFound { product_id: ProductId, sex: Sex },

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl PlanningError {
    /// 錯誤分類
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FlockNotFound(_) | Self::ProductNotFound(_) => ErrorKind::NotFound,
            Self::MissingHatchDate | Self::MissingProduct | Self::StandardsNotFound { .. } => {
                ErrorKind::PreconditionFailed
            }
            Self::InvalidProductId(_) => ErrorKind::BadRequest,
            Self::InvalidDate(_) | Self::InvalidConfig(_) => ErrorKind::Internal,
        }
    }

    /// 對應的 HTTP 狀態碼
    pub fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::NotFound => 404,
            ErrorKind::PreconditionFailed => 412,
            ErrorKind::BadRequest => 400,
            ErrorKind::Internal => 500,
        }
    }

    /// 是否值得重試
    ///
    /// 資料類錯誤是確定性的，相同輸入重試永遠不會成功，
    /// 必須先修正資料（設定孵化日、指定品種、匯入標準）。
    pub fn is_retryable(&self) -> bool {
        false
    }
}

pub type Result<T> = std::result::Result<T, PlanningError>;

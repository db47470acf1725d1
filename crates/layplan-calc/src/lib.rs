//! # Layer Planning Engine
//!
//! 產蛋計劃計算引擎：起始週判定、標準延用、比率換算

pub mod calculator;
pub mod carry_forward;
pub mod rates;
pub mod start_week;

// Re-export 主要類型
pub use calculator::PlanningCalculator;
pub use carry_forward::{CarryForwardCursor, ResolvedWeek, WeekSource};
pub use rates::RateConverter;
pub use start_week::StartWeekDetector;

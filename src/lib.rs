//! # Layer Planning
//!
//! 種雞產蛋計劃：依雞群孵化日、入舍母雞數與品種標準曲線，
//! 產生逐週的產蛋、種蛋、可售雛雞預估表。

pub mod logging;
pub mod provider;
pub mod service;

// Re-export 主要類型
pub use layplan_cache::{ReferenceLookup, StandardsDataset, StandardsStore};
pub use layplan_calc::PlanningCalculator;
pub use layplan_core::{
    ErrorKind, FlockSnapshot, PlanningConfig, PlanningError, PlanningResult, PlanningRow,
    Product, ProductId, Result, RoundingRule, Sex, StandardsCurve, StandardsEntry,
};
pub use provider::{FlockSnapshotProvider, InMemoryFlockProvider};
pub use service::PlanningService;

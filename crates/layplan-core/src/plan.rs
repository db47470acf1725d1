//! 產蛋計劃結果模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{FlockSnapshot, Product, ProductId};

/// 計劃表單週資料（計算結果，不持久化）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningRow {
    /// ISO 期間標籤 "YYYY.WW"
    pub period: String,

    /// 相對起始週的索引（0 起算）
    pub week_index: u32,

    /// 實際代表的標準週齡
    pub standard_week: u32,

    /// 入舍母雞數
    pub hens_housed: u32,

    /// 當週產蛋數
    pub eggs: i64,

    /// 當週種蛋數
    pub hatching_eggs: i64,

    /// 當週可售雛雞數
    pub saleable_chicks: i64,

    /// 累計種蛋數（取自標準曲線的累計值，非本表加總）
    pub hatching_eggs_cum: i64,

    /// 累計可售雛雞數（取自標準曲線的累計值，非本表加總）
    pub saleable_chicks_cum: i64,

    /// 採用的 HD 產蛋率（原值，可為空）
    pub hd_pct_production: Option<Decimal>,

    /// 採用的 HH 產蛋率（原值，可為空）
    pub hh_pct_production: Option<Decimal>,
}

/// 雞群摘要
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlockSummary {
    pub id: u64,
    pub name: String,
    /// ISO 日期字串 (YYYY-MM-DD)
    pub hatch_date: String,
    pub hens_housed: u32,
    pub production_period: u32,
    pub farm_id: Option<u64>,
}

impl FlockSummary {
    pub fn from_snapshot(flock: &FlockSnapshot, hatch_date: chrono::NaiveDate) -> Self {
        Self {
            id: flock.id,
            name: flock.name.clone(),
            hatch_date: hatch_date.format("%Y-%m-%d").to_string(),
            hens_housed: flock.hens_housed,
            production_period: flock.production_period,
            farm_id: flock.farm_id,
        }
    }
}

/// 產品摘要
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: ProductId,
    pub breed: String,
}

impl From<&Product> for ProductSummary {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            breed: product.breed.clone(),
        }
    }
}

/// 計劃警告
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanWarning {
    /// 相關的標準週齡
    pub standard_week: u32,
    pub message: String,
    pub severity: WarningSeverity,
}

impl PlanWarning {
    pub fn new(standard_week: u32, message: String, severity: WarningSeverity) -> Self {
        Self {
            standard_week,
            message,
            severity,
        }
    }

    pub fn info(standard_week: u32, message: String) -> Self {
        Self::new(standard_week, message, WarningSeverity::Info)
    }

    pub fn warning(standard_week: u32, message: String) -> Self {
        Self::new(standard_week, message, WarningSeverity::Warning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningSeverity {
    Info,
    Warning,
}

/// 產蛋計劃結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningResult {
    /// 計算批次ID（日誌追蹤用）
    pub plan_id: Uuid,

    pub flock: FlockSummary,

    pub product: Option<ProductSummary>,

    /// 起始週（第一個開始產蛋的標準週）
    pub start_week: u32,

    pub rows: Vec<PlanningRow>,

    /// 警告信息
    pub warnings: Vec<PlanWarning>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl PlanningResult {
    /// 創建空的計劃結果
    pub fn empty(flock: FlockSummary, product: Option<ProductSummary>, start_week: u32) -> Self {
        Self {
            plan_id: Uuid::new_v4(),
            flock,
            product,
            start_week,
            rows: Vec::new(),
            warnings: Vec::new(),
            calculation_time_ms: None,
        }
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: PlanWarning) {
        self.warnings.push(warning);
    }

    /// 查詢指定標準週的資料
    pub fn row_for_week(&self, standard_week: u32) -> Option<&PlanningRow> {
        self.rows.iter().find(|r| r.standard_week == standard_week)
    }

    /// 整個計劃期的產蛋總數
    pub fn total_eggs(&self) -> i64 {
        self.rows.iter().map(|r| r.eggs).sum()
    }
}

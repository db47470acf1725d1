//! 雞群快照模型

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{PlanningError, ProductId, Result};

/// 雞群快照（由雞群 CRUD 擁有，計劃引擎只讀）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlockSnapshot {
    /// 雞群ID
    pub id: u64,

    /// 所屬使用者（租戶）
    pub owner_id: u64,

    /// 名稱
    pub name: String,

    /// 農場
    #[serde(default)]
    pub farm_id: Option<u64>,

    /// 孵化日
    #[serde(default)]
    pub hatch_date: Option<NaiveDate>,

    /// 入舍母雞數
    #[serde(default)]
    pub hens_housed: u32,

    /// 產蛋期（週）
    #[serde(default)]
    pub production_period: u32,

    /// 品種產品參照（原始文字）
    #[serde(default)]
    pub product_ref: Option<String>,
}

impl FlockSnapshot {
    /// 創建新的雞群快照
    pub fn new(id: u64, owner_id: u64, name: String) -> Self {
        Self {
            id,
            owner_id,
            name,
            farm_id: None,
            hatch_date: None,
            hens_housed: 0,
            production_period: 0,
            product_ref: None,
        }
    }

    /// 建構器模式：設置農場
    pub fn with_farm_id(mut self, farm_id: u64) -> Self {
        self.farm_id = Some(farm_id);
        self
    }

    /// 建構器模式：設置孵化日
    pub fn with_hatch_date(mut self, hatch_date: NaiveDate) -> Self {
        self.hatch_date = Some(hatch_date);
        self
    }

    /// 建構器模式：設置入舍母雞數
    pub fn with_hens_housed(mut self, hens: u32) -> Self {
        self.hens_housed = hens;
        self
    }

    /// 建構器模式：設置產蛋期
    pub fn with_production_period(mut self, weeks: u32) -> Self {
        self.production_period = weeks;
        self
    }

    /// 建構器模式：設置品種產品參照
    pub fn with_product_ref(mut self, product_ref: impl Into<String>) -> Self {
        self.product_ref = Some(product_ref.into());
        self
    }

    /// 取得孵化日，未設定時回傳 PreconditionFailed
    pub fn require_hatch_date(&self) -> Result<NaiveDate> {
        self.hatch_date.ok_or(PlanningError::MissingHatchDate)
    }

    /// 取得並解析品種產品ID
    ///
    /// 未指定（或空白）→ `MissingProduct`；格式錯誤 → `InvalidProductId`
    pub fn require_product_id(&self) -> Result<ProductId> {
        match self.product_ref.as_deref().map(str::trim) {
            None | Some("") => Err(PlanningError::MissingProduct),
            Some(raw) => raw.parse(),
        }
    }
}

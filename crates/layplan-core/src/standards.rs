//! 品種標準曲線模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{PlanningError, ProductId};

/// 性別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// 母雞（產蛋指標只對母雞定義）
    Female,
    /// 公雞
    Male,
}

impl Default for Sex {
    fn default() -> Self {
        Self::Female
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Female => write!(f, "female"),
            Self::Male => write!(f, "male"),
        }
    }
}

impl FromStr for Sex {
    type Err = PlanningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "female" => Ok(Self::Female),
            "male" => Ok(Self::Male),
            other => Err(PlanningError::InvalidConfig(format!("unknown sex: {other}"))),
        }
    }
}

/// 標準曲線單週資料（產品 × 週 × 性別）
///
/// 所有比率欄位皆可為空：`None` 表示「該品種在該週沒有資料」，
/// 而不是 0（0 是合法的產蛋率）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardsEntry {
    /// 產品ID
    pub product_id: ProductId,

    /// 週齡
    pub week: u32,

    /// 性別
    pub sex: Sex,

    /// 入舍母雞產蛋率 (HH %)
    #[serde(default)]
    pub hh_pct_production: Option<Decimal>,

    /// 飼養日產蛋率 (HD %)
    #[serde(default)]
    pub hd_pct_production: Option<Decimal>,

    /// 飼養日產蛋率下限
    #[serde(default)]
    pub min_hd_pct_production: Option<Decimal>,

    /// 飼養日產蛋率上限
    #[serde(default)]
    pub max_hd_pct_production: Option<Decimal>,

    /// 種蛋比例 (%)
    #[serde(default)]
    pub pct_hatching_eggs: Option<Decimal>,

    /// 每隻母雞當週種蛋數
    #[serde(default)]
    pub he_week: Option<Decimal>,

    /// 每隻母雞累計種蛋數
    #[serde(default)]
    pub he_cum: Option<Decimal>,

    /// 總孵化率 (%)
    #[serde(default)]
    pub total_pct_hatch: Option<Decimal>,

    /// 可售雛雞孵化率 (%)
    #[serde(default)]
    pub saleable_pct_hatch: Option<Decimal>,

    /// 每隻母雞當週可售雛雞數
    #[serde(default)]
    pub saleable_chicks_week: Option<Decimal>,

    /// 每隻母雞累計可售雛雞數
    #[serde(default)]
    pub saleable_chicks_cum: Option<Decimal>,

    /// 當週蛋重 (g)
    #[serde(default)]
    pub egg_weight_week: Option<Decimal>,

    /// 存活率 (%)
    #[serde(default)]
    pub livability: Option<Decimal>,
}

impl StandardsEntry {
    /// 創建新的標準資料（所有比率為空）
    pub fn new(product_id: ProductId, week: u32, sex: Sex) -> Self {
        Self {
            product_id,
            week,
            sex,
            hh_pct_production: None,
            hd_pct_production: None,
            min_hd_pct_production: None,
            max_hd_pct_production: None,
            pct_hatching_eggs: None,
            he_week: None,
            he_cum: None,
            total_pct_hatch: None,
            saleable_pct_hatch: None,
            saleable_chicks_week: None,
            saleable_chicks_cum: None,
            egg_weight_week: None,
            livability: None,
        }
    }

    /// 建構器模式：設置 HH 產蛋率
    pub fn with_hh_pct(mut self, pct: Decimal) -> Self {
        self.hh_pct_production = Some(pct);
        self
    }

    /// 建構器模式：設置 HD 產蛋率
    pub fn with_hd_pct(mut self, pct: Decimal) -> Self {
        self.hd_pct_production = Some(pct);
        self
    }

    /// 建構器模式：設置當週種蛋數（每隻母雞）
    pub fn with_he_week(mut self, rate: Decimal) -> Self {
        self.he_week = Some(rate);
        self
    }

    /// 建構器模式：設置累計種蛋數（每隻母雞）
    pub fn with_he_cum(mut self, rate: Decimal) -> Self {
        self.he_cum = Some(rate);
        self
    }

    /// 建構器模式：設置當週可售雛雞數（每隻母雞）
    pub fn with_saleable_chicks_week(mut self, rate: Decimal) -> Self {
        self.saleable_chicks_week = Some(rate);
        self
    }

    /// 建構器模式：設置累計可售雛雞數（每隻母雞）
    pub fn with_saleable_chicks_cum(mut self, rate: Decimal) -> Self {
        self.saleable_chicks_cum = Some(rate);
        self
    }

    /// 建構器模式：設置蛋重
    pub fn with_egg_weight(mut self, grams: Decimal) -> Self {
        self.egg_weight_week = Some(grams);
        self
    }

    /// 建構器模式：設置存活率
    pub fn with_livability(mut self, pct: Decimal) -> Self {
        self.livability = Some(pct);
        self
    }

    /// 建構器模式：設置可售雛雞孵化率
    pub fn with_saleable_pct_hatch(mut self, pct: Decimal) -> Self {
        self.saleable_pct_hatch = Some(pct);
        self
    }

    /// 計算用產蛋率：HD 優先，其次 HH，皆無則為 0
    pub fn production_pct(&self) -> Decimal {
        self.hd_pct_production
            .or(self.hh_pct_production)
            .unwrap_or(Decimal::ZERO)
    }

    /// 該週是否已開始產蛋
    ///
    /// HD > 0，或 HD 為空且 HH > 0。HD 明確為 0 時不看 HH。
    pub fn has_production(&self) -> bool {
        match self.hd_pct_production {
            Some(hd) => hd > Decimal::ZERO,
            None => self
                .hh_pct_production
                .map(|hh| hh > Decimal::ZERO)
                .unwrap_or(false),
        }
    }
}

/// 標準曲線（單一產品、單一性別，依週齡遞增排序）
///
/// 反序列化一律經過 [`StandardsCurve::from_entries`]，確保排序與每週唯一。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawCurve")]
pub struct StandardsCurve {
    /// 產品ID
    pub product_id: ProductId,

    /// 性別
    pub sex: Sex,

    /// 依週齡排序的資料，每週至多一筆
    entries: Vec<StandardsEntry>,
}

/// 未整理的曲線資料
#[derive(Deserialize)]
struct RawCurve {
    product_id: ProductId,
    sex: Sex,
    entries: Vec<StandardsEntry>,
}

impl From<RawCurve> for StandardsCurve {
    fn from(raw: RawCurve) -> Self {
        Self::from_entries(raw.product_id, raw.sex, raw.entries)
    }
}

impl StandardsCurve {
    /// 從任意順序的資料建立曲線
    ///
    /// 只保留符合產品與性別的資料；同一週出現多筆時，後出現者覆蓋前者。
    pub fn from_entries(product_id: ProductId, sex: Sex, entries: Vec<StandardsEntry>) -> Self {
        let mut filtered: Vec<StandardsEntry> = entries
            .into_iter()
            .filter(|e| e.product_id == product_id && e.sex == sex)
            .collect();

        // 穩定排序後保留每週最後一筆
        filtered.sort_by_key(|e| e.week);
        let mut deduped: Vec<StandardsEntry> = Vec::with_capacity(filtered.len());
        for entry in filtered {
            match deduped.last_mut() {
                Some(last) if last.week == entry.week => *last = entry,
                _ => deduped.push(entry),
            }
        }

        Self {
            product_id,
            sex,
            entries: deduped,
        }
    }

    /// 查詢指定週的資料
    pub fn get(&self, week: u32) -> Option<&StandardsEntry> {
        self.entries
            .binary_search_by_key(&week, |e| e.week)
            .ok()
            .map(|idx| &self.entries[idx])
    }

    /// 依週齡遞增迭代
    pub fn iter(&self) -> impl Iterator<Item = &StandardsEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[StandardsEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first_week(&self) -> Option<u32> {
        self.entries.first().map(|e| e.week)
    }

    pub fn last_week(&self) -> Option<u32> {
        self.entries.last().map(|e| e.week)
    }
}

//! 計劃計算配置

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::{PlanningError, Result};

/// 產蛋計劃參數配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanningConfig {
    /// 四捨五入規則
    pub rounding_rule: RoundingRule,

    /// 是否輸出延用/缺資料警告
    ///
    /// 警告不影響任何計算值。
    pub emit_warnings: bool,
}

impl PlanningConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            rounding_rule: RoundingRule::HalfUp,
            emit_warnings: true,
        }
    }

    /// 從 JSON 載入配置（缺少的欄位使用預設值）
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| PlanningError::InvalidConfig(e.to_string()))
    }

    /// 建構器模式：設置四捨五入規則
    pub fn with_rounding_rule(mut self, rule: RoundingRule) -> Self {
        self.rounding_rule = rule;
        self
    }

    /// 建構器模式：設置是否輸出警告
    pub fn with_emit_warnings(mut self, emit: bool) -> Self {
        self.emit_warnings = emit;
        self
    }
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// 四捨五入規則
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingRule {
    /// 四捨五入（.5 進位，遠離零）
    HalfUp,

    /// 銀行家捨入（.5 取偶數）
    HalfEven,
}

impl RoundingRule {
    /// 取整到個位數
    pub fn round(&self, value: Decimal) -> Decimal {
        let strategy = match self {
            Self::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
        };
        value.round_dp_with_strategy(0, strategy)
    }
}

impl Default for RoundingRule {
    fn default() -> Self {
        Self::HalfUp
    }
}

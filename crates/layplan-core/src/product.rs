//! 品種/羽色產品模型

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::PlanningError;

/// 產品ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// 解析雞群上記錄的產品參照（文字欄位）
impl FromStr for ProductId {
    type Err = PlanningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|_| PlanningError::InvalidProductId(s.to_string()))
    }
}

/// 品種產品（標準資料的分區鍵）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// 產品ID
    pub id: ProductId,

    /// 品種名稱
    pub breed: String,

    /// 羽色
    #[serde(default)]
    pub color: Option<String>,
}

impl Product {
    /// 創建新的產品
    pub fn new(id: ProductId, breed: String) -> Self {
        Self {
            id,
            breed,
            color: None,
        }
    }

    /// 建構器模式：設置羽色
    pub fn with_color(mut self, color: String) -> Self {
        self.color = Some(color);
        self
    }
}

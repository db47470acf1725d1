//! 標準資料集（JSON 批次載入）

use layplan_core::{Product, StandardsEntry};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

use crate::CacheError;

/// 品種產品與標準曲線資料集
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StandardsDataset {
    #[serde(default)]
    pub products: Vec<Product>,

    #[serde(default)]
    pub standards: Vec<StandardsEntry>,
}

impl StandardsDataset {
    pub fn new(products: Vec<Product>, standards: Vec<StandardsEntry>) -> Self {
        Self {
            products,
            standards,
        }
    }

    /// 從 JSON 字串載入
    pub fn from_json_str(json: &str) -> Result<Self, CacheError> {
        Ok(serde_json::from_str(json)?)
    }

    /// 從讀取器載入
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CacheError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// 從檔案載入
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CacheError> {
        let path = path.as_ref();
        tracing::debug!("載入標準資料集: {}", path.display());
        let file = std::fs::File::open(path).map_err(|source| CacheError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_reader(std::io::BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layplan_core::{ProductId, Sex};
    use rust_decimal::Decimal;

    #[test]
    fn test_dataset_from_json() {
        let json = r#"{
            "products": [
                { "id": 7, "breed": "Layer Brown", "color": "brown" },
                { "id": 8, "breed": "Layer White" }
            ],
            "standards": [
                { "productId": 7, "week": 20, "sex": "female", "hdPctProduction": 45.0 },
                { "productId": 7, "week": 20, "sex": "male" }
            ]
        }"#;

        let dataset = StandardsDataset::from_json_str(json).unwrap();

        assert_eq!(dataset.products.len(), 2);
        assert_eq!(dataset.products[1].color, None);
        assert_eq!(dataset.standards.len(), 2);
        assert_eq!(dataset.standards[0].product_id, ProductId::new(7));
        assert_eq!(dataset.standards[0].hd_pct_production, Some(Decimal::from(45)));
        assert_eq!(dataset.standards[1].sex, Sex::Male);
    }

    #[test]
    fn test_dataset_invalid_json() {
        let err = StandardsDataset::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, CacheError::Json(_)));
    }

    #[test]
    fn test_dataset_missing_file() {
        let err = StandardsDataset::from_path("/nonexistent/standards.json").unwrap_err();
        assert!(matches!(err, CacheError::Io { .. }));
    }
}

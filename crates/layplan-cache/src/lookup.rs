//! 參考資料查詢

use layplan_core::{PlanningError, Product, ProductId, Sex, StandardsCurve};
use std::sync::Arc;

use crate::store::StandardsStore;

/// 已解析的品種與標準曲線
#[derive(Debug, Clone)]
pub struct ResolvedCurve {
    pub product: Product,
    pub curve: Arc<StandardsCurve>,
}

/// 參考資料查詢介面
pub trait ReferenceLookup {
    /// 查詢產品
    fn find_product(&self, id: ProductId) -> Option<Product>;

    /// 查詢標準曲線（無資料時回傳 `None`）
    fn find_curve(&self, id: ProductId, sex: Sex) -> Option<Arc<StandardsCurve>>;

    /// 解析產品與標準曲線
    ///
    /// 產品不存在 → `ProductNotFound`；該性別沒有任何標準資料 → `StandardsNotFound`
    fn resolve_curve(&self, id: ProductId, sex: Sex) -> layplan_core::Result<ResolvedCurve> {
        let product = self
            .find_product(id)
            .ok_or(PlanningError::ProductNotFound(id))?;

        let curve = self
            .find_curve(id, sex)
            .filter(|curve| !curve.is_empty())
            .ok_or(PlanningError::StandardsNotFound { product_id: id, sex })?;

        Ok(ResolvedCurve { product, curve })
    }

    /// 產品的母雞產蛋標準（可為空曲線）
    fn production_standards(&self, id: ProductId) -> layplan_core::Result<ResolvedCurve> {
        let product = self
            .find_product(id)
            .ok_or(PlanningError::ProductNotFound(id))?;

        let curve = self
            .find_curve(id, Sex::Female)
            .unwrap_or_else(|| Arc::new(StandardsCurve::from_entries(id, Sex::Female, Vec::new())));

        Ok(ResolvedCurve { product, curve })
    }
}

impl ReferenceLookup for StandardsStore {
    fn find_product(&self, id: ProductId) -> Option<Product> {
        self.product(id).cloned()
    }

    fn find_curve(&self, id: ProductId, sex: Sex) -> Option<Arc<StandardsCurve>> {
        self.curve(id, sex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StandardsDataset;
    use layplan_core::StandardsEntry;
    use rust_decimal::Decimal;

    fn store() -> StandardsStore {
        StandardsStore::from_dataset(StandardsDataset::new(
            vec![
                Product::new(ProductId::new(7), "Layer Brown".to_string()),
                Product::new(ProductId::new(8), "Layer White".to_string()),
            ],
            vec![
                StandardsEntry::new(ProductId::new(7), 20, Sex::Female)
                    .with_hd_pct(Decimal::from(12)),
                StandardsEntry::new(ProductId::new(8), 20, Sex::Male),
            ],
        ))
    }

    #[test]
    fn test_resolve_curve() {
        let resolved = store().resolve_curve(ProductId::new(7), Sex::Female).unwrap();
        assert_eq!(resolved.product.breed, "Layer Brown");
        assert_eq!(resolved.curve.len(), 1);
    }

    #[test]
    fn test_unknown_product_is_not_found() {
        let err = store()
            .resolve_curve(ProductId::new(99), Sex::Female)
            .unwrap_err();
        assert!(matches!(err, PlanningError::ProductNotFound(id) if id == ProductId::new(99)));
        assert_eq!(err.kind(), layplan_core::ErrorKind::NotFound);
    }

    #[test]
    fn test_missing_female_curve() {
        // 產品 8 只有公雞資料
        let err = store()
            .resolve_curve(ProductId::new(8), Sex::Female)
            .unwrap_err();
        assert!(matches!(
            err,
            PlanningError::StandardsNotFound { sex: Sex::Female, .. }
        ));
    }

    #[test]
    fn test_production_standards() {
        let store = store();

        let resolved = store.production_standards(ProductId::new(7)).unwrap();
        assert_eq!(resolved.curve.sex, Sex::Female);
        assert_eq!(resolved.curve.len(), 1);

        // 沒有母雞資料時回傳空曲線
        let resolved = store.production_standards(ProductId::new(8)).unwrap();
        assert!(resolved.curve.is_empty());

        assert!(store.production_standards(ProductId::new(99)).is_err());
    }
}

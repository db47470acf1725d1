//! 標準資料唯讀存放區
//!
//! 明確建構、以依賴注入方式傳入；`load` / `reload` 控制生命週期，
//! 曲線依（產品, 性別）記憶化，資料更新後於下次查詢時重建。

use layplan_core::{Product, ProductId, Sex, StandardsCurve, StandardsEntry};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, PoisonError, RwLock};

use crate::dataset::StandardsDataset;
use crate::dirty_tracking::DirtyTracker;

type CurveKey = (ProductId, Sex);

/// 載入摘要
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadSummary {
    pub products: usize,
    pub entries: usize,
}

/// 清除摘要
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearSummary {
    pub products_deleted: usize,
    pub entries_deleted: usize,
}

/// 曲線快取
#[derive(Debug, Default)]
struct CurveCache {
    curves: HashMap<CurveKey, Arc<StandardsCurve>>,
    dirty: DirtyTracker<CurveKey>,
}

/// 標準資料存放區
#[derive(Debug, Default)]
pub struct StandardsStore {
    products: BTreeMap<ProductId, Product>,
    entries: HashMap<CurveKey, BTreeMap<u32, StandardsEntry>>,
    cache: RwLock<CurveCache>,
}

impl StandardsStore {
    /// 創建空的存放區
    pub fn new() -> Self {
        Self::default()
    }

    /// 從資料集建立
    pub fn from_dataset(dataset: StandardsDataset) -> Self {
        let mut store = Self::new();
        store.load(dataset);
        store
    }

    /// 載入資料集（以 upsert 方式合併到現有資料）
    pub fn load(&mut self, dataset: StandardsDataset) -> LoadSummary {
        let products = self.upsert_products(dataset.products);
        let entries = self.upsert_entries(dataset.standards);

        tracing::info!("標準資料載入完成：產品 {} 筆，標準 {} 筆", products, entries);

        LoadSummary { products, entries }
    }

    /// 重新載入（清除所有資料與快取後載入）
    pub fn reload(&mut self, dataset: StandardsDataset) -> LoadSummary {
        let cleared = self.clear();
        tracing::debug!(
            "重新載入前清除：產品 {} 筆，標準 {} 筆",
            cleared.products_deleted,
            cleared.entries_deleted
        );
        self.load(dataset)
    }

    /// 清除所有資料與快取
    pub fn clear(&mut self) -> ClearSummary {
        let summary = ClearSummary {
            products_deleted: self.products.len(),
            entries_deleted: self.entry_count(),
        };

        self.products.clear();
        self.entries.clear();
        let cache = self.cache.get_mut().unwrap_or_else(PoisonError::into_inner);
        cache.curves.clear();
        cache.dirty.clear();

        summary
    }

    /// 新增或更新產品
    pub fn upsert_products(&mut self, products: impl IntoIterator<Item = Product>) -> usize {
        let mut count = 0;
        for product in products {
            self.products.insert(product.id, product);
            count += 1;
        }
        count
    }

    /// 新增或更新標準資料（同產品、同性別、同週者覆蓋）
    pub fn upsert_entries(&mut self, entries: impl IntoIterator<Item = StandardsEntry>) -> usize {
        let cache = self.cache.get_mut().unwrap_or_else(PoisonError::into_inner);
        let mut count = 0;

        for entry in entries {
            if !self.products.contains_key(&entry.product_id) {
                tracing::warn!(
                    "標準資料參照不存在的產品 {}（第 {} 週）",
                    entry.product_id,
                    entry.week
                );
            }

            let key = (entry.product_id, entry.sex);
            cache.dirty.mark_dirty(key);
            self.entries.entry(key).or_default().insert(entry.week, entry);
            count += 1;
        }

        count
    }

    /// 依品種名稱排序的所有產品
    pub fn products(&self) -> Vec<&Product> {
        let mut products: Vec<&Product> = self.products.values().collect();
        products.sort_by(|a, b| a.breed.cmp(&b.breed).then(a.id.cmp(&b.id)));
        products
    }

    /// 查詢產品
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    /// 查詢單週標準資料
    pub fn entry(&self, id: ProductId, sex: Sex, week: u32) -> Option<&StandardsEntry> {
        self.entries.get(&(id, sex)).and_then(|weeks| weeks.get(&week))
    }

    /// 查詢標準曲線（記憶化）
    ///
    /// 沒有任何資料時回傳 `None`。
    pub fn curve(&self, id: ProductId, sex: Sex) -> Option<Arc<StandardsCurve>> {
        let key = (id, sex);
        let weeks = self.entries.get(&key).filter(|weeks| !weeks.is_empty())?;

        {
            let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
            if !cache.dirty.is_dirty(&key) {
                if let Some(curve) = cache.curves.get(&key) {
                    return Some(Arc::clone(curve));
                }
            }
        }

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        // 取得寫鎖期間可能已被其他執行緒重建
        if !cache.dirty.is_dirty(&key) {
            if let Some(curve) = cache.curves.get(&key) {
                return Some(Arc::clone(curve));
            }
        }

        tracing::debug!("重建標準曲線：產品 {}，性別 {}", id, sex);
        let curve = Arc::new(StandardsCurve::from_entries(
            id,
            sex,
            weeks.values().cloned().collect(),
        ));
        cache.curves.insert(key, Arc::clone(&curve));
        cache.dirty.clear_key(&key);

        Some(curve)
    }

    /// 產品數量
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// 標準資料筆數
    pub fn entry_count(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(id: u32, breed: &str) -> Product {
        Product::new(ProductId::new(id), breed.to_string())
    }

    fn entry(product_id: u32, week: u32, hd: i64) -> StandardsEntry {
        StandardsEntry::new(ProductId::new(product_id), week, Sex::Female)
            .with_hd_pct(Decimal::from(hd))
    }

    fn sample_store() -> StandardsStore {
        StandardsStore::from_dataset(StandardsDataset::new(
            vec![product(7, "Layer Brown"), product(3, "Broiler Parent")],
            vec![
                entry(7, 22, 60),
                entry(7, 20, 10),
                entry(7, 21, 40),
                StandardsEntry::new(ProductId::new(7), 20, Sex::Male),
            ],
        ))
    }

    #[test]
    fn test_load_counts() {
        let store = sample_store();
        assert_eq!(store.product_count(), 2);
        assert_eq!(store.entry_count(), 4);
    }

    #[test]
    fn test_products_sorted_by_breed() {
        let store = sample_store();
        let breeds: Vec<&str> = store.products().iter().map(|p| p.breed.as_str()).collect();
        assert_eq!(breeds, vec!["Broiler Parent", "Layer Brown"]);
    }

    #[test]
    fn test_curve_sorted_per_sex() {
        let store = sample_store();

        let female = store.curve(ProductId::new(7), Sex::Female).unwrap();
        let weeks: Vec<u32> = female.iter().map(|e| e.week).collect();
        assert_eq!(weeks, vec![20, 21, 22]);

        let male = store.curve(ProductId::new(7), Sex::Male).unwrap();
        assert_eq!(male.len(), 1);

        assert!(store.curve(ProductId::new(3), Sex::Female).is_none());
    }

    #[test]
    fn test_curve_is_memoized() {
        let store = sample_store();
        let first = store.curve(ProductId::new(7), Sex::Female).unwrap();
        let second = store.curve(ProductId::new(7), Sex::Female).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_upsert_invalidates_memoized_curve() {
        let mut store = sample_store();
        let before = store.curve(ProductId::new(7), Sex::Female).unwrap();

        store.upsert_entries(vec![entry(7, 21, 55), entry(7, 23, 70)]);
        let after = store.curve(ProductId::new(7), Sex::Female).unwrap();

        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(after.len(), 4);
        assert_eq!(
            after.get(21).and_then(|e| e.hd_pct_production),
            Some(Decimal::from(55))
        );
        // 舊的快照不受影響
        assert_eq!(before.len(), 3);
    }

    #[test]
    fn test_entry_lookup() {
        let store = sample_store();
        assert!(store.entry(ProductId::new(7), Sex::Female, 21).is_some());
        assert!(store.entry(ProductId::new(7), Sex::Female, 30).is_none());
    }

    #[test]
    fn test_reload_replaces_everything() {
        let mut store = sample_store();
        let _ = store.curve(ProductId::new(7), Sex::Female);

        let summary = store.reload(StandardsDataset::new(
            vec![product(9, "Layer White")],
            vec![entry(9, 19, 5)],
        ));

        assert_eq!(summary, LoadSummary { products: 1, entries: 1 });
        assert!(store.product(ProductId::new(7)).is_none());
        assert!(store.curve(ProductId::new(7), Sex::Female).is_none());
        assert_eq!(store.curve(ProductId::new(9), Sex::Female).unwrap().len(), 1);
    }

    #[test]
    fn test_clear_summary() {
        let mut store = sample_store();
        let summary = store.clear();

        assert_eq!(summary.products_deleted, 2);
        assert_eq!(summary.entries_deleted, 4);
        assert_eq!(store.product_count(), 0);
    }
}

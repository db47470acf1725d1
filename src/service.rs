//! 產蛋計劃服務：雞群快照 → 品種標準 → 計劃表

use layplan_cache::ReferenceLookup;
use layplan_calc::PlanningCalculator;
use layplan_core::{PlanningConfig, PlanningError, PlanningResult, Result, Sex};
use rayon::prelude::*;

use crate::provider::FlockSnapshotProvider;

/// 產蛋計劃服務
pub struct PlanningService<P, L> {
    provider: P,
    lookup: L,
    calculator: PlanningCalculator,
}

impl<P, L> PlanningService<P, L>
where
    P: FlockSnapshotProvider,
    L: ReferenceLookup,
{
    /// 創建新的計劃服務
    pub fn new(provider: P, lookup: L, config: PlanningConfig) -> Self {
        Self {
            provider,
            lookup,
            calculator: PlanningCalculator::new(config),
        }
    }

    /// 執行單一雞群的產蛋計劃
    ///
    /// 檢查順序：雞群 → 孵化日 → 品種指定 → 品種ID格式 → 品種 → 標準曲線
    pub fn execute(&self, flock_id: u64, owner_id: u64) -> Result<PlanningResult> {
        self.try_execute(flock_id, owner_id).map_err(|err| {
            tracing::warn!("雞群 {} 產蛋計劃失敗 ({}): {}", flock_id, err.status_code(), err);
            err
        })
    }

    fn try_execute(&self, flock_id: u64, owner_id: u64) -> Result<PlanningResult> {
        let flock = self
            .provider
            .find_flock(flock_id, owner_id)
            .ok_or(PlanningError::FlockNotFound(flock_id))?;

        flock.require_hatch_date()?;
        let product_id = flock.require_product_id()?;
        tracing::debug!("雞群 {} 使用品種 {}", flock_id, product_id);

        // 產蛋指標只對母雞定義

        let resolved = self
            .lookup
            .resolve_curve(product_id, Sex::Female)?;

        self.calculator
            .calculate(&flock, Some(&resolved.product), &resolved.curve)
    }

    /// 批次執行多個雞群的產蛋計劃（平行計算，各雞群結果互相獨立）
    pub fn execute_batch(
        &self,
        flock_ids: &[u64],
        owner_id: u64,
    ) -> Vec<(u64, Result<PlanningResult>)>
    where
        P: Sync,
        L: Sync,
    {
        tracing::info!("批次產蛋計劃：{} 個雞群", flock_ids.len());

        flock_ids
            .par_iter()
            .map(|&flock_id| (flock_id, self.execute(flock_id, owner_id)))
            .collect()
    }

    /// 獲取參考資料查詢引用
    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// 獲取雞群提供者引用
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

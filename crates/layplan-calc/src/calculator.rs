//! 產蛋計劃主計算器

use chrono::NaiveDate;
use layplan_core::{
    calendar, FlockSnapshot, FlockSummary, PlanWarning, PlanningConfig, PlanningError,
    PlanningResult, PlanningRow, Product, ProductSummary, StandardsCurve, StandardsEntry,
};

use crate::carry_forward::{CarryForwardCursor, WeekSource};
use crate::rates::RateConverter;
use crate::start_week::StartWeekDetector;

/// 計劃表與附帶警告
struct Projection {
    rows: Vec<PlanningRow>,
    warnings: Vec<PlanWarning>,
}

/// 產蛋計劃計算器
///
/// 純計算：輸入皆已取得，計算過程不做 I/O、不修改共享狀態。
pub struct PlanningCalculator {
    config: PlanningConfig,
    converter: RateConverter,
}

impl PlanningCalculator {
    /// 創建新的計劃計算器
    pub fn new(config: PlanningConfig) -> Self {
        let converter = RateConverter::new(config.rounding_rule);
        Self { config, converter }
    }

    /// 主計劃計算入口
    ///
    /// 全有或全無：任何前置檢查失敗都不會回傳部分結果。
    pub fn calculate(
        &self,
        flock: &FlockSnapshot,
        product: Option<&Product>,
        curve: &StandardsCurve,
    ) -> layplan_core::Result<PlanningResult> {
        let start_time = std::time::Instant::now();

        let hatch_date = flock.require_hatch_date()?;
        if curve.is_empty() {
            return Err(PlanningError::StandardsNotFound {
                product_id: curve.product_id,
                sex: curve.sex,
            });
        }

        tracing::info!(
            "開始產蛋計劃計算：雞群 {}，產品 {}，產蛋期 {} 週，標準 {} 筆",
            flock.id,
            curve.product_id,
            flock.production_period,
            curve.len()
        );

        // Step 1: 起始週判定
        let start_week = StartWeekDetector::determine(curve);
        tracing::debug!("Step 1: 起始週 = {}", start_week);

        // Step 2: 逐週產生計劃表
        tracing::debug!("Step 2: 產生計劃表");
        let projection = self.project(
            hatch_date,
            flock.hens_housed,
            flock.production_period,
            start_week,
            curve,
        )?;

        let mut result = PlanningResult::empty(
            FlockSummary::from_snapshot(flock, hatch_date),
            product.map(ProductSummary::from),
            start_week,
        );
        result.rows = projection.rows;
        if self.config.emit_warnings {
            result.warnings = projection.warnings;
        }
        result.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!(
            "產蛋計劃計算完成 (plan {})，耗時 {:?}，共 {} 週",
            result.plan_id,
            start_time.elapsed(),
            result.rows.len()
        );

        Ok(result)
    }

    /// 產生計劃表（共 `production_period + 1` 週，含兩端）
    pub fn generate_rows(
        &self,
        hatch_date: NaiveDate,
        hens_housed: u32,
        production_period: u32,
        start_week: u32,
        curve: &StandardsCurve,
    ) -> layplan_core::Result<Vec<PlanningRow>> {
        self.project(hatch_date, hens_housed, production_period, start_week, curve)
            .map(|projection| projection.rows)
    }

    fn project(
        &self,
        hatch_date: NaiveDate,
        hens_housed: u32,
        production_period: u32,
        start_week: u32,
        curve: &StandardsCurve,
    ) -> layplan_core::Result<Projection> {
        let week_count = production_period.checked_add(1).ok_or_else(|| {
            PlanningError::InvalidDate(format!("production period too long: {production_period}"))
        })?;
        let periods = calendar::weekly_periods(hatch_date, start_week, week_count)?;

        let mut cursor = CarryForwardCursor::new(curve.entries());
        let mut rows = Vec::with_capacity(periods.len());
        let mut warnings = Vec::new();

        for (week_index, period) in (0..week_count).zip(periods) {
            // 期間標籤已驗證過不溢位
            let standard_week = start_week + week_index;

            let resolved = cursor.resolve(standard_week);
            match resolved.source {
                WeekSource::Exact => {}
                WeekSource::CarriedForward { from_week } => {
                    tracing::debug!("第 {} 週無標準資料，延用第 {} 週", standard_week, from_week);
                    warnings.push(PlanWarning::info(
                        standard_week,
                        format!("no standards for week {standard_week}, carried forward from week {from_week}"),
                    ));
                }
                WeekSource::Missing => {
                    warnings.push(PlanWarning::warning(
                        standard_week,
                        format!("no standards available for week {standard_week}"),
                    ));
                }
            }

            rows.push(self.build_row(
                period,
                week_index,
                standard_week,
                hens_housed,
                resolved.entry,
            ));
        }

        Ok(Projection { rows, warnings })
    }

    /// 將標準比率換算為單週計劃資料
    fn build_row(
        &self,
        period: String,
        week_index: u32,
        standard_week: u32,
        hens_housed: u32,
        standard: Option<&StandardsEntry>,
    ) -> PlanningRow {
        let pct_production = standard
            .map(StandardsEntry::production_pct)
            .unwrap_or_default();

        // 累計值直接取自標準曲線的每隻母雞累計比率，不由本表逐週加總
        PlanningRow {
            period,
            week_index,
            standard_week,
            hens_housed,
            eggs: self.converter.weekly_eggs(hens_housed, pct_production),
            hatching_eggs: self
                .converter
                .per_hen(hens_housed, standard.and_then(|s| s.he_week)),
            saleable_chicks: self
                .converter
                .per_hen(hens_housed, standard.and_then(|s| s.saleable_chicks_week)),
            hatching_eggs_cum: self
                .converter
                .per_hen(hens_housed, standard.and_then(|s| s.he_cum)),
            saleable_chicks_cum: self
                .converter
                .per_hen(hens_housed, standard.and_then(|s| s.saleable_chicks_cum)),
            hd_pct_production: standard.and_then(|s| s.hd_pct_production),
            hh_pct_production: standard.and_then(|s| s.hh_pct_production),
        }
    }

    /// 獲取配置引用
    pub fn config(&self) -> &PlanningConfig {
        &self.config
    }
}

impl Default for PlanningCalculator {
    fn default() -> Self {
        Self::new(PlanningConfig::default())
    }
}

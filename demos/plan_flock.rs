//! 單一雞群產蛋計劃示例
//!
//! 用法：cargo run --example plan_flock [standards.json]

use chrono::NaiveDate;
use layplan::{
    logging, FlockSnapshot, InMemoryFlockProvider, PlanningConfig, PlanningService, Product,
    ProductId, Sex, StandardsDataset, StandardsEntry, StandardsStore,
};
use rust_decimal::Decimal;

fn sample_dataset() -> StandardsDataset {
    let product = ProductId::new(7);
    let mut standards = vec![
        StandardsEntry::new(product, 18, Sex::Female).with_hd_pct(Decimal::ZERO),
        StandardsEntry::new(product, 19, Sex::Female).with_hd_pct(Decimal::new(52, 1)),
    ];
    // 第 20-30 週每兩週一筆，其餘週沿用
    for week in (20..=30).step_by(2) {
        standards.push(
            StandardsEntry::new(product, week, Sex::Female)
                .with_hd_pct(Decimal::from(60 + week))
                .with_he_week(Decimal::new(5, 0))
                .with_he_cum(Decimal::from((week - 19) * 5))
                .with_saleable_chicks_week(Decimal::new(41, 1))
                .with_saleable_chicks_cum(Decimal::new(i64::from(week - 19) * 41, 1)),
        );
    }

    StandardsDataset::new(
        vec![Product::new(product, "Layer Brown".to_string()).with_color("brown".to_string())],
        standards,
    )
}

fn main() -> anyhow::Result<()> {
    logging::init();

    println!("=== 產蛋計劃示例 ===\n");

    let dataset = match std::env::args().nth(1) {
        Some(path) => StandardsDataset::from_path(path)?,
        None => sample_dataset(),
    };
    let store = StandardsStore::from_dataset(dataset);

    let hatch_date =
        NaiveDate::from_ymd_opt(2025, 9, 1).ok_or_else(|| anyhow::anyhow!("無效的孵化日"))?;
    let flock = FlockSnapshot::new(1, 1, "House A".to_string())
        .with_farm_id(1)
        .with_hatch_date(hatch_date)
        .with_hens_housed(12_000)
        .with_production_period(12)
        .with_product_ref("7");

    let service = PlanningService::new(
        InMemoryFlockProvider::new().with_flock(flock),
        store,
        PlanningConfig::default(),
    );

    let result = service.execute(1, 1)?;

    println!(
        "雞群: {} (孵化日 {})，起始週: {}",
        result.flock.name, result.flock.hatch_date, result.start_week
    );
    println!("{:>8} {:>5} {:>8} {:>8} {:>8} {:>9}", "期間", "週齡", "產蛋", "種蛋", "雛雞", "種蛋累計");
    for row in &result.rows {
        println!(
            "{:>8} {:>5} {:>8} {:>8} {:>8} {:>9}",
            row.period,
            row.standard_week,
            row.eggs,
            row.hatching_eggs,
            row.saleable_chicks,
            row.hatching_eggs_cum
        );
    }
    println!("\n總產蛋數: {}，警告 {} 筆", result.total_eggs(), result.warnings.len());

    Ok(())
}

//! 日期窗口計算（ISO-8601 週曆）

use chrono::{Datelike, Days, NaiveDate};

use crate::{PlanningError, Result};

/// 每週天數
pub const DAYS_PER_WEEK: i64 = 7;

/// 日期加減天數（純日曆日期，無時區）
pub fn add_days(date: NaiveDate, days: i64) -> Result<NaiveDate> {
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.ok_or_else(|| PlanningError::InvalidDate(format!("{date} + {days} days")))
}

/// ISO 週數（1-53）
pub fn iso_week(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

/// ISO 週所屬年份
///
/// 跨年附近可能與日曆年不同：12/31 可能屬於下一年第 1 週，
/// 1/1 可能屬於上一年第 52 或 53 週。
pub fn iso_week_year(date: NaiveDate) -> i32 {
    date.iso_week().year()
}

/// 格式化期間標籤 "YYYY.WW"
pub fn format_period(date: NaiveDate) -> String {
    format!("{}.{:02}", iso_week_year(date), iso_week(date))
}

/// 標準週對應的期間標籤（孵化日 + 週齡 × 7 天）
pub fn period_for_week(hatch_date: NaiveDate, standard_week: u32) -> Result<String> {
    let date = add_days(hatch_date, i64::from(standard_week) * DAYS_PER_WEEK)?;
    Ok(format_period(date))
}

/// 連續週的期間標籤（從 `start_week` 起共 `count` 週）
pub fn weekly_periods(hatch_date: NaiveDate, start_week: u32, count: u32) -> Result<Vec<String>> {
    (0..count)
        .map(|offset| {
            let week = start_week.checked_add(offset).ok_or_else(|| {
                PlanningError::InvalidDate(format!("week overflow: {start_week} + {offset}"))
            })?;
            period_for_week(hatch_date, week)
        })
        .collect()
}

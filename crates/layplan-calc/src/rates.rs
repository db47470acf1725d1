//! 比率換算（百分比/每隻母雞比率 → 絕對數量）

use layplan_core::RoundingRule;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// 比率換算器
#[derive(Debug, Clone, Copy)]
pub struct RateConverter {
    rule: RoundingRule,
}

impl RateConverter {
    pub fn new(rule: RoundingRule) -> Self {
        Self { rule }
    }

    /// 當週產蛋數 = 入舍母雞數 × (產蛋率 / 100) × 7
    pub fn weekly_eggs(&self, hens_housed: u32, pct_production: Decimal) -> i64 {
        let daily_rate = pct_production / Decimal::ONE_HUNDRED;
        let eggs = Decimal::from(hens_housed)
            .checked_mul(daily_rate)
            .and_then(|v| v.checked_mul(Decimal::from(7)));
        self.to_count(eggs, daily_rate.is_sign_negative())
    }

    /// 每隻母雞比率換算為數量；比率為空時為 0
    pub fn per_hen(&self, hens_housed: u32, rate: Option<Decimal>) -> i64 {
        match rate {
            Some(rate) => self.to_count(
                Decimal::from(hens_housed).checked_mul(rate),
                rate.is_sign_negative(),
            ),
            None => 0,
        }
    }

    /// 取整為數量；超出 i64 範圍時飽和並記錄警告
    fn to_count(&self, value: Option<Decimal>, negative: bool) -> i64 {
        if let Some(count) = value.and_then(|v| self.rule.round(v).to_i64()) {
            return count;
        }

        tracing::warn!("數量超出範圍 ({:?})，以極值代替", value);
        if negative {
            i64::MIN
        } else {
            i64::MAX
        }
    }
}

impl Default for RateConverter {
    fn default() -> Self {
        Self::new(RoundingRule::HalfUp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_weekly_eggs_exact() {
        // 1000 × 0.853 × 7 = 5971
        let converter = RateConverter::default();
        assert_eq!(converter.weekly_eggs(1000, Decimal::new(853, 1)), 5971);
    }

    #[test]
    fn test_out_of_range_counts_saturate() {
        let converter = RateConverter::default();

        // 超出 i64 但未超出 Decimal
        assert_eq!(converter.per_hen(1_000_000, Some(Decimal::from(i64::MAX))), i64::MAX);
        assert_eq!(converter.per_hen(1_000_000, Some(Decimal::from(i64::MIN))), i64::MIN);
        // Decimal 乘法本身溢位
        assert_eq!(converter.per_hen(u32::MAX, Some(Decimal::MAX)), i64::MAX);
        assert_eq!(converter.weekly_eggs(u32::MAX, Decimal::MAX), i64::MAX);
    }

    #[rstest]
    // 1 × 0.5 × 7 = 3.5
    #[case(RoundingRule::HalfUp, 1, Decimal::from(50), 4)]
    #[case(RoundingRule::HalfEven, 1, Decimal::from(50), 4)]
    // 5 × 0.5 × 7 = 17.5
    #[case(RoundingRule::HalfUp, 5, Decimal::from(50), 18)]
    #[case(RoundingRule::HalfEven, 5, Decimal::from(50), 18)]
    // 3 × 0.5 × 7 = 10.5
    #[case(RoundingRule::HalfUp, 3, Decimal::from(50), 11)]
    #[case(RoundingRule::HalfEven, 3, Decimal::from(50), 10)]
    fn test_weekly_eggs_midpoint(
        #[case] rule: RoundingRule,
        #[case] hens: u32,
        #[case] pct: Decimal,
        #[case] expected: i64,
    ) {
        assert_eq!(RateConverter::new(rule).weekly_eggs(hens, pct), expected);
    }

    #[test]
    fn test_weekly_eggs_zero_pct() {
        assert_eq!(RateConverter::default().weekly_eggs(10_000, Decimal::ZERO), 0);
    }

    #[test]
    fn test_per_hen() {
        let converter = RateConverter::default();
        assert_eq!(converter.per_hen(10_000, Some(Decimal::new(40, 2))), 4000);
        // 3 × 0.5 = 1.5
        assert_eq!(converter.per_hen(3, Some(Decimal::new(5, 1))), 2);
        assert_eq!(converter.per_hen(10_000, None), 0);
    }
}

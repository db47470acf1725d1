//! 起始週判定

use layplan_core::StandardsCurve;

/// 起始週判定器
pub struct StartWeekDetector;

impl StartWeekDetector {
    /// 找出第一個開始產蛋的標準週
    ///
    /// 依週齡遞增掃描，回傳第一個 `hd > 0`（或 HD 為空且 `hh > 0`）的週；
    /// 整條曲線都沒有產蛋資料時回傳 0。
    pub fn determine(curve: &StandardsCurve) -> u32 {
        curve
            .iter()
            .find(|entry| entry.has_production())
            .map(|entry| entry.week)
            .unwrap_or(0)
    }
}

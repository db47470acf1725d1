//! 標準曲線延用（carry-forward）
//!
//! 以單次正向掃描合併「計劃週」與「排序後的曲線週」：
//! 命中的週成為新的最後有效標準；缺少的週沿用最後有效標準，
//! 不補 0、不內插。

use layplan_core::StandardsEntry;

/// 單週標準資料的來源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekSource {
    /// 曲線中有該週資料
    Exact,
    /// 該週缺資料，沿用較早週的資料
    CarriedForward { from_week: u32 },
    /// 尚未出現過任何有效標準
    Missing,
}

/// 解析結果
#[derive(Debug, Clone, Copy)]
pub struct ResolvedWeek<'a> {
    pub entry: Option<&'a StandardsEntry>,
    pub source: WeekSource,
}

/// 延用游標
///
/// 查詢週必須單調不減；整個計劃期的成本為 O(P + C)。
pub struct CarryForwardCursor<'a> {
    entries: &'a [StandardsEntry],
    position: usize,
    last_valid: Option<&'a StandardsEntry>,
}

impl<'a> CarryForwardCursor<'a> {
    /// `entries` 必須依週齡遞增且每週至多一筆
    pub fn new(entries: &'a [StandardsEntry]) -> Self {
        Self {
            entries,
            position: 0,
            last_valid: None,
        }
    }

    /// 解析指定週
    pub fn resolve(&mut self, week: u32) -> ResolvedWeek<'a> {
        // 跳過比查詢週早的資料（起始週之前的資料不作為延用來源）
        while self
            .entries
            .get(self.position)
            .map(|e| e.week < week)
            .unwrap_or(false)
        {
            self.position += 1;
        }

        if let Some(entry) = self.entries.get(self.position).filter(|e| e.week == week) {
            self.last_valid = Some(entry);
            self.position += 1;
            return ResolvedWeek {
                entry: Some(entry),
                source: WeekSource::Exact,
            };
        }

        match self.last_valid {
            Some(entry) => ResolvedWeek {
                entry: Some(entry),
                source: WeekSource::CarriedForward {
                    from_week: entry.week,
                },
            },
            None => ResolvedWeek {
                entry: None,
                source: WeekSource::Missing,
            },
        }
    }
}

use std::ops::AddAssign;

/// Search statistic collector.
/// It collects data during A* search.
pub trait SearchStatsCollector {
    /// Called before each board is expanded, can return false to cancel search process.
    #[inline(always)] fn expanded(&mut self) -> bool { true }
    /// Called for each newly discovered board.
    #[inline(always)] fn discovered(&mut self) { }
}

/// Search statistic collector that ignore all events.
impl SearchStatsCollector for () {}

impl SearchStatsCollector for u64 {
    #[inline(always)] fn expanded(&mut self) -> bool { *self += 1; true }
    #[inline(always)] fn discovered(&mut self) { *self += 1; }
}

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchAllStats {
    pub expanded: u64,
    pub discovered: u64
}

impl SearchAllStats {
    pub fn visits(&self) -> u64 { self.expanded + self.discovered }
}

impl AddAssign for SearchAllStats {
    fn add_assign(&mut self, rhs: Self) {
        self.expanded += rhs.expanded;
        self.discovered += rhs.discovered;
    }
}

impl SearchStatsCollector for SearchAllStats {
    #[inline(always)] fn expanded(&mut self) -> bool { self.expanded += 1; true }
    #[inline(always)] fn discovered(&mut self) { self.discovered += 1; }
}

/// Cancels the search after `limit` expansions.
pub struct Limited {
    pub expanded: u64,
    pub discovered: u64,
    pub limit: u64
}

impl Limited {
    pub fn with_limit(limit: u64) -> Self { Self{expanded: 0, discovered: 0, limit} }

    pub fn reset_visits(&mut self) { self.expanded = 0; self.discovered = 0; }

    pub fn reset_limit(&mut self, limit: u64) { self.reset_visits(); self.limit = limit; }

    pub fn visits(&self) -> u64 { self.expanded + self.discovered }
}

impl SearchStatsCollector for Limited {
    #[inline(always)] fn expanded(&mut self) -> bool {
        if self.expanded >= self.limit { return false; }
        self.expanded += 1;
        true
    }

    #[inline(always)] fn discovered(&mut self) { self.discovered += 1; }
}

impl From<&Limited> for SearchAllStats {
    fn from(limited: &Limited) -> Self {
        Self { expanded: limited.expanded, discovered: limited.discovered }
    }
}

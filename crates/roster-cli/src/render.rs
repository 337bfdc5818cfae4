//! Text presentation of dashboard data
//!
//! Each view is a `Display` wrapper so it can be printed or captured as a
//! string in tests.

use roster_core::{
    overview_bars, stacked_bars, CategoryBreakdown, StackedBar, SummaryStats, ViewKind,
    WorkforceRecord,
};
use roster_report::ReportMetadata;
use std::fmt::{self, Display, Formatter};

/// Width of the longest bar, in cells
const BAR_WIDTH: u64 = 40;

fn bar(value: u64, max: u64, glyph: char) -> String {
    if max == 0 {
        return String::new();
    }
    let cells = (value.saturating_mul(BAR_WIDTH) + max / 2) / max;
    let cells = usize::try_from(cells).unwrap_or(0);
    std::iter::repeat(glyph).take(cells).collect()
}

/// Category table of the workforce page
pub struct RecordsTable<'a>(pub &'a [WorkforceRecord]);

impl Display for RecordsTable<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "لا توجد بيانات حالياً، ابدأ بإضافة فئة جديدة.");
        }
        writeln!(
            f,
            "{:<20} {:>8} {:>8} {:>8} {:>10}",
            "category", "total", "occupied", "vacant", "occupancy"
        )?;
        for r in self.0 {
            writeln!(
                f,
                "{:<20} {:>8} {:>8} {:>8} {:>9}%",
                r.name(),
                r.total(),
                r.occupied(),
                r.vacant(),
                r.occupancy_rate()
            )?;
        }
        Ok(())
    }
}

/// Headline stat cards
pub struct SummaryCards {
    /// Current summary
    pub summary: SummaryStats,
    /// Largest vacancy count in one category
    pub largest_need: u64,
}

impl Display for SummaryCards {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = &self.summary;
        writeln!(f, "Total positions:   {}", s.total_positions)?;
        writeln!(f, "Occupied:          {} ({}% stability)", s.total_occupied, s.stability_rate)?;
        writeln!(f, "Vacant:            {} ({}% hiring need)", s.total_vacant, s.vacancy_rate)?;
        writeln!(f, "Largest need:      {}", self.largest_need)
    }
}

/// Staff-mix buckets
pub struct BreakdownLines(pub CategoryBreakdown);

impl Display for BreakdownLines {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let total = self.0.total();
        for slice in self.0.slices() {
            writeln!(
                f,
                "{:<14} {:>6} {:>5}%  {}",
                slice.label,
                slice.value,
                roster_core::rate(slice.value, total),
                slice.fill
            )?;
        }
        Ok(())
    }
}

/// Stacked occupied/vacant bars
pub struct StackedChart<'a>(pub &'a [StackedBar]);

impl Display for StackedChart<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let max = self.0.iter().map(|b| b.occupied + b.vacant).max().unwrap_or(0);
        for b in self.0 {
            let occupied = bar(b.occupied, max, '█');
            let vacant = bar(b.vacant, max, '░');
            writeln!(f, "{:<20} {occupied}{vacant} {}/{}", b.name, b.occupied, b.vacant)?;
        }
        Ok(())
    }
}

/// Vacancies per category
pub struct GapChart<'a>(pub &'a [WorkforceRecord]);

impl Display for GapChart<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let max = self.0.iter().map(WorkforceRecord::vacant).max().unwrap_or(0);
        for r in self.0 {
            writeln!(f, "{:<20} {} {}", r.name(), bar(r.vacant(), max, '█'), r.vacant())?;
        }
        Ok(())
    }
}

/// Everything one page shows
pub struct ViewPage<'a> {
    /// Page to render
    pub view: ViewKind,
    /// Current records
    pub records: &'a [WorkforceRecord],
    /// Current summary
    pub summary: SummaryStats,
    /// Current buckets
    pub breakdown: CategoryBreakdown,
    /// Report header details
    pub metadata: &'a ReportMetadata,
}

impl Display for ViewPage<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.view.title())?;
        writeln!(f, "{}", self.metadata.hospital)?;
        writeln!(f)?;

        match self.view {
            ViewKind::Overview => {
                let cards = SummaryCards {
                    summary: self.summary,
                    largest_need: roster_core::largest_need(self.records),
                };
                writeln!(f, "{cards}")?;
                write!(f, "{}", StackedChart(&overview_bars(self.records)))?;
                writeln!(f)?;
                write!(f, "{}", BreakdownLines(self.breakdown))
            }
            ViewKind::Workforce => write!(f, "{}", RecordsTable(self.records)),
            ViewKind::Gaps => write!(f, "{}", GapChart(self.records)),
            ViewKind::Recommendations => {
                writeln!(f, "{} ({}) - {}", self.metadata.author, self.metadata.role, self.metadata.date)?;
                writeln!(f, "Run `roster report` to generate the strategic report.")?;
                write!(f, "{}", StackedChart(&stacked_bars(self.records)))
            }
        }
    }
}

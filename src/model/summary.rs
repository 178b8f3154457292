use super::{FloorPlan, Tally};

/// The quote shown to the customer: what will actually be built, what it
/// costs, and how the panels split between finishes.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignSummary {
    pub actual_size: String,
    pub panels_needed: String,
    pub total_cost: String,
    pub mirror_panels: String,
    pub opaque_panels: String,
}

impl DesignSummary {
    pub fn new(plan: &FloorPlan, tally: &Tally) -> Self {
        let coverage = &plan.coverage;
        let dimensions = &plan.dimensions;
        Self {
            actual_size: format!(
                "Actual Size: {:.1} x {:.1} ft ({:.1} sqft)",
                coverage.actual_width, coverage.actual_length, coverage.total_area
            ),
            panels_needed: format!(
                "Panels Needed: {} x {} = {} panels",
                dimensions.cols,
                dimensions.rows,
                dimensions.panel_count()
            ),
            total_cost: format!("Total Cost: ${:.2}", coverage.total_cost),
            mirror_panels: format!(
                "Mirror Panels: {} ({} {})",
                tally.mirror_count,
                tally.cases_mirror,
                cases_word(tally.cases_mirror)
            ),
            opaque_panels: format!(
                "Opaque Panels: {} ({} {})",
                tally.opaque_count,
                tally.cases_opaque,
                cases_word(tally.cases_opaque)
            ),
        }
    }

    pub fn lines(&self) -> [&str; 5] {
        [
            &self.actual_size,
            &self.panels_needed,
            &self.total_cost,
            &self.mirror_panels,
            &self.opaque_panels,
        ]
    }
}

fn cases_word(count: usize) -> &'static str {
    if count == 1 {
        "case"
    } else {
        "cases"
    }
}

impl std::fmt::Display for DesignSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

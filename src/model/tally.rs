use serde::{Deserialize, Serialize};

/// Panel and case counts for the current pattern. Always derived from a
/// `PatternGrid`, never stored alongside it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub opaque_count: usize,
    pub mirror_count: usize,
    pub total_count: usize,
    pub cases_opaque: usize,
    pub cases_mirror: usize,
    pub cases_total: usize,
}

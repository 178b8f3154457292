use std::num::NonZeroUsize;

use crate::model::{PanelFinish, PatternGrid, Tally, DEFAULT_CASE_CAPACITY};

/// Counts every panel of the grid by finish and works out how many cases of
/// each finish have to be shipped.
pub fn tally(grid: &PatternGrid, case_capacity: NonZeroUsize) -> Tally {
    let (opaque_count, mirror_count) =
        grid.finishes()
            .fold((0, 0), |(opaque, mirror), finish| match finish {
                PanelFinish::Opaque => (opaque + 1, mirror),
                PanelFinish::Mirror => (opaque, mirror + 1),
            });
    let total_count = opaque_count + mirror_count;

    Tally {
        opaque_count,
        mirror_count,
        total_count,
        cases_opaque: cases_for(opaque_count, case_capacity),
        cases_mirror: cases_for(mirror_count, case_capacity),
        cases_total: cases_for(total_count, case_capacity),
    }
}

pub fn cases_for(count: usize, case_capacity: NonZeroUsize) -> usize {
    count.div_ceil(case_capacity.get())
}

impl Tally {
    /// Tally with the standard ten panels per case.
    pub fn of(grid: &PatternGrid) -> Tally {
        let capacity = NonZeroUsize::new(DEFAULT_CASE_CAPACITY).unwrap_or(NonZeroUsize::MIN);
        tally(grid, capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GridDimensions;

    fn capacity(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_untouched_thirteen_by_twelve() {
        let grid = PatternGrid::new(GridDimensions::new(12, 13));
        let tally = Tally::of(&grid);

        assert_eq!(tally.opaque_count, 156);
        assert_eq!(tally.mirror_count, 0);
        assert_eq!(tally.total_count, 156);
        assert_eq!(tally.cases_opaque, 16);
        assert_eq!(tally.cases_mirror, 0);
        assert_eq!(tally.cases_total, 16);
    }

    #[test]
    fn test_counts_after_toggles() {
        let grid = PatternGrid::parse(
            "\
 0|#..|
 1|.#.|
 2|..#|",
        );
        let tally = tally(&grid, capacity(2));

        assert_eq!(tally.mirror_count, 3);
        assert_eq!(tally.opaque_count, 6);
        assert_eq!(tally.cases_mirror, 2);
        assert_eq!(tally.cases_opaque, 3);
        assert_eq!(tally.cases_total, 5);
    }

    #[test]
    fn test_reset_then_tally() {
        let mut grid = PatternGrid::new(GridDimensions::new(4, 7));
        grid.fill_checkerboard();
        grid.reset();

        let tally = Tally::of(&grid);
        assert_eq!(tally.opaque_count, 28);
        assert_eq!(tally.mirror_count, 0);
    }

    #[test]
    fn test_uninitialized_grid_tallies_to_zero() {
        assert_eq!(Tally::of(&PatternGrid::default()), Tally::default());
    }

    #[test]
    fn test_cases_for() {
        assert_eq!(cases_for(0, capacity(10)), 0);
        assert_eq!(cases_for(1, capacity(10)), 1);
        assert_eq!(cases_for(10, capacity(10)), 1);
        assert_eq!(cases_for(11, capacity(10)), 2);
        assert_eq!(cases_for(7, capacity(1)), 7);
    }
}

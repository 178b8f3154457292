//! Property tests for floor planning and the pattern grid.
//!
//! 1. Grid dimensions are the smallest whole panel counts covering the floor.
//! 2. Cost equals panel count times panel area times unit price.
//! 3. Opaque plus mirror always equals the panel count.
//! 4. Toggling a panel twice restores the grid.
//! 5. Reset leaves every panel opaque.
//! 6. Any shape change resets the pattern.
//! 7. Planning any finite size either covers the floor within the per-side
//!    panel cap or refuses it with `FloorTooLarge`.

use dancefloor::designer::{plan_floor, tally};
use dancefloor::model::{
    GridDimensions, PanelFinish, PanelSpec, PatternGrid, Tally, MAX_PANELS_PER_SIDE,
};
use dancefloor::{Axis, DesignerError};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Toggle(usize, usize),
    Reset,
    Checkerboard,
}

fn spec_strategy() -> impl Strategy<Value = PanelSpec> {
    (0.1f64..10.0, 0.0f64..100.0, 1usize..=50)
        .prop_map(|(size, cost, capacity)| PanelSpec::new(size, cost, capacity).unwrap())
}

fn side_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![0.01f64..1.0, 1.0f64..200.0]
}

fn wide_side_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![1.0f64..1_000.0, 1_000.0f64..1e6, 1e6f64..1e300]
}

fn dims_strategy() -> impl Strategy<Value = GridDimensions> {
    (1usize..=16, 1usize..=16).prop_map(|(rows, cols)| GridDimensions::new(rows, cols))
}

fn cell_strategy() -> impl Strategy<Value = (GridDimensions, usize, usize)> {
    dims_strategy().prop_flat_map(|dims| (Just(dims), 0..dims.rows, 0..dims.cols))
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0usize..20, 0usize..20).prop_map(|(r, c)| Op::Toggle(r, c)),
        1 => Just(Op::Reset),
        1 => Just(Op::Checkerboard),
    ]
}

fn apply(grid: &mut PatternGrid, op: &Op) {
    match op {
        Op::Toggle(row, col) => {
            let in_range = *row < grid.rows() && *col < grid.cols();
            let before = grid.clone();
            let result = grid.toggle(*row, *col);
            assert_eq!(result.is_ok(), in_range);
            if !in_range {
                assert_eq!(*grid, before);
            }
        }
        Op::Reset => grid.reset(),
        Op::Checkerboard => grid.fill_checkerboard(),
    }
}

proptest! {
    #[test]
    fn dimensions_are_minimal_cover(
        width in side_strategy(),
        length in side_strategy(),
        spec in spec_strategy(),
    ) {
        let plan = plan_floor(width, length, &spec).unwrap();
        let panel = spec.panel_size_ft();
        let dims = plan.dimensions;

        prop_assert!(dims.cols >= 1 && dims.rows >= 1);
        prop_assert!(dims.cols as f64 * panel >= width);
        prop_assert!((dims.cols - 1) as f64 * panel < width);
        prop_assert!(dims.rows as f64 * panel >= length);
        prop_assert!((dims.rows - 1) as f64 * panel < length);
        prop_assert!(plan.coverage.actual_width >= width);
        prop_assert!(plan.coverage.actual_length >= length);
    }

    #[test]
    fn cost_matches_panel_area(
        width in side_strategy(),
        length in side_strategy(),
        spec in spec_strategy(),
    ) {
        let plan = plan_floor(width, length, &spec).unwrap();
        let panel = spec.panel_size_ft();
        let expected = plan.dimensions.rows as f64
            * plan.dimensions.cols as f64
            * panel
            * panel
            * spec.cost_per_sqft();

        let coverage = plan.coverage;
        prop_assert_eq!(coverage.total_area, coverage.actual_width * coverage.actual_length);
        prop_assert!((coverage.total_cost - expected).abs() <= 1e-9 * expected.max(1.0));
    }

    #[test]
    fn any_size_is_planned_or_refused(
        width in wide_side_strategy(),
        length in wide_side_strategy(),
        spec in spec_strategy(),
    ) {
        let panel = spec.panel_size_ft();
        match plan_floor(width, length, &spec) {
            Ok(plan) => {
                let dims = plan.dimensions;
                prop_assert!(dims.cols <= MAX_PANELS_PER_SIDE);
                prop_assert!(dims.rows <= MAX_PANELS_PER_SIDE);
                prop_assert!(dims.cols as f64 * panel >= width);
                prop_assert!(dims.rows as f64 * panel >= length);
                prop_assert!(dims.checked_panel_count().is_some());
            }
            Err(DesignerError::FloorTooLarge { axis, value, max_panels }) => {
                prop_assert_eq!(max_panels, MAX_PANELS_PER_SIDE);
                let expected = match axis {
                    Axis::Width => width,
                    Axis::Length => length,
                };
                prop_assert_eq!(value, expected);
                prop_assert!(value / panel > (MAX_PANELS_PER_SIDE - 1) as f64);
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    #[test]
    fn counts_always_sum_to_panel_count(
        dims in dims_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..40),
        capacity in 1usize..=25,
    ) {
        let mut grid = PatternGrid::new(dims);
        let capacity = std::num::NonZeroUsize::new(capacity).unwrap();
        for op in &ops {
            apply(&mut grid, op);
            let tally = tally(&grid, capacity);
            prop_assert_eq!(tally.opaque_count + tally.mirror_count, dims.panel_count());
            prop_assert_eq!(tally.total_count, dims.panel_count());
            prop_assert_eq!(tally.cases_mirror, tally.mirror_count.div_ceil(capacity.get()));
        }
    }

    #[test]
    fn toggle_twice_is_identity(
        (dims, row, col) in cell_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..20),
    ) {
        let mut grid = PatternGrid::new(dims);
        for op in &ops {
            apply(&mut grid, op);
        }

        let before = grid.clone();
        grid.toggle(row, col).unwrap();
        grid.toggle(row, col).unwrap();
        prop_assert_eq!(grid, before);
    }

    #[test]
    fn reset_leaves_everything_opaque(
        dims in dims_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..20),
    ) {
        let mut grid = PatternGrid::new(dims);
        for op in &ops {
            apply(&mut grid, op);
        }
        grid.reset();

        let tally = Tally::of(&grid);
        prop_assert_eq!(tally.opaque_count, dims.panel_count());
        prop_assert_eq!(tally.mirror_count, 0);
    }

    #[test]
    fn shape_change_resets_pattern(
        from in dims_strategy(),
        to in dims_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..20),
    ) {
        let mut grid = PatternGrid::new(from);
        for op in &ops {
            apply(&mut grid, op);
        }
        let before = grid.clone();

        let reallocated = grid.resize(to);
        prop_assert_eq!(reallocated, from != to);
        prop_assert_eq!(grid.dimensions(), to);
        if reallocated {
            prop_assert!(grid.finishes().all(|finish| finish == PanelFinish::Opaque));
        } else {
            prop_assert_eq!(grid, before);
        }
    }
}

#[test]
fn twelve_by_twelve_to_twelve_by_thirteen_resets() {
    let mut grid = PatternGrid::new(GridDimensions::new(12, 12));
    grid.fill_checkerboard();
    grid.toggle(11, 11).unwrap();

    assert!(grid.resize(GridDimensions::new(12, 13)));
    assert_eq!(Tally::of(&grid).mirror_count, 0);
    assert_eq!(Tally::of(&grid).opaque_count, 156);
}

#[test]
fn floor_just_past_the_cap_is_refused() {
    let spec = PanelSpec::new(2.0, 10.0, 10).unwrap();
    let edge = MAX_PANELS_PER_SIDE as f64 * 2.0;

    let plan = plan_floor(edge, edge, &spec).unwrap();
    assert_eq!(
        plan.dimensions,
        GridDimensions::new(MAX_PANELS_PER_SIDE, MAX_PANELS_PER_SIDE)
    );

    assert!(matches!(
        plan_floor(edge, edge + 0.01, &spec),
        Err(DesignerError::FloorTooLarge {
            axis: Axis::Length,
            ..
        })
    ));
}

use log::trace;

use crate::error::{Axis, DesignerError, Result};
use crate::model::{
    CoverageResult, FloorPlan, FloorRequest, GridDimensions, PanelSpec, MAX_PANELS_PER_SIDE,
};

/// Works out how many whole panels cover the requested floor and what the
/// resulting floor costs. Partial panels are not sold, so every side rounds up.
/// A side needing more than [`MAX_PANELS_PER_SIDE`] panels is refused.
pub fn plan(request: FloorRequest, spec: &PanelSpec) -> Result<FloorPlan> {
    request.validate()?;

    let panel_size = spec.panel_size_ft();
    let cols = panels_to_cover(Axis::Width, request.width, panel_size)?;
    let rows = panels_to_cover(Axis::Length, request.length, panel_size)?;
    let dimensions = GridDimensions::new(rows, cols);

    let actual_width = dimensions.cols as f64 * panel_size;
    let actual_length = dimensions.rows as f64 * panel_size;
    let total_area = actual_width * actual_length;
    let coverage = CoverageResult {
        actual_width,
        actual_length,
        total_area,
        total_cost: total_area * spec.cost_per_sqft(),
    };

    trace!(
        target: "planner",
        "Planned {:.3} x {:.3} ft as {} panels ({} cols x {} rows), cost {:.2}",
        request.width,
        request.length,
        dimensions.panel_count(),
        dimensions.cols,
        dimensions.rows,
        coverage.total_cost
    );

    Ok(FloorPlan {
        request,
        dimensions,
        coverage,
    })
}

pub fn plan_floor(width: f64, length: f64, spec: &PanelSpec) -> Result<FloorPlan> {
    plan(FloorRequest::new(width, length), spec)
}

/// Smallest `n` with `n * panel_size >= extent`.
///
/// The quotient can land a hair on the wrong side of an integer, so the result
/// is nudged until both `n * panel_size >= extent` and
/// `(n - 1) * panel_size < extent` hold in f64 arithmetic.
fn panels_to_cover(axis: Axis, extent: f64, panel_size: f64) -> Result<usize> {
    let too_large = DesignerError::FloorTooLarge {
        axis,
        value: extent,
        max_panels: MAX_PANELS_PER_SIDE,
    };

    let quotient = (extent / panel_size).ceil().max(1.0);
    if !quotient.is_finite() || quotient > MAX_PANELS_PER_SIDE as f64 {
        return Err(too_large);
    }

    let mut count = quotient as usize;
    while (count as f64) * panel_size < extent {
        count += 1;
    }
    while count > 1 && ((count - 1) as f64) * panel_size >= extent {
        count -= 1;
    }

    if count > MAX_PANELS_PER_SIDE {
        return Err(too_large);
    }
    Ok(count)
}

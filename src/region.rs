use std::fmt;

use num_traits::Float;

use crate::camera::Camera;
use crate::cover::covers;
use crate::error::Result;
use crate::pane::{Pane, panes};
use crate::span::inc::SpanInc;

/// Returns true if every (distance, light) point of the rectangle |distance| x
/// |light| is inside some camera's rectangle.
///
/// Fails with `Error::InvalidRange` if either target span is empty.
pub fn check_region<T: Float + fmt::Display>(
    distance: &SpanInc<T>,
    light: &SpanInc<T>,
    cameras: &[Camera<T>],
) -> Result<bool> {
    Ok(first_uncovered_pane(distance, light, cameras)?.is_none())
}

/// Sweeps the distance panes in ascending order and returns the first one in
/// which the active cameras don't cover |light|, or None if there isn't one.
///
/// A point |distance| is handled as one point pane, so only cameras whose
/// distance span contains that point count.
pub fn first_uncovered_pane<T: Float + fmt::Display>(
    distance: &SpanInc<T>,
    light: &SpanInc<T>,
    cameras: &[Camera<T>],
) -> Result<Option<Pane<T>>> {
    distance.validate("distance")?;
    light.validate("light")?;

    for pane in panes(distance, cameras) {
        if !covers(light, pane.active(cameras)) {
            log::debug!("light {light} uncovered in distance pane {pane}");
            return Ok(Some(pane));
        }
        log::trace!("distance pane {pane} covered");
    }
    Ok(None)
}

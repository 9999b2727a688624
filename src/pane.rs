use std::cmp::Ordering;

use derive_more::Display;
use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::span::inc::SpanInc;

/// A slice of the distance axis within which no camera switches on or off.
/// |sample| is a point strictly inside |span| (or the point itself, if |span| is
/// a single point), so the cameras active at |sample| are the cameras active
/// throughout the pane's interior.
#[must_use]
#[derive(Debug, Display, PartialEq, Copy, Clone, Serialize, Deserialize)]
#[display("{span}@{sample}")]
pub struct Pane<T> {
    pub span: SpanInc<T>,
    pub sample: T,
}

impl<T: PartialOrd + Copy> Pane<T> {
    /// Light spans of the cameras whose distance span contains the sample.
    pub fn active<'a>(&self, cameras: &'a [Camera<T>]) -> impl Iterator<Item = SpanInc<T>> + 'a
    where
        T: 'a,
    {
        let sample = self.sample;
        cameras.iter().filter(move |c| c.distance.contains(&sample)).map(|c| c.light)
    }
}

/// Both ends of |distance| plus every camera distance endpoint inside it,
/// deduplicated and sorted ascending.
#[must_use]
pub fn breakpoints<T: Float>(distance: &SpanInc<T>, cameras: &[Camera<T>]) -> Vec<T> {
    let mut points = vec![distance.st, distance.en];
    points.extend(
        cameras
            .iter()
            .flat_map(|c| [c.distance.st, c.distance.en])
            .filter(|p| distance.contains(p)),
    );
    points.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    points.dedup();
    points
}

/// Splits |distance| into panes at every breakpoint. A point |distance| gives a
/// single point pane sampled at that point. An empty |distance| gives no panes.
#[must_use]
pub fn panes<T: Float>(distance: &SpanInc<T>, cameras: &[Camera<T>]) -> Vec<Pane<T>> {
    if distance.is_empty() {
        return Vec::new();
    }
    let points = breakpoints(distance, cameras);
    if let &[p] = points.as_slice() {
        return vec![Pane { span: SpanInc::point(p), sample: p }];
    }
    points
        .windows(2)
        .map(|w| {
            let span = SpanInc::new(w[0], w[1]);
            Pane { span, sample: span.midpoint() }
        })
        .collect()
}

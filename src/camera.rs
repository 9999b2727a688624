use std::fmt;

use derive_more::Display;
use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::pane::Pane;
use crate::region::{check_region, first_uncovered_pane};
use crate::span::inc::SpanInc;

/// A camera that works for any subject whose distance and light level both fall
/// inside its closed spans.
#[must_use]
#[derive(
    Debug, Default, Display, Eq, PartialEq, Hash, Copy, Clone, Serialize, Deserialize,
)]
#[display("distance {distance} light {light}")]
pub struct Camera<T> {
    pub distance: SpanInc<T>,
    pub light: SpanInc<T>,
}

impl<T> Camera<T> {
    pub const fn new(distance: SpanInc<T>, light: SpanInc<T>) -> Self {
        Self { distance, light }
    }
}

impl<T> From<((T, T), (T, T))> for Camera<T> {
    fn from((distance, light): ((T, T), (T, T))) -> Self {
        Self::new(distance.into(), light.into())
    }
}

/// Rectangle of distance and light that a set of cameras has to cover.
#[must_use]
#[derive(
    Debug, Default, Display, Eq, PartialEq, Hash, Copy, Clone, Serialize, Deserialize,
)]
#[display("distance {distance} light {light}")]
pub struct Region<T> {
    pub distance: SpanInc<T>,
    pub light: SpanInc<T>,
}

impl<T> Region<T> {
    pub const fn new(distance: SpanInc<T>, light: SpanInc<T>) -> Self {
        Self { distance, light }
    }
}

impl<T: PartialOrd + fmt::Display> Region<T> {
    pub fn validate(&self) -> Result<()> {
        self.distance.validate("distance")?;
        self.light.validate("light")
    }
}

impl<T: Float + fmt::Display> Region<T> {
    pub fn is_covered_by(&self, cameras: &[Camera<T>]) -> Result<bool> {
        check_region(&self.distance, &self.light, cameras)
    }

    pub fn first_uncovered_pane(&self, cameras: &[Camera<T>]) -> Result<Option<Pane<T>>> {
        first_uncovered_pane(&self.distance, &self.light, cameras)
    }
}

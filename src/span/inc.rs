use std::cmp::Ordering;
use std::fmt;
use std::ops::RangeInclusive;

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::span::ops::{pmax, pmin};

/// Closed span [st, en]. Both endpoints are inside the span, so [x, x] is the
/// single point x. Spans with st > en, or with incomparable endpoints, are empty.
#[must_use]
#[derive(
    Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Copy, Clone, Serialize, Deserialize,
)]
pub struct SpanInc<T> {
    pub st: T,
    pub en: T,
}

impl<T: fmt::Display> fmt::Display for SpanInc<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.st, self.en)
    }
}

impl<T> SpanInc<T> {
    pub const fn new(st: T, en: T) -> Self {
        Self { st, en }
    }
}

impl<T: Copy> SpanInc<T> {
    pub const fn point(p: T) -> Self {
        Self { st: p, en: p }
    }

    #[must_use]
    pub const fn range_inclusive(&self) -> RangeInclusive<T> {
        self.st..=self.en
    }
}

impl<T: PartialOrd> SpanInc<T> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        // Incomparable endpoints (NaN) count as empty.
        matches!(self.st.partial_cmp(&self.en), None | Some(Ordering::Greater))
    }

    #[must_use]
    pub fn contains(&self, t: &T) -> bool {
        &self.st <= t && &self.en >= t
    }

    #[must_use]
    pub fn contains_span(&self, s: &Self) -> bool {
        self.st <= s.st && self.en >= s.en
    }
}

impl<T: PartialOrd + fmt::Display> SpanInc<T> {
    /// Checks this span is usable as a coverage target. |what| names the span
    /// in the error message.
    pub fn validate(&self, what: &str) -> Result<()> {
        if self.is_empty() {
            log::debug!("rejecting {what} target {self}");
            return Err(Error::InvalidRange(format!("{what} {self}")));
        }
        Ok(())
    }
}

impl<T: PartialOrd + Copy> SpanInc<T> {
    /// Smallest span containing both |a| and |b|. Empty spans are ignored.
    pub fn cover(a: &Self, b: &Self) -> Self {
        if a.is_empty() {
            *b
        } else if b.is_empty() {
            *a
        } else {
            Self::new(pmin(a.st, b.st), pmax(a.en, b.en))
        }
    }

    /// Clips this span to |s|. Returns None if nothing is left. NaN endpoints
    /// in |self| propagate into the result, which is then empty.
    #[must_use]
    pub fn intersect(&self, s: &Self) -> Option<Self> {
        let span = Self::new(pmax(self.st, s.st), pmin(self.en, s.en));
        if span.is_empty() { None } else { Some(span) }
    }
}

impl<T: Float> SpanInc<T> {
    /// Halving each endpoint first keeps this finite for any finite span.
    #[must_use]
    pub fn midpoint(&self) -> T {
        let two = T::one() + T::one();
        self.st / two + self.en / two
    }
}

impl<T: Copy> From<RangeInclusive<T>> for SpanInc<T> {
    fn from(r: RangeInclusive<T>) -> Self {
        Self::new(*r.start(), *r.end())
    }
}

impl<T> From<(T, T)> for SpanInc<T> {
    fn from((st, en): (T, T)) -> Self {
        Self::new(st, en)
    }
}

impl<T: Copy> From<SpanInc<T>> for RangeInclusive<T> {
    fn from(s: SpanInc<T>) -> Self {
        s.range_inclusive()
    }
}

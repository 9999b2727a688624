use std::cmp::Ordering;
use std::fmt;

use crate::error::Result;
use crate::span::inc::SpanInc;
use crate::span::ops::pmax;

fn by_start<T: PartialOrd>(a: &SpanInc<T>, b: &SpanInc<T>) -> Ordering {
    // Only non-empty spans get sorted, so starts are comparable.
    a.st.partial_cmp(&b.st).unwrap_or(Ordering::Equal)
}

/// Returns true if the union of |pieces| contains every point of |target|.
///
/// Pieces are clipped to |target| first, so pieces reaching outside it are fine
/// and pieces entirely outside it contribute nothing. Empty pieces are ignored.
/// Spans are closed, so pieces that only touch, like [0,4] and [4,7], leave no
/// gap between them. Nothing covers a target given no pieces, even a point.
///
/// |target| is assumed to be non-empty. An empty target clips every piece away
/// and so is reported as uncovered; use `try_covers` to reject it instead.
#[must_use]
pub fn covers<T: PartialOrd + Copy>(
    target: &SpanInc<T>,
    pieces: impl IntoIterator<Item = SpanInc<T>>,
) -> bool {
    let mut clipped: Vec<_> = pieces.into_iter().filter_map(|p| p.intersect(target)).collect();
    if clipped.is_empty() {
        return false;
    }
    clipped.sort_unstable_by(by_start);

    let mut covered_to = target.st;
    for piece in &clipped {
        if piece.st > covered_to {
            return false;
        }
        covered_to = pmax(covered_to, piece.en);
        if covered_to >= target.en {
            return true;
        }
    }
    covered_to >= target.en
}

/// Like `covers`, but fails with `Error::InvalidRange` if |target| is empty.
pub fn try_covers<T: PartialOrd + Copy + fmt::Display>(
    target: &SpanInc<T>,
    pieces: impl IntoIterator<Item = SpanInc<T>>,
) -> Result<bool> {
    target.validate("target")?;
    Ok(covers(target, pieces))
}

/// Coalesces |pieces| into disjoint closed spans, sorted ascending. Overlapping
/// and touching pieces are joined. Empty pieces are dropped.
#[must_use]
pub fn merge<T: PartialOrd + Copy>(pieces: impl IntoIterator<Item = SpanInc<T>>) -> Vec<SpanInc<T>> {
    let mut pieces: Vec<_> = pieces.into_iter().filter(|p| !p.is_empty()).collect();
    pieces.sort_unstable_by(by_start);

    let mut merged: Vec<SpanInc<T>> = Vec::with_capacity(pieces.len());
    for p in pieces {
        match merged.last_mut() {
            Some(last) if p.st <= last.en => last.en = pmax(last.en, p.en),
            _ => merged.push(p),
        }
    }
    merged
}

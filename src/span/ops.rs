/// Returns |a| if |b| is not comparable.
pub fn pmin<X: PartialOrd + Copy>(a: X, b: X) -> X {
    if b < a { b } else { a }
}

/// Returns |a| if |b| is not comparable.
pub fn pmax<X: PartialOrd + Copy>(a: X, b: X) -> X {
    if b > a { b } else { a }
}

// File: crates/netscatter-core/src/axis.rs
// Summary: Axis model with labels and data-padded ranges.

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    /// Axis spanning `values` widened by `margin` times the observed range on
    /// both sides. A zero span widens to +-0.5 around the value instead.
    pub fn padded(label: impl Into<String>, values: impl IntoIterator<Item = f64>, margin: f64) -> Self {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for v in values {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        if !lo.is_finite() || !hi.is_finite() {
            return Self::new(label, 0.0, 1.0);
        }
        let span = hi - lo;
        if span.abs() < 1e-12 {
            return Self::new(label, lo - 0.5, hi + 0.5);
        }
        let m = span * margin;
        Self::new(label, lo - m, hi + m)
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

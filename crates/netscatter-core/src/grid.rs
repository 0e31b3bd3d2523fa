// File: crates/netscatter-core/src/grid.rs
// Summary: Tick layout helpers: nice steps, tick values and label formatting.

/// Smallest "nice" step (1, 2, 2.5, 5 x 10^k) giving at most `target` intervals over `span`.
pub fn nice_step(span: f64, target: usize) -> f64 {
    if !(span > 0.0) || !span.is_finite() {
        return 1.0;
    }
    let raw = span / target.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    for m in [1.0, 2.0, 2.5, 5.0, 10.0] {
        if m * mag >= raw - 1e-12 * mag {
            return m * mag;
        }
    }
    10.0 * mag
}

/// Tick values on multiples of a nice step, inside `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let step = nice_step(hi - lo, target);
    let eps = step * 1e-9;
    let first = (lo / step - 1e-9).ceil() as i64;
    let mut out = Vec::new();
    let mut k = first;
    loop {
        let v = k as f64 * step;
        if v > hi + eps { break; }
        // snap -0.0 and float noise to the step grid
        out.push(if v.abs() < eps { 0.0 } else { v });
        k += 1;
    }
    out
}

/// Decimal places needed to print multiples of `step` without noise.
pub fn tick_decimals(step: f64) -> usize {
    if !(step > 0.0) || !step.is_finite() {
        return 0;
    }
    let mut d = 0usize;
    let mut s = step;
    while d < 6 && (s - s.round()).abs() > 1e-6 * s.max(1.0) {
        s *= 10.0;
        d += 1;
    }
    d
}

pub fn format_tick(v: f64, decimals: usize) -> String {
    format!("{v:.decimals$}")
}

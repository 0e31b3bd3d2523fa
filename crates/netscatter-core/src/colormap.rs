// File: crates/netscatter-core/src/colormap.rs
// Summary: Discrete gradient colormap and min-max normalization for the compute encoding.

/// Opaque 8-bit colour, independent of the rendering backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn lerp(a: Rgb, b: Rgb, t: f64) -> Rgb {
        let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round().clamp(0.0, 255.0) as u8;
        Rgb::new(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
    }
}

/// Pale yellow through orange to dark red.
pub const DEFAULT_STOPS: [Rgb; 6] = [
    Rgb::new(0xFF, 0xFF, 0x99),
    Rgb::new(0xFF, 0xE5, 0x5C),
    Rgb::new(0xFF, 0xCC, 0x00),
    Rgb::new(0xFF, 0x99, 0x00),
    Rgb::new(0xFF, 0x66, 0x00),
    Rgb::new(0xCC, 0x33, 0x00),
];

/// Number of discrete entries in the lookup table.
pub const DEFAULT_STEPS: usize = 100;

/// Lookup-table colormap built from evenly spaced stops.
#[derive(Clone, Debug)]
pub struct Gradient {
    lut: Vec<Rgb>,
}

impl Gradient {
    /// Sample `stops` (evenly spaced on [0,1]) into `steps` entries; entry i
    /// sits at i/(steps-1). Needs at least one stop; `steps` is raised to 1.
    pub fn new(stops: &[Rgb], steps: usize) -> Self {
        let steps = steps.max(1);
        let lut = match stops {
            [] => vec![Rgb::new(0, 0, 0); steps],
            [only] => vec![*only; steps],
            _ => {
                let segments = (stops.len() - 1) as f64;
                (0..steps)
                    .map(|i| {
                        let pos = if steps == 1 { 0.0 } else { i as f64 / (steps - 1) as f64 };
                        let seg = (pos * segments).floor().min(segments - 1.0);
                        let k = seg as usize;
                        Rgb::lerp(stops[k], stops[k + 1], pos * segments - seg)
                    })
                    .collect()
            }
        };
        Self { lut }
    }

    pub fn len(&self) -> usize { self.lut.len() }
    pub fn is_empty(&self) -> bool { self.lut.is_empty() }

    /// Table index for normalized `t`; out-of-range input is clamped.
    pub fn index(&self, t: f64) -> usize {
        let n = self.lut.len();
        if t.is_nan() {
            return 0;
        }
        ((t * n as f64).floor().max(0.0) as usize).min(n - 1)
    }

    pub fn color_at(&self, t: f64) -> Rgb {
        self.lut[self.index(t)]
    }

    pub fn entries(&self) -> &[Rgb] {
        &self.lut
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::new(&DEFAULT_STOPS, DEFAULT_STEPS)
    }
}

/// Min-max normalizer over an observed value range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinMax {
    pub min: f64,
    pub max: f64,
}

impl MinMax {
    /// Observed range of `values`; `None` for an empty or all-NaN input.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values {
            min = min.min(v);
            max = max.max(v);
        }
        (min.is_finite() && max.is_finite()).then_some(Self { min, max })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn is_degenerate(&self) -> bool {
        self.span().abs() < 1e-12
    }

    /// Map `v` into [0,1]. A degenerate range maps everything to 0.5.
    pub fn normalize(&self, v: f64) -> f64 {
        if self.is_degenerate() {
            return 0.5;
        }
        ((v - self.min) / self.span()).clamp(0.0, 1.0)
    }
}

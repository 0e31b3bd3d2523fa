// File: crates/netscatter-core/src/lib.rs
// Summary: Core library entry point; exports the dataset loader, chart model and the one-shot `plot_file` pipeline.

pub mod axis;
pub mod chart;
pub mod colormap;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod label;
pub mod scale;
pub mod text;
pub mod theme;
pub mod types;

use std::path::{Path, PathBuf};

pub use axis::Axis;
pub use chart::{Marker, RenderOptions, ScatterChart};
pub use colormap::{Gradient, MinMax, Rgb};
pub use dataset::{sample_records, write_sample_csv, Dataset, NetworkRecord, TextEncoding};
pub use error::PlotError;
pub use label::{LabelPolicy, LabelTone, Placement};
pub use text::TextShaper;
pub use theme::Theme;

/// Default output image path.
pub const DEFAULT_OUTPUT: &str = "ISIC2017_miou.png";

/// What one successful `plot_file` call produced.
#[derive(Clone, Debug)]
pub struct RenderSummary {
    pub output: PathBuf,
    pub markers: usize,
    pub dropped: usize,
    pub encoding: TextEncoding,
}

/// Load `input`, validate and filter it, render the scatter chart and write
/// it to `output`. Nothing is written when any step before encoding fails.
pub fn plot_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    labels: LabelPolicy,
    opts: &RenderOptions,
) -> Result<RenderSummary, PlotError> {
    let output = output.as_ref();
    let dataset = Dataset::load(input)?;
    let dropped = dataset.dropped;
    let encoding = dataset.encoding;

    let chart = ScatterChart::from_records(dataset.records)?.with_labels(labels);
    for r in &chart.records {
        log::debug!("processing network: {}", r.name);
    }
    chart.render_to_png(opts, output)?;
    log::info!("chart saved to {}", output.display());

    Ok(RenderSummary { output: output.to_path_buf(), markers: chart.records.len(), dropped, encoding })
}

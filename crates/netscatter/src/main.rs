// File: crates/netscatter/src/main.rs
// Summary: CLI that renders a network comparison scatter plot (params vs mIoU, coloured by GFLOPs) from CSV.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use netscatter_core::dataset::SAMPLE_FILE;
use netscatter_core::label::DEFAULT_HIGHLIGHT;
use netscatter_core::{plot_file, theme, LabelPolicy, PlotError, RenderOptions, DEFAULT_OUTPUT};

#[derive(Parser, Debug)]
#[command(name = "netscatter", version, about = "Scatter-plot network accuracy against size and compute")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a CSV with Network, mIoU(%), Params(M) and GFLOPs columns to PNG.
    Plot {
        input: PathBuf,
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
        #[arg(long, default_value_t = 300.0)]
        dpi: f32,
        /// Point label size in points.
        #[arg(long, default_value_t = 10.0)]
        font_size: f32,
        /// Network name drawn in red.
        #[arg(long, default_value = DEFAULT_HIGHLIGHT)]
        highlight: String,
        #[arg(long, default_value = "paper")]
        theme: String,
        /// Skip all text (markers, grid and colour bar only).
        #[arg(long)]
        no_labels: bool,
    },
    /// Write the eight-network demonstration CSV.
    Sample {
        #[arg(default_value = SAMPLE_FILE)]
        path: PathBuf,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Plot { input, output, dpi, font_size, highlight, theme: theme_name, no_labels } => {
            let opts = RenderOptions {
                dpi,
                label_font_size: font_size,
                theme: theme::find(&theme_name),
                draw_labels: !no_labels,
                ..RenderOptions::default()
            };
            let labels = LabelPolicy::default().with_highlight(highlight);
            let summary = plot_file(&input, &output, labels, &opts)
                .with_context(|| format!("failed to plot '{}'", input.display()))?;
            println!(
                "Wrote {} ({} networks, {} rows dropped, encoding {})",
                summary.output.display(),
                summary.markers,
                summary.dropped,
                summary.encoding.label()
            );
        }
        Command::Sample { path } => {
            write_sample(&path)?;
        }
    }
    Ok(())
}

fn write_sample(path: &Path) -> Result<()> {
    let records = netscatter_core::write_sample_csv(path)
        .with_context(|| format!("failed to write sample data to '{}'", path.display()))?;
    for r in &records {
        println!("{:<12} {:>6.1} {:>6.1} {:>6.1}", r.name, r.accuracy, r.params, r.compute);
    }
    Ok(())
}

/// Log the failure; schema errors spell out missing and present columns.
fn report(err: &anyhow::Error) {
    log::error!("{err:#}");
    if let Some(PlotError::MissingColumns { missing, present }) = err.downcast_ref::<PlotError>() {
        log::error!("missing required columns: {}", missing.join(", "));
        log::error!("columns present: {}", present.join(", "));
    }
    if let Some(PlotError::Unreadable { tried, .. }) = err.downcast_ref::<PlotError>() {
        log::error!("tried encodings {}; check the file format or re-save it as UTF-8", tried.join(", "));
    }
}

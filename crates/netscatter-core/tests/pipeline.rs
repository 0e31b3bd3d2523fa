// File: crates/netscatter-core/tests/pipeline.rs
// Purpose: End-to-end plot_file runs: success writes one PNG, failures write nothing.

use netscatter_core::{plot_file, write_sample_csv, LabelPolicy, PlotError, RenderOptions, TextEncoding};
use std::path::PathBuf;

fn dir(name: &str) -> PathBuf {
    let d = PathBuf::from("target/test_out/pipeline").join(name);
    std::fs::create_dir_all(&d).unwrap();
    d
}

fn fast_opts() -> RenderOptions {
    RenderOptions { dpi: 25.0, ..RenderOptions::default() }
}

#[test]
fn sample_csv_renders_eight_markers() {
    let d = dir("sample");
    let csv = d.join("sample_network_data.csv");
    let out = d.join("out/ISIC2017_miou.png");
    std::fs::remove_file(&out).ok();

    let written = write_sample_csv(&csv).expect("write sample");
    assert_eq!(written.len(), 8);

    let summary = plot_file(&csv, &out, LabelPolicy::default(), &fast_opts()).expect("plot");
    assert_eq!(summary.markers, 8);
    assert_eq!(summary.dropped, 0);
    assert_eq!(summary.encoding, TextEncoding::Utf8);
    let bytes = std::fs::read(&out).expect("output exists");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn rendered_markers_match_complete_rows() {
    let d = dir("partial");
    let csv = d.join("partial.csv");
    let out = d.join("partial.png");
    std::fs::write(
        &csv,
        "Network,mIoU(%),Params(M),GFLOPs\nA,79.6,2.1,1.2\nB,,1.8,2.1\nC,78.7,2.3,3.4\nD,78.3,1.5,\n",
    )
    .unwrap();
    let summary = plot_file(&csv, &out, LabelPolicy::default(), &fast_opts()).expect("plot");
    assert_eq!(summary.markers, 2);
    assert_eq!(summary.dropped, 2);
    assert!(out.exists());
}

#[test]
fn missing_gflops_writes_nothing() {
    let d = dir("missing");
    let csv = d.join("no_gflops.csv");
    let out = d.join("never.png");
    std::fs::remove_file(&out).ok();
    std::fs::write(&csv, "Network,mIoU(%),Params(M)\nA,79.6,2.1\n").unwrap();

    let err = plot_file(&csv, &out, LabelPolicy::default(), &fast_opts()).unwrap_err();
    match &err {
        PlotError::MissingColumns { missing, .. } => assert!(missing.iter().any(|c| c == "GFLOPs")),
        other => panic!("expected MissingColumns, got {other:?}"),
    }
    assert!(err.to_string().contains("GFLOPs"));
    assert!(!out.exists());
}

#[test]
fn empty_after_filter_writes_nothing() {
    let d = dir("empty");
    let csv = d.join("empty.csv");
    let out = d.join("never.png");
    std::fs::remove_file(&out).ok();
    std::fs::write(&csv, "Network,mIoU(%),Params(M),GFLOPs\nA,,2.1,1.2\n").unwrap();

    let err = plot_file(&csv, &out, LabelPolicy::default(), &fast_opts()).unwrap_err();
    assert!(matches!(err, PlotError::EmptyDataset { rows_read: 1 }));
    assert!(!out.exists());
}

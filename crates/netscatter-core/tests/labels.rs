// File: crates/netscatter-core/tests/labels.rs
// Purpose: Marker positions, label placement rules and highlight colour selection.

use netscatter_core::label::{HAlign, VAlign, DEFAULT_HIGHLIGHT};
use netscatter_core::text::anchor_origin;
use netscatter_core::{sample_records, LabelPolicy, LabelTone, Placement, ScatterChart};

#[test]
fn sample_yields_one_marker_per_record_at_params_accuracy() {
    let records = sample_records();
    let chart = ScatterChart::from_records(records.clone()).unwrap();
    let markers = chart.markers();
    assert_eq!(markers.len(), 8);
    for (m, r) in markers.iter().zip(&records) {
        assert_eq!(m.name, r.name);
        assert_eq!((m.x, m.y), (r.params, r.accuracy));
    }
}

#[test]
fn transfuse_is_tucked_and_others_use_default() {
    let chart = ScatterChart::from_records(sample_records()).unwrap();
    for m in chart.markers() {
        if m.name == "TransFuse" {
            assert_eq!(m.placement, Placement { dx: 12.5, dy: -15.0, h_align: HAlign::Right, v_align: VAlign::Center });
        } else {
            assert_eq!(m.placement, Placement { dx: 12.5, dy: 9.1, h_align: HAlign::Left, v_align: VAlign::Bottom });
        }
    }
}

#[test]
fn lb_unet_rule_is_case_sensitive() {
    let policy = LabelPolicy::default();
    assert_eq!(policy.placement("LB-Unet"), Placement::TUCKED);
    assert_eq!(policy.placement("LB-UNet"), Placement::DEFAULT);
    assert_eq!(policy.placement("transfuse"), Placement::DEFAULT);
}

#[test]
fn highlight_only_on_exact_sentinel() {
    let policy = LabelPolicy::default();
    assert_eq!(DEFAULT_HIGHLIGHT, "SELUNet(Ours)");
    assert_eq!(policy.tone("SELUNet(Ours)"), LabelTone::Highlight);
    assert_eq!(policy.tone("SELUNet(ours)"), LabelTone::Normal);
    assert_eq!(policy.tone("SELUNet"), LabelTone::Normal);
    assert_eq!(policy.tone(" SELUNet(Ours)"), LabelTone::Normal);

    let custom = LabelPolicy::default().with_highlight("UNet");
    assert_eq!(custom.tone("UNet"), LabelTone::Highlight);
    assert_eq!(custom.tone("SELUNet(Ours)"), LabelTone::Normal);
}

#[test]
fn sample_has_no_highlighted_network() {
    let chart = ScatterChart::from_records(sample_records()).unwrap();
    assert!(chart.markers().iter().all(|m| m.tone == LabelTone::Normal));
}

#[test]
fn anchors_position_the_text_box() {
    assert_eq!(anchor_origin(100.0, 50.0, 40.0, 10.0, HAlign::Left, VAlign::Bottom), (100.0, 40.0));
    assert_eq!(anchor_origin(100.0, 50.0, 40.0, 10.0, HAlign::Right, VAlign::Center), (60.0, 45.0));
    assert_eq!(anchor_origin(100.0, 50.0, 40.0, 10.0, HAlign::Center, VAlign::Top), (80.0, 50.0));
}

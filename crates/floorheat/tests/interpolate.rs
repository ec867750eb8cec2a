mod common;

use approx::assert_abs_diff_eq;
use common::{encode_v1, FakeDecoder, Reply};
use floorheat::{decode, interpolate, ErrorKind, HeatmapSource, Heatmapper, InterpolateConfig};
use std::time::Duration;

fn two_floor_decoder() -> FakeDecoder {
    // 2x1 per floor, 2 floors.
    FakeDecoder::new()
        .with_pixels("a", 2, 2, &encode_v1(&[0.10, 1.00, 2.00, 0.37]))
        .with_pixels("b", 2, 2, &encode_v1(&[0.50, 0.00, 2.55, 0.91]))
}

#[tokio::test]
async fn zero_fraction_equals_first_decode() {
    let decoder = two_floor_decoder();
    let (a, b) = (HeatmapSource::url("a"), HeatmapSource::url("b"));

    let blended = interpolate(&decoder, &a, &b, 0.0, 2, 1).await.expect("blend");
    let only_a = decode(&decoder, &a, 2, 1).await.expect("decode");
    assert_eq!(blended, only_a);
}

#[tokio::test]
async fn unit_fraction_matches_second_decode() {
    let decoder = two_floor_decoder();
    let (a, b) = (HeatmapSource::url("a"), HeatmapSource::url("b"));

    let blended = interpolate(&decoder, &a, &b, 1.0, 2, 1).await.expect("blend");
    let only_b = decode(&decoder, &b, 2, 1).await.expect("decode");
    assert_eq!(blended.shape(), only_b.shape());
    for (fa, fb) in blended.floors().iter().zip(only_b.floors()) {
        for (x, y) in fa.iter().zip(fb) {
            assert_abs_diff_eq!(*x, *y, epsilon = 1e-9);
        }
    }
}

#[tokio::test]
async fn quarter_fraction_is_linear() {
    let decoder = two_floor_decoder();
    let blended = interpolate(
        &decoder,
        &HeatmapSource::url("a"),
        &HeatmapSource::url("b"),
        0.25,
        2,
        1,
    )
    .await
    .expect("blend");

    assert_eq!(blended.shape(), (2, 2, 1));
    assert_abs_diff_eq!(blended.value_at(0, 0, 0).unwrap(), 0.20, epsilon = 1e-12);
    assert_abs_diff_eq!(blended.value_at(0, 1, 0).unwrap(), 0.75, epsilon = 1e-12);
    assert_abs_diff_eq!(blended.value_at(1, 0, 0).unwrap(), 2.1375, epsilon = 1e-12);
    assert_abs_diff_eq!(blended.value_at(1, 1, 0).unwrap(), 0.505, epsilon = 1e-12);
}

#[tokio::test]
async fn fractions_outside_unit_range_extrapolate() {
    let decoder = two_floor_decoder();
    let mapper = Heatmapper::with_decoder(&decoder);
    let (a, b) = (HeatmapSource::url("a"), HeatmapSource::url("b"));

    let beyond = mapper.interpolate(&a, &b, 2.0, 2, 1).await.expect("blend");
    assert_abs_diff_eq!(beyond.value_at(0, 0, 0).unwrap(), 0.90, epsilon = 1e-12);
    assert_abs_diff_eq!(beyond.value_at(0, 1, 0).unwrap(), -1.0, epsilon = 1e-12);
}

#[tokio::test]
async fn either_decode_failing_fails_the_blend() {
    let decoder = two_floor_decoder().with("broken", Reply::Fail);
    let (a, broken) = (HeatmapSource::url("a"), HeatmapSource::url("broken"));

    let err = interpolate(&decoder, &a, &broken, 0.5, 2, 1).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SourceResolution);
    let err = interpolate(&decoder, &broken, &a, 0.5, 2, 1).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SourceResolution);
}

#[tokio::test]
async fn first_failure_wins_over_pending_decode() {
    let decoder = FakeDecoder::new()
        .with("slow", Reply::Hang)
        .with("broken", Reply::Fail);

    let (slow, broken) = (HeatmapSource::url("slow"), HeatmapSource::url("broken"));

    let blend = interpolate(&decoder, &slow, &broken, 0.5, 1, 1);
    let err = tokio::time::timeout(Duration::from_secs(5), blend)
        .await
        .expect("failure must not wait for the hanging decode")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SourceResolution);
    assert_eq!(decoder.calls(), 2);
}

#[tokio::test]
async fn shape_mismatch_in_either_source_fails() {
    let decoder = two_floor_decoder().with_pixels("odd", 2, 3, &[1; 6]);
    let err = interpolate(
        &decoder,
        &HeatmapSource::url("a"),
        &HeatmapSource::url("odd"),
        0.5,
        2,
        1,
    )
    .await
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
}

#[tokio::test]
async fn differently_sized_images_are_incompatible() {
    let decoder = two_floor_decoder().with_pixels("wide", 4, 2, &[1; 8]);
    let err = interpolate(
        &decoder,
        &HeatmapSource::url("a"),
        &HeatmapSource::url("wide"),
        0.5,
        2,
        1,
    )
    .await
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompatibleShapes);
}

#[tokio::test]
async fn validation_happens_before_any_decode() {
    let decoder = two_floor_decoder();
    let err = interpolate(
        &decoder,
        &HeatmapSource::url("a"),
        &HeatmapSource::url("b"),
        0.5,
        2,
        2,
    )
    .await
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedVersion);

    let err = interpolate(
        &decoder,
        &HeatmapSource::url("a"),
        &HeatmapSource::base64("=bad="),
        0.5,
        2,
        1,
    )
    .await
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(decoder.calls(), 0);
}

#[tokio::test]
async fn config_runs_a_blend() {
    let cfg: InterpolateConfig = serde_json::from_str(
        r#"{
            "source_a": {"url": "a"},
            "source_b": {"url": "b"},
            "fraction": 0.5,
            "floor_count": 2
        }"#,
    )
    .expect("config");
    let decoder = two_floor_decoder();

    let hm = cfg.run(&decoder).await.expect("blend");
    assert_abs_diff_eq!(hm.value_at(0, 0, 0).unwrap(), 0.30, epsilon = 1e-12);
}

//! Tests for missing-value resolution

use super::date;
use crate::app::models::{FrameColumn, MonthlyFrame};
use crate::app::services::filter_pipeline::interpolate::{interpolate_linear, resolve_missing};
use crate::Error;

fn frame_of(values: Vec<Option<f64>>) -> MonthlyFrame {
    let index = (0..values.len())
        .map(|offset| date(2000, offset as u32 + 1))
        .collect();
    MonthlyFrame::new(index, vec![FrameColumn::new("Temp", values)]).unwrap()
}

#[test]
fn test_interpolate_single_interior_gap() {
    let values = interpolate_linear(&[Some(1.0), None, Some(3.0)]);
    assert_eq!(values, vec![Some(1.0), Some(2.0), Some(3.0)]);
}

#[test]
fn test_interpolate_multi_cell_run() {
    let values = interpolate_linear(&[Some(0.0), None, None, Some(3.0)]);
    assert_eq!(values, vec![Some(0.0), Some(1.0), Some(2.0), Some(3.0)]);
}

#[test]
fn test_interpolate_leaves_edges_untouched() {
    let values = interpolate_linear(&[None, Some(2.0), None, Some(4.0), None]);
    assert_eq!(
        values,
        vec![None, Some(2.0), Some(3.0), Some(4.0), None]
    );
}

#[test]
fn test_interpolate_dense_input_unchanged() {
    let input = vec![Some(1.0), Some(2.0), Some(3.0)];
    assert_eq!(interpolate_linear(&input), input);
}

#[test]
fn test_resolve_fills_interior_gaps() {
    let resolved = resolve_missing(frame_of(vec![Some(1.0), None, Some(3.0)])).unwrap();
    assert_eq!(
        resolved.column("Temp").unwrap().values,
        vec![Some(1.0), Some(2.0), Some(3.0)]
    );
}

#[test]
fn test_resolve_drops_boundary_records() {
    let resolved =
        resolve_missing(frame_of(vec![None, Some(2.0), None, Some(4.0), None])).unwrap();
    assert_eq!(resolved.len(), 3);
    assert_eq!(resolved.index(), &[date(2000, 2), date(2000, 3), date(2000, 4)]);
    assert!(resolved.is_dense());
}

#[test]
fn test_resolve_rejects_all_missing_frame() {
    let result = resolve_missing(frame_of(vec![None, None, None]));
    assert!(matches!(result, Err(Error::NoData { .. })));
}

#[test]
fn test_resolve_is_idempotent_on_dense_frames() {
    let frame = frame_of(vec![Some(1.0), Some(2.0), Some(3.0)]);
    let resolved = resolve_missing(frame.clone()).unwrap();
    assert_eq!(resolved, frame);

    // resolving an already-resolved frame changes nothing either
    let twice = resolve_missing(resolved.clone()).unwrap();
    assert_eq!(twice, resolved);
}

#[test]
fn test_resolve_handles_multiple_columns_independently() {
    let index = vec![date(2000, 1), date(2000, 2), date(2000, 3)];
    let columns = vec![
        FrameColumn::new("A", vec![Some(1.0), None, Some(3.0)]),
        FrameColumn::new("B", vec![None, Some(5.0), Some(6.0)]),
    ];
    let frame = MonthlyFrame::new(index, columns).unwrap();

    // A's gap interpolates, B's leading miss survives interpolation and
    // forces the first record out
    let resolved = resolve_missing(frame).unwrap();
    assert_eq!(resolved.len(), 2);
    assert_eq!(resolved.index(), &[date(2000, 2), date(2000, 3)]);
    assert_eq!(
        resolved.column("A").unwrap().values,
        vec![Some(2.0), Some(3.0)]
    );
    assert_eq!(
        resolved.column("B").unwrap().values,
        vec![Some(5.0), Some(6.0)]
    );
}

use axisutils_core::{AxisBinding, AxisBuilder, AxisError, IntervalAxisBuilder, IntervalWidth};
use proptest::prelude::*;

#[test]
fn scalar_width_drops_trailing_partial_interval() {
    let axis = IntervalAxisBuilder::new()
        .start(0)
        .end(100)
        .interval(30)
        .build()
        .unwrap();
    assert_eq!(axis.lower_bound(), &[0, 30, 60]);
    assert_eq!(axis.upper_bound(), &[30, 60, 90]);
    assert_eq!(axis.data_ticks(), &[15.0, 45.0, 75.0]);
}

#[test]
fn scalar_width_exact_division_reaches_end() {
    let axis = IntervalAxisBuilder::new()
        .start(-20)
        .end(20)
        .interval(10)
        .binding(AxisBinding::Beginning)
        .build()
        .unwrap();
    assert_eq!(axis.lower_bound(), &[-20, -10, 0, 10]);
    assert_eq!(axis.end(), 20);
    assert_eq!(axis.data_ticks(), &[-20.0, -10.0, 0.0, 10.0]);
    assert_eq!(axis.binding(), Some(AxisBinding::Beginning));
}

#[test]
fn width_sequence_is_laid_out_back_to_back() {
    let axis = IntervalAxisBuilder::new()
        .start(100)
        .end(100)
        .interval(vec![1, 2, 3, 4])
        .binding(AxisBinding::End)
        .build()
        .unwrap();
    assert_eq!(axis.lower_bound(), &[100, 101, 103, 106]);
    assert_eq!(axis.upper_bound(), &[101, 103, 106, 110]);
    // The sequence decides the extent, not `end`.
    assert_eq!(axis.end(), 110);
    assert_eq!(axis.data_ticks(), &[101.0, 103.0, 106.0, 110.0]);
}

#[test]
fn per_interval_fraction_with_width_sequence() {
    let axis = IntervalAxisBuilder::new()
        .start(0)
        .end(30)
        .interval(&[10_i64, 20][..])
        .fraction(vec![0.0, 0.5])
        .build()
        .unwrap();
    assert_eq!(axis.data_ticks(), &[0.0, 20.0]);
}

#[test]
fn missing_parameters_are_config_errors() {
    assert!(matches!(
        IntervalAxisBuilder::new().start(0).end(10).prebuild_check(),
        Err(AxisError::Config(_))
    ));
    assert!(matches!(
        IntervalAxisBuilder::new().end(10).interval(1).build(),
        Err(AxisError::Config(_))
    ));
}

#[test]
fn start_after_end_is_range_error() {
    let b = IntervalAxisBuilder::new().start(10).end(0).interval(1);
    assert!(matches!(b.prebuild_check(), Err(AxisError::Range(_))));
}

#[test]
fn non_positive_widths_are_rejected() {
    let zero = IntervalAxisBuilder::new().start(0).end(10).interval(0);
    assert!(matches!(zero.prebuild_check(), Err(AxisError::Range(_))));

    let seq = IntervalAxisBuilder::new()
        .start(0)
        .end(10)
        .interval(vec![3, -1, 2]);
    assert!(matches!(seq.prebuild_check(), Err(AxisError::Range(_))));

    let empty = IntervalAxisBuilder::new()
        .start(0)
        .end(10)
        .interval(Vec::<i64>::new());
    assert!(matches!(empty.prebuild_check(), Err(AxisError::Config(_))));
}

#[test]
fn width_larger_than_range_yields_no_axis() {
    let err = IntervalAxisBuilder::new()
        .start(0)
        .end(10)
        .interval(11)
        .build()
        .unwrap_err();
    assert!(matches!(err, AxisError::Range(_)));

    let empty_range = IntervalAxisBuilder::new().start(5).end(5).interval(1);
    assert!(empty_range.prebuild_check().is_ok());
    assert!(matches!(empty_range.build(), Err(AxisError::Range(_))));
}

#[test]
fn fraction_outside_unit_interval_is_rejected() {
    let b = IntervalAxisBuilder::new()
        .start(0)
        .end(10)
        .interval(5)
        .fraction(-0.5);
    assert!(matches!(b.prebuild_check(), Err(AxisError::Range(_))));
}

#[test]
fn interval_width_conversions() {
    assert_eq!(IntervalWidth::from(5), IntervalWidth::Scalar(5));
    assert_eq!(
        IntervalWidth::from(vec![1, 2]),
        IntervalWidth::Sequence(vec![1, 2])
    );
}

proptest! {
    #[test]
    fn scalar_width_uses_floor_division(
        start in -1_000_000i64..1_000_000,
        span in 1i64..100_000,
        width in 1i64..1_000,
    ) {
        prop_assume!(width <= span);
        let end = start + span;
        let axis = IntervalAxisBuilder::new().start(start).end(end).interval(width).build().unwrap();
        prop_assert_eq!(i64::try_from(axis.len()).unwrap(), span / width);
        prop_assert!(axis.is_contiguous());
        prop_assert!(axis.end() <= end);
        prop_assert!(end - axis.end() < width);
    }

    #[test]
    fn width_sequence_sums_to_extent(
        start in -1_000_000i64..1_000_000,
        widths in proptest::collection::vec(1i64..1_000, 1..64),
    ) {
        let total: i64 = widths.iter().sum();
        let axis = IntervalAxisBuilder::new()
            .start(start)
            .end(start)
            .interval(widths.clone())
            .build()
            .unwrap();
        prop_assert_eq!(axis.len(), widths.len());
        prop_assert!(axis.is_contiguous());
        prop_assert_eq!(axis.end(), start + total);
        for (bin, w) in axis.iter().zip(&widths) {
            prop_assert_eq!(bin.width(), Some(*w));
        }
    }
}

use axisutils_core::{AxisBuilder, AxisError, BoundaryType, DataTickAxisBuilder, centered_bounds};
use chrono::NaiveDate;
use proptest::prelude::*;

#[test]
fn evenly_spaced_ticks_get_centered_bounds() {
    let axis = DataTickAxisBuilder::new()
        .data_ticks([0_i64, 10, 20])
        .build()
        .unwrap();
    assert_eq!(axis.lower_bound(), &[-5, 5, 15]);
    assert_eq!(axis.upper_bound(), &[5, 15, 25]);
    assert_eq!(axis.data_ticks(), &[0.0, 10.0, 20.0]);
    assert!(axis.is_contiguous());
}

#[test]
fn midpoints_floor_toward_negative_infinity() {
    let (lower, upper) = centered_bounds(&[0, 3]).unwrap();
    assert_eq!(lower, vec![-1, 1]);
    assert_eq!(upper, vec![1, 5]);

    let (lower, upper) = centered_bounds(&[-3, 0]).unwrap();
    assert_eq!(lower, vec![-4, -2]);
    assert_eq!(upper, vec![-2, 2]);
}

#[test]
fn uneven_spacing_reflects_outer_gaps() {
    let axis = DataTickAxisBuilder::new()
        .data_ticks([0_i64, 2, 10, 11, 40])
        .build()
        .unwrap();
    // 10 and 11 are one apart, so the boundary between them floors onto 10.
    assert_eq!(axis.lower_bound(), &[-1, 1, 6, 10, 25]);
    assert_eq!(axis.upper_bound(), &[1, 6, 10, 25, 55]);
}

#[test]
fn adjacent_ticks_at_the_edge_give_degenerate_bin() {
    let err = DataTickAxisBuilder::new()
        .data_ticks([0_i64, 1])
        .build()
        .unwrap_err();
    assert!(matches!(err, AxisError::Range(_)));
}

#[test]
fn calendar_ticks_are_converted_to_micros() {
    let days = [
        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2020, 1, 3).unwrap(),
    ];
    let axis = DataTickAxisBuilder::new().data_ticks(days).build().unwrap();
    let day = 86_400_000_000_i64;
    let jan1 = 1_577_836_800_000_000_i64;
    assert_eq!(axis.lower_bound(), &[jan1 - day, jan1 + day]);
    assert_eq!(axis.upper_bound(), &[jan1 + day, jan1 + 3 * day]);
}

#[test]
fn too_few_or_missing_ticks() {
    assert!(matches!(
        DataTickAxisBuilder::new().prebuild_check(),
        Err(AxisError::Config(_))
    ));
    assert!(matches!(
        DataTickAxisBuilder::new().data_ticks([5_i64]).prebuild_check(),
        Err(AxisError::Range(_))
    ));
    assert!(matches!(
        centered_bounds(&[]),
        Err(AxisError::Range(_))
    ));
}

#[test]
fn ticks_must_be_strictly_increasing() {
    let repeated = DataTickAxisBuilder::new().data_ticks([0_i64, 10, 10, 20]);
    assert!(matches!(repeated.prebuild_check(), Err(AxisError::Range(_))));

    let descending = DataTickAxisBuilder::new().data_ticks([20_i64, 10, 0]);
    assert!(matches!(descending.prebuild_check(), Err(AxisError::Range(_))));
}

#[test]
fn overflow_while_reflecting_is_range_error() {
    let err = centered_bounds(&[i64::MAX - 4, i64::MAX]).unwrap_err();
    assert!(matches!(err, AxisError::Range(_)));
}

#[test]
fn boundary_type_parses_by_name() {
    assert_eq!(
        "centered".parse::<BoundaryType>().unwrap(),
        BoundaryType::Centered
    );
    assert_eq!(
        " Centered ".parse::<BoundaryType>().unwrap(),
        BoundaryType::Centered
    );
    assert_eq!(BoundaryType::Centered.to_string(), "centered");
    let err = "left".parse::<BoundaryType>().unwrap_err();
    assert!(matches!(err, AxisError::Config(_)));
    assert!(err.to_string().contains("left"));
}

fn spaced_ticks() -> impl Strategy<Value = Vec<i64>> {
    (
        -1_000_000i64..1_000_000,
        proptest::collection::vec(2i64..1_000, 1..64),
    )
        .prop_map(|(start, gaps)| {
            let mut ticks = Vec::with_capacity(gaps.len() + 1);
            let mut t = start;
            ticks.push(t);
            for g in gaps {
                t += g;
                ticks.push(t);
            }
            ticks
        })
}

proptest! {
    #[test]
    fn ticks_pass_through_and_sit_inside_their_bins(ticks in spaced_ticks()) {
        let axis = DataTickAxisBuilder::new().data_ticks(ticks.clone()).build().unwrap();
        prop_assert_eq!(axis.len(), ticks.len());
        prop_assert!(axis.is_contiguous());
        for (bin, t) in axis.iter().zip(&ticks) {
            prop_assert_eq!(bin.data_tick, *t as f64);
            prop_assert!(bin.lower_bound <= *t);
            prop_assert!(*t < bin.upper_bound);
        }
    }
}

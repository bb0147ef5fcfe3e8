use axisutils_core::time::{days_in_month, days_in_year, is_leap_year, next_month};
use axisutils_core::{AxisBuilder, AxisError, DAY_MICROS, MonthlyAxisBuilder, YearlyAxisBuilder};

const S: i64 = 1_000_000;

#[test]
fn january_and_february_of_a_leap_year() {
    let axis = MonthlyAxisBuilder::new()
        .start_year_month(2020, 1)
        .end_year_month(2020, 2)
        .build()
        .unwrap();
    assert_eq!(axis.lower_bound(), &[1_577_836_800 * S, 1_580_515_200 * S]);
    assert_eq!(axis.upper_bound(), &[1_580_515_200 * S, 1_583_020_800 * S]);
    let widths: Vec<i64> = axis.iter().filter_map(|bin| bin.width()).collect();
    assert_eq!(widths, vec![31 * DAY_MICROS, 29 * DAY_MICROS]);
    assert_eq!(axis.data_ticks()[0], (1_579_176_000 * S) as f64);
}

#[test]
fn months_cross_year_boundary() {
    let axis = MonthlyAxisBuilder::new()
        .start_year_month(2019, 11)
        .end_year_month(2020, 2)
        .build()
        .unwrap();
    assert_eq!(axis.len(), 4);
    assert!(axis.is_contiguous());
}

#[test]
fn single_month_axis() {
    let axis = MonthlyAxisBuilder::new()
        .start_year_month(2021, 2)
        .end_year_month(2021, 2)
        .build()
        .unwrap();
    assert_eq!(axis.len(), 1);
    assert_eq!(axis.iter().next().unwrap().width(), Some(28 * DAY_MICROS));
}

#[test]
fn year_only_defaults_to_full_years() {
    let axis = MonthlyAxisBuilder::new()
        .start_year(2019)
        .end_year(2020)
        .build()
        .unwrap();
    assert_eq!(axis.len(), 24);
    let total: i64 = axis.iter().filter_map(|bin| bin.width()).sum();
    assert_eq!(total, (365 + 366) * DAY_MICROS);
}

#[test]
fn monthly_errors() {
    assert!(matches!(
        MonthlyAxisBuilder::new().start_year(2020).prebuild_check(),
        Err(AxisError::Config(_))
    ));
    assert!(matches!(
        MonthlyAxisBuilder::new()
            .start_year_month(2020, 13)
            .end_year_month(2021, 1)
            .prebuild_check(),
        Err(AxisError::Range(_))
    ));
    assert!(matches!(
        MonthlyAxisBuilder::new()
            .start_year_month(2020, 0)
            .end_year_month(2021, 1)
            .prebuild_check(),
        Err(AxisError::Range(_))
    ));
    assert!(matches!(
        MonthlyAxisBuilder::new()
            .start_year_month(2020, 5)
            .end_year_month(2020, 4)
            .build(),
        Err(AxisError::Range(_))
    ));
}

#[test]
fn yearly_bins_follow_year_length() {
    let axis = YearlyAxisBuilder::new()
        .start_year(2019)
        .end_year(2021)
        .build()
        .unwrap();
    let widths: Vec<i64> = axis.iter().filter_map(|bin| bin.width()).collect();
    assert_eq!(
        widths,
        vec![365 * DAY_MICROS, 366 * DAY_MICROS, 365 * DAY_MICROS]
    );
    assert_eq!(axis.lower_bound()[1], 1_577_836_800 * S);
    assert!(axis.is_contiguous());
}

#[test]
fn yearly_errors() {
    assert!(matches!(
        YearlyAxisBuilder::new().end_year(2020).prebuild_check(),
        Err(AxisError::Config(_))
    ));
    assert!(matches!(
        YearlyAxisBuilder::new()
            .start_year(2021)
            .end_year(2020)
            .prebuild_check(),
        Err(AxisError::Range(_))
    ));
}

#[test]
fn calendar_helpers() {
    assert!(is_leap_year(2000));
    assert!(!is_leap_year(2100));
    assert!(is_leap_year(2024));
    assert_eq!(days_in_month(2000, 2).unwrap(), 29);
    assert_eq!(days_in_month(2100, 2).unwrap(), 28);
    assert_eq!(days_in_month(2021, 4).unwrap(), 30);
    assert!(matches!(days_in_month(2021, 13), Err(AxisError::Range(_))));
    assert_eq!(days_in_year(2024), 366);
    assert_eq!(next_month(2020, 12), (2021, 1));
    assert_eq!(next_month(2020, 3), (2020, 4));
}

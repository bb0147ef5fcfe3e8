use axisutils_core::time::{date_to_timestamp, timestamp_to_datetime};
use axisutils_core::{
    AxisBinding, AxisBuilder, AxisError, DAY_MICROS, DailyAxisBuilder, FixedIntervalParams,
    WEEK_MICROS, WeeklyAxisBuilder,
};
use chrono::NaiveDate;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

const JAN_1_2019: i64 = 1_546_300_800_000_000;

#[test]
fn daily_from_start_and_end_dates() {
    let axis = DailyAxisBuilder::new()
        .start_date(d(2019, 1, 1))
        .end_date(d(2019, 1, 8))
        .build()
        .unwrap();
    assert_eq!(axis.len(), 7);
    assert_eq!(axis.start(), JAN_1_2019);
    assert_eq!(axis.end(), JAN_1_2019 + 7 * DAY_MICROS);
    assert!(axis.is_contiguous());

    // Ticks at noon UTC of each day.
    let first_tick = timestamp_to_datetime(axis.data_ticks()[0] as i64).unwrap();
    assert_eq!(first_tick.to_rfc3339(), "2019-01-01T12:00:00+00:00");
    let last_tick = timestamp_to_datetime(axis.data_ticks()[6] as i64).unwrap();
    assert_eq!(last_tick.to_rfc3339(), "2019-01-07T12:00:00+00:00");
}

#[test]
fn daily_from_start_and_count_matches_dates() {
    let by_dates = DailyAxisBuilder::new()
        .start_date(d(2019, 1, 1))
        .end_date(d(2019, 1, 8))
        .build()
        .unwrap();
    let by_count = DailyAxisBuilder::new()
        .start_date(d(2019, 1, 1))
        .n_interval(7)
        .build()
        .unwrap();
    let by_end = DailyAxisBuilder::new()
        .end_date(d(2019, 1, 8))
        .n_interval(7)
        .build()
        .unwrap();
    assert_eq!(by_dates, by_count);
    assert_eq!(by_dates, by_end);
}

#[test]
fn weekly_spans_seven_days() {
    let axis = WeeklyAxisBuilder::new()
        .start_date(d(2020, 1, 6))
        .n_interval(4)
        .binding(AxisBinding::Beginning)
        .build()
        .unwrap();
    assert_eq!(axis.len(), 4);
    for bin in axis.iter() {
        assert_eq!(bin.width(), Some(WEEK_MICROS));
    }
    assert_eq!(axis.data_ticks()[0], date_to_timestamp(d(2020, 1, 6)) as f64);
    assert_eq!(axis.end(), date_to_timestamp(d(2020, 2, 3)));
}

#[test]
fn weekly_dates_must_be_whole_weeks_apart() {
    let err = WeeklyAxisBuilder::new()
        .start_date(d(2020, 1, 1))
        .end_date(d(2020, 1, 10))
        .build()
        .unwrap_err();
    assert!(matches!(err, AxisError::Range(_)));
}

#[test]
fn exactly_two_parameters_are_required() {
    let one = DailyAxisBuilder::new().start_date(d(2020, 1, 1));
    assert!(matches!(one.prebuild_check(), Err(AxisError::Config(_))));

    let three = DailyAxisBuilder::new()
        .start_date(d(2020, 1, 1))
        .end_date(d(2020, 1, 5))
        .n_interval(4);
    assert!(matches!(three.prebuild_check(), Err(AxisError::Config(_))));
}

#[test]
fn reversed_dates_and_zero_count_are_range_errors() {
    let reversed = DailyAxisBuilder::new()
        .start_date(d(2020, 1, 5))
        .end_date(d(2020, 1, 1));
    assert!(matches!(reversed.prebuild_check(), Err(AxisError::Range(_))));

    let zero = DailyAxisBuilder::new()
        .start_date(d(2020, 1, 1))
        .n_interval(0);
    assert!(matches!(zero.prebuild_check(), Err(AxisError::Range(_))));

    // Same start and end date leaves nothing to bin.
    let same = DailyAxisBuilder::new()
        .start_date(d(2020, 1, 1))
        .end_date(d(2020, 1, 1));
    assert!(matches!(same.build(), Err(AxisError::Range(_))));
}

#[test]
fn delegates_to_fixed_interval_params() {
    let params = DailyAxisBuilder::new()
        .end_date(d(1970, 1, 3))
        .n_interval(2)
        .fixed_params()
        .unwrap();
    assert_eq!(
        params,
        FixedIntervalParams::EndIntervalCount {
            end: 2 * DAY_MICROS,
            interval: DAY_MICROS,
            n_interval: 2,
        }
    );
}

use axisutils::time::timestamp_to_datetime;
use axisutils::{AxisBuilder, DailyAxisBuilder, MonthlyAxisBuilder, WeeklyAxisBuilder, YearlyAxisBuilder};
use chrono::NaiveDate;

fn show(label: &str, axis: &axisutils::Axis) {
    println!("{label} ({} bins)", axis.len());
    for bin in axis.iter() {
        let fmt = |ts: i64| {
            timestamp_to_datetime(ts).map_or_else(|| ts.to_string(), |dt| dt.format("%Y-%m-%d %H:%M").to_string())
        };
        #[allow(clippy::cast_possible_truncation)]
        let tick = bin.data_tick as i64;
        println!(
            "  {} .. {}  tick {}",
            fmt(bin.lower_bound),
            fmt(bin.upper_bound),
            fmt(tick)
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let jan1 = NaiveDate::from_ymd_opt(2020, 1, 1).ok_or("invalid date")?;

    let daily = DailyAxisBuilder::new().start_date(jan1).n_interval(5).build()?;
    show("daily", &daily);

    let weekly = WeeklyAxisBuilder::new()
        .start_date(jan1)
        .end_date(jan1 + chrono::Duration::weeks(4))
        .build()?;
    show("weekly", &weekly);

    // February 2020 has 29 days.
    let monthly = MonthlyAxisBuilder::new()
        .start_year_month(2019, 12)
        .end_year_month(2020, 3)
        .build()?;
    show("monthly", &monthly);

    let yearly = YearlyAxisBuilder::new().start_year(2019).end_year(2021).build()?;
    show("yearly", &yearly);

    Ok(())
}

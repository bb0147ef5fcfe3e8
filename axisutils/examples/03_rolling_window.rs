use axisutils::{AxisBuilder, DAY_MICROS, RollingWindowAxisBuilder};
use chrono::NaiveDate;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).ok_or("invalid date")?;

    // Four 3-day windows, each starting one day after the previous.
    let by_count = RollingWindowAxisBuilder::new()
        .start_date(start)
        .window_size(3)
        .base_dt(DAY_MICROS)
        .n_window(4)
        .build()?;

    // As many windows as fit before the end date.
    let by_end = RollingWindowAxisBuilder::new()
        .start_date(start)
        .end_date(start + chrono::Duration::days(10))
        .window_size(3)
        .build()?;

    for (label, axis) in [("by count", &by_count), ("by end date", &by_end)] {
        println!("{label}: {} windows, contiguous: {}", axis.len(), axis.is_contiguous());
        for bin in axis.iter() {
            println!(
                "  day {:>2} .. day {:>2}",
                (bin.lower_bound - axis.start()) / DAY_MICROS,
                (bin.upper_bound - axis.start()) / DAY_MICROS
            );
        }
    }

    Ok(())
}

use axisutils::{AxisBinding, AxisBuilder, FixedIntervalAxisBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. A week of hours, described by its ends and a width.
    let by_width = FixedIntervalAxisBuilder::new()
        .start(0)
        .end(168)
        .interval(24);
    println!("resolved: {:?}", by_width.resolve()?);
    let axis = by_width.build()?;

    // 2. The same week, described by a count instead.
    let by_count = FixedIntervalAxisBuilder::new()
        .start(0)
        .end(168)
        .n_interval(7)
        .build()?;
    assert_eq!(axis, by_count);

    // 3. Ticks at the start of each bin.
    let left = FixedIntervalAxisBuilder::new()
        .end(168)
        .interval(24)
        .n_interval(7)
        .binding(AxisBinding::Beginning)
        .build()?;

    for (mid, start) in axis.iter().zip(left.iter()) {
        println!(
            "[{:>3}, {:>3})  middle tick {:>5}  beginning tick {:>5}",
            mid.lower_bound, mid.upper_bound, mid.data_tick, start.data_tick
        );
    }

    // 4. Widths that do not divide the range are rejected.
    match FixedIntervalAxisBuilder::new().start(0).end(167).interval(24).build() {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("{} error: {e}", e.kind()),
    }

    Ok(())
}

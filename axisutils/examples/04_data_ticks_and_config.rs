use axisutils::{AxisBuilder, AxisConfig, DataTickAxisBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Bounds inferred from sample positions alone.
    let axis = DataTickAxisBuilder::new().data_ticks([0_i64, 10, 25, 30]).build()?;
    println!("lower: {:?}", axis.lower_bound());
    println!("upper: {:?}", axis.upper_bound());

    // The same axis declared as configuration and round-tripped through JSON.
    let config = AxisConfig::from(DataTickAxisBuilder::new().data_ticks([0_i64, 10, 25, 30]));
    let json = config.to_json()?;
    println!("config: {json}");
    let rebuilt = AxisConfig::from_json(&json)?.build()?;
    assert_eq!(axis, rebuilt);

    // The built axis serializes to a plain document as well.
    println!("axis: {}", serde_json::to_string_pretty(&rebuilt)?);

    // Config errors carry a kind for programmatic handling.
    for doc in [
        r#"{ "kind": "monthly", "start_year": 2020 }"#,
        r#"{ "kind": "hourly" }"#,
        r#"{ "kind": "fixed_interval", "start": 0, "end": 10 "#,
    ] {
        let outcome = AxisConfig::from_json(doc).and_then(AxisConfig::build);
        if let Err(e) = outcome {
            println!("{:<8} {e}", e.kind().to_string());
        }
    }

    Ok(())
}

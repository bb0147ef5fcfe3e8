use axisutils::{AxisBuilder, AxisConfig};
use tracing_subscriber::fmt::format::FmtSpan;

// Run with `--features tracing` to see spans and events.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    // Truncates the end to 9 and logs it.
    let truncated = AxisConfig::from_json(r#"{ "kind": "fixed_interval", "start": 0, "end": 10, "n_interval": 3 }"#)?;
    let _ = truncated.build()?;

    // Even window sizes are accepted with a warning.
    let rolling = AxisConfig::from_json(
        r#"{ "kind": "rolling_window", "start_date": "2020-01-01", "window_size": 2, "n_window": 3 }"#,
    )?;
    let _ = rolling.build()?;

    // Failures are recorded on the span too.
    let bad = AxisConfig::from_json(r#"{ "kind": "fixed_interval", "start": 0, "end": 167, "interval": 24 }"#)?;
    if let Err(e) = bad.build() {
        println!("expected failure: {e}");
    }

    Ok(())
}

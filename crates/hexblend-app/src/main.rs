// ABOUTME: Demonstration entry point.
// ABOUTME: Blends two fixed color lists at half alpha and prints the result.

use anyhow::Result;
use hexblend_core::{blend_lists, BlendError};
use tracing_subscriber::EnvFilter;

const COLORS_1: [&str; 2] = ["#ffffff", "#ff00ff"];
const COLORS_2: [&str; 2] = ["#000000", "#a0ff00"];
const ALPHA: f64 = 0.5;

/// Always the default policy; the demo takes no flags and reads no config.
fn demo() -> Result<Vec<String>, BlendError> {
    blend_lists(COLORS_1, COLORS_2, ALPHA)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Blending {:?} with {:?} at alpha {}", COLORS_1, COLORS_2, ALPHA);

    let blended = demo()?;
    println!("{:?}", blended);

    Ok(())
}

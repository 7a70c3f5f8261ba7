//! Lighthouse Expedition
//!
//! Runs the default expedition on the console. Takes no arguments.

use lighthouse_expedition::{driver, ExpeditionConfig, Logger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut env = ExpeditionConfig::default().build(Logger::stdout())?;

    // Domain failures are handled inside the run; only bugs surface here.
    driver::run(&mut env)?;
    Ok(())
}

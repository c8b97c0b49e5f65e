//! Family Report
//!
//! Prints the sample household and its average age.

use family::{FamilyReport, Household};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the report
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let household = Household::sample();
    info!("Reporting on {} family members", household.len());

    FamilyReport::new(household.members()).print()?;

    info!("Report complete");
    Ok(())
}

use clap::Parser;
use image_fixer::{OptimizeReport, OptimizerPaths, optimize};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Re-encode app/src/main/res/drawable/tulsi.png as an optimized PNG at
/// temp/tulsi_fixed.png.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // stdout is reserved for the outcome message.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn run() -> anyhow::Result<OptimizeReport> {
    let paths = OptimizerPaths::default();
    let report = optimize(&paths)?;
    Ok(report)
}

fn main() -> ExitCode {
    let _cli = Cli::parse();
    dotenv::dotenv().ok();
    init_logging();

    match run() {
        Ok(report) => {
            println!(
                "Image successfully optimized and saved to {}",
                report.destination.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Error processing image: {}", e);
            ExitCode::from(1)
        }
    }
}

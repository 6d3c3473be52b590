#![allow(non_snake_case)]

use clap::Parser;

use eventExporter::ExportResult;
use eventExporter::cli::{self, Cli};
use eventExporter::config::AppConfig;
use eventExporter::logging::init_tracing;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> ExportResult<()> {
    let args = Cli::parse();
    let config = AppConfig::load()?;
    init_tracing(&args.log_level(&config))?;

    let request = args.build_request(&config);
    cli::run(&request).await?;
    println!("Wrote {}", request.output.display());
    Ok(())
}

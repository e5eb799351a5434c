use anyhow::Context;
use catalog_tools::utils::logger;
use catalog_tools::{LocalStorage, ReportConfig, ReportTask, TaskRunner};
use clap::Parser;

#[derive(Parser)]
#[command(name = "product-report")]
#[command(version, about = "Print seller, keyword and first/last summaries of a saved product listing")]
struct Args {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    let config = ReportConfig::default();
    let input_path = config.input_path.clone();
    tracing::info!("📁 Reading products from: {}", input_path.display());

    let task = ReportTask::new(LocalStorage::new(), config);
    let report = TaskRunner::new(task)
        .run()
        .await
        .with_context(|| format!("failed to report on {}", input_path.display()))?;

    print!("{}", report);
    Ok(())
}

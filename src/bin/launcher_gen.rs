use anyhow::Context;
use catalog_tools::utils::logger;
use catalog_tools::{LauncherConfig, LauncherTask, LocalStorage, TaskRunner};
use clap::Parser;

#[derive(Parser)]
#[command(name = "launcher-gen")]
#[command(version, about = "Rewrite the Flutter bash launcher with LF line endings")]
struct Args {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    let config = LauncherConfig::default();
    let output_path = config.output_path.clone();
    tracing::info!("📁 Launcher target: {}", output_path.display());

    let task = LauncherTask::new(LocalStorage::new(), config);
    let message = TaskRunner::new(task)
        .run()
        .await
        .with_context(|| format!("failed to write launcher to {}", output_path.display()))?;

    print!("{}", message);
    Ok(())
}

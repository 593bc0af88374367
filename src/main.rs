use daily_journal::{Config, FileStore, Journal, SystemClock};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    let store = FileStore::open(config.data_dir.clone())?;
    info!("using journal data in {}", store.dir().display());

    let journal = Journal::open(store, SystemClock, &config);
    let report = journal.report();
    info!(
        "{} of {} milestones achieved",
        report.achieved_count, report.milestone_count
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

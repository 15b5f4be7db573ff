use attack_atlas::config::Config;
use attack_atlas::pipeline;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging - default to info level for our crate
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("attack_atlas=info")).init();

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Configuration error: {}", e);
            std::process::exit(2);
        }
    };
    log::debug!("Configuration: {:?}", config);

    let report = pipeline::run(&config).await;

    log::info!(
        "Run finished: {} CSV files, chart {}, map {}",
        report.csv_written.len(),
        if report.chart_written { "written" } else { "skipped" },
        if report.map_written { "written" } else { "skipped" }
    );
    match serde_json::to_string(&report) {
        Ok(json) => log::debug!("Run report: {}", json),
        Err(e) => log::warn!("Could not serialize run report: {}", e),
    }
    if !report.failures.is_empty() {
        log::warn!("{} step(s) failed; see errors above", report.failures.len());
    }
    log::info!("Process completed.");
}

// End-to-end run
// Fetch the four rankings one after another, export whatever arrived, then
// draw the chart and the map once all four are in hand. A failed step is
// logged and skips only the outputs that depend on it.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use crate::align::align;
use crate::chart::render_comparison;
use crate::config::Config;
use crate::export::export;
use crate::map::{render_map, BoundaryDataset, FlaggedCountrySet, Reconciler};
use crate::radar::{Endpoint, RadarClient, RankedEntry};

/// Ranking lists keyed by endpoint; an endpoint is absent if its fetch failed
#[derive(Debug, Clone, Default)]
pub struct Rankings {
    lists: BTreeMap<Endpoint, Vec<RankedEntry>>,
}

/// Borrowed view of a full set of four rankings
#[derive(Debug, Clone, Copy)]
pub struct CompleteRankings<'a> {
    pub layer7_origin: &'a [RankedEntry],
    pub layer7_target: &'a [RankedEntry],
    pub layer3_origin: &'a [RankedEntry],
    pub layer3_target: &'a [RankedEntry],
}

impl<'a> CompleteRankings<'a> {
    /// The four lists in fetch order
    pub fn lists(&self) -> [&'a [RankedEntry]; 4] {
        [self.layer7_origin, self.layer7_target, self.layer3_origin, self.layer3_target]
    }
}

impl Rankings {
    pub fn insert(&mut self, endpoint: Endpoint, entries: Vec<RankedEntry>) {
        self.lists.insert(endpoint, entries);
    }

    pub fn get(&self, endpoint: Endpoint) -> Option<&[RankedEntry]> {
        self.lists.get(&endpoint).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// All four lists, or None if any fetch failed
    pub fn complete(&self) -> Option<CompleteRankings<'_>> {
        Some(CompleteRankings {
            layer7_origin: self.get(Endpoint::LAYER7_ORIGIN)?,
            layer7_target: self.get(Endpoint::LAYER7_TARGET)?,
            layer3_origin: self.get(Endpoint::LAYER3_ORIGIN)?,
            layer3_target: self.get(Endpoint::LAYER3_TARGET)?,
        })
    }
}

/// What a run produced
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub csv_written: Vec<PathBuf>,
    pub chart_written: bool,
    pub map_written: bool,
    /// One message per failed step
    pub failures: Vec<String>,
}

impl RunReport {
    fn fail(&mut self, message: String) {
        log::error!("{}", message);
        self.failures.push(message);
    }
}

/// Fetch every ranking, logging failures
pub async fn fetch_all(client: &RadarClient) -> (Rankings, Vec<String>) {
    let mut rankings = Rankings::default();
    let mut failures = Vec::new();

    for endpoint in Endpoint::ALL {
        match client.fetch(endpoint).await {
            Ok(entries) => rankings.insert(endpoint, entries),
            Err(e) => {
                log::error!("{}", e);
                failures.push(e.to_string());
            }
        }
    }

    (rankings, failures)
}

/// Full run: fetch, then process
pub async fn run(config: &Config) -> RunReport {
    let client = match RadarClient::new(config.api.clone()) {
        Ok(c) => c,
        Err(e) => {
            let mut report = RunReport::default();
            report.fail(format!("Failed to build HTTP client: {}", e));
            return report;
        }
    };

    let (rankings, mut failures) = fetch_all(&client).await;
    let mut report = process(&rankings, config);
    failures.append(&mut report.failures);
    report.failures = failures;
    report
}

/// Everything after the fetch: exports, chart and map
pub fn process(rankings: &Rankings, config: &Config) -> RunReport {
    let mut report = RunReport::default();
    if rankings.is_empty() {
        log::warn!("No rankings were fetched; nothing to export");
        return report;
    }

    for endpoint in Endpoint::ALL {
        let Some(entries) = rankings.get(endpoint) else {
            continue;
        };
        let path = config.output_dir.join(endpoint.csv_file_name());
        match export(entries, &path, endpoint.direction) {
            Ok(0) => {}
            Ok(_) => report.csv_written.push(path),
            Err(e) => report.fail(e.to_string()),
        }
    }

    let Some(all) = rankings.complete() else {
        log::warn!(
            "Only {} of {} rankings available; skipping chart and map",
            rankings.len(),
            Endpoint::ALL.len()
        );
        return report;
    };

    let layer3 = align(all.layer3_origin, all.layer3_target);
    let layer7 = align(all.layer7_origin, all.layer7_target);
    match render_comparison(&layer3, &layer7, &config.chart_path(), config.chart_size) {
        Ok(written) => report.chart_written = written,
        Err(e) => report.fail(format!("Chart rendering failed: {}", e)),
    }

    let flagged = FlaggedCountrySet::from_rankings(all.lists());
    log::info!("{} flagged countries", flagged.len());

    let dataset = match BoundaryDataset::load(&config.boundary) {
        Ok(d) => d,
        Err(e) => {
            report.fail(format!("Skipping map: {}", e));
            return report;
        }
    };

    if dataset.is_empty() {
        log::warn!("Boundary dataset {} has no polygon features", config.boundary.path.display());
    }

    let reconciler = Reconciler::new();
    match render_map(
        &dataset,
        &flagged.to_alpha3(),
        &reconciler,
        &config.map_path(),
        config.map_size,
    ) {
        Ok(()) => report.map_written = true,
        Err(e) => report.fail(format!("Map rendering failed: {}", e)),
    }

    report
}

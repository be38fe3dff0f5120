//! Analysis orchestrator.
//!
//! Coordinates a batch run: executes each configured query against a
//! topology through a caching [`Analyzer`], gathers the results into an
//! [`AnalysisReport`] and writes the JSON and text reports.

use std::fs;
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use log::info;

use crate::analysis::report::{generate_json_report, generate_text_report};
use crate::analysis::{AnalysisReport, Analyzer, ReportMetadata};
use crate::config::Query;
use crate::topology::{Topology, TopologyError};

/// Run `queries` against `topology` and collect the results
pub fn run_queries(
    topology: &Topology,
    queries: &[Query],
    topology_source: &str,
) -> Result<AnalysisReport, TopologyError> {
    let mut analyzer = Analyzer::new(topology);
    let mut report = AnalysisReport {
        metadata: ReportMetadata {
            generated_at: chrono::Utc::now().to_rfc3339(),
            topology_source: topology_source.to_string(),
            vertex_count: topology.vertex_count(),
            link_count: topology.link_count(),
        },
        shortest_paths: Vec::new(),
        medium_connectivity: Vec::new(),
        spanning_forest: None,
        robustness: None,
    };

    for query in queries {
        info!("Running query {:?}", query);
        match *query {
            Query::ShortestPath { from, to } => {
                report.shortest_paths.push(analyzer.shortest_path(from, to)?);
            }
            Query::MediumConnected { medium } => {
                report.medium_connectivity.push(analyzer.medium_connectivity(medium));
            }
            Query::SpanningForest => {
                report.spanning_forest = Some(analyzer.spanning_forest()?);
            }
            Query::Robustness => {
                report.robustness = Some(analyzer.robustness());
            }
        }
    }

    Ok(report)
}

/// Write `report.json` and `report.txt` into `output_dir`
pub fn write_reports(report: &AnalysisReport, output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir)
        .wrap_err_with(|| format!("Failed to create output directory '{}'", output_dir.display()))?;

    generate_json_report(report, &output_dir.join("report.json"))?;
    generate_text_report(report, &output_dir.join("report.txt"))?;
    Ok(())
}

//! Report generation for topology analyses.
//!
//! Generates both JSON and human-readable text reports, plus the small
//! formatting helpers shared with the interactive mode.

use std::fs;
use std::path::Path;

use color_eyre::eyre::{Context, Result};

use super::types::*;
use crate::topology::WeightedLink;

/// Render links the way paths are shown to users: `[0 <-> 1, 1 <-> 2]`
pub fn format_links(links: &[WeightedLink]) -> String {
    let parts: Vec<String> = links.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(", "))
}

/// Bandwidth in Gbit/s; `None` (unbounded) is shown as `inf`
pub fn format_bandwidth(bandwidth: Option<u32>) -> String {
    match bandwidth {
        Some(mbps) => format!("{}", f64::from(mbps) / 1000.0),
        None => "inf".to_string(),
    }
}

/// One-paragraph description of a shortest path query
pub fn describe_path(path: &ShortestPath) -> Vec<String> {
    let mut lines = Vec::new();
    if path.is_trivial() {
        lines.push(format!("Path: {} <-> {}", path.source, path.target));
        lines.push(format!(
            "Bandwidth available: {} gigabits per second",
            format_bandwidth(None)
        ));
    } else if path.exists {
        lines.push(format!("Path: {}", format_links(&path.links)));
        lines.push(format!("Latency: {}E-7 seconds", path.distance));
        lines.push(format!(
            "Bandwidth available: {} gigabits per second",
            format_bandwidth(path.bottleneck_bandwidth)
        ));
    } else {
        lines.push(format!("No path was found from {} to {}.", path.source, path.target));
    }
    lines
}

/// Generate JSON report
pub fn generate_json_report(report: &AnalysisReport, output_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)
        .context("Failed to serialize report to JSON")?;

    fs::write(output_path, json)
        .with_context(|| format!("Failed to write JSON report to {}", output_path.display()))?;

    log::info!("JSON report written to {}", output_path.display());
    Ok(())
}

/// Build the human-readable text report
pub fn render_text_report(report: &AnalysisReport) -> String {
    let mut lines: Vec<String> = Vec::new();

    // Header
    lines.push("=".repeat(80));
    lines.push("                          NETWORK TOPOLOGY ANALYSIS".to_string());
    lines.push("=".repeat(80));
    lines.push(String::new());

    lines.push(format!("Analysis Date: {}", report.metadata.generated_at));
    lines.push(format!("Topology: {}", report.metadata.topology_source));
    lines.push(format!("Vertices: {}", report.metadata.vertex_count));
    lines.push(format!("Links: {}", report.metadata.link_count));
    lines.push(String::new());

    if !report.shortest_paths.is_empty() {
        lines.push("Lowest-Latency Paths:".to_string());
        for path in &report.shortest_paths {
            lines.push(format!("  {} -> {}", path.source, path.target));
            for line in describe_path(path) {
                lines.push(format!("    {}", line));
            }
        }
        lines.push(String::new());
    }

    if !report.medium_connectivity.is_empty() {
        lines.push("Single-Medium Connectivity:".to_string());
        for medium in &report.medium_connectivity {
            let verdict = if medium.connected { "connected" } else { "NOT connected" };
            lines.push(format!(
                "  {}-only: {} ({} of {} vertices reachable from vertex 0)",
                medium.medium, verdict, medium.reached_vertices, medium.total_vertices
            ));
        }
        lines.push(String::new());
    }

    if let Some(ref forest) = report.spanning_forest {
        lines.push("Lowest Average Latency Spanning Forest:".to_string());
        lines.push(format!("  Weight of the forest: {}E-7 seconds", forest.total_weight));
        lines.push(format!("  Trees: {}", forest.tree_count));
        lines.push(format!("  Edges in the forest: {}", format_links(&forest.edges)));
        lines.push(String::new());
    }

    if let Some(ref robustness) = report.robustness {
        lines.push("Two-Vertex Failure Tolerance:".to_string());
        if robustness.robust {
            lines.push("  The network would remain connected if any two vertices fail.".to_string());
        } else {
            lines.push("  The network would NOT remain connected.".to_string());
            if let Some(pair) = robustness.failing_pair {
                lines.push(format!(
                    "  Failing vertices {} and {} disconnect it.",
                    pair.excluded, pair.critical
                ));
            }
        }
        lines.push(String::new());
    }

    // Footer
    lines.push("=".repeat(80));
    lines.join("\n")
}

/// Generate human-readable text report
pub fn generate_text_report(report: &AnalysisReport, output_path: &Path) -> Result<()> {
    let content = render_text_report(report);
    fs::write(output_path, content)
        .with_context(|| format!("Failed to write text report to {}", output_path.display()))?;

    log::info!("Text report written to {}", output_path.display());
    Ok(())
}

/// Print a summary to stdout
pub fn print_summary(report: &AnalysisReport) {
    println!("\n=== NETWORK ANALYSIS SUMMARY ===\n");
    println!("Vertices: {}", report.metadata.vertex_count);
    println!("Links: {}", report.metadata.link_count);

    let reachable = report.shortest_paths.iter().filter(|p| p.exists).count();
    if !report.shortest_paths.is_empty() {
        println!("\nPaths: {} of {} queries reachable", reachable, report.shortest_paths.len());
    }

    for medium in &report.medium_connectivity {
        println!("{}-only connected: {}", medium.medium, medium.connected);
    }

    if let Some(ref forest) = report.spanning_forest {
        println!("Spanning forest weight: {}E-7 seconds", forest.total_weight);
    }

    if let Some(ref robustness) = report.robustness {
        println!("Survives any two failures: {}", robustness.robust);
    }

    println!();
}

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::compound::CompoundGraph;
use super::parse::parse_snapshot;

pub fn load_network(path: &Path) -> Result<CompoundGraph> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read network snapshot {}", path.display()))?;

    let snapshot = parse_snapshot(&raw)
        .with_context(|| format!("failed to parse network snapshot {}", path.display()))?;

    let graph = CompoundGraph::build(&snapshot)
        .with_context(|| format!("malformed network snapshot {}", path.display()))?;

    log::info!(
        "loaded {} nodes and {} edges from {} ({} duplicate or self edges dropped)",
        graph.len(),
        graph.edge_count(),
        path.display(),
        snapshot.edge_count().saturating_sub(graph.edge_count()),
    );

    Ok(graph)
}

use std::collections::BTreeMap;
use std::fmt::Write as _;

use anyhow::Context;
use serde::Serialize;

use crate::filter::{Highlight, SearchMatch, VisibilityOutcome};
use crate::network::{CompoundGraph, SourceVisibility};
use crate::util::format_weight;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub threshold: f64,
    pub node_count: usize,
    pub edge_count: usize,
    pub sources: &'a SourceVisibility,
    pub outcome: &'a VisibilityOutcome,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub newly_hidden: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<Highlight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<Vec<SearchMatch>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub seed_genes: BTreeMap<String, bool>,
}

impl Report<'_> {
    pub fn render(&self, graph: &CompoundGraph, format: OutputFormat) -> anyhow::Result<String> {
        match format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(self).context("failed to encode report as JSON")
            }
            OutputFormat::Text => Ok(self.render_text(graph)),
        }
    }

    fn render_text(&self, graph: &CompoundGraph) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} of {} nodes visible at threshold {}%",
            self.outcome.visible_count(),
            self.node_count,
            format_weight(self.threshold),
        );

        let sources = self
            .sources
            .sources()
            .map(|(name, on)| format!("{name}={}", if on { "on" } else { "off" }))
            .collect::<Vec<_>>();
        let _ = writeln!(out, "sources: {}", sources.join(", "));

        let _ = writeln!(out, "\nvisible:");
        for id in &self.outcome.visible {
            let Some(index) = graph.index_of(id) else {
                continue;
            };
            let node = graph.node(index);
            let _ = writeln!(
                out,
                "  {id:<24} {:<22} {:>6}  {}",
                node.glyph_class,
                format_weight(self.outcome.weights.get(id)),
                node.label,
            );
        }

        if !self.outcome.hidden_by_disconnection.is_empty() {
            let _ = writeln!(
                out,
                "\nremoved as disconnected: {}",
                self.outcome.hidden_by_disconnection.join(", ")
            );
        }
        if !self.newly_hidden.is_empty() {
            let _ = writeln!(out, "\nhidden by selection: {}", self.newly_hidden.join(", "));
        }

        if let Some(highlight) = &self.highlight {
            let _ = writeln!(out, "\nhighlighted nodes: {}", highlight.nodes.join(", "));
            for (source, target) in &highlight.edges {
                let _ = writeln!(out, "  {source} -- {target}");
            }
        }

        if let Some(matches) = &self.search {
            let _ = writeln!(out, "\nsearch matches: {}", matches.len());
            for hit in matches {
                let _ = writeln!(out, "  {:<24} {}", hit.id, hit.label);
            }
        }

        if !self.seed_genes.is_empty() {
            let _ = writeln!(out, "\nseed genes:");
            for (gene, shown) in &self.seed_genes {
                let _ = writeln!(out, "  {gene:<12} {}", if *shown { "shown" } else { "hidden" });
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::VisibilityPolicy;
    use crate::network::{EdgeRecord, GlyphClass, NetworkSnapshot, NodeRecord};
    use crate::weights::alteration_weights;

    fn graph() -> CompoundGraph {
        let snapshot = NetworkSnapshot {
            nodes: vec![
                NodeRecord::new("g1", GlyphClass::Macromolecule)
                    .with_label("MYC")
                    .with_percent_altered(0.3),
                NodeRecord::new("p1", GlyphClass::Process).with_data_source("Reactome"),
                NodeRecord::new("g2", GlyphClass::Macromolecule).with_label("MAX"),
            ],
            edges: vec![EdgeRecord::new("g1", "p1"), EdgeRecord::new("p1", "g2")],
        };
        CompoundGraph::build(&snapshot).unwrap()
    }

    #[test]
    fn text_report_lists_visible_nodes() {
        let graph = graph();
        let policy = VisibilityPolicy {
            threshold: 10.0,
            ..VisibilityPolicy::new(&graph)
        };
        let outcome = policy.apply(&graph, &alteration_weights(&graph));
        let report = Report {
            threshold: 10.0,
            node_count: graph.len(),
            edge_count: graph.edge_count(),
            sources: &policy.source_visibility,
            outcome: &outcome,
            newly_hidden: Vec::new(),
            highlight: None,
            search: None,
            seed_genes: BTreeMap::from([("MYC".to_string(), true)]),
        };

        let text = report.render(&graph, OutputFormat::Text).unwrap();
        assert!(text.starts_with("3 of 3 nodes visible at threshold 10.0%"));
        assert!(text.contains("REACTOME=on"));
        assert!(text.contains("30.0"));
        assert!(text.contains("MYC          shown"));
        assert!(!text.contains("search matches"));
    }

    #[test]
    fn json_report_skips_empty_sections() {
        let graph = graph();
        let policy = VisibilityPolicy::new(&graph);
        let outcome = policy.apply(&graph, &alteration_weights(&graph));
        let report = Report {
            threshold: 0.0,
            node_count: graph.len(),
            edge_count: graph.edge_count(),
            sources: &policy.source_visibility,
            outcome: &outcome,
            newly_hidden: Vec::new(),
            highlight: None,
            search: Some(Vec::new()),
            seed_genes: BTreeMap::new(),
        };

        let json = report.render(&graph, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["outcome"]["visible"].as_array().map(Vec::len), Some(3));
        assert_eq!(value["sources"]["REACTOME"], serde_json::Value::Bool(true));
        assert!(value.get("highlight").is_none());
        assert!(value.get("seed_genes").is_none());
        assert_eq!(value["search"], serde_json::json!([]));
    }
}

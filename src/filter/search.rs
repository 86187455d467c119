use std::collections::{BTreeMap, HashSet};

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use serde::Serialize;

use crate::network::CompoundGraph;
use crate::util::gene_label;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Substring,
    Fuzzy,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchMatch {
    pub id: String,
    pub label: String,
    pub kind: MatchKind,
    pub score: i64,
}

fn fuzzy_match_score(matcher: &SkimMatcherV2, text: &str, query: &str) -> Option<i64> {
    matcher
        .fuzzy_match(text, query)
        .or_else(|| matcher.fuzzy_match(&text.to_ascii_lowercase(), &query.to_ascii_lowercase()))
}

/// Matches `query` against the labels of `candidates`, usually the nodes
/// currently on screen. Substring hits compare gene symbols, so punctuation
/// on either side is ignored, and rank ahead of fuzzy ones.
pub fn search_nodes<'a>(
    graph: &CompoundGraph,
    candidates: impl IntoIterator<Item = &'a str>,
    query: &str,
) -> Vec<SearchMatch> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let needle = gene_label(query);
    let matcher = SkimMatcherV2::default();
    let mut matches = candidates
        .into_iter()
        .filter_map(|id| {
            let node = graph.node(graph.index_of(id)?);
            let label = if node.label.is_empty() {
                node.id.as_str()
            } else {
                node.label.as_str()
            };

            let symbol = gene_label(label);
            if let Some(position) = symbol.find(&needle).filter(|_| !needle.is_empty()) {
                let score = -(position as i64) * 1000 - symbol.len() as i64;
                return Some(SearchMatch {
                    id: node.id.clone(),
                    label: label.to_string(),
                    kind: MatchKind::Substring,
                    score,
                });
            }

            fuzzy_match_score(&matcher, label, query).map(|score| SearchMatch {
                id: node.id.clone(),
                label: label.to_string(),
                kind: MatchKind::Fuzzy,
                score,
            })
        })
        .collect::<Vec<_>>();

    matches.sort_by(|a, b| {
        a.kind
            .cmp(&b.kind)
            .then_with(|| b.score.cmp(&a.score))
            .then_with(|| a.id.cmp(&b.id))
    });
    matches.dedup_by(|a, b| a.id == b.id);
    matches
}

pub fn find_nodes_by_label(graph: &CompoundGraph, label: &str) -> Vec<String> {
    let wanted = gene_label(label);
    if wanted.is_empty() {
        return Vec::new();
    }

    graph
        .nodes()
        .filter(|node| gene_label(&node.label) == wanted)
        .map(|node| node.id.clone())
        .collect()
}

/// For each gene label, whether at least one visible node carries it.
pub fn visible_gene_map(
    graph: &CompoundGraph,
    visible: &[String],
    gene_labels: &[String],
) -> BTreeMap<String, bool> {
    let shown = visible
        .iter()
        .filter_map(|id| graph.index_of(id))
        .map(|index| gene_label(&graph.node(index).label))
        .collect::<HashSet<_>>();

    gene_labels
        .iter()
        .map(|label| {
            let label = gene_label(label);
            let on_screen = shown.contains(&label);
            (label, on_screen)
        })
        .collect()
}

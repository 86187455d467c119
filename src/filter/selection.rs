use std::collections::HashSet;

use serde::Serialize;

use crate::network::CompoundGraph;
use crate::util::gene_label;
use crate::weights::{WeightMap, propagate};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub nodes: Vec<String>,
    pub edges: Vec<(String, String)>,
}

/// Selected nodes at weight 1, everything else at 0, run through propagation.
pub fn propagate_selection(graph: &CompoundGraph, selected: &[String]) -> WeightMap {
    let selected = selected.iter().map(String::as_str).collect::<HashSet<_>>();
    let initial = graph
        .nodes()
        .map(|node| {
            let weight = if selected.contains(node.id.as_str()) { 1.0 } else { 0.0 };
            (node.id.as_str(), weight)
        })
        .collect::<WeightMap>();
    propagate(graph, &initial)
}

pub fn hide_selected(graph: &CompoundGraph, selected: &[String]) -> Vec<String> {
    let weights = propagate_selection(graph, selected);
    graph
        .nodes()
        .filter(|node| weights.get(&node.id) >= 1.0)
        .map(|node| node.id.clone())
        .collect()
}

pub fn hide_unselected(graph: &CompoundGraph, selected: &[String]) -> Vec<String> {
    let weights = propagate_selection(graph, selected);
    graph
        .nodes()
        .filter(|node| weights.get(&node.id) <= 0.0)
        .map(|node| node.id.clone())
        .collect()
}

pub fn highlight_processes(graph: &CompoundGraph, selected: &[String]) -> Highlight {
    let weights = propagate_selection(graph, selected);
    let lit = (0..graph.len())
        .map(|index| weights.get(graph.id(index)) >= 1.0)
        .collect::<Vec<_>>();

    let nodes = (0..graph.len())
        .filter(|&index| lit[index])
        .map(|index| graph.id(index).to_string())
        .collect();
    let edges = graph
        .edges()
        .iter()
        .filter(|&&(source, target)| lit[source] && lit[target])
        .map(|&(source, target)| (graph.id(source).to_string(), graph.id(target).to_string()))
        .collect();

    Highlight { nodes, edges }
}

/// The selection, its first-order neighbors, and every edge touching a
/// selected node.
pub fn highlight_neighbors(graph: &CompoundGraph, selected: &[String]) -> Highlight {
    let mut root = vec![false; graph.len()];
    for index in selected.iter().filter_map(|id| graph.index_of(id)) {
        root[index] = true;
    }

    let mut lit = root.clone();
    for index in (0..graph.len()).filter(|&index| root[index]) {
        for &neighbor in graph.neighbors(index) {
            lit[neighbor] = true;
        }
    }

    let nodes = (0..graph.len())
        .filter(|&index| lit[index])
        .map(|index| graph.id(index).to_string())
        .collect();
    let edges = graph
        .edges()
        .iter()
        .filter(|&&(source, target)| root[source] || root[target])
        .map(|&(source, target)| (graph.id(source).to_string(), graph.id(target).to_string()))
        .collect();

    Highlight { nodes, edges }
}

/// Widens a selection so that picking one state of a gene picks all of them.
/// Only gene-bearing glyphs expand; anything else stays as selected.
pub fn same_label_nodes(graph: &CompoundGraph, selected: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut expanded = Vec::new();

    for id in selected {
        let Some(index) = graph.index_of(id) else {
            continue;
        };
        let node = graph.node(index);

        let label = gene_label(&node.label);
        if node.glyph_class.carries_gene_label() && !label.is_empty() {
            for other in graph.nodes() {
                if gene_label(&other.label) == label && seen.insert(other.id.as_str()) {
                    expanded.push(other.id.clone());
                }
            }
        } else if seen.insert(node.id.as_str()) {
            expanded.push(node.id.clone());
        }
    }

    expanded
}

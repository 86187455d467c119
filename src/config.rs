use std::collections::BTreeSet;

use clap::Args;

use crate::filter::{VisibilityPolicy, find_nodes_by_label};
use crate::network::CompoundGraph;
use crate::weights::{Threshold, WeightMap, max_alteration};

/// Filter options shared by every action, as given on the command line.
#[derive(Clone, Debug, Default, Args)]
pub struct FilterSettings {
    /// Alteration threshold in percent; anything unparsable means 0
    #[arg(long, value_name = "PCT")]
    pub threshold: Option<String>,

    /// Slider position in [0, 100]; overrides --threshold
    #[arg(long, value_name = "POS")]
    pub slider: Option<f64>,

    /// Hide a node by id
    #[arg(long = "hide", value_name = "ID")]
    pub hidden: Vec<String>,

    /// Turn off processes from a data source
    #[arg(long = "disable-source", value_name = "NAME")]
    pub disabled_sources: Vec<String>,

    /// Keep a node even when it has no edges
    #[arg(long = "pin", value_name = "ID")]
    pub pinned: Vec<String>,

    /// Seed gene label; matching nodes are pinned
    #[arg(long = "seed", value_name = "LABEL")]
    pub seed_labels: Vec<String>,

    /// Drop top-level nodes without edges
    #[arg(long)]
    pub remove_disconnected: bool,

    /// Flatten compartments out of the containment tree
    #[arg(long)]
    pub hide_compartments: bool,

    /// Show only nodes whose propagated weight reaches this value
    #[arg(long, value_name = "W")]
    pub min_weight: Option<f64>,
}

impl FilterSettings {
    pub fn threshold(&self, alteration: &WeightMap) -> Threshold {
        match (self.slider, self.threshold.as_deref()) {
            (Some(position), _) => Threshold::from_slider(position, max_alteration(alteration)),
            (None, Some(text)) => Threshold::from_input(text),
            (None, None) => Threshold::DEFAULT,
        }
    }

    /// Seed nodes: everything flagged as queried plus every node whose gene
    /// label matches one of the seed labels.
    pub fn seed_nodes(&self, graph: &CompoundGraph) -> BTreeSet<String> {
        let mut seeds = graph
            .nodes()
            .filter(|node| node.in_query)
            .map(|node| node.id.clone())
            .collect::<BTreeSet<_>>();
        for label in &self.seed_labels {
            let found = find_nodes_by_label(graph, label);
            if found.is_empty() {
                log::warn!("seed label {label:?} matches no node");
            }
            seeds.extend(found);
        }
        seeds
    }

    pub fn policy(&self, graph: &CompoundGraph, alteration: &WeightMap) -> VisibilityPolicy {
        let mut policy = VisibilityPolicy::new(graph);
        policy.threshold = self.threshold(alteration).value();
        policy.remove_disconnected = self.remove_disconnected;
        policy.min_weight = self.min_weight;

        for id in &self.hidden {
            if !graph.contains(id) {
                log::warn!("cannot hide unknown node {id:?}");
            }
            policy.manually_hidden.insert(id.clone());
        }
        for source in &self.disabled_sources {
            policy.source_visibility.disable(source);
        }

        policy.pinned.extend(self.pinned.iter().cloned());
        policy.pinned.extend(self.seed_nodes(graph));
        policy
    }
}

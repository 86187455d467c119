use std::collections::BTreeMap;

use clap::ValueEnum;

use crate::config::FilterSettings;
use crate::filter::{
    Highlight, SearchMatch, VisibilityOutcome, VisibilityPolicy, hide_selected, hide_unselected,
    highlight_neighbors, highlight_processes, same_label_nodes, search_nodes, visible_gene_map,
};
use crate::network::CompoundGraph;
use crate::report::Report;
use crate::weights::alteration_weights;

/// What to do with the selection before the visibility pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Action {
    #[default]
    Visible,
    HideSelected,
    HideUnselected,
    Highlight,
    HighlightNeighbors,
}

/// Result of one filtering run over a loaded network.
#[derive(Debug)]
pub struct FilterRun {
    pub graph: CompoundGraph,
    pub policy: VisibilityPolicy,
    pub outcome: VisibilityOutcome,
    pub newly_hidden: Vec<String>,
    pub highlight: Option<Highlight>,
}

impl FilterRun {
    /// Flattens compartments if asked, applies `action` to the selection, and
    /// runs the visibility pass. Ids hidden by the action join the manually
    /// hidden set.
    pub fn execute(
        graph: CompoundGraph,
        settings: &FilterSettings,
        action: Action,
        selected: &[String],
        expand_labels: bool,
    ) -> Self {
        let graph = if settings.hide_compartments {
            graph.without_compartments()
        } else {
            graph
        };

        let alteration = alteration_weights(&graph);
        let mut policy = settings.policy(&graph, &alteration);

        let selected = if expand_labels {
            same_label_nodes(&graph, selected)
        } else {
            selected.to_vec()
        };
        if action != Action::Visible && selected.is_empty() {
            log::warn!("{action:?} with an empty selection");
        }

        let mut newly_hidden = Vec::new();
        let mut highlight = None;
        match action {
            Action::Visible => {}
            Action::HideSelected => newly_hidden = hide_selected(&graph, &selected),
            Action::HideUnselected => newly_hidden = hide_unselected(&graph, &selected),
            Action::Highlight => highlight = Some(highlight_processes(&graph, &selected)),
            Action::HighlightNeighbors => {
                highlight = Some(highlight_neighbors(&graph, &selected));
            }
        }
        policy.manually_hidden.extend(newly_hidden.iter().cloned());

        let outcome = policy.apply(&graph, &alteration);
        Self {
            graph,
            policy,
            outcome,
            newly_hidden,
            highlight,
        }
    }

    pub fn search(&self, query: &str) -> Vec<SearchMatch> {
        search_nodes(
            &self.graph,
            self.outcome.visible.iter().map(String::as_str),
            query,
        )
    }

    pub fn seed_genes(&self, settings: &FilterSettings) -> BTreeMap<String, bool> {
        visible_gene_map(&self.graph, &self.outcome.visible, &settings.seed_labels)
    }

    pub fn report(
        &self,
        search: Option<Vec<SearchMatch>>,
        seed_genes: BTreeMap<String, bool>,
    ) -> Report<'_> {
        Report {
            threshold: self.policy.threshold,
            node_count: self.graph.len(),
            edge_count: self.graph.edge_count(),
            sources: &self.policy.source_visibility,
            outcome: &self.outcome,
            newly_hidden: self.newly_hidden.clone(),
            highlight: self.highlight.clone(),
            search,
            seed_genes,
        }
    }
}

/// Default log filter for a `-v` count; `RUST_LOG` still overrides it.
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

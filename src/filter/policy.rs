use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use crate::network::{CompoundGraph, SourceVisibility, source_of};
use crate::weights::{WeightMap, propagate};

/// Seed weight for a node that passes every filter but has no alteration
/// data, so it still counts as shown once propagated.
pub const MIN_SEED_WEIGHT: f64 = f64::MIN_POSITIVE;

#[derive(Clone, Debug, Default)]
pub struct VisibilityPolicy {
    pub manually_hidden: BTreeSet<String>,
    pub source_visibility: SourceVisibility,
    pub threshold: f64,
    /// Hides visible top-level nodes that have no edges in the whole graph.
    /// Containers and pinned ids are spared. An isolated node with its own
    /// passing seed is always kept, so in practice this only drops edgeless
    /// nodes that were lit up through their children.
    pub remove_disconnected: bool,
    pub pinned: BTreeSet<String>,
    /// Graded filtering: when set, a node is shown only if its propagated
    /// weight reaches this value instead of merely being positive.
    pub min_weight: Option<f64>,
}

#[derive(Clone, Debug, Serialize)]
pub struct VisibilityOutcome {
    pub weights: WeightMap,
    pub visible: Vec<String>,
    pub hidden_by_disconnection: Vec<String>,
    #[serde(skip)]
    visible_ids: HashSet<String>,
}

impl VisibilityOutcome {
    pub fn is_visible(&self, id: &str) -> bool {
        self.visible_ids.contains(id)
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }
}

impl VisibilityPolicy {
    pub fn new(graph: &CompoundGraph) -> Self {
        Self {
            source_visibility: SourceVisibility::from_graph(graph),
            ..Self::default()
        }
    }

    /// Weight a node enters propagation with. Manual hiding wins over the
    /// source flags, which win over the alteration threshold.
    pub fn seed_weight(&self, graph: &CompoundGraph, index: usize, alteration: f64) -> f64 {
        let node = graph.node(index);
        if self.manually_hidden.contains(&node.id) {
            return 0.0;
        }
        if node.glyph_class.is_process() && !self.source_visibility.is_visible(&source_of(node)) {
            return 0.0;
        }
        if alteration < self.threshold {
            return 0.0;
        }
        alteration.max(MIN_SEED_WEIGHT)
    }

    pub fn apply(&self, graph: &CompoundGraph, alteration: &WeightMap) -> VisibilityOutcome {
        let seeds = (0..graph.len())
            .map(|index| {
                let id = graph.id(index);
                (id, self.seed_weight(graph, index, alteration.get(id)))
            })
            .collect::<WeightMap>();
        let weights = propagate(graph, &seeds);

        let mut visible = Vec::new();
        let mut hidden_by_disconnection = Vec::new();
        for index in 0..graph.len() {
            let node = graph.node(index);
            let isolated = graph.neighbors(index).is_empty();
            let kept_isolated = isolated && seeds.get(&node.id) > 0.0;

            if !kept_isolated && !self.passes(weights.get(&node.id)) {
                continue;
            }

            if self.remove_disconnected
                && isolated
                && !kept_isolated
                && graph.parent(index).is_none()
                && !node.glyph_class.is_container()
                && !self.pinned.contains(&node.id)
            {
                hidden_by_disconnection.push(node.id.clone());
                continue;
            }

            visible.push(node.id.clone());
        }

        log::debug!(
            "{} of {} nodes visible at threshold {:.2} ({} manually hidden, {} removed as disconnected)",
            visible.len(),
            graph.len(),
            self.threshold,
            self.manually_hidden.len(),
            hidden_by_disconnection.len(),
        );

        let visible_ids = visible.iter().cloned().collect();
        VisibilityOutcome {
            weights,
            visible,
            hidden_by_disconnection,
            visible_ids,
        }
    }

    fn passes(&self, weight: f64) -> bool {
        match self.min_weight {
            Some(min_weight) => weight > 0.0 && weight >= min_weight,
            None => weight > 0.0,
        }
    }
}

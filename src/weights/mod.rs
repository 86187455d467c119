mod alteration;
mod propagate;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::network::CompoundGraph;

pub use alteration::{
    Threshold, alteration_weights, max_alteration, reverse_slider_transform, slider_transform,
};
pub use propagate::propagate;

/// Node id to weight. A missing id reads as weight `0.0`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WeightMap {
    weights: BTreeMap<String, f64>,
}

impl WeightMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> f64 {
        self.weights.get(id).copied().unwrap_or(0.0)
    }

    pub fn set(&mut self, id: impl Into<String>, weight: f64) {
        self.weights.insert(id.into(), weight);
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(id, weight)| (id.as_str(), *weight))
    }

    pub fn max_weight(&self) -> f64 {
        self.weights.values().copied().fold(0.0, f64::max)
    }

    pub(crate) fn to_dense(&self, graph: &CompoundGraph) -> Vec<f64> {
        graph.nodes().map(|node| self.get(&node.id)).collect()
    }

    pub(crate) fn from_dense(graph: &CompoundGraph, dense: &[f64]) -> Self {
        graph
            .nodes()
            .zip(dense.iter())
            .map(|(node, weight)| (node.id.clone(), *weight))
            .collect()
    }
}

impl FromIterator<(String, f64)> for WeightMap {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, f64)> for WeightMap {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(id, weight)| (id.to_string(), weight))
            .collect()
    }
}

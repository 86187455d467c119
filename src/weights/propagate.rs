use std::collections::VecDeque;

use crate::network::CompoundGraph;

use super::WeightMap;

/// Node classes the passes iterate over, computed once per call.
struct PropagationPlan {
    processes: Vec<usize>,
    leaves: Vec<usize>,
    top_complexes: Vec<usize>,
}

impl PropagationPlan {
    fn new(graph: &CompoundGraph) -> Self {
        let mut processes = Vec::new();
        let mut leaves = Vec::new();
        let mut top_complexes = Vec::new();

        for index in 0..graph.len() {
            let glyph = graph.glyph(index);
            if glyph.is_process() {
                processes.push(index);
            }
            if graph.is_leaf(index) {
                leaves.push(index);
            }
            if glyph.is_complex()
                && !graph
                    .parent(index)
                    .is_some_and(|parent| graph.glyph(parent).is_complex())
            {
                top_complexes.push(index);
            }
        }

        Self {
            processes,
            leaves,
            top_complexes,
        }
    }
}

/// Raises node weights until every visibility rule holds:
///
/// - a process carries at least the largest weight among its neighbors,
/// - every neighbor of a process carries at least the process weight,
/// - every container carries at least the weight of each descendant,
/// - every member of a complex (recursively through nested complexes)
///   carries exactly the weight of its outermost complex.
///
/// Weights never decrease. The passes repeat until a whole round raises
/// nothing, so the result is a fixed point: propagating it again returns it
/// unchanged. Ids in `initial` that are not in `graph` are ignored; graph
/// nodes missing from `initial` start at zero.
pub fn propagate(graph: &CompoundGraph, initial: &WeightMap) -> WeightMap {
    let plan = PropagationPlan::new(graph);
    let mut weights = initial.to_dense(graph);

    let mut rounds = 0usize;
    let mut raised = 0usize;
    loop {
        rounds += 1;
        let changed = raise_processes_from_neighbors(graph, &plan, &mut weights)
            + raise_process_neighbors(graph, &plan, &mut weights)
            + raise_ancestors(graph, &plan, &mut weights)
            + push_down_complexes(graph, &plan, &mut weights);
        raised += changed;

        if changed == 0 {
            break;
        }
    }

    log::debug!(
        "weight propagation settled after {rounds} round(s): {raised} raise(s) over {} nodes",
        graph.len()
    );

    WeightMap::from_dense(graph, &weights)
}

fn raise(weights: &mut [f64], index: usize, candidate: f64) -> usize {
    if candidate > weights[index] {
        weights[index] = candidate;
        1
    } else {
        0
    }
}

fn raise_processes_from_neighbors(
    graph: &CompoundGraph,
    plan: &PropagationPlan,
    weights: &mut [f64],
) -> usize {
    let mut changed = 0;
    for &process in &plan.processes {
        let strongest = graph
            .neighbors(process)
            .iter()
            .map(|&neighbor| weights[neighbor])
            .fold(0.0, f64::max);
        changed += raise(weights, process, strongest);
    }
    changed
}

fn raise_process_neighbors(
    graph: &CompoundGraph,
    plan: &PropagationPlan,
    weights: &mut [f64],
) -> usize {
    let mut changed = 0;
    for &process in &plan.processes {
        let weight = weights[process];
        for &neighbor in graph.neighbors(process) {
            changed += raise(weights, neighbor, weight);
        }
    }
    changed
}

// Walks the full chain: an inner container may hold a larger weight of its
// own than the leaf that started the walk.
fn raise_ancestors(graph: &CompoundGraph, plan: &PropagationPlan, weights: &mut [f64]) -> usize {
    let mut changed = 0;
    for &leaf in &plan.leaves {
        let mut current = leaf;
        while let Some(parent) = graph.parent(current) {
            changed += raise(weights, parent, weights[current]);
            current = parent;
        }
    }
    changed
}

// Runs after `raise_ancestors`, so each complex already dominates its members
// and raising them to its weight makes them equal.
fn push_down_complexes(
    graph: &CompoundGraph,
    plan: &PropagationPlan,
    weights: &mut [f64],
) -> usize {
    let mut changed = 0;
    let mut queue = plan
        .top_complexes
        .iter()
        .copied()
        .filter(|&complex| weights[complex] > 0.0)
        .collect::<VecDeque<_>>();

    while let Some(complex) = queue.pop_front() {
        let weight = weights[complex];
        for &child in graph.children(complex) {
            changed += raise(weights, child, weight);
            if graph.glyph(child).is_complex() {
                queue.push_back(child);
            }
        }
    }
    changed
}

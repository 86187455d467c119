use std::collections::{HashMap, HashSet};

use super::error::SnapshotError;
use super::glyph::GlyphClass;
use super::graph::{NetworkSnapshot, NodeRecord};

/// Arena-indexed view of a snapshot: node ids are mapped to dense indices once,
/// and containment and adjacency are stored as index lists.
#[derive(Clone, Debug)]
pub struct CompoundGraph {
    nodes: Vec<NodeRecord>,
    index_by_id: HashMap<String, usize>,
    parent: Vec<Option<usize>>,
    children: Vec<Vec<usize>>,
    neighbors: Vec<Vec<usize>>,
    edges: Vec<(usize, usize)>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    New,
    OnPath,
    Done,
}

impl CompoundGraph {
    pub fn build(snapshot: &NetworkSnapshot) -> Result<Self, SnapshotError> {
        let mut index_by_id = HashMap::with_capacity(snapshot.nodes.len());
        for (index, node) in snapshot.nodes.iter().enumerate() {
            // Alteration is a fraction of samples.
            if let Some(value) = node.percent_altered
                && !(0.0..=1.0).contains(&value)
            {
                return Err(SnapshotError::InvalidAlteration {
                    node: node.id.clone(),
                    value,
                });
            }

            if index_by_id.insert(node.id.clone(), index).is_some() {
                return Err(SnapshotError::DuplicateNode(node.id.clone()));
            }
        }

        let mut parent = Vec::with_capacity(snapshot.nodes.len());
        for node in &snapshot.nodes {
            let parent_index = match &node.parent {
                Some(parent_id) => Some(index_by_id.get(parent_id).copied().ok_or_else(|| {
                    SnapshotError::UnknownParent {
                        node: node.id.clone(),
                        parent: parent_id.clone(),
                    }
                })?),
                None => None,
            };
            parent.push(parent_index);
        }

        if let Some(index) = find_containment_cycle(&parent) {
            return Err(SnapshotError::ContainmentCycle(
                snapshot.nodes[index].id.clone(),
            ));
        }

        let mut edges = Vec::with_capacity(snapshot.edges.len());
        for edge in &snapshot.edges {
            let lookup = |id: &String| {
                index_by_id
                    .get(id)
                    .copied()
                    .ok_or_else(|| SnapshotError::UnknownEdgeEndpoint {
                        from: edge.source.clone(),
                        to: edge.target.clone(),
                        missing: id.clone(),
                    })
            };
            let source = lookup(&edge.source)?;
            let target = lookup(&edge.target)?;
            edges.push((source, target));
        }

        Ok(Self::assemble(
            snapshot.nodes.clone(),
            index_by_id,
            parent,
            edges,
        ))
    }

    fn assemble(
        nodes: Vec<NodeRecord>,
        index_by_id: HashMap<String, usize>,
        parent: Vec<Option<usize>>,
        raw_edges: Vec<(usize, usize)>,
    ) -> Self {
        let mut children = vec![Vec::new(); nodes.len()];
        for (index, parent_index) in parent.iter().enumerate() {
            if let Some(parent_index) = parent_index {
                children[*parent_index].push(index);
            }
        }

        let mut seen = HashSet::with_capacity(raw_edges.len());
        let mut edges = Vec::with_capacity(raw_edges.len());
        let mut neighbors = vec![Vec::new(); nodes.len()];
        for (source, target) in raw_edges {
            if source == target || !seen.insert((source.min(target), source.max(target))) {
                continue;
            }

            edges.push((source, target));
            neighbors[source].push(target);
            neighbors[target].push(source);
        }

        for list in &mut neighbors {
            list.sort_unstable();
            list.dedup();
        }

        Self {
            nodes,
            index_by_id,
            parent,
            children,
            neighbors,
            edges,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index_by_id.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index_by_id.contains_key(id)
    }

    pub fn node(&self, index: usize) -> &NodeRecord {
        &self.nodes[index]
    }

    pub fn nodes(&self) -> impl Iterator<Item = &NodeRecord> {
        self.nodes.iter()
    }

    pub fn id(&self, index: usize) -> &str {
        &self.nodes[index].id
    }

    pub fn glyph(&self, index: usize) -> &GlyphClass {
        &self.nodes[index].glyph_class
    }

    pub fn parent(&self, index: usize) -> Option<usize> {
        self.parent[index]
    }

    pub fn children(&self, index: usize) -> &[usize] {
        &self.children[index]
    }

    pub fn neighbors(&self, index: usize) -> &[usize] {
        &self.neighbors[index]
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn is_leaf(&self, index: usize) -> bool {
        self.children[index].is_empty()
    }

    pub fn ancestors(&self, index: usize) -> Ancestors<'_> {
        Ancestors {
            graph: self,
            cursor: self.parent[index],
        }
    }

    /// Drops compartment nodes, re-parenting their members to the closest
    /// ancestor that is not a compartment. Edges touching a compartment go too.
    pub fn without_compartments(&self) -> Self {
        let mut remap = vec![None; self.len()];
        let mut nodes = Vec::with_capacity(self.len());
        for (index, node) in self.nodes.iter().enumerate() {
            if node.glyph_class.is_compartment() {
                continue;
            }
            remap[index] = Some(nodes.len());
            nodes.push(node.clone());
        }

        let mut parent = Vec::with_capacity(nodes.len());
        for index in 0..self.len() {
            let Some(new_index) = remap[index] else {
                continue;
            };

            let new_parent = self
                .ancestors(index)
                .find(|&ancestor| !self.glyph(ancestor).is_compartment());
            nodes[new_index].parent = new_parent.map(|ancestor| self.id(ancestor).to_string());
            parent.push(new_parent.and_then(|ancestor| remap[ancestor]));
        }

        let index_by_id = nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (node.id.clone(), index))
            .collect::<HashMap<_, _>>();

        let edges = self
            .edges
            .iter()
            .filter_map(|&(source, target)| Some((remap[source]?, remap[target]?)))
            .collect::<Vec<_>>();

        Self::assemble(nodes, index_by_id, parent, edges)
    }
}

pub struct Ancestors<'a> {
    graph: &'a CompoundGraph,
    cursor: Option<usize>,
}

impl Iterator for Ancestors<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.cursor?;
        self.cursor = self.graph.parent[current];
        Some(current)
    }
}

fn find_containment_cycle(parent: &[Option<usize>]) -> Option<usize> {
    let mut state = vec![Visit::New; parent.len()];

    for start in 0..parent.len() {
        let mut path = Vec::new();
        let mut cursor = Some(start);

        while let Some(index) = cursor {
            match state[index] {
                Visit::Done => break,
                Visit::OnPath => return Some(index),
                Visit::New => {
                    state[index] = Visit::OnPath;
                    path.push(index);
                    cursor = parent[index];
                }
            }
        }

        for index in path {
            state[index] = Visit::Done;
        }
    }

    None
}

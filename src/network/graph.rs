use serde::Serialize;

use super::glyph::GlyphClass;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NodeRecord {
    pub id: String,
    pub glyph_class: GlyphClass,
    pub parent: Option<String>,
    pub label: String,
    pub percent_altered: Option<f64>,
    pub data_source: Option<String>,
    pub in_query: bool,
}

impl NodeRecord {
    pub fn new(id: impl Into<String>, glyph_class: GlyphClass) -> Self {
        Self {
            id: id.into(),
            glyph_class,
            parent: None,
            label: String::new(),
            percent_altered: None,
            data_source: None,
            in_query: false,
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_percent_altered(mut self, percent_altered: f64) -> Self {
        self.percent_altered = Some(percent_altered);
        self
    }

    pub fn with_data_source(mut self, data_source: impl Into<String>) -> Self {
        self.data_source = Some(data_source.into());
        self
    }

    pub fn with_in_query(mut self, in_query: bool) -> Self {
        self.in_query = in_query;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
}

impl EdgeRecord {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NetworkSnapshot {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

impl NetworkSnapshot {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

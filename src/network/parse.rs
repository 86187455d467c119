use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use serde_json::Value;

use super::glyph::GlyphClass;
use super::graph::{EdgeRecord, NetworkSnapshot, NodeRecord};

#[derive(Clone, Debug, Deserialize)]
pub(super) struct RawNode {
    pub(super) id: String,
    #[serde(default, alias = "glyphClass", alias = "type")]
    pub(super) glyph_class: Option<String>,
    #[serde(default)]
    pub(super) parent: Option<String>,
    #[serde(default, alias = "glyph_label_text")]
    pub(super) label: Option<String>,
    #[serde(default, alias = "PERCENT_ALTERED")]
    pub(super) percent_altered: Option<f64>,
    #[serde(default, alias = "dataSource")]
    pub(super) data_source: Option<RawDataSource>,
    #[serde(default, alias = "IN_QUERY")]
    pub(super) in_query: Option<bool>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum RawDataSource {
    One(String),
    Many(Vec<String>),
}

impl RawDataSource {
    fn first(self) -> Option<String> {
        match self {
            Self::One(value) => Some(value),
            Self::Many(values) => values.into_iter().next(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct RawEdge {
    pub(super) source: String,
    pub(super) target: String,
}

pub fn parse_snapshot(raw: &str) -> Result<NetworkSnapshot> {
    let parsed: Value = serde_json::from_str(raw).context("invalid network JSON")?;
    let object = parsed
        .as_object()
        .ok_or_else(|| anyhow!("unexpected JSON type for network snapshot"))?;

    let elements = match object.get("elements") {
        Some(elements) => elements
            .as_object()
            .ok_or_else(|| anyhow!("invalid elements map in network JSON"))?,
        None => object,
    };

    let raw_nodes = elements
        .get("nodes")
        .and_then(Value::as_array)
        .ok_or_else(|| anyhow!("network JSON has no node list"))?;

    let mut nodes = Vec::with_capacity(raw_nodes.len());
    for (position, value) in raw_nodes.iter().enumerate() {
        let entry = RawNode::deserialize(unwrap_data(value))
            .with_context(|| format!("invalid node at position {position}"))?;
        if let Some(node) = node_from_raw(entry) {
            nodes.push(node);
        }
    }

    let mut edges = Vec::new();
    if let Some(raw_edges) = elements.get("edges").and_then(Value::as_array) {
        edges.reserve(raw_edges.len());
        for (position, value) in raw_edges.iter().enumerate() {
            let entry = RawEdge::deserialize(unwrap_data(value))
                .with_context(|| format!("invalid edge at position {position}"))?;
            edges.push(EdgeRecord::new(entry.source.trim(), entry.target.trim()));
        }
    }

    if nodes.is_empty() {
        Err(anyhow!("network snapshot contains no nodes"))
    } else {
        Ok(NetworkSnapshot { nodes, edges })
    }
}

fn unwrap_data(value: &Value) -> &Value {
    value
        .get("data")
        .filter(|data| data.is_object())
        .unwrap_or(value)
}

fn node_from_raw(entry: RawNode) -> Option<NodeRecord> {
    let id = entry.id.trim().to_string();
    if id.is_empty() {
        log::warn!("skipping node with empty id");
        return None;
    }

    let glyph_class = entry
        .glyph_class
        .as_deref()
        .map(GlyphClass::from)
        .unwrap_or(GlyphClass::Macromolecule);

    let parent = entry
        .parent
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty());

    Some(NodeRecord {
        id,
        glyph_class,
        parent,
        label: entry.label.unwrap_or_default(),
        percent_altered: entry.percent_altered,
        data_source: entry.data_source.and_then(RawDataSource::first),
        in_query: entry.in_query.unwrap_or(false),
    })
}

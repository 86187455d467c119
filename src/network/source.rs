use std::collections::BTreeMap;

use serde::Serialize;

use crate::util::safe_property;

use super::compound::CompoundGraph;
use super::graph::NodeRecord;

pub const UNKNOWN_SOURCE: &str = "Unknown";

/// First `;`-separated segment of a raw annotation, as a safe property name.
pub fn parse_data_source(raw: &str) -> Option<String> {
    let first = raw.split(';').next().unwrap_or(raw).trim();
    if first.is_empty() {
        None
    } else {
        Some(safe_property(first))
    }
}

pub fn source_of(node: &NodeRecord) -> String {
    node.data_source
        .as_deref()
        .and_then(parse_data_source)
        .unwrap_or_else(|| UNKNOWN_SOURCE.to_string())
}

/// Per-source on/off flags for process nodes. Sources never seen count as on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SourceVisibility {
    flags: BTreeMap<String, bool>,
}

impl SourceVisibility {
    pub fn from_graph(graph: &CompoundGraph) -> Self {
        let mut flags = graph
            .nodes()
            .filter(|node| node.glyph_class.is_process())
            .map(|node| (source_of(node), true))
            .collect::<BTreeMap<_, _>>();
        flags.insert(UNKNOWN_SOURCE.to_string(), true);
        Self { flags }
    }

    pub fn disable(&mut self, source: &str) {
        self.flags.insert(normalize(source), false);
    }

    pub fn enable(&mut self, source: &str) {
        self.flags.insert(normalize(source), true);
    }

    pub fn is_visible(&self, source: &str) -> bool {
        self.flags.get(&normalize(source)).copied().unwrap_or(true)
    }

    pub fn sources(&self) -> impl Iterator<Item = (&str, bool)> {
        self.flags.iter().map(|(name, on)| (name.as_str(), *on))
    }
}

fn normalize(source: &str) -> String {
    if source.eq_ignore_ascii_case(UNKNOWN_SOURCE) {
        UNKNOWN_SOURCE.to_string()
    } else {
        parse_data_source(source).unwrap_or_else(|| UNKNOWN_SOURCE.to_string())
    }
}

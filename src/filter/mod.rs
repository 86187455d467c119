mod policy;
mod search;
mod selection;

pub use policy::{MIN_SEED_WEIGHT, VisibilityOutcome, VisibilityPolicy};
pub use search::{MatchKind, SearchMatch, find_nodes_by_label, search_nodes, visible_gene_map};
pub use selection::{
    Highlight, hide_selected, hide_unselected, highlight_neighbors, highlight_processes,
    propagate_selection, same_label_nodes,
};

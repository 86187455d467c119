use std::collections::BTreeMap;
use std::path::PathBuf;

use network_filter::action::{Action, FilterRun};
use network_filter::config::FilterSettings;
use network_filter::filter::{
    MatchKind, VisibilityPolicy, hide_selected, highlight_processes, same_label_nodes,
    search_nodes, visible_gene_map,
};
use network_filter::network::{CompoundGraph, SnapshotError, load_network, parse_snapshot};
use network_filter::weights::alteration_weights;
use pretty_assertions::assert_eq;

fn fixture() -> CompoundGraph {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/pathway.json");
    load_network(&path).unwrap()
}

fn sorted(mut ids: Vec<String>) -> Vec<String> {
    ids.sort();
    ids
}

fn settings(threshold: &str) -> FilterSettings {
    FilterSettings {
        threshold: Some(threshold.to_string()),
        ..FilterSettings::default()
    }
}

#[test]
fn fixture_loads_both_element_shapes() {
    let graph = fixture();
    assert_eq!(graph.len(), 17);
    assert_eq!(graph.edge_count(), 9);
    assert_eq!(graph.parent(graph.index_of("egf").unwrap()), None);

    let tp53 = graph.node(graph.index_of("tp53").unwrap());
    assert_eq!(tp53.label, "TP53");
    assert_eq!(tp53.parent.as_deref(), Some("nucleus"));
}

#[test]
fn high_threshold_keeps_only_the_altered_reaction() {
    let graph = fixture();
    let alteration = alteration_weights(&graph);
    let outcome = settings("40").policy(&graph, &alteration).apply(&graph, &alteration);

    assert_eq!(
        sorted(outcome.visible.clone()),
        vec!["mdm2", "nucleus", "r3", "tp53"]
    );
    assert!((outcome.weights.get("mdm2") - 45.0).abs() < 1e-9);
}

#[test]
fn low_threshold_lights_up_connected_reactions() {
    let graph = fixture();
    let alteration = alteration_weights(&graph);
    let outcome = settings("5").policy(&graph, &alteration).apply(&graph, &alteration);

    assert_eq!(outcome.visible_count(), 16);
    assert!(!outcome.is_visible("lonely"));
    assert!(outcome.is_visible("orphan"));
    assert!(outcome.is_visible("cx1_egf"));
    assert!((outcome.weights.get("adp") - 8.0).abs() < 1e-9);
}

#[test]
fn hiding_a_selection_removes_its_whole_reaction_chain() {
    let graph = fixture();
    let hidden = hide_selected(&graph, &["egf".to_string()]);
    assert_eq!(
        sorted(hidden.clone()),
        vec![
            "adp", "atp", "cx1", "cx1_egf", "cx1_egfr", "cytosol", "egf", "egfr", "egfr_p",
            "r1", "r2",
        ]
    );

    let alteration = alteration_weights(&graph);
    let mut policy = VisibilityPolicy::new(&graph);
    policy.manually_hidden.extend(hidden);
    let outcome = policy.apply(&graph, &alteration);
    assert_eq!(
        sorted(outcome.visible),
        vec!["lonely", "mdm2", "nucleus", "orphan", "r3", "tp53"]
    );
}

#[test]
fn highlight_follows_the_selected_reaction() {
    let graph = fixture();
    let highlight = highlight_processes(&graph, &["tp53".to_string()]);
    assert_eq!(highlight.nodes, vec!["nucleus", "tp53", "mdm2", "r3"]);
    assert_eq!(
        highlight.edges,
        vec![
            ("tp53".to_string(), "r3".to_string()),
            ("r3".to_string(), "mdm2".to_string()),
        ]
    );
}

#[test]
fn gene_expansion_and_search() {
    let graph = fixture();
    assert_eq!(
        same_label_nodes(&graph, &["egfr".to_string()]),
        vec!["egfr", "egfr_p", "cx1_egfr"]
    );

    let alteration = alteration_weights(&graph);
    let outcome = settings("5").policy(&graph, &alteration).apply(&graph, &alteration);
    let matches = search_nodes(&graph, outcome.visible.iter().map(String::as_str), "egf");
    assert_eq!(matches[0].label, "EGF");
    assert!(matches.iter().all(|hit| hit.kind == MatchKind::Substring));
    assert_eq!(matches.len(), 6);
}

#[test]
fn seed_genes_report_their_visibility() {
    let graph = fixture();
    let alteration = alteration_weights(&graph);
    let filter = FilterSettings {
        seed_labels: vec!["tp53".to_string(), "CDKN2A".to_string()],
        ..settings("40")
    };
    let policy = filter.policy(&graph, &alteration);
    assert!(policy.pinned.contains("egfr"));
    assert!(policy.pinned.contains("tp53"));

    let outcome = policy.apply(&graph, &alteration);
    let genes = visible_gene_map(&graph, &outcome.visible, &filter.seed_labels);
    assert_eq!(
        genes,
        BTreeMap::from([("CDKN2A".to_string(), false), ("TP53".to_string(), true)])
    );
}

#[test]
fn hiding_compartments_lifts_their_members() {
    let graph = fixture().without_compartments();
    let tp53 = graph.index_of("tp53").unwrap();
    assert_eq!(graph.parent(tp53), None);
    assert_eq!(graph.node(tp53).parent, None);

    let member = graph.index_of("cx1_egf").unwrap();
    assert_eq!(graph.parent(member), graph.index_of("cx1"));
    assert_eq!(graph.parent(graph.index_of("cx1").unwrap()), None);
}

#[test]
fn expanded_selection_hides_every_gene_state_without_compartments() {
    let settings = FilterSettings {
        hide_compartments: true,
        ..FilterSettings::default()
    };
    let run = FilterRun::execute(
        fixture(),
        &settings,
        Action::HideSelected,
        &["egfr".to_string()],
        true,
    );

    assert!(!run.graph.contains("cytosol"));
    assert_eq!(run.newly_hidden.len(), 10);
    assert!(run.newly_hidden.contains(&"cx1_egf".to_string()));
    assert_eq!(
        sorted(run.outcome.visible.clone()),
        vec!["lonely", "mdm2", "orphan", "r3", "tp53"]
    );

    let report = run.report(None, run.seed_genes(&settings));
    assert_eq!(report.newly_hidden, run.newly_hidden);
}

#[test]
fn neighbor_highlight_on_the_fixture() {
    let run = FilterRun::execute(
        fixture(),
        &FilterSettings::default(),
        Action::HighlightNeighbors,
        &["cx1".to_string()],
        false,
    );
    let highlight = run.highlight.unwrap();
    assert_eq!(highlight.nodes, vec!["r1", "cx1", "r2"]);
    assert_eq!(highlight.edges.len(), 2);
    assert_eq!(run.outcome.visible_count(), 17);
}

#[test]
fn dangling_parent_is_rejected() {
    let raw = r#"{ "nodes": [ { "data": { "id": "a", "parent": "ghost" } } ] }"#;
    let snapshot = parse_snapshot(raw).unwrap();
    assert_eq!(
        CompoundGraph::build(&snapshot).err(),
        Some(SnapshotError::UnknownParent {
            node: "a".to_string(),
            parent: "ghost".to_string(),
        })
    );
}

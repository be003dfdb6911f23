use std::collections::HashSet;

use coauthor_graph::graph::{build_graph, pair_links};
use coauthor_graph::{GraphBuilder, Link, RawRow, Record};

fn row(authors: &str, affiliations: &str) -> RawRow {
    RawRow::new(Some("2022"), Some(authors), Some(affiliations))
}

fn record(authors: &str, affiliations: &str) -> Record {
    Record {
        year: "2022".to_string(),
        authors: authors.to_string(),
        affiliations: affiliations.to_string(),
    }
}

fn link(source: &str, target: &str) -> Link {
    Link {
        source: source.to_string(),
        target: target.to_string(),
    }
}

#[test]
fn test_pair_links_produces_n_choose_2() {
    for n in 0usize..7 {
        let authors: Vec<String> = (0..n).map(|i| format!("Author {}", i)).collect();
        assert_eq!(pair_links(&authors).len(), n * n.saturating_sub(1) / 2);
    }
}

#[test]
fn test_pair_links_order_is_lexicographic_by_index() {
    let authors = vec!["A".to_string(), "B".to_string(), "C".to_string()];

    assert_eq!(
        pair_links(&authors),
        vec![link("A", "B"), link("A", "C"), link("B", "C")]
    );
}

#[test]
fn test_short_affiliation_list_drops_trailing_author() {
    let (graph, _) = build_graph(vec![row(
        "A, B, C",
        "Aff1, X1, Country1; Aff2, X2, Country2",
    )]);

    assert_eq!(graph.links, vec![link("A", "B")]);
    let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["A", "B"]);
    assert_eq!(graph.nodes[0].country.as_deref(), Some("Country1"));
}

#[test]
fn test_duplicate_links_are_retained() {
    let (graph, _) = build_graph(vec![
        row("A, B", "LA, Peru; LB, Chile"),
        row("A, B", "LA, Peru; LB, Chile"),
    ]);

    assert_eq!(graph.links, vec![link("A", "B"), link("A", "B")]);
    assert_eq!(graph.nodes.len(), 2);
    assert!(graph.nodes.iter().all(|n| n.degree == 2));
}

#[test]
fn test_reverse_pairs_are_not_collapsed() {
    let (graph, _) = build_graph(vec![
        row("A, B", "LA, Peru; LB, Chile"),
        row("B, A", "LB, Chile; LA, Peru"),
    ]);

    assert_eq!(graph.links, vec![link("A", "B"), link("B", "A")]);
}

#[test]
fn test_sole_author_is_excluded_from_nodes() {
    let mut builder = GraphBuilder::new();
    builder.add_record(&record("Solo", "Lone Lab, Reykjavik, Iceland"));
    builder.add_record(&record("A, B", "LA, Peru; LB, Chile"));

    assert_eq!(builder.authors().get("Solo").unwrap().degree, 1);

    let graph = builder.finish();
    assert!(graph.nodes.iter().all(|n| n.id != "Solo"));
    assert_eq!(graph.nodes.len(), 2);
}

#[test]
fn test_degree_counts_appearances_not_neighbours() {
    let (graph, _) = build_graph(vec![
        row("A, B", "LA, Peru; LB, Chile"),
        row("A, B, C", "LA, Peru; LB, Chile; LC, Cuba"),
        row("A", "LA, Peru"),
    ]);

    let a = graph.nodes.iter().find(|n| n.id == "A").unwrap();
    assert_eq!(a.degree, 3);
    let c = graph.nodes.iter().find(|n| n.id == "C").unwrap();
    assert_eq!(c.degree, 1);
}

#[test]
fn test_author_skipped_in_one_record_can_link_in_another() {
    let (graph, _) = build_graph(vec![
        row("A, B, C", "LA, Peru; LB, Chile"),
        row("C, D", "LC, Cuba; LD, Mexico"),
    ]);

    assert_eq!(graph.links, vec![link("A", "B"), link("C", "D")]);
    let c = graph.nodes.iter().find(|n| n.id == "C").unwrap();
    assert_eq!(c.degree, 1);
    assert_eq!(c.affiliation.as_deref(), Some("LC, Cuba"));
}

#[test]
fn test_nodes_and_links_are_closed() {
    let (graph, _) = build_graph(vec![
        row("A, B, C", "LA, Peru; LB, Chile; LC, Cuba"),
        row("D", "LD, Mexico"),
        row("E, F", "LE, Ghana"),
        row("F, G", "LF, Mali; LG, Niger"),
    ]);

    let used: HashSet<&str> = graph
        .links
        .iter()
        .flat_map(|l| [l.source.as_str(), l.target.as_str()])
        .collect();
    let ids: HashSet<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();

    assert_eq!(used, ids);
    assert_eq!(ids.len(), graph.nodes.len());
    assert!(!ids.contains("D"));
    assert!(!ids.contains("E"));
}

#[test]
fn test_rebuild_is_deterministic() {
    let rows = vec![
        row("A, B, C", "LA, Peru; LB, Chile; LC, Cuba"),
        row("C, A", "LC2, Cuba; LA, Peru"),
        row("D, E", "LD, Mexico; LE, Ghana"),
    ];

    let (first, _) = build_graph(rows.clone());
    let (second, _) = build_graph(rows);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_build_graph_summary_counts() {
    let (graph, summary) = build_graph(vec![
        row("A, B", "LA, Peru; LB, Chile"),
        RawRow::new(None, Some("X, Y"), Some("LX, Peru; LY, Chile")),
        row("A, C", "LA, Peru; LC, Cuba"),
        row("Solo", "LS, Iceland"),
    ]);

    assert_eq!(summary.rows_read, 4);
    assert_eq!(summary.rows_dropped, 1);
    assert_eq!(summary.records, 3);
    assert_eq!(summary.links, 2);
    assert_eq!(summary.nodes, 3);
    assert_eq!(summary.max_degree, 2);
    assert_eq!(graph.links.len(), summary.links);
}

#[test]
fn test_graph_serializes_with_nodes_and_links_only() {
    let (graph, _) = build_graph(vec![row("A, B", "LA, Peru; LB, Chile")]);

    let value = serde_json::to_value(&graph).unwrap();
    let object = value.as_object().unwrap();
    let keys: Vec<&String> = object.keys().collect();
    assert_eq!(keys.len(), 2);
    assert!(object.contains_key("nodes"));
    assert!(object.contains_key("links"));

    assert_eq!(
        value["nodes"][0],
        serde_json::json!({"id": "A", "affiliation": "LA, Peru", "country": "Peru", "degree": 1})
    );
    assert_eq!(value["links"][0], serde_json::json!({"source": "A", "target": "B"}));
}

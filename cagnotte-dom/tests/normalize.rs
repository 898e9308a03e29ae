use cagnotte_dom::{normalize, Component, Node};

fn names(nodes: &[Node]) -> Vec<String> {
    nodes
        .iter()
        .map(|node| match node {
            Node::Component(component) => component.name.clone(),
            Node::Text(text) => format!("text:{text}"),
            Node::Comment(_) => "comment".to_string(),
            Node::Fragment(_) => "fragment".to_string(),
        })
        .collect()
}

// ============================================================================
// Structural flattening
// ============================================================================

#[test]
fn test_drops_comments_and_blank_text() {
    let tree = vec![
        Node::comment("layout note"),
        Node::text("   \n\t "),
        Component::new("TableRow").into(),
        Node::text("visible"),
    ];

    let out = normalize(&tree);
    assert_eq!(names(&out), vec!["TableRow", "text:visible"]);
}

#[test]
fn test_splices_fragments_in_place() {
    let tree = vec![
        Component::new("TableRow").prop("row-id", "a").into(),
        Node::fragment(vec![
            Component::new("TableRow").prop("row-id", "b").into(),
            Node::comment("inside fragment"),
            Node::fragment(vec![Component::new("TableRow").prop("row-id", "c").into()]),
        ]),
        Component::new("TableRow").prop("row-id", "d").into(),
    ];

    let out = normalize(&tree);
    assert_eq!(out.len(), 4);
    let ids: Vec<_> = out
        .iter()
        .filter_map(Node::component)
        .map(|c| c.props["row-id"].as_text())
        .collect();
    assert_eq!(ids, vec!["a", "b", "c", "d"]);
}

#[test]
fn test_preserves_order_without_dedup() {
    let tree = vec![
        Component::new("TableRow").prop("row-id", "dup").into(),
        Component::new("TableRow").prop("row-id", "dup").into(),
    ];

    // Purely structural: identical nodes are both kept.
    assert_eq!(normalize(&tree).len(), 2);
}

#[test]
fn test_empty_fragment_vanishes() {
    let tree = vec![Node::fragment(vec![Node::comment("nothing here")])];
    assert!(normalize(&tree).is_empty());
}

#[test]
fn test_unknown_components_pass_through() {
    // Classification is not this layer's job.
    let tree = vec![Component::new("BannerAd").into()];
    assert_eq!(names(&normalize(&tree)), vec!["BannerAd"]);
}

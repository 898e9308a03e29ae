use crate::node::Node;

/// Flatten a composition tree into the ordered sequence of semantic nodes.
///
/// Comments and whitespace-only text are dropped; fragments are replaced by
/// their (recursively normalized) children, spliced in place. Declaration
/// order is preserved and no classification happens here: this is the
/// structural adapter between the templating layer and the table engine.
pub fn normalize(nodes: &[Node]) -> Vec<Node> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            Node::Comment(_) => {
                log::trace!("[normalize] dropping comment node");
            }
            Node::Text(text) => {
                if text.trim().is_empty() {
                    log::trace!("[normalize] dropping whitespace-only text node");
                } else {
                    out.push(node.clone());
                }
            }
            Node::Fragment(children) => {
                out.extend(normalize(children));
            }
            Node::Component(_) => out.push(node.clone()),
        }
    }
    out
}

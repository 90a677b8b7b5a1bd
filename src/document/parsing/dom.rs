//! DOM traversal helpers over the html5ever reference-counted tree

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Parse a full HTML document. The tokenizer recovers from malformed markup.
pub(crate) fn parse_html(html: &str) -> RcDom {
    parse_document(RcDom::default(), Default::default()).one(html)
}

fn is_element(node: &Handle, tag: &str) -> bool {
    match &node.data {
        NodeData::Element { name, .. } => {
            let local: &str = &name.local;
            local.eq_ignore_ascii_case(tag)
        }
        _ => false,
    }
}

/// First element with the given tag name, in document order
pub(crate) fn find_first(node: &Handle, tag: &str) -> Option<Handle> {
    if is_element(node, tag) {
        return Some(node.clone());
    }
    for child in node.children.borrow().iter() {
        if let Some(found) = find_first(child, tag) {
            return Some(found);
        }
    }
    None
}

/// All descendant elements with the given tag name, in document order
pub(crate) fn find_all(node: &Handle, tag: &str) -> Vec<Handle> {
    fn walk(node: &Handle, tag: &str, out: &mut Vec<Handle>) {
        for child in node.children.borrow().iter() {
            if is_element(child, tag) {
                out.push(child.clone());
            }
            walk(child, tag, out);
        }
    }

    let mut found = Vec::new();
    walk(node, tag, &mut found);
    found
}

/// Concatenated text of every descendant text node
pub(crate) fn text_content(node: &Handle) -> String {
    fn walk(node: &Handle, out: &mut String) {
        if let NodeData::Text { contents } = &node.data {
            out.push_str(&contents.borrow());
        }
        for child in node.children.borrow().iter() {
            walk(child, out);
        }
    }

    let mut text = String::new();
    walk(node, &mut text);
    text
}

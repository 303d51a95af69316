//! Markup tree capability used by the mirror pipeline.
//!
//! The mirror only needs four operations from a parsed document: find the
//! elements with a given tag name in document order, read an attribute,
//! overwrite an attribute, and serialize back to markup. [`MarkupTree`]
//! captures that surface so the scan logic can be exercised against an
//! in-memory fake; [`HtmlTree`] is the real implementation on top of
//! `scraper`.

use ego_tree::NodeId;
use scraper::node::Node;
use scraper::{Html, Selector};

pub trait MarkupTree {
    /// Opaque handle to one element of the tree.
    type Handle: Copy;

    /// All elements with the given tag name, in document order.
    fn find_all(&self, tag: &str) -> Vec<Self::Handle>;

    /// The value of the named attribute, if present.
    fn attr(&self, handle: Self::Handle, name: &str) -> Option<String>;

    /// Overwrite the value of an existing attribute. An element without the
    /// attribute is left unchanged.
    fn set_attr(&mut self, handle: Self::Handle, name: &str, value: &str);

    /// Serialize the (possibly mutated) tree back to markup text.
    fn to_html(&self) -> String;
}

/// A mutable HTML document parsed with `scraper`.
pub struct HtmlTree {
    document: Html,
}

impl HtmlTree {
    pub fn parse(markup: &str) -> Self {
        Self {
            document: Html::parse_document(markup),
        }
    }
}

impl MarkupTree for HtmlTree {
    type Handle = NodeId;

    fn find_all(&self, tag: &str) -> Vec<NodeId> {
        let Ok(selector) = Selector::parse(tag) else {
            return Vec::new();
        };
        self.document
            .select(&selector)
            .map(|element| element.id())
            .collect()
    }

    fn attr(&self, handle: NodeId, name: &str) -> Option<String> {
        self.document
            .tree
            .get(handle)
            .and_then(|node| node.value().as_element())
            .and_then(|element| element.attr(name))
            .map(str::to_owned)
    }

    fn set_attr(&mut self, handle: NodeId, name: &str, value: &str) {
        if let Some(mut node) = self.document.tree.get_mut(handle)
            && let Node::Element(element) = node.value()
        {
            for (attr_name, attr_value) in element.attrs.iter_mut() {
                if &*attr_name.local == name {
                    *attr_value = value.into();
                }
            }
        }
    }

    fn to_html(&self) -> String {
        self.document.root_element().html()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_all_in_document_order() {
        let tree = HtmlTree::parse(
            r#"<html><body><img src="a.png"><p><img src="b.png"></p><img src="c.png"></body></html>"#,
        );
        let handles = tree.find_all("img");
        assert_eq!(handles.len(), 3);

        let sources: Vec<String> = handles
            .iter()
            .filter_map(|&h| tree.attr(h, "src"))
            .collect();
        assert_eq!(sources, vec!["a.png", "b.png", "c.png"]);
    }

    #[test]
    fn test_attr_missing() {
        let tree = HtmlTree::parse("<html><body><img></body></html>");
        let handles = tree.find_all("img");
        assert_eq!(handles.len(), 1);
        assert_eq!(tree.attr(handles[0], "src"), None);
    }

    #[test]
    fn test_set_attr_rewrites_serialized_markup() {
        let mut tree = HtmlTree::parse(
            r#"<html><body><img src="/assets/python.png"></body></html>"#,
        );
        let handles = tree.find_all("img");
        tree.set_attr(handles[0], "src", "page_files/python.png");

        assert_eq!(
            tree.attr(handles[0], "src").as_deref(),
            Some("page_files/python.png")
        );
        let html = tree.to_html();
        assert!(html.contains(r#"src="page_files/python.png""#));
        assert!(!html.contains("/assets/python.png"));
    }

    #[test]
    fn test_set_attr_ignores_absent_attribute() {
        let mut tree = HtmlTree::parse("<html><body><img></body></html>");
        let handles = tree.find_all("img");
        tree.set_attr(handles[0], "src", "local.png");
        assert_eq!(tree.attr(handles[0], "src"), None);
    }
}

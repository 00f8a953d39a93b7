//! Element nodes for the page model.

use std::collections::HashMap;

use smallvec::SmallVec;

/// Index of an element in the page arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub(crate) usize);

/// The element kinds the behavior layer cares about. Anything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Body,
    Div,
    Span,
    Anchor,
    Button,
    Form,
    Input,
    Other,
}

impl Tag {
    pub fn is_form(&self) -> bool {
        matches!(self, Tag::Form)
    }
}

/// One element in the arena. Links are ids into the same arena; a detached
/// node keeps its state but is invisible to queries.
#[derive(Debug)]
pub(crate) struct ElementNode {
    pub tag: Tag,
    pub dom_id: Option<String>,
    pub classes: SmallVec<[String; 4]>,
    pub attributes: HashMap<String, String>,
    pub text: String,
    pub parent: Option<ElementId>,
    pub children: Vec<ElementId>,
    pub detached: bool,
}

impl ElementNode {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            dom_id: None,
            classes: SmallVec::new(),
            attributes: HashMap::new(),
            text: String::new(),
            parent: None,
            children: Vec::new(),
            detached: false,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Add the class if absent, remove it if present. Returns whether the
    /// class is present afterwards.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_list_dedupes() {
        let mut node = ElementNode::new(Tag::Div);
        node.add_class("plant-card");
        node.add_class("plant-card");
        assert_eq!(node.classes.len(), 1);
    }

    #[test]
    fn test_toggle_class_reports_presence() {
        let mut node = ElementNode::new(Tag::Body);
        assert!(node.toggle_class("dark-mode"));
        assert!(node.has_class("dark-mode"));
        assert!(!node.toggle_class("dark-mode"));
        assert!(!node.has_class("dark-mode"));
    }
}

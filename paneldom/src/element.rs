use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// A node in the host element tree.
///
/// `markers` are structural selectors used for discovery, `classes` are
/// presentation hooks for external styling, and `data` carries properties
/// attached to this node and owned by it.
#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub id: String,

    // Structure
    pub markers: Vec<String>,
    pub children: Vec<Element>,

    // Presentation
    pub classes: Vec<String>,
    pub hidden: bool,
    /// Natural height the node occupies when fully visible.
    pub height: u16,

    // Content
    pub text: Option<String>,
    /// Anchor target. Dispatch navigates the document here when an
    /// activation's default action is not suppressed.
    pub href: Option<String>,

    // Attached data
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            markers: Vec::new(),
            children: Vec::new(),
            classes: Vec::new(),
            hidden: false,
            height: 1,
            text: None,
            href: None,
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn node() -> Self {
        Self::default()
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            text: Some(content.into()),
            ..Default::default()
        }
    }

    /// Create an anchor element pointing at a fragment.
    pub fn anchor(href: impl Into<String>) -> Self {
        Self {
            id: generate_id("a"),
            href: Some(href.into()),
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Structure
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.markers.push(marker.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(new_children);
        self
    }

    // Presentation
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn height(mut self, height: u16) -> Self {
        self.height = height;
        self
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    // Attached data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn has_marker(&self, marker: &str) -> bool {
        self.markers.iter().any(|m| m == marker)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class unless the node already carries it.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    pub fn set_data(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.data.insert(key.into(), value.into());
    }
}

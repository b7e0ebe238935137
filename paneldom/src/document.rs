use crate::element::Element;

/// Owns an element tree plus the host-visible navigation side effect.
///
/// Queries return element ids rather than references so callers can hold
/// results across mutations of the tree.
#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
    /// Fragment the host last navigated to. Written by event dispatch when
    /// an activation's default action runs on an anchor element.
    pub fragment: Option<String>,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            fragment: None,
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Find an element by id, depth first.
    pub fn get(&self, id: &str) -> Option<&Element> {
        find(&self.root, id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_mut(&mut self.root, id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Ids of all descendants of `root_id` carrying `marker`, in document
    /// order. The start node itself is not considered. An unknown root id
    /// yields an empty result.
    pub fn query(&self, root_id: &str, marker: &str) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(start) = self.get(root_id) {
            for child in &start.children {
                collect(child, marker, &mut out);
            }
        }
        out
    }

    /// Ids of every element in the document carrying `marker`, in document
    /// order, the root included.
    pub fn query_all(&self, marker: &str) -> Vec<String> {
        let mut out = Vec::new();
        collect(&self.root, marker, &mut out);
        out
    }

    /// Nearest ancestor of `from_id` carrying `marker`, the start node
    /// included.
    pub fn closest(&self, from_id: &str, marker: &str) -> Option<String> {
        let mut trail = Vec::new();
        if !path(&self.root, from_id, &mut trail) {
            return None;
        }
        trail
            .iter()
            .rev()
            .find(|el| el.has_marker(marker))
            .map(|el| el.id.clone())
    }
}

fn find<'a>(element: &'a Element, id: &str) -> Option<&'a Element> {
    if element.id == id {
        return Some(element);
    }
    element.children.iter().find_map(|child| find(child, id))
}

fn find_mut<'a>(element: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if element.id == id {
        return Some(element);
    }
    element
        .children
        .iter_mut()
        .find_map(|child| find_mut(child, id))
}

fn collect(element: &Element, marker: &str, out: &mut Vec<String>) {
    if element.has_marker(marker) {
        out.push(element.id.clone());
    }
    for child in &element.children {
        collect(child, marker, out);
    }
}

/// Push the root-to-target chain onto `trail`. Returns whether the target
/// was found; on failure `trail` is left empty.
fn path<'a>(element: &'a Element, id: &str, trail: &mut Vec<&'a Element>) -> bool {
    trail.push(element);
    if element.id == id {
        return true;
    }
    for child in &element.children {
        if path(child, id, trail) {
            return true;
        }
    }
    trail.pop();
    false
}

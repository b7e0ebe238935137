use paneldom::Document;

use crate::config::AccordionConfig;

/// Locates a container's trigger and content sub-elements by structural
/// marker. Read-only; zero matches is a valid result callers must absorb.
#[derive(Debug, Clone, Copy)]
pub struct StructureResolver<'a> {
    config: &'a AccordionConfig,
}

impl<'a> StructureResolver<'a> {
    pub fn new(config: &'a AccordionConfig) -> Self {
        Self { config }
    }

    /// Trigger elements under a container, in document order. The first
    /// match is "the" trigger; every match is still tagged and bound.
    pub fn triggers(&self, doc: &Document, container_id: &str) -> Vec<String> {
        doc.query(container_id, &self.config.trigger_marker)
    }

    /// Content elements under a container, in document order. Only the
    /// first match drives visual transitions.
    pub fn contents(&self, doc: &Document, container_id: &str) -> Vec<String> {
        doc.query(container_id, &self.config.content_marker)
    }

    /// Nearest ancestor of `node_id` (itself included) carrying the
    /// container marker.
    pub fn owning_container(&self, doc: &Document, node_id: &str) -> Option<String> {
        doc.closest(node_id, &self.config.container_marker)
    }
}

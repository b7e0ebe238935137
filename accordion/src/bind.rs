use paneldom::{Document, Handlers, Renderer};

use crate::config::AccordionConfig;
use crate::engine::TransitionEngine;
use crate::error::AccordionError;
use crate::resolve::StructureResolver;

/// Wires discovered containers: applies the default state, tags marker
/// classes, and binds the activation handlers that drive the engine.
#[derive(Debug, Clone)]
pub struct BindingLayer {
    config: AccordionConfig,
}

impl BindingLayer {
    pub fn new(config: AccordionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AccordionConfig {
        &self.config
    }

    /// Initialize every container in `selection`, in order.
    ///
    /// A configuration error aborts the remainder of the batch. The
    /// selection is handed back unchanged for chaining; all effects live on
    /// the document, the handler registry, and the renderer.
    pub fn initialize<'s>(
        &self,
        doc: &mut Document,
        renderer: &mut dyn Renderer,
        handlers: &mut Handlers,
        selection: &'s [String],
    ) -> Result<&'s [String], AccordionError> {
        for container_id in selection {
            self.initialize_container(doc, renderer, handlers, container_id)?;
        }
        Ok(selection)
    }

    fn initialize_container(
        &self,
        doc: &mut Document,
        renderer: &mut dyn Renderer,
        handlers: &mut Handlers,
        container_id: &str,
    ) -> Result<(), AccordionError> {
        let engine = TransitionEngine::new(&self.config);
        let resolver = StructureResolver::new(&self.config);

        engine.initialize(doc, renderer, container_id)?;

        if let Some(el) = doc.get_mut(container_id) {
            el.add_class(&self.config.container_class);
        }

        let triggers = resolver.triggers(doc, container_id);
        let contents = resolver.contents(doc, container_id);
        log::debug!(
            "[accordion] {container_id}: bound with {} trigger(s), {} content element(s)",
            triggers.len(),
            contents.len()
        );
        if triggers.is_empty() {
            log::debug!("[accordion] {container_id}: no trigger element, nothing to bind");
        }

        for content_id in &contents {
            if let Some(el) = doc.get_mut(content_id) {
                el.add_class(&self.config.content_class);
            }
        }

        // Every trigger match is tagged and bound, not just the first.
        for trigger_id in &triggers {
            if let Some(el) = doc.get_mut(trigger_id) {
                el.add_class(&self.config.trigger_class);
            }
            let config = self.config.clone();
            handlers.on_activate(
                trigger_id,
                Box::new(move |doc, renderer, activation| {
                    activation.prevent_default();
                    let resolver = StructureResolver::new(&config);
                    let Some(container) = resolver.owning_container(doc, &activation.target)
                    else {
                        log::debug!(
                            "[accordion] activation on {:?} outside any container",
                            activation.target
                        );
                        return;
                    };
                    let engine = TransitionEngine::new(&config);
                    if let Err(err) = engine.activate(doc, renderer, &container) {
                        log::warn!("[accordion] {container}: toggle failed: {err}");
                    }
                }),
            );
        }

        Ok(())
    }
}

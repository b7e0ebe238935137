use paneldom::{Document, Renderer, Timing, VisualIntent};

use crate::config::AccordionConfig;
use crate::error::AccordionError;
use crate::resolve::StructureResolver;
use crate::state::{PanelState, StateStore};

/// The state machine: computes the next state, persists it, and issues the
/// matching visual intent to the rendering collaborator.
///
/// State writes complete before any visual command is sent; the engine
/// never waits on the renderer's timeline, so two rapid activations toggle
/// from whatever state was last persisted even while a slide is mid-flight.
#[derive(Debug, Clone, Copy)]
pub struct TransitionEngine<'a> {
    config: &'a AccordionConfig,
}

impl<'a> TransitionEngine<'a> {
    pub fn new(config: &'a AccordionConfig) -> Self {
        Self { config }
    }

    /// Apply the configured default state to a container, non-animated.
    ///
    /// The default is resolved before the node is touched, so a bad key
    /// leaves the container without state or marker classes. Re-running
    /// this on an already-initialized container re-applies the default
    /// over any user-toggled state.
    pub fn initialize(
        &self,
        doc: &mut Document,
        renderer: &mut dyn Renderer,
        container_id: &str,
    ) -> Result<PanelState, AccordionError> {
        let store = StateStore::new(self.config);
        let state = store.default_state()?;
        store.set(doc, container_id, state);
        self.sync_collapsed_class(doc, container_id, state);
        self.render(doc, renderer, container_id, state, Timing::Instant);
        Ok(state)
    }

    /// Toggle a container's state and request the animated transition.
    ///
    /// A pure mod-2 toggle: after N activations from a known state the
    /// container is back at that state iff N is even.
    pub fn activate(
        &self,
        doc: &mut Document,
        renderer: &mut dyn Renderer,
        container_id: &str,
    ) -> Result<PanelState, AccordionError> {
        let store = StateStore::new(self.config);
        let next = store.get(doc, container_id)?.toggled();
        log::debug!("[accordion] {container_id}: -> {}", next.key());
        store.set(doc, container_id, next);
        self.sync_collapsed_class(doc, container_id, next);
        self.render(doc, renderer, container_id, next, Timing::Animated);
        Ok(next)
    }

    /// Keep the collapsed marker class in step with the state.
    fn sync_collapsed_class(&self, doc: &mut Document, container_id: &str, state: PanelState) {
        if let Some(el) = doc.get_mut(container_id) {
            if state.is_collapsed() {
                el.add_class(&self.config.collapsed_class);
            } else {
                el.remove_class(&self.config.collapsed_class);
            }
        }
    }

    /// Send the intent matching `state` to the first content match. A
    /// container without content still records state; there is just no
    /// visual command to issue.
    fn render(
        &self,
        doc: &mut Document,
        renderer: &mut dyn Renderer,
        container_id: &str,
        state: PanelState,
        timing: Timing,
    ) {
        let resolver = StructureResolver::new(self.config);
        let Some(content) = resolver.contents(doc, container_id).into_iter().next() else {
            log::debug!("[accordion] {container_id}: no content element, state recorded only");
            return;
        };
        let intent = if state.is_collapsed() {
            VisualIntent::Hide
        } else {
            VisualIntent::Show
        };
        renderer.apply(doc, &content, intent, timing);
    }
}

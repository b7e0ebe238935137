//! Collapsible-panel ("accordion") widget.
//!
//! A container element declares one trigger/content pair via structural
//! markers; activating the trigger toggles the pair between `Visible` and
//! `Collapsed`. State is persisted on the container node itself, so any
//! number of independent instances coexist in one document.
//!
//! The core is split by responsibility: [`StructureResolver`] discovers
//! trigger/content elements, [`StateStore`] owns per-container state,
//! [`TransitionEngine`] is the state machine driving the rendering
//! collaborator, and [`BindingLayer`] wires containers at initialization.
//! [`install`] is the whole-document bootstrap; callers with their own
//! invocation strategy can drive the binding layer directly.

pub mod bind;
pub mod config;
pub mod engine;
pub mod error;
pub mod registry;
pub mod resolve;
pub mod state;

pub use bind::BindingLayer;
pub use config::AccordionConfig;
pub use engine::TransitionEngine;
pub use error::AccordionError;
pub use resolve::StructureResolver;
pub use state::{PanelState, StateStore};

use paneldom::{Document, Handlers, Renderer};

/// Namespace the widget claims in the process registry.
pub const WIDGET_NAME: &str = "accordion";

/// Scan the whole document for accordion containers and initialize each.
///
/// Claims the widget namespace first and fails loudly on a duplicate
/// registration, before the document is touched. A configuration error
/// aborts the batch and releases the namespace again so a corrected config
/// can retry. Returns the container ids that were initialized.
pub fn install(
    doc: &mut Document,
    renderer: &mut dyn Renderer,
    handlers: &mut Handlers,
    config: AccordionConfig,
) -> Result<Vec<String>, AccordionError> {
    registry::register(WIDGET_NAME)?;

    let containers = doc.query_all(&config.container_marker);
    log::debug!("[accordion] installing over {} container(s)", containers.len());

    if let Err(err) = BindingLayer::new(config).initialize(doc, renderer, handlers, &containers) {
        registry::unregister(WIDGET_NAME);
        return Err(err);
    }
    Ok(containers)
}

/// Release the widget namespace. Returns whether it was held.
pub fn uninstall() -> bool {
    registry::unregister(WIDGET_NAME)
}

use std::collections::HashMap;

use crate::document::Document;
use crate::visual::Renderer;

/// An activation event flowing to bound handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    /// Id of the element the activation originated on.
    pub target: String,
    default_prevented: bool,
}

impl Activation {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            default_prevented: false,
        }
    }

    /// Suppress the host's default action for this activation.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Handler invoked when its element is activated.
pub type ActivationHandler = Box<dyn FnMut(&mut Document, &mut dyn Renderer, &mut Activation)>;

/// Stores activation handlers keyed by element id.
///
/// An element may carry several handlers; dispatch runs them in
/// registration order.
#[derive(Default)]
pub struct Handlers {
    on_activate: HashMap<String, Vec<ActivationHandler>>,
}

impl Handlers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a handler to an element id.
    pub fn on_activate(&mut self, element_id: &str, handler: ActivationHandler) {
        self.on_activate
            .entry(element_id.to_string())
            .or_default()
            .push(handler);
    }

    /// Number of handlers bound to an element id.
    pub fn bound(&self, element_id: &str) -> usize {
        self.on_activate
            .get(element_id)
            .map(Vec::len)
            .unwrap_or(0)
    }

    /// Deliver an activation to every handler bound to `target`, then run
    /// the host's default action unless a handler suppressed it: anchor
    /// elements navigate the document fragment.
    pub fn dispatch(
        &mut self,
        doc: &mut Document,
        renderer: &mut dyn Renderer,
        target: &str,
    ) -> Activation {
        let mut activation = Activation::new(target);
        if let Some(handlers) = self.on_activate.get_mut(target) {
            for handler in handlers.iter_mut() {
                handler(doc, renderer, &mut activation);
            }
        }
        if !activation.default_prevented() {
            if let Some(href) = doc.get(target).and_then(|el| el.href.clone()) {
                log::debug!("[event] default action: navigating to {href:?}");
                doc.fragment = Some(href);
            }
        }
        activation
    }
}

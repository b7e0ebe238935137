use paneldom::Document;

use crate::config::AccordionConfig;
use crate::error::AccordionError;

/// The two panel states.
///
/// No in-flight state is modeled; a transition is applied synchronously and
/// any animation plays out on the renderer's own timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Visible,
    Collapsed,
}

impl PanelState {
    /// The key this state is persisted and configured under.
    pub fn key(self) -> &'static str {
        match self {
            PanelState::Visible => "visible",
            PanelState::Collapsed => "collapsed",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "visible" => Some(PanelState::Visible),
            "collapsed" => Some(PanelState::Collapsed),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            PanelState::Visible => PanelState::Collapsed,
            PanelState::Collapsed => PanelState::Visible,
        }
    }

    pub fn is_collapsed(self) -> bool {
        self == PanelState::Collapsed
    }
}

/// Reads and writes per-container state through the container's own data
/// map. State travels with the node; there is no shared registry of states.
#[derive(Debug, Clone, Copy)]
pub struct StateStore<'a> {
    config: &'a AccordionConfig,
}

impl<'a> StateStore<'a> {
    pub fn new(config: &'a AccordionConfig) -> Self {
        Self { config }
    }

    /// Resolve the configured default state key.
    ///
    /// An unrecognized key is a static configuration defect; the error
    /// aborts whatever initialization batch consulted it.
    pub fn default_state(&self) -> Result<PanelState, AccordionError> {
        PanelState::from_key(&self.config.default_state).ok_or_else(|| {
            AccordionError::Configuration {
                key: self.config.default_state.clone(),
            }
        })
    }

    /// The container's persisted state, else the configured default.
    /// A persisted value that no longer parses also falls back.
    pub fn get(&self, doc: &Document, container_id: &str) -> Result<PanelState, AccordionError> {
        let persisted = doc
            .get(container_id)
            .and_then(|el| el.get_data(&self.config.state_key))
            .and_then(|value| PanelState::from_key(value));
        match persisted {
            Some(state) => Ok(state),
            None => self.default_state(),
        }
    }

    /// Persist a state on the container node, exclusively owned by it.
    pub fn set(&self, doc: &mut Document, container_id: &str, state: PanelState) {
        if let Some(el) = doc.get_mut(container_id) {
            el.set_data(&self.config.state_key, state.key());
        }
    }
}

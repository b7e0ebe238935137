use std::time::Duration;

use paneldom::{Easing, TransitionConfig};

/// Immutable widget configuration.
///
/// Fixed at construction and passed explicitly to the components that need
/// it; nothing here is consulted through globals. The default state is held
/// as a *key* into the enumerated panel states and validated where it is
/// resolved — an unrecognized key is a fatal configuration error, not a
/// runtime condition.
#[derive(Debug, Clone)]
pub struct AccordionConfig {
    /// Structural marker identifying an accordion root.
    pub container_marker: String,
    /// Structural marker identifying activation sub-elements.
    pub trigger_marker: String,
    /// Structural marker identifying collapsible sub-elements.
    pub content_marker: String,
    /// Data key under which a container's state is persisted on the node.
    pub state_key: String,
    /// State key applied when a container has no persisted state.
    pub default_state: String,

    // Marker classes applied for external styling.
    pub container_class: String,
    pub collapsed_class: String,
    pub trigger_class: String,
    pub content_class: String,

    /// Timing for animated visibility transitions.
    pub slide: TransitionConfig,
}

impl Default for AccordionConfig {
    fn default() -> Self {
        Self {
            container_marker: "js-accordion".into(),
            trigger_marker: "js-accordion-trigger".into(),
            content_marker: "js-accordion-content".into(),
            state_key: "accordion-state".into(),
            default_state: "collapsed".into(),
            container_class: "is-accordion".into(),
            collapsed_class: "is-accordion--collapsed".into(),
            trigger_class: "is-accordion-trigger".into(),
            content_class: "is-accordion-content".into(),
            slide: TransitionConfig::new(Duration::from_millis(200), Easing::EaseInOut),
        }
    }
}

impl AccordionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn container_marker(mut self, marker: impl Into<String>) -> Self {
        self.container_marker = marker.into();
        self
    }

    pub fn trigger_marker(mut self, marker: impl Into<String>) -> Self {
        self.trigger_marker = marker.into();
        self
    }

    pub fn content_marker(mut self, marker: impl Into<String>) -> Self {
        self.content_marker = marker.into();
        self
    }

    pub fn state_key(mut self, key: impl Into<String>) -> Self {
        self.state_key = key.into();
        self
    }

    /// Set the default state key. Validated when resolved, not here.
    pub fn default_state(mut self, key: impl Into<String>) -> Self {
        self.default_state = key.into();
        self
    }

    pub fn slide(mut self, slide: TransitionConfig) -> Self {
        self.slide = slide;
        self
    }
}

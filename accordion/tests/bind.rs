use std::time::{Duration, Instant};

use accordion::{
    install, registry, uninstall, AccordionConfig, AccordionError, BindingLayer, PanelState,
    StateStore,
};
use paneldom::{
    Document, Easing, Element, Handlers, Renderer, SlideRenderer, Timing, TransitionConfig,
    VisualIntent,
};

// Long enough that an in-flight assertion can never race the clock.
const SLIDE: Duration = Duration::from_secs(60);

fn slide_renderer() -> SlideRenderer {
    SlideRenderer::new(TransitionConfig::new(SLIDE, Easing::Linear))
}

/// Test double asserting on which intents were requested, not on timing.
#[derive(Default)]
struct RecordingRenderer {
    commands: Vec<(String, VisualIntent, Timing)>,
}

impl Renderer for RecordingRenderer {
    fn apply(&mut self, _doc: &mut Document, target: &str, intent: VisualIntent, timing: Timing) {
        self.commands.push((target.to_string(), intent, timing));
    }
}

/// Two independent accordions; the first trigger sits below a wrapper so
/// activation has to walk up to its owning container.
fn faq_doc() -> Document {
    Document::new(Element::node().id("root").children([
        Element::node().id("faq-1").marker("js-accordion").children([
            Element::node().id("head-1").child(
                Element::anchor("#faq-1")
                    .id("trigger-1")
                    .marker("js-accordion-trigger"),
            ),
            Element::node()
                .id("content-1")
                .marker("js-accordion-content")
                .height(5),
        ]),
        Element::node().id("faq-2").marker("js-accordion").children([
            Element::anchor("#faq-2")
                .id("trigger-2")
                .marker("js-accordion-trigger"),
            Element::node()
                .id("content-2")
                .marker("js-accordion-content")
                .height(3),
        ]),
    ]))
}

fn selection(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

// =============================================================================
// Tagging and Binding Tests
// =============================================================================

#[test]
fn test_initialize_tags_marker_classes() {
    let config = AccordionConfig::new();
    let layer = BindingLayer::new(config.clone());
    let mut doc = faq_doc();
    let mut renderer = RecordingRenderer::default();
    let mut handlers = Handlers::new();

    layer
        .initialize(&mut doc, &mut renderer, &mut handlers, &selection(&["faq-1"]))
        .unwrap();

    let container = doc.get("faq-1").unwrap();
    assert!(container.has_class(&config.container_class));
    assert!(container.has_class(&config.collapsed_class));
    assert!(doc.get("trigger-1").unwrap().has_class(&config.trigger_class));
    assert!(doc.get("content-1").unwrap().has_class(&config.content_class));
}

#[test]
fn test_every_trigger_and_content_match_is_tagged_and_bound() {
    let config = AccordionConfig::new();
    let layer = BindingLayer::new(config.clone());
    let mut doc = Document::new(
        Element::node().id("root").child(
            Element::node().id("faq").marker("js-accordion").children([
                Element::node().id("trig-a").marker("js-accordion-trigger"),
                Element::node().id("trig-b").marker("js-accordion-trigger"),
                Element::node().id("cont-a").marker("js-accordion-content"),
                Element::node().id("cont-b").marker("js-accordion-content"),
            ]),
        ),
    );
    let mut renderer = RecordingRenderer::default();
    let mut handlers = Handlers::new();

    layer
        .initialize(&mut doc, &mut renderer, &mut handlers, &selection(&["faq"]))
        .unwrap();

    for id in ["trig-a", "trig-b"] {
        assert!(doc.get(id).unwrap().has_class(&config.trigger_class));
        assert_eq!(handlers.bound(id), 1, "{id} not bound");
    }
    for id in ["cont-a", "cont-b"] {
        assert!(doc.get(id).unwrap().has_class(&config.content_class));
    }
    // Even with two content matches, only the first receives the intent.
    assert_eq!(renderer.commands.len(), 1);
    assert_eq!(renderer.commands[0].0, "cont-a");
}

#[test]
fn test_initialize_returns_selection_unchanged() {
    let layer = BindingLayer::new(AccordionConfig::new());
    let mut doc = faq_doc();
    let mut renderer = RecordingRenderer::default();
    let mut handlers = Handlers::new();

    let ids = selection(&["faq-1", "faq-2"]);
    let returned = layer
        .initialize(&mut doc, &mut renderer, &mut handlers, &ids)
        .unwrap();
    assert_eq!(returned, ids.as_slice());
}

#[test]
fn test_container_without_trigger_degrades_to_state_only() {
    let config = AccordionConfig::new();
    let layer = BindingLayer::new(config.clone());
    let mut doc = Document::new(
        Element::node().id("root").child(
            Element::node().id("faq").marker("js-accordion").child(
                Element::node().id("cont").marker("js-accordion-content"),
            ),
        ),
    );
    let mut renderer = RecordingRenderer::default();
    let mut handlers = Handlers::new();

    layer
        .initialize(&mut doc, &mut renderer, &mut handlers, &selection(&["faq"]))
        .unwrap();

    // No interactive toggle, but state and classes are in place.
    assert_eq!(handlers.bound("cont"), 0);
    assert_eq!(
        doc.get("faq").unwrap().get_data(&config.state_key).unwrap(),
        "collapsed"
    );
    assert!(doc.get("faq").unwrap().has_class(&config.container_class));
}

#[test]
fn test_configuration_error_aborts_remaining_batch() {
    let config = AccordionConfig::new().default_state("expanded");
    let layer = BindingLayer::new(config.clone());
    let mut doc = faq_doc();
    let mut renderer = RecordingRenderer::default();
    let mut handlers = Handlers::new();

    let err = layer
        .initialize(
            &mut doc,
            &mut renderer,
            &mut handlers,
            &selection(&["faq-1", "faq-2"]),
        )
        .unwrap_err();
    assert!(matches!(err, AccordionError::Configuration { .. }));

    // The failing container and the rest of the batch are both untouched.
    for id in ["faq-1", "faq-2"] {
        let container = doc.get(id).unwrap();
        assert!(container.classes.is_empty(), "{id} was tagged");
        assert!(container.get_data(&config.state_key).is_none());
    }
    assert_eq!(handlers.bound("trigger-1"), 0);
    assert!(renderer.commands.is_empty());
}

// =============================================================================
// Activation Tests
// =============================================================================

#[test]
fn test_end_to_end_toggle_cycle() {
    let config = AccordionConfig::new();
    let store = StateStore::new(&config);
    let layer = BindingLayer::new(config.clone());
    let mut doc = faq_doc();
    let mut renderer = slide_renderer();
    let mut handlers = Handlers::new();

    layer
        .initialize(
            &mut doc,
            &mut renderer,
            &mut handlers,
            &selection(&["faq-1", "faq-2"]),
        )
        .unwrap();

    // After init: collapsed marker present, content hidden instantly.
    assert!(doc.get("faq-1").unwrap().has_class(&config.collapsed_class));
    assert!(doc.get("content-1").unwrap().hidden);

    // First activation: class removed, content shown via animated slide.
    handlers.dispatch(&mut doc, &mut renderer, "trigger-1");
    assert_eq!(store.get(&doc, "faq-1").unwrap(), PanelState::Visible);
    assert!(!doc.get("faq-1").unwrap().has_class(&config.collapsed_class));
    assert!(!doc.get("content-1").unwrap().hidden);
    assert!(renderer.has_active());
    renderer.advance(&mut doc, Instant::now() + SLIDE * 2);
    assert!(!doc.get("content-1").unwrap().hidden);

    // Second activation: class re-added, content hidden once the slide ends.
    handlers.dispatch(&mut doc, &mut renderer, "trigger-1");
    assert_eq!(store.get(&doc, "faq-1").unwrap(), PanelState::Collapsed);
    assert!(doc.get("faq-1").unwrap().has_class(&config.collapsed_class));
    assert!(!doc.get("content-1").unwrap().hidden);
    renderer.advance(&mut doc, Instant::now() + SLIDE * 2);
    assert!(doc.get("content-1").unwrap().hidden);
}

#[test]
fn test_activation_suppresses_default_navigation() {
    let layer = BindingLayer::new(AccordionConfig::new());
    let mut doc = faq_doc();
    let mut renderer = slide_renderer();
    let mut handlers = Handlers::new();

    layer
        .initialize(&mut doc, &mut renderer, &mut handlers, &selection(&["faq-1"]))
        .unwrap();

    let activation = handlers.dispatch(&mut doc, &mut renderer, "trigger-1");
    assert!(activation.default_prevented());
    // The anchor never navigated the document.
    assert!(doc.fragment.is_none());
}

#[test]
fn test_containers_toggle_independently() {
    let config = AccordionConfig::new();
    let store = StateStore::new(&config);
    let layer = BindingLayer::new(config.clone());
    let mut doc = faq_doc();
    let mut renderer = slide_renderer();
    let mut handlers = Handlers::new();

    layer
        .initialize(
            &mut doc,
            &mut renderer,
            &mut handlers,
            &selection(&["faq-1", "faq-2"]),
        )
        .unwrap();

    handlers.dispatch(&mut doc, &mut renderer, "trigger-1");

    assert_eq!(store.get(&doc, "faq-1").unwrap(), PanelState::Visible);
    // The sibling accordion is untouched.
    assert_eq!(store.get(&doc, "faq-2").unwrap(), PanelState::Collapsed);
    assert!(doc.get("faq-2").unwrap().has_class(&config.collapsed_class));
    assert!(doc.get("content-2").unwrap().hidden);
}

#[test]
fn test_rapid_reactivation_toggles_from_persisted_state() {
    let config = AccordionConfig::new();
    let store = StateStore::new(&config);
    let layer = BindingLayer::new(config.clone());
    let mut doc = faq_doc();
    let mut renderer = slide_renderer();
    let mut handlers = Handlers::new();

    layer
        .initialize(&mut doc, &mut renderer, &mut handlers, &selection(&["faq-1"]))
        .unwrap();

    // Two activations with no advance between them: the second toggles
    // from the persisted state, not from the unfinished animation.
    handlers.dispatch(&mut doc, &mut renderer, "trigger-1");
    handlers.dispatch(&mut doc, &mut renderer, "trigger-1");

    assert_eq!(store.get(&doc, "faq-1").unwrap(), PanelState::Collapsed);
    assert!(doc.get("faq-1").unwrap().has_class(&config.collapsed_class));
    renderer.advance(&mut doc, Instant::now() + SLIDE * 2);
    assert!(doc.get("content-1").unwrap().hidden);
}

// =============================================================================
// Install Lifecycle Tests
// =============================================================================

// The registry is process-wide, so everything touching the "accordion"
// namespace lives in this single test.
#[test]
fn test_install_lifecycle() {
    let config = AccordionConfig::new();
    let mut doc = faq_doc();
    let mut renderer = slide_renderer();
    let mut handlers = Handlers::new();

    let ids = install(&mut doc, &mut renderer, &mut handlers, config.clone()).unwrap();
    assert_eq!(ids, vec!["faq-1", "faq-2"]);
    assert!(registry::is_registered(accordion::WIDGET_NAME));

    // The namespace is claimed; a second install fails loudly.
    let mut doc2 = faq_doc();
    let err = install(&mut doc2, &mut renderer, &mut handlers, config.clone()).unwrap_err();
    assert!(matches!(err, AccordionError::AlreadyRegistered { .. }));

    assert!(uninstall());
    assert!(!uninstall());

    // A failed install releases the namespace again.
    let bad = AccordionConfig::new().default_state("expanded");
    let mut doc3 = faq_doc();
    let err = install(&mut doc3, &mut renderer, &mut handlers, bad).unwrap_err();
    assert!(matches!(err, AccordionError::Configuration { .. }));
    assert!(!registry::is_registered(accordion::WIDGET_NAME));

    let mut doc4 = faq_doc();
    install(&mut doc4, &mut renderer, &mut handlers, config).unwrap();
    assert!(uninstall());
}

#[test]
fn test_registry_rejects_duplicate_names() {
    // A name private to this test, so parallel tests cannot race it.
    let name = "accordion-bind-test-ns";
    registry::register(name).unwrap();
    let err = registry::register(name).unwrap_err();
    match err {
        AccordionError::AlreadyRegistered { name: held } => assert_eq!(held, name),
        other => panic!("expected duplicate registration error, got {other}"),
    }
    assert!(registry::unregister(name));
    registry::register(name).unwrap();
    assert!(registry::unregister(name));
}

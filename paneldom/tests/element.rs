use paneldom::Element;

// =============================================================================
// Builder Tests
// =============================================================================

#[test]
fn test_generated_ids_are_unique() {
    let a = Element::node();
    let b = Element::node();
    assert_ne!(a.id, b.id);
}

#[test]
fn test_builder_sets_structure_and_presentation() {
    let el = Element::node()
        .id("box")
        .marker("widget")
        .class("is-widget")
        .data("k", "v")
        .height(4)
        .hidden(true);

    assert_eq!(el.id, "box");
    assert!(el.has_marker("widget"));
    assert!(el.has_class("is-widget"));
    assert_eq!(el.get_data("k").unwrap(), "v");
    assert_eq!(el.height, 4);
    assert!(el.hidden);
}

#[test]
fn test_anchor_carries_href() {
    let el = Element::anchor("#details");
    assert_eq!(el.href.as_deref(), Some("#details"));
}

#[test]
fn test_children_builder_appends() {
    let el = Element::node()
        .child(Element::text("a").id("a"))
        .children([Element::text("b").id("b"), Element::text("c").id("c")]);
    let ids: Vec<&str> = el.children.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

// =============================================================================
// Class Mutation Tests
// =============================================================================

#[test]
fn test_add_class_is_idempotent() {
    let mut el = Element::node();
    el.add_class("is-open");
    el.add_class("is-open");
    assert_eq!(el.classes, vec!["is-open"]);
}

#[test]
fn test_remove_class() {
    let mut el = Element::node().class("a").class("b");
    el.remove_class("a");
    assert!(!el.has_class("a"));
    assert!(el.has_class("b"));
}

#[test]
fn test_remove_absent_class_is_noop() {
    let mut el = Element::node().class("a");
    el.remove_class("b");
    assert_eq!(el.classes, vec!["a"]);
}

// =============================================================================
// Attached Data Tests
// =============================================================================

#[test]
fn test_set_data_overwrites() {
    let mut el = Element::node();
    el.set_data("state", "visible");
    el.set_data("state", "collapsed");
    assert_eq!(el.get_data("state").unwrap(), "collapsed");
}

#[test]
fn test_get_absent_data_is_none() {
    let el = Element::node();
    assert!(el.get_data("state").is_none());
}

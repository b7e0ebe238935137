//! Headless demo: builds a document with two accordions, installs the
//! widget, and simulates a user toggling the first one.

use std::time::Instant;

use accordion::{install, uninstall, AccordionConfig, StateStore};
use paneldom::{Document, Element, Handlers, SlideRenderer};
use simplelog::{Config, LevelFilter, SimpleLogger};

fn main() {
    SimpleLogger::init(LevelFilter::Debug, Config::default()).expect("failed to initialize logger");

    let mut doc = Document::new(Element::node().id("page").children([
        Element::node().id("faq-shipping").marker("js-accordion").children([
            Element::anchor("#shipping")
                .id("trigger-shipping")
                .marker("js-accordion-trigger"),
            Element::node()
                .id("content-shipping")
                .marker("js-accordion-content")
                .height(6)
                .child(Element::text("Orders ship within two business days.")),
        ]),
        Element::node().id("faq-returns").marker("js-accordion").children([
            Element::anchor("#returns")
                .id("trigger-returns")
                .marker("js-accordion-trigger"),
            Element::node()
                .id("content-returns")
                .marker("js-accordion-content")
                .height(4)
                .child(Element::text("Returns are accepted for thirty days.")),
        ]),
    ]));

    let config = AccordionConfig::new();
    let mut renderer = SlideRenderer::new(config.slide);
    let mut handlers = Handlers::new();

    let containers =
        install(&mut doc, &mut renderer, &mut handlers, config.clone()).expect("install failed");

    println!("-- installed --");
    report(&doc, &config, &containers);

    println!("-- activating trigger-shipping --");
    handlers.dispatch(&mut doc, &mut renderer, "trigger-shipping");
    renderer.advance(&mut doc, Instant::now() + config.slide.duration * 2);
    report(&doc, &config, &containers);

    println!("-- activating trigger-shipping again --");
    handlers.dispatch(&mut doc, &mut renderer, "trigger-shipping");
    renderer.advance(&mut doc, Instant::now() + config.slide.duration * 2);
    report(&doc, &config, &containers);

    uninstall();
}

fn report(doc: &Document, config: &AccordionConfig, containers: &[String]) {
    let store = StateStore::new(config);
    for id in containers {
        let state = store.get(doc, id).expect("state resolves");
        let classes = doc
            .get(id)
            .map(|el| el.classes.join(" "))
            .unwrap_or_default();
        println!("  {id}: {} [{classes}]", state.key());
    }
}

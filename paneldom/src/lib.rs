pub mod document;
pub mod element;
pub mod event;
pub mod transitions;
pub mod visual;

pub use document::Document;
pub use element::Element;
pub use event::{Activation, ActivationHandler, Handlers};
pub use transitions::{Easing, TransitionConfig};
pub use visual::{Renderer, SlideRenderer, Timing, VisualIntent};

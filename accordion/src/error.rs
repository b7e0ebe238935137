//! Widget error types.

/// Errors surfaced while installing or initializing accordions.
///
/// Missing structure (a container without triggers or content) is not an
/// error; those containers degrade to state-only behavior.
#[derive(Debug, thiserror::Error)]
pub enum AccordionError {
    /// The configured default state key maps to no known panel state.
    /// Fatal: aborts the initialization batch it occurs in.
    #[error("unknown default accordion state {key:?}")]
    Configuration {
        /// The unresolvable state key.
        key: String,
    },

    /// The widget namespace was claimed by an earlier registration.
    #[error("widget namespace {name:?} is already registered")]
    AlreadyRegistered {
        /// The contested namespace.
        name: String,
    },
}

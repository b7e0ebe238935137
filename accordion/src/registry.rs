//! Process-wide widget namespace registry.
//!
//! An explicit registration lifecycle: claim a name once, get an error on a
//! duplicate claim, release it on teardown. Nothing registers as a load
//! side effect.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, OnceLock};

use crate::error::AccordionError;

static REGISTRY: OnceLock<Mutex<HashSet<String>>> = OnceLock::new();

fn lock() -> MutexGuard<'static, HashSet<String>> {
    REGISTRY
        .get_or_init(|| Mutex::new(HashSet::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Claim a widget namespace. Errors if an earlier registration holds it.
pub fn register(name: &str) -> Result<(), AccordionError> {
    let mut names = lock();
    if !names.insert(name.to_string()) {
        return Err(AccordionError::AlreadyRegistered {
            name: name.to_string(),
        });
    }
    log::debug!("[registry] registered {name:?}");
    Ok(())
}

/// Release a widget namespace. Returns whether it was held.
pub fn unregister(name: &str) -> bool {
    let removed = lock().remove(name);
    if removed {
        log::debug!("[registry] unregistered {name:?}");
    }
    removed
}

pub fn is_registered(name: &str) -> bool {
    lock().contains(name)
}

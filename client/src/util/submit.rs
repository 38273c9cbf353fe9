//! Guarded submit for signal-held form state.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use leptos::prelude::*;

/// Run `begin` against `state` only when the form is `ready`. A refused
/// submit never touches the signal, so nothing downstream re-renders.
pub fn begin_if_ready<T, P>(state: RwSignal<T>, ready: bool, begin: impl FnOnce(&mut T) -> Option<P>) -> Option<P>
where
    T: Send + Sync + 'static,
{
    if !ready {
        return None;
    }
    state.try_update(begin).flatten()
}

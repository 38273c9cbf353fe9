//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and state
//! logic so the form rules stay testable off the browser.

pub mod submit;
pub mod timer;
pub mod validate;

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared page chrome (header, icons, labelled inputs) so
//! the route pages only describe their own content and form wiring.

pub mod form_field;
pub mod icon;
pub mod site_header;

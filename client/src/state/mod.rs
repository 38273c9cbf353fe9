//! View-local form state.
//!
//! DESIGN
//! ======
//! Each form page owns one record combining the editable payload with a
//! `Submission` tracker. Nothing here is shared between pages; records are
//! created when a page mounts and dropped when the user navigates away.

pub mod register;
pub mod sign_in;
pub mod submission;

//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its own state record and delegates shared chrome to
//! `components`. Pages never share state with one another.

pub mod home;
pub mod not_found;
pub mod register;
pub mod sign_in;

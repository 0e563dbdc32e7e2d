//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Pages never check the session themselves; `Gate` has
//! already decided they may render.

pub mod admin_users;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod register;
pub mod warehouse_managers;

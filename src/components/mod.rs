//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gate` wraps every route with the session check; `record_list` renders
//! the admin list payloads.

pub mod gate;
pub mod record_list;

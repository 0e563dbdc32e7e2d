//! Helpers shared across pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure decision
//! logic from page markup to keep them testable.

pub mod fetch;
pub mod guard;
pub mod storage;

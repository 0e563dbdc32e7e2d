//! Client-side state shared by the guard, API client, and views.
//!
//! DESIGN
//! ======
//! `session` is the only durable state; `view` holds the per-mount fetch
//! lifecycle the protected pages share.

pub mod session;
pub mod view;

//! Browser helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate `web-sys` access from component markup so the
//! decision logic can be unit tested without a DOM.

pub mod redirect;
pub mod theme;

//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component is independent: the theme toggle, the redirect form and
//! the comment section share no state and initialize on their own.

pub mod comment_section;
pub mod redirect_form;
pub mod theme_toggle;
pub mod version_badge;

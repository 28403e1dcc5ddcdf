//! Networking and external-library bindings.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls to the FastCode server; `waline` binds the hosted
//! comment widget's global `Waline` object.

pub mod api;
#[cfg(feature = "csr")]
pub mod waline;

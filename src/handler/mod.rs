//! Request handling
//!
//! Routing, static asset serving, and the lookup endpoint.

pub mod lookup;
mod router;
mod static_files;

pub use router::{handle_request, RequestContext};

//! HTTP building blocks
//!
//! Content-type resolution, ETag handling, and response builders shared
//! by the static file handler and the lookup endpoint.

pub mod cache;
pub mod mime;
pub mod response;

pub use response::{
    bad_request, build_304_response, build_404_response, build_405_response,
    build_cached_response, build_options_response, build_413_response, json_response,
};

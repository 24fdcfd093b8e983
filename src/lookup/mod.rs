//! Plate lookup flow
//!
//! The form-submission logic of the search page: field validation, one
//! POST to the external validation API per submission, reply
//! classification, and rendering of the results table rows.

pub mod client;
pub mod form;
pub mod table;
pub mod types;

pub use client::{LookupClient, LookupOutcome, CONNECTIVITY_MESSAGE};
pub use form::SearchForm;
pub use table::ResultsTable;
pub use types::{PlateQuery, VehicleRecord};

//! Lookup endpoint
//!
//! `POST /api/validate-plate`: reads the form body the page script posts,
//! runs the submission flow, and answers the JSON the script turns into
//! an alert or table rows. Handled lookups always answer 200; the page
//! script does not inspect HTTP status codes, the outcome travels in the
//! body.

use crate::config::AppState;
use crate::http;
use crate::logger;
use crate::lookup::{LookupOutcome, ResultsTable, SearchForm, CONNECTIVITY_MESSAGE};
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Request, Response, StatusCode};
use serde::Serialize;
use std::sync::Arc;

/// Notification text for a matched plate
const FOUND_MESSAGE: &str = "Placa encontrada con éxito";

/// Body of every lookup response.
#[derive(Debug, Serialize)]
pub struct LookupReply {
    pub success: bool,
    /// Failure category: "validation", "rejected", or "transport"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Rendered `<tr>` markup for the results table body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<String>,
}

impl LookupReply {
    fn alert(kind: &'static str, message: String) -> Self {
        Self {
            success: false,
            kind: Some(kind),
            message: Some(message),
            rows: None,
        }
    }
}

pub async fn handle_lookup(
    req: Request<hyper::body::Incoming>,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    // Read request body
    let body = match req.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            logger::log_error(&format!("Failed to read lookup body: {e}"));
            return http::bad_request("Failed to read request body");
        }
    };

    let form: SearchForm = match serde_json::from_slice(&body) {
        Ok(f) => f,
        Err(e) => return http::bad_request(&format!("Invalid JSON: {e}")),
    };

    // Validation happens before any upstream traffic
    let query = match form.validate() {
        Ok(q) => q,
        Err(e) => {
            return http::json_response(
                StatusCode::OK,
                &LookupReply::alert("validation", e.to_string()),
            )
        }
    };

    logger::log_lookup(&query.placa);
    let outcome = state.lookup.query(&query).await;
    http::json_response(StatusCode::OK, &reply_for(outcome))
}

/// Map a lookup outcome onto the reply the page script consumes.
///
/// The row set starts empty for every submission; only the success paths
/// render rows, so a failed search leaves the table body cleared.
fn reply_for(outcome: LookupOutcome) -> LookupReply {
    let mut table = ResultsTable::new();
    match outcome {
        LookupOutcome::Found(record) => {
            table.push_record(&record);
            LookupReply {
                success: true,
                kind: None,
                message: Some(FOUND_MESSAGE.to_string()),
                rows: Some(table.to_html()),
            }
        }
        LookupOutcome::NoResults => {
            table.push_no_results();
            LookupReply {
                success: true,
                kind: None,
                message: None,
                rows: Some(table.to_html()),
            }
        }
        LookupOutcome::Rejected { message } => LookupReply::alert("rejected", message),
        LookupOutcome::Unreachable => {
            LookupReply::alert("transport", CONNECTIVITY_MESSAGE.to_string())
        }
    }
}

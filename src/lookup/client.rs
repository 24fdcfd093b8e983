//! Upstream validation API client
//!
//! Issues one POST per submission and classifies the reply. No retry and
//! no explicit timeout; a hung upstream is left to platform defaults.

use crate::logger;

use super::types::{PlateQuery, UpstreamReply, VehicleRecord};

/// Alert shown for any transport or parse failure
pub const CONNECTIVITY_MESSAGE: &str =
    "Error al conectar con el servidor. Por favor, inténtalo de nuevo.";

/// Result of one lookup, as observed by the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Upstream matched the plate and returned a record
    Found(VehicleRecord),
    /// Upstream reported success but carried no record
    NoResults,
    /// Upstream answered with `success: false`; message surfaced verbatim
    Rejected { message: String },
    /// The call or the JSON decode failed; details are in the error log
    Unreachable,
}

pub struct LookupClient {
    endpoint: String,
    http: reqwest::Client,
}

impl LookupClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            http: reqwest::Client::new(),
        }
    }

    /// Run one validation query against the upstream endpoint.
    pub async fn query(&self, query: &PlateQuery) -> LookupOutcome {
        match self.send(query).await {
            Ok(reply) => classify(reply),
            Err(e) => {
                logger::log_error(&format!(
                    "Upstream call to {} failed: {e}",
                    self.endpoint
                ));
                LookupOutcome::Unreachable
            }
        }
    }

    // The body is decoded as JSON regardless of HTTP status: the upstream
    // uses 4xx codes for rejections but still sends the reply envelope.
    async fn send(&self, query: &PlateQuery) -> Result<UpstreamReply, reqwest::Error> {
        self.http
            .post(&self.endpoint)
            .json(query)
            .send()
            .await?
            .json::<UpstreamReply>()
            .await
    }
}

/// Map a decoded reply envelope onto a lookup outcome.
pub fn classify(reply: UpstreamReply) -> LookupOutcome {
    if !reply.success {
        return LookupOutcome::Rejected {
            message: reply.message.unwrap_or_default(),
        };
    }
    match reply.data {
        Some(value) => match serde_json::from_value::<VehicleRecord>(value) {
            Ok(record) => LookupOutcome::Found(record),
            Err(e) => {
                logger::log_error(&format!("Malformed vehicle record in upstream reply: {e}"));
                LookupOutcome::Unreachable
            }
        },
        None => LookupOutcome::NoResults,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(json: serde_json::Value) -> UpstreamReply {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_match_with_record() {
        let outcome = classify(reply(serde_json::json!({
            "success": true,
            "message": "Placa encontrada con éxito",
            "data": {
                "placa": "ABC123",
                "pais": "Colombia",
                "departamento": "Antioquia",
                "ciudad": "Medellín",
                "servicio": "Particular",
                "color_fondo": "amarillo",
                "color_letra": "negro",
                "rango": "AAA000 - AZZ999"
            }
        })));
        match outcome {
            LookupOutcome::Found(record) => {
                assert_eq!(record.placa, "ABC123");
                assert_eq!(record.ciudad.as_deref(), Some("Medellín"));
            }
            other => panic!("expected Found, got {other:?}"),
        }
    }

    #[test]
    fn test_success_without_data() {
        let outcome = classify(reply(serde_json::json!({ "success": true })));
        assert_eq!(outcome, LookupOutcome::NoResults);
    }

    #[test]
    fn test_rejection_surfaces_message_verbatim() {
        let outcome = classify(reply(serde_json::json!({
            "success": false,
            "message": "Los colores no coinciden con los registrados",
            "data": { "colores_registrados": { "fondo": "blanco", "letra": "negro" } }
        })));
        assert_eq!(
            outcome,
            LookupOutcome::Rejected {
                message: "Los colores no coinciden con los registrados".to_string()
            }
        );
    }

    #[test]
    fn test_rejection_without_message() {
        let outcome = classify(reply(serde_json::json!({ "success": false })));
        assert_eq!(
            outcome,
            LookupOutcome::Rejected {
                message: String::new()
            }
        );
    }

    #[test]
    fn test_success_with_recordless_data_is_a_parse_failure() {
        let outcome = classify(reply(serde_json::json!({
            "success": true,
            "data": { "unexpected": "shape" }
        })));
        assert_eq!(outcome, LookupOutcome::Unreachable);
    }
}

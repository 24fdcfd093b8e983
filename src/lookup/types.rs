// Wire types for the validation API exchange

use serde::{Deserialize, Serialize};

/// Validated query sent to the upstream endpoint.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PlateQuery {
    pub placa: String,
    pub color_fondo: String,
    pub color_letra: String,
}

/// Raw upstream reply envelope.
///
/// `data` stays untyped here: the upstream sends a vehicle record on a
/// match, but rejections may carry other shapes (e.g. the registered
/// colors when the submitted ones differ).
#[derive(Debug, Deserialize)]
pub struct UpstreamReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// Vehicle record as returned for a matched plate.
///
/// Only `placa` is guaranteed; every other field renders as a placeholder
/// when absent. Extra upstream fields (such as the matched range) are
/// ignored.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct VehicleRecord {
    pub placa: String,
    #[serde(default)]
    pub servicio: Option<String>,
    #[serde(default)]
    pub departamento: Option<String>,
    #[serde(default)]
    pub ciudad: Option<String>,
    #[serde(default)]
    pub pais: Option<String>,
    #[serde(default)]
    pub color_fondo: Option<String>,
    #[serde(default)]
    pub color_letra: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_serializes_expected_keys() {
        let query = PlateQuery {
            placa: "ABC123".to_string(),
            color_fondo: "amarillo".to_string(),
            color_letra: "negro".to_string(),
        };
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["placa"], "ABC123");
        assert_eq!(json["color_fondo"], "amarillo");
        assert_eq!(json["color_letra"], "negro");
    }

    #[test]
    fn test_record_with_missing_optionals() {
        let record: VehicleRecord =
            serde_json::from_value(serde_json::json!({ "placa": "XYZ789" })).unwrap();
        assert_eq!(record.placa, "XYZ789");
        assert!(record.servicio.is_none());
        assert!(record.pais.is_none());
    }

    #[test]
    fn test_record_ignores_extra_fields() {
        let record: VehicleRecord = serde_json::from_value(serde_json::json!({
            "placa": "ABC123",
            "pais": "Colombia",
            "rango": "AAA000 - AZZ999"
        }))
        .unwrap();
        assert_eq!(record.pais.as_deref(), Some("Colombia"));
    }

    #[test]
    fn test_record_requires_placa() {
        let result: Result<VehicleRecord, _> =
            serde_json::from_value(serde_json::json!({ "pais": "Colombia" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_reply_defaults() {
        let reply: UpstreamReply = serde_json::from_str("{}").unwrap();
        assert!(!reply.success);
        assert!(reply.message.is_none());
        assert!(reply.data.is_none());
    }
}

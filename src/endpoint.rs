/// HTTP endpoint for risk assessment queries
///
/// Provides the JSON API the frontend talks to:
/// - POST /predict/flood_drought_by_city - body {"city": "<name>"} → RiskAssessment
/// - GET /health - Service health check
///
/// Status mapping follows the error taxonomy: an unresolvable city is the
/// caller's problem (400), missing reference data is ours (500).
///
/// Handlers produce (status, JSON) pairs; only the server loop touches
/// tiny_http, which keeps the routing logic testable without a socket.

use std::io::Read;
use std::sync::Arc;

use serde::Deserialize;

use crate::assess;
use crate::directory::ReferenceSnapshot;
use crate::logging::{self, Component};
use crate::model::RiskError;
use crate::simulate::RandomLevels;

// ---------------------------------------------------------------------------
// Request Types
// ---------------------------------------------------------------------------

/// Body of POST /predict/flood_drought_by_city
#[derive(Debug, Deserialize)]
struct CityRiskRequest {
    city: String,
}

/// Status code plus JSON body, before tiny_http packaging.
type JsonReply = (u16, serde_json::Value);

// ---------------------------------------------------------------------------
// HTTP Server
// ---------------------------------------------------------------------------

/// Start the HTTP endpoint server on the specified port. Blocks serving
/// requests until the process exits.
pub fn start_endpoint_server(port: u16, snapshot: Arc<ReferenceSnapshot>) -> Result<(), String> {
    let server = tiny_http::Server::http(format!("0.0.0.0:{}", port))
        .map_err(|e| format!("Failed to start HTTP server: {}", e))?;

    logging::info(
        Component::Endpoint,
        &format!("listening on http://0.0.0.0:{}", port),
    );
    println!("📡 HTTP endpoint listening on http://0.0.0.0:{}", port);
    println!("   POST /predict/flood_drought_by_city - Assess flood/drought risk");
    println!("   GET /health - Service health check\n");

    // One entropy-backed level source for the lifetime of the server; the
    // snapshot itself is read-only and needs no locking.
    let mut levels = RandomLevels::new();

    for mut request in server.incoming_requests() {
        let url = request.url().to_string();
        let method = request.method().clone();

        let (status, json) = match (method, url.as_str()) {
            (tiny_http::Method::Get, "/health") => handle_health(),
            (tiny_http::Method::Post, "/predict/flood_drought_by_city") => {
                let mut body = String::new();
                match request.as_reader().read_to_string(&mut body) {
                    Ok(_) => handle_city_risk(&snapshot, &mut levels, &body),
                    Err(e) => (
                        400,
                        serde_json::json!({ "error": format!("Failed to read request body: {}", e) }),
                    ),
                }
            }
            _ => (
                404,
                serde_json::json!({
                    "error": "Not found",
                    "available_endpoints": ["/health", "/predict/flood_drought_by_city"]
                }),
            ),
        };

        if let Err(e) = request.respond(create_response(status, json)) {
            logging::error(Component::Endpoint, &format!("failed to send response: {}", e));
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Handle /health endpoint
fn handle_health() -> JsonReply {
    (
        200,
        serde_json::json!({
            "status": "ok",
            "service": "riskmon_service",
            "version": env!("CARGO_PKG_VERSION")
        }),
    )
}

/// Handle /predict/flood_drought_by_city endpoint
fn handle_city_risk(
    snapshot: &ReferenceSnapshot,
    levels: &mut RandomLevels,
    body: &str,
) -> JsonReply {
    let request: CityRiskRequest = match serde_json::from_str(body) {
        Ok(request) => request,
        Err(e) => {
            return (
                400,
                serde_json::json!({ "error": format!("Invalid request body: {}", e) }),
            );
        }
    };

    match assess::assess_city(snapshot, &request.city, levels) {
        Ok(assessment) => (200, serde_json::to_value(&assessment).unwrap()),
        Err(err) => {
            let status = status_for_error(&err);
            if status >= 500 {
                logging::error(Component::Endpoint, &err.to_string());
            } else {
                logging::info(Component::Endpoint, &format!("rejected request: {}", err));
            }
            (status, serde_json::json!({ "error": err.to_string() }))
        }
    }
}

/// Maps pipeline errors to HTTP status codes.
fn status_for_error(err: &RiskError) -> u16 {
    match err {
        RiskError::CityNotFound(_) => 400,
        RiskError::EmptyStationDirectory | RiskError::EmptyCityDirectory => 500,
    }
}

/// Create HTTP response with JSON body
fn create_response(
    status_code: u16,
    json: serde_json::Value,
) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    let body = serde_json::to_string_pretty(&json).unwrap();
    let bytes = body.into_bytes();

    tiny_http::Response::from_data(bytes)
        .with_status_code(tiny_http::StatusCode::from(status_code))
        .with_header(
            tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap(),
        )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CityRecord, StationRecord};

    fn snapshot() -> ReferenceSnapshot {
        ReferenceSnapshot::from_records(
            vec![CityRecord {
                name: "Testville".to_string(),
                lat: 20.0,
                lon: 80.0,
            }],
            vec![StationRecord {
                name: "S1".to_string(),
                lat: 20.01,
                lon: 80.01,
                warning_level: 10.0,
                danger_level: 15.0,
            }],
        )
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for_error(&RiskError::CityNotFound("x".into())), 400);
        assert_eq!(status_for_error(&RiskError::EmptyStationDirectory), 500);
        assert_eq!(status_for_error(&RiskError::EmptyCityDirectory), 500);
    }

    #[test]
    fn test_valid_request_returns_assessment_shape() {
        let snap = snapshot();
        let mut levels = RandomLevels::with_seed(1);
        let (status, json) = handle_city_risk(&snap, &mut levels, r#"{"city": "testville"}"#);
        assert_eq!(status, 200);
        assert_eq!(json["station_info"]["name"], "S1");
        assert!(json["risk_level"].is_string());
        assert!(json["reason"].is_string());
        assert!(json["recommendation"].is_string());
    }

    #[test]
    fn test_unknown_city_is_400_with_input_in_message() {
        let snap = snapshot();
        let mut levels = RandomLevels::with_seed(1);
        let (status, json) = handle_city_risk(&snap, &mut levels, r#"{"city": "Nowhereville"}"#);
        assert_eq!(status, 400);
        assert!(json["error"].as_str().unwrap().contains("Nowhereville"));
    }

    #[test]
    fn test_empty_station_directory_is_500() {
        let snap = ReferenceSnapshot::from_records(snapshot().cities, Vec::new());
        let mut levels = RandomLevels::with_seed(1);
        let (status, _) = handle_city_risk(&snap, &mut levels, r#"{"city": "Testville"}"#);
        assert_eq!(status, 500);
    }

    #[test]
    fn test_malformed_body_is_400() {
        let snap = snapshot();
        let mut levels = RandomLevels::with_seed(1);
        let (status, json) = handle_city_risk(&snap, &mut levels, "not json");
        assert_eq!(status, 400);
        assert!(json["error"].as_str().unwrap().contains("Invalid request body"));
    }

    #[test]
    fn test_health_response() {
        let (status, json) = handle_health();
        assert_eq!(status, 200);
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "riskmon_service");
    }
}

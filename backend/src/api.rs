//! Web API Module
//!
//! Exposes the recommendation service over HTTP for the career frontend.
//! All endpoints return JSON and require no authentication.

use crate::catalog::{CareerCatalog, CareerEntry};
use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::recommender::{CareerRecommendation, RecommendationRequest, Recommender};
use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer, Responder};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================
// APPLICATION STATE
// ============================================================

/// Shared application state. Read-only after startup.
#[derive(Debug, Default)]
pub struct AppState {
    pub recommender: Recommender,
}

impl AppState {
    pub fn new(recommender: Recommender) -> Self {
        Self { recommender }
    }
}

// ============================================================
// API REQUEST/RESPONSE TYPES
// ============================================================

/// Body of `POST /recommend`, read leniently.
///
/// Missing, null, or non-list fields become empty lists and non-string list
/// items are dropped. Unknown fields are ignored.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RecommendBody {
    pub interests: Vec<String>,
    pub strengths: Vec<String>,
}

impl RecommendBody {
    /// Only a JSON object is accepted as a body
    pub fn from_value(value: Value) -> Result<Self, ApiError> {
        let mut fields = match value {
            Value::Object(fields) => fields,
            other => {
                return Err(ApiError::MalformedBody(format!(
                    "expected a JSON object, got {}",
                    json_kind(&other)
                )))
            }
        };

        Ok(Self {
            interests: lenient_list("interests", fields.remove("interests")),
            strengths: lenient_list("strengths", fields.remove("strengths")),
        })
    }

    pub fn into_request(self) -> RecommendationRequest {
        RecommendationRequest::new(self.interests, self.strengths)
    }
}

fn lenient_list(field: &str, value: Option<Value>) -> Vec<String> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => {
            let total = items.len();
            let strings: Vec<String> = items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect();
            if strings.len() < total {
                log::warn!(
                    "[API] Dropped {} non-string item(s) from '{}'",
                    total - strings.len(),
                    field
                );
            }
            strings
        }
        Some(other) => {
            log::warn!(
                "[API] '{}' is {}, not a list; treating as empty",
                field,
                json_kind(&other)
            );
            Vec::new()
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<CareerRecommendation>,
}

#[derive(Debug, Serialize)]
pub struct CareersResponse {
    pub careers: &'static [CareerEntry],
}

// ============================================================
// API HANDLERS
// ============================================================

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "Career Recommendation API",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// List the whole catalog
async fn list_careers(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(CareersResponse {
        careers: data.recommender.catalog().entries(),
    })
}

/// Recommend careers for the posted interests and strengths
async fn recommend(
    data: web::Data<AppState>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let request = RecommendBody::from_value(body.into_inner())?.into_request();
    let recommendations = data.recommender.recommend(&request);

    log::info!(
        "[API] /recommend matched {} career(s): {:?}",
        recommendations.len(),
        recommendations
            .iter()
            .map(|r| r.career.as_str())
            .collect::<Vec<_>>()
    );

    Ok(HttpResponse::Ok().json(RecommendResponse { recommendations }))
}

// ============================================================
// SERVER CONFIGURATION
// ============================================================

/// JSON extractor config; unparsable bodies become JSON 400 responses
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("[API] Rejected request body: {}", err);
        ApiError::MalformedBody(err.to_string()).into()
    })
}

/// Permit cross-origin requests from anywhere
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
}

/// Register all routes. Shared by the server and tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health_check))
        .route("/careers", web::get().to(list_careers))
        .route("/recommend", web::post().to(recommend));
}

/// Configure and run the API server
pub async fn run_server(config: &ServerConfig) -> std::io::Result<()> {
    let state = web::Data::new(AppState::new(Recommender::new(CareerCatalog::builtin())));

    log::info!("[API] Career Recommendation API starting at http://{}", config.bind_address());
    log::info!("[API] Catalog loaded with {} careers", state.recommender.catalog().len());
    log::info!("[API] Endpoints:");
    log::info!("[API]    GET  /health     - Health check");
    log::info!("[API]    GET  /careers    - List catalog");
    log::info!("[API]    POST /recommend  - Recommend careers");

    HttpServer::new(move || {
        App::new()
            .wrap(cors())
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_body_reads_both_lists() {
        let body = RecommendBody::from_value(json!({
            "name": "Ada",
            "interests": ["Coding"],
            "strengths": ["logic", "empathy"]
        }))
        .unwrap();
        assert_eq!(body.interests, vec!["Coding"]);
        assert_eq!(body.strengths, vec!["logic", "empathy"]);
    }

    #[test]
    fn test_missing_and_null_fields_default_to_empty() {
        let body = RecommendBody::from_value(json!({})).unwrap();
        assert_eq!(body, RecommendBody::default());

        let body = RecommendBody::from_value(json!({"interests": null, "strengths": null})).unwrap();
        assert_eq!(body, RecommendBody::default());
    }

    #[test]
    fn test_non_list_fields_become_empty() {
        let body = RecommendBody::from_value(json!({
            "interests": "coding",
            "strengths": {"logic": true}
        }))
        .unwrap();
        assert!(body.interests.is_empty());
        assert!(body.strengths.is_empty());
    }

    #[test]
    fn test_non_string_items_are_dropped() {
        let body = RecommendBody::from_value(json!({
            "interests": ["design", 7, null, ["coding"]],
            "strengths": [true]
        }))
        .unwrap();
        assert_eq!(body.interests, vec!["design"]);
        assert!(body.strengths.is_empty());
    }

    #[test]
    fn test_non_object_body_is_rejected() {
        for value in [json!([]), json!("coding"), json!(42), json!(null)] {
            let err = RecommendBody::from_value(value).unwrap_err();
            assert!(matches!(err, ApiError::MalformedBody(_)));
        }
    }

    #[test]
    fn test_app_state_uses_given_recommender() {
        let state = AppState::new(Recommender::new(CareerCatalog::from_entries(&[])));
        assert!(state.recommender.catalog().is_empty());

        let state = AppState::new(Recommender::new(CareerCatalog::builtin()));
        assert_eq!(state.recommender.catalog().len(), 4);
    }

    #[test]
    fn test_into_request_normalizes() {
        let request = RecommendBody {
            interests: vec!["DESIGN".to_string()],
            strengths: vec![],
        }
        .into_request();
        assert!(request.interests().contains("design"));
    }
}

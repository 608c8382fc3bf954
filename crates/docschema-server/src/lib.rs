//! docschema HTTP surface
//!
//! Read-only introspection of the registered schemas plus a validation
//! endpoint. Nothing is persisted; storage belongs to the consuming tool.
//!
//! | Route | Purpose |
//! |---|---|
//! | `GET /health` | liveness |
//! | `GET /schema` | every schema, identifier -> field list |
//! | `GET /schema/{identifier}` | one schema |
//! | `POST /validate/{identifier}` | validate a JSON document |

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use docschema::{
    validate_value, Document, SchemaCatalog, SchemaDescriptor, SchemaRegistry, ValidationConfig,
    ValidationError, Value,
};
use serde::Serialize;
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

pub mod config;
pub mod error;

use error::{ApiError, ApiResult};

/// Server state shared across handlers
#[derive(Clone)]
pub struct AppState {
    registry: Arc<SchemaRegistry>,
    config: ValidationConfig,
}

impl AppState {
    pub fn new(registry: Arc<SchemaRegistry>, config: ValidationConfig) -> Self {
        Self { registry, config }
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/schema", get(list_schemas))
        .route("/schema/{identifier}", get(get_schema))
        .route("/validate/{identifier}", post(validate_document))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn list_schemas(State(state): State<AppState>) -> Json<SchemaCatalog> {
    Json(state.registry.catalog())
}

async fn get_schema(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> ApiResult<Json<SchemaDescriptor>> {
    let schema = state.registry.get(&identifier).map_err(|e| {
        warn!(%identifier, error = %e, "schema lookup failed");
        ApiError::from(e)
    })?;
    Ok(Json(SchemaDescriptor::from(schema.as_ref())))
}

/// One entry of a rejected document's report
#[derive(Debug, Serialize)]
struct ErrorReport {
    #[serde(flatten)]
    error: ValidationError,
    message: String,
}

#[derive(Debug, Serialize)]
struct ValidationResponse {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    document: Option<Document>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<ErrorReport>,
}

async fn validate_document(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> ApiResult<Response> {
    let schema = state.registry.get(&identifier).map_err(ApiError::from)?;

    let response = match validate_value(&Value::from(body), &schema, &state.config) {
        Ok(document) => {
            debug!(schema = %identifier, "document valid");
            let body = ValidationResponse {
                valid: true,
                document: Some(document),
                errors: Vec::new(),
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(errors) => {
            debug!(schema = %identifier, errors = errors.len(), "document rejected");
            let errors = errors
                .into_iter()
                .map(|error| ErrorReport {
                    message: error.to_string(),
                    error,
                })
                .collect();
            let body = ValidationResponse {
                valid: false,
                document: None,
                errors,
            };
            (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
        }
    };

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use docschema::{builtin_registry, ExtraFields};
    use tower::ServiceExt;

    fn test_app(config: ValidationConfig) -> Router {
        let registry = Arc::new(builtin_registry().unwrap());
        router(AppState::new(registry, config))
    }

    async fn body_json(resp: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_ok() {
        let app = test_app(ValidationConfig::default());
        let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn list_schemas_returns_all_collections() {
        let app = test_app(ValidationConfig::default());
        let req = Request::builder().uri("/schema").body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let json = body_json(resp).await;
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        for id in ["user", "product", "extralink", "player"] {
            assert!(keys.iter().any(|k| k == id), "missing {}", id);
        }
        assert_eq!(json["product"][2]["name"], "price");
        assert_eq!(json["product"][2]["numeric_range"]["max"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn get_schema_found_and_missing() {
        let app = test_app(ValidationConfig::default());
        let req = Request::builder().uri("/schema/player").body(Body::empty()).unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["name"], "Player");
        assert_eq!(json["fields"].as_array().unwrap().len(), 14);

        let req = Request::builder().uri("/schema/blogs").body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn validate_returns_normalized_document() {
        let app = test_app(ValidationConfig::default());
        let req = post_json(
            "/validate/user",
            json!({"name": "Ada", "email": "ada@example.com", "address": "1 Loop Rd"}),
        );
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let json = body_json(resp).await;
        assert_eq!(json["valid"], true);
        assert_eq!(json["document"]["age"], serde_json::Value::Null);
        assert_eq!(json["document"]["is_active"], true);
    }

    #[tokio::test]
    async fn validate_reports_errors() {
        let app = test_app(ValidationConfig::default());
        let req = post_json("/validate/player", json!({"full_name": "A", "age": 150}));
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let json = body_json(resp).await;
        assert_eq!(json["valid"], false);
        let errors = json["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0]["type"], "out_of_range");
        assert_eq!(errors[0]["path"], "age");
        assert_eq!(errors[0]["actual"], 150);
        assert_eq!(errors[0]["message"], "age: 150 is outside [0, 100]");
    }

    #[tokio::test]
    async fn validate_honours_forbid_policy() {
        let app = test_app(ValidationConfig::new().extra(ExtraFields::Forbid));
        let req = post_json("/validate/player", json!({"full_name": "A", "agent": "B"}));
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let json = body_json(resp).await;
        assert_eq!(json["errors"][0]["type"], "extra_field");
    }

    #[tokio::test]
    async fn validate_keeps_extra_field_order() {
        let app = test_app(ValidationConfig::default());
        let req = post_json("/validate/player", json!({"full_name": "A", "zeta": 1, "alpha": 2}));
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        let keys: Vec<_> = json["document"].as_object().unwrap().keys().cloned().collect();
        assert_eq!(&keys[keys.len() - 2..], ["zeta", "alpha"]);

        let app = test_app(ValidationConfig::new().extra(ExtraFields::Forbid));
        let req = post_json("/validate/player", json!({"full_name": "A", "zeta": 1, "alpha": 2}));
        let json = body_json(app.oneshot(req).await.unwrap()).await;
        assert_eq!(json["errors"][0]["path"], "zeta");
        assert_eq!(json["errors"][1]["path"], "alpha");
    }

    #[tokio::test]
    async fn validate_unknown_schema() {
        let app = test_app(ValidationConfig::default());
        let req = post_json("/validate/blogs", json!({}));
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let json = body_json(resp).await;
        assert_eq!(json["error"], "unknown schema 'blogs'");
    }
}

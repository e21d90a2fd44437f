use lambda_http::{
    http::{Method, StatusCode},
    Body, Error, Request, Response,
};
use rolegate_shared::cors::cors_response;
use rolegate_shared::error::ApiError;
use rolegate_shared::{roles, AppState};
use std::sync::Arc;

/// Main Lambda handler - outermost fault boundary
///
/// Anything the inner handler fails to turn into a response (a body that
/// is not JSON, a panic-free but unexpected fault) is logged and rendered
/// as a generic 500 that leaks no internal detail.
pub(crate) async fn function_handler(
    event: Request,
    state: Arc<AppState>,
) -> Result<Response<Body>, Error> {
    match handle_request(event, state).await {
        Ok(resp) => Ok(resp),
        Err(e) => {
            tracing::error!("Unhandled error: {}", e);
            let resp = cors_response(StatusCode::INTERNAL_SERVER_ERROR)
                .header("Content-Type", "application/json")
                .body(
                    serde_json::json!({"error": "Internal server error"})
                        .to_string()
                        .into(),
                )
                .map_err(Box::new)?;
            Ok(resp)
        }
    }
}

/// Routes on method only: OPTIONS preflight, POST mutation, everything
/// else rejected. The endpoint serves a single path.
async fn handle_request(event: Request, state: Arc<AppState>) -> Result<Response<Body>, Error> {
    tracing::info!("Set-role Lambda invoked: {}", event.method());

    // Handle CORS preflight
    if event.method() == Method::OPTIONS {
        return Ok(cors_response(StatusCode::OK)
            .body(Body::Empty)
            .map_err(Box::new)?);
    }

    if event.method() != Method::POST {
        return ApiError::MethodNotAllowed.into_response();
    }

    roles::set_user_role(&state.dynamo_client, &state.table_name, event.body()).await
}

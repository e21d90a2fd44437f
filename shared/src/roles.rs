use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoClient;
use lambda_http::http::StatusCode;
use lambda_http::{Body, Error, Response};

use crate::cors::cors_response;
use crate::error::ApiError;
use crate::types::{Role, RoleAssignment};

/// Assign a role to a user using the privileged datastore client.
///
/// PutItem keyed on user_id is an atomic replace-or-insert: the table holds
/// at most one item per user, and a repeated call overwrites the prior role
/// instead of creating a duplicate.
pub async fn set_user_role(
    client: &DynamoClient,
    table_name: &str,
    body: &[u8],
) -> Result<Response<Body>, Error> {
    // A body that is not JSON at all propagates out to the outermost fault
    // boundary and becomes a generic 500.
    let payload: serde_json::Value = serde_json::from_slice(body)?;

    let user_id = payload
        .get("user_id")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty());
    let role = payload
        .get("role")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty());

    let (user_id, role) = match (user_id, role) {
        (Some(user_id), Some(role)) => (user_id, role),
        _ => return ApiError::BadRequest("Missing user_id or role".to_string()).into_response(),
    };

    // Reject roles outside the closed set before touching the table.
    let role = match Role::parse(role) {
        Some(role) => role,
        None => {
            return ApiError::BadRequest("Invalid role. Must be admin or business".to_string())
                .into_response()
        }
    };

    let now = chrono::Utc::now().to_rfc3339();

    let result = client
        .put_item()
        .table_name(table_name)
        .item("user_id", AttributeValue::S(user_id.to_string()))
        .item("role", AttributeValue::S(role.as_str().to_string()))
        .item("updated_at", AttributeValue::S(now.clone()))
        .send()
        .await;

    if let Err(e) = result {
        let message = aws_sdk_dynamodb::error::DisplayErrorContext(&e).to_string();
        tracing::error!("PutItem failed for user {}: {}", user_id, message);
        return ApiError::Datastore(message).into_response();
    }

    tracing::info!("User {} role set to {}", user_id, role);

    let assignment = RoleAssignment {
        user_id: user_id.to_string(),
        role,
        updated_at: now,
    };

    let resp = cors_response(StatusCode::OK)
        .header("Content-Type", "application/json")
        .body(
            serde_json::json!({
                "success": true,
                "message": format!("User role set to {} successfully", role),
                "data": assignment,
            })
            .to_string()
            .into(),
        )
        .map_err(Box::new)?;
    Ok(resp)
}

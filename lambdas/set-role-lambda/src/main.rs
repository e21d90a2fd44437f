use aws_sdk_dynamodb::Client as DynamoClient;
use lambda_http::{run, service_fn, tracing, Error, Request};
use rolegate_shared::AppState;
use std::sync::Arc;

mod http_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    // Initialize the privileged DynamoDB client once at startup. It runs
    // under the Lambda execution role, never the calling user's identity.
    let config = aws_config::load_from_env().await;
    let table_name = std::env::var("TABLE_NAME").unwrap_or_else(|_| "user-roles".to_string());

    let state = AppState::new(DynamoClient::new(&config), table_name);

    run(service_fn(move |event: Request| {
        let state = Arc::clone(&state);
        async move { http_handler::function_handler(event, state).await }
    }))
    .await
}

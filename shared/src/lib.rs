pub mod cors;
pub mod error;
pub mod roles;
pub mod types;

use aws_sdk_dynamodb::Client as DynamoClient;
use std::sync::Arc;

/// Shared application state
///
/// The DynamoDB client is constructed once at process start from the
/// Lambda execution role. That role is the privileged, non-user-scoped
/// credential for the role-assignment write; the calling user's own
/// authorization context is never attached to it.
pub struct AppState {
    pub dynamo_client: DynamoClient,
    pub table_name: String,
}

impl AppState {
    pub fn new(dynamo_client: DynamoClient, table_name: String) -> Arc<Self> {
        Arc::new(Self {
            dynamo_client,
            table_name,
        })
    }
}

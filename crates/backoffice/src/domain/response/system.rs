use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct HealthResponse {
    pub status: String,
}

/// Route listing grouped by area.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ApiInfoResponse {
    pub endpoints: BTreeMap<String, Vec<String>>,
}

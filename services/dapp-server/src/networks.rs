use axum::{Json, extract::Path};
use dp_api_types::{NetworkListResponse, NetworkSummary};
use dp_networks::DEFAULT_NETWORK_KEY;

use crate::{ApiResult, not_found};

/// Read-only listing of the network registry, in picker order.
pub(crate) async fn list_networks() -> Json<NetworkListResponse> {
    Json(NetworkListResponse {
        default: DEFAULT_NETWORK_KEY.to_owned(),
        networks: dp_networks::all().iter().map(|n| n.summary()).collect(),
    })
}

pub(crate) async fn get_network(Path(key): Path<String>) -> ApiResult<NetworkSummary> {
    dp_networks::get(&key)
        .map(|n| Json(n.summary()))
        .ok_or_else(|| not_found(&format!("unknown network: {key}")))
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_name: Option<String>,
    pub depart: String,
}

#[derive(Debug, Deserialize)]
pub struct RouteResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub legs: Vec<Leg>,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub transfers: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    #[serde(default)]
    pub trip: Option<String>,
    #[serde(default)]
    pub headsign: Option<String>,
    /// Departure, minutes since midnight.
    pub dep: u32,
    /// Arrival, minutes since midnight.
    pub arr: u32,
    #[serde(default)]
    pub from_id: Option<String>,
    pub from_name: String,
    #[serde(default)]
    pub to_id: Option<String>,
    pub to_name: String,
}

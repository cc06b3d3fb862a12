//! Types that mirror the metrics API's JSON schema.

use serde::Deserialize;

/// One server-reported sample of host resource metrics.
///
/// Byte fields are signed: out-of-range server values are rendered as
/// computed rather than rejected.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Snapshot {
    pub id: i64,
    pub hostname: String,
    pub cpu_load: f64,
    pub memory_used: i64,
    pub memory_total: i64,
    pub disk_used: i64,
    pub disk_total: i64,
    // counters; shown as instantaneous values
    pub net_rx: i64,
    pub net_tx: i64,
    // server-assigned, not used for display; any JSON shape or absent
    #[serde(default)]
    pub timestamp: serde_json::Value,
}

/// Envelope around a single snapshot: `{ "data": { ... } }`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub data: Snapshot,
}

use gloo_net::http::Request;
use thiserror::Error;

use crate::models::{BudgetPayload, ChartsResponse, ReportResponse};

const REPORT_ENDPOINT: &str = "/generate_report";
const CHARTS_ENDPOINT: &str = "/generate_charts";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),
    #[error("server responded with status {0}")]
    Status(u16),
}

/// POSTs the payload to the report endpoint. The response body is only
/// parsed on a 2xx status.
pub async fn generate_report(payload: &BudgetPayload) -> Result<ReportResponse, ApiError> {
    let resp = Request::post(REPORT_ENDPOINT).json(payload)?.send().await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(resp.json::<ReportResponse>().await?)
}

/// POSTs the same payload to the charts endpoint. Only called once the
/// report request has succeeded.
pub async fn generate_charts(payload: &BudgetPayload) -> Result<ChartsResponse, ApiError> {
    let resp = Request::post(CHARTS_ENDPOINT).json(payload)?.send().await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(resp.json::<ChartsResponse>().await?)
}

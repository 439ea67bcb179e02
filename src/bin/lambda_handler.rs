//! AWS Lambda handler for mortgage payment calculations
//!
//! Accepts a `MortgageConfig` as the JSON body of a Lambda Function URL
//! request. Fields left out of the body take their default values, and an
//! empty body calculates the defaults. Responds with the payment summary.

use aws_lambda_events::event::lambda_function_urls::{
    LambdaFunctionUrlRequest, LambdaFunctionUrlResponse,
};
use http::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use log::{info, warn};
use mortgage_calculator::{calculate, MortgageConfig, MortgageError};
use serde::Serialize;
use std::time::Instant;

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Resolve the request body into a configuration
fn parse_config(body: Option<&str>) -> Result<MortgageConfig, MortgageError> {
    match body.map(str::trim) {
        None | Some("") => Ok(MortgageConfig::default()),
        Some(json) => MortgageConfig::from_json_str(json),
    }
}

fn json_response(status_code: i64, body: String) -> LambdaFunctionUrlResponse {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    LambdaFunctionUrlResponse {
        status_code,
        headers,
        body: Some(body),
        is_base64_encoded: false,
        cookies: Vec::new(),
    }
}

fn error_response(status_code: i64, error: &MortgageError) -> Result<LambdaFunctionUrlResponse, Error> {
    warn!("Rejecting request: {error}");
    let body = serde_json::to_string(&ErrorResponse { error: error.to_string() })?;
    Ok(json_response(status_code, body))
}

async fn handler(event: LambdaEvent<LambdaFunctionUrlRequest>) -> Result<LambdaFunctionUrlResponse, Error> {
    let start = Instant::now();

    let config = match parse_config(event.payload.body.as_deref()) {
        Ok(config) => config,
        Err(e) => return error_response(400, &e),
    };

    let summary = match calculate(&config) {
        Ok(summary) => summary,
        Err(e) => return error_response(400, &e),
    };

    info!(
        "Calculated {} payments for loan of {:.2} in {:?}",
        summary.payment_schedule.len(),
        summary.loan_amount,
        start.elapsed()
    );

    Ok(json_response(200, serde_json::to_string(&summary)?))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}

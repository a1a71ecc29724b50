use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::config;
use crate::error::ApiError;
use crate::models::{ApiErrorBody, CountRequest, CountResult, NewTemplate, Template};

pub async fn count_contacts(request: &CountRequest) -> Result<CountResult, ApiError> {
    let response = Request::post(&config::endpoint(config::CONTACT_COUNT_PATH))
        .json(request)?
        .send()
        .await?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    decode(&response).await
}

pub async fn list_templates() -> Result<Vec<Template>, ApiError> {
    let response = Request::get(&config::endpoint(config::TEMPLATES_PATH))
        .send()
        .await?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    decode(&response).await
}

pub async fn create_template(template: &NewTemplate) -> Result<(), ApiError> {
    let response = Request::post(&config::endpoint(config::TEMPLATES_PATH))
        .json(template)?
        .send()
        .await?;

    if response.ok() {
        return Ok(());
    }

    let status = response.status();
    match response.json::<ApiErrorBody>().await {
        Ok(body) => Err(ApiError::Server { status, message: body.error }),
        Err(_) => Err(ApiError::Status(status)),
    }
}

async fn decode<T: DeserializeOwned>(response: &Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

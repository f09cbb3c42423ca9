use std::ops::Range;

use log::{debug, warn};
use serde::de::DeserializeOwned;

use crate::{
    apple_music::{
        error::ApiServiceError,
        transport::{ApiRequest, ApiResponse, Transport},
    },
    utils,
};

/// Statuses accepted by [`fetch_resources`].
pub const SUCCESS_STATUS: Range<u16> = 200..299;

/// Statuses accepted by [`send_request_no_payload`].
pub const NO_PAYLOAD_STATUS: [u16; 2] = [200, 204];

/// Sends `request` once and decodes the response body as `T`.
///
/// Object keys are normalized from snake_case to camelCase before decoding,
/// so `T` should use camelCase field names on the wire.
pub async fn fetch_resources<T: DeserializeOwned>(
    transport: &dyn Transport,
    request: ApiRequest,
) -> Result<T, ApiServiceError> {
    let response = send(transport, request).await?;

    if !SUCCESS_STATUS.contains(&response.status) {
        return Err(ApiServiceError::InvalidResponse {
            status: response.status,
        });
    }

    decode(&response.body)
}

/// Sends `request` once, expecting an empty `200 OK` or `204 No Content`.
pub async fn send_request_no_payload(
    transport: &dyn Transport,
    request: ApiRequest,
) -> Result<(), ApiServiceError> {
    let response = send(transport, request).await?;

    if !NO_PAYLOAD_STATUS.contains(&response.status) {
        return Err(ApiServiceError::InvalidResponse {
            status: response.status,
        });
    }

    Ok(())
}

pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiServiceError> {
    let decoded = serde_json::from_slice::<serde_json::Value>(body)
        .map(utils::normalize_keys)
        .and_then(serde_json::from_value::<T>);

    decoded.map_err(|err| {
        warn!(
            "Failed to decode response as {}: {}",
            std::any::type_name::<T>(),
            err
        );
        ApiServiceError::Decode(err)
    })
}

async fn send(transport: &dyn Transport, request: ApiRequest) -> Result<ApiResponse, ApiServiceError> {
    debug!("{} {}", request.method, request.url);

    let response = transport.send(request).await.map_err(|err| {
        debug!("{}", err);
        ApiServiceError::Api
    })?;

    debug!("Received status {}", response.status);
    Ok(response)
}

//! # Submission
//!
//! Assembles the wire body binding a DID, a signed payload and a timestamp,
//! and hands it to a [`Transport`] for delivery to the attestor's submission
//! endpoint. The payload is spliced into the body verbatim: the caller is
//! responsible for supplying syntactically valid JSON, and this module does
//! not parse or validate it.

use chrono::Utc;

use crate::{error::Err, jws, key, tracerr, Result};

/// Path of the attestor's submission endpoint, appended to the base URL.
pub const SUBMIT_PATH: &str = "/api/device/submit";

/// A `Transport` delivers a request body to an endpoint and reports the HTTP
/// status. Implementations own all network policy (TLS, timeouts, proxies);
/// the SDK core neither retries nor reads the response body.
///
/// [`HttpTransport`] is the standard implementation. Constrained targets can
/// supply their own, selected at composition time.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// POST `body` to `url` with the given headers, returning the HTTP
    /// status code.
    ///
    /// # Errors
    ///
    /// Implementations should return `Err::TransportError` for any network
    /// failure, surfaced unchanged.
    async fn post(&self, url: &str, headers: &[(&str, &str)], body: &str) -> Result<u16>;
}

/// [`reqwest`]-backed transport.
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with a default client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for HttpTransport {
    async fn post(&self, url: &str, headers: &[(&str, &str)], body: &str) -> Result<u16> {
        let mut request = self.client.post(url).body(body.to_string());
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        match request.send().await {
            Ok(response) => Ok(response.status().as_u16()),
            Err(e) => tracerr!(Err::TransportError, "submission request failed: {e}"),
        }
    }
}

/// Current Unix timestamp in seconds.
#[must_use]
pub fn unix_timestamp() -> u64 {
    u64::try_from(Utc::now().timestamp()).unwrap_or(0)
}

/// Render the submission body.
///
/// `payload_json` is embedded as a raw JSON fragment, not a string; `did`
/// and `jws` are produced by this SDK and contain no characters requiring
/// escape.
#[must_use]
pub fn submission_body(did: &str, payload_json: &str, jws: &str, timestamp: u64) -> String {
    format!(
        r#"{{"did":"{did}","payload":{payload_json},"signature":"{jws}","timestamp":{timestamp}}}"#
    )
}

/// Submit a signed device payload to the attestor.
///
/// POSTs the submission body to `<attestor_url>/api/device/submit` with
/// `Content-Type: application/json`. The timestamp is collected once per
/// call.
///
/// # Errors
///
/// * `Err::InvalidInput` - an empty URL, DID, payload or JWS.
/// * `Err::TransportError` - the transport could not deliver the request.
pub async fn submit(
    transport: &impl Transport, attestor_url: &str, did: &str, payload_json: &str, jws: &str,
) -> Result<u16> {
    if attestor_url.is_empty() {
        tracerr!(Err::InvalidInput, "attestor URL is empty");
    }
    if did.is_empty() || payload_json.is_empty() || jws.is_empty() {
        tracerr!(Err::InvalidInput, "DID, payload and JWS are all required");
    }

    let url = format!("{}{SUBMIT_PATH}", attestor_url.trim_end_matches('/'));
    let body = submission_body(did, payload_json, jws, unix_timestamp());

    tracing::debug!("submitting {} bytes to {url}", body.len());
    transport.post(&url, &[("Content-Type", "application/json")], &body).await
}

/// Derive the DID, sign the payload and submit, in one call.
///
/// # Errors
///
/// * `Err::InvalidInput` - an empty URL or payload.
/// * `Err::CryptoError` - key import or signing failed.
/// * `Err::TransportError` - the transport could not deliver the request.
pub async fn sign_and_submit(
    transport: &impl Transport, attestor_url: &str, privkey: &[u8; 32], payload_json: &str,
) -> Result<u16> {
    if attestor_url.is_empty() {
        tracerr!(Err::InvalidInput, "attestor URL is empty");
    }

    let did = key::did_from_privkey(privkey)?;
    let envelope = jws::create_jws(payload_json, privkey)?;
    submit(transport, attestor_url, &did, payload_json, &envelope).await
}

use reqwest::header::ACCEPT;
use reqwest::Client;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportResponse {
    pub ok: bool,
    pub status: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request never got a response.
    #[error("network error: {0}")]
    Network(String),
    /// A response arrived but could not be understood.
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Outbound HTTP capability used by the contact form.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post(&self, url: &str, body: &Value) -> Result<TransportResponse, TransportError>;
}

/// Posts JSON with `reqwest` (the browser's `fetch` when built for wasm).
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn post(&self, url: &str, body: &Value) -> Result<TransportResponse, TransportError> {
        let res = self
            .client
            .post(url)
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            return Ok(TransportResponse {
                ok: false,
                status: status.as_u16(),
            });
        }

        let payload: Value = res
            .json()
            .await
            .map_err(|e| TransportError::Malformed(e.to_string()))?;
        Ok(TransportResponse {
            ok: relay_accepted(&payload),
            status: status.as_u16(),
        })
    }
}

/// FormSubmit answers `200` with `{"success": "false", ...}` when it refuses a
/// message, so the body has the final say.
pub fn relay_accepted(payload: &Value) -> bool {
    match payload.get("success") {
        Some(Value::Bool(accepted)) => *accepted,
        Some(Value::String(flag)) => !flag.eq_ignore_ascii_case("false"),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn relay_verdict_follows_success_flag() {
        assert!(relay_accepted(&json!({"success": "true", "message": "ok"})));
        assert!(relay_accepted(&json!({"success": true})));
        assert!(!relay_accepted(&json!({"success": "false", "message": "blocked"})));
        assert!(!relay_accepted(&json!({"success": false})));
        assert!(relay_accepted(&json!({"ok": 1})));
    }
}

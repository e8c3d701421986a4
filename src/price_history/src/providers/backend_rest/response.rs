use reqwest::StatusCode;
use serde::Deserialize;

/// Error body the backend sends on failures, `{ "code": ..., "message": ... }`.
#[derive(Debug, Deserialize)]
pub(super) struct ErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    pub message: String,
}

/// Best-effort human message for a failed response.
///
/// Prefers the backend's error body, then the raw text, then the status reason.
pub(super) fn error_message(status: StatusCode, body: &[u8]) -> String {
    if let Ok(err) = serde_json::from_slice::<ErrorBody>(body) {
        return match err.code {
            Some(code) => format!("{code}: {}", err.message),
            None => err.message,
        };
    }

    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if !text.is_empty() {
        return text.to_string();
    }

    status
        .canonical_reason()
        .unwrap_or("Unknown API error")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_body_wins() {
        let body = br#"{"code":"STOCK_NOT_FOUND","message":"no such stock item"}"#;
        assert_eq!(
            error_message(StatusCode::NOT_FOUND, body),
            "STOCK_NOT_FOUND: no such stock item"
        );
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, br#"{"message":"bad id"}"#),
            "bad id"
        );
    }

    #[test]
    fn falls_back_to_text_then_reason() {
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, b" upstream down \n"),
            "upstream down"
        );
        assert_eq!(
            error_message(StatusCode::SERVICE_UNAVAILABLE, b""),
            "Service Unavailable"
        );
    }
}

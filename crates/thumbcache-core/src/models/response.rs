//! Normalized image response and its gateway-proxy encoding.

use std::collections::BTreeMap;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use bytes::Bytes;
use serde::Serialize;

use crate::keys;

/// A successful image response: full payload plus the headers a transport
/// adapter needs. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResponse {
    pub status: u16,
    pub content_type: String,
    pub content_disposition: String,
    pub body: Bytes,
}

impl ImageResponse {
    /// Build a 200 attachment response for the given key and payload.
    ///
    /// The content type is derived from the key's file extension; the key is
    /// echoed as the attachment file name (for variants this is the full
    /// `thumbnail/{size}/{file}` key, as clients expect).
    pub fn attachment(key: &str, body: Bytes) -> Self {
        ImageResponse {
            status: 200,
            content_type: keys::content_type(key),
            content_disposition: format!("attachment; filename={}", key),
            body,
        }
    }

    /// Encode into the Lambda-proxy wire shape used by gateway adapters.
    pub fn to_proxy(&self) -> ProxyImageResponse {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), self.content_type.clone());
        headers.insert(
            "Content-Disposition".to_string(),
            self.content_disposition.clone(),
        );
        ProxyImageResponse {
            status_code: self.status,
            headers,
            body: BASE64.encode(&self.body),
            is_base64_encoded: true,
        }
    }
}

/// Gateway-proxy response shape: base64 body, `isBase64Encoded` marker.
///
/// Rejections carry an empty body and no headers.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProxyImageResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl ProxyImageResponse {
    /// An empty-bodied rejection (403/404/500 and friends).
    pub fn rejection(status_code: u16) -> Self {
        ProxyImageResponse {
            status_code,
            headers: BTreeMap::new(),
            body: String::new(),
            is_base64_encoded: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_shape() {
        let response = ImageResponse::attachment("cat.png", Bytes::from_static(b"PNGDATA"));
        assert_eq!(response.status, 200);
        assert_eq!(response.content_type, "application/png");
        assert_eq!(response.content_disposition, "attachment; filename=cat.png");
        assert_eq!(&response.body[..], b"PNGDATA");
    }

    #[test]
    fn test_proxy_round_trips_bytes() {
        let payload = Bytes::from_static(&[0u8, 159, 146, 150]);
        let proxy = ImageResponse::attachment("cat.png", payload.clone()).to_proxy();
        assert!(proxy.is_base64_encoded);
        assert_eq!(BASE64.decode(&proxy.body).unwrap(), payload.to_vec());
        assert_eq!(
            proxy.headers.get("Content-Type"),
            Some(&"application/png".to_string())
        );
    }

    #[test]
    fn test_rejection_is_empty() {
        let rejection = ProxyImageResponse::rejection(403);
        assert_eq!(rejection.status_code, 403);
        assert!(rejection.headers.is_empty());
        assert!(rejection.body.is_empty());
        assert!(!rejection.is_base64_encoded);
    }

    #[test]
    fn test_proxy_serializes_camel_case() {
        let proxy = ProxyImageResponse::rejection(500);
        let json = serde_json::to_value(&proxy).unwrap();
        assert!(json.get("statusCode").is_some());
        assert!(json.get("isBase64Encoded").is_some());
    }
}

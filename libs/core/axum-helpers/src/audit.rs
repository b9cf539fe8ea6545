//! Audit trail for state-changing requests.
//!
//! Events go to the `audit` tracing target so they can be routed separately
//! from application logs.
//!
//! ```ignore
//! AuditEvent::new("item.hard_delete", AuditOutcome::Success)
//!     .with_resource(format!("item:{}", id))
//!     .with_request_headers(&headers)
//!     .log();
//! ```

use axum::http::HeaderMap;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditOutcome {
    Success,
    Failure,
}

#[derive(Debug, Serialize)]
pub struct AuditEvent {
    /// Dotted action name, e.g. `item.soft_delete`
    pub action: String,
    /// `kind:id`, e.g. `item:42`
    pub resource: Option<String>,
    pub outcome: AuditOutcome,
    pub client_ip: Option<String>,
    pub user_agent: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(action: impl Into<String>, outcome: AuditOutcome) -> Self {
        Self {
            action: action.into(),
            resource: None,
            outcome,
            client_ip: None,
            user_agent: None,
            timestamp: Utc::now(),
            details: None,
        }
    }

    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Fills client IP (`X-Forwarded-For`, then `X-Real-IP`) and user agent.
    pub fn with_request_headers(mut self, headers: &HeaderMap) -> Self {
        self.client_ip = client_ip(headers);
        self.user_agent = header_str(headers, "user-agent");
        self
    }

    pub fn with_details(mut self, details: impl Serialize) -> Self {
        self.details = serde_json::to_value(details).ok();
        self
    }

    pub fn log(self) {
        tracing::info!(
            target: "audit",
            action = %self.action,
            resource = self.resource.as_deref(),
            outcome = ?self.outcome,
            client_ip = self.client_ip.as_deref(),
            user_agent = self.user_agent.as_deref(),
            timestamp = %self.timestamp.to_rfc3339(),
            details = self.details.as_ref().map(|d| d.to_string()),
            "audit event"
        );
    }
}

/// First hop of `X-Forwarded-For`, falling back to `X-Real-IP`.
pub fn client_ip(headers: &HeaderMap) -> Option<String> {
    header_str(headers, "x-forwarded-for")
        .and_then(|v| v.split(',').next().map(|s| s.trim().to_string()))
        .filter(|s| !s.is_empty())
        .or_else(|| header_str(headers, "x-real-ip"))
}

fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use serde_json::json;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(*value));
        }
        map
    }

    #[test]
    fn test_client_ip_prefers_forwarded_for() {
        let map = headers(&[
            ("x-forwarded-for", "203.0.113.7, 10.0.0.1"),
            ("x-real-ip", "10.0.0.9"),
        ]);
        assert_eq!(client_ip(&map).as_deref(), Some("203.0.113.7"));
    }

    #[test]
    fn test_client_ip_falls_back_to_real_ip() {
        let map = headers(&[("x-real-ip", "10.0.0.9")]);
        assert_eq!(client_ip(&map).as_deref(), Some("10.0.0.9"));
        assert!(client_ip(&HeaderMap::new()).is_none());
    }

    #[test]
    fn test_builder_collects_fields() {
        let event = AuditEvent::new("item.create", AuditOutcome::Success)
            .with_resource("item:1")
            .with_request_headers(&headers(&[("user-agent", "curl/8.0")]))
            .with_details(json!({"name": "Test Item"}));

        assert_eq!(event.resource.as_deref(), Some("item:1"));
        assert_eq!(event.user_agent.as_deref(), Some("curl/8.0"));
        assert_eq!(event.details.as_ref().unwrap()["name"], "Test Item");

        let serialized = serde_json::to_value(&event).unwrap();
        assert_eq!(serialized["outcome"], "success");

        event.log();
    }
}

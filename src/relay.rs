//! Delivery of contact messages through an EmailJS-compatible relay.
//!
//! The relay is reached from the server only. [`deliver`] performs at most one
//! [`Relay::send`] per call and never retries; configuration is checked
//! before anything goes over the network.

use std::future::Future;

use serde::Serialize;

use crate::contact::{ContactError, ContactMessage};

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

pub const SERVICE_ID_VAR: &str = "EMAIL_RELAY_SERVICE_ID";
pub const TEMPLATE_ID_VAR: &str = "EMAIL_RELAY_TEMPLATE_ID";
pub const PUBLIC_KEY_VAR: &str = "EMAIL_RELAY_PUBLIC_KEY";
pub const ENDPOINT_VAR: &str = "EMAIL_RELAY_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub endpoint: String,
}

impl RelayConfig {
    /// Reads the relay settings through `lookup`. Blank values count as unset;
    /// the error names the first missing variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ContactError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let required =
            |var: &str| present(var).ok_or_else(|| ContactError::Configuration(var.to_string()));

        Ok(Self {
            service_id: required(SERVICE_ID_VAR)?,
            template_id: required(TEMPLATE_ID_VAR)?,
            public_key: required(PUBLIC_KEY_VAR)?,
            endpoint: present(ENDPOINT_VAR).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        })
    }

    pub fn from_env() -> Result<Self, ContactError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub reply_to: String,
    pub message: String,
}

/// Request body expected by the relay's send endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayPayload {
    pub service_id: String,
    pub template_id: String,
    #[serde(rename = "user_id")]
    pub public_key: String,
    pub template_params: TemplateParams,
}

impl RelayPayload {
    pub fn new(config: &RelayConfig, message: ContactMessage) -> Self {
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            public_key: config.public_key.clone(),
            template_params: TemplateParams {
                from_name: message.name,
                reply_to: message.email,
                message: message.message,
            },
        }
    }
}

pub trait Relay {
    /// Sends one payload. Errors are reported as [`ContactError::Delivery`].
    fn send(
        &self,
        endpoint: &str,
        payload: &RelayPayload,
    ) -> impl Future<Output = Result<(), ContactError>> + Send;
}

pub async fn deliver<R: Relay>(
    relay: &R,
    config: Result<RelayConfig, ContactError>,
    message: ContactMessage,
) -> Result<(), ContactError> {
    let config = config?;
    // the browser enforces this too, but requests can come from anywhere
    if !message.is_complete() {
        return Err(ContactError::Delivery(
            "message is missing required fields".to_string(),
        ));
    }
    let payload = RelayPayload::new(&config, message);
    relay.send(&config.endpoint, &payload).await
}

#[cfg(feature = "ssr")]
pub use client::HttpRelay;

#[cfg(feature = "ssr")]
mod client {
    use std::sync::LazyLock;

    use super::{ContactError, Relay, RelayPayload};

    static SHARED: LazyLock<HttpRelay> = LazyLock::new(|| HttpRelay::new(reqwest::Client::new()));

    pub struct HttpRelay {
        http: reqwest::Client,
    }

    impl HttpRelay {
        pub fn new(http: reqwest::Client) -> Self {
            Self { http }
        }

        /// Process-wide relay reusing one connection pool.
        pub fn shared() -> &'static Self {
            &SHARED
        }
    }

    impl Relay for HttpRelay {
        async fn send(&self, endpoint: &str, payload: &RelayPayload) -> Result<(), ContactError> {
            tracing::debug!(%endpoint, template = %payload.template_id, "posting to relay");
            let response = self
                .http
                .post(endpoint)
                .json(payload)
                .send()
                .await
                .map_err(|e| ContactError::Delivery(e.to_string()))?;

            let status = response.status();
            if status.is_success() {
                return Ok(());
            }
            let body = response.text().await.unwrap_or_default();
            Err(ContactError::Delivery(format!(
                "relay responded with {status}: {body}"
            )))
        }
    }

    #[cfg(test)]
    mod tests {
        use axum::{http::StatusCode, routing::post, Json, Router};
        use tokio::net::TcpListener;

        use super::*;
        use crate::relay::TemplateParams;

        fn payload() -> RelayPayload {
            RelayPayload {
                service_id: "service_1".into(),
                template_id: "template_1".into(),
                public_key: "key_1".into(),
                template_params: TemplateParams {
                    from_name: "Ada".into(),
                    reply_to: "ada@example.com".into(),
                    message: "hello".into(),
                },
            }
        }

        /// Serves a relay on a local port that answers every send with `status`.
        async fn serve_relay(status: StatusCode) -> String {
            let app = Router::new().route(
                "/send",
                post(move |Json(_): Json<serde_json::Value>| async move {
                    (status, "template not found")
                }),
            );
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
            format!("http://{addr}/send")
        }

        #[tokio::test]
        async fn test_accepted_send() {
            let endpoint = serve_relay(StatusCode::OK).await;
            let relay = HttpRelay::new(reqwest::Client::new());

            assert_eq!(relay.send(&endpoint, &payload()).await, Ok(()));
        }

        #[tokio::test]
        async fn test_non_success_status_is_delivery_error() {
            let endpoint = serve_relay(StatusCode::BAD_REQUEST).await;
            let relay = HttpRelay::new(reqwest::Client::new());

            match relay.send(&endpoint, &payload()).await {
                Err(ContactError::Delivery(reason)) => {
                    assert!(reason.contains("400"), "{reason}");
                    assert!(reason.contains("template not found"), "{reason}");
                }
                other => panic!("expected delivery error, got {other:?}"),
            }
        }

        #[tokio::test]
        async fn test_unreachable_relay_is_delivery_error() {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            drop(listener);
            let relay = HttpRelay::new(reqwest::Client::new());

            let outcome = relay.send(&format!("http://{addr}/send"), &payload()).await;
            assert!(matches!(outcome, Err(ContactError::Delivery(_))));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, sync::Mutex};

    use super::*;
    use crate::{
        contact::{ContactForm, Field},
        notice::Notice,
    };

    struct FakeRelay {
        accept: bool,
        sent: Mutex<Vec<(String, RelayPayload)>>,
    }

    impl FakeRelay {
        fn accepting() -> Self {
            Self {
                accept: true,
                sent: Mutex::new(Vec::new()),
            }
        }

        fn rejecting() -> Self {
            Self {
                accept: false,
                sent: Mutex::new(Vec::new()),
            }
        }

        fn sent(&self) -> Vec<(String, RelayPayload)> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl Relay for FakeRelay {
        async fn send(&self, endpoint: &str, payload: &RelayPayload) -> Result<(), ContactError> {
            self.sent
                .lock()
                .unwrap()
                .push((endpoint.to_string(), payload.clone()));
            if self.accept {
                Ok(())
            } else {
                Err(ContactError::Delivery("relay responded with 400".into()))
            }
        }
    }

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn full_env() -> HashMap<String, String> {
        env(&[
            (SERVICE_ID_VAR, "service_abc"),
            (TEMPLATE_ID_VAR, "template_xyz"),
            (PUBLIC_KEY_VAR, "pk_123"),
        ])
    }

    fn config() -> RelayConfig {
        let vars = full_env();
        RelayConfig::from_lookup(|k| vars.get(k).cloned()).unwrap()
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::default();
        form.update_field(Field::Name, "Ada Lovelace");
        form.update_field(Field::Email, "ada@example.com");
        form.update_field(Field::Message, "Let's build an engine.");
        form
    }

    #[test]
    fn test_config_defaults_endpoint() {
        let config = config();
        assert_eq!(config.service_id, "service_abc");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);

        let mut vars = full_env();
        vars.insert(ENDPOINT_VAR.to_string(), "http://localhost:9000/send".to_string());
        let config = RelayConfig::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(config.endpoint, "http://localhost:9000/send");
    }

    #[test]
    fn test_config_names_missing_variable() {
        let vars = env(&[(SERVICE_ID_VAR, "service_abc"), (PUBLIC_KEY_VAR, "pk_123")]);
        let err = RelayConfig::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert_eq!(err, ContactError::Configuration(TEMPLATE_ID_VAR.to_string()));
    }

    #[test]
    fn test_config_treats_blank_as_missing() {
        let mut vars = full_env();
        vars.insert(PUBLIC_KEY_VAR.to_string(), "  ".to_string());
        let err = RelayConfig::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert_eq!(err, ContactError::Configuration(PUBLIC_KEY_VAR.to_string()));
    }

    #[test]
    fn test_payload_wire_shape() {
        let message = filled_form().fields().clone();
        let payload = RelayPayload::new(&config(), message);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "service_id": "service_abc",
                "template_id": "template_xyz",
                "user_id": "pk_123",
                "template_params": {
                    "from_name": "Ada Lovelace",
                    "reply_to": "ada@example.com",
                    "message": "Let's build an engine.",
                }
            })
        );
    }

    #[tokio::test]
    async fn test_successful_submission_sends_once_and_resets() {
        let relay = FakeRelay::accepting();
        let mut form = filled_form();

        let snapshot = form.begin_submit().expect("complete form should submit");
        let outcome = deliver(&relay, Ok(config()), snapshot).await;
        let notice = form.finish_submit(&outcome);

        let sent = relay.sent();
        assert_eq!(sent.len(), 1);
        let (endpoint, payload) = &sent[0];
        assert_eq!(endpoint, DEFAULT_ENDPOINT);
        assert_eq!(payload.template_params.from_name, "Ada Lovelace");
        assert_eq!(payload.template_params.reply_to, "ada@example.com");
        assert_eq!(payload.template_params.message, "Let's build an engine.");

        assert_eq!(notice, Notice::Sent);
        assert_eq!(form.value(Field::Name), "");
        assert_eq!(form.value(Field::Email), "");
        assert_eq!(form.value(Field::Message), "");

        // nothing left to send after the reset
        assert_eq!(form.begin_submit(), None);
        assert_eq!(relay.sent().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_config_makes_no_call() {
        let relay = FakeRelay::accepting();
        let mut form = filled_form();
        let before = form.fields().clone();
        let vars = env(&[(SERVICE_ID_VAR, "service_abc")]);

        let snapshot = form.begin_submit().expect("complete form should submit");
        let config = RelayConfig::from_lookup(|k| vars.get(k).cloned());
        let outcome = deliver(&relay, config, snapshot).await;

        assert!(relay.sent().is_empty());
        assert_eq!(form.finish_submit(&outcome), Notice::NotConfigured);
        assert_eq!(form.fields(), &before);
    }

    #[tokio::test]
    async fn test_rejected_delivery_keeps_form() {
        let relay = FakeRelay::rejecting();
        let mut form = filled_form();
        let before = form.fields().clone();

        let snapshot = form.begin_submit().expect("complete form should submit");
        let outcome = deliver(&relay, Ok(config()), snapshot).await;

        assert_eq!(relay.sent().len(), 1);
        assert_eq!(form.finish_submit(&outcome), Notice::Failed);
        assert_eq!(form.fields(), &before);
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_double_activation_sends_once() {
        let relay = FakeRelay::accepting();
        let mut form = filled_form();

        let first = form.begin_submit();
        let second = form.begin_submit();
        assert!(second.is_none());

        for snapshot in [first, second].into_iter().flatten() {
            let outcome = deliver(&relay, Ok(config()), snapshot).await;
            form.finish_submit(&outcome);
        }
        assert_eq!(relay.sent().len(), 1);
    }

    #[tokio::test]
    async fn test_incomplete_message_is_rejected_before_sending() {
        let relay = FakeRelay::accepting();
        let message = ContactMessage {
            name: "Ada".into(),
            email: String::new(),
            message: "hi".into(),
        };

        let outcome = deliver(&relay, Ok(config()), message).await;
        assert!(matches!(outcome, Err(ContactError::Delivery(_))));
        assert!(relay.sent().is_empty());
    }
}

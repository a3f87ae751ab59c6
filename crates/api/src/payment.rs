//! HTTP client for an external payment confirmation service.
//!
//! The service answers `POST {base}/confirmations` with `{ "confirmed": bool }`.
//! When no service is configured the auto-approving gateway is used instead.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use coursehub_core::payment::{AutoApprove, PaymentError, PaymentGateway, PaymentRequest};
use serde::Deserialize;

use crate::config::PaymentConfig;

/// Body returned by the confirmation endpoint.
#[derive(Debug, Deserialize)]
struct ConfirmationResponse {
    confirmed: bool,
}

/// [`PaymentGateway`] backed by a remote HTTP service.
pub struct HttpPaymentGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPaymentGateway {
    /// * `base_url` - e.g. `https://payments.internal`, without a trailing slash.
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, PaymentError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PaymentError::Unavailable(e.to_string()))?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl PaymentGateway for HttpPaymentGateway {
    async fn confirm_payment(&self, request: &PaymentRequest) -> Result<bool, PaymentError> {
        let response = self
            .client
            .post(format!("{}/confirmations", self.base_url))
            .json(request)
            .send()
            .await
            .map_err(|e| PaymentError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PaymentError::InvalidResponse(format!(
                "status {}: {body}",
                status.as_u16()
            )));
        }

        let parsed: ConfirmationResponse = response
            .json()
            .await
            .map_err(|e| PaymentError::InvalidResponse(e.to_string()))?;
        Ok(parsed.confirmed)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

/// Pick the gateway described by `config`.
pub fn build_payment_gateway(
    config: &PaymentConfig,
) -> Result<Arc<dyn PaymentGateway>, PaymentError> {
    match &config.gateway_url {
        Some(url) => {
            let gateway =
                HttpPaymentGateway::new(url.clone(), Duration::from_secs(config.timeout_secs))?;
            Ok(Arc::new(gateway))
        }
        None => Ok(Arc::new(AutoApprove)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_url_selects_auto_approve() {
        let gateway = build_payment_gateway(&PaymentConfig::default()).unwrap();
        assert_eq!(gateway.name(), "auto-approve");
    }

    #[test]
    fn configured_url_selects_http() {
        let config = PaymentConfig {
            gateway_url: Some("http://127.0.0.1:9".to_string()),
            timeout_secs: 1,
        };
        let gateway = build_payment_gateway(&config).unwrap();
        assert_eq!(gateway.name(), "http");
    }

    #[tokio::test]
    async fn unreachable_service_is_unavailable() {
        // Port 9 (discard) is not expected to be listening.
        let gateway =
            HttpPaymentGateway::new("http://127.0.0.1:9".to_string(), Duration::from_secs(1))
                .unwrap();
        let request = PaymentRequest {
            user_id: 1,
            course_id: 1,
            amount_cents: 100,
        };
        let err = gateway.confirm_payment(&request).await.unwrap_err();
        assert!(matches!(err, PaymentError::Unavailable(_)));
    }
}

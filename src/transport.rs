//! Submission transport port.
//!
//! The order form's state machine is independent of how an order actually
//! leaves the process; it talks to a single-operation port. The logging
//! transport reproduces the original debug-sink behavior (fixed delay,
//! payload to the log, always succeeds); the webhook transport posts the
//! order as JSON to a configured endpoint. Tests inject deterministic
//! fakes. There are deliberately no retries, timeouts, or backpressure.

use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::Config;
use crate::order::OrderRequest;

/// Errors a transport can surface.
///
/// The form renders any of these as one generic status message; the user
/// resubmits manually.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("order endpoint returned status {0}")]
    Status(u16),

    #[error("failed to deliver order: {0}")]
    Delivery(#[from] reqwest::Error),

    #[error("could not assemble order payload: {0}")]
    Payload(String),
}

/// Port for delivering a submitted order.
pub trait OrderTransport: Send + Sync {
    /// Deliver one order. Success or failure maps directly onto the form's
    /// submission state machine.
    fn submit(
        &self,
        order: &OrderRequest,
    ) -> impl std::future::Future<Output = Result<(), TransportError>> + Send;
}

/// Debug-sink transport mirroring the original site's simulated submission:
/// wait a fixed delay, log the payload, report success.
pub struct LoggingTransport {
    delay: Duration,
}

impl LoggingTransport {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for LoggingTransport {
    fn default() -> Self {
        // The original simulated a 600ms network round trip
        Self::new(Duration::from_millis(600))
    }
}

impl OrderTransport for LoggingTransport {
    async fn submit(&self, order: &OrderRequest) -> Result<(), TransportError> {
        tokio::time::sleep(self.delay).await;

        let payload = serde_json::to_string(order)
            .map_err(|e| TransportError::Payload(e.to_string()))?;
        info!("Order form submission: {}", payload);

        Ok(())
    }
}

/// Transport that posts the order as JSON to a configured webhook URL.
pub struct WebhookTransport {
    client: reqwest::Client,
    url: String,
}

impl WebhookTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

impl OrderTransport for WebhookTransport {
    async fn submit(&self, order: &OrderRequest) -> Result<(), TransportError> {
        debug!("Posting order {} to {}", order.product_id, self.url);

        let response = self.client.post(&self.url).json(order).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        Ok(())
    }
}

/// The transport selected by configuration: webhook when a URL is set,
/// otherwise the logging stand-in.
pub enum AnyTransport {
    Logging(LoggingTransport),
    Webhook(WebhookTransport),
}

impl AnyTransport {
    pub fn from_config(config: &Config) -> Self {
        match &config.order_webhook_url {
            Some(url) => {
                info!("Orders will be posted to {}", url);
                AnyTransport::Webhook(WebhookTransport::new(url.clone()))
            }
            None => {
                info!("No order webhook configured; orders go to the log");
                AnyTransport::Logging(LoggingTransport::default())
            }
        }
    }
}

impl OrderTransport for AnyTransport {
    async fn submit(&self, order: &OrderRequest) -> Result<(), TransportError> {
        match self {
            AnyTransport::Logging(t) => t.submit(order).await,
            AnyTransport::Webhook(t) => t.submit(order).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::OrderForm;
    use crate::i18n::Locale;

    fn sample_order() -> OrderRequest {
        let form = OrderForm {
            product_id: "lavender-dream".to_string(),
            quantity: 2.0,
            name: "Jo".to_string(),
            email: "jo@example.com".to_string(),
            notes: String::new(),
        };
        OrderRequest::from_form(&form, Locale::ENGLISH).unwrap()
    }

    #[tokio::test]
    async fn test_logging_transport_always_succeeds() {
        let transport = LoggingTransport::new(Duration::from_millis(1));
        assert!(transport.submit(&sample_order()).await.is_ok());
    }

    #[tokio::test]
    async fn test_logging_transport_waits_for_delay() {
        let transport = LoggingTransport::new(Duration::from_millis(50));

        let start = std::time::Instant::now();
        transport.submit(&sample_order()).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    fn test_transport_error_display() {
        let err = TransportError::Status(502);
        assert_eq!(err.to_string(), "order endpoint returned status 502");
    }
}

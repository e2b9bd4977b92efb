use crate::config::{RelayConfig, EMAILJS_SEND_URL};
use crate::core::form::{DeliveryError, FormFields};
use gloo_net::http::Request;
use serde::Serialize;

/// Delivers a contact submission somewhere that turns it into an email.
#[allow(async_fn_in_trait)]
pub trait MailRelay {
    async fn send(&self, fields: &FormFields) -> Result<(), DeliveryError>;
}

#[derive(Serialize)]
struct EmailJsPayload<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a FormFields,
}

/// EmailJS REST endpoint, authenticated with the public key only.
#[derive(Clone, Debug)]
pub struct EmailJsRelay {
    config: RelayConfig,
}

impl EmailJsRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self { config }
    }
}

impl MailRelay for EmailJsRelay {
    async fn send(&self, fields: &FormFields) -> Result<(), DeliveryError> {
        let creds = self.config.credentials()?;
        let payload = EmailJsPayload {
            service_id: creds.service_id,
            template_id: creds.template_id,
            user_id: creds.public_key,
            template_params: fields,
        };
        let response = Request::post(EMAILJS_SEND_URL)
            .json(&payload)
            .map_err(|e| DeliveryError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| DeliveryError::Network(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(DeliveryError::Rejected { status, body })
        }
    }
}

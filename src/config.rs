// Mail relay credentials.
//
// Baked in at build time from `LUDAUT_EMAILJS_*` environment variables and
// overridable per page with `<meta name="emailjs-..." content="...">`.

use crate::core::form::DeliveryError;
use web_sys as web;

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Clone, Debug, Default)]
pub struct RelayConfig {
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
}

pub struct RelayCredentials<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub public_key: &'a str,
}

fn non_empty(v: Option<&str>) -> Option<String> {
    v.map(str::trim).filter(|s| !s.is_empty()).map(String::from)
}

fn meta_content(document: &web::Document, name: &str) -> Option<String> {
    let el = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()
        .flatten()?;
    non_empty(el.get_attribute("content").as_deref())
}

impl RelayConfig {
    pub fn from_build_env() -> Self {
        Self {
            service_id: non_empty(option_env!("LUDAUT_EMAILJS_SERVICE_ID")),
            template_id: non_empty(option_env!("LUDAUT_EMAILJS_TEMPLATE_ID")),
            public_key: non_empty(option_env!("LUDAUT_EMAILJS_PUBLIC_KEY")),
        }
    }

    pub fn load(document: &web::Document) -> Self {
        let mut cfg = Self::from_build_env();
        if let Some(v) = meta_content(document, "emailjs-service-id") {
            cfg.service_id = Some(v);
        }
        if let Some(v) = meta_content(document, "emailjs-template-id") {
            cfg.template_id = Some(v);
        }
        if let Some(v) = meta_content(document, "emailjs-public-key") {
            cfg.public_key = Some(v);
        }
        if cfg.credentials().is_err() {
            log::warn!("[contact] mail relay credentials incomplete; sends will fail");
        }
        cfg
    }

    pub fn credentials(&self) -> Result<RelayCredentials<'_>, DeliveryError> {
        Ok(RelayCredentials {
            service_id: self
                .service_id
                .as_deref()
                .ok_or(DeliveryError::NotConfigured("service id"))?,
            template_id: self
                .template_id
                .as_deref()
                .ok_or(DeliveryError::NotConfigured("template id"))?,
            public_key: self
                .public_key
                .as_deref()
                .ok_or(DeliveryError::NotConfigured("public key"))?,
        })
    }
}

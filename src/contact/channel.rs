//! Background contact submission.
//!
//! Uses channel-based communication to bridge the HTTP request with egui's
//! synchronous update loop.

use super::error::{ContactError, Result};
use super::types::{decode_response, ContactPayload, ContactReceipt};
use eframe::egui;
use std::sync::mpsc::{channel, Receiver, Sender};

/// Channel-based sender for the contact relay.
///
/// At most one submission is in flight. The request runs on a worker thread
/// (native) or a local future (WASM); its outcome is picked up by
/// `try_recv()` from `update()`.
pub struct ContactChannel {
    sender: Sender<Result<ContactReceipt>>,
    receiver: Receiver<Result<ContactReceipt>>,
    sending: bool,
}

impl Default for ContactChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactChannel {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self {
            sender,
            receiver,
            sending: false,
        }
    }

    /// Returns true while a submission is awaiting its response.
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Posts `payload` to `endpoint`.
    ///
    /// An empty endpoint resolves immediately to `NotConfigured` without a
    /// request. Returns false, and does nothing, if a submission is already
    /// in flight.
    pub fn submit(&mut self, ctx: &egui::Context, endpoint: &str, payload: ContactPayload) -> bool {
        if self.sending {
            log::debug!("Contact submission already in flight, ignoring");
            return false;
        }

        let endpoint = endpoint.trim().to_string();
        if endpoint.is_empty() {
            log::warn!("Contact endpoint not configured");
            let _ = self.sender.send(Err(ContactError::NotConfigured));
            ctx.request_repaint();
            return true;
        }

        log::info!("Submitting contact form to {}", endpoint);
        self.sending = true;
        let sender = self.sender.clone();
        let ctx = ctx.clone();

        #[cfg(not(target_arch = "wasm32"))]
        {
            std::thread::spawn(move || {
                let result = post_blocking(&endpoint, &payload);
                let _ = sender.send(result);
                ctx.request_repaint();
            });
        }

        #[cfg(target_arch = "wasm32")]
        {
            wasm_bindgen_futures::spawn_local(async move {
                let result = post_fetch(&endpoint, &payload).await;
                let _ = sender.send(result);
                ctx.request_repaint();
            });
        }

        true
    }

    /// Non-blocking check for a finished submission.
    pub fn try_recv(&mut self) -> Option<Result<ContactReceipt>> {
        let result = self.receiver.try_recv().ok()?;
        self.sending = false;

        match &result {
            Ok(receipt) => log::info!("Contact message delivered (id {:?})", receipt.id),
            Err(e) => log::error!("Contact submission failed: {}", e),
        }

        Some(result)
    }
}

/// Timeout for the relay request
#[cfg(not(target_arch = "wasm32"))]
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(20);

#[cfg(not(target_arch = "wasm32"))]
fn post_blocking(endpoint: &str, payload: &ContactPayload) -> Result<ContactReceipt> {
    let agent = ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build();

    let response = agent
        .post(endpoint)
        .set("Content-Type", "application/json")
        .send_json(payload);

    match response {
        Ok(resp) => {
            let status = resp.status();
            let body = resp
                .into_string()
                .map_err(|e| ContactError::Network(e.to_string()))?;
            decode_response(status, &body)
        }
        // 4xx/5xx still carry a JSON body with a message
        Err(ureq::Error::Status(status, resp)) => {
            let body = resp.into_string().unwrap_or_default();
            decode_response(status, &body)
        }
        Err(e) => Err(ContactError::Network(e.to_string())),
    }
}

#[cfg(target_arch = "wasm32")]
async fn post_fetch(endpoint: &str, payload: &ContactPayload) -> Result<ContactReceipt> {
    use wasm_bindgen::{JsCast as _, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

    fn js_err(e: JsValue) -> ContactError {
        ContactError::Network(format!("{:?}", e))
    }

    let body = serde_json::to_string(payload).map_err(|e| ContactError::Decode(e.to_string()))?;

    let headers = Headers::new().map_err(js_err)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(js_err)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_headers(&headers);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(endpoint, &opts).map_err(js_err)?;

    let window = web_sys::window().ok_or_else(|| ContactError::Network("no window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| ContactError::Network("fetch did not return a Response".into()))?;

    let status = resp.status();
    let text = JsFuture::from(resp.text().map_err(js_err)?)
        .await
        .map_err(js_err)?;

    decode_response(status, &text.as_string().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ContactPayload {
        ContactPayload {
            name: "Μαρία".into(),
            email: "maria@example.gr".into(),
            subject: "Γενική Απορία".into(),
            message: "Γεια".into(),
        }
    }

    #[test]
    fn test_empty_endpoint_reports_not_configured() {
        let ctx = egui::Context::default();
        let mut channel = ContactChannel::new();

        assert!(channel.submit(&ctx, "   ", payload()));
        assert!(!channel.is_sending());
        assert_eq!(channel.try_recv(), Some(Err(ContactError::NotConfigured)));
        assert_eq!(channel.try_recv(), None);
    }

    #[test]
    fn test_second_submit_is_ignored_while_sending() {
        let ctx = egui::Context::default();
        let mut channel = ContactChannel::new();
        channel.sending = true;

        assert!(!channel.submit(&ctx, "http://127.0.0.1:9/contact", payload()));
        assert!(channel.is_sending());
    }

    #[test]
    fn test_unreachable_endpoint_is_network_error() {
        let ctx = egui::Context::default();
        let mut channel = ContactChannel::new();

        // Port 9 (discard) is closed on test hosts
        assert!(channel.submit(&ctx, "http://127.0.0.1:9/contact", payload()));
        assert!(channel.is_sending());

        let result = loop {
            if let Some(result) = channel.try_recv() {
                break result;
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        };
        assert!(matches!(result, Err(ContactError::Network(_))));
        assert!(!channel.is_sending());
    }
}

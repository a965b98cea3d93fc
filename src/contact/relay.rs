//! Contact relay: the site's only network dependency.
//!
//! Expressed as an injectable capability so the form's state machine can be
//! exercised without real network I/O. The production sender posts one
//! multipart request to web3forms and reports a conflated success/failure
//! outcome; transport errors, unreadable bodies and relay-side rejections all
//! look the same to the caller.

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use gloo_console::log;
use gloo_net::http::Request;
use serde::Deserialize;
use web_sys::FormData;

use crate::config;
use crate::contact::form::ContactFields;

/// Settlement of a submission attempt. All failure causes are deliberately
/// conflated; the user sees one notice either way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Delivered,
    Failed,
}

pub type RelayFuture = Pin<Box<dyn Future<Output = SubmitOutcome>>>;

/// Cloneable handle around a "submit contact message" capability.
#[derive(Clone)]
pub struct ContactRelay {
    send: Rc<dyn Fn(ContactFields) -> RelayFuture>,
}

impl ContactRelay {
    pub fn new<F>(send: F) -> Self
    where
        F: Fn(ContactFields) -> RelayFuture + 'static,
    {
        Self {
            send: Rc::new(send),
        }
    }

    /// The production relay.
    pub fn web3forms() -> Self {
        Self::new(|fields| Box::pin(send_to_web3forms(fields)))
    }

    pub fn submit(&self, fields: ContactFields) -> RelayFuture {
        (self.send)(fields)
    }
}

impl Default for ContactRelay {
    fn default() -> Self {
        Self::web3forms()
    }
}

impl PartialEq for ContactRelay {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.send, &other.send)
    }
}

#[derive(Deserialize)]
struct RelayResponse {
    success: bool,
}

/// Maps the relay's response body to an outcome. Anything other than a JSON
/// object with `"success": true` is a failure.
pub fn outcome_from_body(body: &str) -> SubmitOutcome {
    match serde_json::from_str::<RelayResponse>(body) {
        Ok(RelayResponse { success: true }) => SubmitOutcome::Delivered,
        _ => SubmitOutcome::Failed,
    }
}

/// One multipart POST, at most one delivery attempt, no retry.
async fn send_to_web3forms(fields: ContactFields) -> SubmitOutcome {
    let form = match build_form_data(&fields) {
        Ok(form) => form,
        Err(_) => return SubmitOutcome::Failed,
    };
    match Request::post(config::RELAY_ENDPOINT).body(form).send().await {
        Ok(response) => match response.text().await {
            Ok(body) => outcome_from_body(&body),
            Err(err) => {
                log!("Contact relay returned an unreadable body:", err.to_string());
                SubmitOutcome::Failed
            }
        },
        Err(err) => {
            log!("Contact relay request failed:", err.to_string());
            SubmitOutcome::Failed
        }
    }
}

fn build_form_data(fields: &ContactFields) -> Result<FormData, wasm_bindgen::JsValue> {
    let form = FormData::new()?;
    form.append_with_str("access_key", config::RELAY_ACCESS_KEY)?;
    form.append_with_str("subject", config::RELAY_SUBJECT)?;
    form.append_with_str("name", &fields.name)?;
    form.append_with_str("email", &fields.email)?;
    // The visitor's subject line travels alongside the fixed one.
    form.append_with_str("custom_subject", &fields.subject)?;
    form.append_with_str("message", &fields.message)?;
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relay_acknowledgement_is_delivered() {
        assert_eq!(
            outcome_from_body(r#"{"success": true, "message": "ok"}"#),
            SubmitOutcome::Delivered
        );
    }

    #[test]
    fn relay_rejection_is_failed() {
        assert_eq!(
            outcome_from_body(r#"{"success": false}"#),
            SubmitOutcome::Failed
        );
    }

    #[test]
    fn malformed_bodies_are_failed() {
        assert_eq!(outcome_from_body(""), SubmitOutcome::Failed);
        assert_eq!(outcome_from_body("<html>502</html>"), SubmitOutcome::Failed);
        assert_eq!(outcome_from_body(r#"{"ok": true}"#), SubmitOutcome::Failed);
    }
}

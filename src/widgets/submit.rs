use gloo_net::http::Request;
use log::{debug, error, info};
use serde::Serialize;
use thiserror::Error;

use crate::widgets::draft::LeadFormDraft;

pub const FROM_NAME: &str = "Trustiify Website";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("intake service answered with status {status}")]
    Rejected { status: u16 },
    #[error("request failed: {0}")]
    Transport(String),
    #[error("could not encode payload: {0}")]
    Encode(String),
}

impl SubmitError {
    /// Generic notice shown to the visitor. Never leaks details.
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitError::Rejected { .. } => "Something went wrong. Please try again.",
            SubmitError::Transport(_) | SubmitError::Encode(_) => {
                "Failed to submit form. Please check your connection."
            }
        }
    }
}

/// Lifecycle of a single submit action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

/// Single-flight bookkeeping for a form that lives outside the floating panels.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubmissionGate {
    status: SubmissionStatus,
}

impl SubmissionGate {
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Returns `true` when the draft should be sent now.
    pub fn begin(&mut self, draft: &LeadFormDraft) -> bool {
        if self.status == SubmissionStatus::InFlight {
            debug!("Submit ignored, a request is already in flight");
            return false;
        }
        if let Err(e) = draft.validate() {
            debug!("Draft not submitted: {}", e);
            return false;
        }
        self.status = SubmissionStatus::InFlight;
        true
    }

    /// Records the outcome. Returns the alert text to show on failure.
    pub fn finish(&mut self, result: &Result<(), SubmitError>) -> Option<&'static str> {
        if self.status != SubmissionStatus::InFlight {
            return None;
        }
        match result {
            Ok(()) => {
                self.status = SubmissionStatus::Succeeded;
                None
            }
            Err(e) => {
                self.status = SubmissionStatus::Idle;
                Some(e.user_message())
            }
        }
    }

    pub fn banner_expired(&mut self) {
        if self.status == SubmissionStatus::Succeeded {
            self.status = SubmissionStatus::Idle;
        }
    }
}

/// JSON body accepted by the lead intake service.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LeadPayload {
    pub access_key: String,
    pub name: String,
    pub email: String,
    pub budget: String,
    pub services: String,
    pub message: String,
    pub subject: String,
    pub from_name: String,
    pub redirect: bool,
}

pub fn subject_for(name: &str) -> String {
    format!("Trustiify — New Strategy Call Request from {}", name)
}

/// Only the status class matters, the body is never read.
pub fn classify_status(status: u16) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmitError::Rejected { status })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LeadClient {
    pub endpoint: String,
    pub access_key: String,
}

impl LeadClient {
    pub fn new(endpoint: impl Into<String>, access_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            access_key: access_key.into(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(crate::config::get_lead_endpoint(), crate::config::get_access_key())
    }

    pub fn payload(&self, draft: &LeadFormDraft) -> LeadPayload {
        LeadPayload {
            access_key: self.access_key.clone(),
            name: draft.name.clone(),
            email: draft.email.clone(),
            budget: draft.budget.map(|b| b.value().to_string()).unwrap_or_default(),
            services: draft.services_joined(),
            message: draft.message().to_string(),
            subject: subject_for(&draft.name),
            from_name: FROM_NAME.to_string(),
            redirect: false,
        }
    }

    /// Posts the draft once. No retry.
    pub async fn submit(&self, draft: &LeadFormDraft) -> Result<(), SubmitError> {
        let payload = self.payload(draft);
        let request = Request::post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(&payload)
            .map_err(|e| SubmitError::Encode(e.to_string()))?;

        let response = request.send().await.map_err(|e| {
            error!("Lead submission failed: {}", e);
            SubmitError::Transport(e.to_string())
        })?;

        classify_status(response.status()).map_err(|e| {
            error!("Lead submission rejected: {}", e);
            e
        })?;
        info!("Lead submitted for {}", payload.email);
        Ok(())
    }
}

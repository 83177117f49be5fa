//! The job application form: field checks and the simulated submission.
//!
//! Nothing here is sent anywhere. A valid draft produces a local
//! acknowledgment message and the screen to show next.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::Job;

pub const INVALID_EMAIL: &str = "Invalid email, try again";
pub const INVALID_CONTACT: &str = "Invalid contact number, must be 11 digits";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

// Local mobile numbers: 11 digits, nothing else.
static CONTACT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{11}$").expect("contact pattern"));

pub fn is_valid_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

pub fn is_valid_contact(s: &str) -> bool {
    CONTACT_RE.is_match(s)
}

/// Form contents while the application screen is open.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicationDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub reason: String,
}

/// What is wrong with a draft. Empty when the draft can be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.email.is_none() && self.contact.is_none()
    }
}

/// Screen shown after a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NextScreen {
    /// Back to the job list.
    JobFinder,
    /// Stay on a cleared form.
    ApplicationForm,
}

impl NextScreen {
    pub fn after_submit(from_saved_jobs: bool) -> Self {
        if from_saved_jobs {
            NextScreen::JobFinder
        } else {
            NextScreen::ApplicationForm
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub message: String,
    pub next: NextScreen,
}

impl ApplicationDraft {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("contact", &self.contact),
            ("reason", &self.reason),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// The inline messages shown when the email and contact inputs lose focus.
    pub fn field_errors(&self) -> FieldErrors {
        FieldErrors {
            missing: self.missing_fields(),
            email: (!is_valid_email(&self.email)).then_some(INVALID_EMAIL),
            contact: (!is_valid_contact(&self.contact)).then_some(INVALID_CONTACT),
        }
    }

    pub fn can_submit(&self) -> bool {
        self.missing_fields().is_empty()
            && is_valid_email(&self.email)
            && is_valid_contact(&self.contact)
    }

    /// Submits the draft for `job`, consuming it.
    pub fn submit(self, job: &Job, from_saved_jobs: bool) -> Result<Submission, FieldErrors> {
        if !self.can_submit() {
            return Err(self.field_errors());
        }
        Ok(Submission {
            message: acknowledgment(job),
            next: NextScreen::after_submit(from_saved_jobs),
        })
    }
}

pub fn acknowledgment(job: &Job) -> String {
    format!(
        "Application for {} at {} has been submitted!",
        job.title, job.company_name
    )
}

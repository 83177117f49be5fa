//! Shared building blocks of the job finder: the normalized job record,
//! the title search, the saved-jobs store and the application form checks.

pub mod application;
pub mod job;
pub mod saved;
pub mod search;

pub use application::{
    ApplicationDraft, FieldErrors, NextScreen, Submission, is_valid_contact, is_valid_email,
};
pub use job::Job;
pub use saved::SavedJobs;
pub use search::filter_jobs;

//! State behind the job list screen.
//!
//! At most one feed request is outstanding. Each request carries the
//! generation it was started under; when the screen goes away the
//! generation moves on and the late result is dropped.

use common::Job;
use feed::FetchError;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket {
    generation: u64,
}

/// What happened to a finished request.
#[derive(Debug)]
pub enum Completion {
    /// The job list now holds the fetched jobs.
    Applied,
    /// The list was emptied; the error is the one to show.
    Failed(FetchError),
    /// The request was cancelled or superseded; nothing changed.
    Stale,
}

#[derive(Debug, Default)]
pub struct FeedController {
    jobs: Vec<Job>,
    loading: bool,
    generation: u64,
    last_error: Option<String>,
}

impl FeedController {
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn find(&self, job_id: &str) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == job_id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Notification text from the last failed fetch, if the last fetch failed.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Starts a request. Returns `None` while another one is outstanding.
    pub fn begin_refresh(&mut self) -> Option<RefreshTicket> {
        if self.loading {
            return None;
        }
        self.loading = true;
        self.generation += 1;
        Some(RefreshTicket {
            generation: self.generation,
        })
    }

    /// Records the outcome of the request started with `ticket`.
    pub fn complete(
        &mut self,
        ticket: RefreshTicket,
        result: Result<Vec<Job>, FetchError>,
    ) -> Completion {
        if ticket.generation != self.generation {
            warn!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding stale feed result"
            );
            return Completion::Stale;
        }

        self.loading = false;
        match result {
            Ok(jobs) => {
                info!(count = jobs.len(), "job list replaced");
                self.jobs = jobs;
                self.last_error = None;
                Completion::Applied
            }
            Err(e) => {
                self.jobs.clear();
                self.last_error = Some(e.user_message());
                Completion::Failed(e)
            }
        }
    }

    /// The job list screen was left: any outstanding result will be dropped.
    pub fn cancel(&mut self) -> bool {
        if !self.loading {
            return false;
        }
        self.generation += 1;
        self.loading = false;
        info!("outstanding feed request cancelled");
        true
    }
}

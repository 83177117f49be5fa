use crate::Job;

/// Jobs the user chose to keep for this session, in the order they were saved.
///
/// Ids are unique: saving a job whose id is already present does nothing.
#[derive(Debug, Default, Clone)]
pub struct SavedJobs {
    jobs: Vec<Job>,
}

impl SavedJobs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `job` unless a saved entry already has its id.
    /// Returns `true` when the job was inserted.
    pub fn save(&mut self, job: Job) -> bool {
        if self.contains(&job.id) {
            return false;
        }
        self.jobs.push(job);
        true
    }

    /// Removes the entry with `job_id`. Returns `false` if there was none.
    pub fn remove(&mut self, job_id: &str) -> bool {
        let before = self.jobs.len();
        self.jobs.retain(|job| job.id != job_id);
        self.jobs.len() != before
    }

    pub fn contains(&self, job_id: &str) -> bool {
        self.jobs.iter().any(|job| job.id == job_id)
    }

    pub fn get(&self, job_id: &str) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == job_id)
    }

    pub fn list(&self) -> &[Job] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_twice_is_noop() {
        let mut saved = SavedJobs::new();
        assert!(saved.save(Job::new("a", "Cook")));
        assert!(!saved.save(Job::new("a", "Cook (reposted)")));
        assert_eq!(saved.len(), 1);
        assert_eq!(saved.list()[0].title, "Cook");
    }

    #[test]
    fn test_keeps_insertion_order() {
        let mut saved = SavedJobs::new();
        saved.save(Job::new("b", "Second"));
        saved.save(Job::new("a", "First"));
        saved.save(Job::new("c", "Third"));

        let ids: Vec<&str> = saved.list().iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut saved = SavedJobs::new();
        saved.save(Job::new("a", "Cook"));
        assert!(!saved.remove("zzz"));
        assert_eq!(saved.len(), 1);
    }

    #[test]
    fn test_remove_then_save_again() {
        let mut saved = SavedJobs::new();
        saved.save(Job::new("a", "Cook"));
        saved.save(Job::new("b", "Baker"));

        assert!(saved.remove("a"));
        assert!(!saved.contains("a"));
        assert!(!saved.remove("a"));

        assert!(saved.save(Job::new("a", "Cook")));
        let ids: Vec<&str> = saved.list().iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}

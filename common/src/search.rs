use crate::Job;

/// Returns the jobs whose title contains `query`, ignoring case.
///
/// Order is preserved and an empty query keeps every job. This runs on each
/// keystroke over a feed of at most a few hundred postings, so it is a plain
/// linear scan.
pub fn filter_jobs(jobs: &[Job], query: &str) -> Vec<Job> {
    if query.is_empty() {
        return jobs.to_vec();
    }

    let needle = query.to_lowercase();
    jobs.iter()
        .filter(|job| job.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jobs(titles: &[&str]) -> Vec<Job> {
        titles
            .iter()
            .enumerate()
            .map(|(i, title)| Job::new(i.to_string(), *title))
            .collect()
    }

    fn titles(jobs: &[Job]) -> Vec<&str> {
        jobs.iter().map(|j| j.title.as_str()).collect()
    }

    #[test]
    fn test_empty_query_is_identity() {
        let all = jobs(&["Sales Rep", "Backend Engineer", "Nurse"]);
        assert_eq!(filter_jobs(&all, ""), all);
    }

    #[test]
    fn test_case_insensitive_match_keeps_order() {
        let all = jobs(&["Backend Engineer", "backend Lead", "Sales Rep"]);
        let found = filter_jobs(&all, "BACK");
        assert_eq!(titles(&found), vec!["Backend Engineer", "backend Lead"]);
    }

    #[test]
    fn test_matches_title_only() {
        let mut job = Job::new("1", "Accountant");
        job.company_name = "Backend Corp".to_string();
        assert!(filter_jobs(&[job], "backend").is_empty());
    }

    #[test]
    fn test_no_match() {
        let all = jobs(&["Backend Engineer"]);
        assert!(filter_jobs(&all, "frontend").is_empty());
    }
}

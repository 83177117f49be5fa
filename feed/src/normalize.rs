//! Turns whatever the feed sends into `Job` records.
//!
//! Two body shapes are accepted: a bare array of postings or an object with
//! a `jobs` array. Field defaults are applied here and nowhere else.

use std::collections::HashSet;

use common::Job;
use common::job::{DEFAULT_COMPANY, DEFAULT_LOCATION, DEFAULT_SALARY, DEFAULT_TITLE};
use serde_json::{Map, Value};
use tracing::debug;
use uuid::Uuid;

use crate::FetchError;

/// Normalizes a parsed feed body.
///
/// Ids are unique within the returned list: postings without an id, or whose
/// id was already seen earlier in the same body, get a fresh UUID.
pub fn normalize_feed(body: Value) -> Result<Vec<Job>, FetchError> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut obj) => match obj.remove("jobs") {
            Some(Value::Array(items)) => items,
            Some(_) => return Err(FetchError::Format("`jobs` is not an array".to_string())),
            None => return Err(FetchError::Format("object without a `jobs` array".to_string())),
        },
        other => {
            return Err(FetchError::Format(format!(
                "expected an array or an object, got {}",
                kind(&other)
            )));
        }
    };

    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut jobs = Vec::with_capacity(items.len());

    for item in &items {
        let mut job = normalize_job(item);
        if !seen_ids.insert(job.id.clone()) {
            debug!(id = %job.id, "duplicate id in feed, assigning a new one");
            job.id = new_id();
            seen_ids.insert(job.id.clone());
        }
        jobs.push(job);
    }

    Ok(jobs)
}

/// Builds one `Job` from a raw posting. Anything that is not an object
/// becomes an all-defaults posting.
pub fn normalize_job(raw: &Value) -> Job {
    let empty = Map::new();
    let obj = raw.as_object().unwrap_or(&empty);

    Job {
        id: text(obj, &["id"]).unwrap_or_else(new_id),
        title: text(obj, &["title"]).unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        company_name: text(obj, &["companyName", "company"])
            .unwrap_or_else(|| DEFAULT_COMPANY.to_string()),
        location: text(obj, &["location"]).unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
        salary: text(obj, &["salary"]).unwrap_or_else(|| DEFAULT_SALARY.to_string()),
        job_type: text(obj, &["jobType"]),
        description: text(obj, &["description"]),
        expiry_date: text(obj, &["expiryDate"]),
    }
}

/// First usable value among `keys`. Numbers are rendered as text; blank
/// strings, nulls and nested values count as missing.
fn text(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match obj.get(*key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wrapped_jobs_without_id_or_company() {
        let jobs = normalize_feed(json!({ "jobs": [{ "title": "X" }] })).unwrap();
        assert_eq!(jobs.len(), 1);

        let job = &jobs[0];
        assert!(!job.id.is_empty());
        assert_eq!(job.title, "X");
        assert_eq!(job.company_name, "Unknown Company");
        assert_eq!(job.location, "Location not specified");
        assert_eq!(job.salary, "Salary not specified");
        assert!(job.job_type.is_none());
    }

    #[test]
    fn test_bare_array_with_all_fields() {
        let body = json!([{
            "id": "abc",
            "title": "Rust Engineer",
            "company": "Ferris Inc",
            "location": "Remote",
            "salary": "$120,000",
            "jobType": "Full-time",
            "description": "Write Rust.",
            "expiryDate": "2026-12-31"
        }]);
        let job = &normalize_feed(body).unwrap()[0];

        assert_eq!(job.id, "abc");
        assert_eq!(job.company_name, "Ferris Inc");
        assert_eq!(job.location, "Remote");
        assert_eq!(job.salary, "$120,000");
        assert_eq!(job.job_type.as_deref(), Some("Full-time"));
        assert_eq!(job.description.as_deref(), Some("Write Rust."));
        assert_eq!(job.expiry_date.as_deref(), Some("2026-12-31"));
    }

    #[test]
    fn test_company_name_preferred_over_company() {
        let job = normalize_job(&json!({ "companyName": "A", "company": "B" }));
        assert_eq!(job.company_name, "A");
    }

    #[test]
    fn test_numeric_id_and_salary() {
        let job = normalize_job(&json!({ "id": 42, "salary": 50000 }));
        assert_eq!(job.id, "42");
        assert_eq!(job.salary, "50000");
    }

    #[test]
    fn test_blank_strings_get_defaults() {
        let job = normalize_job(&json!({ "id": "  ", "title": "", "location": null }));
        assert!(!job.id.trim().is_empty());
        assert_eq!(job.title, "Unknown Title");
        assert_eq!(job.location, "Location not specified");
    }

    #[test]
    fn test_padded_values_are_kept_as_sent() {
        let jobs = normalize_feed(json!([
            { "id": "42", "title": "Cook" },
            { "id": " 42 ", "title": "  Line Cook " }
        ]))
        .unwrap();

        assert_eq!(jobs[0].id, "42");
        assert_eq!(jobs[1].id, " 42 ");
        assert_eq!(jobs[1].title, "  Line Cook ");
    }

    #[test]
    fn test_every_job_gets_an_id_and_ids_are_unique() {
        let body = json!([
            { "title": "A" },
            { "id": "dup", "title": "B" },
            { "id": "dup", "title": "C" },
            "not an object",
            { "title": "D" }
        ]);
        let jobs = normalize_feed(body).unwrap();
        assert_eq!(jobs.len(), 5);

        let ids: HashSet<&str> = jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids.len(), 5);
        assert_eq!(jobs[1].id, "dup");
        assert_ne!(jobs[2].id, "dup");
        assert_eq!(jobs[3].title, "Unknown Title");
    }

    #[test]
    fn test_unrecognized_shapes_are_format_errors() {
        for body in [
            json!({ "data": [] }),
            json!({ "jobs": "none" }),
            json!("jobs"),
            json!(null),
        ] {
            assert!(matches!(normalize_feed(body), Err(FetchError::Format(_))));
        }
    }

    #[test]
    fn test_empty_feed() {
        assert!(normalize_feed(json!([])).unwrap().is_empty());
        assert!(normalize_feed(json!({ "jobs": [] })).unwrap().is_empty());
    }
}

use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Unknown Title";
pub const DEFAULT_COMPANY: &str = "Unknown Company";
pub const DEFAULT_LOCATION: &str = "Location not specified";
pub const DEFAULT_SALARY: &str = "Salary not specified";

/// A job posting after normalization.
///
/// Every string field is filled in: values missing from the feed are replaced
/// by the `DEFAULT_*` constants once, when the record is built.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company_name: String,
    pub location: String,
    pub salary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
}

impl Job {
    /// A posting with the given id and title and every other field defaulted.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            company_name: DEFAULT_COMPANY.to_string(),
            location: DEFAULT_LOCATION.to_string(),
            salary: DEFAULT_SALARY.to_string(),
            job_type: None,
            description: None,
            expiry_date: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fills_defaults() {
        let job = Job::new("1", "Rust Developer");
        assert_eq!(job.company_name, DEFAULT_COMPANY);
        assert_eq!(job.location, DEFAULT_LOCATION);
        assert_eq!(job.salary, DEFAULT_SALARY);
        assert!(job.job_type.is_none());
    }

    #[test]
    fn test_serializes_camel_case() {
        let mut job = Job::new("7", "Designer");
        job.job_type = Some("Full-time".to_string());

        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["companyName"], "Unknown Company");
        assert_eq!(value["jobType"], "Full-time");
        assert!(value.get("expiryDate").is_none());
    }
}

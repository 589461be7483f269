// jobdeck-core-client/jobdeck-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use pretty_assertions::assert_eq;

use jobdeck_core_client::dtos::{JobPost, JobPostStatus};

#[test]
fn test_deserializes_store_record_with_absent_optional_fields() {
    // Store records omit fields the employer never filled in; absence is a
    // valid value, not an error.
    let record = serde_json::json!({
        "id": "job-42",
        "company": "Acme Corp",
        "title": "Rust Engineer",
        "location": "Lisbon",
        "is_remote": false,
        "description": "Build backend services.",
        "requirements": "Comfortable with async Rust.",
        "skills": ["rust", "sql"],
        "apply_url": "https://jobs.example.org/42/apply",
        "status": "active",
        "created_at": "2024-01-02T09:30:00Z"
    });

    let post: JobPost = serde_json::from_value(record).unwrap();

    assert_eq!(post.id.as_str(), "job-42");
    assert_eq!(post.company_logo, None);
    assert_eq!(post.salary, None);
    assert!(!post.is_remote);
    assert_eq!(post.status, JobPostStatus::Active);
    assert_eq!(post.skills, vec!["rust".to_string(), "sql".to_string()]);
}

#[test]
fn test_deserializes_store_record_with_all_fields() {
    let record = serde_json::json!({
        "id": "job-7",
        "company": "Acme Corp",
        "company_logo": "https://cdn.example.org/acme.png",
        "title": "Platform Engineer",
        "location": "Berlin",
        "salary": "€80k–€100k",
        "is_remote": true,
        "description": "Own the deployment pipeline.",
        "requirements": "Kubernetes, Rust.",
        "skills": ["rust", "kubernetes"],
        "apply_url": "https://jobs.example.org/7/apply",
        "status": "paused",
        "created_at": "2024-02-10T12:00:00Z"
    });

    let post: JobPost = serde_json::from_value(record).unwrap();

    assert_eq!(
        post.company_logo.as_ref().map(|url| url.as_str()),
        Some("https://cdn.example.org/acme.png")
    );
    assert_eq!(post.salary.as_deref(), Some("€80k–€100k"));
    assert_eq!(post.status, JobPostStatus::Paused);
}

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn jobs_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[tokio::test]
async fn test_memory_job_store() {
    let store = MemoryJobStore::new(vec![
        JobRecord::new("a1", "x.sas", "scripts/x.sas"),
        JobRecord::new("b2", "y.sas", "scripts/y.sas"),
    ]);

    let all = store.load_all().await.unwrap();
    assert_eq!(all.len(), 2);

    let loaded = store.load("b2").await.unwrap();
    assert_eq!(loaded.unwrap().script_name, "y.sas");

    assert!(store.load("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn test_memory_job_store_first_match_wins() {
    let store = MemoryJobStore::new(vec![
        JobRecord::new("dup", "first.sas", "scripts/first.sas"),
        JobRecord::new("dup", "second.sas", "scripts/second.sas"),
    ]);

    let loaded = store.load("dup").await.unwrap().unwrap();
    assert_eq!(loaded.script_name, "first.sas");
}

#[tokio::test]
async fn test_file_job_store_load_all_keeps_order() {
    let file = jobs_file(
        r#"{"jobs":[
            {"job_id":"c3","script_name":"z.sas","script_path":"scripts/z.sas"},
            {"job_id":"a1","script_name":"x.sas","script_path":"scripts/x.sas","logs":"ok"}
        ]}"#,
    );
    let store = FileJobStore::new(file.path());

    let jobs = store.load_all().await.unwrap();
    let ids: Vec<_> = jobs.iter().map(|j| j["job_id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["c3", "a1"]);
    assert_eq!(jobs[1]["logs"], "ok");
}

#[tokio::test]
async fn test_file_job_store_load() {
    let file = jobs_file(
        r#"{"jobs":[{"job_id":"a1","script_name":"x.sas","script_path":"scripts/x.sas"}]}"#,
    );
    let store = FileJobStore::new(file.path());

    let job = store.load("a1").await.unwrap().unwrap();
    assert_eq!(job.script_path, "scripts/x.sas");
    assert!(store.load("zz").await.unwrap().is_none());
}

#[tokio::test]
async fn test_file_job_store_rereads_file() {
    let file = jobs_file(r#"{"jobs":[]}"#);
    let store = FileJobStore::new(file.path().to_path_buf());
    assert!(store.load_all().await.unwrap().is_empty());

    std::fs::write(
        file.path(),
        r#"{"jobs":[{"job_id":"a1","script_name":"x.sas","script_path":"scripts/x.sas"}]}"#,
    )
    .unwrap();

    assert_eq!(store.load_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_file_job_store_missing_jobs_key() {
    let file = jobs_file(r#"{"other": true}"#);
    let store = FileJobStore::new(file.path());
    assert!(store.load_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_file_job_store_missing_file() {
    let store = FileJobStore::new("/nonexistent/path/gitlab_jobs.json");
    let err = store.load_all().await.unwrap_err();
    assert!(matches!(err, ApiError::JobsUnavailable(_)));
    assert!(err.to_string().contains("gitlab_jobs.json"));
}

#[tokio::test]
async fn test_file_job_store_malformed_file() {
    let file = jobs_file("{\"jobs\": [unclosed");
    let store = FileJobStore::new(file.path());
    let err = store.load_all().await.unwrap_err();
    assert!(matches!(err, ApiError::JobsUnavailable(_)));
}

#[tokio::test]
async fn test_file_job_store_partial_record_only_fails_its_own_lookup() {
    let file = jobs_file(
        r#"{"jobs":[
            {"job_id":"a1","script_name":"x.sas","script_path":"scripts/x.sas"},
            {"job_id":"b2","script_name":"draft.sas"}
        ]}"#,
    );
    let store = FileJobStore::new(file.path());

    let jobs = store.load_all().await.unwrap();
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[1]["script_name"], "draft.sas");

    let a1 = store.load("a1").await.unwrap().unwrap();
    assert_eq!(a1.script_path, "scripts/x.sas");

    let err = store.load("b2").await.unwrap_err();
    match err {
        ApiError::InvalidJob { id, reason } => {
            assert_eq!(id, "b2");
            assert!(reason.contains("script_path"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_file_job_store_tolerates_odd_field_types() {
    let file = jobs_file(
        r#"{"jobs":[
            {"job_id":7,"script_name":"n.sas","script_path":"scripts/n.sas"},
            "not an object",
            {"job_id":"a1","script_name":"x.sas","script_path":"scripts/x.sas","logs":["line 1"]}
        ]}"#,
    );
    let store = FileJobStore::new(file.path());

    assert_eq!(store.load_all().await.unwrap().len(), 3);
    assert!(store.load("7").await.unwrap().is_none());

    let a1 = store.load("a1").await.unwrap().unwrap();
    assert!(a1.logs().is_none());
    assert_eq!(a1.extra["logs"][0], "line 1");
}

#[tokio::test]
async fn test_memory_job_store_from_values() {
    let store = MemoryJobStore::from_values(vec![
        serde_json::json!({"job_id": "b2", "script_name": "draft.sas"}),
        serde_json::json!({"job_id": "a1", "script_name": "x.sas", "script_path": "scripts/x.sas"}),
    ]);

    assert!(store.load("a1").await.unwrap().is_some());
    assert!(matches!(store.load("b2").await, Err(ApiError::InvalidJob { .. })));
}

//! Job record and request/response shapes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use jobrelay_config::RemoteConfig;
use jobrelay_gitlab::{raw_file_url, CommitAction, CommitStatus};

/// A job as stored in the jobs file.
///
/// Fields beyond the known ones (including `logs`) are kept and written back
/// out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub job_id: String,
    pub script_name: String,
    pub script_path: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl JobRecord {
    pub fn new(
        job_id: impl Into<String>,
        script_name: impl Into<String>,
        script_path: impl Into<String>,
    ) -> Self {
        Self {
            job_id: job_id.into(),
            script_name: script_name.into(),
            script_path: script_path.into(),
            extra: Map::new(),
        }
    }

    pub fn with_logs(mut self, logs: impl Into<String>) -> Self {
        self.extra.insert("logs".to_string(), Value::String(logs.into()));
        self
    }

    /// Attach an extra passthrough field.
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Captured run output, when the record carries it as a string.
    pub fn logs(&self) -> Option<&str> {
        self.extra.get("logs").and_then(Value::as_str)
    }

    /// Commit message used when the caller does not supply one.
    pub fn default_commit_message(&self) -> String {
        format!("Commit job logs for {}", self.script_name)
    }

    /// The record as a raw JSON object, as it would appear in the jobs file.
    pub fn to_value(&self) -> Value {
        let mut map = self.extra.clone();
        map.insert("job_id".to_string(), Value::String(self.job_id.clone()));
        map.insert("script_name".to_string(), Value::String(self.script_name.clone()));
        map.insert("script_path".to_string(), Value::String(self.script_path.clone()));
        Value::Object(map)
    }
}

/// Whether a raw record carries `job_id` as exactly `id`.
pub(crate) fn has_job_id(raw: &Value, id: &str) -> bool {
    raw.get("job_id").and_then(Value::as_str) == Some(id)
}

/// On-disk layout of the jobs file.
///
/// Records stay raw so one incomplete entry does not hide the others; the
/// typed shape is only enforced on the record a request asks for.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobsDocument {
    #[serde(default)]
    pub jobs: Vec<Value>,
}

/// A job plus the URL of its script's raw content.
#[derive(Debug, Clone, Serialize)]
pub struct JobView {
    #[serde(flatten)]
    pub job: JobRecord,
    pub file_raw_url: String,
}

impl JobView {
    pub fn new(mut job: JobRecord, remote: &RemoteConfig) -> Self {
        // A stored value would otherwise be serialized alongside the fresh one.
        job.extra.remove("file_raw_url");
        let file_raw_url = raw_file_url(remote, &job.script_path);
        Self { job, file_raw_url }
    }
}

/// Body of `POST /jobs/{id}/commit`.
///
/// `content` is optional here so a missing value maps to a 400 rather than a
/// deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommitRequest {
    pub content: Option<String>,
    pub commit_message: Option<String>,
}

/// Response of `POST /jobs/{id}/commit`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitResponse {
    pub job_id: String,
    pub file_path: String,
    pub action: CommitAction,
    pub status: CommitStatus,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    /// The only state an application is ever created in.
    #[default]
    Pending,
}

/// Body of `POST /api/applications`.
///
/// Required fields are optional here so that a missing field becomes a
/// validation message rather than a deserialization failure. Anything the
/// client sends beyond the known fields is kept in `extra` and echoed back.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    /// Catalog ids are integers; both `"4"` and `4` are accepted.
    #[serde(
        default,
        deserialize_with = "deserialize_job_ref",
        skip_serializing_if = "Option::is_none"
    )]
    pub job_id: Option<String>,
    /// File name only; no file content is ever received.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_file_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JobRef {
    Text(String),
    Number(u64),
}

fn deserialize_job_ref<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let job_ref = Option::<JobRef>::deserialize(deserializer)?;
    Ok(job_ref.map(|r| match r {
        JobRef::Text(s) => s,
        JobRef::Number(n) => n.to_string(),
    }))
}

/// An accepted application: the submitted payload plus server-owned fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AcknowledgedApplication {
    pub id: String,
    #[serde(flatten)]
    pub payload: ApplicationPayload,
    pub applied_at: DateTime<Utc>,
    pub status: ApplicationStatus,
}

/// 201 body of `POST /api/applications`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationResponse {
    pub success: bool,
    pub application_id: String,
    pub message: String,
    pub data: AcknowledgedApplication,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_job_id_accepts_number_and_string() {
        let p: ApplicationPayload = serde_json::from_value(json!({ "jobId": 4 })).unwrap();
        assert_eq!(p.job_id.as_deref(), Some("4"));
        let p: ApplicationPayload = serde_json::from_value(json!({ "jobId": "4" })).unwrap();
        assert_eq!(p.job_id.as_deref(), Some("4"));
        let p: ApplicationPayload = serde_json::from_value(json!({})).unwrap();
        assert_eq!(p.job_id, None);
    }

    #[test]
    fn test_unknown_fields_are_kept() {
        let p: ApplicationPayload = serde_json::from_value(json!({
            "firstName": "Ada",
            "jobTitle": "DevOps Engineer",
            "company": "CloudTech Solutions"
        }))
        .unwrap();
        assert_eq!(p.first_name.as_deref(), Some("Ada"));
        assert_eq!(p.extra["jobTitle"], "DevOps Engineer");
        assert!(!p.extra.contains_key("firstName"));
    }

    #[test]
    fn test_acknowledged_application_is_flat_on_the_wire() {
        let ack = AcknowledgedApplication {
            id: "APP_1_abc".to_string(),
            payload: ApplicationPayload {
                first_name: Some("Ada".to_string()),
                job_id: Some("1".to_string()),
                ..ApplicationPayload::default()
            },
            applied_at: Utc::now(),
            status: ApplicationStatus::Pending,
        };
        let value = serde_json::to_value(&ack).unwrap();
        assert_eq!(value["id"], "APP_1_abc");
        assert_eq!(value["firstName"], "Ada");
        assert_eq!(value["jobId"], "1");
        assert_eq!(value["status"], "pending");
        assert!(value.get("payload").is_none());

        let back: AcknowledgedApplication = serde_json::from_value(value).unwrap();
        assert_eq!(back, ack);
    }
}

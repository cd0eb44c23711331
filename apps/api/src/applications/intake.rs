use chrono::{DateTime, Utc};
use rand::Rng;

use super::models::{AcknowledgedApplication, ApplicationPayload, ApplicationStatus};
use super::validation::{validate_application, ValidationError};

pub const SUBMITTED_MESSAGE: &str = "Application submitted successfully";

const ID_SUFFIX_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Keys owned by the server; client-sent values are discarded.
const RESERVED_KEYS: &[&str] = &["id", "appliedAt", "status"];

/// `APP_<unix millis>_<9 base-36 chars>`. Unique with high probability only.
pub fn generate_application_id<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> String {
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("APP_{}_{}", now.timestamp_millis(), suffix)
}

/// Validates `payload` and, if it passes, stamps it with an id, the
/// submission time and the `pending` status.
pub fn submit<R: Rng + ?Sized>(
    mut payload: ApplicationPayload,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<AcknowledgedApplication, ValidationError> {
    validate_application(&payload)?;

    for key in RESERVED_KEYS {
        payload.extra.remove(*key);
    }

    Ok(AcknowledgedApplication {
        id: generate_application_id(now, rng),
        payload,
        applied_at: now,
        status: ApplicationStatus::Pending,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    fn payload() -> ApplicationPayload {
        serde_json::from_value(json!({
            "firstName": "Grace",
            "lastName": "Hopper",
            "email": "grace@example.com",
            "phone": "+1 555 0100",
            "coverLetter": "I have spent decades building compilers and would love to join.",
            "jobId": 4,
            "jobTitle": "DevOps Engineer",
            "resumeFileName": "grace.pdf"
        }))
        .unwrap()
    }

    #[test]
    fn test_id_shape() {
        let now = Utc::now();
        let id = generate_application_id(now, &mut StdRng::seed_from_u64(7));
        let parts: Vec<&str> = id.split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "APP");
        assert_eq!(parts[1], now.timestamp_millis().to_string());
        assert_eq!(parts[2].len(), ID_SUFFIX_LEN);
        assert!(parts[2]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_submit_stamps_pending_and_echoes_payload() {
        let now = Utc::now();
        let ack = submit(payload(), now, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(ack.status, ApplicationStatus::Pending);
        assert_eq!(ack.applied_at, now);
        assert!(ack.id.starts_with("APP_"));
        assert_eq!(ack.payload.job_id.as_deref(), Some("4"));
        assert_eq!(ack.payload.resume_file_name.as_deref(), Some("grace.pdf"));
        assert_eq!(ack.payload.extra["jobTitle"], "DevOps Engineer");
    }

    #[test]
    fn test_two_submissions_get_different_ids() {
        let now = Utc::now();
        let mut rng = rand::thread_rng();
        let a = submit(payload(), now, &mut rng).unwrap();
        let b = submit(payload(), now, &mut rng).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_client_cannot_override_server_fields() {
        let mut p = payload();
        p.extra.insert("id".to_string(), json!("forged"));
        p.extra.insert("status".to_string(), json!("accepted"));
        p.extra.insert("appliedAt".to_string(), json!("1999-01-01T00:00:00Z"));

        let ack = submit(p, Utc::now(), &mut StdRng::seed_from_u64(3)).unwrap();
        let wire = serde_json::to_value(&ack).unwrap();
        assert_ne!(wire["id"], "forged");
        assert_eq!(wire["status"], "pending");
        assert_ne!(wire["appliedAt"], "1999-01-01T00:00:00Z");
    }

    #[test]
    fn test_invalid_payload_is_not_acknowledged() {
        let mut p = payload();
        p.email = Some("grace-at-example".to_string());
        let err = submit(p, Utc::now(), &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail);
    }
}

//! Member record model and identifier generation

use crate::media::MediaRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicI64, Ordering};

/// One student's portfolio submission.
///
/// Created exactly once by the submission pipeline, appended to the
/// [`MemberStore`](crate::store::MemberStore) and never mutated or deleted
/// afterwards. Lives only for the process lifetime.
///
/// Field names serialize in camelCase to keep the submission form's field
/// naming on the JSON API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRecord {
    /// Unique, creation-timestamp-derived identifier (millisecond epoch)
    pub id: String,

    /// Given name (required, non-empty after trimming)
    pub first_name: String,

    /// Family name (required, non-empty after trimming)
    pub last_name: String,

    /// Postal address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Contact phone, 9-15 characters after trimming (checked at submission)
    pub phone: String,

    /// School of origin (required, non-empty after trimming)
    pub school: String,

    /// Grade point average, always within [0.0, 4.0]
    pub gpa: f64,

    /// Special skills, free text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,

    /// Application reason, free text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Intended major
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,

    /// Intended university
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,

    /// Profile photo reference, at most one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<MediaRef>,

    /// Activity photo references, in selection order
    pub activities: Vec<MediaRef>,

    /// Award photo references, in selection order
    pub awards: Vec<MediaRef>,

    /// Work sample photo references, in selection order
    pub works: Vec<MediaRef>,

    /// Submission instant (the identifier is derived from this clock)
    pub submitted_at: DateTime<Utc>,
}

impl MemberRecord {
    /// Display name for listings
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Issues creation-timestamp-derived record identifiers.
///
/// An identifier is the millisecond epoch rendered as decimal. When two
/// submissions land within the same millisecond the generator bumps one
/// past the last issued value, so identifiers stay unique and strictly
/// increasing for the process lifetime.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last_issued: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            last_issued: AtomicI64::new(0),
        }
    }

    /// Issue the next unique identifier
    pub fn next_id(&self) -> String {
        let now = Utc::now().timestamp_millis();
        let mut last = self.last_issued.load(Ordering::Relaxed);
        loop {
            let candidate = if now > last { now } else { last + 1 };
            match self.last_issued.compare_exchange(
                last,
                candidate,
                Ordering::SeqCst,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate.to_string(),
                Err(actual) => last = actual,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sample_record(id: &str) -> MemberRecord {
        MemberRecord {
            id: id.to_string(),
            first_name: "สมชาย".to_string(),
            last_name: "ใจดี".to_string(),
            address: None,
            phone: "0812345678".to_string(),
            school: "รร.ทดสอบ".to_string(),
            gpa: 3.5,
            skills: None,
            reason: None,
            major: None,
            university: None,
            profile_photo: None,
            activities: Vec::new(),
            awards: Vec::new(),
            works: Vec::new(),
            submitted_at: Utc::now(),
        }
    }

    #[test]
    fn test_full_name_joins_with_space() {
        let record = sample_record("1");
        assert_eq!(record.full_name(), "สมชาย ใจดี");
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let record = sample_record("1");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["firstName"], "สมชาย");
        assert_eq!(json["lastName"], "ใจดี");
        assert!(json["activities"].as_array().unwrap().is_empty());
        // Absent optionals are omitted entirely
        assert!(json.get("profilePhoto").is_none());
        assert!(json.get("address").is_none());
    }

    #[test]
    fn test_id_generator_issues_distinct_ids() {
        let generator = IdGenerator::new();
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(generator.next_id()));
        }
    }

    #[test]
    fn test_id_generator_ids_strictly_increase() {
        let generator = IdGenerator::new();
        let mut previous: i64 = 0;
        for _ in 0..100 {
            let id: i64 = generator.next_id().parse().unwrap();
            assert!(id > previous);
            previous = id;
        }
    }

    #[test]
    fn test_id_generator_ids_are_timestamp_derived() {
        let before = Utc::now().timestamp_millis();
        let id: i64 = IdGenerator::new().next_id().parse().unwrap();
        let after = Utc::now().timestamp_millis();
        assert!(id >= before);
        // One bump at most for a single issue
        assert!(id <= after + 1);
    }
}

//! Submission form validation
//!
//! Field-level acceptance rules for the student portfolio form. Validation
//! runs once per submission, on the raw text-field values; file groups are
//! opaque here and are handled by the multipart layer in [`crate::upload`].

use std::collections::BTreeMap;

pub const MSG_FIRST_NAME_REQUIRED: &str = "กรุณากรอกชื่อ";
pub const MSG_LAST_NAME_REQUIRED: &str = "กรุณากรอกนามสกุล";
/// Covers both the empty and the too-short phone cases
pub const MSG_PHONE_REQUIRED: &str = "กรุณากรอกหมายเลขโทรศัพท์";
pub const MSG_PHONE_TOO_LONG: &str = "หมายเลขยาวเกินไป";
pub const MSG_SCHOOL_REQUIRED: &str = "กรุณากรอกโรงเรียน";
/// Single fixed message for missing, unparsable, or out-of-range GPA
pub const MSG_GPA_RANGE: &str = "GPA ต้องอยู่ระหว่าง 0.00 ถึง 4.00";

pub const PHONE_MIN_CHARS: usize = 9;
pub const PHONE_MAX_CHARS: usize = 15;
pub const GPA_MIN: f64 = 0.0;
pub const GPA_MAX: f64 = 4.0;

/// Raw text-field values as posted by the form
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone: String,
    pub school: String,
    pub gpa: String,
    pub skills: String,
    pub reason: String,
    pub major: String,
    pub university: String,
}

/// Field name (as named in the form) to error message
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

/// Normalized values after a successful validation pass
#[derive(Debug, Clone)]
pub struct ValidatedForm {
    pub first_name: String,
    pub last_name: String,
    pub address: Option<String>,
    pub phone: String,
    pub school: String,
    pub gpa: f64,
    pub skills: Option<String>,
    pub reason: Option<String>,
    pub major: Option<String>,
    pub university: Option<String>,
}

/// Validate the whole form input.
///
/// Returns the normalized value set, or a mapping from field name to a
/// human-readable error message when any field is rejected. Unconstrained
/// fields normalize to None when trimmed-empty.
pub fn validate(input: &FormInput) -> Result<ValidatedForm, FieldErrors> {
    let mut errors = FieldErrors::new();

    let first_name = input.first_name.trim();
    if first_name.is_empty() {
        errors.insert("firstName", MSG_FIRST_NAME_REQUIRED);
    }

    let last_name = input.last_name.trim();
    if last_name.is_empty() {
        errors.insert("lastName", MSG_LAST_NAME_REQUIRED);
    }

    let phone = input.phone.trim();
    let phone_chars = phone.chars().count();
    if phone_chars < PHONE_MIN_CHARS {
        errors.insert("phone", MSG_PHONE_REQUIRED);
    } else if phone_chars > PHONE_MAX_CHARS {
        errors.insert("phone", MSG_PHONE_TOO_LONG);
    }

    let school = input.school.trim();
    if school.is_empty() {
        errors.insert("school", MSG_SCHOOL_REQUIRED);
    }

    // NaN fails the range check, so "NaN" input is rejected like any
    // other out-of-range value
    let gpa = match input.gpa.trim().parse::<f64>() {
        Ok(value) if (GPA_MIN..=GPA_MAX).contains(&value) => Some(value),
        _ => {
            errors.insert("gpa", MSG_GPA_RANGE);
            None
        }
    };

    match gpa {
        Some(gpa) if errors.is_empty() => Ok(ValidatedForm {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            address: optional(&input.address),
            phone: phone.to_string(),
            school: school.to_string(),
            gpa,
            skills: optional(&input.skills),
            reason: optional(&input.reason),
            major: optional(&input.major),
            university: optional(&input.university),
        }),
        _ => Err(errors),
    }
}

/// Trim an unconstrained field, collapsing empty input to None
fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> FormInput {
        FormInput {
            first_name: "สมชาย".to_string(),
            last_name: "ใจดี".to_string(),
            address: String::new(),
            phone: "0812345678".to_string(),
            school: "รร.ทดสอบ".to_string(),
            gpa: "3.5".to_string(),
            skills: String::new(),
            reason: String::new(),
            major: String::new(),
            university: String::new(),
        }
    }

    #[test]
    fn test_valid_input_accepted() {
        let form = validate(&valid_input()).unwrap();
        assert_eq!(form.first_name, "สมชาย");
        assert_eq!(form.gpa, 3.5);
        assert!(form.address.is_none());
        assert!(form.major.is_none());
    }

    #[test]
    fn test_empty_first_name_rejected() {
        let mut input = valid_input();
        input.first_name = String::new();
        let errors = validate(&input).unwrap_err();
        assert_eq!(errors.get("firstName"), Some(&MSG_FIRST_NAME_REQUIRED));
    }

    #[test]
    fn test_whitespace_only_name_rejected() {
        let mut input = valid_input();
        input.first_name = "   ".to_string();
        input.last_name = "\t\n".to_string();
        let errors = validate(&input).unwrap_err();
        assert_eq!(errors.get("firstName"), Some(&MSG_FIRST_NAME_REQUIRED));
        assert_eq!(errors.get("lastName"), Some(&MSG_LAST_NAME_REQUIRED));
    }

    #[test]
    fn test_empty_school_rejected() {
        let mut input = valid_input();
        input.school = "  ".to_string();
        let errors = validate(&input).unwrap_err();
        assert_eq!(errors.get("school"), Some(&MSG_SCHOOL_REQUIRED));
    }

    #[test]
    fn test_phone_length_boundaries() {
        let mut input = valid_input();

        input.phone = "12345678".to_string(); // 8 chars
        assert_eq!(
            validate(&input).unwrap_err().get("phone"),
            Some(&MSG_PHONE_REQUIRED)
        );

        input.phone = "123456789".to_string(); // 9 chars
        assert!(validate(&input).is_ok());

        input.phone = "123456789012345".to_string(); // 15 chars
        assert!(validate(&input).is_ok());

        input.phone = "1234567890123456".to_string(); // 16 chars
        assert_eq!(
            validate(&input).unwrap_err().get("phone"),
            Some(&MSG_PHONE_TOO_LONG)
        );
    }

    #[test]
    fn test_empty_phone_gets_required_message() {
        let mut input = valid_input();
        input.phone = String::new();
        let errors = validate(&input).unwrap_err();
        assert_eq!(errors.get("phone"), Some(&MSG_PHONE_REQUIRED));
    }

    #[test]
    fn test_phone_trimmed_before_length_check() {
        let mut input = valid_input();
        input.phone = "  0812345678  ".to_string();
        let form = validate(&input).unwrap();
        assert_eq!(form.phone, "0812345678");
    }

    #[test]
    fn test_gpa_boundaries_inclusive() {
        let mut input = valid_input();

        input.gpa = "0.0".to_string();
        assert_eq!(validate(&input).unwrap().gpa, 0.0);

        input.gpa = "4.0".to_string();
        assert_eq!(validate(&input).unwrap().gpa, 4.0);
    }

    #[test]
    fn test_gpa_out_of_range_rejected() {
        let mut input = valid_input();

        input.gpa = "4.5".to_string();
        assert_eq!(
            validate(&input).unwrap_err().get("gpa"),
            Some(&MSG_GPA_RANGE)
        );

        input.gpa = "-0.5".to_string();
        assert_eq!(
            validate(&input).unwrap_err().get("gpa"),
            Some(&MSG_GPA_RANGE)
        );
    }

    #[test]
    fn test_gpa_non_numeric_rejected() {
        let mut input = valid_input();
        for bad in ["", "abc", "NaN", "3,5"] {
            input.gpa = bad.to_string();
            assert_eq!(
                validate(&input).unwrap_err().get("gpa"),
                Some(&MSG_GPA_RANGE),
                "gpa input {:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_multiple_errors_reported_together() {
        let input = FormInput::default();
        let errors = validate(&input).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.contains_key("firstName"));
        assert!(errors.contains_key("lastName"));
        assert!(errors.contains_key("phone"));
        assert!(errors.contains_key("school"));
        assert!(errors.contains_key("gpa"));
    }

    #[test]
    fn test_optional_fields_normalize() {
        let mut input = valid_input();
        input.address = "  กรุงเทพฯ  ".to_string();
        input.major = "   ".to_string();
        let form = validate(&input).unwrap();
        assert_eq!(form.address.as_deref(), Some("กรุงเทพฯ"));
        assert!(form.major.is_none());
    }
}

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;

/// One `@`, not first or last, no line breaks.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\r\n]+@[^@\r\n]+$").expect("invalid email regex"));

/// Rejects empty and whitespace-only strings.
pub fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(())
}

pub fn present<T>(field: &'static str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::Required { field })
}

/// Length in UTF-16 code units, so a character outside the BMP counts as two.
pub fn max_length(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.encode_utf16().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

pub fn email(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if !EMAIL_RE.is_match(value) {
        return Err(ValidationError::InvalidEmail { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank() {
        assert!(required("reason", "sick").is_ok());
        assert_eq!(
            required("reason", "").unwrap_err(),
            ValidationError::Required { field: "reason" }
        );
        assert!(required("reason", "  \t").is_err());
    }

    #[test]
    fn present_unwraps_or_fails() {
        assert_eq!(present("role_id", Some(3)), Ok(3));
        assert_eq!(
            present::<i32>("role_id", None),
            Err(ValidationError::Required { field: "role_id" })
        );
    }

    #[test]
    fn max_length_counts_utf16_units() {
        let hundred = "é".repeat(100);
        assert!(max_length("name", &hundred, 100).is_ok());

        let err = max_length("name", &format!("{hundred}x"), 100).unwrap_err();
        assert_eq!(err, ValidationError::TooLong { field: "name", max: 100 });

        // each emoji is a surrogate pair
        assert!(max_length("name", &"😀".repeat(50), 100).is_ok());
        assert!(max_length("name", &"😀".repeat(51), 100).is_err());
    }

    #[test]
    fn email_format() {
        for ok in ["a@x.com", "first.last@company.co.uk", "a@x"] {
            assert!(email("email", ok).is_ok(), "{ok} should pass");
        }
        for bad in ["", "ax.com", "@x.com", "a@", "a@b@c.com", "a@x.com\n"] {
            assert_eq!(
                email("email", bad).unwrap_err(),
                ValidationError::InvalidEmail { field: "email" },
                "{bad:?} should fail"
            );
        }
    }
}

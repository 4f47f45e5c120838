//! Request validation
//!
//! Pure checks that run before any orchestration or database work. A
//! failed check rejects the request with a 400; nothing downstream sees
//! the input.

use wanderwise::ApiError;

/// Reviews shorter than this (trimmed) are rejected
pub const MIN_REVIEW_CHARS: usize = 10;

pub fn validate_review_text(review_text: &str) -> Result<(), ApiError> {
    if review_text.trim().chars().count() < MIN_REVIEW_CHARS {
        return Err(ApiError::validation("Review text too short"));
    }
    Ok(())
}

pub fn validate_duration(duration: u32) -> Result<(), ApiError> {
    if duration < 1 {
        return Err(ApiError::validation("Trip duration must be at least 1 day"));
    }
    Ok(())
}

pub fn validate_registration(email: &str, password: &str, name: &str) -> Result<(), ApiError> {
    if !email.contains('@') {
        return Err(ApiError::validation("Invalid email address"));
    }
    if password.chars().count() < 6 {
        return Err(ApiError::validation(
            "Password must be at least 6 characters",
        ));
    }
    if name.trim().is_empty() {
        return Err(ApiError::validation("Name must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_review_rejected() {
        assert!(validate_review_text("Good").is_err());
        assert!(validate_review_text("   Good    ").is_err());
    }

    #[test]
    fn test_long_review_accepted() {
        assert!(validate_review_text("The hotel was spotless and safe").is_ok());
    }

    #[test]
    fn test_zero_duration_rejected() {
        assert!(validate_duration(0).is_err());
        assert!(validate_duration(1).is_ok());
    }

    #[test]
    fn test_registration_rules() {
        assert!(validate_registration("a@b.com", "secret1", "Ada").is_ok());
        assert!(validate_registration("not-an-email", "secret1", "Ada").is_err());
        assert!(validate_registration("a@b.com", "short", "Ada").is_err());
        assert!(validate_registration("a@b.com", "secret1", "  ").is_err());
    }
}

use crate::auth::MIN_PASSWORD_LEN;
use crate::server::response::ApiError;

const MAX_NAME_LEN: usize = 100;
const MAX_DESCRIPTION_LEN: usize = 1000;
const MAX_EMAIL_LEN: usize = 254;

fn validate_name(name: &str, entity: &str) -> Result<String, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("{entity} name cannot be empty"));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(format!(
            "{entity} name cannot exceed {MAX_NAME_LEN} characters"
        ));
    }
    if name.chars().any(char::is_control) {
        return Err(format!("{entity} name contains invalid characters"));
    }
    Ok(name.to_string())
}

/// Returns the trimmed class name.
pub fn validate_class_name(name: &str) -> Result<String, ApiError> {
    validate_name(name, "Class").map_err(ApiError::bad_request)
}

pub fn validate_subject_name(name: &str) -> Result<String, ApiError> {
    validate_name(name, "Subject").map_err(ApiError::bad_request)
}

pub fn validate_full_name(name: &str) -> Result<String, ApiError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ApiError::bad_request("Full name cannot be empty"));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ApiError::bad_request(format!(
            "Full name cannot exceed {MAX_NAME_LEN} characters"
        )));
    }
    Ok(name.to_string())
}

/// Blank descriptions are stored as NULL.
pub fn normalize_description(description: Option<String>) -> Result<Option<String>, ApiError> {
    match description.map(|d| d.trim().to_string()) {
        Some(d) if d.is_empty() => Ok(None),
        Some(d) if d.chars().count() > MAX_DESCRIPTION_LEN => Err(ApiError::bad_request(format!(
            "Description cannot exceed {MAX_DESCRIPTION_LEN} characters"
        ))),
        other => Ok(other),
    }
}

/// Colors are `#RRGGBB`; returned uppercased.
pub fn validate_color(color: &str) -> Result<String, ApiError> {
    let hex = color
        .strip_prefix('#')
        .filter(|h| h.len() == 6 && h.chars().all(|c| c.is_ascii_hexdigit()))
        .ok_or_else(|| ApiError::bad_request("Color must be a hex value like #3B82F6"))?;
    Ok(format!("#{}", hex.to_ascii_uppercase()))
}

/// Returns the trimmed, lowercased email.
pub fn validate_email(email: &str) -> Result<String, ApiError> {
    let email = email.trim().to_lowercase();
    let invalid = || ApiError::bad_request("Invalid email");

    if email.len() > MAX_EMAIL_LEN || email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty()
        || domain.contains('@')
        || !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
    {
        return Err(invalid());
    }

    Ok(email)
}

pub fn validate_password(password: &str) -> Result<(), ApiError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::bad_request(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_trimmed() {
        assert_eq!(validate_class_name("  7A ").unwrap(), "7A");
        assert!(validate_class_name("   ").is_err());
        assert!(validate_subject_name(&"x".repeat(101)).is_err());
        assert!(validate_subject_name("Math\n").is_ok());
        assert!(validate_subject_name("Ma\u{0}th").is_err());
    }

    #[test]
    fn test_color() {
        assert_eq!(validate_color("#3b82f6").unwrap(), "#3B82F6");
        assert!(validate_color("3B82F6").is_err());
        assert!(validate_color("#3B82F").is_err());
        assert!(validate_color("#GGGGGG").is_err());
    }

    #[test]
    fn test_email() {
        assert_eq!(
            validate_email(" Teacher@School.Test ").unwrap(),
            "teacher@school.test"
        );
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@school.test").is_err());
        assert!(validate_email("a@localhost").is_err());
        assert!(validate_email("a b@school.test").is_err());
    }

    #[test]
    fn test_password_length() {
        assert!(validate_password("12345").is_err());
        assert!(validate_password("123456").is_ok());
    }

    #[test]
    fn test_description() {
        assert_eq!(normalize_description(Some("  ".to_string())).unwrap(), None);
        assert_eq!(
            normalize_description(Some(" morning ".to_string())).unwrap(),
            Some("morning".to_string())
        );
        assert_eq!(normalize_description(None).unwrap(), None);
    }
}

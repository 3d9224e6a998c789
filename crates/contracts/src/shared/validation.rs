//! Проверка пользовательских форм.
//!
//! Пустое обязательное поле — предупреждение, неверный формат — ошибка.

use super::notifications::NotificationKind;
use thiserror::Error;

/// Минимальная длина пароля.
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter {field}")]
    Required { field: &'static str },
    #[error("{message}")]
    Invalid { message: String },
}

impl ValidationError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ValidationError::Invalid {
            message: message.into(),
        }
    }

    /// How the failure is surfaced to the user.
    pub fn kind(&self) -> NotificationKind {
        match self {
            ValidationError::Required { .. } => NotificationKind::Warning,
            ValidationError::Invalid { .. } => NotificationKind::Error,
        }
    }
}

/// Returns the trimmed value or [`ValidationError::Required`].
pub fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::Required { field })
    } else {
        Ok(trimmed)
    }
}

/// `local@domain.tld` without whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

pub fn email(value: &str) -> Result<&str, ValidationError> {
    let value = required(value, "an email address")?;
    if is_valid_email(value) {
        Ok(value)
    } else {
        Err(ValidationError::invalid(format!("Invalid email address: {value}")))
    }
}

/// Splits a comma separated recipient list and checks every address.
pub fn recipient_list(value: &str) -> Result<Vec<String>, ValidationError> {
    let emails: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(str::to_string)
        .collect();

    if emails.is_empty() {
        return Err(ValidationError::Required {
            field: "at least one recipient email",
        });
    }

    let invalid: Vec<&str> = emails
        .iter()
        .map(String::as_str)
        .filter(|e| !is_valid_email(e))
        .collect();
    if !invalid.is_empty() {
        return Err(ValidationError::invalid(format!(
            "Invalid email addresses: {}",
            invalid.join(", ")
        )));
    }
    Ok(emails)
}

/// Machine name of a custom field: lowercase letters, digits, underscores.
pub fn field_name(value: &str) -> Result<&str, ValidationError> {
    let value = required(value, "a field name")?;
    let valid = value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    if valid {
        Ok(value)
    } else {
        Err(ValidationError::invalid(
            "Field name must be lowercase with underscores only",
        ))
    }
}

/// Normalises free input into a field name while the user types.
pub fn slugify_field_name(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' { c } else { '_' })
        .collect()
}

pub fn new_password(password: &str, confirmation: &str) -> Result<(), ValidationError> {
    if password != confirmation {
        return Err(ValidationError::invalid("New passwords do not match"));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::invalid(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

/// Numeric form input such as a KPI target.
pub fn number(value: &str, field: &'static str) -> Result<f64, ValidationError> {
    let value = required(value, field)?;
    value
        .parse::<f64>()
        .map_err(|_| ValidationError::invalid(format!("{value} is not a number")))
}

/// Checks an uploaded file against an extension whitelist and size limit.
pub fn upload(
    file_name: &str,
    size_bytes: f64,
    allowed_extensions: &[&str],
    max_bytes: f64,
) -> Result<(), ValidationError> {
    if size_bytes > max_bytes {
        return Err(ValidationError::invalid(format!(
            "File size exceeds {}MB limit",
            (max_bytes / (1024.0 * 1024.0)).round()
        )));
    }
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();
    if !allowed_extensions.is_empty() && !allowed_extensions.contains(&extension.as_str()) {
        return Err(ValidationError::invalid(format!(
            "Please upload a {} file",
            allowed_extensions
                .iter()
                .map(|e| e.to_uppercase())
                .collect::<Vec<_>>()
                .join(", ")
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_is_a_warning() {
        let err = required("   ", "a product name").unwrap_err();
        assert_eq!(err.to_string(), "Please enter a product name");
        assert_eq!(err.kind(), NotificationKind::Warning);
        assert_eq!(required(" Pro ", "x"), Ok("Pro"));
    }

    #[test]
    fn test_email() {
        assert!(is_valid_email("jane@example.com"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("jane example@x.com"));
        assert!(!is_valid_email("@example.com"));
        assert_eq!(email("nope").unwrap_err().kind(), NotificationKind::Error);
    }

    #[test]
    fn test_recipient_list() {
        assert_eq!(
            recipient_list("a@x.io, b@y.io,").unwrap(),
            vec!["a@x.io".to_string(), "b@y.io".to_string()]
        );
        assert_eq!(
            recipient_list("a@x.io, bad, worse@").unwrap_err().to_string(),
            "Invalid email addresses: bad, worse@"
        );
        assert_eq!(recipient_list(" , ").unwrap_err().kind(), NotificationKind::Warning);
    }

    #[test]
    fn test_field_name() {
        assert_eq!(field_name("employee_id"), Ok("employee_id"));
        assert!(field_name("Employee ID").is_err());
        assert_eq!(slugify_field_name("Employee ID-2"), "employee_id_2");
    }

    #[test]
    fn test_new_password() {
        assert!(new_password("longenough", "longenough").is_ok());
        assert_eq!(
            new_password("short", "short").unwrap_err().to_string(),
            "Password must be at least 8 characters"
        );
        assert_eq!(
            new_password("longenough", "different").unwrap_err().to_string(),
            "New passwords do not match"
        );
    }

    #[test]
    fn test_upload() {
        let mb = 1024.0 * 1024.0;
        assert!(upload("products.csv", 2.0 * mb, &["csv"], 5.0 * mb).is_ok());
        assert_eq!(
            upload("products.csv", 6.0 * mb, &["csv"], 5.0 * mb).unwrap_err().to_string(),
            "File size exceeds 5MB limit"
        );
        assert_eq!(
            upload("products.xlsx", mb, &["csv"], 5.0 * mb).unwrap_err().to_string(),
            "Please upload a CSV file"
        );
        assert!(upload("anything.bin", mb, &[], 5.0 * mb).is_ok());
    }

    #[test]
    fn test_number() {
        assert_eq!(number("42.5", "a target value"), Ok(42.5));
        assert_eq!(number("", "a target value").unwrap_err().kind(), NotificationKind::Warning);
        assert!(number("abc", "a target value").is_err());
    }
}

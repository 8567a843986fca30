//! Form validation rules shared by the login, signup and settings screens.
//!
//! Everything here is pure: the functions look only at the submitted draft
//! and produce messages, never touching storage or navigation. The login
//! form collects an error per field so both can be shown inline at once;
//! the signup and settings forms stop at the first violated rule and report
//! a single message.

/// Per-field error messages for the login form. `None` means the field
/// passed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl FieldErrors {
    /// True when every field passed validation.
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Validate the login draft, collecting an error for every violated field.
pub fn validate_login(email: &str, password: &str) -> FieldErrors {
    FieldErrors {
        email: email_error(email),
        password: password_error(password),
    }
}

/// Validate the signup draft, stopping at the first violated rule.
pub fn validate_signup(
    full_name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), String> {
    if let Some(message) = full_name_error(full_name) {
        return Err(message);
    }
    if let Some(message) = email_error(email) {
        return Err(message);
    }
    if let Some(message) = password_error(password) {
        return Err(message);
    }
    if password != confirm_password {
        return Err("Passwords do not match".to_string());
    }
    Ok(())
}

/// Validate the settings draft, stopping at the first violated rule. The
/// name rule runs before the email rule.
pub fn validate_settings(full_name: &str, email: &str) -> Result<(), String> {
    if let Some(message) = full_name_error(full_name) {
        return Err(message);
    }
    if !is_email_shaped(email.trim()) {
        return Err("Please enter a valid email address".to_string());
    }
    Ok(())
}

fn full_name_error(full_name: &str) -> Option<String> {
    if full_name.trim().chars().count() < 3 {
        Some("Full name must be at least 3 characters long".to_string())
    } else {
        None
    }
}

fn email_error(email: &str) -> Option<String> {
    if email.is_empty() {
        // The required check takes precedence over the format check.
        Some("Email is required".to_string())
    } else if !is_email_shaped(email) {
        Some("Please enter a valid email address".to_string())
    } else {
        None
    }
}

fn password_error(password: &str) -> Option<String> {
    if password.is_empty() {
        Some("Password is required".to_string())
    } else if password.chars().count() < 6 {
        Some("Password must be at least 6 characters long".to_string())
    } else {
        None
    }
}

/// `local@domain.tld` shape: a non-empty local part, a single `@`, and a
/// dot with something on both sides in the domain.
fn is_email_shaped(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_email_reports_required_over_format() {
        let errors = validate_login("", "secret1");
        assert_eq!(errors.email.as_deref(), Some("Email is required"));
        assert!(errors.password.is_none());
    }

    #[test]
    fn malformed_emails_report_format_error() {
        for email in [
            "plainaddress",
            "missing@tld",
            "@nolocal.com",
            "two@@ats.com",
            "trailing@dot.",
            "a@.com",
        ] {
            let errors = validate_login(email, "secret1");
            assert_eq!(
                errors.email.as_deref(),
                Some("Please enter a valid email address"),
                "{email}"
            );
        }
    }

    #[test]
    fn well_formed_email_passes() {
        assert!(validate_login("jane@x.com", "secret1").is_empty());
        assert!(validate_login("jane.doe+tag@mail.example.org", "secret1").is_empty());
    }

    #[test]
    fn short_passwords_are_rejected() {
        let errors = validate_login("jane@x.com", "12345");
        assert_eq!(
            errors.password.as_deref(),
            Some("Password must be at least 6 characters long")
        );

        let errors = validate_login("jane@x.com", "");
        assert_eq!(errors.password.as_deref(), Some("Password is required"));
    }

    #[test]
    fn login_collects_all_field_errors() {
        let errors = validate_login("", "");
        assert!(errors.email.is_some());
        assert!(errors.password.is_some());
        assert!(!errors.is_empty());
    }

    #[test]
    fn settings_stops_at_first_violated_rule() {
        // Both fields invalid: only the name error is reported.
        assert_eq!(
            validate_settings("ab", "not-an-email"),
            Err("Full name must be at least 3 characters long".to_string())
        );
        assert_eq!(
            validate_settings("Jane Doe", "not-an-email"),
            Err("Please enter a valid email address".to_string())
        );
        assert_eq!(validate_settings("Jane Doe", "jane@x.com"), Ok(()));
    }

    #[test]
    fn settings_trims_before_validating() {
        assert_eq!(
            validate_settings("  Jo  ", "jane@x.com"),
            Err("Full name must be at least 3 characters long".to_string())
        );
        assert_eq!(validate_settings("Jane Doe", "  jane@x.com  "), Ok(()));
    }

    #[test]
    fn signup_checks_password_confirmation() {
        assert_eq!(
            validate_signup("Jane Doe", "jane@x.com", "secret1", "secret2"),
            Err("Passwords do not match".to_string())
        );
        assert_eq!(
            validate_signup("Jane Doe", "jane@x.com", "secret1", "secret1"),
            Ok(())
        );
    }

    #[test]
    fn signup_reports_only_the_first_violation() {
        assert_eq!(
            validate_signup("", "", "", ""),
            Err("Full name must be at least 3 characters long".to_string())
        );
        assert_eq!(
            validate_signup("Jane Doe", "", "", ""),
            Err("Email is required".to_string())
        );
        assert_eq!(
            validate_signup("Jane Doe", "jane@x.com", "123", "123"),
            Err("Password must be at least 6 characters long".to_string())
        );
    }
}

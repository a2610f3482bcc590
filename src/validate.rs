//! Local Form Validation
//!
//! Synchronous gates run before any network call. A failure carries the
//! message to display; it never reaches the gateway. The backend remains
//! the authority on every rule checked here.

use chrono::NaiveDate;

/// Registration form: username 3-20 chars, plausible email, password of at
/// least 8 chars, non-empty name.
pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
    name: &str,
) -> Result<(), String> {
    let username_len = username.chars().count();
    if !(3..=20).contains(&username_len) {
        return Err("Username must be between 3 and 20 characters".to_string());
    }
    if !is_plausible_email(email) {
        return Err("Please enter a valid email address".to_string());
    }
    validate_password(password)?;
    if name.trim().is_empty() {
        return Err("Please enter your name".to_string());
    }
    Ok(())
}

/// Login form: non-empty identifier, password of at least 8 chars.
pub fn validate_login(identifier: &str, password: &str) -> Result<(), String> {
    if identifier.trim().is_empty() {
        return Err("Please enter your username or email".to_string());
    }
    validate_password(password)
}

/// Add-list input: non-empty after trimming.
pub fn validate_list_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Please enter a list name".to_string());
    }
    Ok(())
}

/// Add-product form. Limits mirror the backend's request schema: name up to
/// 100 chars, barcode up to 13, description up to 255, expiry as YYYY-MM-DD.
pub fn validate_product(
    product_name: &str,
    barcode: &str,
    expiry_date: &str,
    description: &str,
) -> Result<(), String> {
    if product_name.trim().is_empty() {
        return Err("Please enter a product name".to_string());
    }
    if product_name.chars().count() > 100 {
        return Err("Product name must be at most 100 characters".to_string());
    }
    if barcode.chars().count() > 13 {
        return Err("Barcode must be at most 13 characters".to_string());
    }
    if !expiry_date.is_empty() && NaiveDate::parse_from_str(expiry_date, "%Y-%m-%d").is_err() {
        return Err("Expiry date must use the YYYY-MM-DD format".to_string());
    }
    if description.chars().count() > 255 {
        return Err("Description must be at most 255 characters".to_string());
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), String> {
    if password.trim().is_empty() || password.chars().count() < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }
    Ok(())
}

/// Simple `x@y.z` shape check: a local part and a dotted domain, no
/// whitespace. Full address validation belongs to the backend.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, suffix)) => !host.is_empty() && !suffix.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_accepts_well_formed_input() {
        assert_eq!(
            validate_registration("alice", "alice@example.com", "password1", "Alice"),
            Ok(())
        );
    }

    #[test]
    fn short_username_names_the_length_requirement() {
        let err = validate_registration("ab", "a@b.c", "password1", "A").unwrap_err();
        assert!(err.contains("3"), "{}", err);
        assert!(err.contains("20"), "{}", err);
    }

    #[test]
    fn username_upper_bound_is_twenty() {
        let twenty = "a".repeat(20);
        let twenty_one = "a".repeat(21);
        assert!(validate_registration(&twenty, "a@b.c", "password1", "A").is_ok());
        assert!(validate_registration(&twenty_one, "a@b.c", "password1", "A").is_err());
    }

    #[test]
    fn email_shape_check() {
        assert!(is_plausible_email("user@example.com"));
        assert!(is_plausible_email("a@b.c"));
        assert!(!is_plausible_email("plainaddress"));
        assert!(!is_plausible_email("@example.com"));
        assert!(!is_plausible_email("user@nodot"));
        assert!(!is_plausible_email("user@.com")); // empty host before the dot
        assert!(!is_plausible_email("user@domain."));
        assert!(!is_plausible_email("user name@example.com"));
    }

    #[test]
    fn login_requires_identifier_and_long_password() {
        assert!(validate_login("", "password1").is_err());
        assert!(validate_login("   ", "password1").is_err());
        assert!(validate_login("alice", "short").is_err());
        assert!(validate_login("alice", "        ").is_err()); // 8 spaces
        assert_eq!(validate_login("alice", "password1"), Ok(()));
    }

    #[test]
    fn empty_list_name_is_rejected() {
        let err = validate_list_name("  ").unwrap_err();
        assert_eq!(err, "Please enter a list name");
        assert_eq!(validate_list_name("牛奶清單"), Ok(()));
    }

    #[test]
    fn product_gate_checks_name_and_limits() {
        assert_eq!(validate_product("Milk", "4710088412345", "2026-09-01", "2L"), Ok(()));
        assert!(validate_product("", "", "", "").is_err());
        assert!(validate_product(&"x".repeat(101), "", "", "").is_err());
        assert!(validate_product("Milk", &"9".repeat(14), "", "").is_err());
        assert!(validate_product("Milk", "", "", &"d".repeat(256)).is_err());
    }

    #[test]
    fn expiry_date_must_be_iso_when_present() {
        assert_eq!(validate_product("Milk", "", "", ""), Ok(()));
        assert_eq!(validate_product("Milk", "", "2026-02-28", ""), Ok(()));
        assert!(validate_product("Milk", "", "28/02/2026", "").is_err());
        assert!(validate_product("Milk", "", "2026-13-01", "").is_err());
    }
}

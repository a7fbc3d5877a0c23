//! Validators in two deliberately different styles: one reports the first
//! failing requirement, the other only a whole verdict. The asymmetry is
//! contractual; do not unify them.

/// Report the first failing password requirement, checked in fixed priority
/// order: length, uppercase, lowercase, digit, special character.
///
/// Length counts characters, not bytes. Special characters are the set
/// `!@#$%^&*`.
pub fn validate_password_strength(password: &str) -> &'static str {
    if password.chars().count() < 8 {
        return "Password too short (minimum 8 characters)";
    }

    let has_upper = password.chars().any(char::is_uppercase);
    let has_lower = password.chars().any(char::is_lowercase);
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| "!@#$%^&*".contains(c));

    if !has_upper {
        "Password must contain uppercase letter"
    } else if !has_lower {
        "Password must contain lowercase letter"
    } else if !has_digit {
        "Password must contain a number"
    } else if !has_special {
        "Password must contain special character"
    } else {
        "Strong password!"
    }
}

/// Single verdict from a conjunction of independent predicates: contains
/// `@`, the part after the last `@` contains a dot, longer than five
/// characters, and does not start with `@`.
///
/// By design this cannot say which check failed; that is the contract
/// difference from [`validate_password_strength`].
pub fn validate_email_compact(email: &str) -> &'static str {
    let domain_has_dot = email
        .rsplit('@')
        .next()
        .is_some_and(|tail| tail.contains('.'));

    if email.contains('@')
        && domain_has_dot
        && email.chars().count() > 5
        && !email.starts_with('@')
    {
        "Valid email"
    } else {
        "Invalid email"
    }
}

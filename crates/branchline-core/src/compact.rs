//! Compact classifiers: the same decision style as single expressions.
//!
//! Where a verbose classifier with an identical contract exists
//! ([`crate::threshold::check_even_odd`]), the compact form must return
//! byte-identical output for every input; the pair is pinned in
//! `tests/property_test.rs`. The rest of this module collects the
//! one-expression classifiers that have no verbose twin.

/// Two-band temperature: strictly above 25 is warm, everything else cool.
///
/// This is the simplified two-branch version, not a twin of
/// [`crate::threshold::check_temperature`]; the boundary here is exclusive,
/// so 25 itself reads as cool.
pub fn check_temperature_compact(temp: i32) -> &'static str {
    if temp > 25 {
        "It's warm today!"
    } else {
        "It's cool today!"
    }
}

/// Compact twin of [`crate::threshold::check_even_odd`].
pub fn check_even_odd_compact(number: i64) -> String {
    format!("{number} is {}", if number % 2 == 0 { "even" } else { "odd" })
}

/// Pass at 50, inclusive.
pub fn get_pass_fail(score: i32) -> &'static str {
    if score >= 50 { "Pass" } else { "Fail" }
}

/// Member discount beats the senior discount; exactly one rate applies.
pub fn get_discount_rate(is_member: bool, age: i32) -> f64 {
    if is_member {
        0.2
    } else if age >= 65 {
        0.1
    } else {
        0.0
    }
}

/// [`format_price_with`] in the default currency (GBP).
pub fn format_price(price: f64) -> String {
    format_price_with(price, "GBP")
}

/// Currency symbol, then the amount to two decimal places.
///
/// Unrecognized currencies fall back to the euro symbol.
pub fn format_price_with(price: f64, currency: &str) -> String {
    let symbol = if currency == "GBP" {
        "£"
    } else if currency == "USD" {
        "$"
    } else {
        "€"
    };
    format!("{symbol}{price:.2}")
}

/// Trimmed input, or a fixed placeholder when trimming leaves nothing.
pub fn validate_input_compact(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        "No input provided"
    } else {
        trimmed
    }
}

/// Login count gates the new-user band before activity is consulted.
pub fn get_user_status_compact(login_count: i32, last_active_days: i32) -> &'static str {
    if login_count < 5 {
        "New User"
    } else if last_active_days > 30 {
        "Inactive"
    } else {
        "Active"
    }
}

/// [`process_grade_compact_with`] with no extra credit.
pub fn process_grade_compact(score: i32) -> &'static str {
    process_grade_compact_with(score, 0)
}

/// Plain letter grade after extra credit, capped at 100.
///
/// Different boundary set and labels from
/// [`crate::threshold::grade_assignment`]; the two are distinct contracts.
pub fn process_grade_compact_with(score: i32, extra_credit: i32) -> &'static str {
    let final_score = score.saturating_add(extra_credit).min(100);
    if final_score >= 90 {
        "A"
    } else if final_score >= 80 {
        "B"
    } else if final_score >= 70 {
        "C"
    } else if final_score >= 60 {
        "D"
    } else {
        "F"
    }
}

/// Deadline pressure first, then privilege, then the calendar.
pub fn get_priority_level_compact(
    user_type: &str,
    is_premium: bool,
    days_until_deadline: i32,
) -> &'static str {
    if days_until_deadline <= 1 {
        "Critical"
    } else if (user_type == "admin" || is_premium) && days_until_deadline <= 3 {
        "High"
    } else if days_until_deadline <= 7 {
        "Medium"
    } else {
        "Low"
    }
}

/// Length bands over character count, not bytes: empty, up to 10, up to 50,
/// longer.
pub fn classify_text_length_compact(text: &str) -> &'static str {
    if text.is_empty() {
        return "Empty";
    }
    let length = text.chars().count();
    if length <= 10 {
        "Short"
    } else if length <= 50 {
        "Medium"
    } else {
        "Long"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_temperature_boundary_is_exclusive() {
        assert_eq!(check_temperature_compact(30), "It's warm today!");
        assert_eq!(check_temperature_compact(26), "It's warm today!");
        assert_eq!(check_temperature_compact(25), "It's cool today!");
        assert_eq!(check_temperature_compact(-3), "It's cool today!");
    }

    #[test]
    fn test_pass_fail_boundary() {
        assert_eq!(get_pass_fail(75), "Pass");
        assert_eq!(get_pass_fail(50), "Pass");
        assert_eq!(get_pass_fail(49), "Fail");
    }

    #[test]
    fn test_discount_rate_priority() {
        // Membership wins even when the senior rate would also apply.
        assert_eq!(get_discount_rate(true, 70), 0.2);
        assert_eq!(get_discount_rate(true, 30), 0.2);
        assert_eq!(get_discount_rate(false, 65), 0.1);
        assert_eq!(get_discount_rate(false, 64), 0.0);
    }

    #[test]
    fn test_price_formatting() {
        assert_eq!(format_price(29.99), "£29.99");
        assert_eq!(format_price_with(29.99, "GBP"), "£29.99");
        assert_eq!(format_price_with(5.0, "USD"), "$5.00");
        assert_eq!(format_price_with(10.5, "EUR"), "€10.50");
        // Anything unrecognized falls back to euros.
        assert_eq!(format_price_with(1.0, "JPY"), "€1.00");
    }

    #[test]
    fn test_input_fallback() {
        assert_eq!(validate_input_compact("  "), "No input provided");
        assert_eq!(validate_input_compact(""), "No input provided");
        assert_eq!(validate_input_compact("  hello  "), "hello");
    }

    #[test]
    fn test_user_status_order() {
        // Below five logins the activity column is never consulted.
        assert_eq!(get_user_status_compact(3, 45), "New User");
        assert_eq!(get_user_status_compact(3, 0), "New User");
        assert_eq!(get_user_status_compact(5, 45), "Inactive");
        assert_eq!(get_user_status_compact(5, 30), "Active");
        assert_eq!(get_user_status_compact(20, 1), "Active");
    }

    #[test]
    fn test_grade_with_extra_credit() {
        assert_eq!(process_grade_compact_with(85, 7), "A");
        assert_eq!(process_grade_compact_with(85, 0), "B");
        assert_eq!(process_grade_compact(85), "B");
        assert_eq!(process_grade_compact(59), "F");
        assert_eq!(process_grade_compact_with(59, 1), "D");
        // The cap keeps extra credit from inventing scores above 100.
        assert_eq!(process_grade_compact_with(99, 50), "A");
    }

    #[test]
    fn test_grade_extreme_scores_never_overflow() {
        // The sum saturates, so integer-extreme inputs still grade.
        assert_eq!(process_grade_compact_with(i32::MAX, 1), "A");
        assert_eq!(process_grade_compact_with(1, i32::MAX), "A");
        assert_eq!(process_grade_compact_with(i32::MIN, -1), "F");
        assert_eq!(process_grade_compact_with(i32::MIN, i32::MAX), "F");
    }

    #[test]
    fn test_priority_levels() {
        assert_eq!(get_priority_level_compact("admin", false, 1), "Critical");
        assert_eq!(get_priority_level_compact("user", true, 0), "Critical");
        assert_eq!(get_priority_level_compact("admin", false, 2), "High");
        assert_eq!(get_priority_level_compact("user", true, 3), "High");
        // Neither admin nor premium: straight to the calendar bands.
        assert_eq!(get_priority_level_compact("user", false, 3), "Medium");
        assert_eq!(get_priority_level_compact("user", false, 7), "Medium");
        assert_eq!(get_priority_level_compact("user", false, 8), "Low");
        assert_eq!(get_priority_level_compact("admin", true, 30), "Low");
    }

    #[test]
    fn test_text_length_bands() {
        assert_eq!(classify_text_length_compact(""), "Empty");
        assert_eq!(classify_text_length_compact("hi"), "Short");
        assert_eq!(classify_text_length_compact("exactly 10"), "Short");
        assert_eq!(classify_text_length_compact("a medium sentence"), "Medium");
        assert_eq!(
            classify_text_length_compact("This is a medium length sentence."),
            "Medium"
        );
        assert_eq!(
            classify_text_length_compact(
                "A considerably longer passage that runs past the fifty character mark."
            ),
            "Long"
        );
    }

    #[test]
    fn test_text_length_counts_chars_not_bytes() {
        // Ten codepoints, more than ten bytes.
        assert_eq!(classify_text_length_compact("éééééééééé"), "Short");
    }
}

//! Threshold classifiers: ordered boundary comparisons, first match wins.
//!
//! Branches are evaluated top to bottom, so a given input never matches two
//! of them; comparison direction and inclusivity are part of each contract.
//! The two grading functions here and in [`crate::compact`] use different
//! boundary sets and labels on purpose. Treat them as distinct cases.

/// Bucket a temperature (degrees C) into one of five bands.
///
/// Boundaries at 30/25/20/10 are inclusive on the hot side:
/// `check_temperature(30)` is very hot and `check_temperature(25)` is hot.
pub fn check_temperature(temp: i32) -> &'static str {
    if temp >= 30 {
        "It's very hot today!"
    } else if temp >= 25 {
        "It's hot today!"
    } else if temp >= 20 {
        "It's warm today"
    } else if temp >= 10 {
        "It's cool today!"
    } else {
        "It's freezing today!"
    }
}

/// Letter-grade a score, encouragement included.
pub fn grade_assignment(score: i32) -> &'static str {
    if score >= 97 {
        "Exquisite work! A+"
    } else if score >= 90 {
        "Excellent work! A"
    } else if score >= 70 {
        "Good job! B"
    } else if score >= 50 {
        "You passed! C"
    } else {
        // The trailing space is part of the published label.
        "Please try again. F "
    }
}

/// Age bracket, with an explicit invalid band below zero.
pub fn categorise_age(age: i32) -> &'static str {
    if age < 0 {
        "Invalid age"
    } else if age < 13 {
        "Child"
    } else if age < 20 {
        "Teenager"
    } else if age < 65 {
        "Adult"
    } else {
        "Senior"
    }
}

/// Parity label: `"{n} is even"` or `"{n} is odd"`.
pub fn check_even_odd(number: i64) -> String {
    if number % 2 == 0 {
        format!("{number} is even")
    } else {
        format!("{number} is odd")
    }
}

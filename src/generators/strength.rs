// src/generators/strength.rs
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::models::PasswordStrength;

const MIN_SCORED_LENGTH: usize = 4;
const MAX_LENGTH_POINTS: usize = 50;

/// Scores a password from 0 to 100.
///
/// Two points per character up to 50, plus 15/30/50 points when two, three
/// or four of {uppercase, lowercase, digit, other} are present. Anything
/// shorter than four characters scores 0.
pub fn score(password: &str) -> u8 {
    // Counted in Unicode scalar values, so astral characters such as emoji
    // count once rather than as two UTF-16 units.
    let length = password.chars().count();
    if length < MIN_SCORED_LENGTH {
        return 0;
    }

    let length_points = (length * 2).min(MAX_LENGTH_POINTS);

    let has_uppercase = password.chars().any(char::is_uppercase);
    let has_lowercase = password.chars().any(char::is_lowercase);
    let has_digit = password.chars().any(is_decimal_digit);
    let has_symbol = password.chars().any(|c| !is_letter(c) && !is_decimal_digit(c));

    let complexity = [has_uppercase, has_lowercase, has_digit, has_symbol]
        .iter()
        .filter(|present| **present)
        .count();

    let complexity_points = match complexity {
        4 => 50,
        3 => 30,
        2 => 15,
        _ => 0,
    };

    (length_points + complexity_points).min(100) as u8
}

// General category Nd only; superscripts, fractions and roman numerals are symbols.
fn is_decimal_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
}

// Any L* category. Combining marks are not letters.
fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

pub fn strength_label(score: i32) -> PasswordStrength {
    PasswordStrength::from_score(score)
}

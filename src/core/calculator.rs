//! Numerology arithmetic: digit reduction, letter values and the four
//! numbers that make up a [`Report`].
//!
//! Everything in here is pure. Persisting the result is the caller's job,
//! see [`crate::core::session`].

use crate::core::descriptions::describe;
use crate::domain::model::{NumberKind, NumerologyScore, Report};
use crate::utils::error::{NumerologyError, Result};
use chrono::{DateTime, Datelike, NaiveDate};

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

pub fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Replaces `n` with its digit sum until a single digit remains.
pub fn reduce_to_single_digit(mut n: u64) -> u64 {
    while n > 9 {
        n = digit_sum(n);
    }
    n
}

/// a=1 .. i=9, j=1 .. r=9, s=1 .. z=8. Anything else is worth 0.
pub fn letter_value(c: char) -> u64 {
    match c.to_ascii_lowercase() {
        letter @ 'a'..='z' => (letter as u64 - 'a' as u64) % 9 + 1,
        _ => 0,
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

pub fn parse_birth_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }

    // 也接受完整的時間戳記，只取日期部分
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.date_naive());
    }

    Err(NumerologyError::InvalidDateError {
        input: input.to_string(),
    })
}

fn score_from_sum(sum: u64) -> Option<NumerologyScore> {
    u8::try_from(reduce_to_single_digit(sum))
        .ok()
        .and_then(NumerologyScore::new)
}

fn name_score(name: &str, kind: NumberKind, keep: impl Fn(char) -> bool) -> Result<NumerologyScore> {
    let sum: u64 = name
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(|c| c.is_ascii_lowercase() && keep(*c))
        .map(letter_value)
        .sum();

    // 總和為 0 代表沒有可用的字母，不做化簡直接拒絕
    score_from_sum(sum).ok_or(NumerologyError::EmptyNameError { kind })
}

pub fn compute_life_path(birth_date: &str) -> Result<NumerologyScore> {
    let date = parse_birth_date(birth_date)?;
    let sum = digit_sum(u64::from(date.day()))
        + digit_sum(u64::from(date.month()))
        + digit_sum(u64::from(date.year().unsigned_abs()));

    score_from_sum(sum).ok_or_else(|| NumerologyError::InvalidDateError {
        input: birth_date.to_string(),
    })
}

pub fn compute_expression(name: &str) -> Result<NumerologyScore> {
    name_score(name, NumberKind::Expression, |_| true)
}

pub fn compute_soul_urge(name: &str) -> Result<NumerologyScore> {
    name_score(name, NumberKind::SoulUrge, is_vowel)
}

pub fn compute_personality(name: &str) -> Result<NumerologyScore> {
    name_score(name, NumberKind::Personality, |c| !is_vowel(c))
}

fn description(kind: NumberKind, score: NumerologyScore) -> String {
    describe(kind, u32::from(score.get())).to_string()
}

/// Computes all four numbers for one person.
///
/// The birth date is checked before the name, so a request that is wrong on
/// both counts reports [`NumerologyError::InvalidDateError`].
pub fn generate_report(name: &str, birth_date: &str) -> Result<Report> {
    let life_path_number = compute_life_path(birth_date)?;
    let expression_number = compute_expression(name)?;
    let soul_urge_number = compute_soul_urge(name)?;
    let personality_number = compute_personality(name)?;

    tracing::debug!(
        "Computed numbers for '{}': life path {}, expression {}, soul urge {}, personality {}",
        name,
        life_path_number,
        expression_number,
        soul_urge_number,
        personality_number
    );

    Ok(Report {
        name: name.to_string(),
        birth_date: birth_date.to_string(),
        life_path_number,
        expression_number,
        soul_urge_number,
        personality_number,
        life_path_description: description(NumberKind::LifePath, life_path_number),
        expression_description: description(NumberKind::Expression, expression_number),
        soul_urge_description: description(NumberKind::SoulUrge, soul_urge_number),
        personality_description: description(NumberKind::Personality, personality_number),
    })
}

//! Format checks for candidate answers.
//!
//! These are syntactic sanity checks only: an email that passes is not known
//! to be deliverable, a phone number is not known to be reachable.

use std::sync::LazyLock;

use regex::Regex;

use super::state::Stage;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").unwrap());

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{10,15}$").unwrap());

/// Words that end the conversation wherever they appear in an answer.
pub const EXIT_KEYWORDS: &[&str] = &["exit", "quit", "bye", "thank you", "thanks"];

/// `local@domain.tld` built from word, dot and dash characters.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// 10 to 15 digits, nothing else.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Any number that parses as a float and is at least zero. NaN fails the
/// comparison; infinity passes it.
pub fn is_valid_experience(experience: &str) -> bool {
    experience
        .trim()
        .parse::<f64>()
        .is_ok_and(|years| years >= 0.0)
}

/// Case-insensitive substring match against `EXIT_KEYWORDS`.
///
/// Substring matching means "Bye Lake" as a location also ends the
/// conversation.
pub fn contains_exit_keyword(input: &str) -> bool {
    let lowered = input.to_lowercase();
    EXIT_KEYWORDS.iter().any(|k| lowered.contains(k))
}

/// Run the check that guards `stage`. Stages without a check accept anything.
pub fn validate(stage: Stage, input: &str) -> bool {
    match stage {
        Stage::Email => is_valid_email(input),
        Stage::Phone => is_valid_phone(input),
        Stage::Experience => is_valid_experience(input),
        _ => true,
    }
}

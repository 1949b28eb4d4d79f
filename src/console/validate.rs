// Token classification for interactive input.
//
// Both programs share one error policy: a malformed token is reported with a
// fixed message and the user is re-prompted. The checks here only classify;
// the re-prompt loops live in `prompt`.

use crate::core::{LabError, Result};

/// Parse a strictly positive integer. Only digit characters are accepted, so
/// "+3", "-3" and "3.0" all fail.
pub fn parse_positive_int(token: &str) -> Result<usize> {
    if token.is_empty() {
        return Err(LabError::EmptyInput);
    }
    if !token.chars().all(|c| c.is_ascii_digit()) {
        return Err(LabError::NotPositive(token.to_string()));
    }
    match token.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(LabError::NotPositive(token.to_string())),
    }
}

/// Parse any integer: an optional leading minus followed by digits.
pub fn parse_int(token: &str) -> Result<i32> {
    if token.is_empty() {
        return Err(LabError::EmptyInput);
    }
    let digits = token.strip_prefix('-').unwrap_or(token);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(LabError::NotAnInteger(token.to_string()));
    }
    token
        .parse::<i32>()
        .map_err(|_| LabError::NotAnInteger(token.to_string()))
}

/// Accept a token made of exactly one character.
pub fn parse_char(token: &str) -> Result<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        (None, _) => Err(LabError::EmptyInput),
        _ => Err(LabError::NotACharacter(token.to_string())),
    }
}

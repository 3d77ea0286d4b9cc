use chrono::{DateTime, Local};
use thiserror::Error;

pub const DIGIT_COUNT: usize = 3;
pub const MIN_DIGIT: u8 = 1;
pub const MAX_DIGIT: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(pub u64);

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Un lancer de trois dés. `created_at` est purement informatif.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: RecordId,
    pub numbers: [u8; DIGIT_COUNT],
    pub created_at: DateTime<Local>,
}

impl Record {
    pub fn sum(&self) -> u8 {
        self.numbers.iter().sum()
    }

    pub fn contains(&self, digit: u8) -> bool {
        self.numbers.contains(&digit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Entrez exactement 3 chiffres (reçu {found})")]
    Length { found: usize },

    #[error("Chaque chiffre doit être compris entre 1 et 6 (reçu {value})")]
    Range { value: u32 },
}

/// Ne garde que les chiffres ASCII de la saisie : "1 2 3" et "1-2-3" deviennent "123".
pub fn sanitize_input(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

pub fn validate_digit(value: u32) -> Result<u8, ValidationError> {
    if value < MIN_DIGIT as u32 || value > MAX_DIGIT as u32 {
        return Err(ValidationError::Range { value });
    }
    Ok(value as u8)
}

pub fn validate_numbers(numbers: &[u8]) -> Result<[u8; DIGIT_COUNT], ValidationError> {
    if numbers.len() != DIGIT_COUNT {
        return Err(ValidationError::Length { found: numbers.len() });
    }
    let mut triple = [0u8; DIGIT_COUNT];
    for (slot, &n) in triple.iter_mut().zip(numbers) {
        *slot = validate_digit(n as u32)?;
    }
    Ok(triple)
}

/// Analyse une saisie libre ("123") en triplet validé.
pub fn parse_roll(raw: &str) -> Result<[u8; DIGIT_COUNT], ValidationError> {
    let digits = sanitize_input(raw);
    let count = digits.chars().count();
    if count != DIGIT_COUNT {
        return Err(ValidationError::Length { found: count });
    }

    let mut triple = [0u8; DIGIT_COUNT];
    for (slot, c) in triple.iter_mut().zip(digits.chars()) {
        // sanitize_input garantit des chiffres ASCII
        let value = c.to_digit(10).unwrap_or(0);
        *slot = validate_digit(value)?;
    }
    Ok(triple)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roll_ok() {
        assert_eq!(parse_roll("123").unwrap(), [1, 2, 3]);
        assert_eq!(parse_roll("666").unwrap(), [6, 6, 6]);
    }

    #[test]
    fn test_parse_roll_strips_non_digits() {
        assert_eq!(parse_roll("1 2 3").unwrap(), [1, 2, 3]);
        assert_eq!(parse_roll(" 4-5-6 ").unwrap(), [4, 5, 6]);
    }

    #[test]
    fn test_parse_roll_length_error() {
        assert_eq!(parse_roll("12"), Err(ValidationError::Length { found: 2 }));
        assert_eq!(parse_roll("1234"), Err(ValidationError::Length { found: 4 }));
        assert_eq!(parse_roll(""), Err(ValidationError::Length { found: 0 }));
        assert_eq!(parse_roll("abc"), Err(ValidationError::Length { found: 0 }));
    }

    #[test]
    fn test_parse_roll_range_error() {
        assert_eq!(parse_roll("129"), Err(ValidationError::Range { value: 9 }));
        assert_eq!(parse_roll("012"), Err(ValidationError::Range { value: 0 }));
    }

    #[test]
    fn test_validate_numbers() {
        assert_eq!(validate_numbers(&[1, 6, 3]).unwrap(), [1, 6, 3]);
        assert_eq!(validate_numbers(&[1, 2]), Err(ValidationError::Length { found: 2 }));
        assert_eq!(validate_numbers(&[1, 7, 2]), Err(ValidationError::Range { value: 7 }));
    }

    #[test]
    fn test_validate_digit_bounds() {
        assert!(validate_digit(0).is_err());
        assert_eq!(validate_digit(1).unwrap(), 1);
        assert_eq!(validate_digit(6).unwrap(), 6);
        assert!(validate_digit(7).is_err());
    }

    #[test]
    fn test_record_sum_and_contains() {
        let record = Record {
            id: RecordId(1),
            numbers: [1, 2, 3],
            created_at: Local::now(),
        };
        assert_eq!(record.sum(), 6);
        assert!(record.contains(2));
        assert!(!record.contains(4));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::Length { found: 2 }.to_string(),
            "Entrez exactement 3 chiffres (reçu 2)"
        );
        assert_eq!(
            ValidationError::Range { value: 9 }.to_string(),
            "Chaque chiffre doit être compris entre 1 et 6 (reçu 9)"
        );
    }
}

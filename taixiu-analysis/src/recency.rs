use taixiu_store::models::{Record, MAX_DIGIT, MIN_DIGIT};

/// Nombre de lancers écoulés depuis la dernière apparition de `digit`.
///
/// Un chiffre jamais vu compte comme absent depuis le début : on retourne alors
/// la taille de l'historique (0 pour un historique vide).
pub fn records_since_last_appearance(records: &[Record], digit: u8) -> usize {
    records
        .iter()
        .position(|r| r.contains(digit))
        .unwrap_or(records.len())
}

/// Retards des chiffres 1 à 6, dans l'ordre.
pub fn recency_table(records: &[Record]) -> [usize; MAX_DIGIT as usize] {
    let mut table = [0usize; MAX_DIGIT as usize];
    for digit in MIN_DIGIT..=MAX_DIGIT {
        table[(digit - 1) as usize] = records_since_last_appearance(records, digit);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use taixiu_store::store::RecordStore;

    #[test]
    fn test_empty_store() {
        assert_eq!(records_since_last_appearance(&[], 1), 0);
        assert_eq!(recency_table(&[]), [0; 6]);
    }

    #[test]
    fn test_never_seen_returns_len() {
        let store = RecordStore::from_rolls(&[[1, 2, 3], [1, 1, 2], [3, 3, 3]]).unwrap();
        assert_eq!(records_since_last_appearance(store.records(), 6), 3);
    }

    #[test]
    fn test_most_recent_appearance() {
        let store = RecordStore::from_rolls(&[[1, 2, 3], [4, 1, 2], [5, 5, 5]]).unwrap();
        let records = store.records();
        assert_eq!(records_since_last_appearance(records, 1), 0);
        assert_eq!(records_since_last_appearance(records, 4), 1);
        assert_eq!(records_since_last_appearance(records, 5), 2);
    }

    #[test]
    fn test_recency_table() {
        let store = RecordStore::from_rolls(&[[1, 2, 3], [4, 1, 2], [5, 5, 5]]).unwrap();
        assert_eq!(recency_table(store.records()), [0, 0, 0, 1, 2, 3]);
    }
}

use taixiu_store::models::Record;

use crate::predict::{rank_values, ColumnTallies};

/// Nombre de lancers récents pris en compte par l'histogramme.
pub const HISTORY_WINDOW: usize = 20;

/// Fréquences brutes des valeurs par colonne sur les 20 derniers lancers.
pub fn history_analysis(records: &[Record]) -> ColumnTallies {
    let recent = &records[..records.len().min(HISTORY_WINDOW)];
    std::array::from_fn(|col| rank_values(recent.iter().map(|r| r.numbers[col])))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predict::Tally;
    use taixiu_store::store::{make_test_records, RecordStore};

    #[test]
    fn test_history_empty() {
        let columns = history_analysis(&[]);
        assert!(columns.iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_history_counts() {
        let store = RecordStore::from_rolls(&[[1, 2, 3], [1, 5, 3], [6, 2, 3]]).unwrap();
        let columns = history_analysis(store.records());
        assert_eq!(
            columns[0],
            vec![Tally { value: 1, count: 2 }, Tally { value: 6, count: 1 }]
        );
        assert_eq!(
            columns[1],
            vec![Tally { value: 2, count: 2 }, Tally { value: 5, count: 1 }]
        );
        assert_eq!(columns[2], vec![Tally { value: 3, count: 3 }]);
    }

    #[test]
    fn test_history_limited_to_window() {
        let records = make_test_records(45);
        let columns = history_analysis(&records);
        for col in &columns {
            let total: usize = col.iter().map(|t| t.count).sum();
            assert_eq!(total, HISTORY_WINDOW);
        }
    }

    #[test]
    fn test_history_ignores_older_records() {
        let mut rolls = vec![[1, 1, 1]; HISTORY_WINDOW];
        rolls.push([6, 6, 6]);
        let store = RecordStore::from_rolls(&rolls).unwrap();
        let columns = history_analysis(store.records());
        assert_eq!(columns[0], vec![Tally { value: 1, count: 20 }]);
    }
}

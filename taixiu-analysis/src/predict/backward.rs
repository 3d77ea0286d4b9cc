use taixiu_store::models::Record;

use super::{predict_successors, Prediction};

/// Prédiction « vers le présent » : après chaque réapparition de la valeur
/// courante dans une colonne, quelle valeur est sortie au lancer suivant ?
///
/// records[0] = le plus récent. `window` limite l'historique (records[1..]) à ses
/// `window` lancers les plus récents ; `None` = historique complet.
pub fn next_number_prediction(records: &[Record], window: Option<usize>) -> Prediction {
    predict_successors(records, window, |i, _| i.checked_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predict::Tally;
    use taixiu_store::store::RecordStore;

    #[test]
    fn test_backward_needs_two_records() {
        let empty = next_number_prediction(&[], None);
        assert!(empty.latest.is_none());
        assert!(empty.columns.iter().all(|c| c.is_empty()));

        let store = RecordStore::from_rolls(&[[1, 2, 3]]).unwrap();
        let single = next_number_prediction(store.records(), None);
        assert_eq!(single.latest.as_ref().map(|r| r.numbers), Some([1, 2, 3]));
        assert!(single.columns.iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_backward_looks_toward_recent() {
        // history (col 0) = [2, 1, 3, 1, 4], valeur courante = 1
        let store = RecordStore::from_rolls(&[
            [1, 6, 6],
            [2, 6, 6],
            [1, 6, 6],
            [3, 6, 6],
            [1, 6, 6],
            [4, 6, 6],
        ])
        .unwrap();
        let pred = next_number_prediction(store.records(), None);
        assert_eq!(
            pred.columns[0],
            vec![Tally { value: 2, count: 1 }, Tally { value: 3, count: 1 }]
        );
        // colonne constante : chaque 6 de l'historique sauf le premier a un successeur 6
        assert_eq!(pred.columns[1], vec![Tally { value: 6, count: 4 }]);
    }

    #[test]
    fn test_backward_skips_newest_history_match() {
        let store = RecordStore::from_rolls(&[[5, 5, 5], [5, 5, 5], [2, 2, 2]]).unwrap();
        let pred = next_number_prediction(store.records(), None);
        assert!(pred.columns.iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_backward_window() {
        let store = RecordStore::from_rolls(&[
            [1, 1, 1],
            [2, 2, 2],
            [1, 1, 1],
            [3, 3, 3],
            [1, 1, 1],
        ])
        .unwrap();
        let records = store.records();

        let full = next_number_prediction(records, None);
        assert_eq!(
            full.columns[0],
            vec![Tally { value: 2, count: 1 }, Tally { value: 3, count: 1 }]
        );

        let windowed = next_number_prediction(records, Some(2));
        assert_eq!(windowed.columns[0], vec![Tally { value: 2, count: 1 }]);

        let zero = next_number_prediction(records, Some(0));
        assert!(zero.columns[0].is_empty());
    }

    #[test]
    fn test_backward_counts_sorted() {
        // history (col 2) = [4, 3, 4, 3, 5, 3], valeur courante = 3
        // successeurs : history[0]=4, history[2]=4, history[4]=5
        let store = RecordStore::from_rolls(&[
            [1, 1, 3],
            [1, 1, 4],
            [1, 1, 3],
            [1, 1, 4],
            [1, 1, 3],
            [1, 1, 5],
            [1, 1, 3],
        ])
        .unwrap();
        let pred = next_number_prediction(store.records(), None);
        assert_eq!(
            pred.columns[2],
            vec![Tally { value: 4, count: 2 }, Tally { value: 5, count: 1 }]
        );
    }
}

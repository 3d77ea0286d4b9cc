pub mod backward;
pub mod forward;

use taixiu_store::models::{Record, DIGIT_COUNT, MAX_DIGIT, MIN_DIGIT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub value: u8,
    pub count: usize,
}

/// Un classement par colonne. Les colonnes n'ont pas forcément la même longueur.
pub type ColumnTallies = [Vec<Tally>; DIGIT_COUNT];

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Lancer de référence (le plus récent), absent si l'historique est vide.
    pub latest: Option<Record>,
    pub columns: ColumnTallies,
}

pub fn empty_columns() -> ColumnTallies {
    std::array::from_fn(|_| Vec::new())
}

/// Compte les valeurs 1 à 6 et les classe par fréquence décroissante.
///
/// Le tri est stable : à égalité, les valeurs restent en ordre croissant.
/// Seules les valeurs observées apparaissent.
pub fn rank_values(values: impl IntoIterator<Item = u8>) -> Vec<Tally> {
    let mut counts = [0usize; MAX_DIGIT as usize];
    for v in values {
        if (MIN_DIGIT..=MAX_DIGIT).contains(&v) {
            counts[(v - 1) as usize] += 1;
        }
    }

    let mut ranked: Vec<Tally> = counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(i, &count)| Tally {
            value: i as u8 + 1,
            count,
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

/// Recherche commune aux deux prédicteurs.
///
/// history = records[1..] (limité à `window` lancers si fourni). Pour chaque
/// colonne, chaque index `i` de l'historique portant la valeur courante du
/// dernier lancer donne un successeur `history[successor_of(i, len)]`.
pub(crate) fn predict_successors<F>(
    records: &[Record],
    window: Option<usize>,
    successor_of: F,
) -> Prediction
where
    F: Fn(usize, usize) -> Option<usize>,
{
    if records.len() < 2 {
        return Prediction {
            latest: records.first().cloned(),
            columns: empty_columns(),
        };
    }

    let latest = &records[0];
    let mut history = &records[1..];
    if let Some(window) = window {
        history = &history[..window.min(history.len())];
    }

    let columns = std::array::from_fn(|col| {
        let current = latest.numbers[col];
        rank_values(
            history
                .iter()
                .enumerate()
                .filter(|(_, r)| r.numbers[col] == current)
                .filter_map(|(i, _)| successor_of(i, history.len()))
                .map(|j| history[j].numbers[col]),
        )
    });

    Prediction {
        latest: Some(latest.clone()),
        columns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taixiu_store::store::make_test_records;

    #[test]
    fn test_rank_values_sorted_desc() {
        let ranked = rank_values([3, 1, 3, 6, 3, 1]);
        assert_eq!(
            ranked,
            vec![
                Tally { value: 3, count: 3 },
                Tally { value: 1, count: 2 },
                Tally { value: 6, count: 1 },
            ]
        );
    }

    #[test]
    fn test_rank_values_ties_ascending() {
        let ranked = rank_values([5, 2, 4]);
        let values: Vec<u8> = ranked.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![2, 4, 5]);
    }

    #[test]
    fn test_rank_values_empty() {
        assert!(rank_values(std::iter::empty()).is_empty());
    }

    #[test]
    fn test_predict_successors_deterministic() {
        let records = make_test_records(50);
        let a = predict_successors(&records, None, |i, _| i.checked_sub(1));
        let b = predict_successors(&records, None, |i, _| i.checked_sub(1));
        assert_eq!(a, b);
    }
}

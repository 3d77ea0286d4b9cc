use taixiu_store::models::Record;

/// Étiquette affichée quand il n'y a aucun lancer.
pub const NO_STREAK_LABEL: &str = "None";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Streak<L> {
    pub label: Option<L>,
    pub count: usize,
}

impl<L: std::fmt::Display> Streak<L> {
    pub fn label_name(&self) -> String {
        match &self.label {
            Some(label) => label.to_string(),
            None => NO_STREAK_LABEL.to_string(),
        }
    }
}

/// Série en cours : lancers consécutifs depuis le plus récent partageant la même étiquette.
pub fn current_streak<L, F>(records: &[Record], classify: F) -> Streak<L>
where
    L: PartialEq,
    F: Fn(u8) -> L,
{
    let Some(first) = records.first() else {
        return Streak { label: None, count: 0 };
    };
    let count = trailing_streak_from(records, 0, &classify);
    Streak {
        label: Some(classify(first.sum())),
        count,
    }
}

/// Longueur de la série ancrée à `index`, vers les lancers plus anciens, ancre comprise.
/// Retourne 0 si `index` est hors de la liste.
pub fn trailing_streak_from<L, F>(records: &[Record], index: usize, classify: F) -> usize
where
    L: PartialEq,
    F: Fn(u8) -> L,
{
    let Some(anchor) = records.get(index) else {
        return 0;
    };
    let label = classify(anchor.sum());
    1 + records[index + 1..]
        .iter()
        .take_while(|r| classify(r.sum()) == label)
        .count()
}

/// `trailing_streak_from` pour chaque index, en une seule passe depuis le plus ancien.
pub fn trailing_runs<L, F>(records: &[Record], classify: F) -> Vec<usize>
where
    L: PartialEq,
    F: Fn(u8) -> L,
{
    let labels: Vec<L> = records.iter().map(|r| classify(r.sum())).collect();
    let mut runs = vec![0usize; labels.len()];

    for i in (0..labels.len()).rev() {
        runs[i] = if i + 1 < labels.len() && labels[i] == labels[i + 1] {
            runs[i + 1] + 1
        } else {
            1
        };
    }

    runs
}

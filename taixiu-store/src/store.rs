use chrono::Local;
use tracing::{debug, warn};

use crate::models::{
    parse_roll, validate_digit, validate_numbers, Record, RecordId, ValidationError, DIGIT_COUNT,
};

/// Nombre de lancers conservés par défaut lors d'une purge.
pub const DEFAULT_KEEP: usize = 20;

/// Liste des lancers de la session, en mémoire uniquement.
///
/// records[0] = lancer le plus récent. Les insertions se font toujours en tête,
/// les modifications ne touchent jamais à l'ordre ni aux identifiants.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    next_id: u64,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construit un store à partir de triplets donnés du plus récent au plus ancien.
    pub fn from_rolls(rolls: &[[u8; DIGIT_COUNT]]) -> Result<Self, ValidationError> {
        let mut store = Self::new();
        for roll in rolls.iter().rev() {
            store.submit_numbers(roll)?;
        }
        Ok(store)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Saisie libre : les caractères non numériques sont ignorés avant validation.
    pub fn submit(&mut self, raw: &str) -> Result<Record, ValidationError> {
        let numbers = parse_roll(raw)
            .inspect_err(|e| warn!(input = raw, error = %e, "saisie rejetée"))?;
        Ok(self.insert_valid(numbers))
    }

    pub fn submit_numbers(&mut self, numbers: &[u8]) -> Result<Record, ValidationError> {
        let numbers = validate_numbers(numbers)
            .inspect_err(|e| warn!(?numbers, error = %e, "triplet rejeté"))?;
        Ok(self.insert_valid(numbers))
    }

    /// Modifie un chiffre d'un lancer existant.
    ///
    /// La valeur est validée en premier : une valeur hors limites est rejetée même
    /// si l'identifiant est inconnu. Retourne `Ok(false)` (sans effet) pour un
    /// identifiant ou une colonne inexistants.
    pub fn edit_digit(
        &mut self,
        id: RecordId,
        column: usize,
        value: u32,
    ) -> Result<bool, ValidationError> {
        let digit = validate_digit(value)
            .inspect_err(|e| warn!(%id, column, error = %e, "modification rejetée"))?;

        if column >= DIGIT_COUNT {
            return Ok(false);
        }
        let Some(record) = self.records.iter_mut().find(|r| r.id == id) else {
            return Ok(false);
        };

        let previous = record.numbers[column];
        record.numbers[column] = digit;
        debug!(%id, column, previous, digit, "chiffre modifié");
        Ok(true)
    }

    /// Ne garde que les `keep` lancers les plus récents. Retourne le nombre de lancers supprimés.
    pub fn truncate_history(&mut self, keep: usize) -> usize {
        let removed = self.records.len().saturating_sub(keep);
        self.records.truncate(keep);
        debug!(keep, removed, "historique tronqué");
        removed
    }

    /// Vide le store. Les identifiants déjà attribués ne sont jamais réutilisés.
    pub fn clear(&mut self) {
        debug!(removed = self.records.len(), "store réinitialisé");
        self.records.clear();
    }

    fn insert_valid(&mut self, numbers: [u8; DIGIT_COUNT]) -> Record {
        self.next_id += 1;
        let record = Record {
            id: RecordId(self.next_id),
            numbers,
            created_at: Local::now(),
        };
        self.records.insert(0, record.clone());
        debug!(id = %record.id, ?numbers, total = self.records.len(), "lancer ajouté");
        record
    }
}

/// Jeu de lancers déterministe pour les tests. records[0] = le plus récent.
pub fn make_test_records(n: usize) -> Vec<Record> {
    let mut store = RecordStore::new();
    for i in (0..n).rev() {
        store.insert_valid([
            (i % 6) as u8 + 1,
            ((i * 2 + 1) % 6) as u8 + 1,
            ((i * 5 + 3) % 6) as u8 + 1,
        ]);
    }
    store.records
}

use taixiu_store::models::Record;

use super::{predict_successors, Prediction};

/// Prédiction « vers le passé » : pour chaque réapparition de la valeur courante,
/// la valeur du lancer qui la précédait. Toujours sur l'historique complet.
pub fn prediction_analysis(records: &[Record]) -> Prediction {
    predict_successors(records, None, |i, len| (i + 1 < len).then_some(i + 1))
}

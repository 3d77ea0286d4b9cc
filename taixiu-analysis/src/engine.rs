use taixiu_store::models::{Record, MAX_DIGIT};
use tracing::debug;

use crate::classify::{classify_parity, classify_range, HighLow, Parity};
use crate::config::EngineConfig;
use crate::histogram::history_analysis;
use crate::predict::backward::next_number_prediction;
use crate::predict::forward::prediction_analysis;
use crate::predict::{ColumnTallies, Prediction};
use crate::recency::recency_table;
use crate::streak::{current_streak, trailing_runs, Streak};

/// Étiquettes et longueurs de série d'une ligne de l'historique.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowAnnotation {
    pub sum: u8,
    pub range: HighLow,
    pub range_run: usize,
    pub parity: Parity,
    pub parity_run: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub recency: [usize; MAX_DIGIT as usize],
    pub range_streak: Streak<HighLow>,
    pub parity_streak: Streak<Parity>,
}

/// Point d'entrée unique des dérivations, paramétré par `EngineConfig`.
/// Sans état propre : chaque appel travaille sur la liste fournie.
#[derive(Debug, Clone, Default)]
pub struct AnalysisEngine {
    config: EngineConfig,
}

impl AnalysisEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn summary(&self, records: &[Record]) -> Summary {
        Summary {
            recency: recency_table(records),
            range_streak: current_streak(records, classify_range),
            parity_streak: current_streak(records, classify_parity),
        }
    }

    /// Annotation de chaque ligne, limitée aux `streak_scan_cap` lancers les plus
    /// récents si configuré. Les séries ne dépassent pas la limite.
    pub fn annotate(&self, records: &[Record]) -> Vec<RowAnnotation> {
        let scanned = match self.config.streak_scan_cap {
            Some(cap) => &records[..cap.min(records.len())],
            None => records,
        };
        debug!(rows = scanned.len(), total = records.len(), "annotation des séries");

        let range_runs = trailing_runs(scanned, classify_range);
        let parity_runs = trailing_runs(scanned, classify_parity);

        scanned
            .iter()
            .zip(range_runs.into_iter().zip(parity_runs))
            .map(|(record, (range_run, parity_run))| {
                let sum = record.sum();
                RowAnnotation {
                    sum,
                    range: classify_range(sum),
                    range_run,
                    parity: classify_parity(sum),
                    parity_run,
                }
            })
            .collect()
    }

    pub fn backward_prediction(&self, records: &[Record]) -> Prediction {
        next_number_prediction(records, self.config.backward_window)
    }

    pub fn forward_prediction(&self, records: &[Record]) -> Prediction {
        prediction_analysis(records)
    }

    pub fn frequencies(&self, records: &[Record]) -> ColumnTallies {
        history_analysis(records)
    }
}

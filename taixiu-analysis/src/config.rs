use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Politiques de fenêtrage du moteur d'analyse.
///
/// Les seuils de classification ne sont pas configurables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Nombre maximal de lancers d'historique pour la prédiction vers le présent.
    /// `None` = historique complet, comme la prédiction vers le passé.
    pub backward_window: Option<usize>,
    /// Nombre maximal de lancers annotés (séries par ligne). `None` = tous.
    pub streak_scan_cap: Option<usize>,
}

impl EngineConfig {
    /// Applique les valeurs passées en ligne de commande par-dessus celles du fichier.
    pub fn with_overrides(mut self, backward_window: Option<usize>, streak_scan_cap: Option<usize>) -> Self {
        if backward_window.is_some() {
            self.backward_window = backward_window;
        }
        if streak_scan_cap.is_some() {
            self.streak_scan_cap = streak_scan_cap;
        }
        self
    }
}

pub fn save_config(config: &EngineConfig, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json)
        .with_context(|| format!("Impossible d'écrire la configuration {:?}", path))?;
    Ok(())
}

pub fn load_config(path: &Path) -> Result<EngineConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire la configuration {:?}", path))?;
    let config: EngineConfig = serde_json::from_str(&json)
        .with_context(|| format!("Configuration invalide {:?}", path))?;
    Ok(config)
}

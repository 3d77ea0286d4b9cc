use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::debug;

use taixiu_analysis::engine::AnalysisEngine;
use taixiu_analysis::histogram::HISTORY_WINDOW;
use taixiu_store::models::{sanitize_input, DIGIT_COUNT};
use taixiu_store::store::{RecordStore, DEFAULT_KEEP};

use crate::display;

#[derive(Debug, PartialEq)]
enum InteractiveCommand {
    Add(String),
    Edit { row: usize, column: usize, value: String },
    History(Option<usize>),
    Stats,
    Predict,
    Forward,
    Frequencies,
    Truncate,
    Reset,
    Config,
    Help,
    Quit,
}

#[derive(Debug, PartialEq)]
enum Flow {
    Continue,
    Quit,
}

/// Une ligne faite uniquement de chiffres et de séparateurs est une saisie de lancer.
fn looks_like_roll(input: &str) -> bool {
    !sanitize_input(input).is_empty()
        && input
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || c == '-' || c == ',')
}

fn parse_command(input: &str) -> Option<InteractiveCommand> {
    let input = input.trim();
    if looks_like_roll(input) {
        return Some(InteractiveCommand::Add(input.to_string()));
    }

    let mut parts = input.split_whitespace();
    let keyword = parts.next()?.to_lowercase();
    let args: Vec<&str> = parts.collect();

    match keyword.as_str() {
        "ajouter" | "add" | "a" => Some(InteractiveCommand::Add(args.join(" "))),
        "modifier" | "edit" | "e" => match args.as_slice() {
            [row, column, value] => Some(InteractiveCommand::Edit {
                row: row.parse().ok()?,
                column: column.parse().ok()?,
                value: value.to_string(),
            }),
            _ => None,
        },
        "historique" | "history" | "hist" | "h" => match args.first() {
            Some(n) => Some(InteractiveCommand::History(Some(n.parse().ok()?))),
            None => Some(InteractiveCommand::History(None)),
        },
        "stats" | "total" => Some(InteractiveCommand::Stats),
        "predire" | "prédire" | "predict" | "pred" => Some(InteractiveCommand::Predict),
        "passe" | "passé" | "forward" | "fwd" => Some(InteractiveCommand::Forward),
        "frequences" | "fréquences" | "freq" => Some(InteractiveCommand::Frequencies),
        "purger" | "truncate" => Some(InteractiveCommand::Truncate),
        "vider" | "reset" => Some(InteractiveCommand::Reset),
        "config" => Some(InteractiveCommand::Config),
        "aide" | "help" | "?" => Some(InteractiveCommand::Help),
        "quitter" | "quit" | "q" | "exit" => Some(InteractiveCommand::Quit),
        _ => None,
    }
}

fn display_menu() {
    println!();
    println!("── Commandes ──");
    println!("  123                  Ajouter un lancer (3 chiffres de 1 à 6)");
    println!("  modifier L C V       Remplacer le chiffre de la colonne C (1-3) de la ligne L par V");
    println!("  historique [n]       Derniers lancers avec séries Tai/Xiu et Even/Odd");
    println!("  stats                Retards des chiffres et séries en cours");
    println!("  predire              Prochain numéro (vers le présent)");
    println!("  passe                Prochain numéro (vers le passé)");
    println!("  freq                 Fréquences sur les {} derniers lancers", HISTORY_WINDOW);
    println!("  purger               Ne garder que les {} derniers lancers", DEFAULT_KEEP);
    println!("  vider                Supprimer tous les lancers");
    println!("  config               Paramètres du moteur");
    println!("  quitter              Quitter");
    println!();
}

/// Lit une ligne. `None` en fin d'entrée (Ctrl+D).
fn read_line(msg: &str) -> Result<Option<String>> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("Erreur de lecture")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

fn confirm_on_stdin(msg: &str) -> Result<bool> {
    let answer = read_line(&format!("{} (o/n) : ", msg))?;
    Ok(matches!(answer.as_deref().map(str::to_lowercase).as_deref(), Some("o" | "oui")))
}

/// Session de saisie : le store de la session et le moteur qui l'analyse.
pub struct Session {
    store: RecordStore,
    engine: AnalysisEngine,
}

impl Session {
    pub fn new(engine: AnalysisEngine) -> Self {
        Self {
            store: RecordStore::new(),
            engine,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    fn execute<C>(&mut self, command: InteractiveCommand, confirm: C) -> Result<Flow>
    where
        C: FnOnce(&str) -> Result<bool>,
    {
        debug!(?command, "commande");
        match command {
            InteractiveCommand::Add(raw) => {
                let record = self.store.submit(&raw)?;
                println!(
                    "Lancer {} ajouté : {}",
                    record.id,
                    record.numbers.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(" - ")
                );
            }
            InteractiveCommand::Edit { row, column, value } => self.edit(row, column, &value)?,
            InteractiveCommand::History(last) => self.show_history(last),
            InteractiveCommand::Stats => self.show_stats(),
            InteractiveCommand::Predict => {
                let prediction = self.engine.backward_prediction(self.store.records());
                display::display_prediction(&display::backward_title(self.engine.config()), &prediction);
            }
            InteractiveCommand::Forward => {
                let prediction = self.engine.forward_prediction(self.store.records());
                display::display_prediction("Prochain numéro (vers le passé)", &prediction);
            }
            InteractiveCommand::Frequencies => {
                let columns = self.engine.frequencies(self.store.records());
                display::display_frequencies(&columns, HISTORY_WINDOW.min(self.store.len()));
            }
            InteractiveCommand::Truncate => {
                if self.store.len() <= DEFAULT_KEEP {
                    println!("Rien à purger ({} lancers).", self.store.len());
                } else if confirm(&format!(
                    "Supprimer les {} lancers les plus anciens ?",
                    self.store.len() - DEFAULT_KEEP
                ))? {
                    let removed = self.store.truncate_history(DEFAULT_KEEP);
                    println!("{} lancers supprimés.", removed);
                } else {
                    println!("Purge annulée.");
                }
            }
            InteractiveCommand::Reset => {
                if confirm("Supprimer tous les lancers ?")? {
                    self.store.clear();
                    println!("Historique vidé.");
                } else {
                    println!("Opération annulée.");
                }
            }
            InteractiveCommand::Config => display::display_config(self.engine.config()),
            InteractiveCommand::Help => display_menu(),
            InteractiveCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// `row` et `column` sont ceux affichés (à partir de 1).
    fn edit(&mut self, row: usize, column: usize, value: &str) -> Result<()> {
        let value: u32 = value
            .trim()
            .parse()
            .with_context(|| format!("Valeur invalide : '{}'", value))?;
        let Some(record) = row.checked_sub(1).and_then(|i| self.store.records().get(i)) else {
            println!("Ligne {} inexistante.", row);
            return Ok(());
        };
        let id = record.id;

        let column_index = column.checked_sub(1).unwrap_or(DIGIT_COUNT);
        if self.store.edit_digit(id, column_index, value)? {
            println!("Lancer {} modifié.", id);
        } else {
            println!("Colonne {} inexistante (1 à {}).", column, DIGIT_COUNT);
        }
        Ok(())
    }

    pub fn show_history(&self, last: Option<usize>) {
        let records = self.store.records();
        let rows = self.engine.annotate(records);
        display::display_records(records, &rows, last);
    }

    pub fn show_stats(&self) {
        if self.store.is_empty() {
            println!("Aucun lancer saisi.");
            return;
        }
        display::display_summary(&self.engine.summary(self.store.records()));
    }

    /// Affiche toutes les vues une fois.
    pub fn show_all(&self) {
        self.show_history(None);
        self.show_stats();
        let records = self.store.records();
        display::display_prediction(
            &display::backward_title(self.engine.config()),
            &self.engine.backward_prediction(records),
        );
        display::display_prediction("Prochain numéro (vers le passé)", &self.engine.forward_prediction(records));
        display::display_frequencies(&self.engine.frequencies(records), HISTORY_WINDOW.min(records.len()));
    }

    pub fn submit(&mut self, raw: &str) -> Result<()> {
        self.store
            .submit(raw)
            .with_context(|| format!("Lancer refusé : '{}'", raw))?;
        Ok(())
    }
}

pub fn run_interactive(engine: AnalysisEngine) -> Result<()> {
    println!("Suivi Tai/Xiu : saisissez un lancer (ex: 123) ou 'aide'.");
    let mut session = Session::new(engine);

    loop {
        let input = match read_line("> ")? {
            Some(s) => s,
            None => break,
        };

        if input.is_empty() {
            continue;
        }

        match parse_command(&input) {
            Some(command) => match session.execute(command, confirm_on_stdin) {
                Ok(Flow::Quit) => {
                    println!("Au revoir !");
                    break;
                }
                Ok(Flow::Continue) => {}
                Err(e) => println!("Erreur: {e:#}"),
            },
            None => {
                println!("Commande inconnue : '{}'. Tapez 'aide' pour la liste des commandes.", input);
            }
        }
    }

    Ok(())
}

mod display;
mod interactive;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use taixiu_analysis::config::{load_config, save_config, EngineConfig};
use taixiu_analysis::engine::AnalysisEngine;

use crate::interactive::{run_interactive, Session};

#[derive(Parser)]
#[command(name = "taixiu", about = "Suivi et statistiques des lancers Tai/Xiu")]
struct Cli {
    /// Fichier de configuration JSON du moteur
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Fenêtre d'historique de la prédiction vers le présent (défaut : illimitée)
    #[arg(long, global = true)]
    backward_window: Option<usize>,

    /// Nombre maximal de lancers annotés dans l'historique (défaut : tous)
    #[arg(long, global = true)]
    streak_cap: Option<usize>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Mode interactif (défaut)
    Interactive,

    /// Saisir une série de lancers et afficher toutes les analyses
    Demo {
        /// Lancers dans l'ordre de saisie, du plus ancien au plus récent (ex: 123 456)
        rolls: Vec<String>,
    },

    /// Écrire la configuration active dans un fichier JSON
    InitConfig {
        /// Fichier de sortie
        #[arg(default_value = "taixiu.json")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")))
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => EngineConfig::default(),
    }
    .with_overrides(cli.backward_window, cli.streak_cap);
    info!(?config, "configuration du moteur");

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => run_interactive(AnalysisEngine::new(config)),
        Command::Demo { rolls } => cmd_demo(AnalysisEngine::new(config), &rolls),
        Command::InitConfig { output } => cmd_init_config(&config, &output),
    }
}

fn cmd_demo(engine: AnalysisEngine, rolls: &[String]) -> Result<()> {
    let mut session = Session::new(engine);
    for roll in rolls {
        session.submit(roll)?;
    }
    println!("{} lancers saisis.", session.store().len());
    session.show_all();
    Ok(())
}

fn cmd_init_config(config: &EngineConfig, output: &Path) -> Result<()> {
    save_config(config, output)
        .with_context(|| format!("Échec de l'écriture de {:?}", output))?;
    println!("Configuration écrite dans : {}", output.display());
    Ok(())
}

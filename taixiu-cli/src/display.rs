use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use taixiu_analysis::classify::HighLow;
use taixiu_analysis::config::EngineConfig;
use taixiu_analysis::engine::{RowAnnotation, Summary};
use taixiu_analysis::predict::{ColumnTallies, Prediction, Tally};
use taixiu_analysis::streak::NO_STREAK_LABEL;
use taixiu_store::models::{Record, DIGIT_COUNT};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn range_color(range: HighLow) -> Color {
    match range {
        HighLow::Low => Color::Cyan,
        HighLow::High => Color::Red,
    }
}

pub fn display_records(records: &[Record], rows: &[RowAnnotation], last: Option<usize>) {
    if records.is_empty() {
        println!("Aucun lancer à afficher.");
        return;
    }

    let mut table = new_table();
    table.set_header(vec!["#", "Num1", "Num2", "Num3", "Somme", "Tai/Xiu", "Even/Odd"]);

    let shown = last.unwrap_or(records.len()).min(records.len());
    for (i, record) in records.iter().take(shown).enumerate() {
        let mut cells = vec![Cell::new(i + 1)];
        cells.extend(record.numbers.iter().map(|n| Cell::new(n)));

        match rows.get(i) {
            Some(row) => {
                cells.push(Cell::new(row.sum));
                cells.push(
                    Cell::new(format!("{} ({} fois)", row.range.local_name(), row.range_run))
                        .fg(range_color(row.range)),
                );
                cells.push(Cell::new(format!("{} ({} fois)", row.parity, row.parity_run)));
            }
            // au-delà de la limite d'annotation
            None => {
                cells.push(Cell::new(record.sum()));
                cells.push(Cell::new("—"));
                cells.push(Cell::new("—"));
            }
        }
        table.add_row(cells);
    }

    println!("{table}");
    if shown < records.len() {
        println!("({} lancers plus anciens non affichés)", records.len() - shown);
    }
}

pub fn display_summary(summary: &Summary) {
    println!("\n── Retards (lancers depuis la dernière apparition) ──");
    let mut table = new_table();
    table.set_header(vec!["1", "2", "3", "4", "5", "6"]);
    table.add_row(summary.recency.iter().map(|r| r.to_string()).collect::<Vec<_>>());
    println!("{table}");

    println!("\n── Séries en cours ──");
    let range_label = summary
        .range_streak
        .label
        .map(|l| l.local_name())
        .unwrap_or(NO_STREAK_LABEL);
    let mut table = new_table();
    table.set_header(vec!["Tai/Xiu", "Even/Odd"]);
    table.add_row(vec![
        format!("{} ({} fois)", range_label, summary.range_streak.count),
        format!(
            "{} ({} fois)",
            summary.parity_streak.label_name(),
            summary.parity_streak.count
        ),
    ]);
    println!("{table}");
}

/// Aligne les colonnes de longueurs différentes sur la plus longue, avec au moins une ligne.
pub fn pad_columns(columns: &ColumnTallies) -> Vec<[Option<Tally>; DIGIT_COUNT]> {
    let height = columns.iter().map(Vec::len).max().unwrap_or(0).max(1);
    (0..height)
        .map(|row| std::array::from_fn(|col| columns[col].get(row).copied()))
        .collect()
}

fn tally_cells(columns: &ColumnTallies) -> Vec<Vec<String>> {
    pad_columns(columns)
        .iter()
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, cell)| match cell {
                    Some(t) => format!("{} ({})", t.value, t.count),
                    None if row == 0 && columns[col].is_empty() => "N/A".to_string(),
                    None => String::new(),
                })
                .collect()
        })
        .collect()
}

pub fn display_prediction(title: &str, prediction: &Prediction) {
    println!("\n🎯 {title}\n");

    let header: Vec<String> = match &prediction.latest {
        Some(latest) => latest.numbers.iter().map(|n| n.to_string()).collect(),
        None => vec!["-".to_string(); DIGIT_COUNT],
    };

    let mut table = new_table();
    table.set_header(header);
    for row in tally_cells(&prediction.columns) {
        table.add_row(row);
    }
    println!("{table}");
}

pub fn display_frequencies(columns: &ColumnTallies, window: usize) {
    println!("\n📊 Fréquences sur les {} derniers lancers\n", window);

    let mut table = new_table();
    table.set_header(vec!["Num1", "Num2", "Num3"]);
    for row in tally_cells(columns) {
        table.add_row(row);
    }
    println!("{table}");
}

fn describe_limit(limit: Option<usize>) -> String {
    match limit {
        Some(n) => format!("{} lancers", n),
        None => "illimitée".to_string(),
    }
}

pub fn backward_title(config: &EngineConfig) -> String {
    format!(
        "Prochain numéro (vers le présent, fenêtre {})",
        describe_limit(config.backward_window)
    )
}

pub fn display_config(config: &EngineConfig) {
    let mut table = new_table();
    table.set_header(vec!["Paramètre", "Valeur"]);
    table.add_row(vec![
        "Fenêtre de prédiction".to_string(),
        describe_limit(config.backward_window),
    ]);
    table.add_row(vec![
        "Limite d'annotation des séries".to_string(),
        describe_limit(config.streak_scan_cap),
    ]);
    println!("{table}");
}

#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use chrono::Utc;
use clap::{ArgGroup, Parser, Subcommand};
use rota::{
    calendar, config::load_config_from_file, io, model::RosterTable, scheduler,
    storage::{JsonStorage, RosterStore},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de génération de rotation (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON du planning enregistré
    #[arg(long, global = true, default_value = "roster.json")]
    table: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Générer un planning complet (remplace le précédent)
    Generate {
        /// Config JSON `{staff, tasks, startDate, weeks}`
        #[arg(long)]
        config: String,
        /// Affiche sans enregistrer, pour relecture
        #[arg(long)]
        dry_run: bool,
    },

    /// Afficher le planning enregistré
    Show,

    /// Exporter le planning enregistré
    #[command(group(ArgGroup::new("target").required(true).multiple(true).args(["ics", "csv", "json"])))]
    Export {
        #[arg(long)]
        ics: Option<String>,
        #[arg(long)]
        csv: Option<String>,
        #[arg(long)]
        json: Option<String>,
    },

    /// Vérifier les doubles affectations
    Check {
        /// Export CSV des conflits (optionnel)
        #[arg(long)]
        report: Option<String>,
    },

    /// Charge par personne et par tâche
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.table);

    let code = match cli.cmd {
        Commands::Generate { config, dry_run } => {
            let config = load_config_from_file(&config)?;
            // en cas d'erreur, rien n'est écrit : l'ancien planning reste en place
            let table = scheduler::generate(&config)?;
            if dry_run {
                print_table(&table);
            } else {
                storage.write_roster_table(&table)?;
                println!(
                    "Roster generated: {} assignment(s) over {} day(s) -> {}",
                    table.len(),
                    table.dates().count(),
                    storage.path().display()
                );
            }
            0
        }
        Commands::Show => {
            let table = load_table(&storage)?;
            print_table(&table);
            0
        }
        Commands::Export { ics, csv, json } => {
            let table = load_table(&storage)?;
            if let Some(path) = ics {
                calendar::export_ics(path, &table, Utc::now())?;
            }
            if let Some(path) = csv {
                io::export_rows_csv(path, &table)?;
            }
            if let Some(path) = json {
                io::export_table_json(path, &table)?;
            }
            0
        }
        Commands::Check { report } => {
            let table = load_table(&storage)?;
            let conflicts = scheduler::detect_conflicts(&table);
            if conflicts.is_empty() {
                println!("OK: no conflicts");
                0
            } else {
                eprintln!("Found {} conflict(s)", conflicts.len());
                if let Some(path) = report {
                    let mut w = csv::Writer::from_path(path)?;
                    w.write_record(["date", "kind", "staff_id", "task_a", "task_b"])?;
                    for c in &conflicts {
                        let date = c.date.format("%Y-%m-%d").to_string();
                        w.write_record([
                            date.as_str(),
                            c.kind.as_str(),
                            c.staff.as_ref().map_or("", |s| s.as_str()),
                            c.task_a.as_str(),
                            c.task_b.as_str(),
                        ])?;
                    }
                    w.flush()?;
                }
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
        Commands::Stats => {
            let table = load_table(&storage)?;
            for load in scheduler::staff_load(&table) {
                let detail = load
                    .per_task
                    .iter()
                    .map(|(task, n)| format!("{task}={n}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("{} | {} | {}", load.staff, load.total, detail);
            }
            0
        }
    };

    std::process::exit(code);
}

fn load_table(storage: &JsonStorage) -> Result<RosterTable> {
    storage
        .read_roster_table()?
        .with_context(|| format!("no roster found at {}", storage.path().display()))
}

fn print_table(table: &RosterTable) {
    for a in table.assignments() {
        println!("{} | {} | {}", a.date.format("%Y-%m-%d"), a.task, a.staff);
    }
}

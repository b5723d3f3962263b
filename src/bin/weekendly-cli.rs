#![forbid(unsafe_code)]
use anyhow::{bail, Result};
use chrono::{Local, Utc};
use clap::{Parser, Subcommand};
use weekendly::{
    derive_long_weekends, io,
    model::ActivityId,
    render::{prepare_summary, TextPlan},
    schedule::{ActivityPatch, Planner},
    storage::{JsonStorage, Storage, DEFAULT_STORE},
    FeedClient, Theme,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de planification de week-end (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON d'instantané
    #[arg(long, global = true, default_value = DEFAULT_STORE)]
    store: String,

    /// CSV d'activités supplémentaires pour cette session
    #[arg(long, global = true)]
    activities: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Planifier une activité du catalogue sur un jour
    Add {
        #[arg(long)]
        id: String,
        #[arg(long)]
        day: String,
    },

    /// Retirer une activité d'un jour
    Remove {
        #[arg(long)]
        id: String,
        #[arg(long)]
        day: String,
    },

    /// Glisser-déposer : réordonner dans un jour ou déplacer entre jours
    Move {
        /// Activité déplacée
        #[arg(long)]
        id: String,
        /// Cible du dépôt : une autre activité, ou un jour pour déposer en fin
        #[arg(long)]
        over: String,
    },

    /// Poser un tag « vibe » sur une activité planifiée
    Vibe {
        #[arg(long)]
        id: String,
        #[arg(long)]
        day: String,
        #[arg(long)]
        tag: String,
    },

    /// Changer le thème actif
    Theme {
        /// default-weekend | lazy-weekend | adventurous-weekend | family-weekend
        theme: String,
    },

    /// Ajouter un jour au planning (le prochain libre si non précisé)
    AddDay {
        #[arg(long)]
        day: Option<String>,
    },

    /// Retirer un jour ajouté (et ceux ajoutés après lui)
    RemoveDay {
        #[arg(long)]
        day: String,
    },

    /// Tirer un plan surprise : 4 activités de catégories distinctes
    Surprise,

    /// Lister le planning et optionnellement exporter
    Show {
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Rendre le plan en texte pour impression/partage
    Export {
        /// Fichier de sortie (texte brut)
        #[arg(long)]
        out: String,
    },

    /// Récupérer les jours fériés et afficher les week-ends prolongés à venir
    LongWeekends {
        #[arg(long, default_value = "IN")]
        country: String,
        /// Répétable : --year 2025 --year 2026
        #[arg(long = "year", required = true)]
        years: Vec<i32>,
        /// Clé API (sinon variable WEEKENDLY_API_KEY)
        #[arg(long)]
        api_key: Option<String>,
        /// Surcharge du point d'entrée (tests)
        #[arg(long)]
        api_url: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.store)?;
    let mut planner = match storage.load() {
        Ok(snapshot) => Planner::from_snapshot(snapshot),
        Err(_) => Planner::new(),
    };

    if let Some(path) = &cli.activities {
        planner.extend_catalog(io::import_activities_csv(path)?);
    }

    let code = match cli.cmd {
        Commands::Add { id, day } => {
            planner.add_activity(&ActivityId::new(id), &day)?;
            storage.save(&planner.snapshot())?;
            0
        }
        Commands::Remove { id, day } => {
            planner.remove_activity(&ActivityId::new(id), &day)?;
            storage.save(&planner.snapshot())?;
            0
        }
        Commands::Move { id, over } => {
            if planner.apply_drag(&id, &over) {
                storage.save(&planner.snapshot())?;
                0
            } else {
                eprintln!("drag ignored: no valid target for {id} over {over}");
                // Code 2 = rien appliqué, état inchangé
                2
            }
        }
        Commands::Vibe { id, day, tag } => {
            planner.update_activity(&ActivityId::new(id), &day, &ActivityPatch::vibe(tag))?;
            storage.save(&planner.snapshot())?;
            0
        }
        Commands::Theme { theme } => {
            let theme: Theme = theme.parse().map_err(anyhow::Error::msg)?;
            planner.set_theme(theme);
            storage.save(&planner.snapshot())?;
            0
        }
        Commands::AddDay { day } => {
            let key = match day {
                Some(day) => {
                    planner.add_day(&day)?;
                    day
                }
                None => planner.add_next_day()?.to_owned(),
            };
            storage.save(&planner.snapshot())?;
            println!("Added day {key}");
            0
        }
        Commands::RemoveDay { day } => {
            planner.remove_day(&day)?;
            storage.save(&planner.snapshot())?;
            0
        }
        Commands::Surprise => {
            planner.surprise(&mut rand::thread_rng())?;
            storage.save(&planner.snapshot())?;
            0
        }
        Commands::Show { out_json, out_csv } => {
            if let Some(path) = out_json {
                io::export_plan_json(path, &planner.snapshot())?;
            }
            if let Some(path) = out_csv {
                io::export_schedule_csv(path, planner.schedule())?;
            }
            // impression compacte
            println!("theme: {}", planner.theme());
            for day in &planner.schedule().days {
                println!("{}:", day.key);
                for activity in &day.activities {
                    println!(
                        "  {} | {} ({}) | {}",
                        activity.id.as_str(),
                        activity.title,
                        activity.category,
                        activity.vibe.as_deref().unwrap_or("-")
                    );
                }
            }
            0
        }
        Commands::Export { out } => {
            let summary = prepare_summary(
                planner.schedule(),
                planner.theme(),
                Utc::now(),
                &TextPlan,
            );
            std::fs::write(&out, summary.content)?;
            println!("Plan exported to {out}");
            0
        }
        Commands::LongWeekends {
            country,
            years,
            api_key,
            api_url,
        } => {
            let api_key = match api_key.or_else(|| std::env::var("WEEKENDLY_API_KEY").ok()) {
                Some(key) => key,
                None => bail!("missing API key (--api-key or WEEKENDLY_API_KEY)"),
            };
            let mut client = FeedClient::new(api_key, country, years);
            if let Some(url) = api_url {
                client = client.with_base_url(url);
            }
            match client.fetch_holidays() {
                Ok(holidays) => {
                    let windows = derive_long_weekends(&holidays, Local::now().date_naive());
                    if windows.is_empty() {
                        println!("No upcoming long weekends found.");
                    }
                    for w in &windows {
                        println!(
                            "{} → {} | {} days | {} | {}",
                            w.start_date,
                            w.end_date,
                            w.duration_days,
                            w.name,
                            w.labels.join(" + ")
                        );
                    }
                    0
                }
                Err(err) => {
                    // Pas de relance automatique : relancer la commande vaut retry.
                    eprintln!("Failed to load holidays: {err}");
                    1
                }
            }
        }
    };

    std::process::exit(code);
}

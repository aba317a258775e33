#![forbid(unsafe_code)]
use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use shiftfill::{
    io,
    notification::{render_summary, Locale},
    scheduler::Scheduler,
    storage::{JsonStorage, Storage, WeekPlan},
    template::{expand_week, load_template_set},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI d'affectation du personnel aux créneaux d'une semaine
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON du plan de la semaine
    #[arg(long, global = true, default_value = "plan.json")]
    plan: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Importer le personnel depuis un CSV
    ImportStaff {
        #[arg(long)]
        csv: String,
    },

    /// Importer des créneaux depuis un CSV
    ImportShifts {
        #[arg(long)]
        csv: String,
    },

    /// Importer des disponibilités depuis un CSV
    ImportAvailability {
        #[arg(long)]
        csv: String,
    },

    /// Déplier un jeu de modèles sur une semaine
    Expand {
        /// Fichier JSON du jeu de modèles
        #[arg(long)]
        templates: String,
        /// Premier jour (YYYY-MM-DD)
        #[arg(long)]
        week_start: String,
    },

    /// Générer les affectations
    Generate {
        #[arg(long)]
        seed: Option<u64>,
        /// Une seule affectation par personne et par jour
        #[arg(long)]
        single_shift_per_day: bool,
        /// fr | en
        #[arg(long)]
        locale: Option<Locale>,
    },

    /// Lister et optionnellement exporter
    List {
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Afficher statistiques et alertes
    Report {
        /// Export CSV des alertes (optionnel)
        #[arg(long)]
        warnings_csv: Option<String>,
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

    let storage = JsonStorage::open(&cli.plan)?;
    let mut plan = if storage.exists() {
        storage.load()?
    } else {
        WeekPlan::default()
    };

    let code = match cli.cmd {
        Commands::ImportStaff { csv } => {
            let staff = io::import_staff_csv(csv)?;
            plan.input.staff.extend(staff);
            plan.input.validate()?;
            storage.save(&plan)?;
            0
        }
        Commands::ImportShifts { csv } => {
            let shifts = io::import_shifts_csv(csv)?;
            plan.input.shifts.extend(shifts);
            plan.input.validate()?;
            storage.save(&plan)?;
            0
        }
        Commands::ImportAvailability { csv } => {
            let availability = io::import_availability_csv(csv)?;
            plan.input.availability.extend(availability);
            plan.input.validate()?;
            storage.save(&plan)?;
            0
        }
        Commands::Expand {
            templates,
            week_start,
        } => {
            let set = load_template_set(&templates)?;
            let start = NaiveDate::parse_from_str(week_start.trim(), "%Y-%m-%d")
                .with_context(|| format!("invalid week start: {week_start}"))?;
            let shifts = expand_week(&set, start)?;
            println!("{} shift(s) from template set {}", shifts.len(), set.id);
            plan.input.shifts.extend(shifts);
            plan.input.validate()?;
            storage.save(&plan)?;
            0
        }
        Commands::Generate {
            seed,
            single_shift_per_day,
            locale,
        } => {
            if seed.is_some() {
                plan.options.seed = seed;
            }
            if single_shift_per_day {
                plan.options.allow_multiple_shifts_per_day = false;
            }
            if let Some(locale) = locale {
                plan.options.locale = locale;
            }
            plan.input.validate()?;
            if plan.input.shifts.is_empty() {
                bail!("aucun créneau à pourvoir (import-shifts ou expand d'abord)");
            }
            let outcome = Scheduler::new(plan.options).generate(&plan.input);
            print!("{}", render_summary(&plan.input, &outcome, plan.options.locale));
            plan.outcome = Some(outcome);
            storage.save(&plan)?;
            0
        }
        Commands::List { out_json, out_csv } => {
            let Some(outcome) = plan.outcome.as_ref() else {
                bail!("aucun résultat : lancer `generate` d'abord");
            };
            if let Some(path) = out_json {
                io::export_outcome_json(path, outcome)?;
            }
            if let Some(path) = out_csv {
                io::export_assignments_csv(path, &plan.input, outcome)?;
            }
            // impression compacte
            for (staff, date, template) in outcome.assignments.iter() {
                let name = plan
                    .input
                    .find_staff(staff)
                    .map(|s| s.display_name.as_str())
                    .unwrap_or("-");
                println!("{} | {} | {}", date, template.as_str(), name);
            }
            0
        }
        Commands::Report { warnings_csv } => {
            let Some(outcome) = plan.outcome.as_ref() else {
                bail!("aucun résultat : lancer `generate` d'abord");
            };
            print!("{}", render_summary(&plan.input, outcome, plan.options.locale));
            if let Some(path) = warnings_csv {
                io::export_warnings_csv(path, outcome)?;
            }
            // Code 2 = sous-effectif critique
            if outcome.has_critical() {
                2
            } else {
                0
            }
        }
    };

    std::process::exit(code);
}

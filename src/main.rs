use clap::{Parser, Subcommand};
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::info;
use work_timetable::error::Error;
use work_timetable::grid::html::INDEX_PAGE;
use work_timetable::grid::site::export_site;
use work_timetable::schedule::collect_dates;
use work_timetable::source::from_location;
use work_timetable::startup;
use work_timetable::utils::i18n;

#[derive(Parser)]
#[command(name = "work-timetable")]
#[command(version)]
#[command(about = "Renders planned and actual work hours as an hourly timetable", long_about = None)]
struct Cli {
    /// Schedule JSON file or http(s) URL (overrides SCHEDULE_SOURCE)
    #[arg(short, long, global = true)]
    source: Option<String>,

    /// Display timezone, e.g. Europe/Helsinki (overrides TIMEZONE)
    #[arg(short, long, global = true)]
    timezone: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the full schedule page and one page per date
    Render {
        /// Output directory (overrides OUTPUT_DIR)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Employee whose row starts out showing actual hours; repeatable
        #[arg(short, long = "actual")]
        actual: Vec<String>,

        /// Page locale (overrides TIMETABLE_LOCALE)
        #[arg(short, long)]
        locale: Option<String>,

        /// Open the index page in a browser afterwards
        #[arg(long)]
        open: bool,
    },
    /// Print the dates present in the schedule, most recent first
    Dates,
    /// Load and check the schedule without rendering
    Validate,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    let cli = Cli::parse();

    // Load configuration, command line wins
    let mut config = startup::load_config()?;
    if let Some(source) = cli.source {
        config.source = source;
    }
    if let Some(timezone) = cli.timezone {
        config.timezone = timezone;
    }
    let tz = config.tz()?;

    let source = from_location(&config.source);
    let schedule = startup::load_schedule(source.as_ref(), &tz).await?;

    match cli.command {
        Commands::Render {
            out,
            actual,
            locale,
            open,
        } => {
            let locale = locale.unwrap_or_else(|| config.locale.clone());
            i18n::set_locale(&locale);

            let out_dir = out.unwrap_or_else(|| config.output_dir.clone());
            let actual_names: HashSet<String> = actual.into_iter().collect();
            let pages = export_site(schedule, tz, &actual_names, &out_dir).await?;
            println!("Wrote {} pages to {}", pages.len(), out_dir.display());

            if open || config.open_browser {
                let index = out_dir.join(INDEX_PAGE);
                info!("Opening {} in browser", index.display());
                webbrowser::open(&index.to_string_lossy()).map_err(Error::from)?;
            }
        }
        Commands::Dates => {
            for date in collect_dates(&schedule, &tz) {
                println!("{}", date);
            }
        }
        Commands::Validate => {
            println!(
                "{}: {} rows, schedule is valid",
                config.source,
                schedule.len()
            );
        }
    }

    Ok(())
}

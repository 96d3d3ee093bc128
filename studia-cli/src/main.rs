//! studia - Personal Study Tracker CLI
//!
//! Log study sessions and render dashboard summaries of your study habits.

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use studia_core::{
    discover_csv_files, export_csv, generate_dashboard, import_csv, Config, Dashboard, Database,
    Mood, NewSession, TargetStrategy, TopicAverage, Window,
};

/// Rotated through the fun-mode banner, one per day.
const QUOTES: &[&str] = &[
    "Consistency beats motivation.",
    "Small progress each day adds up to big results.",
    "Study like your future depends on it. Because it does.",
    "Discipline is choosing between what you want now and what you want most.",
    "Stay patient and trust your journey.",
];

#[derive(Parser, Debug)]
#[command(name = "studia")]
#[command(about = "Personal study tracker - log sessions, see streaks and summaries")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log a study session
    Log {
        /// What you studied
        #[arg(long)]
        topic: String,

        /// Hours studied
        #[arg(long)]
        hours: f64,

        /// Session date (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// How it felt (happy, neutral, tired, sleepy, frustrated, excited)
        #[arg(long)]
        mood: Option<Mood>,

        /// Daily goal in hours
        #[arg(long)]
        target: Option<f64>,
    },

    /// Show the dashboard for a window
    Dashboard {
        /// Window to aggregate over (all, today, week, month)
        #[arg(long, default_value = "all")]
        window: Window,

        /// Compute as of this date instead of today
        #[arg(long)]
        on: Option<NaiveDate>,

        /// Export format (md = markdown, json = JSON)
        #[arg(long)]
        export: Option<String>,

        /// Plain output: no quote banner, no emoji
        #[arg(long)]
        serious: bool,
    },

    /// Import CSV study logs into the database
    Import {
        /// CSV files to import
        paths: Vec<PathBuf>,

        /// Import every *.csv in the configured data directory
        #[arg(long)]
        all: bool,
    },

    /// Export the full history to a CSV file
    Export {
        /// Destination file
        path: PathBuf,
    },

    /// Suggest a target-hours value for a topic
    Recommend {
        /// Topic to recommend for
        #[arg(long)]
        topic: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration and database
    let config = Config::load().context("failed to load configuration")?;
    let _log_guard = studia_core::logging::init(&config.logging).ok();

    let db_path = Config::database_path();
    let db = Database::open(&db_path).context("failed to open database")?;
    db.migrate().context("failed to run database migrations")?;

    match cli.command {
        Command::Log {
            topic,
            hours,
            date,
            mood,
            target,
        } => cmd_log(&db, topic, hours, date, mood, target),
        Command::Dashboard {
            window,
            on,
            export,
            serious,
        } => cmd_dashboard(&db, window, on, export.as_deref(), serious),
        Command::Import { paths, all } => cmd_import(&db, &config, paths, all),
        Command::Export { path } => cmd_export(&db, &path),
        Command::Recommend { topic } => cmd_recommend(&db, &config, &topic),
    }
}

fn cmd_log(
    db: &Database,
    topic: String,
    hours: f64,
    date: Option<NaiveDate>,
    mood: Option<Mood>,
    target: Option<f64>,
) -> Result<()> {
    let session = NewSession {
        date: date.unwrap_or_else(|| Local::now().date_naive()),
        topic,
        hours,
        mood,
        target_hours: target.unwrap_or(0.0),
    }
    .sanitized();

    if session.topic.is_empty() {
        anyhow::bail!("topic must not be empty");
    }

    let id = db
        .insert_session(&session)
        .context("failed to store session")?;
    tracing::info!(id, topic = %session.topic, "Session logged");

    println!(
        "Logged {} of {} on {}.",
        studia_core::format::format_hours(session.hours),
        session.topic,
        session.date.format("%Y-%m-%d"),
    );
    Ok(())
}

fn cmd_dashboard(
    db: &Database,
    window: Window,
    on: Option<NaiveDate>,
    export: Option<&str>,
    serious: bool,
) -> Result<()> {
    let history = db.load_history().context("failed to load history")?;
    let today = on.unwrap_or_else(|| Local::now().date_naive());
    let dashboard = generate_dashboard(&history, window, today);

    match export {
        Some("json") => print_json(&dashboard)?,
        Some("md") => print_markdown(&dashboard, today),
        Some(other) => anyhow::bail!("Unknown export format: {}. Use 'md' or 'json'", other),
        None => print_terminal(&dashboard, today, !serious),
    }

    Ok(())
}

fn cmd_import(db: &Database, config: &Config, paths: Vec<PathBuf>, all: bool) -> Result<()> {
    let files = if all {
        let dir = config.csv_dir();
        let found = discover_csv_files(&dir)
            .with_context(|| format!("failed to scan {}", dir.display()))?;
        if found.is_empty() {
            println!("No CSV files found in {}.", dir.display());
            return Ok(());
        }
        found
    } else if paths.is_empty() {
        anyhow::bail!("Provide one or more CSV files, or use --all");
    } else {
        paths
    };

    let mut total = 0usize;
    for path in &files {
        let report =
            import_csv(path).with_context(|| format!("failed to import {}", path.display()))?;
        db.insert_sessions(&report.sessions)
            .context("failed to store imported sessions")?;
        total += report.sessions.len();

        println!(
            "Imported {} session(s) from {}.",
            report.sessions.len(),
            path.display()
        );
        for warning in &report.warnings {
            println!("  warning: {}", warning);
        }
    }

    println!("Import complete: {} session(s).", total);
    Ok(())
}

fn cmd_export(db: &Database, path: &PathBuf) -> Result<()> {
    let history = db.load_history().context("failed to load history")?;
    export_csv(path, &history).context("failed to write export")?;
    println!(
        "Exported {} session(s) to {}.",
        history.len(),
        path.display()
    );
    Ok(())
}

fn cmd_recommend(db: &Database, config: &Config, topic: &str) -> Result<()> {
    let history = db.load_history().context("failed to load history")?;
    let strategy = TopicAverage::new(config.recommend.min_topic_samples);

    match strategy.recommend(&history, topic) {
        Some(hours) => println!(
            "Suggested target for {}: {:.2} hours/day ({} strategy)",
            topic,
            hours,
            strategy.name()
        ),
        None => println!(
            "Not enough history to recommend a target for {} yet. Log a few sessions first.",
            topic
        ),
    }
    Ok(())
}

// ============================================
// Rendering
// ============================================

fn quote_of_the_day(today: NaiveDate) -> &'static str {
    QUOTES[today.ordinal0() as usize % QUOTES.len()]
}

fn print_terminal(dashboard: &Dashboard, today: NaiveDate, fun_mode: bool) {
    let title = format!("STUDY DASHBOARD - {}", dashboard.window.display_name());

    println!();
    println!("╭{}╮", "─".repeat(60));
    println!("│{:^60}│", title);
    println!("╰{}╯", "─".repeat(60));
    println!();

    if fun_mode {
        println!("  \"{}\"", quote_of_the_day(today));
        println!();
    }

    if dashboard.view.session_count == 0 {
        println!("  No sessions in this window yet.");
        println!();
        return;
    }

    println!("SUMMARY");
    println!(
        "   Sessions: {:<10} Total: {}",
        dashboard.view.session_count,
        studia_core::format::format_hours(dashboard.view.total_hours)
    );
    println!(
        "   Avg/day:  {:<10} Badge: {}",
        format!("{:.1}h", dashboard.view.avg_hours_per_day),
        dashboard.badge.label()
    );
    println!();

    println!("STREAKS");
    println!(
        "   Current:  {} day{}",
        dashboard.current_streak,
        if dashboard.current_streak == 1 { "" } else { "s" }
    );
    println!(
        "   Longest:  {} day{}",
        dashboard.longest_streak,
        if dashboard.longest_streak == 1 { "" } else { "s" }
    );
    println!();

    if !dashboard.view.topic_totals.is_empty() {
        println!("TOPICS");
        for (topic, hours) in &dashboard.view.topic_totals {
            println!(
                "   {:<16} {}",
                topic,
                studia_core::format::format_hours(*hours)
            );
        }
        println!();
    }

    println!("MOODS");
    for (mood, count) in &dashboard.view.mood_counts {
        println!("   {:<12} {}", mood.display_name(), count);
    }
    println!();

    if !dashboard.view.daily_averages.is_empty() {
        println!("TARGET VS ACTUAL");
        for (date, avg) in &dashboard.view.daily_averages {
            println!(
                "   {}  studied {:.1}h  target {:.1}h",
                studia_core::format::format_date(*date),
                avg.mean_hours,
                avg.mean_target
            );
        }
        println!();
    }
}

fn print_markdown(dashboard: &Dashboard, today: NaiveDate) {
    println!(
        "# Study Dashboard: {} (as of {})",
        dashboard.window.display_name(),
        today.format("%Y-%m-%d")
    );
    println!();

    if dashboard.view.session_count == 0 {
        println!("*No sessions in this window.*");
        return;
    }

    println!("## Summary");
    println!();
    println!("| Metric | Value |");
    println!("|--------|-------|");
    println!("| Sessions | {} |", dashboard.view.session_count);
    println!("| Total Hours | {:.2} |", dashboard.view.total_hours);
    println!(
        "| Avg Hours/Day | {:.2} |",
        dashboard.view.avg_hours_per_day
    );
    println!("| Current Streak | {} days |", dashboard.current_streak);
    println!("| Longest Streak | {} days |", dashboard.longest_streak);
    println!("| Badge | {} |", dashboard.badge.label());
    println!();

    if !dashboard.view.topic_totals.is_empty() {
        println!("## Topics");
        println!();
        for (topic, hours) in &dashboard.view.topic_totals {
            println!("- **{}** - {:.2} hours", topic, hours);
        }
        println!();
    }

    println!("## Moods");
    println!();
    for (mood, count) in &dashboard.view.mood_counts {
        println!("- {}: {}", mood.display_name(), count);
    }
    println!();

    if !dashboard.view.daily_averages.is_empty() {
        println!("## Target vs Actual");
        println!();
        println!("| Date | Studied | Target |");
        println!("|------|---------|--------|");
        for (date, avg) in &dashboard.view.daily_averages {
            println!(
                "| {} | {:.2}h | {:.2}h |",
                date.format("%Y-%m-%d"),
                avg.mean_hours,
                avg.mean_target
            );
        }
    }
}

fn print_json(dashboard: &Dashboard) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(dashboard)?);
    Ok(())
}

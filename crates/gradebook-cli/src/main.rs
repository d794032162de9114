//! gradebook CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(
    name = "gradebook",
    version,
    about = "Student grade book: marks, GPA, rankings, and transcripts"
)]
struct Cli {
    /// JSON data file (overrides the config file)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a student
    AddStudent {
        /// Student email (lookup key)
        #[arg(long)]
        email: String,

        /// Student name
        #[arg(long)]
        name: String,

        /// Gender (Male/Female)
        #[arg(long)]
        gender: String,
    },

    /// Add a course
    AddCourse {
        /// Course name (lookup key)
        #[arg(long)]
        name: String,

        /// Trimester label
        #[arg(long)]
        trimester: String,

        /// Credit weight
        #[arg(long, value_parser = commands::parse_finite)]
        credits: f64,
    },

    /// Record a student's marks in a course
    Register {
        /// Student email
        #[arg(long)]
        email: String,

        /// Course name
        #[arg(long)]
        course: String,

        /// Marks obtained
        #[arg(long, value_parser = commands::parse_finite)]
        marks: f64,
    },

    /// Rank students by total marks
    Rank,

    /// Find students by letter grade (A-F)
    Search {
        /// Letter grade to match exactly
        grade: String,
    },

    /// Print a student's transcript
    Transcript {
        /// Student email
        #[arg(long)]
        email: String,
    },

    /// List all students with their registrations
    List,

    /// Rewrite the data file
    Save,

    /// Interactive numbered menu
    Menu,

    /// Create a starter gradebook.toml
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let data_file = cli.data_file;
    let config = cli.config;

    let result = match cli.command {
        Commands::AddStudent {
            email,
            name,
            gender,
        } => commands::add::student(data_file, config, email, name, gender),
        Commands::AddCourse {
            name,
            trimester,
            credits,
        } => commands::add::course(data_file, config, name, trimester, credits),
        Commands::Register {
            email,
            course,
            marks,
        } => commands::register::execute(data_file, config, email, course, marks),
        Commands::Rank => commands::report::rank(data_file, config),
        Commands::Search { grade } => commands::report::search(data_file, config, grade),
        Commands::Transcript { email } => commands::report::transcript(data_file, config, email),
        Commands::List => commands::report::list(data_file, config),
        Commands::Save => commands::save::execute(data_file, config),
        Commands::Menu => commands::menu::execute(data_file, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

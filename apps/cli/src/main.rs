//! `dailydose` — registration from the command line.
//!
//! Collects the form fields from flags, runs one validation pass, and
//! either logs the accepted submission or prints one localized message
//! per invalid field. Nothing is transmitted anywhere; like the
//! original form, acceptance ends at the log line.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dailydose_i18n::{Language, field_label, label, message};
use dailydose_validator::form::{FormValidator, Registration};

#[derive(Debug, Parser)]
#[command(name = "dailydose", version, about = "Daily Dose registration form")]
struct Cli {
    /// Username (3-40 characters)
    #[arg(short = 'u', long)]
    username: Option<String>,

    /// Email address
    #[arg(short = 'e', long)]
    email: Option<String>,

    /// Phone number, any formatting (optional)
    #[arg(long)]
    phone: Option<String>,

    /// Password (6-40 characters)
    #[arg(short = 'p', long)]
    password: Option<String>,

    /// Password, again
    #[arg(long)]
    confirm_password: Option<String>,

    /// Profile picture to attach
    #[arg(long, value_name = "PATH")]
    profile_picture: Option<PathBuf>,

    /// Display language for validation messages
    #[arg(long, default_value = "he")]
    lang: Language,

    /// Print the evaluation as JSON on stdout instead of text
    #[arg(long)]
    json: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    // Absent flags are empty fields, exactly like untouched form inputs.
    let record = Registration {
        username: cli.username.unwrap_or_default(),
        email: cli.email.unwrap_or_default(),
        phone: cli.phone.unwrap_or_default(),
        password: cli.password.unwrap_or_default(),
        confirm_password: cli.confirm_password.unwrap_or_default(),
        profile_picture: cli.profile_picture,
    };

    let report = FormValidator::new().validate(&record);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    if report.accepted() {
        // Passwords stay out of the logs.
        info!(
            username = %record.username,
            email = %record.email,
            phone = %record.phone,
            profile_picture = ?record.profile_picture,
            "registration accepted"
        );
        return Ok(ExitCode::SUCCESS);
    }

    if !cli.json {
        for (field, key) in report.iter() {
            eprintln!(
                "{}: {}",
                label(cli.lang, field_label(field)),
                message(cli.lang, key)
            );
        }
    }

    Ok(ExitCode::FAILURE)
}

//! Terminal front end for the contacts core.
//!
//! # Responsibility
//! - Keep the `ping` smoke probe for verifying core linkage.
//! - Render list, search and detail views as plain text or JSON.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use contacts_core::{
    core_version, default_log_level, filter_directory, init_logging, ping, reference_directory,
    ContactDetail, ContactsScreen, Directory, DETAIL_TITLE, EMPTY_RESULT_MESSAGE, SCREEN_TITLE,
};
use log::{info, warn};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "contacts")]
#[command(about = "Browse and search the contacts directory", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Absolute directory for rolling log files (logging is off without it)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error (needs --log-dir)
    #[arg(long, global = true, requires = "log_dir")]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print core ping and version
    Ping,
    /// Print the full directory
    List {
        #[arg(long)]
        json: bool,
    },
    /// Print contacts whose name or phone contains QUERY
    Search {
        query: String,
        #[arg(long)]
        json: bool,
    },
    /// Print the detail view of one contact
    Show {
        id: String,
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Self::Ping => "ping",
            Self::List { .. } => "list",
            Self::Search { .. } => "search",
            Self::Show { .. } => "show",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, &log_dir.to_string_lossy()) {
            bail!("logging init failed: {err}");
        }
        info!(
            "event=cli_start module=cli status=ok command={}",
            cli.command.name()
        );
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(cli, &mut out)
}

fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Commands::Ping => {
            writeln!(out, "contacts_core ping={}", ping())?;
            writeln!(out, "contacts_core version={}", core_version())?;
        }
        Commands::List { json } => write_directory(out, reference_directory(), json)?,
        Commands::Search { query, json } => {
            let filtered = filter_directory(reference_directory(), &query);
            write_directory(out, &filtered, json)?;
        }
        Commands::Show { id, json } => {
            let mut screen = ContactsScreen::with_reference_directory();
            if let Err(err) = screen.select_contact(&id) {
                warn!("event=cli_show module=cli status=not_found contact_id={id}");
                return Err(err.into());
            }
            let Some(detail) = screen.detail() else {
                bail!("contact `{id}` has no detail view");
            };
            write_detail(out, &detail, json)?;
        }
    }

    Ok(())
}

fn write_directory(out: &mut impl Write, directory: &Directory, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(directory)?)?;
        return Ok(());
    }

    writeln!(out, "{SCREEN_TITLE}")?;
    if directory.is_empty() {
        writeln!(out, "{EMPTY_RESULT_MESSAGE}")?;
        return Ok(());
    }
    for group in directory.groups() {
        writeln!(out)?;
        writeln!(out, "{}", group.title)?;
        for contact in &group.contacts {
            writeln!(
                out,
                "  [{:>2}] {:<12} {}",
                contact.id, contact.name, contact.phone
            )?;
        }
    }
    Ok(())
}

fn write_detail(out: &mut impl Write, detail: &ContactDetail, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(detail)?)?;
        return Ok(());
    }

    writeln!(out, "{DETAIL_TITLE}")?;
    writeln!(out, "Name: {}", detail.name)?;
    writeln!(out, "Phone: {}", detail.phone)?;
    writeln!(out, "Group: {}", detail.group)?;
    Ok(())
}

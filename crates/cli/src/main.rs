//! Service Desk CLI - file and triage university service requests.
//!
//! # Usage
//!
//! ```bash
//! # Seed demo data in the data directory
//! desk init
//!
//! # Log in as the demo student and file a request
//! desk login --demo u_student_1
//! desk guidance attendance
//! desk submit -c attendance -s "Marked absent" -d "Present on Oct 12"
//!
//! # Log in as staff and resolve it
//! desk login --demo u_staff_1
//! desk list --status pending
//! desk update req_1 --status approved --note "Corrected in ERP"
//! ```
//!
//! # Commands
//!
//! - `init` - Seed demo requests if the data directory is empty
//! - `login` / `logout` / `whoami` - Manage the session
//! - `submit` - File a request (students)
//! - `list` / `show` / `stats` - Browse requests
//! - `update` - Change a request's status (staff)
//! - `guidance` - Common problems for a category

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;

use clap::{ArgGroup, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use service_desk_core::{
    NewRequest, NoteUpdate, RequestCategory, RequestId, RequestStatus, Role, UserId,
};

mod commands;
mod config;

use commands::{CommandError, Desk};
use config::{DeskConfig, LogFormat};

#[derive(Parser)]
#[command(name = "desk")]
#[command(author, version, about = "University ERP service desk")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed demo requests if none are stored yet
    Init,
    /// Log in as a demo account or with a typed name
    #[command(group(ArgGroup::new("who").required(true).args(["demo", "name"])))]
    Login {
        /// Demo account id (`u_student_1`, `u_staff_1`)
        #[arg(long)]
        demo: Option<UserId>,

        /// Full name for a new account
        #[arg(short, long)]
        name: Option<String>,

        /// Role for a new account (`student`, `staff`)
        #[arg(short, long, default_value = "student")]
        role: Role,
    },
    /// Forget the logged-in user
    Logout,
    /// Show the logged-in user
    Whoami,
    /// File a new request
    Submit {
        /// Category slug or label (`attendance`, `auditorium`, `event`, `doubts`, `misc`)
        #[arg(short, long)]
        category: RequestCategory,

        /// One-line summary
        #[arg(short, long)]
        subject: String,

        /// Full description
        #[arg(short, long)]
        description: String,

        /// Name of a supporting file
        #[arg(short, long)]
        attachment: Option<String>,
    },
    /// List requests
    List {
        /// Only show requests with this status
        #[arg(short, long)]
        status: Option<RequestStatus>,
    },
    /// Show one request in full
    Show {
        /// Request id
        id: RequestId,
    },
    /// Change a request's status
    #[command(group(ArgGroup::new("notes").args(["note", "clear_note"])))]
    Update {
        /// Request id
        id: RequestId,

        /// New status
        #[arg(short, long)]
        status: RequestStatus,

        /// Response to the student (replaces any existing note)
        #[arg(short, long)]
        note: Option<String>,

        /// Remove the existing note
        #[arg(long)]
        clear_note: bool,
    },
    /// Common problems to check before filing
    Guidance {
        /// Category slug or label
        category: RequestCategory,
    },
    /// Request counts by status group
    Stats,
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match DeskConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogFormat::default());
            tracing::error!("Configuration error: {e}");
            std::process::exit(2);
        }
    };

    init_tracing(config.log_format);
    tracing::debug!(data_dir = %config.data_dir.display(), "Opening service desk");

    let desk = Desk::open(&config);
    let mut out = std::io::stdout().lock();

    if let Err(e) = run(cli, &desk, &mut out).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run<S: service_desk_store::KeyValueStore>(
    cli: Cli,
    desk: &Desk<S>,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    match cli.command {
        Commands::Init => commands::requests::init(desk, out)?,
        Commands::Login { demo, name, role } => match (demo, name) {
            (Some(id), _) => commands::session::login_demo(desk, out, id)?,
            (None, Some(name)) => commands::session::login_named(desk, out, &name, role)?,
            (None, None) => return Err(CommandError::NotLoggedIn),
        },
        Commands::Logout => commands::session::logout(desk, out)?,
        Commands::Whoami => commands::session::whoami(desk, out)?,
        Commands::Submit {
            category,
            subject,
            description,
            attachment,
        } => {
            let new = NewRequest {
                category,
                subject,
                description,
                attachment_name: attachment,
            };
            commands::requests::submit(desk, out, new).await?;
        }
        Commands::List { status } => commands::requests::list(desk, out, status)?,
        Commands::Show { id } => commands::requests::show(desk, out, &id)?,
        Commands::Update {
            id,
            status,
            note,
            clear_note,
        } => {
            let staff_notes = if clear_note {
                NoteUpdate::Clear
            } else {
                NoteUpdate::from(note)
            };
            commands::requests::update(desk, out, &id, status, staff_notes)?;
        }
        Commands::Guidance { category } => commands::requests::guidance(out, category)?,
        Commands::Stats => commands::requests::stats(desk, out)?,
    }
    out.flush()?;
    Ok(())
}

//! # Tally Dashboard CLI
//!
//! Runs one form submission against the configured database and prints the
//! resulting form state as JSON.
//!
//! ## Usage
//! ```bash
//! dashboard register -f name=Grace -f email=grace@example.com \
//!     -f password=hunter22 -f confirmPassword=hunter22
//! dashboard login --form login.json
//! dashboard create-invoice -f customerId=<id> -f amount=12.50 -f status=pending
//! dashboard update-invoice <id> -f customerId=<id> -f amount=99 -f status=paid
//! dashboard delete-invoice <id>
//! dashboard list-invoices --query lee --page 2
//! dashboard customers
//! ```
//!
//! Nothing is printed on a successful create, update, register or login;
//! the navigation shows up in the log.

use clap::{Args, Parser, Subcommand};
use serde_json::json;
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use tally_core::validation::FormInput;
use tally_core::SubmissionResult;
use tally_dashboard::actions;
use tally_dashboard::ports::{Argon2Hasher, CredentialsProvider, TracingSignals};
use tally_dashboard::{init_tracing, AppConfig};
use tally_db::Database;

/// Tally - invoicing dashboard form pipeline
#[derive(Parser, Debug)]
#[command(name = "dashboard")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Register a new user
    Register(FormArgs),

    /// Sign in
    Login(FormArgs),

    /// Create an invoice
    CreateInvoice(FormArgs),

    /// Edit an invoice
    UpdateInvoice {
        /// Invoice id
        id: String,

        #[command(flatten)]
        form: FormArgs,
    },

    /// Delete an invoice
    DeleteInvoice {
        /// Invoice id
        id: String,
    },

    /// Show one page of the invoices listing
    ListInvoices {
        /// Search customer name, email, amount, date or status
        #[arg(short, long, default_value = "")]
        query: String,

        /// 1-based page number
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },

    /// List customers
    Customers,
}

/// Form fields, from a JSON object file and/or repeated `-f key=value`.
#[derive(Args, Debug)]
struct FormArgs {
    /// A form field, `key=value`; later values win
    #[arg(short = 'f', long = "field", value_parser = parse_field)]
    fields: Vec<(String, String)>,

    /// JSON object of field values, applied before `--field`
    #[arg(long)]
    form: Option<PathBuf>,
}

impl FormArgs {
    fn into_input(self) -> Result<FormInput, Box<dyn Error>> {
        let mut input = match self.form {
            Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
            None => FormInput::new(),
        };
        for (field, value) in self.fields {
            input.insert(field, value);
        }
        Ok(input)
    }
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))
}

fn print_state(state: Option<&SubmissionResult>) -> Result<(), Box<dyn Error>> {
    if let Some(state) = state {
        println!("{}", serde_json::to_string_pretty(state)?);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let cli = Cli::parse();
    let config = AppConfig::load()?;
    info!(path = %config.database_path.display(), "Starting dashboard");

    let db = Database::new(config.db_config()).await?;
    let signals = TracingSignals;
    let hasher = Argon2Hasher::new(config.hash_cost);

    match cli.command {
        Command::Register(form) => {
            let state = actions::register_user(&db, &hasher, &signals, &form.into_input()?).await?;
            print_state(state.as_ref())?;
        }
        Command::Login(form) => {
            let auth = CredentialsProvider::new(Arc::new(db.clone()), Arc::new(hasher));
            let outcome = actions::authenticate(&auth, &signals, &form.into_input()?).await?;
            if let Some(message) = outcome {
                print_state(Some(&SubmissionResult::message(message)))?;
            }
        }
        Command::CreateInvoice(form) => {
            let state = actions::create_invoice(&db, &signals, &form.into_input()?).await;
            print_state(state.as_ref())?;
        }
        Command::UpdateInvoice { id, form } => {
            let state = actions::update_invoice(&db, &signals, &id, &form.into_input()?).await;
            print_state(state.as_ref())?;
        }
        Command::DeleteInvoice { id } => {
            let state = actions::delete_invoice(&db, &signals, &id).await;
            print_state(Some(&state))?;
        }
        Command::ListInvoices { query, page } => {
            let invoices = db.invoices().search(&query, page).await?;
            let total_pages = db.invoices().count_pages(&query).await?;
            let listing = json!({
                "page": page.max(1),
                "totalPages": total_pages,
                "invoices": invoices,
            });
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
        Command::Customers => {
            let customers = db.customers().list_all().await?;
            println!("{}", serde_json::to_string_pretty(&customers)?);
        }
    }

    db.close().await;
    Ok(())
}

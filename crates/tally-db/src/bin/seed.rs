//! # Seed Data Generator
//!
//! Populates an empty database with placeholder customers and invoices for
//! development.
//!
//! ## Usage
//! ```bash
//! cargo run -p tally-db --bin seed
//! cargo run -p tally-db --bin seed -- --db ./data/tally.db --invoices 40
//! ```
//!
//! Users are not seeded: register through the dashboard so the password is
//! hashed by the same code path as production.

use chrono::{Duration, NaiveDate};
use clap::Parser;
use tally_core::{InvoiceStatus, Money, NewInvoice};
use tally_db::{Database, DbConfig};

/// Placeholder customers: (name, email, image)
const CUSTOMERS: &[(&str, &str, &str)] = &[
    ("Evil Rabbit", "evil@rabbit.com", "/customers/evil-rabbit.png"),
    ("Delba de Oliveira", "delba@oliveira.com", "/customers/delba-de-oliveira.png"),
    ("Lee Robinson", "lee@robinson.com", "/customers/lee-robinson.png"),
    ("Michael Novotny", "michael@novotny.com", "/customers/michael-novotny.png"),
    ("Amy Burns", "amy@burns.com", "/customers/amy-burns.png"),
    ("Balazs Orban", "balazs@orban.com", "/customers/balazs-orban.png"),
];

/// Amounts in cents, cycled over the generated invoices.
const AMOUNTS: &[i64] = &[15795, 20348, 3040, 44800, 34577, 54246, 666, 32545, 1250, 8546];

#[derive(Debug, Parser)]
#[command(name = "seed", about = "Tally seed data generator")]
struct Args {
    /// Database file path
    #[arg(short, long, default_value = "./tally_dev.db")]
    db: String,

    /// Number of invoices to generate
    #[arg(short, long, default_value_t = 24)]
    invoices: usize,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    println!("Tally Seed Data Generator");
    println!("=========================");
    println!("Database: {}", args.db);
    println!("Invoices: {}", args.invoices);
    println!();

    let db = Database::new(DbConfig::new(&args.db)).await?;
    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.customers().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} customers", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let mut customers = Vec::with_capacity(CUSTOMERS.len());
    for (name, email, image_url) in CUSTOMERS {
        customers.push(db.customers().insert(name, email, image_url).await?);
    }
    println!("✓ Inserted {} customers", customers.len());

    let start = NaiveDate::from_ymd_opt(2026, 1, 1).ok_or("invalid start date")?;
    let mut generated = 0;

    for i in 0..args.invoices {
        let invoice = NewInvoice {
            customer_id: customers[i % customers.len()].id.clone(),
            amount: Money::from_cents(AMOUNTS[i % AMOUNTS.len()]),
            status: if i % 3 == 0 {
                InvoiceStatus::Pending
            } else {
                InvoiceStatus::Paid
            },
            date: start + Duration::days(i as i64 * 5),
        };

        if let Err(e) = db.invoices().insert(&invoice).await {
            eprintln!("Failed to insert invoice {}: {}", i, e);
            continue;
        }
        generated += 1;
    }
    println!("✓ Generated {} invoices", generated);

    let pages = db.invoices().count_pages("").await?;
    println!("  Listing has {} page(s)", pages);

    db.close().await;
    println!();
    println!("🌱 Seed complete!");

    Ok(())
}

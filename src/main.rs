//! Binary entry point that glues the bundled SQLite store to the terminal
//! presenter: parse flags, make sure the database is extracted, resolve a
//! category, draw one random piece of content, and print it.

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use hikma::cli::Cli;
use hikma::{ensure_database, open_database, pick_with_fallback, ui};

/// One process-wide RNG seeded once at startup; everything that needs
/// randomness borrows it. An empty result is not a failure, so the only
/// error paths out of here are the bootstrap ones.
fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut rng = StdRng::from_os_rng();

    let db_path = ensure_database()?;
    let conn = open_database(&db_path)?;

    let resolution = cli.resolve_mode(&mut rng);
    let content = pick_with_fallback(
        &conn,
        resolution.mode(),
        cli.era_filter(),
        resolution.is_random(),
        &mut rng,
    );

    match content {
        Some(content) => ui::render(&content)?,
        None => println!("No content found for this category."),
    }
    Ok(())
}

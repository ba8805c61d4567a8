use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;
use flate2::read::GzDecoder;
use rusqlite::Connection;

/// Gzip-compressed database image shipped inside the binary. Extracted to the
/// user's data directory on first run so subsequent runs only pay for an open.
const EMBEDDED_DB: &[u8] = include_bytes!("../../assets/hikma.db.gz");

/// Folder name used beneath the platform's local data directory.
const DATA_DIR_NAME: &str = "hikma";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "hikma.db";

/// Ensure the content database exists on disk and return its path. The first
/// run extracts the embedded image; every later run finds the file already in
/// place and returns immediately. Refreshing content means deleting the file
/// out-of-band.
pub fn ensure_database() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    ensure_database_at(&base_dirs.data_local_dir().join(DATA_DIR_NAME))
}

/// Same as [`ensure_database`] but against an explicit data directory, which
/// keeps the extraction path testable without touching the real home.
pub fn ensure_database_at(data_dir: &Path) -> Result<PathBuf> {
    let db_path = data_dir.join(DB_FILE_NAME);
    if db_path.exists() {
        return Ok(db_path);
    }

    println!("First run detected. Installing database...");
    fs::create_dir_all(data_dir).context("failed to create data directory")?;

    let mut decoder = GzDecoder::new(EMBEDDED_DB);
    let mut dest = fs::File::create(&db_path).context("failed to create database file")?;
    io::copy(&mut decoder, &mut dest).context("failed to decompress bundled database")?;

    println!("Installation complete.\n");
    Ok(db_path)
}

/// Open the extracted SQLite file. The connection closes when it drops, which
/// covers every early-return path out of `main`.
pub fn open_database(path: &Path) -> Result<Connection> {
    Connection::open(path).context("failed to open SQLite database")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn extracts_bundled_database_on_first_run() {
        let dir = TempDir::new().unwrap();
        let path = ensure_database_at(dir.path()).unwrap();

        assert!(path.exists());
        let conn = open_database(&path).unwrap();
        let poems: i64 = conn
            .query_row("SELECT COUNT(*) FROM poetry", [], |row| row.get(0))
            .unwrap();
        let quotes: i64 = conn
            .query_row("SELECT COUNT(*) FROM quotes", [], |row| row.get(0))
            .unwrap();
        assert!(poems > 0);
        assert!(quotes > 0);
    }

    #[test]
    fn second_run_reuses_existing_file() {
        let dir = TempDir::new().unwrap();
        let first = ensure_database_at(dir.path()).unwrap();
        let stamp = fs::metadata(&first).unwrap().modified().unwrap();

        let second = ensure_database_at(dir.path()).unwrap();
        assert_eq!(first, second);
        assert_eq!(stamp, fs::metadata(&second).unwrap().modified().unwrap());
    }
}

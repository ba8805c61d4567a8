//! Persistence module split across logical submodules: bootstrap/open in
//! `connection`, random row selection in `select`.

mod connection;
mod select;

pub use connection::{ensure_database, ensure_database_at, open_database};
pub use select::{couplet, pick, pick_with_fallback, translate_author, COUPLET_SEPARATOR};

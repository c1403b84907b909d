//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `codecraft_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use codecraft_core::db::open_db_in_memory;
use codecraft_core::store::defaults;
use codecraft_core::{
    default_log_level, init_logging, ContentStore, SqliteKvRepository, SystemClock,
};

fn main() {
    let log_dir = std::env::temp_dir().join("codecraft-cli-logs");
    match log_dir.to_str() {
        Some(dir) => {
            if let Err(err) = init_logging(default_log_level(), dir) {
                eprintln!("logging disabled: {err}");
            }
        }
        None => eprintln!("logging disabled: log directory path is not UTF-8"),
    }

    println!("codecraft_core version={}", codecraft_core::core_version());

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open in-memory storage: {err}");
            std::process::exit(1);
        }
    };
    let repo = match SqliteKvRepository::try_new(&conn) {
        Ok(repo) => repo,
        Err(err) => {
            eprintln!("failed to attach key-value repository: {err}");
            std::process::exit(1);
        }
    };

    let store = ContentStore::new(repo, Box::new(SystemClock));
    println!("seed articles={}", store.articles().len());
    for article in store.articles() {
        println!(
            "  {} | {} | {} min read",
            article.id,
            article.title,
            article.reading_time_minutes()
        );
    }
    println!("seed accounts={}", defaults::default_registry().len());
}

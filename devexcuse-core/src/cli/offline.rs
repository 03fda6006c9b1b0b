//! Subcommands that answer from the builtin corpus without starting a server.

use crate::corpus::Corpus;
use crate::selection::SelectionEngine;
use serde::Serialize;
use std::sync::Arc;

fn engine() -> SelectionEngine {
    SelectionEngine::with_thread_rng(Arc::new(Corpus::builtin()))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}

pub fn excuse(category: Option<&str>, count: usize) -> anyhow::Result<()> {
    let engine = engine();

    if count <= 1 {
        let Some(excuse) = engine.pick_one(category) else {
            anyhow::bail!("No excuses found for that category.");
        };
        return print_json(&excuse);
    }

    print_json(&engine.pick_many(count, category))
}

pub fn categories() -> anyhow::Result<()> {
    print_json(&engine().list_categories())
}

pub fn search(query: &str) -> anyhow::Result<()> {
    let outcome = engine().search(query);
    print_json(&outcome)?;

    if !outcome.is_found() {
        std::process::exit(1);
    }
    Ok(())
}

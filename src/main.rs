// src/main.rs
use anyhow::Result;

fn main() -> Result<()> {
    note_recognizer::cli::run()
}

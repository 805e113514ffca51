//! Converts the `#MOBILES` section of a DikuMUD area file into YAML.
//!
//! When a rooms document for the same area already exists (`<file>.yml`)
//! the mobiles block is merged into it; otherwise a fresh document is
//! written.

use anyhow::{Context, Result};
use areaconv::{parse, render};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_ansi(std::io::IsTerminal::is_terminal(&std::io::stderr()))
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut input = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--help" | "--h" | "--?" | "/?" => {
                println!("Usage: mobiles_cli <area-file>");
                return Ok(());
            }
            _ if input.is_none() => input = Some(arg),
            _ => {}
        }
    }
    let Some(input) = input else {
        eprintln!("Usage: mobiles_cli <area-file>");
        std::process::exit(1);
    };

    let text = std::fs::read_to_string(&input)
        .with_context(|| format!("Cannot read area file: {input}"))?;

    let mobiles = match parse::mobiles::parse_mobiles(&text) {
        Ok(mobiles) => mobiles,
        Err(e) => {
            tracing::warn!("[mobiles] {e}");
            return Ok(());
        }
    };
    if mobiles.is_empty() {
        println!("No mobiles were found to convert");
        return Ok(());
    }
    tracing::info!("[mobiles] parsed count={}", mobiles.len());

    let body = render::render_mobiles(&mobiles);
    let out = render::output_file_name(&input, ".yml");

    match std::fs::read_to_string(&out) {
        Ok(existing) => {
            let combined = render::merge_documents(&existing, &body);
            std::fs::write(&out, combined)
                .with_context(|| format!("Cannot write output: {out}"))?;
            println!("Added mobiles to existing YAML in {out}");
        }
        Err(_) => {
            let doc = format!("---\nname: {}\n{body}", render::DEFAULT_AREA_NAME);
            std::fs::write(&out, doc)
                .with_context(|| format!("Cannot write output: {out}"))?;
            println!("Created new YAML with mobiles in {out}");
        }
    }
    Ok(())
}

//! Converts the `#ROOMS` section of a DikuMUD area file into a YAML
//! world document next to the input (`<file>.yml`).

use anyhow::{Context, Result};
use areaconv::{parse, render};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_ansi(std::io::IsTerminal::is_terminal(&std::io::stderr()))
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut input = None;
    let mut area_name = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--help" | "--h" | "--?" | "/?" => {
                println!("Usage: rooms_cli <area-file> [area-name]");
                return Ok(());
            }
            _ if input.is_none() => input = Some(arg),
            _ if area_name.is_none() => area_name = Some(arg),
            _ => {}
        }
    }
    let Some(input) = input else {
        eprintln!("Usage: rooms_cli <area-file> [area-name]");
        std::process::exit(1);
    };
    let area_name = area_name.unwrap_or_else(|| render::DEFAULT_AREA_NAME.to_string());

    let text = std::fs::read_to_string(&input)
        .with_context(|| format!("Cannot read area file: {input}"))?;

    let rooms = match parse::rooms::parse_rooms(&text) {
        Ok(rooms) => rooms,
        Err(e) => {
            // Missing section is the soft-failure mode: nothing to emit.
            tracing::warn!("[rooms] {e}");
            return Ok(());
        }
    };
    tracing::info!("[rooms] parsed count={}", rooms.len());

    let body = render::render_rooms(&area_name, &rooms);
    let out = render::output_file_name(&input, ".yml");
    std::fs::write(&out, format!("---\n{body}"))
        .with_context(|| format!("Cannot write output: {out}"))?;

    println!("Conversion complete! Output written to {out}");
    Ok(())
}

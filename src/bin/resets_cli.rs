//! Extracts mobile resets from the `#RESETS` section of a DikuMUD area
//! file into `<file>-resets.yml`.

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
                println!("Usage: resets_cli <area-file>");
                return Ok(());
            }
            _ if input.is_none() => input = Some(arg),
            _ => {}
        }
    }
    let Some(input) = input else {
        eprintln!("Usage: resets_cli <area-file>");
        std::process::exit(1);
    };

    let text = std::fs::read_to_string(&input)
        .with_context(|| format!("Cannot read area file: {input}"))?;

    let resets = match parse::resets::parse_resets(&text) {
        Ok(resets) => resets,
        Err(e) => {
            tracing::warn!("[resets] {e}");
            return Ok(());
        }
    };
    if resets.is_empty() {
        println!("No mob resets were found to convert");
        return Ok(());
    }
    tracing::info!("[resets] parsed count={}", resets.len());

    let body = render::render_resets(&resets);
    let out = render::output_file_name(&input, "-resets.yml");
    std::fs::write(&out, format!("---\nname: {}\n{body}", render::DEFAULT_AREA_NAME))
        .with_context(|| format!("Cannot write output: {out}"))?;

    println!("Created YAML with mob resets in {out}");
    Ok(())
}

//! Checks command: print the fixed check catalog

use crate::cli::resolve_format;
use anyhow::Result;
use repo_scorecard::reporters::OutputFormat;
use serde::Serialize;
use std::process::ExitCode;

#[derive(Debug, Serialize)]
struct CatalogEntry {
    id: &'static str,
    name: &'static str,
    weight: u32,
}

fn entries() -> Vec<CatalogEntry> {
    repo_scorecard::catalog()
        .iter()
        .map(|c| CatalogEntry {
            id: c.id(),
            name: c.name(),
            weight: c.weight(),
        })
        .collect()
}

pub(super) fn run(format: Option<&str>) -> Result<ExitCode> {
    let rendered = render(&entries(), resolve_format(format, None)?)?;
    print!("{}", rendered);
    Ok(ExitCode::SUCCESS)
}

fn render(entries: &[CatalogEntry], format: OutputFormat) -> Result<String> {
    let total: u32 = entries.iter().map(|e| e.weight).sum();
    let mut out = String::new();
    match format {
        OutputFormat::Json => {
            out.push_str(&serde_json::to_string_pretty(entries)?);
            out.push('\n');
        }
        OutputFormat::Text => {
            for e in entries {
                out.push_str(&format!("{:<14} {:>3}  {}\n", e.id, e.weight, e.name));
            }
            out.push_str(&format!("{:<14} {:>3}\n", "total", total));
        }
        OutputFormat::Markdown => {
            out.push_str("| Check | ID | Weight |\n");
            out.push_str("|-------|----|-------:|\n");
            for e in entries {
                out.push_str(&format!("| {} | `{}` | {} |\n", e.name, e.id, e.weight));
            }
            out.push_str(&format!("| **Total** | | **{}** |\n", total));
        }
    }
    Ok(out)
}

//! CLI commands and output formatting for primitive management.

use clap::Subcommand;

use crate::config::FeaturekitConfig;
use crate::primitives::{Primitive, PrimitiveRegistry};

use super::error::Result;
use super::installer::{InstallOptions, Installer};

/// Primitive management subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Install primitives from a directory, archive, or URL
    Install {
        /// Directory, archive path, or URL containing primitive definitions
        source: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        no_prompt: bool,
    },

    /// List installed primitives
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show detailed information about an installed primitive
    Info {
        /// Name of the primitive
        name: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Execute a primitive management command.
pub async fn execute(config: FeaturekitConfig, command: Command) -> Result<()> {
    match command {
        Command::Install { source, no_prompt } => {
            let installer = Installer::new(config);
            installer
                .install(InstallOptions {
                    source,
                    prompt: !no_prompt,
                })
                .await?;
        }
        Command::List { json } => handle_list(&config, json)?,
        Command::Info { name, json } => handle_info(&config, &name, json)?,
    }

    Ok(())
}

fn handle_list(config: &FeaturekitConfig, json: bool) -> Result<()> {
    let registry = PrimitiveRegistry::load(config)?;

    if json {
        let definitions: Vec<_> = registry.iter().map(|p| p.definition()).collect();
        println!("{}", format_json(&definitions)?);
    } else {
        let headers = &["NAME", "KIND", "FUNCTION", "DESCRIPTION"];
        let rows: Vec<Vec<String>> = registry
            .iter()
            .map(|p| {
                vec![
                    p.name().to_string(),
                    p.kind().to_string(),
                    p.definition().function.clone(),
                    p.description().to_string(),
                ]
            })
            .collect();
        format_table(headers, rows);
    }

    Ok(())
}

fn handle_info(config: &FeaturekitConfig, name: &str, json: bool) -> Result<()> {
    let registry = PrimitiveRegistry::load(config)?;
    let Some(primitive) = registry.get(name) else {
        eprintln!("Primitive '{name}' is not installed");
        return Ok(());
    };

    if json {
        println!("{}", format_json(primitive.definition())?);
    } else {
        eprintln!("Name: {}", primitive.name());
        eprintln!("Kind: {}", primitive.kind());
        eprintln!("Function: {}", primitive.definition().function);
        if !primitive.description().is_empty() {
            eprintln!("Description: {}", primitive.description());
        }
        let input_types: Vec<String> = primitive
            .input_types()
            .iter()
            .map(ToString::to_string)
            .collect();
        eprintln!("Input types: {}", input_types.join(", "));
        eprintln!("Return type: {}", primitive.return_type());
    }

    Ok(())
}

/// Format and print a table to stdout.
fn format_table(headers: &[&str], rows: Vec<Vec<String>>) {
    if rows.is_empty() {
        eprintln!("No primitives installed");
        return;
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.len());
            }
        }
    }

    let header_line: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:width$}", h, width = widths[i]))
        .collect();
    println!("{}", header_line.join("  "));

    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    println!("{}", separator.join("  "));

    for row in rows {
        let formatted_row: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let width = if i < widths.len() { widths[i] } else { 0 };
                format!("{:width$}", cell, width = width)
            })
            .collect();
        println!("{}", formatted_row.join("  "));
    }
}

/// Format data as JSON.
fn format_json<T: serde::Serialize>(data: &T) -> Result<String> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(json)
}

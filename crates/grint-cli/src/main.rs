//! Grint CLI
//!
//! Command-line interface for parsing and formatting comma-grouped
//! integers.

use clap::{Arg, ArgAction, Command};
use grint_format::format_grouped;
use grint_parser::Parser;
use std::io::Read;
use std::process;

fn main() {
    let matches = Command::new("grint")
        .version("0.1.0")
        .about("Strict comma-grouped integer parser and formatter")
        .arg(
            Arg::new("value")
                .short('c')
                .long("value")
                .value_name("STRING")
                .help("Parse a single grouped value")
                .num_args(1),
        )
        .arg(
            Arg::new("group")
                .short('g')
                .long("group")
                .value_name("INTEGER")
                .help("Format a plain integer with thousands grouping")
                .num_args(1),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Emit results as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("file")
                .value_name("FILE")
                .help("File with one grouped value per line")
                .index(1),
        )
        .get_matches();

    let json = matches.get_flag("json");

    let result = matches.get_one::<String>("group").map_or_else(
        || {
            matches.get_one::<String>("value").map_or_else(
                || {
                    matches.get_one::<String>("file").map_or_else(
                        // No input argument: read values from stdin
                        || parse_stdin(json),
                        |file_path| parse_file(file_path, json),
                    )
                },
                |value_str| parse_string(value_str, json),
            )
        },
        |integer_str| group_integer(integer_str, json),
    );

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

fn parse_string(value_str: &str, json: bool) -> Result<i32, anyhow::Error> {
    let parser = Parser::new(value_str)?;
    let value = parser.parse_value()?;

    if json {
        println!(
            "{}",
            serde_json::json!({ "input": value_str, "value": value })
        );
    } else {
        println!("{value}");
    }

    Ok(0)
}

fn parse_batch(content: &str, filename: &str, json: bool) -> Result<i32, anyhow::Error> {
    let parser = Parser::new_with_filename(content, filename)?;
    let values = parser.parse()?;

    if json {
        let lines: Vec<serde_json::Value> = values
            .iter()
            .map(|value| {
                let line = parser.source_map().position(value.span.start).line;
                serde_json::json!({ "line": line, "value": value.node })
            })
            .collect();
        println!("{}", serde_json::Value::Array(lines));
    } else {
        for value in &values {
            println!("{}", value.node);
        }
    }

    Ok(0)
}

fn parse_file(file_path: &str, json: bool) -> Result<i32, anyhow::Error> {
    let content = std::fs::read_to_string(file_path)?;
    parse_batch(&content, file_path, json)
}

fn parse_stdin(json: bool) -> Result<i32, anyhow::Error> {
    let mut content = String::new();
    std::io::stdin().read_to_string(&mut content)?;
    parse_batch(&content, "<stdin>", json)
}

fn group_integer(integer_str: &str, json: bool) -> Result<i32, anyhow::Error> {
    let value = integer_str.parse::<u64>()?;
    let grouped = format_grouped(value);

    if json {
        println!(
            "{}",
            serde_json::json!({ "value": value, "grouped": grouped })
        );
    } else {
        println!("{grouped}");
    }

    Ok(0)
}

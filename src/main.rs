use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;

use flagmap::args::{parse, FlagSnapshot, ParsedArguments};
use flagmap::logging::init_tracing;

/// Resolve `-flag` style arguments and print the result.
#[derive(Parser, Debug)]
#[command(name = "flagmap", version)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Query a flag as a boolean (NAME or NAME=DEFAULT)
    #[arg(long = "bool", value_name = "QUERY")]
    bools: Vec<String>,

    /// Query a flag as a string (NAME or NAME=DEFAULT)
    #[arg(long = "str", value_name = "QUERY")]
    strs: Vec<String>,

    /// Query a flag as an integer (NAME or NAME=DEFAULT)
    #[arg(long = "int", value_name = "QUERY")]
    ints: Vec<String>,

    /// Arguments to resolve, given after `--`
    #[arg(last = true, allow_hyphen_values = true, value_name = "ARGS")]
    args: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum QueryValue {
    Bool(bool),
    Str(String),
    Int(i64),
}

#[derive(Debug, Serialize)]
struct QueryResult {
    flag: String,
    kind: &'static str,
    value: QueryValue,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    flags: Vec<FlagSnapshot<'a>>,
    queries: Vec<QueryResult>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    tracing::debug!(args = cli.args.len(), "resolving arguments");

    let parsed = parse(&cli.args);
    let queries = run_queries(&cli, &parsed)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        Format::Json => {
            let report = Report {
                flags: parsed.snapshot(),
                queries,
            };
            serde_json::to_writer_pretty(&mut out, &report).context("Failed to write JSON")?;
            writeln!(out)?;
        }
        Format::Text if queries.is_empty() => {
            for flag in parsed.snapshot() {
                writeln!(out, "{}", flag)?;
            }
        }
        Format::Text => {
            for query in &queries {
                writeln!(out, "{}", render_query(query))?;
            }
        }
    }
    Ok(())
}

/// Split `NAME=DEFAULT` on its first `=`.
fn split_query(query: &str) -> (&str, Option<&str>) {
    match query.split_once('=') {
        Some((name, default)) => (name, Some(default)),
        None => (query, None),
    }
}

fn parse_bool_default(raw: &str) -> Result<bool> {
    match raw {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        other => bail!("Invalid boolean default '{}': expected 1, 0, true or false", other),
    }
}

fn run_queries(cli: &Cli, parsed: &ParsedArguments) -> Result<Vec<QueryResult>> {
    let mut results = Vec::new();

    for query in &cli.bools {
        let (flag, default) = split_query(query);
        let default = default.map(parse_bool_default).transpose()?.unwrap_or(false);
        results.push(QueryResult {
            flag: flag.to_string(),
            kind: "bool",
            value: QueryValue::Bool(parsed.get_bool(flag, default)),
        });
    }

    for query in &cli.strs {
        let (flag, default) = split_query(query);
        results.push(QueryResult {
            flag: flag.to_string(),
            kind: "str",
            value: QueryValue::Str(parsed.get_str(flag, default.unwrap_or("")).to_string()),
        });
    }

    for query in &cli.ints {
        let (flag, default) = split_query(query);
        let default: i64 = match default {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("Invalid integer default for '{}'", flag))?,
            None => 0,
        };
        results.push(QueryResult {
            flag: flag.to_string(),
            kind: "int",
            value: QueryValue::Int(parsed.get_int(flag, default)),
        });
    }

    Ok(results)
}

fn render_query(query: &QueryResult) -> String {
    let value = match &query.value {
        QueryValue::Bool(b) => b.to_string(),
        QueryValue::Str(s) => format!("{:?}", s),
        QueryValue::Int(n) => n.to_string(),
    };
    format!("{} {} = {}", query.kind, query.flag, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_query_with_and_without_default() {
        assert_eq!(split_query("TGC"), ("TGC", None));
        assert_eq!(split_query("-TGC=11"), ("-TGC", Some("11")));
        assert_eq!(split_query("TGC="), ("TGC", Some("")));
    }

    #[test]
    fn bool_defaults() {
        assert!(parse_bool_default("1").unwrap());
        assert!(!parse_bool_default("false").unwrap());
        assert!(parse_bool_default("maybe").is_err());
    }

    #[test]
    fn queries_use_defaults_and_resolution() {
        let cli = Cli::parse_from([
            "flagmap", "--bool", "TGC=1", "--str", "name=anon", "--int", "bar=11", "--", "-noTGC",
            "-bar=NaN",
        ]);
        let parsed = parse(&cli.args);
        let results = run_queries(&cli, &parsed).unwrap();
        let rendered: Vec<String> = results.iter().map(render_query).collect();
        assert_eq!(
            rendered,
            ["bool TGC = false", "str name = \"anon\"", "int bar = 0"]
        );
    }

    #[test]
    fn bad_int_default_is_an_error() {
        let cli = Cli::parse_from(["flagmap", "--int", "bar=x"]);
        let err = run_queries(&cli, &ParsedArguments::default()).unwrap_err();
        assert!(err.to_string().contains("Invalid integer default for 'bar'"));
    }
}

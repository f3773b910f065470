//! Step Template CLI
//!
//! Usage:
//!   step-template [OPTIONS] <TEMPLATE>
//!
//! Options:
//!   -c, --config <FILE>      Template configuration (TOML format)
//!       --call <FILE>        Call description (TOML format)
//!   -m, --method <NAME>      Method name (overrides the call file)
//!   -a, --arg <NAME=VALUE>   Argument; repeatable, `VALUE` alone for an unnamed one
//!       --strict             Exit with status 2 if any placeholder is unresolved
//!   -h, --help               Print help
//!
//! Argument values are read as TOML values (`3`, `true`, `[1, 2]`,
//! `{ city = "Paris" }`) and fall back to plain text.

use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;

use step_template::{render_with_diagnostics, CallContext, TemplateConfig, Value};

#[derive(Parser)]
#[command(name = "step-template")]
#[command(about = "Render step names from templates and method call arguments")]
struct Cli {
    /// Step name template, e.g. "login as {user.name}"
    template: String,

    /// Template configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Call description file (TOML format)
    #[arg(long)]
    call: Option<PathBuf>,

    /// Method name
    #[arg(short, long)]
    method: Option<String>,

    /// Call argument as NAME=VALUE, or VALUE for an unnamed argument
    #[arg(short, long = "arg", value_name = "NAME=VALUE")]
    args: Vec<String>,

    /// Exit with status 2 if any placeholder is left unresolved
    #[arg(long)]
    strict: bool,
}

/// TOML layout of a `--call` file
///
/// ```toml
/// method = "login"
///
/// [[args]]
/// name = "user"
/// value = { name = "alice", roles = ["admin"] }
/// ```
#[derive(Deserialize, Default)]
struct CallFile {
    method: Option<String>,
    #[serde(default)]
    args: Vec<CallArg>,
}

#[derive(Deserialize)]
struct CallArg {
    name: Option<String>,
    value: Option<toml::Value>,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match TemplateConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => TemplateConfig::default(),
    };

    let call_file = match &cli.call {
        Some(path) => match read_call_file(path) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("Error loading call '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => CallFile::default(),
    };

    let method = cli
        .method
        .clone()
        .or(call_file.method)
        .unwrap_or_else(|| "step".to_string());
    let mut call = CallContext::new(method);
    for arg in call_file.args {
        let value = arg.value.map_or(Value::Null, Value::from);
        call = match arg.name {
            Some(name) => call.with_arg(name, value),
            None => call.with_positional(value),
        };
    }
    for arg in &cli.args {
        call = match split_arg(arg) {
            (Some(name), value) => call.with_arg(name, parse_value(value)),
            (None, value) => call.with_positional(parse_value(value)),
        };
    }

    match render_with_diagnostics(&cli.template, &call, &config) {
        Ok((name, diagnostics)) => {
            for diagnostic in &diagnostics {
                eprint!("{}", diagnostic.format(&cli.template, "template"));
            }
            println!("{}", name);
            if cli.strict && !diagnostics.is_empty() {
                std::process::exit(2);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Enable `tracing` output when `RUST_LOG` is set
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn read_call_file(path: &Path) -> Result<CallFile, String> {
    let content = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    toml::from_str(&content).map_err(|e| e.to_string())
}

/// Split `NAME=VALUE`; anything without a word-character name is unnamed
fn split_arg(arg: &str) -> (Option<&str>, &str) {
    match arg.split_once('=') {
        Some((name, value))
            if !name.is_empty()
                && name
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') =>
        {
            (Some(name), value)
        }
        _ => (None, arg),
    }
}

/// Read a value as TOML, falling back to plain text
fn parse_value(text: &str) -> Value {
    let wrapped = format!("v = {}", text);
    match toml::from_str::<toml::Table>(&wrapped) {
        Ok(mut table) => table.remove("v").map_or(Value::Null, Value::from),
        Err(_) => Value::from(text),
    }
}

use std::io::Write;

use pith_int::ExactInt;
use pith_runtime::Runtime;

use crate::args::CliArgs;

pub(crate) mod echo;
pub(crate) mod int;
pub(crate) mod text;

#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Failed(String),
    #[error("stdout error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub(crate) fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 2,
            CliError::Failed(_) | CliError::Io(_) => 1,
        }
    }
}

pub(crate) fn dispatch(args: &CliArgs, rt: &Runtime) -> Result<(), CliError> {
    match args.cmd.as_str() {
        "count" => text::count(args),
        "codepoints" => text::codepoints(args),
        "first" => text::first(args),
        "last" => text::last(args),
        "prefix" => text::prefix(args),
        "window" => text::window(args),
        "int" => int::run(args),
        "echo" => echo::run(args, rt),
        other => Err(CliError::Usage(format!("Unknown command: {other}"))),
    }
}

pub(crate) fn positional<'a>(args: &'a CliArgs, idx: usize, name: &str) -> Result<&'a str, CliError> {
    args.positional
        .get(idx)
        .map(String::as_str)
        .ok_or_else(|| CliError::Usage(format!("Missing <{name}>")))
}

pub(crate) fn int_arg(args: &CliArgs, idx: usize, name: &str) -> Result<ExactInt, CliError> {
    let raw = positional(args, idx, name)?;
    pith_int::parse(raw, false)
        .ok_or_else(|| CliError::Usage(format!("<{name}> is not an integer: {raw}")))
}

/// Write one line to stdout. A closed pipe ends output quietly.
pub(crate) fn emit(line: &str) -> Result<(), CliError> {
    let mut out = std::io::stdout().lock();
    match writeln!(out, "{line}") {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(e.into()),
    }
}

pub(crate) fn emit_json(value: serde_json::Value) -> Result<(), CliError> {
    emit(&value.to_string())
}

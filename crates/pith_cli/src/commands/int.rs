use pith_int::ExactInt;
use serde_json::json;

use crate::args::CliArgs;
use crate::commands::{CliError, emit, emit_json, int_arg, positional};

pub(crate) fn run(args: &CliArgs) -> Result<(), CliError> {
    let sub = positional(args, 0, "parse|divmod|format|fixed32")?;
    match sub {
        "parse" => parse(args),
        "divmod" => divmod(args),
        "format" => format(args),
        "fixed32" => fixed32(args),
        other => Err(CliError::Usage(format!("Unknown int command: {other}"))),
    }
}

fn parse(args: &CliArgs) -> Result<(), CliError> {
    let literal = positional(args, 1, "literal")?;
    let Some(v) = pith_int::parse(literal, args.hex) else {
        return Err(CliError::Failed(format!("invalid integer literal: {literal:?}")));
    };
    if args.json_out {
        emit_json(json!({ "value": v.to_string(), "hex": v.to_hex_string(args.upper) }))
    } else {
        emit(&v.to_string())
    }
}

fn divmod(args: &CliArgs) -> Result<(), CliError> {
    let i = int_arg(args, 1, "i")?;
    let j = int_arg(args, 2, "j")?;
    let (q, r) = i.div_mod(&j);
    if args.json_out {
        emit_json(json!({ "quotient": q.to_string(), "remainder": r.to_string() }))
    } else {
        emit(&format!("{q} {r}"))
    }
}

fn format(args: &CliArgs) -> Result<(), CliError> {
    let i = int_arg(args, 1, "i")?;
    if args.hex {
        emit(&i.to_hex_string(args.upper))
    } else {
        emit(&i.to_string())
    }
}

fn fixed32(args: &CliArgs) -> Result<(), CliError> {
    let raw = positional(args, 1, "i")?;
    // Accept doubles too, so saturation of both conversions is reachable.
    let v = match pith_int::parse(raw, false) {
        Some(i) => i.to_fixed32(),
        None => match raw.parse::<f64>() {
            Ok(d) => pith_int::double_to_fixed32(d),
            Err(_) => {
                return Err(CliError::Usage(format!("<i> is not a number: {raw}")));
            }
        },
    };
    if args.json_out {
        emit_json(json!({ "fixed32": v, "exact": ExactInt::from(v).to_string() }))
    } else {
        emit(&v.to_string())
    }
}

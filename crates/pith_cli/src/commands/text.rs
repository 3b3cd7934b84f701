use pith_int::ExactInt;
use pith_text::{Slice, Text, string_count, string_to_codepoints};
use serde_json::json;

use crate::args::CliArgs;
use crate::commands::{CliError, emit, emit_json, int_arg, positional};

fn text_arg(args: &CliArgs, idx: usize, name: &str) -> Result<Text, CliError> {
    positional(args, idx, name).map(Text::from)
}

fn emit_slice(args: &CliArgs, slice: &Slice) -> Result<(), CliError> {
    if args.json_out {
        emit_json(json!({
            "start": slice.start(),
            "len": slice.len(),
            "count": slice.count().to_string(),
            "text": slice.to_string(),
        }))
    } else {
        emit(&slice.to_string())
    }
}

pub(crate) fn count(args: &CliArgs) -> Result<(), CliError> {
    let text = text_arg(args, 0, "text")?;
    let n = string_count(&text);
    if args.json_out {
        emit_json(json!({ "codepoints": n.to_string(), "units": text.len() }))
    } else {
        emit(&n.to_string())
    }
}

pub(crate) fn codepoints(args: &CliArgs) -> Result<(), CliError> {
    let text = text_arg(args, 0, "text")?;
    let cps = string_to_codepoints(&text);
    if args.json_out {
        return emit_json(json!(cps));
    }
    let rendered: Vec<String> = cps.iter().map(|cp| format!("U+{cp:04X}")).collect();
    emit(&rendered.join(" "))
}

pub(crate) fn first(args: &CliArgs) -> Result<(), CliError> {
    let text = text_arg(args, 0, "text")?;
    emit_slice(args, &Slice::first(&text))
}

pub(crate) fn last(args: &CliArgs) -> Result<(), CliError> {
    let text = text_arg(args, 0, "text")?;
    emit_slice(args, &Slice::last(&text))
}

pub(crate) fn prefix(args: &CliArgs) -> Result<(), CliError> {
    let s = text_arg(args, 0, "s")?;
    let t = text_arg(args, 1, "t")?;
    let cap = if args.positional.len() > 2 {
        int_arg(args, 2, "n")?
    } else {
        ExactInt::from(-1)
    };
    let p = Slice::whole(&s).common_prefix(&Slice::whole(&t), &cap);
    emit_slice(args, &p)
}

/// `width` codepoints from the start of the text, then slid by `shift`.
pub(crate) fn window(args: &CliArgs) -> Result<(), CliError> {
    let text = text_arg(args, 0, "text")?;
    let width = int_arg(args, 1, "width")?;
    let shift = int_arg(args, 2, "shift")?;
    let start = Slice::whole(&text).extend(&-ExactInt::from(text.len()));
    let slice = start.extend(&width).advance(&shift);
    log::debug!("window: start={} len={}", slice.start(), slice.len());
    emit_slice(args, &slice)
}

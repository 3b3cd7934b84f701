pub(crate) struct CliArgs {
    pub cmd: String,
    pub json_out: bool,
    pub upper: bool,
    pub hex: bool,
    pub verbose: bool,
    pub quiet: bool,
    pub positional: Vec<String>,
}

pub(crate) fn usage() -> &'static str {
    "Usage: pith <count|codepoints|first|last|prefix|window|int|echo> [json] [upper] [hex] [verbose] [quiet] [--] <args>\n\
     Arguments after `--` are never read as flags."
}

pub(crate) fn parse_args(argv: impl IntoIterator<Item = String>) -> Result<CliArgs, String> {
    let mut argv: Vec<String> = argv.into_iter().collect();
    if argv.is_empty() {
        return Err(usage().to_string());
    }
    let cmd = argv.remove(0);

    let mut json_out = false;
    let mut upper = false;
    let mut hex = false;
    let mut verbose = false;
    let mut quiet = false;
    let mut positional: Vec<String> = Vec::new();

    let mut flags_done = false;
    for a in argv {
        if flags_done {
            positional.push(a);
            continue;
        }
        if a == "--" {
            flags_done = true;
            continue;
        }
        if a.starts_with("--") {
            return Err(format!("Unknown option: {a}"));
        }
        match a.as_str() {
            "json" => json_out = true,
            "upper" => upper = true,
            "hex" => hex = true,
            "verbose" => verbose = true,
            "quiet" => quiet = true,
            _ => positional.push(a),
        }
    }

    Ok(CliArgs {
        cmd,
        json_out,
        upper,
        hex,
        verbose,
        quiet,
        positional,
    })
}

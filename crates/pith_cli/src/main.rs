mod args;
mod commands;

use log::LevelFilter;
use pith_runtime::trace::TRACE_TARGET;
use pith_runtime::{Runtime, RuntimeConfig};

use crate::commands::CliError;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() {
    let args = match args::parse_args(std::env::args().skip(1)) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    init_logging(args.verbose, !args.quiet);

    let rt = Runtime::new(RuntimeConfig {
        trace: !args.quiet,
        ..RuntimeConfig::default()
    });

    if let Err(e) = commands::dispatch(&args, &rt) {
        eprintln!("{e}");
        if matches!(e, CliError::Usage(_)) {
            eprintln!("{}", args::usage());
        }
        std::process::exit(e.exit_code());
    }
}

fn init_logging(verbose: bool, trace: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    let trace_level = if trace { LevelFilter::Info } else { LevelFilter::Off };
    env_logger::Builder::new()
        .filter_level(level)
        .filter_module(TRACE_TARGET, trace_level)
        .parse_env("PITH_LOG")
        .format_timestamp(None)
        .init();
}

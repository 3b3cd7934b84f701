use std::cell::Cell;
use std::rc::Rc;

use pith_runtime::{Console, Runtime};
use pith_text::{Text, string_count};

use crate::args::CliArgs;
use crate::commands::{CliError, emit};

/// Read lines until end of input, printing each line's codepoint count.
pub(crate) fn run(_args: &CliArgs, rt: &Runtime) -> Result<(), CliError> {
    let console = rt.stdin_console();
    let lines = Rc::new(Cell::new(0usize));
    let failed = Rc::new(Cell::new(false));
    let (seen, failure) = (lines.clone(), failed.clone());
    console.run_main(move |c| read_next(c, seen, failure));
    rt.trace(&format!("echo: {} line(s)", lines.get()));
    if failed.get() {
        return Err(CliError::Failed("echo: failed to write output".into()));
    }
    Ok(())
}

fn read_next(console: &Console, lines: Rc<Cell<usize>>, failed: Rc<Cell<bool>>) {
    let next = console.clone();
    console.read_line().on(move |line: Text| {
        lines.set(lines.get() + 1);
        if emit(&format!("{}\t{line}", string_count(&line))).is_err() {
            failed.set(true);
            return;
        }
        read_next(&next, lines, failed);
    });
}

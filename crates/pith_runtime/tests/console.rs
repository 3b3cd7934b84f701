use std::cell::RefCell;
use std::io::Cursor;
use std::rc::Rc;

use pith_runtime::{Console, Runtime, RuntimeConfig, RuntimeError};
use pith_text::Text;

fn console_with(input: &str) -> (Runtime, Console) {
    let rt = Runtime::new(RuntimeConfig::default());
    let console = rt.console(Box::new(Cursor::new(input.to_string())));
    (rt, console)
}

fn echo_lines(console: &Console, seen: Rc<RefCell<Vec<String>>>) {
    let next = console.clone();
    let on_err = seen.clone();
    let pending = console.read_line();
    pending.on(move |line: Text| {
        seen.borrow_mut().push(line.to_string());
        echo_lines(&next, seen);
    });
    pending.on_error(move |err| on_err.borrow_mut().push(format!("<{err}>")));
}

#[test]
fn run_main_pumps_lines_until_end_of_input() {
    let (rt, console) = console_with("one\r\ntwo\nthree");
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let value = console.run_main(move |c| {
        echo_lines(c, sink);
        "main-result"
    });
    assert_eq!(value, "main-result");
    assert_eq!(*seen.borrow(), vec!["one", "two", "three", "<end of input>"]);
    assert!(rt.scheduler().all_done());
}

#[test]
fn read_line_shares_one_outstanding_request() {
    let (_rt, console) = console_with("x\n");
    let a = console.read_line();
    let b = console.read_line();
    let got = Rc::new(RefCell::new(Vec::new()));
    let (ga, gb) = (got.clone(), got.clone());
    a.on(move |l: Text| ga.borrow_mut().push(format!("a:{l}")));
    b.on(move |l: Text| gb.borrow_mut().push(format!("b:{l}")));
    console.run_main(|_| ());
    assert_eq!(*got.borrow(), vec!["a:x", "b:x"]);
}

#[test]
fn run_main_without_pending_work_returns_immediately() {
    let (rt, console) = console_with("ignored\n");
    assert_eq!(console.run_main(|_| 5), 5);
    assert!(rt.scheduler().all_done());
}

#[test]
fn empty_input_fails_the_read() {
    let (_rt, console) = console_with("");
    let failed = Rc::new(RefCell::new(None));
    let sink = failed.clone();
    console.run_main(move |c| {
        c.read_line().on_error(move |e| *sink.borrow_mut() = Some(e));
    });
    assert_eq!(*failed.borrow(), Some(RuntimeError::EndOfInput));
}

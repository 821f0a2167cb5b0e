#![cfg(all(feature = "effect", feature = "derived"))]
//! End-to-end tests of console programs run against a scripted console.

#[path = "../demos/tour.rs"]
mod tour;

use std::rc::Rc;

use rstest::{fixture, rstest};
use shapeclass::effect::ScriptedConsole;
use tour::{report_sum, tour};

const EXPECTED_TOUR: &str = "\
Just 5 + Just -5 = Just 0
[1,2,3] + [3,4] = [4,5,5,6,6,7]
Unique pairs of [1,2,3]:
\t[(1,2),(1,3),(2,1),(2,3),(3,1),(3,2)]
Unique pairs of Just 5:
\tNothing
Please enter two numbers, x and y: x+y = 7
The quadratic root of (1,3,-4) = Just (1,-4)
The quadratic root of (1,0,4) = Nothing
";

#[fixture]
fn console() -> Rc<ScriptedConsole> {
    Rc::new(ScriptedConsole::new(["3\n", "4\n"]))
}

#[rstest]
fn tour_prints_every_section(console: Rc<ScriptedConsole>) {
    let program = tour(&console);
    assert_eq!(console.output(), "");
    program.run();
    assert_eq!(console.output(), EXPECTED_TOUR);
}

#[rstest]
fn replaying_the_tour_reads_fresh_input() {
    let console = Rc::new(ScriptedConsole::new(["3", "4", "10", "-2"]));
    let program = tour(&console);
    program.run();
    let first = console.take_output();
    program.run();
    let second = console.take_output();
    assert!(first.contains("x+y = 7\n"));
    assert!(second.contains("x+y = 8\n"));
}

#[rstest]
fn bad_input_is_reported_not_panicked() {
    let console = Rc::new(ScriptedConsole::new(["3", "four"]));
    report_sum(&console).run();
    assert_eq!(
        console.output(),
        "could not add: cannot parse \"four\" as i64\n"
    );
}

#[rstest]
fn missing_input_is_end_of_input() {
    let console = Rc::new(ScriptedConsole::new(["1"]));
    report_sum(&console).run();
    assert_eq!(console.output(), "could not add: end of input\n");
}

//! The monad tour program, shared by the `monad_tour` example and the
//! console tests.

use std::rc::Rc;

use shapeclass::derived::{
    add_m, lift_m2, quadratic_roots, show_optional, show_pair, show_sequence, unique_pairs,
};
use shapeclass::effect::{
    Console, Deferred, ReadError, echo, echo_display, equation, newline, read_value,
};
use shapeclass::typeclass::bind;

fn show_int(value: &i32) -> String {
    value.to_string()
}

fn show_ints(values: &[i32]) -> String {
    show_sequence(values, show_int)
}

/// Reads two integers and prints their sum, or why they could not be added.
pub fn report_sum<C: Console + 'static>(console: &Rc<C>) -> Deferred<()> {
    let read_int = read_value::<i64, _>(console);
    let sum = lift_m2(
        |x: Result<i64, ReadError>, y: Result<i64, ReadError>| -> Result<i64, ReadError> {
            Ok(x? + y?)
        },
        read_int.clone(),
        read_int,
    );
    let console = Rc::clone(console);
    sum.bind(move |total: Result<i64, ReadError>| {
        let line = match total {
            Ok(total) => echo_display(&console, &[&"x+y = ", &total]),
            Err(error) => echo_display(&console, &[&"could not add: ", &error]),
        };
        line.then(newline(&console))
    })
}

/// Builds the whole tour as one deferred program. Nothing runs until the
/// returned effect does.
pub fn tour<C: Console + 'static>(console: &Rc<C>) -> Deferred<()> {
    let p = Some(5);
    let q = bind(|x: i32| Some(-x), p);
    let v = vec![1, 2, 3];
    let w = vec![3, 4];

    equation(
        console,
        "+",
        show_optional(&p, show_int),
        show_optional(&q, show_int),
        show_optional(&add_m(p, q), show_int),
    )
    .then(equation(
        console,
        "+",
        show_ints(&v),
        show_ints(&w),
        show_ints(&add_m(v.clone(), w)),
    ))
    .then(echo(console, "Unique pairs of [1,2,3]:\n\t"))
    .then(echo(console, show_sequence(&unique_pairs(v), show_pair)))
    .then(newline(console))
    .then(echo(console, "Unique pairs of Just 5:\n\t"))
    .then(echo(console, show_optional(&unique_pairs(p), show_pair)))
    .then(newline(console))
    .then(echo(console, "Please enter two numbers, x and y: "))
    .then(report_sum(console))
    .then(echo(console, "The quadratic root of (1,3,-4) = "))
    .then(echo(
        console,
        show_optional(&quadratic_roots(1.0, 3.0, -4.0), show_pair),
    ))
    .then(newline(console))
    .then(echo(console, "The quadratic root of (1,0,4) = "))
    .then(echo(
        console,
        show_optional(&quadratic_roots(1.0, 0.0, 4.0), show_pair),
    ))
    .then(newline(console))
}

//! A tour of the monad vocabulary over optionals, sequences and deferred
//! effects, assembled into one deferred program and run once.
//!
//! ```text
//! cargo run --example monad_tour
//! cargo run --example monad_tour --features tracing
//! ```
//!
//! The program asks for two numbers on standard input.

mod tour;

use std::rc::Rc;

use shapeclass::effect::Stdio;

fn main() {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let console = Rc::new(Stdio);
    let program = tour::tour(&console).named("monad_tour");
    program.run();
}

mod output;
mod repl;

pub use repl::{run_lookups, run_repl};

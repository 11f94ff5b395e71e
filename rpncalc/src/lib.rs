pub use evaluator::{EvalTrace, Evaluator, TraceHook};
pub use op::{BinaryFn, Op, UnaryFn};
pub use program::{BadToken, Program, ProgramError};
pub use registry::{KnownOps, RegistryError};

mod evaluator;
mod op;
mod program;
mod registry;
#[cfg(test)]
mod registry_test;
#[cfg(feature = "repl")]
pub mod repl;

use crate::op::{BinaryFn, Op, UnaryFn};
use crate::program::{self, Program, ProgramError};
use crate::registry::KnownOps;
use std::fmt;
use tracing::{debug, warn};

/// What an evaluation saw and produced, handed to the trace hook.
#[derive(Debug)]
pub struct EvalTrace<'a> {
    pub stack: &'a [Op],
    pub result: Option<f64>,
    pub remaining: &'a [Op],
}

pub type TraceHook = Box<dyn Fn(&EvalTrace) + Send + Sync>;

/// An RPN calculator: a stack of ops plus the symbols it knows how to apply.
///
/// Every push re-evaluates the whole stack. Evaluation never consumes the
/// stack, a failed evaluation just yields `None`.
pub struct Evaluator {
    stack: Vec<Op>,
    known: KnownOps,
    trace: Option<TraceHook>,
}

impl Evaluator {
    pub fn new() -> Evaluator {
        Evaluator::with_ops(KnownOps::builtin())
    }

    pub fn with_ops(known: KnownOps) -> Evaluator {
        Evaluator { stack: Vec::new(), known, trace: None }
    }

    pub fn push_operand(&mut self, value: f64) -> Option<f64> {
        self.stack.push(Op::Operand(value));
        self.evaluate()
    }

    /// Push a known operation and evaluate. Unknown symbols leave the stack
    /// as is and just re-evaluate it.
    pub fn perform_operation(&mut self, symbol: &str) -> Option<f64> {
        match self.known.get(symbol) {
            Some(op) => self.stack.push(op.clone()),
            None => debug!(symbol, "unknown operation ignored"),
        }
        self.evaluate()
    }

    pub fn evaluate(&self) -> Option<f64> {
        let (result, remaining) = evaluate_ops(&self.stack);
        debug!(program = %self, ?result, remaining = remaining.len(), "evaluated");
        if let Some(ref hook) = self.trace {
            hook(&EvalTrace { stack: &self.stack, result, remaining });
        }
        result
    }

    pub fn reset(&mut self) -> f64 {
        self.stack.clear();
        0.0
    }

    pub fn program(&self) -> Program {
        self.stack.iter().map(Op::symbol).collect()
    }

    /// Replace the stack with `tokens`, dropping the ones that are neither a
    /// known symbol nor a number.
    pub fn set_program<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (ops, bad) = program::compile(&self.known, tokens);
        for b in &bad {
            warn!(token = %b.token, index = b.index, "skipping unrecognized program token");
        }
        self.stack = ops;
    }

    /// Like `set_program` but refuses programs with unrecognized tokens,
    /// leaving the current stack in place.
    pub fn try_set_program<I, S>(&mut self, tokens: I) -> Result<(), ProgramError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (ops, bad) = program::compile(&self.known, tokens);
        if !bad.is_empty() {
            return Err(ProgramError::BadTokens(bad));
        }
        self.stack = ops;
        Ok(())
    }

    pub fn set_trace_hook(&mut self, hook: Option<TraceHook>) {
        self.trace = hook;
    }

    pub fn stack(&self) -> &[Op] {
        &self.stack
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn known_ops(&self) -> &KnownOps {
        &self.known
    }
}

impl Default for Evaluator {
    fn default() -> Evaluator {
        Evaluator::new()
    }
}

impl fmt::Display for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.program())
    }
}

impl fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Evaluator")
            .field("stack", &self.stack)
            .field("known", &self.known.symbols())
            .field("trace", &self.trace.is_some())
            .finish()
    }
}

// Operators still waiting on operands while walking down the stack.
enum Pending<'a> {
    Unary(&'a UnaryFn),
    First(&'a BinaryFn),
    Second(&'a BinaryFn, f64),
}

// Consumes ops from the end, keeping waiting operators on the heap so long
// chains don't grow the call stack. A missing operand fails every operator
// above it, so failure always hands back the whole slice.
fn evaluate_ops(ops: &[Op]) -> (Option<f64>, &[Op]) {
    let mut pending = Vec::new();
    let mut rest = ops;
    loop {
        let mut value = loop {
            let Some((op, remaining)) = rest.split_last() else {
                return (None, ops);
            };
            rest = remaining;
            match op {
                Op::Operand(value) => break *value,
                Op::UnaryOperator(_, f) => pending.push(Pending::Unary(f)),
                Op::BinaryOperator(_, f) => pending.push(Pending::First(f)),
            }
        };
        loop {
            match pending.pop() {
                None => return (Some(value), rest),
                Some(Pending::Unary(f)) => value = f(value),
                Some(Pending::Second(f, op1)) => value = f(op1, value),
                Some(Pending::First(f)) => {
                    pending.push(Pending::Second(f, value));
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
pub(crate) fn evaluate_with_remainder(ops: &[Op]) -> (Option<f64>, usize) {
    let (result, remaining) = evaluate_ops(ops);
    (result, remaining.len())
}

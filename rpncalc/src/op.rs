use std::fmt;
use std::sync::Arc;

pub type UnaryFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;
// First argument is the operand nearer the top of the stack.
pub type BinaryFn = Arc<dyn Fn(f64, f64) -> f64 + Send + Sync>;

/// A single entry of an RPN program.
#[derive(Clone)]
pub enum Op {
    Operand(f64),
    UnaryOperator(String, UnaryFn),
    BinaryOperator(String, BinaryFn),
}

impl Op {
    pub fn unary<F>(symbol: &str, f: F) -> Op
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Op::UnaryOperator(symbol.to_string(), Arc::new(f))
    }

    pub fn binary<F>(symbol: &str, f: F) -> Op
    where
        F: Fn(f64, f64) -> f64 + Send + Sync + 'static,
    {
        Op::BinaryOperator(symbol.to_string(), Arc::new(f))
    }

    /// Token for this op in a serialized program. Operands render with the
    /// shortest decimal that parses back to the same value.
    pub fn symbol(&self) -> String {
        match self {
            Op::Operand(value) => format!("{}", value),
            Op::UnaryOperator(symbol, _) | Op::BinaryOperator(symbol, _) => symbol.clone(),
        }
    }

    pub fn arity(&self) -> usize {
        match self {
            Op::Operand(_) => 0,
            Op::UnaryOperator(..) => 1,
            Op::BinaryOperator(..) => 2,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Debug for Op {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Op::Operand(value) => write!(f, "Operand({:?})", value),
            Op::UnaryOperator(symbol, _) => write!(f, "UnaryOperator({:?})", symbol),
            Op::BinaryOperator(symbol, _) => write!(f, "BinaryOperator({:?})", symbol),
        }
    }
}

// Closures can't be compared, operators are identified by kind and symbol.
impl PartialEq for Op {
    fn eq(&self, other: &Op) -> bool {
        match (self, other) {
            (Op::Operand(a), Op::Operand(b)) => a == b,
            (Op::UnaryOperator(a, _), Op::UnaryOperator(b, _)) => a == b,
            (Op::BinaryOperator(a, _), Op::BinaryOperator(b, _)) => a == b,
            _ => false,
        }
    }
}

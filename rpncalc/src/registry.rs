use crate::op::Op;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("symbol already registered: {0}")]
    DuplicateSymbol(String),
    #[error("operands can't be registered as operations: {0}")]
    NotAnOperator(String),
    #[error("operation symbol can't be empty")]
    EmptySymbol,
    #[error("operation symbol reads as a number: {0}")]
    NumericSymbol(String),
}

/// Symbol table of the operations an evaluator understands.
#[derive(Clone, Debug, Default)]
pub struct KnownOps(HashMap<String, Op>);

impl KnownOps {
    pub fn new() -> KnownOps {
        KnownOps(HashMap::new())
    }

    /// Standard calculator operations.
    ///
    /// Binary closures get the operand nearer the top of the stack first, so
    /// the non-commutative ones flip it around to read `deeper op nearer`:
    /// `8 2 −` is `6` and `2 3 ^` is `8`.
    pub fn builtin() -> KnownOps {
        let builtins = vec![
            Op::binary("×", |a, b| a * b),
            Op::binary("÷", |a, b| b / a),
            Op::binary("+", |a, b| a + b),
            Op::binary("−", |a, b| b - a),
            Op::binary("^", |a, b| b.powf(a)),
            Op::unary("√", f64::sqrt),
            Op::unary("sin", f64::sin),
            Op::unary("cos", f64::cos),
        ];
        KnownOps(builtins.into_iter().map(|op| (op.symbol(), op)).collect())
    }

    pub fn insert(&mut self, op: Op) -> Result<(), RegistryError> {
        let symbol = op.symbol();
        if let Op::Operand(_) = op {
            return Err(RegistryError::NotAnOperator(symbol));
        }
        if symbol.is_empty() {
            return Err(RegistryError::EmptySymbol);
        }
        if symbol.parse::<f64>().is_ok() {
            return Err(RegistryError::NumericSymbol(symbol));
        }
        if self.0.contains_key(&symbol) {
            return Err(RegistryError::DuplicateSymbol(symbol));
        }
        self.0.insert(symbol, op);
        Ok(())
    }

    pub fn get(&self, symbol: &str) -> Option<&Op> {
        self.0.get(symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.0.contains_key(symbol)
    }

    pub fn symbols(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self.0.keys().map(String::as_str).collect();
        symbols.sort_unstable();
        symbols
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

use crate::evaluator::Evaluator;
use crate::op::Op;
use crate::registry::{KnownOps, RegistryError};

#[test]
fn builtin_symbols() {
    let known = KnownOps::builtin();
    assert_eq!(known.symbols(), vec!["+", "^", "cos", "sin", "×", "÷", "−", "√"]);
    assert_eq!(known.len(), 8);
    assert_eq!(known.get("√").map(Op::arity), Some(1));
    assert_eq!(known.get("÷").map(Op::arity), Some(2));
    assert!(known.get("-").is_none());
    assert!(!known.contains("/"));
}

#[test]
fn rejects_duplicates() {
    let mut known = KnownOps::builtin();
    assert_eq!(
        known.insert(Op::binary("+", |a, b| a - b)),
        Err(RegistryError::DuplicateSymbol("+".to_string()))
    );
    // the original binding survives
    let mut ev = Evaluator::with_ops(known);
    ev.push_operand(1.0);
    ev.push_operand(2.0);
    assert_eq!(ev.perform_operation("+"), Some(3.0));
}

#[test]
fn rejects_bad_symbols() {
    let mut known = KnownOps::new();
    assert!(known.is_empty());
    assert_eq!(known.insert(Op::Operand(1.0)), Err(RegistryError::NotAnOperator("1".to_string())));
    assert_eq!(known.insert(Op::unary("", f64::abs)), Err(RegistryError::EmptySymbol));
    assert_eq!(
        known.insert(Op::unary("1e3", f64::abs)),
        Err(RegistryError::NumericSymbol("1e3".to_string()))
    );
    assert_eq!(
        known.insert(Op::unary("inf", f64::abs)).unwrap_err().to_string(),
        "operation symbol reads as a number: inf"
    );
    assert!(known.is_empty());
}

#[test]
fn custom_operations() {
    let mut known = KnownOps::builtin();
    known.insert(Op::unary("±", |a| -a)).unwrap();
    known.insert(Op::binary("mod", |a, b| b % a)).unwrap();
    let scale = 2.5;
    known.insert(Op::unary("scale", move |a| a * scale)).unwrap();

    let mut ev = Evaluator::with_ops(known);
    ev.set_program(["7", "3", "mod", "±", "scale"]);
    assert_eq!(ev.evaluate(), Some(-2.5));
    assert_eq!(ev.program().tokens(), &["7", "3", "mod", "±", "scale"]);
}

#[test]
fn empty_registry_only_takes_operands() {
    let mut ev = Evaluator::with_ops(KnownOps::new());
    assert_eq!(ev.perform_operation("+"), None);
    assert!(ev.is_empty());
    ev.push_operand(4.0);
    assert_eq!(ev.perform_operation("√"), Some(4.0));
    assert_eq!(ev.len(), 1);
}

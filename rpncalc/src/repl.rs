use crate::evaluator::Evaluator;

/// Run one line of whitespace separated tokens, returning what to print.
/// Blank lines print nothing.
pub fn eval_line(ev: &mut Evaluator, line: &str) -> Option<String> {
    let mut tokens = line.split_whitespace();
    let result = match tokens.next()? {
        ":program" => return Some(ev.program().to_string()),
        ":ops" => return Some(ev.known_ops().symbols().join(" ")),
        ":load" => match ev.try_set_program(tokens) {
            Err(e) => return Some(format!("Load error: {}", e)),
            Ok(()) => ev.evaluate(),
        },
        first => std::iter::once(first)
            .chain(tokens)
            .fold(None, |_, token| eval_token(ev, token)),
    };
    Some(match result {
        Some(value) => value.to_string(),
        None => "no result".to_string(),
    })
}

// Constants and clear belong to the front-end, the rest goes to the evaluator.
fn eval_token(ev: &mut Evaluator, token: &str) -> Option<f64> {
    match token {
        "C" | "clear" => Some(ev.reset()),
        "π" | "pi" => ev.push_operand(std::f64::consts::PI),
        _ => match token.parse::<f64>() {
            Ok(value) => ev.push_operand(value),
            Err(_) => ev.perform_operation(token),
        },
    }
}

use crate::op::Op;
use crate::registry::KnownOps;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Transportable form of an operation stack: one token per op, bottom to top.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Program(Vec<String>);

impl Program {
    pub fn from_tokens<I, S>(tokens: I) -> Program
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Program(tokens.into_iter().map(Into::into).collect())
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

impl FromIterator<String> for Program {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Program {
        Program(iter.into_iter().collect())
    }
}

impl IntoIterator for Program {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadToken {
    pub index: usize,
    pub token: String,
}

impl fmt::Display for BadToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} at {}", self.token, self.index)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProgramError {
    #[error("unrecognized tokens: {}", join_bad(.0))]
    BadTokens(Vec<BadToken>),
}

fn join_bad(bad: &[BadToken]) -> String {
    bad.iter().map(|b| b.to_string()).collect::<Vec<_>>().join(", ")
}

/// Turn tokens into ops. Known symbols win over numbers, anything else is
/// returned in the second vector instead of being compiled.
pub(crate) fn compile<I, S>(known: &KnownOps, tokens: I) -> (Vec<Op>, Vec<BadToken>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut ops = Vec::new();
    let mut bad = Vec::new();
    for (index, token) in tokens.into_iter().enumerate() {
        let token = token.as_ref();
        if let Some(op) = known.get(token) {
            ops.push(op.clone());
        } else if let Ok(value) = token.parse::<f64>() {
            ops.push(Op::Operand(value));
        } else {
            bad.push(BadToken { index, token: token.to_string() });
        }
    }
    (ops, bad)
}

use crate::history::{HistoryBuffer, HistoryEntry, Operator};
use log::{debug, trace};

use error_chain::bail;


pub mod errors {
    use error_chain::error_chain;
    error_chain! {
        errors {
            DivisionByZero {
                description("Division by zero")
                display("Division by zero")
            }

            MalformedExpression {
                description("Malformed expression")
                display("Malformed expression: expected a number first")
            }
        }
    }
}
use errors::*;


impl Operator {
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64> {
        match self {
            Operator::Add => Ok(lhs + rhs),
            Operator::Subtract => Ok(lhs - rhs),
            Operator::Multiply => Ok(lhs * rhs),
            Operator::Divide => {
                if rhs == 0.0 {
                    bail!(ErrorKind::DivisionByZero);
                }
                Ok(lhs / rhs)
            }
        }
    }
}

/// Folds the buffer strictly left to right, ignoring operator priority.
///
/// The walk stops quietly at the first slot that breaks the
/// operator/number alternation, so a trailing operator is ignored.
pub fn evaluate(buffer: &HistoryBuffer) -> Result<f64> {
    let entries = buffer.entries();
    let mut acc = match entries.first() {
        Some(HistoryEntry::Number(x)) => *x,
        _ => bail!(ErrorKind::MalformedExpression),
    };
    debug!("Evaluating {}", buffer);

    for pair in entries[1..].chunks_exact(2) {
        let (op, rhs) = match pair {
            [HistoryEntry::Operator(op), HistoryEntry::Number(rhs)] => (*op, *rhs),
            _ => break,
        };
        acc = op.apply(acc, rhs)?;
        trace!("{} {} -> {}", op, rhs, acc);
    }
    Ok(acc)
}

use std::collections::HashMap;
use std::fmt;
use lazy_static::lazy_static;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

lazy_static! {
    static ref OP_SYMBOLS: HashMap<&'static str, Operator> = {
        let mut m = HashMap::new();
        m.insert("+", Operator::Add);
        m.insert("-", Operator::Subtract);
        m.insert("x", Operator::Multiply);
        m.insert("*", Operator::Multiply);
        m.insert("/", Operator::Divide);
        m
    };
}

impl Operator {

    /// Looks up the operator behind a keypad symbol. `*` is an alias for `x`.
    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        OP_SYMBOLS.get(symbol).copied()
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "x",
            Operator::Divide => "/",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum HistoryEntry {
    Number(f64),
    Operator(Operator),
}

impl From<f64> for HistoryEntry {
    fn from(x: f64) -> HistoryEntry {
        HistoryEntry::Number(x)
    }
}

impl From<Operator> for HistoryEntry {
    fn from(op: Operator) -> HistoryEntry {
        HistoryEntry::Operator(op)
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HistoryEntry::Number(x) => write!(f, "{}", x),
            HistoryEntry::Operator(op) => write!(f, "{}", op),
        }
    }
}

/// Numbers and operators in the order they were entered.
///
/// Nothing is validated on append; a malformed sequence is only detected
/// when the buffer is evaluated.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct HistoryBuffer {
    entries: Vec<HistoryEntry>,
}

impl HistoryBuffer {

    pub fn new() -> HistoryBuffer {
        HistoryBuffer::default()
    }

    pub fn append<E: Into<HistoryEntry>>(&mut self, entry: E) {
        self.entries.push(entry.into());
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}

impl fmt::Display for HistoryBuffer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for entry in self.entries.iter() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", entry)?;
            first = false;
        }
        Ok(())
    }
}

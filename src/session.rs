use crate::display::NumberFormat;
use crate::eval::evaluate;
use crate::history::{HistoryBuffer, Operator};
use crate::tokens::Key;
use log::{debug, warn};

use error_chain::bail;

pub mod errors {
    use error_chain::error_chain;
    error_chain! {
        errors {
            UnknownOperator(symbol: String) {
                description("Unknown operator")
                display("Unknown operator: {}", symbol)
            }
        }

        links {
            Eval(crate::eval::errors::Error, crate::eval::errors::ErrorKind);
            Format(crate::display::errors::Error, crate::display::errors::ErrorKind);
        }
    }
}
use errors::*;

/// Text shown after a failed evaluation.
pub const ERROR_TEXT: &str = "Error";

const ZERO: &str = "0";

/// One calculation cycle as driven by a keypad: the text currently on
/// the display plus the numbers and operators entered so far.
#[derive(Debug)]
pub struct Session {
    display: String,
    history: HistoryBuffer,
    format: NumberFormat,
    // display holds an evaluation outcome; the next digit replaces it
    showing_result: bool,
}

impl Default for Session {
    fn default() -> Session {
        Session::with_format(NumberFormat::default())
    }
}

impl Session {

    pub fn new() -> Session {
        Session::default()
    }

    pub fn with_format(format: NumberFormat) -> Session {
        Session {
            display: ZERO.to_string(),
            history: HistoryBuffer::new(),
            format,
            showing_result: false,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn format(&self) -> &NumberFormat {
        &self.format
    }

    /// Types digits or the decimal separator onto the display.
    ///
    /// Text is taken one key at a time; a second separator and any
    /// character that is neither a digit nor the separator are dropped.
    pub fn append_number(&mut self, text: &str) {
        for c in text.chars() {
            self.press_char(c);
        }
    }

    fn press_char(&mut self, c: char) {
        let sep = self.format.separator();
        let fresh = self.showing_result || self.display == ZERO;

        if c == sep {
            if fresh {
                self.display = format!("{}{}", ZERO, sep);
            }
            else if !self.display.contains(sep) {
                self.display.push(c);
            }
        }
        else if c.is_ascii_digit() {
            if fresh {
                self.display = c.to_string();
            }
            else {
                self.display.push(c);
            }
        }
        else {
            warn!("Ignoring key {:?}", c);
            return;
        }
        self.showing_result = false;
    }

    /// Commits the display as an operand followed by `symbol`.
    ///
    /// On error nothing is appended and the display is left as it was.
    pub fn append_operator(&mut self, symbol: &str) -> Result<()> {
        let op = match Operator::from_symbol(symbol) {
            Some(op) => op,
            None => bail!(ErrorKind::UnknownOperator(symbol.to_string())),
        };
        let operand = self.format.parse(&self.display)?;

        self.history.append(operand);
        self.history.append(op);
        debug!("History: {}", self.history);
        self.reset_display();
        Ok(())
    }

    pub fn clear(&mut self) {
        self.history.clear();
        self.reset_display();
    }

    /// Folds the history with the display as the final operand.
    ///
    /// The history is emptied whether or not the evaluation succeeds. An
    /// unreadable display aborts before anything is touched.
    pub fn evaluate(&mut self) -> Result<f64> {
        let operand = self.format.parse(&self.display)?;
        self.history.append(operand);

        let res = evaluate(&self.history);
        self.history.clear();
        self.showing_result = true;
        match res {
            Ok(x) => {
                self.display = self.format.format(x);
                Ok(x)
            }
            Err(e) => {
                warn!("Evaluation failed: {}", e);
                self.display = ERROR_TEXT.to_string();
                Err(e.into())
            }
        }
    }

    pub fn press(&mut self, key: &Key) -> Result<()> {
        match key {
            Key::Digits(d) => self.append_number(d),
            Key::Separator => self.append_number(&self.format.separator().to_string()),
            Key::Operator(op) => self.append_operator(op)?,
            Key::Clear => self.clear(),
            Key::Evaluate => {
                self.evaluate()?;
            }
        }
        Ok(())
    }

    fn reset_display(&mut self) {
        self.display = ZERO.to_string();
        self.showing_result = false;
    }
}

use regex::Regex;
use lazy_static::lazy_static;
use error_chain::bail;

pub mod errors {
    use error_chain::error_chain;
    error_chain! {
        errors {
            UnreadableNumber(text: String) {
                description("Display text is not a number")
                display("Display text is not a number: {:?}", text)
            }
        }

        foreign_links {
            Float(std::num::ParseFloatError);
            Pattern(regex::Error);
        }
    }
}

use errors::*;

lazy_static! {
    static ref DEFAULT_PATTERN: Regex = Regex::new(r"^-?(?:[0-9]+(?:,[0-9]*)?|,[0-9]+)$").unwrap();
}

/// Decimal separator and precision used on the calculator display.
///
/// No grouping separator is ever written or accepted.
#[derive(Debug, Clone)]
pub struct NumberFormat {
    separator: char,
    max_fraction_digits: usize,
    pattern: Regex,
}

impl NumberFormat {

    pub const DEFAULT_SEPARATOR: char = ',';
    pub const DEFAULT_FRACTION_DIGITS: usize = 3;

    // keypad characters a separator must not shadow
    const RESERVED: &'static str = "-+x*/=cC";

    pub fn new(separator: char, max_fraction_digits: usize) -> Result<NumberFormat> {
        if separator.is_ascii_digit()
            || separator.is_whitespace()
            || NumberFormat::RESERVED.contains(separator)
        {
            bail!("Separator {:?} clashes with a keypad key", separator);
        }
        let sep = regex::escape(&separator.to_string());
        let pattern = Regex::new(&format!(r"^-?(?:[0-9]+(?:{0}[0-9]*)?|{0}[0-9]+)$", sep))?;
        Ok(NumberFormat { separator, max_fraction_digits, pattern })
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    pub fn parse(&self, text: &str) -> Result<f64> {
        if !self.pattern.is_match(text) {
            bail!(ErrorKind::UnreadableNumber(text.to_string()));
        }
        let normalized = text.replace(self.separator, ".");
        Ok(normalized.parse::<f64>()?)
    }

    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "∞" } else { "-∞" }.to_string();
        }

        let mut s = format!("{:.*}", self.max_fraction_digits, value);
        if s.contains('.') {
            let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
            s.truncate(trimmed);
        }
        if s == "-0" {
            s = "0".to_string();
        }
        s.replace('.', &self.separator.to_string())
    }
}

impl Default for NumberFormat {
    fn default() -> NumberFormat {
        NumberFormat {
            separator: NumberFormat::DEFAULT_SEPARATOR,
            max_fraction_digits: NumberFormat::DEFAULT_FRACTION_DIGITS,
            pattern: DEFAULT_PATTERN.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let format = NumberFormat::default();
        let cases = vec![
            ("0", 0.0),
            ("42", 42.0),
            ("1,5", 1.5),
            ("12,", 12.0),
            (",25", 0.25),
            ("-3,75", -3.75),
            ("007", 7.0),
        ];
        for (s, expected) in cases.into_iter() {
            assert_eq!(format.parse(s).unwrap(), expected, "parsing {:?}", s);
        }
    }

    #[test]
    fn test_parse_rejects() {
        let format = NumberFormat::default();
        for s in vec!["", ",", "-", "1,2,3", "1.5", "1 000", "Error", "∞", "1e5", "٣", "1,٣"] {
            let err = format.parse(s).expect_err(s);
            assert!(matches!(err.kind(), ErrorKind::UnreadableNumber(_)), "{:?}", s);
        }
    }

    #[test]
    fn test_custom_separator() {
        let format = NumberFormat::new('.', 2).unwrap();
        assert_eq!(format.separator(), '.');
        assert_eq!(format.parse("2.5").unwrap(), 2.5);
        assert!(format.parse("2,5").is_err());
        assert_eq!(format.format(1.0 / 3.0), "0.33");

        assert!(NumberFormat::new('7', 2).is_err());
        assert!(NumberFormat::new('-', 2).is_err());
        for sep in vec!['x', '+', '*', '/', '=', 'c', 'C', ' ', '\t'] {
            assert!(NumberFormat::new(sep, 2).is_err(), "accepted separator {:?}", sep);
        }
        assert!(NumberFormat::new('\'', 2).is_ok());
    }

    #[test]
    fn test_format() {
        let format = NumberFormat::default();
        let cases = vec![
            (0.0, "0"),
            (-0.0, "0"),
            (4.0, "4"),
            (-12.0, "-12"),
            (2.5, "2,5"),
            (10.0 / 3.0, "3,333"),
            (2.0 / 3.0, "0,667"),
            (0.1 + 0.2, "0,3"),
            (-0.0001, "0"),
            (1000000.0, "1000000"),
            (std::f64::INFINITY, "∞"),
            (std::f64::NEG_INFINITY, "-∞"),
            (std::f64::NAN, "NaN"),
        ];
        for (x, expected) in cases.into_iter() {
            assert_eq!(format.format(x), expected, "formatting {}", x);
        }
    }

    #[test]
    fn test_format_is_readable() {
        let format = NumberFormat::default();
        for x in vec![0.5, -7.25, 123.0, 99.999] {
            assert_eq!(format.parse(&format.format(x)).unwrap(), x);
        }
    }
}

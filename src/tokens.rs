use std::str::Chars;
use std::iter::{Peekable};

pub mod errors {
    use error_chain::error_chain;
    error_chain! {
        errors {
            UnknownCharacter(c: char) {
                description("Unknown character")
                display("Unknown character: {}", c)
            }
        }
    }
}

use errors::*;

/// One keypad button press.
#[derive(Debug, PartialEq, Clone)]
pub enum Key {
    Digits(String),
    Separator,
    Operator(String),
    Clear,
    Evaluate,
}

pub struct InputStream<'a>{
    it: Peekable<Chars<'a>>,
}

impl<'a>  InputStream<'a> {
    fn new(s: &'a str) -> InputStream<'a> {
        InputStream {
            it: s.chars().peekable()
        }
    }
}

impl Iterator for InputStream<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        while self.it.peek()?.is_whitespace() {
            let _ = self.it.next()?;
        }
        self.it.next()
    }
}

pub struct KeyStream<'a> {
    input: Peekable<InputStream<'a>>,
    separator: char,
}

impl KeyStream<'_> {

    pub fn from_input(source: &str, separator: char) -> KeyStream {
        KeyStream {
            input: InputStream::new(source).peekable(),
            separator,
        }
    }

    fn read_while<P>(&mut self, predicate: P) -> String
        where P: Fn(&char) -> bool
    {
        let mut res = String::new();
        while let Some(c) = self.input.next_if(|c| predicate(c)) {
            res.push(c);
        }
        res
    }

    fn is_digit(c: &char) -> bool {
        c.is_ascii_digit()
    }

    fn is_operator(c: &char) -> bool {
        "+-x*/".contains(*c)
    }

    fn is_clear(c: &char) -> bool {
        "cC".contains(*c)
    }
}

impl<'a> Iterator for KeyStream<'a> {
    type Item = Result<Key>;

    fn next(&mut self) -> Option<Self::Item> {
        let ch = *self.input.peek()?;

        if KeyStream::is_digit(&ch) {
            return Some(Ok(Key::Digits(self.read_while(KeyStream::is_digit))));
        }

        let _ = self.input.next();
        if ch == self.separator {
            Some(Ok(Key::Separator))
        }
        else if KeyStream::is_operator(&ch) {
            Some(Ok(Key::Operator(ch.to_string())))
        }
        else if ch == '=' {
            Some(Ok(Key::Evaluate))
        }
        else if KeyStream::is_clear(&ch) {
            Some(Ok(Key::Clear))
        }
        else {
            Some(Err(ErrorKind::UnknownCharacter(ch).into()))
        }
    }
}


pub fn parse(source: &str, separator: char) -> Result<Vec<Key>> {
    KeyStream::from_input(source, separator).collect()
}

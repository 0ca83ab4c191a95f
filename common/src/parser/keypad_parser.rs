use super::{KeyPress, KeypadScript, KeypadScriptParser};

use regex::Regex;
use simple_error::SimpleError;


/// KeypadTextParser for plain text keypad scripts, eg "3 4 + √".
/// Each line is split into tokens on the delimiter (whitespace by default).
/// If the token parses as a number it is forwarded as an operand. Any other token is forwarded as
/// an operator symbol, known or not, the calculator decides what to do with it.
/// A token starting with '#' begins a comment running to the end of the line. Empty tokens are
/// ignored. Numbers must be finite, "nan" or "inf" cannot be typed on a keypad.
pub struct KeypadTextParser {
    delimiter: Option<Regex>
}

impl KeypadTextParser {
    const COMMENT_TOKEN: char = '#';

    /// ASCII spellings accepted for operator symbols that are hard to type.
    const SYMBOL_ALIASES: [(&'static str, &'static str); 4] = [
        ("*", "×"),
        ("/", "÷"),
        ("-", "−"),
        ("sqrt", "√"),
    ];

    /// Creates new KeypadTextParser splitting tokens on any whitespace
    pub fn new() -> Self {
        Self {
            delimiter: None
        }
    }

    /// Creates new KeypadTextParser with a custom delimiter pattern
    /// @delimiter: regex matching the text between two tokens, eg ","
    /// @return: Parser if the pattern is a valid regex, otherwise SimpleError
    pub fn using_delimiter(mut self, delimiter: &str) -> Result<Self, SimpleError> {
        let pattern = Regex::new(delimiter)
            .map_err(|e| SimpleError::with("Invalid delimiter pattern", e))?;
        self.delimiter = Some(pattern);
        Ok(self)
    }

    /// Splits a single line (comment already removed) into raw tokens.
    fn split_line<'a>(&self, line: &'a str) -> Vec<&'a str> {
        match &self.delimiter {
            Some(pattern) => pattern.split(line).collect(),
            None => line.split_whitespace().collect()
        }
    }

    /// Checks if a token is written like a number, such tokens must parse or the script is rejected.
    fn looks_numeric(token: &str) -> bool {
        let mut chars = token.chars();
        match chars.next() {
            Some(c) if c.is_ascii_digit() => true,
            Some('.') | Some('-') | Some('+') => {
                matches!(chars.next(), Some(c) if c.is_ascii_digit() || c == '.')
            },
            _ => false
        }
    }

    /// Tries to parse token string as a value.
    /// @token: string possibly representing a f64.
    /// @return: f64 value if Ok, Otherwise None if token cannot be parsed.
    fn parse_token_as_value(token: &str) -> Option<f64> {
        token.parse().ok()
    }

    /// Error for a token that is written like a number but cannot be entered on the keypad.
    fn malformed_operand(token: &str, line_index: usize) -> SimpleError {
        SimpleError::new(format!("Malformed operand '{}' on line {}.", token, line_index + 1))
    }

    /// Translates an ASCII alias into the keypad symbol, other tokens are kept as written.
    fn resolve_symbol(token: &str) -> String {
        Self::SYMBOL_ALIASES.iter()
            .find(|(alias, _)| *alias == token)
            .map(|(_, symbol)| String::from(*symbol))
            .unwrap_or_else(|| String::from(token))
    }
}

impl Default for KeypadTextParser {
    fn default() -> Self {
        Self::new()
    }
}

impl KeypadScriptParser for KeypadTextParser {
    fn parse_str(&self, data: &str) -> Result<KeypadScript, SimpleError> {
        let mut script: KeypadScript = Vec::new();

        for (line_number, line) in data.lines().enumerate() {
            for token in self.split_line(line) {
                let token = token.trim();

                if token.is_empty() {
                    continue;
                } else if token.starts_with(Self::COMMENT_TOKEN) {
                    break;
                }

                match Self::parse_token_as_value(token) {
                    Some(value) if value.is_finite() => {
                        script.push(KeyPress::Operand(value));
                    },
                    Some(_) => {
                        return Err(Self::malformed_operand(token, line_number));
                    },
                    None if Self::looks_numeric(token) => {
                        return Err(Self::malformed_operand(token, line_number));
                    },
                    None => {
                        script.push(KeyPress::Operation(Self::resolve_symbol(token)));
                    }
                }
            }
        }

        Ok(script)
    }
}

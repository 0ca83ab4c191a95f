pub(crate) mod keypad_parser;

use simple_error::SimpleError;
use std::fmt;
use std::fs::File;
use std::io::Read;

/// A single gesture forwarded from the keypad to the calculator.
#[derive(Debug, PartialEq, Clone)]
pub enum KeyPress {
    /// A finished numeric literal, forwarded as a pushed operand
    Operand(f64),
    /// An operator control, forwarded by symbol. The symbol may be unknown to the calculator.
    Operation(String)
}

impl fmt::Display for KeyPress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyPress::Operand(value) => write!(f, "{:?}", value),
            KeyPress::Operation(symbol) => write!(f, "{}", symbol)
        }
    }
}

/// Ordered list of key presses in the order they are to be replayed.
pub type KeypadScript = Vec<KeyPress>;

/// Keypad script parser is a trait to implemented by parsers of different keypad script formats
/// Implementors of the trait have to implement the parse_str function
pub trait KeypadScriptParser {
    // Parse string
    fn parse_str(&self, data: &str) -> Result<KeypadScript, SimpleError>;

    fn parse(&self, mut file: File) -> Result<KeypadScript, SimpleError> {
        let mut file_data = String::new();
        file.read_to_string(&mut file_data)
            .map_err(|e| SimpleError::with("Could not read keypad script", e))?;
        self.parse_str(file_data.as_str())
    }
}

mod operations;

pub use operations::{
    Operation,
    OperatorRegistry,
    UnaryOperators,
    BinaryOperators
};

mod parser;

pub use parser::{
    KeyPress,
    KeypadScript,
    KeypadScriptParser,
    keypad_parser::KeypadTextParser
};

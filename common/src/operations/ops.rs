use strum_macros::EnumIter;
use enum_assoc::Assoc;
use std::fmt;


/// UnaryOperators is an enum of all the operations of the calculator that consume a single operand.
/// Each enum is associated with the symbol shown on its keypad control.
#[allow(non_camel_case_types)]
#[derive(Debug,
         Eq, PartialEq, Hash,
         Copy, Clone,
         EnumIter,
         Assoc)]
#[func(pub const fn symbol(&self) -> &'static str)] // Symbol the operation is registered under
pub enum UnaryOperators {
    #[assoc(symbol="√")]
    SQRT,
}

impl UnaryOperators {
    /// Applies the operation to an operand.
    /// Square root of a negative operand yields NaN rather than failing.
    pub fn apply(&self, operand: f64) -> f64 {
        match self {
            UnaryOperators::SQRT => operand.sqrt()
        }
    }
}

/// BinaryOperators is an enum of all the operations of the calculator that consume two operands.
/// Each enum is associated with the symbol shown on its keypad control.
///
/// operand1 is always the operand reduced first, that is the one pushed *later*. For the
/// non-commutative operations the earlier pushed operand2 is the dividend/minuend.
#[allow(non_camel_case_types)]
#[derive(Debug,
         Eq, PartialEq, Hash,
         Copy, Clone,
         EnumIter,
         Assoc)]
#[func(pub const fn symbol(&self) -> &'static str)] // Symbol the operation is registered under
pub enum BinaryOperators {
    #[assoc(symbol="×")]
    MUL,
    #[assoc(symbol="÷")]
    DIV,
    #[assoc(symbol="+")]
    ADD,
    #[assoc(symbol="−")]
    SUB,
}

impl BinaryOperators {
    /// Applies the operation to two operands.
    /// @operand1: operand closest to the top of the reduction order (pushed last)
    /// @operand2: operand reduced second (pushed earlier)
    /// @return: result of the operation. Division by zero follows f64 semantics (inf or NaN).
    pub fn apply(&self, operand1: f64, operand2: f64) -> f64 {
        match self {
            BinaryOperators::MUL => operand1 * operand2,
            BinaryOperators::DIV => operand2 / operand1,
            BinaryOperators::ADD => operand1 + operand2,
            BinaryOperators::SUB => operand2 - operand1,
        }
    }
}

/// Operation is a single entry of the calculator history. Operands carry their value, operators
/// carry the kind that determines both their symbol and the function they apply.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum Operation {
    Operand(f64),
    UnaryOperator(UnaryOperators),
    BinaryOperator(BinaryOperators),
}

impl Operation {
    /// Returns the number of operands the operation consumes during reduction.
    /// Operands consume nothing.
    pub const fn arity(&self) -> u8 {
        match self {
            Operation::Operand(_) => 0,
            Operation::UnaryOperator(_) => 1,
            Operation::BinaryOperator(_) => 2,
        }
    }
}

impl From<UnaryOperators> for Operation {
    fn from(op: UnaryOperators) -> Self {
        Operation::UnaryOperator(op)
    }
}

impl From<BinaryOperators> for Operation {
    fn from(op: BinaryOperators) -> Self {
        Operation::BinaryOperator(op)
    }
}

impl fmt::Display for Operation {
    /// Canonical display symbol. Operands use the debug float form so 3 renders as 3.0.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operand(value) => {
                write!(f, "{:?}", value)
            }
            Self::UnaryOperator(op) => {
                write!(f, "{}", op.symbol())
            }
            Self::BinaryOperator(op) => {
                write!(f, "{}", op.symbol())
            }
        }
    }
}

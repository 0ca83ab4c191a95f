pub mod ops;
pub mod registry;

pub use self::ops::{
    Operation,
    UnaryOperators,
    BinaryOperators
};
pub use self::registry::OperatorRegistry;

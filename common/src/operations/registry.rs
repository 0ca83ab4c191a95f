use super::ops::{BinaryOperators, Operation, UnaryOperators};
use std::collections::HashMap;
use strum::IntoEnumIterator;


/// OperatorRegistry maps keypad symbols to the operator they perform.
/// It is populated once on construction and is read only afterwards, each calculator owns its
/// own registry so that separate instances never share state.
#[derive(Debug, Clone)]
pub struct OperatorRegistry {
    known_ops: HashMap<String, Operation>
}

impl OperatorRegistry {
    /// Creates a registry that knows every unary and binary operator of the calculator.
    pub fn new() -> Self {
        let mut registry = Self {
            known_ops: HashMap::new()
        };

        for op in BinaryOperators::iter() {
            registry.learn(op.symbol(), Operation::from(op));
        }
        for op in UnaryOperators::iter() {
            registry.learn(op.symbol(), Operation::from(op));
        }

        registry
    }

    /// Registers an operation under a symbol. An existing entry under the same symbol is replaced.
    pub(crate) fn learn(&mut self, symbol: &str, op: Operation) {
        self.known_ops.insert(String::from(symbol), op);
    }

    /// Looks up the operation registered under symbol.
    /// @symbol: exact keypad symbol, eg "×"
    /// @return: the registered operator, otherwise None if the symbol is unknown
    pub fn lookup(&self, symbol: &str) -> Option<Operation> {
        self.known_ops.get(symbol).copied()
    }

    /// Returns every registered symbol in sorted order.
    pub fn symbols(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self.known_ops.keys().map(|s| s.as_str()).collect();
        symbols.sort_unstable();
        symbols
    }

    pub fn len(&self) -> usize {
        self.known_ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known_ops.is_empty()
    }
}

impl Default for OperatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::OperatorRegistry;
    use crate::operations::ops::{
        Operation,
        BinaryOperators::*,
        UnaryOperators::*
    };

    #[test]
    fn test_registry_knows_all_operators() {
        let registry = OperatorRegistry::new();

        assert_eq!(registry.len(), 5);
        assert_eq!(registry.lookup("×"), Some(Operation::BinaryOperator(MUL)));
        assert_eq!(registry.lookup("÷"), Some(Operation::BinaryOperator(DIV)));
        assert_eq!(registry.lookup("+"), Some(Operation::BinaryOperator(ADD)));
        assert_eq!(registry.lookup("−"), Some(Operation::BinaryOperator(SUB)));
        assert_eq!(registry.lookup("√"), Some(Operation::UnaryOperator(SQRT)));
    }

    #[test]
    fn test_registry_unknown_symbol() {
        let registry = OperatorRegistry::new();

        assert_eq!(registry.lookup("%"), None);
        // ASCII look-alikes are not the registered symbols
        assert_eq!(registry.lookup("-"), None);
        assert_eq!(registry.lookup("*"), None);
        assert_eq!(registry.lookup(""), None);
    }

    #[test]
    fn test_registry_learn_overwrites() {
        let mut registry = OperatorRegistry::new();
        registry.learn("+", Operation::BinaryOperator(MUL));

        assert_eq!(registry.len(), 5);
        assert_eq!(registry.lookup("+"), Some(Operation::BinaryOperator(MUL)));
    }

    #[test]
    fn test_registry_instances_are_independent() {
        let mut first = OperatorRegistry::new();
        let second = OperatorRegistry::new();
        first.learn("+", Operation::BinaryOperator(SUB));

        assert_eq!(second.lookup("+"), Some(Operation::BinaryOperator(ADD)));
    }

    #[test]
    fn test_registry_symbols_sorted() {
        let registry = OperatorRegistry::new();
        let symbols = registry.symbols();

        assert_eq!(symbols.len(), 5);
        let mut sorted = symbols.clone();
        sorted.sort_unstable();
        assert_eq!(symbols, sorted);
        assert!(symbols.contains(&"√"));
    }
}

use std::collections::HashMap;

use crate::input::{Command, Constant, Input, Operator};
use crate::radix::Base;

// Dictionary entry: what the word does plus its help text
#[derive(Debug, Clone, PartialEq)]
pub struct DictEntry {
    pub input: Input,
    pub doc: &'static str,
}

/// Word names understood by the line interpreter
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: HashMap<&'static str, DictEntry>,
}

impl Dictionary {
    pub fn new() -> Self {
        let mut dictionary = Self::default();
        register_builtins(&mut dictionary);
        dictionary
    }

    pub fn insert(&mut self, name: &'static str, input: impl Into<Input>, doc: &'static str) {
        self.entries.insert(name, DictEntry { input: input.into(), doc });
    }

    pub fn lookup(&self, name: &str) -> Option<&DictEntry> {
        self.entries.get(name)
    }

    /// All word names, sorted
    pub fn words(&self) -> Vec<&'static str> {
        let mut words: Vec<&'static str> = self.entries.keys().copied().collect();
        words.sort_unstable();
        words
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn register_builtins(dict: &mut Dictionary) {
    // Commands
    dict.insert(Command::Enter.name(), Command::Enter,
        "Commit the number being typed, or duplicate X when idle.\nExample: 5 enter 3 + => 8");
    dict.insert(Command::Backspace.name(), Command::Backspace,
        "Delete the last typed character, or drop X when idle.");
    dict.insert(Command::Clx.name(), Command::Clx,
        "Abandon the number being typed and show 0. The stack is unchanged.");
    dict.insert(Command::ClearStack.name(), Command::ClearStack,
        "Remove every entry from the stack.");
    dict.insert(Command::Swap.name(), Command::Swap,
        "Exchange X and Y.\nExample: 1 enter 2 swap => 1 on top");
    dict.insert(Command::Roll.name(), Command::Roll,
        "Move X to the bottom of the stack.\nExample: 1 enter 2 enter 3 enter roll => 3 1 2");
    dict.insert(Command::Sto.name(), Command::Sto,
        "Copy X into memory without pushing anything.");
    dict.insert(Command::Rcl.name(), Command::Rcl,
        "Push a copy of the memory register.");
    dict.insert(Command::Chs.name(), Command::Chs,
        "Change the sign of the number being typed, or of X.");

    // Binary operators (Y op X)
    dict.insert(Operator::Add.name(), Operator::Add,
        "Add X to Y.\nExample: 5 enter 3 + => 8");
    dict.insert(Operator::Subtract.name(), Operator::Subtract,
        "Subtract X from Y.\nExample: 10 enter 3 - => 7");
    dict.insert(Operator::Multiply.name(), Operator::Multiply,
        "Multiply Y by X.\nExample: 6 enter 7 * => 42");
    dict.insert(Operator::Divide.name(), Operator::Divide,
        "Divide Y by X.\nExample: 5 enter 3 / => 1.6666666666666667");
    dict.insert(Operator::Pow.name(), Operator::Pow,
        "Raise Y to the power X.\nExample: 2 enter 10 pow => 1024");

    // Unary operators
    dict.insert(Operator::Sqrt.name(), Operator::Sqrt,
        "Square root of X.\nExample: 16 sqrt => 4");
    dict.insert(Operator::Sqr.name(), Operator::Sqr,
        "Square of X.\nExample: 12 sqr => 144");
    dict.insert(Operator::Log.name(), Operator::Log,
        "Natural logarithm of X.\nExample: e log => 1");
    dict.insert(Operator::Exp.name(), Operator::Exp,
        "e raised to the power X.\nExample: 0 exp => 1");
    dict.insert(Operator::Inv.name(), Operator::Inv,
        "Reciprocal of X.\nExample: 4 inv => 0.25");

    // Constants
    dict.insert(Constant::Pi.name(), Constant::Pi,
        "Push pi.");
    dict.insert(Constant::E.name(), Constant::E,
        "Push Euler's number.");
    dict.insert(Constant::Answer.name(), Constant::Answer,
        "Push 42. Type it as '42 to tell it apart from the digits 4 and 2.");

    // Bases
    dict.insert(Base::Binary.name(), Base::Binary,
        "Switch to base 2. Only 0 and 1 can be typed; values show truncated to integers.");
    dict.insert(Base::Octal.name(), Base::Octal,
        "Switch to base 8. Only 0-7 can be typed; values show truncated to integers.");
    dict.insert(Base::Decimal.name(), Base::Decimal,
        "Switch to base 10.");
    dict.insert(Base::Hexadecimal.name(), Base::Hexadecimal,
        "Switch to base 16. Digits A-F are typed in uppercase; values show truncated to integers.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_input_name_is_registered() {
        let dict = Dictionary::new();
        for command in Command::ALL {
            assert_eq!(dict.lookup(command.name()).unwrap().input, Input::Command(command));
        }
        for op in Operator::ALL {
            assert_eq!(dict.lookup(op.name()).unwrap().input, Input::Operator(op));
        }
        for constant in Constant::ALL {
            assert_eq!(dict.lookup(constant.name()).unwrap().input, Input::Constant(constant));
        }
        for base in Base::ALL {
            assert_eq!(dict.lookup(base.name()).unwrap().input, Input::SetBase(base));
        }
        assert_eq!(dict.len(), 26);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let dict = Dictionary::new();
        assert!(dict.lookup("e").is_some());
        assert!(dict.lookup("E").is_none());
        assert!(dict.lookup("SWAP").is_none());
    }

    #[test]
    fn test_words_sorted() {
        let dict = Dictionary::new();
        let words = dict.words();
        assert_eq!(words.len(), dict.len());
        assert!(words.windows(2).all(|w| w[0] <= w[1]));
        assert!(words.contains(&"clear-stack"));
    }

    #[test]
    fn test_every_word_has_docs() {
        let dict = Dictionary::new();
        for word in dict.words() {
            assert!(!dict.lookup(word).unwrap().doc.is_empty(), "{} has no doc", word);
        }
    }
}

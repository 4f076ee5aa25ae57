// Line interpreter: drives the engine from text
//
// EXECUTION MODEL:
// 1. Number tokens: each character is submitted as a keypad digit, exactly as
//    if typed. Nothing is committed until a word (enter, an operator, ...) does.
// 2. Words: looked up in the dictionary and submitted as one input.
// 3. An unknown word stops the line. Earlier tokens have already taken effect;
//    the engine has no rollback.

use thiserror::Error;
use tracing::{debug, warn};

use crate::builtins::Dictionary;
use crate::engine::Engine;
use crate::input::Digit;
use crate::radix::Base;
use crate::tokenizer::{TokenKind, tokenize};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("unknown word '{word}' at line {line}, column {column}")]
    UnknownWord {
        word: String,
        line: usize,
        column: usize,
    },
}

/// An engine plus the words that drive it
#[derive(Debug, Clone)]
pub struct Interpreter {
    pub engine: Engine,
    pub dictionary: Dictionary,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        Self::with_base(Base::Decimal)
    }

    pub fn with_base(base: Base) -> Self {
        Self {
            engine: Engine::with_base(base),
            dictionary: Dictionary::new(),
        }
    }

    /// Run one line of input and return the display afterwards
    pub fn execute(&mut self, line: &str) -> Result<&str, EvalError> {
        execute_string(line, &mut self.engine, &self.dictionary)?;
        Ok(self.engine.display())
    }
}

pub fn execute_string(
    code: &str,
    engine: &mut Engine,
    dictionary: &Dictionary,
) -> Result<(), EvalError> {
    for token in tokenize(code) {
        match &token.kind {
            TokenKind::Number(text) => {
                for ch in text.chars() {
                    // Number tokens only contain keypad characters
                    if let Ok(digit) = Digit::try_from(ch) {
                        engine.submit_digit(digit);
                    }
                }
            }
            TokenKind::Word(word) => {
                let entry = dictionary.lookup(word).ok_or_else(|| {
                    warn!(word = %word, line = token.pos.line, column = token.pos.column, "unknown word");
                    EvalError::UnknownWord {
                        word: word.clone(),
                        line: token.pos.line,
                        column: token.pos.column,
                    }
                })?;
                debug!(word = %word, input = ?entry.input, "word");
                engine.submit(entry.input);
            }
        }
    }
    Ok(())
}

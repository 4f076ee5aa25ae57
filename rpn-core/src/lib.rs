//! # RPN Core
//!
//! Evaluation engine for a stack-based Reverse Polish Notation calculator.
//!
//! The engine owns the operand stack, the pending input buffer, a single
//! memory register and the active number base. It reacts to typed input
//! events (digits, commands, operators, constants, base changes) and after
//! each one reports the string the display should show.
//!
//! ## Features
//!
//! - **Deferred entry**: digits build a buffer that only reaches the stack
//!   on ENTER or on any operation that consumes X
//! - **Multiple bases**: entry and display in base 2, 8, 10 and 16
//! - **No error channel**: invalid results become NaN and display as `Error`
//! - **Text front end**: a tokenizer and word dictionary for REPLs and scripts
//!
//! ## Example
//!
//! ```
//! use rpn_core::{Engine, Command, Digit, Operator};
//!
//! let mut engine = Engine::new();
//! engine.submit_digit(Digit::try_from('5').unwrap());
//! engine.submit_command(Command::Enter);
//! engine.submit_digit(Digit::try_from('3').unwrap());
//!
//! assert_eq!(engine.submit_operator(Operator::Divide), "1.6666666666666667");
//! ```
//!
//! Or through the line interpreter:
//!
//! ```
//! use rpn_core::Interpreter;
//!
//! let mut interp = Interpreter::new();
//! assert_eq!(interp.execute("hex FF enter sqr").unwrap(), "FE01");
//! ```

// Public modules
pub mod input;
pub mod radix;
pub mod engine;
pub mod builtins;
pub mod tokenizer;
pub mod evaluator;
pub mod primitives;

// Re-exports for convenience
pub use engine::{Engine, Mode};
pub use input::{Command, Constant, Digit, Input, InputError, Operator};
pub use radix::{Base, format_value};
pub use builtins::{DictEntry, Dictionary};
pub use evaluator::{EvalError, Interpreter, execute_string};

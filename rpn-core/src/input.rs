//! Typed input events accepted by the engine
//!
//! Every keystroke or button press maps onto exactly one [`Input`]. The UI
//! layer builds these (from keys, clicks or words) and hands them to
//! [`Engine::submit`](crate::engine::Engine::submit).

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

use crate::radix::Base;

/// Errors raised while building typed input from raw characters or names
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("'{0}' is not a keypad digit")]
    InvalidDigit(char),
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("unknown operator: {0}")]
    UnknownOperator(String),
    #[error("unknown constant: {0}")]
    UnknownConstant(String),
    #[error("unsupported base: {0} (expected 2, 8, 10 or 16)")]
    InvalidBase(String),
}

/// One keypad character: `0-9`, `A-F`, `.` or `-`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(char);

impl Digit {
    pub fn as_char(self) -> char {
        self.0
    }

    pub fn is_decimal_point(self) -> bool {
        self.0 == '.'
    }
}

impl TryFrom<char> for Digit {
    type Error = InputError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            '0'..='9' | 'A'..='F' | '.' | '-' => Ok(Digit(ch)),
            'a'..='f' => Ok(Digit(ch.to_ascii_uppercase())),
            other => Err(InputError::InvalidDigit(other)),
        }
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Named commands that manipulate the stack, buffer or memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Enter,
    Backspace,
    Clx,
    ClearStack,
    Swap,
    Roll,
    Sto,
    Rcl,
    Chs,
}

impl Command {
    pub const ALL: [Command; 9] = [
        Command::Enter,
        Command::Backspace,
        Command::Clx,
        Command::ClearStack,
        Command::Swap,
        Command::Roll,
        Command::Sto,
        Command::Rcl,
        Command::Chs,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::Enter => "enter",
            Command::Backspace => "backspace",
            Command::Clx => "clx",
            Command::ClearStack => "clear-stack",
            Command::Swap => "swap",
            Command::Roll => "roll",
            Command::Sto => "sto",
            Command::Rcl => "rcl",
            Command::Chs => "chs",
        }
    }
}

impl FromStr for Command {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| InputError::UnknownCommand(s.to_string()))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Arithmetic operators, unary (X) and binary (Y, X)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Pow,
    Sqrt,
    Sqr,
    Log,
    Exp,
    Inv,
}

impl Operator {
    pub const ALL: [Operator; 10] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Pow,
        Operator::Sqrt,
        Operator::Sqr,
        Operator::Log,
        Operator::Exp,
        Operator::Inv,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Pow => "pow",
            Operator::Sqrt => "sqrt",
            Operator::Sqr => "sqr",
            Operator::Log => "log",
            Operator::Exp => "exp",
            Operator::Inv => "inv",
        }
    }

    /// Number of stack entries the operator consumes
    pub fn arity(self) -> usize {
        match self {
            Operator::Add
            | Operator::Subtract
            | Operator::Multiply
            | Operator::Divide
            | Operator::Pow => 2,
            Operator::Sqrt | Operator::Sqr | Operator::Log | Operator::Exp | Operator::Inv => 1,
        }
    }

    /// Apply the operator to its operands, in stack order `[.., Y, X]`
    ///
    /// Binary operators compute `Y op X`. Returns `None` when the slice does
    /// not hold exactly `arity()` operands. There is no domain checking:
    /// `sqrt(-1)` and `log(0)` produce NaN and -infinity just as the float
    /// functions do.
    pub fn apply(self, operands: &[f64]) -> Option<f64> {
        let result = match (self, operands) {
            (Operator::Add, &[y, x]) => y + x,
            (Operator::Subtract, &[y, x]) => y - x,
            (Operator::Multiply, &[y, x]) => y * x,
            (Operator::Divide, &[y, x]) => y / x,
            (Operator::Pow, &[y, x]) => pow(y, x),
            (Operator::Sqrt, &[x]) => x.sqrt(),
            (Operator::Sqr, &[x]) => x * x,
            (Operator::Log, &[x]) => x.ln(),
            (Operator::Exp, &[x]) => x.exp(),
            (Operator::Inv, &[x]) => 1.0 / x,
            _ => return None,
        };
        Some(result)
    }
}

// powf gives 1 for 1^NaN and (-1)^inf; the calculator shows Error for both
fn pow(base: f64, exponent: f64) -> f64 {
    if exponent.is_nan() || (base.abs() == 1.0 && exponent.is_infinite()) {
        return f64::NAN;
    }
    base.powf(exponent)
}

impl FromStr for Operator {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| InputError::UnknownOperator(s.to_string()))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Constants that can be pushed with a single key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    Pi,
    E,
    Answer,
}

impl Constant {
    pub const ALL: [Constant; 3] = [Constant::Pi, Constant::E, Constant::Answer];

    pub fn name(self) -> &'static str {
        match self {
            Constant::Pi => "pi",
            Constant::E => "e",
            Constant::Answer => "42",
        }
    }

    pub fn value(self) -> f64 {
        match self {
            Constant::Pi => core::f64::consts::PI,
            Constant::E => core::f64::consts::E,
            Constant::Answer => 42.0,
        }
    }
}

impl FromStr for Constant {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Constant::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| InputError::UnknownConstant(s.to_string()))
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Any single event the engine reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    Digit(Digit),
    Command(Command),
    Operator(Operator),
    Constant(Constant),
    SetBase(Base),
}

impl From<Digit> for Input {
    fn from(digit: Digit) -> Self {
        Input::Digit(digit)
    }
}

impl From<Command> for Input {
    fn from(command: Command) -> Self {
        Input::Command(command)
    }
}

impl From<Operator> for Input {
    fn from(op: Operator) -> Self {
        Input::Operator(op)
    }
}

impl From<Constant> for Input {
    fn from(constant: Constant) -> Self {
        Input::Constant(constant)
    }
}

impl From<Base> for Input {
    fn from(base: Base) -> Self {
        Input::SetBase(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_from_char() {
        assert_eq!(Digit::try_from('7').unwrap().as_char(), '7');
        assert_eq!(Digit::try_from('c').unwrap().as_char(), 'C');
        assert!(Digit::try_from('.').unwrap().is_decimal_point());
        assert_eq!(Digit::try_from('e').unwrap(), Digit::try_from('E').unwrap());
        assert_eq!(Digit::try_from('G'), Err(InputError::InvalidDigit('G')));
        assert_eq!(Digit::try_from(' '), Err(InputError::InvalidDigit(' ')));
    }

    #[test]
    fn test_names_round_trip_through_from_str() {
        for command in Command::ALL {
            assert_eq!(command.name().parse::<Command>().unwrap(), command);
        }
        for op in Operator::ALL {
            assert_eq!(op.name().parse::<Operator>().unwrap(), op);
        }
        for constant in Constant::ALL {
            assert_eq!(constant.name().parse::<Constant>().unwrap(), constant);
        }
        assert!("drop".parse::<Command>().is_err());
        assert!("%".parse::<Operator>().is_err());
    }

    #[test]
    fn test_operator_arity() {
        assert_eq!(Operator::Subtract.arity(), 2);
        assert_eq!(Operator::Pow.arity(), 2);
        assert_eq!(Operator::Inv.arity(), 1);
        assert_eq!(Operator::ALL.iter().filter(|op| op.arity() == 1).count(), 5);
    }

    #[test]
    fn test_binary_operand_order() {
        assert_eq!(Operator::Subtract.apply(&[10.0, 3.0]), Some(7.0));
        assert_eq!(Operator::Divide.apply(&[1.0, 4.0]), Some(0.25));
        assert_eq!(Operator::Pow.apply(&[2.0, 10.0]), Some(1024.0));
    }

    #[test]
    fn test_apply_needs_exact_arity() {
        assert_eq!(Operator::Add.apply(&[1.0]), None);
        assert_eq!(Operator::Add.apply(&[]), None);
        assert_eq!(Operator::Sqrt.apply(&[4.0, 9.0]), None);
        for op in Operator::ALL {
            let operands = vec![2.0; op.arity()];
            assert!(op.apply(&operands).is_some(), "{} with {} operands", op, op.arity());
        }
    }

    #[test]
    fn test_exp() {
        assert_eq!(Operator::Exp.apply(&[0.0]), Some(1.0));
        assert_eq!(Operator::Exp.apply(&[1.0]), Some(core::f64::consts::E));
        assert_eq!(Operator::Exp.apply(&[f64::NEG_INFINITY]), Some(0.0));
    }

    #[test]
    fn test_invalid_domains_yield_nan_or_infinity() {
        let apply = |op: Operator, operands: &[f64]| op.apply(operands).unwrap();
        assert!(apply(Operator::Sqrt, &[-1.0]).is_nan());
        assert!(apply(Operator::Log, &[-1.0]).is_nan());
        assert_eq!(apply(Operator::Log, &[0.0]), f64::NEG_INFINITY);
        assert_eq!(apply(Operator::Inv, &[0.0]), f64::INFINITY);
        assert_eq!(apply(Operator::Divide, &[1.0, 0.0]), f64::INFINITY);
        assert!(apply(Operator::Divide, &[0.0, 0.0]).is_nan());
        assert!(apply(Operator::Pow, &[1.0, f64::NAN]).is_nan());
    }

    #[test]
    fn test_constants() {
        assert_eq!(Constant::Answer.value(), 42.0);
        assert_eq!(Constant::Pi.value(), core::f64::consts::PI);
        assert_eq!("e".parse::<Constant>().unwrap(), Constant::E);
    }
}

// Unary and binary operators
//
// Stack order is [..., Y, X]; binary operators compute Y op X.

use tracing::trace;

use crate::engine::Engine;
use crate::input::Operator;

pub fn operator_impl(engine: &mut Engine, op: Operator) {
    engine.commit_input();

    let start = engine.stack.len().saturating_sub(op.arity());
    let Some(result) = op.apply(&engine.stack[start..]) else {
        trace!(op = op.name(), depth = engine.stack.len(), "not enough operands");
        return;
    };
    engine.stack.truncate(start);
    engine.push(result);
    engine.show_value(result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Command, Digit};

    fn engine_with(values: &[&str]) -> Engine {
        let mut engine = Engine::new();
        for value in values {
            for ch in value.chars() {
                engine.submit_digit(Digit::try_from(ch).unwrap());
            }
            engine.submit_command(Command::Enter);
        }
        engine
    }

    #[test]
    fn test_subtract_uses_y_minus_x() {
        let mut engine = engine_with(&["10", "4"]);
        operator_impl(&mut engine, Operator::Subtract);
        assert_eq!(engine.stack(), &[6.0]);
        assert_eq!(engine.display(), "6");
    }

    #[test]
    fn test_pow_uses_y_to_the_x() {
        let mut engine = engine_with(&["2", "8"]);
        operator_impl(&mut engine, Operator::Pow);
        assert_eq!(engine.stack(), &[256.0]);
    }

    #[test]
    fn test_operator_commits_buffer() {
        let mut engine = engine_with(&["5"]);
        engine.submit_digit(Digit::try_from('3').unwrap());
        operator_impl(&mut engine, Operator::Multiply);
        assert_eq!(engine.stack(), &[15.0]);
        assert!(!engine.is_inputting());
    }

    #[test]
    fn test_binary_with_one_entry_is_noop() {
        let mut engine = engine_with(&["5"]);
        operator_impl(&mut engine, Operator::Add);
        assert_eq!(engine.stack(), &[5.0]);
    }

    #[test]
    fn test_binary_on_empty_stack_commits_live_buffer() {
        let mut engine = Engine::new();
        engine.submit_digit(Digit::try_from('5').unwrap());
        operator_impl(&mut engine, Operator::Add);
        assert_eq!(engine.stack(), &[5.0]);
        assert_eq!(engine.mode(), &crate::engine::Mode::Idle);
        assert_eq!(engine.display(), "5");
    }

    #[test]
    fn test_exp() {
        let mut engine = engine_with(&["0"]);
        operator_impl(&mut engine, Operator::Exp);
        assert_eq!(engine.stack(), &[1.0]);
        assert_eq!(engine.display(), "1");

        let mut engine = engine_with(&["1"]);
        operator_impl(&mut engine, Operator::Exp);
        assert_eq!(engine.stack(), &[core::f64::consts::E]);
        assert_eq!(engine.display(), "2.718281828459045");
    }

    #[test]
    fn test_unary_on_empty_stack_is_noop() {
        let mut engine = Engine::new();
        operator_impl(&mut engine, Operator::Sqrt);
        assert!(engine.stack().is_empty());
        assert_eq!(engine.display(), "0");
    }

    #[test]
    fn test_unary_ops() {
        let mut engine = engine_with(&["16"]);
        operator_impl(&mut engine, Operator::Sqrt);
        assert_eq!(engine.stack(), &[4.0]);
        operator_impl(&mut engine, Operator::Inv);
        assert_eq!(engine.stack(), &[0.25]);
        operator_impl(&mut engine, Operator::Sqr);
        assert_eq!(engine.stack(), &[0.0625]);
    }

    #[test]
    fn test_invalid_domain_shows_error_and_recovers() {
        let mut engine = engine_with(&["-4"]);
        operator_impl(&mut engine, Operator::Sqrt);
        assert!(engine.stack()[0].is_nan());
        assert_eq!(engine.display(), "Error");

        engine.submit_command(Command::ClearStack);
        engine.submit_digit(Digit::try_from('1').unwrap());
        engine.submit_command(Command::Enter);
        engine.submit_digit(Digit::try_from('2').unwrap());
        operator_impl(&mut engine, Operator::Add);
        assert_eq!(engine.display(), "3");
    }

    #[test]
    fn test_divide_by_zero_is_infinite() {
        let mut engine = engine_with(&["1", "0"]);
        operator_impl(&mut engine, Operator::Divide);
        assert_eq!(engine.display(), "Infinity");
    }
}

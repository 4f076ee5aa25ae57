use tracing::debug;

use crate::input::{Command, Constant, Digit, Input, Operator};
use crate::primitives;
use crate::radix::{self, Base};

/// Whether the user is mid-entry
///
/// While `Entering`, the logical X value is the buffer, not the stack top.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    Entering { buffer: String },
}

/// The calculator's evaluation engine
///
/// Owns the operand stack, the pending input, the memory register and the
/// active base. Every `submit_*` call runs to completion and returns the
/// string the display should show.
#[derive(Debug, Clone)]
pub struct Engine {
    pub(crate) stack: Vec<f64>,
    pub(crate) mode: Mode,
    pub(crate) memory: f64,
    pub(crate) base: Base,
    display: String,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::with_base(Base::Decimal)
    }

    pub fn with_base(base: Base) -> Self {
        Self {
            stack: Vec::new(),
            mode: Mode::Idle,
            memory: 0.0,
            base,
            display: "0".to_string(),
        }
    }

    // The UI can inspect state but only engine operations mutate it

    /// Operand stack, bottom first (the last element is X)
    pub fn stack(&self) -> &[f64] {
        &self.stack
    }

    pub fn memory(&self) -> f64 {
        self.memory
    }

    pub fn base(&self) -> Base {
        self.base
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn is_inputting(&self) -> bool {
        matches!(self.mode, Mode::Entering { .. })
    }

    pub fn input_buffer(&self) -> Option<&str> {
        match &self.mode {
            Mode::Entering { buffer } => Some(buffer),
            Mode::Idle => None,
        }
    }

    /// What the display currently shows
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Status-line text for the active base; nothing in base 10
    pub fn mode_indicator(&self) -> Option<String> {
        match self.base {
            Base::Decimal => None,
            other => Some(format!("BASE {}", other.radix())),
        }
    }

    /// The logical X register as STO sees it
    ///
    /// A live buffer is read with the base-10 float parse even when another
    /// base is active, so "12" typed in hex stores twelve and "FF" stores NaN.
    /// ENTER uses the active base instead; the two paths intentionally differ.
    pub fn current_x(&self) -> f64 {
        match &self.mode {
            Mode::Entering { buffer } => radix::parse_decimal(buffer),
            Mode::Idle => self.top().unwrap_or(0.0),
        }
    }

    /// Apply any input event and return the new display
    pub fn submit(&mut self, input: Input) -> &str {
        match input {
            Input::Digit(digit) => self.submit_digit(digit),
            Input::Command(command) => self.submit_command(command),
            Input::Operator(op) => self.submit_operator(op),
            Input::Constant(constant) => self.submit_constant(constant),
            Input::SetBase(base) => self.set_base(base),
        }
    }

    pub fn submit_digit(&mut self, digit: Digit) -> &str {
        primitives::entry::digit_impl(self, digit);
        &self.display
    }

    pub fn submit_command(&mut self, command: Command) -> &str {
        match command {
            Command::Enter => primitives::entry::enter_impl(self),
            Command::Backspace => primitives::entry::backspace_impl(self),
            Command::Clx => primitives::entry::clx_impl(self),
            Command::Chs => primitives::entry::chs_impl(self),
            Command::ClearStack => primitives::stack::clear_stack_impl(self),
            Command::Swap => primitives::stack::swap_impl(self),
            Command::Roll => primitives::stack::roll_impl(self),
            Command::Sto => primitives::memory::sto_impl(self),
            Command::Rcl => primitives::memory::rcl_impl(self),
        }
        &self.display
    }

    pub fn submit_operator(&mut self, op: Operator) -> &str {
        primitives::arithmetic::operator_impl(self, op);
        &self.display
    }

    pub fn submit_constant(&mut self, constant: Constant) -> &str {
        primitives::constant::constant_impl(self, constant);
        &self.display
    }

    pub fn set_base(&mut self, base: Base) -> &str {
        primitives::base::set_base_impl(self, base);
        &self.display
    }

    // Internal helpers shared by the primitives

    pub(crate) fn push(&mut self, value: f64) {
        self.stack.push(value);
    }

    pub(crate) fn pop(&mut self) -> Option<f64> {
        self.stack.pop()
    }

    pub(crate) fn top(&self) -> Option<f64> {
        self.stack.last().copied()
    }

    /// Push the live buffer, parsed in the active base
    ///
    /// Returns false when there was nothing to commit. An empty buffer is
    /// left alone rather than pushed.
    pub(crate) fn commit_input(&mut self) -> bool {
        let value = match &self.mode {
            Mode::Entering { buffer } if !buffer.is_empty() => {
                radix::parse_in_base(buffer, self.base)
            }
            _ => return false,
        };
        self.push(value);
        self.mode = Mode::Idle;
        self.show_value(value);
        true
    }

    pub(crate) fn exit_input(&mut self) {
        self.mode = Mode::Idle;
    }

    pub(crate) fn show_text(&mut self, text: &str) {
        self.display = text.to_uppercase();
        self.log_state();
    }

    pub(crate) fn show_buffer(&mut self) {
        if let Mode::Entering { buffer } = &self.mode {
            self.display = buffer.to_uppercase();
        }
        self.log_state();
    }

    pub(crate) fn show_value(&mut self, value: f64) {
        self.display = radix::format_value(value, self.base);
        self.log_state();
    }

    /// Show X, or zero when the stack is empty
    pub(crate) fn show_top(&mut self) {
        self.show_value(self.top().unwrap_or(0.0));
    }

    fn log_state(&self) {
        debug!(
            stack = ?self.stack,
            buffer = ?self.input_buffer(),
            base = self.base.radix(),
            display = %self.display,
            "display updated"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(engine: &mut Engine, text: &str) {
        for ch in text.chars() {
            engine.submit_digit(Digit::try_from(ch).unwrap());
        }
    }

    #[test]
    fn test_new_engine_is_idle() {
        let engine = Engine::new();
        assert!(engine.stack().is_empty());
        assert_eq!(engine.memory(), 0.0);
        assert_eq!(engine.base(), Base::Decimal);
        assert_eq!(engine.mode(), &Mode::Idle);
        assert_eq!(engine.display(), "0");
        assert_eq!(engine.mode_indicator(), None);
    }

    #[test]
    fn test_mode_indicator() {
        let engine = Engine::with_base(Base::Hexadecimal);
        assert_eq!(engine.mode_indicator().as_deref(), Some("BASE 16"));
        assert_eq!(Engine::with_base(Base::Binary).mode_indicator().as_deref(), Some("BASE 2"));
    }

    #[test]
    fn test_current_x_sources() {
        let mut engine = Engine::new();
        assert_eq!(engine.current_x(), 0.0);

        digits(&mut engine, "9");
        engine.submit_command(Command::Enter);
        assert_eq!(engine.current_x(), 9.0);

        digits(&mut engine, "2.5");
        assert_eq!(engine.current_x(), 2.5);
    }

    #[test]
    fn test_commit_pushes_and_displays() {
        let mut engine = Engine::new();
        digits(&mut engine, "12");
        assert!(engine.commit_input());
        assert_eq!(engine.stack(), &[12.0]);
        assert_eq!(engine.display(), "12");
        assert!(!engine.is_inputting());
        assert!(!engine.commit_input());
    }

    #[test]
    fn test_commit_ignores_empty_buffer() {
        let mut engine = Engine::new();
        engine.mode = Mode::Entering { buffer: String::new() };
        assert!(!engine.commit_input());
        assert!(engine.stack().is_empty());
    }

    #[test]
    fn test_submit_dispatches_every_input_class() {
        let mut engine = Engine::new();
        engine.submit(Input::Digit(Digit::try_from('3').unwrap()));
        engine.submit(Input::Command(Command::Enter));
        engine.submit(Input::Constant(Constant::Answer));
        engine.submit(Input::Operator(Operator::Add));
        assert_eq!(engine.submit(Input::SetBase(Base::Hexadecimal)), "2D");
        assert_eq!(engine.stack(), &[45.0]);
    }
}

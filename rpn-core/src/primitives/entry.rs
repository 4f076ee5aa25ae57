// Digit entry, ENTER, backspace, CLx and sign change

use tracing::trace;

use crate::engine::{Engine, Mode};
use crate::input::Digit;

// Append a keypad character to the buffer, starting a fresh buffer when idle
pub fn digit_impl(engine: &mut Engine, digit: Digit) {
    let ch = digit.as_char();
    if !engine.base.accepts(ch) {
        trace!(digit = %ch, base = engine.base.radix(), "digit rejected for base");
        return;
    }

    if let Mode::Idle = engine.mode {
        engine.mode = Mode::Entering { buffer: String::new() };
    }

    if let Mode::Entering { buffer } = &mut engine.mode {
        if digit.is_decimal_point() && buffer.contains('.') {
            trace!("second decimal point ignored");
            return;
        }
        buffer.push(ch);
    }
    engine.show_buffer();
}

// ENTER: commit the buffer, or duplicate X when idle
pub fn enter_impl(engine: &mut Engine) {
    if engine.is_inputting() {
        engine.commit_input();
        return;
    }
    if let Some(x) = engine.top() {
        engine.push(x);
        engine.show_value(x);
    }
}

// Backspace: edit the buffer, or drop X when idle
pub fn backspace_impl(engine: &mut Engine) {
    match &mut engine.mode {
        Mode::Entering { buffer } => {
            buffer.pop();
            if buffer.is_empty() {
                engine.exit_input();
                engine.show_text("0");
            } else {
                engine.show_buffer();
            }
        }
        Mode::Idle => {
            engine.pop();
            engine.show_top();
        }
    }
}

// CLx: abandon any entry and show zero; the stack is untouched
pub fn clx_impl(engine: &mut Engine) {
    engine.exit_input();
    engine.show_text("0");
}

// CHS: toggle the buffer's sign, or negate X in place
pub fn chs_impl(engine: &mut Engine) {
    match &mut engine.mode {
        Mode::Entering { buffer } => {
            if buffer.starts_with('-') {
                buffer.remove(0);
            } else {
                buffer.insert(0, '-');
            }
            engine.show_buffer();
        }
        Mode::Idle => {
            if let Some(x) = engine.stack.last_mut() {
                *x = -*x;
                let negated = *x;
                engine.show_value(negated);
            }
        }
    }
}

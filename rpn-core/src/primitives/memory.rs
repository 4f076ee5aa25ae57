// Memory register: STO and RCL

use crate::engine::Engine;

// STO: copy the logical X into memory without touching the stack
//
// The display keeps showing whatever it showed; entry mode ends so the next
// digit starts a new number.
pub fn sto_impl(engine: &mut Engine) {
    engine.memory = engine.current_x();
    engine.exit_input();
}

// RCL: push a copy of memory, bypassing any live buffer
pub fn rcl_impl(engine: &mut Engine) {
    let value = engine.memory;
    engine.push(value);
    engine.show_value(value);
}

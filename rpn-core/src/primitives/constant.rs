// Constant insertion

use crate::engine::Engine;
use crate::input::Constant;

// A live buffer is committed first so the typed number stays beneath the constant
pub fn constant_impl(engine: &mut Engine, constant: Constant) {
    engine.commit_input();
    let value = constant.value();
    engine.push(value);
    engine.show_value(value);
}

// Stack manipulation: clear, swap and roll

use tracing::trace;

use crate::engine::Engine;

// Empty the stack and abandon any entry
pub fn clear_stack_impl(engine: &mut Engine) {
    engine.stack.clear();
    engine.exit_input();
    engine.show_text("0");
}

// Swap X and Y; a live buffer is committed first so it becomes X
pub fn swap_impl(engine: &mut Engine) {
    engine.commit_input();

    let len = engine.stack.len();
    if len < 2 {
        trace!(depth = len, "swap needs two entries");
        return;
    }
    engine.stack.swap(len - 1, len - 2);
    engine.show_top();
}

// Roll down one step: X moves to the bottom of the stack
//
// A live buffer is not committed; only stored entries rotate.
pub fn roll_impl(engine: &mut Engine) {
    if engine.stack.len() < 2 {
        trace!(depth = engine.stack.len(), "roll needs two entries");
        return;
    }
    engine.stack.rotate_right(1);
    engine.show_top();
}

// Base switching

use tracing::debug;

use crate::engine::Engine;
use crate::radix::Base;

// A live buffer is committed under the outgoing base before the switch
pub fn set_base_impl(engine: &mut Engine, base: Base) {
    engine.commit_input();
    debug!(from = engine.base.radix(), to = base.radix(), "base changed");
    engine.base = base;
    engine.show_top();
}

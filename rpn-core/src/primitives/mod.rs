// Primitives module - one file per group of engine operations
//
// Each `*_impl` function mutates the engine and updates its display. None of
// them can fail: operations that do not apply are silently ignored.

// Digit entry and buffer editing
pub mod entry;

// Stack manipulation
pub mod stack;

// Memory register
pub mod memory;

// Arithmetic
pub mod arithmetic;

// Constants
pub mod constant;

// Base switching
pub mod base;

//! Standard built-ins seeded into every evaluator

pub mod arithmetic;
pub mod comparison;
pub mod lists;

use crate::tools::ToolRegistry;

/// Register all standard library tools
pub fn register_all(registry: &mut ToolRegistry) {
    comparison::register(registry);
    lists::register(registry);
    arithmetic::register(registry);
}

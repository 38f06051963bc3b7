pub mod builtin;
pub mod coerce;
pub mod descriptor;
pub mod traits;

pub use coerce::coerce_arguments;
pub use descriptor::ToolDescriptor;
pub use traits::{FnTool, Tool, ToolError};

use std::collections::HashMap;
use tracing::warn;

/// Owns the registered tools for the lifetime of an agent.
///
/// Read-only after construction. Names are unique; registering a
/// duplicate replaces the earlier tool in place (last write wins, the
/// original listing position is kept) and logs a warning.
pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new(tools: Vec<Box<dyn Tool>>) -> Self {
        let mut registry = Self {
            tools: Vec::with_capacity(tools.len()),
            index: HashMap::new(),
        };
        for tool in tools {
            registry.register(tool);
        }
        registry
    }

    fn register(&mut self, tool: Box<dyn Tool>) {
        let name = tool.name().to_string();
        match self.index.get(&name) {
            Some(&slot) => {
                warn!("Tool '{}' registered twice — last registration wins", name);
                self.tools[slot] = tool;
            }
            None => {
                self.index.insert(name, self.tools.len());
                self.tools.push(tool);
            }
        }
    }

    /// Resolve a tool by name.
    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.index.get(name).map(|&slot| self.tools[slot].as_ref())
    }

    /// Iterate over tools in registration order (used for prompt listing).
    pub fn iter(&self) -> impl Iterator<Item = &dyn Tool> {
        self.tools.iter().map(Box::as_ref)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

mod stacks;
mod submit;

pub use stacks::stacks;
pub use submit::submit;

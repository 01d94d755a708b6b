pub mod context;
pub mod hook;
pub mod types;

pub use context::*;
pub use hook::*;
pub use types::*;

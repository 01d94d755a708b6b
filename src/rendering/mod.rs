pub mod builders;
pub mod parts;
pub mod text;

pub use builders::*;
pub use parts::*;
pub use text::*;

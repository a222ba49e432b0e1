pub mod coordinator;
pub mod options;

pub use coordinator::*;
pub use options::*;

pub mod diagnostics;
pub mod loc;

pub use diagnostics::*;
pub use loc::*;

mod fee;
mod transaction;

pub use fee::*;
pub use transaction::*;

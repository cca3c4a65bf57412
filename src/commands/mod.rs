mod count;
mod list;

pub use count::*;
pub use list::*;

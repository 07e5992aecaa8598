mod page;
mod value;

pub use page::PageContext;
pub use value::{Data, Value};

mod documents;
mod errors;
mod reader;
mod template;

pub use documents::*;
pub use errors::*;
pub use reader::*;
pub use template::*;

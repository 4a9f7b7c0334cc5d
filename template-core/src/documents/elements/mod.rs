mod checkbox;

pub use checkbox::*;

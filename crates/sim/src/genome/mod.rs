//! Array structures: the ordered tandem array of repeat units.

mod repeat_array;

pub use repeat_array::{ArrayError, RepeatArray};

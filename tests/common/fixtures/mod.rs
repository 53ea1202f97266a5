mod body;

pub use body::{BodySnapshot, SharedBody};

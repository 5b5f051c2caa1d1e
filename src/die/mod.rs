mod inner;
mod ptr;

pub use ptr::Die;

pub mod alloc;
pub mod option;
pub mod panic;

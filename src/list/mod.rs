//! A singly linked list. Revolves around [`ForwardList`] and its accompanying [`Cursor`] and
//! [`CursorMut`] types.

mod cursor;
mod forward_list;
mod iter;
mod length;
mod node;
mod tests;

pub use cursor::*;
pub use forward_list::*;
pub use iter::*;
pub(crate) use length::*;
pub(crate) use node::*;

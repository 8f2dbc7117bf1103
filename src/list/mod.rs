//! The [`ForwardList`] type and its supporting cast: the [`Equivalence`] comparison policy,
//! borrowed [`ListNode`] handles and the iterator family.

mod eq;
mod forward_list;
mod iter;
mod length;
mod node;

#[doc(inline)]
pub use eq::*;
#[doc(inline)]
pub use forward_list::*;
#[doc(inline)]
pub use iter::*;
pub(crate) use length::*;
pub use node::ListNode;
pub(crate) use node::*;

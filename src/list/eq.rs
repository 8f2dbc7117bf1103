/// The comparison policy a [`ForwardList`](super::ForwardList) uses for its value-based
/// operations (`index_of`, `find`, `contains`, `remove_all`).
///
/// The policy is injected at construction, in the same way hashed collections take a
/// [`BuildHasher`](std::hash::BuildHasher), so equality semantics are a property of the list
/// rather than of the element type. Lists with different policies over the same element type can
/// coexist; nothing about the policy is global.
pub trait Equivalence<T> {
    /// Returns true when the two values should be treated as the same element.
    fn equivalent(&self, lhs: &T, rhs: &T) -> bool;
}

/// The default policy: the element type's own [`PartialEq`].
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeEq;

impl<T: PartialEq> Equivalence<T> for NativeEq {
    fn equivalent(&self, lhs: &T, rhs: &T) -> bool {
        lhs == rhs
    }
}

/// Adapts a plain comparison closure into an [`Equivalence`] policy.
///
/// The counterpart of [`BuildHasherDefault`](std::hash::BuildHasherDefault): a thin, nameable
/// wrapper so ad-hoc policies don't each need their own struct.
///
/// ```
/// use forward_list::list::{EqFn, ForwardList};
///
/// let mut list = ForwardList::with_eq(EqFn(|a: &i32, b: &i32| a.abs() == b.abs()));
/// list.push_back(-3);
/// assert!(list.contains(&3));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct EqFn<F>(pub F);

impl<T, F> Equivalence<T> for EqFn<F>
where
    F: Fn(&T, &T) -> bool,
{
    fn equivalent(&self, lhs: &T, rhs: &T) -> bool {
        (self.0)(lhs, rhs)
    }
}

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Shared handle to one registered implementation.
///
/// Identity is pointer identity: two handles are equal when they share the same
/// allocation, regardless of what the implementation computes. Registering the same
/// handle twice extends its alias group instead of creating a second strategy.
pub struct Strategy<F: ?Sized>(Arc<F>);

impl<F: ?Sized> Strategy<F> {
	/// Wraps an already shared implementation.
	pub fn from_arc(inner: Arc<F>) -> Self {
		Self(inner)
	}

	/// Returns the shared implementation.
	pub fn as_arc(&self) -> &Arc<F> {
		&self.0
	}

	/// Address of the shared allocation, used as the grouping key.
	pub(crate) fn key(&self) -> usize {
		Arc::as_ptr(&self.0) as *const () as usize
	}
}

impl<F> Strategy<F> {
	/// Wraps a sized implementation.
	pub fn new(inner: F) -> Self {
		Self(Arc::new(inner))
	}
}

impl<F: ?Sized> Clone for Strategy<F> {
	fn clone(&self) -> Self {
		Self(Arc::clone(&self.0))
	}
}

impl<F: ?Sized> Deref for Strategy<F> {
	type Target = F;

	fn deref(&self) -> &F {
		&self.0
	}
}

impl<F: ?Sized> PartialEq for Strategy<F> {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0)
	}
}

impl<F: ?Sized> Eq for Strategy<F> {}

impl<F: ?Sized> fmt::Debug for Strategy<F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Strategy")
			.field(&format_args!("{:#x}", self.key()))
			.finish()
	}
}

macro_rules! impl_from_closure {
	($($arg:ident),*) => {
		impl<$($arg,)* R, C> From<C> for Strategy<dyn Fn($($arg),*) -> R + Send + Sync>
		where
			C: Fn($($arg),*) -> R + Send + Sync + 'static,
		{
			fn from(f: C) -> Self {
				Self(Arc::new(f))
			}
		}
	};
}

impl_from_closure!();
impl_from_closure!(A);
impl_from_closure!(A, B);
impl_from_closure!(A, B, C2);
impl_from_closure!(A, B, C2, D);
impl_from_closure!(A, B, C2, D, E);
impl_from_closure!(A, B, C2, D, E, G);

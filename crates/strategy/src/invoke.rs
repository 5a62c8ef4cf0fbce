/// Invocation of an implementation with a tuple of arguments.
///
/// Implemented for `dyn Fn` signatures of arity zero through six, with and without
/// `Send + Sync`, so a registry can forward `call((a, b))` to its default without
/// knowing the signature it stores.
pub trait Invoke<Args> {
	/// Value returned by the implementation.
	type Output;

	/// Calls the implementation, spreading `args` as its parameters.
	fn invoke(&self, args: Args) -> Self::Output;
}

macro_rules! impl_invoke {
	($($arg:ident $val:ident),*) => {
		impl<$($arg,)* R> Invoke<($($arg,)*)> for dyn Fn($($arg),*) -> R + Send + Sync {
			type Output = R;

			fn invoke(&self, ($($val,)*): ($($arg,)*)) -> R {
				self($($val),*)
			}
		}

		impl<$($arg,)* R> Invoke<($($arg,)*)> for dyn Fn($($arg),*) -> R {
			type Output = R;

			fn invoke(&self, ($($val,)*): ($($arg,)*)) -> R {
				self($($val),*)
			}
		}
	};
}

impl_invoke!();
impl_invoke!(A a);
impl_invoke!(A a, B b);
impl_invoke!(A a, B b, C c);
impl_invoke!(A a, B b, C c, D d);
impl_invoke!(A a, B b, C c, D d, E e);
impl_invoke!(A a, B b, C c, D d, E e, G g);

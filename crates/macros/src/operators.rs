//! Operator surface derive macro implementation.
//!
//! Provides `#[derive(Operators)]` for algebraic types.

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{DeriveInput, GenericParam, Generics, Lifetime, Path, parse_macro_input, parse_quote};

/// How a declared operator is generated.
#[derive(Clone, Copy)]
enum Shape {
	/// `core::ops` binary trait plus its `*Assign` counterpart.
	Binary {
		op_trait: &'static str,
		method: &'static str,
		assign_trait: &'static str,
		assign_method: &'static str,
	},
	/// Inherent `pow`/`rpow`/`pow_assign`.
	Pow,
	/// Inherent element-wise comparison method.
	Compare {
		method: &'static str,
		symbol: &'static str,
	},
	/// `core::ops` unary trait.
	Unary {
		op_trait: &'static str,
		method: &'static str,
	},
}

struct OpSpec {
	/// Attribute spelling, matching `lazy_ops::Operator`'s lowercase name.
	name: &'static str,
	variant: &'static str,
	flag: &'static str,
	shape: Shape,
}

const fn binary(
	name: &'static str,
	variant: &'static str,
	flag: &'static str,
	op_trait: &'static str,
	method: &'static str,
	assign_trait: &'static str,
	assign_method: &'static str,
) -> OpSpec {
	OpSpec {
		name,
		variant,
		flag,
		shape: Shape::Binary {
			op_trait,
			method,
			assign_trait,
			assign_method,
		},
	}
}

const fn compare(
	name: &'static str,
	variant: &'static str,
	flag: &'static str,
	method: &'static str,
	symbol: &'static str,
) -> OpSpec {
	OpSpec {
		name,
		variant,
		flag,
		shape: Shape::Compare { method, symbol },
	}
}

const OPERATORS: &[OpSpec] = &[
	binary("add", "Add", "ADD", "Add", "add", "AddAssign", "add_assign"),
	binary("sub", "Sub", "SUB", "Sub", "sub", "SubAssign", "sub_assign"),
	binary("mul", "Mul", "MUL", "Mul", "mul", "MulAssign", "mul_assign"),
	binary("div", "Div", "DIV", "Div", "div", "DivAssign", "div_assign"),
	binary("rem", "Rem", "REM", "Rem", "rem", "RemAssign", "rem_assign"),
	OpSpec {
		name: "pow",
		variant: "Pow",
		flag: "POW",
		shape: Shape::Pow,
	},
	binary("and", "And", "AND", "BitAnd", "bitand", "BitAndAssign", "bitand_assign"),
	binary("or", "Or", "OR", "BitOr", "bitor", "BitOrAssign", "bitor_assign"),
	binary("xor", "Xor", "XOR", "BitXor", "bitxor", "BitXorAssign", "bitxor_assign"),
	binary("shl", "Shl", "SHL", "Shl", "shl", "ShlAssign", "shl_assign"),
	binary("shr", "Shr", "SHR", "Shr", "shr", "ShrAssign", "shr_assign"),
	compare("lt", "Lt", "LT", "cmp_lt", "<"),
	compare("le", "Le", "LE", "cmp_le", "<="),
	compare("eq", "Eq", "EQ", "cmp_eq", "=="),
	compare("ne", "Ne", "NE", "cmp_ne", "!="),
	compare("gt", "Gt", "GT", "cmp_gt", ">"),
	compare("ge", "Ge", "GE", "cmp_ge", ">="),
	OpSpec {
		name: "neg",
		variant: "Neg",
		flag: "NEG",
		shape: Shape::Unary {
			op_trait: "Neg",
			method: "neg",
		},
	},
	OpSpec {
		name: "not",
		variant: "Not",
		flag: "NOT",
		shape: Shape::Unary {
			op_trait: "Not",
			method: "not",
		},
	},
];

/// Parsed `#[operators(...)]` attribute.
struct Declaration {
	operators: Vec<&'static OpSpec>,
	reflect: Vec<Path>,
}

/// Entry point for the `#[derive(Operators)]` macro.
pub fn derive_operators(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	expand(&input)
		.unwrap_or_else(syn::Error::into_compile_error)
		.into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
	let decl = parse_declaration(input)?;

	let name = &input.ident;
	let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
	let ty = quote! { #name #ty_generics };

	let with_rhs = push_rhs(&input.generics, &ty, false);
	let (rhs_impl, _, _) = with_rhs.split_for_impl();
	let with_ref_rhs = push_rhs(&input.generics, &ty, true);
	let (ref_rhs_impl, _, _) = with_ref_rhs.split_for_impl();
	let with_ref = push_ref(&input.generics);
	let (ref_impl, _, _) = with_ref.split_for_impl();

	let vis = &input.vis;
	let mut impls = Vec::new();
	let mut inherent = Vec::new();
	let mut flags = Vec::new();

	for spec in &decl.operators {
		let variant = format_ident!("{}", spec.variant);
		let flag = format_ident!("{}", spec.flag);
		flags.push(quote! { .union(::lazy_ops::OperatorSet::#flag) });
		let op = quote! { ::lazy_ops::Operator::#variant };

		match spec.shape {
			Shape::Binary {
				op_trait,
				method,
				assign_trait,
				assign_method,
			} => {
				let op_trait = format_ident!("{}", op_trait);
				let method = format_ident!("{}", method);
				let assign_trait = format_ident!("{}", assign_trait);
				let assign_method = format_ident!("{}", assign_method);

				impls.push(quote! {
					impl #rhs_impl ::core::ops::#op_trait<__Rhs> for #ty #where_clause {
						type Output = #ty;

						#[inline]
						fn #method(self, other: __Rhs) -> #ty {
							::lazy_ops::Canonical::binary(self, #op, ::core::convert::Into::into(other))
						}
					}

					impl #ref_rhs_impl ::core::ops::#op_trait<__Rhs> for &'__lhs #ty #where_clause {
						type Output = #ty;

						#[inline]
						fn #method(self, other: __Rhs) -> #ty {
							::lazy_ops::Canonical::binary(
								::core::clone::Clone::clone(self),
								#op,
								::core::convert::Into::into(other),
							)
						}
					}

					impl #rhs_impl ::core::ops::#assign_trait<__Rhs> for #ty #where_clause {
						#[inline]
						fn #assign_method(&mut self, other: __Rhs) {
							*self = ::lazy_ops::Canonical::binary(
								::core::clone::Clone::clone(self),
								#op,
								::core::convert::Into::into(other),
							);
						}
					}
				});

				for lhs in &decl.reflect {
					impls.push(quote! {
						impl #impl_generics ::core::ops::#op_trait<#ty> for #lhs #where_clause {
							type Output = #ty;

							#[inline]
							fn #method(self, other: #ty) -> #ty {
								::lazy_ops::Canonical::reflected(
									other,
									#op,
									<#ty as ::core::convert::From<#lhs>>::from(self),
								)
							}
						}
					});
				}
			}
			Shape::Pow => inherent.push(quote! {
				/// Computes `self ** other`.
				#[inline]
				#vis fn pow<__Rhs: ::core::convert::Into<Self>>(self, other: __Rhs) -> Self {
					::lazy_ops::Canonical::binary(self, #op, ::core::convert::Into::into(other))
				}

				/// Computes `other ** self`.
				#[inline]
				#vis fn rpow<__Rhs: ::core::convert::Into<Self>>(self, other: __Rhs) -> Self {
					::lazy_ops::Canonical::reflected(self, #op, ::core::convert::Into::into(other))
				}

				/// Rebinds `self` to `self ** other`.
				#[inline]
				#vis fn pow_assign<__Rhs: ::core::convert::Into<Self>>(&mut self, other: __Rhs) {
					*self = ::lazy_ops::Canonical::binary(
						::core::clone::Clone::clone(self),
						#op,
						::core::convert::Into::into(other),
					);
				}
			}),
			Shape::Compare { method, symbol } => {
				let method = format_ident!("{}", method);
				let doc = format!("Element-wise `self {symbol} other`.");
				inherent.push(quote! {
					#[doc = #doc]
					#[inline]
					#vis fn #method<__Rhs: ::core::convert::Into<Self>>(self, other: __Rhs) -> Self {
						::lazy_ops::Canonical::binary(self, #op, ::core::convert::Into::into(other))
					}
				});
			}
			Shape::Unary { op_trait, method } => {
				let op_trait = format_ident!("{}", op_trait);
				let method = format_ident!("{}", method);
				impls.push(quote! {
					impl #impl_generics ::core::ops::#op_trait for #ty #where_clause {
						type Output = #ty;

						#[inline]
						fn #method(self) -> #ty {
							::lazy_ops::UnaryCanonical::unary(self, #op)
						}
					}

					impl #ref_impl ::core::ops::#op_trait for &'__lhs #ty #where_clause {
						type Output = #ty;

						#[inline]
						fn #method(self) -> #ty {
							::lazy_ops::UnaryCanonical::unary(::core::clone::Clone::clone(self), #op)
						}
					}
				});
			}
		}
	}

	let inherent = (!inherent.is_empty()).then(|| {
		quote! {
			impl #impl_generics #ty #where_clause {
				#(#inherent)*
			}
		}
	});

	Ok(quote! {
		impl #impl_generics ::lazy_ops::Operators for #ty #where_clause {
			const OPERATORS: ::lazy_ops::OperatorSet = ::lazy_ops::OperatorSet::empty() #(#flags)*;
		}

		#(#impls)*

		#inherent
	})
}

fn parse_declaration(input: &DeriveInput) -> syn::Result<Declaration> {
	let abstract_error = || {
		syn::Error::new_spanned(
			&input.ident,
			format!(
				"can't instantiate abstract operator base `{}` directly: declare its canonical operators with #[operators(...)]",
				input.ident
			),
		)
	};

	let mut attrs = input.attrs.iter().filter(|a| a.path().is_ident("operators"));
	let Some(attr) = attrs.next() else {
		return Err(abstract_error());
	};
	if let Some(extra) = attrs.next() {
		return Err(syn::Error::new_spanned(
			extra,
			"duplicate #[operators(...)] attribute: declare every canonical operator in one list",
		));
	}

	let mut operators: Vec<&'static OpSpec> = Vec::new();
	let mut reflect = Vec::new();

	attr.parse_nested_meta(|meta| {
		if meta.path.is_ident("reflect") {
			return meta.parse_nested_meta(|inner| {
				reflect.push(inner.path);
				Ok(())
			});
		}

		let Some(ident) = meta.path.get_ident() else {
			return Err(meta.error("expected an operator name"));
		};
		let name = ident.to_string();
		let Some(spec) = OPERATORS.iter().find(|spec| spec.name == name) else {
			return Err(meta.error(format!("unknown operator `{name}`")));
		};
		if !operators.iter().any(|known| known.name == spec.name) {
			operators.push(spec);
		}
		Ok(())
	})?;

	if operators.is_empty() {
		return Err(abstract_error());
	}

	Ok(Declaration { operators, reflect })
}

/// Adds the `__Rhs: Into<T>` parameter, and the `'__lhs` lifetime for `&T` impls.
fn push_rhs(generics: &Generics, ty: &TokenStream2, by_ref: bool) -> Generics {
	let mut generics = if by_ref {
		push_ref(generics)
	} else {
		generics.clone()
	};
	generics
		.params
		.push(parse_quote! { __Rhs: ::core::convert::Into<#ty> });
	generics
}

/// Adds the `'__lhs` lifetime, ahead of every other parameter.
fn push_ref(generics: &Generics) -> Generics {
	let mut generics = generics.clone();
	let lifetime = Lifetime::new("'__lhs", Span::call_site());
	generics
		.params
		.insert(0, GenericParam::Lifetime(syn::LifetimeParam::new(lifetime)));
	generics
}

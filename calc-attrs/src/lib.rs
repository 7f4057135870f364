mod structures;

use proc_macro::TokenStream;
use quote::quote;
use structures::ErrorKindTarget;
use syn::parse_macro_input;

/// Derives the [`ErrorKind`] trait for the given struct.
///
/// This trait can be derived for any struct with named fields, or a unit struct.
///
/// The information of the error can be customized using the `error` attribute by adding the
/// corresponding tags to it:
/// ```
/// use calc_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(message = "unexpected end of input", labels = ["add something here"])]
/// pub struct Foo;
/// ```
///
/// The following tags are available:
///
/// | Tag         | Description                                                                  |
/// | ----------- | ---------------------------------------------------------------------------- |
/// | `message`   | The message displayed at the top of the error when it is displayed.          |
/// | `labels`    | An array of label texts, one for each span the error is created with.        |
/// | `help`      | Optional help text for the error, describing what the user can do to fix it. |
/// | `category`  | The [`Category`] of the error. Defaults to `Category::Syntax`.               |
///
/// Each tag accepts an expression. `message`, `help` and the items of `labels` should evaluate
/// to something that converts into a [`String`]. For structs with named fields, the expression is
/// evaluated with the members of the struct in scope (as references), so they can be used in the
/// expression.
///
/// [`ErrorKind`]: https://docs.rs/calc-error/latest/calc_error/trait.ErrorKind.html
/// [`Category`]: https://docs.rs/calc-error/latest/calc_error/enum.Category.html
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl calc_error::ErrorKind for #name {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
            #target
        }
    }.into()
}

mod semigroup;

use proc_macro::TokenStream;

#[proc_macro_derive(Semigroup, attributes(semigroup))]
pub fn derive_semigroup(input: TokenStream) -> TokenStream {
    let ast = syn::parse_macro_input!(input as syn::DeriveInput);
    semigroup::derive_semigroup(&ast)
        .unwrap_or_else(|error| error.to_compile_error())
        .into()
}

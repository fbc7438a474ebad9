use proc_macro2::TokenStream;
use quote::{quote, ToTokens, TokenStreamExt as _};
use syn::parse::{Parse, ParseStream};

pub fn derive_semigroup(input: &syn::DeriveInput) -> syn::Result<TokenStream> {
    let data = match &input.data {
        syn::Data::Struct(data) => data,
        syn::Data::Enum(data) => {
            return Err(syn::Error::new(
                data.enum_token.span,
                "Semigroup can only be derived for structs",
            ))
        }
        syn::Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span,
                "Semigroup can only be derived for structs",
            ))
        }
    };

    let mut fields = Vec::with_capacity(data.fields.len());
    for (index, field) in data.fields.iter().enumerate() {
        let member = match &field.ident {
            Some(ident) => syn::Member::Named(ident.clone()),
            None => syn::Member::Unnamed(syn::Index::from(index)),
        };
        let strategy = field
            .attrs
            .iter()
            .find(|attr| attr.path.is_ident("semigroup"))
            .map(|attr| attr.parse_args::<Strategy>())
            .transpose()?
            .unwrap_or(Strategy::Combine);
        fields.push(FieldCombine {
            member,
            ty: field.ty.clone(),
            strategy,
        });
    }

    Ok(SemigroupDerive {
        input: input.clone(),
        fields,
    }
    .into_token_stream())
}

struct SemigroupDerive {
    input: syn::DeriveInput,
    fields: Vec<FieldCombine>,
}

struct FieldCombine {
    member: syn::Member,
    ty: syn::Type,
    strategy: Strategy,
}

impl ToTokens for SemigroupDerive {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let mut where_clause = self.input.generics.where_clause.clone().unwrap_or_else(|| {
            syn::WhereClause {
                where_token: Default::default(),
                predicates: Default::default(),
            }
        });
        let mut body = Vec::with_capacity(self.fields.len());

        for field in &self.fields {
            let member = &field.member;
            let value = match field.strategy {
                Strategy::Combine => {
                    let ty = &field.ty;
                    where_clause
                        .predicates
                        .push(syn::parse_quote!(#ty: ::either::Semigroup));
                    quote!(::either::Semigroup::combine(self.#member, other.#member))
                }
                Strategy::First => quote!(self.#member),
                Strategy::Last => quote!(other.#member),
            };
            body.push(quote!(#member: #value));
        }

        let ident = &self.input.ident;
        let (impl_generics, ty_generics, _) = self.input.generics.split_for_impl();

        tokens.append_all(quote! {
            impl #impl_generics ::either::Semigroup for #ident #ty_generics #where_clause {
                #[inline]
                #[allow(unused_variables)]
                fn combine(self, other: Self) -> Self {
                    Self {
                        #(#body),*
                    }
                }
            }
        });
    }
}

/// How a field is merged, chosen with `#[semigroup(first)]` or
/// `#[semigroup(last)]`. Fields without the attribute are combined.
enum Strategy {
    Combine,
    First,
    Last,
}

impl Parse for Strategy {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ident = input.parse::<syn::Ident>()?;
        if ident == "first" {
            Ok(Strategy::First)
        } else if ident == "last" {
            Ok(Strategy::Last)
        } else {
            Err(syn::Error::new(ident.span(), "expected `first` or `last`"))
        }
    }
}

use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Field, Fields, Ident, Type, Variant};

/// What the generator needs to know about one enum variant.
struct ErrorVariant<'a> {
    ident: &'a Ident,
    cfg: Vec<&'a Attribute>,
    source: Option<&'a Field>,
    has_context: bool,
    has_message: bool,
}

impl<'a> ErrorVariant<'a> {
    fn parse(variant: &'a Variant) -> syn::Result<Self> {
        let Fields::Named(fields) = &variant.fields else {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                "sigi_error variants must use named fields",
            ));
        };

        let mut has_context = false;
        let mut has_message = false;
        let mut source = None;

        for field in &fields.named {
            let Some(name) = &field.ident else { continue };
            if name == "context" {
                if !is_context_type(&field.ty) {
                    return Err(syn::Error::new_spanned(
                        &field.ty,
                        "`context` must be `Option<Cow<'static, str>>`",
                    ));
                }
                has_context = true;
            } else if name == "message" {
                has_message = true;
            }
            if source.is_none() && (name == "source" || has_attr(field, "source") || has_attr(field, "from"))
            {
                source = Some(field);
            }
        }

        if source.is_some() && !has_context {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                "variants wrapping a source error need `context: Option<Cow<'static, str>>`",
            ));
        }

        Ok(Self {
            ident: &variant.ident,
            cfg: variant.attrs.iter().filter(|a| a.path().is_ident("cfg")).collect(),
            source,
            has_context,
            has_message,
        })
    }

    fn is_internal(&self) -> bool {
        self.ident == "Internal"
    }
}

pub fn expand(input: DeriveInput) -> syn::Result<TokenStream> {
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(&input.ident, "sigi_error only applies to enums"));
    };

    let variants =
        data.variants.iter().map(ErrorVariant::parse).collect::<syn::Result<Vec<_>>>()?;

    let name = &input.ident;
    let ext = format_ident!("{}Ext", name);

    let derives = missing_derives(&input.attrs);
    let context_trait = context_trait(name, &ext, &variants);
    let source_impls = variants.iter().filter_map(|v| source_impls(name, &ext, v));
    let internal_impls = internal_impls(name, &variants);

    Ok(quote! {
        #derives
        #input

        #context_trait
        #(#source_impls)*
        #internal_impls

        #[allow(dead_code)]
        fn format_context(
            context: &::core::option::Option<::std::borrow::Cow<'static, str>>,
        ) -> ::std::borrow::Cow<'static, str> {
            match context {
                Some(c) => ::std::borrow::Cow::Owned(format!(" ({c})")),
                None => ::std::borrow::Cow::Borrowed(""),
            }
        }
    })
}

fn missing_derives(attrs: &[Attribute]) -> TokenStream {
    let mut present = FxHashSet::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(last) = meta.path.segments.last() {
                present.insert(last.ident.to_string());
            }
            Ok(())
        });
    }

    let mut wanted = Vec::new();
    if !present.contains("Debug") {
        wanted.push(quote! { Debug });
    }
    if !present.contains("Error") {
        wanted.push(quote! { ::thiserror::Error });
    }

    if wanted.is_empty() { quote! {} } else { quote! { #[derive(#(#wanted),*)] } }
}

fn context_trait(name: &Ident, ext: &Ident, variants: &[ErrorVariant<'_>]) -> TokenStream {
    let arms = variants.iter().filter(|v| v.has_context).map(|v| {
        let ident = v.ident;
        let cfg = &v.cfg;
        quote! { #(#cfg)* #name::#ident { context: slot, .. } => *slot = Some(context.into()), }
    });

    quote! {
        pub trait #ext<T> {
            /// Attaches a human readable context to the error branch.
            fn context(
                self,
                context: impl Into<::std::borrow::Cow<'static, str>>,
            ) -> ::core::result::Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext<T> for ::core::result::Result<T, #name> {
            #[inline]
            fn context(self, context: impl Into<::std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut err| {
                    #[allow(unreachable_patterns)]
                    match &mut err {
                        #(#arms)*
                        _ => {},
                    }
                    err
                })
            }
        }
    }
}

fn source_impls(name: &Ident, ext: &Ident, v: &ErrorVariant<'_>) -> Option<TokenStream> {
    if v.is_internal() {
        return None;
    }
    let field = v.source?;
    let field_name = field.ident.as_ref()?;
    let ty = &field.ty;
    let ident = v.ident;
    let cfg = &v.cfg;

    Some(quote! {
        #(#cfg)*
        #[automatically_derived]
        impl From<#ty> for #name {
            #[inline]
            fn from(#field_name: #ty) -> Self {
                Self::#ident { #field_name, context: None }
            }
        }

        #(#cfg)*
        #[automatically_derived]
        impl<T> #ext<T> for ::core::result::Result<T, #ty> {
            #[inline]
            fn context(
                self,
                context: impl Into<::std::borrow::Cow<'static, str>>,
            ) -> ::core::result::Result<T, #name> {
                self.map_err(|#field_name| #name::#ident { #field_name, context: Some(context.into()) })
            }
        }
    })
}

fn internal_impls(name: &Ident, variants: &[ErrorVariant<'_>]) -> TokenStream {
    let Some(internal) = variants.iter().find(|v| v.is_internal() && v.has_message && v.has_context)
    else {
        return quote! {};
    };
    let cfg = &internal.cfg;

    quote! {
        #(#cfg)*
        impl From<&'static str> for #name {
            #[inline]
            fn from(message: &'static str) -> Self {
                Self::Internal { message: ::std::borrow::Cow::Borrowed(message), context: None }
            }
        }

        #(#cfg)*
        impl From<String> for #name {
            #[inline]
            fn from(message: String) -> Self {
                Self::Internal { message: ::std::borrow::Cow::Owned(message), context: None }
            }
        }
    }
}

fn has_attr(field: &Field, name: &str) -> bool {
    field.attrs.iter().any(|attr| attr.path().is_ident(name))
}

/// Matches `Option<Cow<'static, str>>` by the last path segment of each part.
fn is_context_type(ty: &Type) -> bool {
    let Some(option) = single_generic(ty, "Option") else {
        return false;
    };
    let Type::Path(cow) = option else {
        return false;
    };
    let Some(segment) = cow.path.segments.last() else {
        return false;
    };
    if segment.ident != "Cow" {
        return false;
    }
    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return false;
    };

    let mut args = args.args.iter();
    let lifetime_ok = matches!(args.next(), Some(syn::GenericArgument::Lifetime(lt)) if lt.ident == "static");
    let str_ok = matches!(
        args.next(),
        Some(syn::GenericArgument::Type(Type::Path(p)))
            if p.path.segments.last().is_some_and(|s| s.ident == "str")
    );

    lifetime_ok && str_ok && args.next().is_none()
}

fn single_generic<'a>(ty: &'a Type, outer: &str) -> Option<&'a Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != outer {
        return None;
    }
    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        syn::GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

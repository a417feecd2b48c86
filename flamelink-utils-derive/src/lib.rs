use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, LitStr, parse_macro_input};

#[proc_macro_derive(ContentType, attributes(content))]
pub fn derive_content_type(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let struct_name = &input.ident;

    // 注册表是静态的，无法为每个泛型实例各注册一份
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "ContentType cannot be derived for generic types",
        ));
    }

    // 结构体上的 #[content(reference = "...")]，默认使用 kebab-case 的类型名
    let mut reference = None;
    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("content")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("reference") {
                let value: LitStr = meta.value()?.parse()?;
                reference = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("unsupported content attribute, expected `reference`"))
            }
        })?;
    }
    let reference = reference.unwrap_or_else(|| to_kebab_case(&struct_name.to_string()));

    let fields = match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(fields) => fields,
            _ => {
                return Err(syn::Error::new_spanned(
                    struct_name,
                    "ContentType can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                struct_name,
                "ContentType can only be derived for structs",
            ));
        }
    };

    // 解析字段上的 #[content(rename = "...")] 和 #[content(skip)]
    let mut field_names = Vec::new();
    for field in &fields.named {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let mut name = ident.to_string();
        let mut skip = false;
        for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("content")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    skip = true;
                    Ok(())
                } else if meta.path.is_ident("rename") {
                    let value: LitStr = meta.value()?.parse()?;
                    name = value.value();
                    Ok(())
                } else {
                    Err(meta.error("unsupported content attribute, expected `rename` or `skip`"))
                }
            })?;
        }
        if !skip {
            field_names.push(name);
        }
    }

    Ok(quote! {
        impl flamelink_utils::ContentType for #struct_name {
            fn reference() -> &'static str {
                #reference
            }

            fn field_names() -> &'static [&'static str] {
                &[#(#field_names),*]
            }
        }

        flamelink_utils::inventory::submit! {
            flamelink_utils::ContentTypeMeta {
                reference: #reference,
                field_names: &[#(#field_names),*],
            }
        }
    })
}

// BlogPost -> blog-post, HTTPHeader -> http-header
fn to_kebab_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            out.push('-');
            continue;
        }
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev != '_' && (prev.is_lowercase() || prev.is_ascii_digit() || next_is_lower) {
                out.push('-');
            }
        }
        out.extend(c.to_lowercase());
    }
    out
}

use proc_macro::TokenStream;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{parse_macro_input, Attribute, Block, Error, Expr, Ident, ItemFn, Result, Token};

struct ShouldFailAttr {
    expected_errors: Punctuated<Expr, Token![,]>,
}

impl Parse for ShouldFailAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let expected_errors = Punctuated::parse_terminated(input)?;
        Ok(Self { expected_errors })
    }
}

pub(crate) struct ProgramFn {
    pub name: Ident,
    pub attrs: Vec<Attribute>,
    pub program: Block,
}

impl Parse for ProgramFn {
    fn parse(input: ParseStream) -> Result<Self> {
        let f: ItemFn = input.parse()?;
        if !f.sig.inputs.is_empty() {
            return Err(Error::new(f.sig.inputs.span(), "expected no arguments"));
        }
        Ok(Self {
            name: f.sig.ident,
            attrs: f.attrs,
            program: *f.block,
        })
    }
}

pub fn should_fail(attr: TokenStream, item: TokenStream) -> TokenStream {
    let attr = parse_macro_input!(attr as ShouldFailAttr);
    let item = parse_macro_input!(item as ProgramFn);

    let ShouldFailAttr { expected_errors } = attr;
    let ProgramFn {
        name,
        attrs,
        program,
    } = item;

    quote! {
        #(#attrs)*
        fn #name() -> ::anyhow::Result<()> {
            use ::std::collections::HashSet;
            let p: ::holey_lib::ast::Program = #program;
            let config = ::holey_lib::config::Config { filename: Some(stringify!(#name)), ..::std::default::Default::default() };
            let mut context = ::holey_lib::Context::new(config);
            match ::holey_lib::check(&mut context, &p)? {
                Err(diagnostics) => {
                    let codes = diagnostics.into_iter().filter_map(|diag| diag.code).collect::<HashSet<_>>();
                    let codes = codes.iter().map(|code| &**code).collect::<HashSet<&str>>();
                    let expected = [#expected_errors].into_iter().collect::<HashSet<&str>>();
                    if codes == expected {
                        Ok(())
                    } else {
                        ::anyhow::bail!("Error codes mismatch. Expected {expected:?}, got {codes:?}");
                    }
                }
                Ok(()) => {
                    ::anyhow::bail!("Program should not pass name resolution.");
                }
            }
        }
    }
    .into()
}

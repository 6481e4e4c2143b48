use proc_macro::TokenStream;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{parse_macro_input, Expr, Result, Token};

use crate::should_fail::ProgramFn;

struct ExtractsAttr {
    expected_values: Punctuated<Expr, Token![,]>,
}

impl Parse for ExtractsAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let expected_values = Punctuated::parse_terminated(input)?;
        Ok(Self { expected_values })
    }
}

pub fn extracts(attr: TokenStream, item: TokenStream) -> TokenStream {
    let attr = parse_macro_input!(attr as ExtractsAttr);
    let item = parse_macro_input!(item as ProgramFn);

    let expected_values = attr.expected_values.into_iter();
    let ProgramFn {
        name,
        attrs,
        program,
    } = item;

    quote! {
        #(#attrs)*
        fn #name() -> ::anyhow::Result<()> {
            use ::holey_lib::consts::Literal;
            let p: ::holey_lib::ast::Program = #program;
            let config = ::holey_lib::config::Config { filename: Some(stringify!(#name)), ..::std::default::Default::default() };
            let mut context = ::holey_lib::Context::new(config);
            let first = context.config.first_hole;
            let size = p.size();

            let (p, table) = ::holey_lib::extract(&mut context, p)?;
            let expected: Vec<Literal> = vec![#(Literal::from(#expected_values)),*];
            let values = table.iter().map(|hole| hole.value.clone()).collect::<Vec<_>>();
            ::anyhow::ensure!(values == expected, "Hole values mismatch. Expected {expected:?}, got {values:?}");

            let indices = table.iter().map(|hole| hole.index).collect::<Vec<_>>();
            let contiguous = (first..first + expected.len()).collect::<Vec<_>>();
            ::anyhow::ensure!(indices == contiguous, "Hole indices are not contiguous: {indices:?}");
            ::anyhow::ensure!(p.size() == size, "Extraction changed the size of the program");

            let (again, table) = ::holey_lib::extract(&mut context, p.clone())?;
            ::anyhow::ensure!(table.is_empty(), "Second extraction found constants: {table}");
            ::anyhow::ensure!(again == p, "Second extraction changed the program");
            Ok(())
        }
    }
    .into()
}

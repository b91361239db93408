use proc_macro::TokenStream;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Token, parse_macro_input};

/// One or more type paths; only the first names the mapping source.
struct MappingArgs;

impl Parse for MappingArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let paths = Punctuated::<syn::Path, Token![,]>::parse_terminated(input)?;
        if paths.is_empty() {
            return Err(input.error("expected a source type argument"));
        }
        Ok(Self)
    }
}

/// Marks a struct as the mapping target of the named source type.
///
/// This is a pass-through attribute: the annotated item is returned
/// unchanged. The mapper_gen engine discovers the annotation when it scans
/// the compilation unit; nothing happens at runtime.
///
/// # Usage
///
/// ```rust,ignore
/// use mapper_gen::mapping;
///
/// #[mapping(Person)]
/// #[derive(Default)]
/// pub struct PersonViewModel {
///     pub id: u64,
///     pub name: String,
/// }
/// ```
///
/// The first argument must be a type path; trailing arguments are tolerated.
/// Anything else fails at the annotation site.
#[proc_macro_attribute]
pub fn mapping(args: TokenStream, item: TokenStream) -> TokenStream {
    let _ = parse_macro_input!(args as MappingArgs);
    item
}

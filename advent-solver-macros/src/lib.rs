//! Procedural macros for the advent-solver library

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Attribute, DeriveInput, LitInt, LitStr};

/// Derive macro that implements `Solver` by dispatching to `PartSolver<N>` impls
///
/// # Attributes
///
/// - `parts`: Required. Number of parts; parts `1..=parts` must each have a
///   `PartSolver<N>` impl.
///
/// Part numbers outside `1..=parts` return `SolveError::PartNotImplemented`.
///
/// # Example
///
/// ```ignore
/// #[derive(PuzzleSolver)]
/// #[solver(parts = 2)]
/// pub struct Day05;
///
/// impl PuzzleParser for Day05 { /* ... */ }
/// impl PartSolver<1> for Day05 { /* ... */ }
/// impl PartSolver<2> for Day05 { /* ... */ }
/// ```
#[proc_macro_derive(PuzzleSolver, attributes(solver))]
pub fn derive_puzzle_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_puzzle_solver(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derive macro for automatically registering solvers with the plugin system
///
/// Submits a `SolverPlugin` through `inventory` so the solver is found by
/// `SolverRegistryBuilder::register_all_plugins`.
///
/// # Attributes
///
/// - `event`: Optional. `"aoc"` (default) or `"infi"`
/// - `year`: Required. The puzzle year (e.g., 2022)
/// - `day`: Required. The day number (1-25)
/// - `tags`: Optional. Array of string literals for filtering (e.g., ["easy", "parsing"])
///
/// # Requirements
///
/// The type must implement the `Solver` trait. If it doesn't, the error points
/// at the type:
///
/// ```text
/// error[E0277]: the trait bound `YourSolver: Solver` is not satisfied
/// ```
///
/// # Example
///
/// ```ignore
/// #[derive(PuzzleSolver, AutoRegisterSolver)]
/// #[solver(parts = 2)]
/// #[puzzle(event = "infi", year = 2022, day = 1, tags = ["walker"])]
/// pub struct Navigation;
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(puzzle))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_auto_register(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn find_attr<'a>(input: &'a DeriveInput, name: &str) -> syn::Result<&'a Attribute> {
    input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident(name))
        .ok_or_else(|| {
            syn::Error::new_spanned(
                &input.ident,
                format!("missing #[{}(...)] attribute", name),
            )
        })
}

fn expand_puzzle_solver(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let attr = find_attr(input, "solver")?;

    let mut parts: Option<u8> = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("parts") {
            let lit: LitInt = meta.value()?.parse()?;
            parts = Some(lit.base10_parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported solver attribute, expected `parts`"))
        }
    })?;

    let parts = parts.ok_or_else(|| syn::Error::new_spanned(attr, "missing `parts = N`"))?;
    if parts == 0 {
        return Err(syn::Error::new_spanned(attr, "`parts` must be at least 1"));
    }

    let arms = (1..=parts).map(|n| {
        quote! {
            #n => <Self as ::advent_solver::PartSolver<#n>>::solve(shared),
        }
    });

    Ok(quote! {
        impl #impl_generics ::advent_solver::Solver for #name #ty_generics #where_clause {
            const PARTS: u8 = #parts;

            fn solve_part(
                shared: &mut <Self as ::advent_solver::PuzzleParser>::SharedData<'_>,
                part: u8,
            ) -> ::core::result::Result<::std::string::String, ::advent_solver::SolveError> {
                match part {
                    #(#arms)*
                    _ => ::core::result::Result::Err(
                        ::advent_solver::SolveError::PartNotImplemented(part),
                    ),
                }
            }
        }
    })
}

fn expand_auto_register(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let attr = find_attr(input, "puzzle")?;

    let mut event = quote! { ::advent_solver::Event::AdventOfCode };
    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<String> = Vec::new();

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("event") {
            let value: LitStr = meta.value()?.parse()?;
            event = match value.value().as_str() {
                "aoc" => quote! { ::advent_solver::Event::AdventOfCode },
                "infi" => quote! { ::advent_solver::Event::Infi },
                other => {
                    return Err(syn::Error::new_spanned(
                        &value,
                        format!("unknown event `{}`, expected \"aoc\" or \"infi\"", other),
                    ));
                }
            };
        } else if meta.path.is_ident("year") {
            let value: LitInt = meta.value()?.parse()?;
            year = Some(value.base10_parse()?);
        } else if meta.path.is_ident("day") {
            let value: LitInt = meta.value()?.parse()?;
            day = Some(value.base10_parse()?);
        } else if meta.path.is_ident("tags") {
            // tags = ["a", "b"]
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            let list = content.parse_terminated(<LitStr as syn::parse::Parse>::parse, syn::Token![,])?;
            tags.extend(list.iter().map(LitStr::value));
        } else {
            return Err(meta.error("unsupported puzzle attribute"));
        }
        Ok(())
    })?;

    let year = year.ok_or_else(|| syn::Error::new_spanned(attr, "missing `year = ...`"))?;
    let day = day.ok_or_else(|| syn::Error::new_spanned(attr, "missing `day = ...`"))?;

    Ok(quote! {
        const _: () = {
            // Fails with a readable E0277 when the type is not a Solver
            trait MustImplementSolver: ::advent_solver::Solver {}
            impl MustImplementSolver for #name {}

            assert!(
                ::advent_solver::PuzzleId::new(#event, #year, #day).is_valid(),
                "puzzle year or day outside the supported calendar"
            );
        };

        ::advent_solver::inventory::submit! {
            ::advent_solver::SolverPlugin {
                puzzle: ::advent_solver::PuzzleId::new(#event, #year, #day),
                solver: &#name,
                tags: &[#(#tags),*],
            }
        }
    })
}

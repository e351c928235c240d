use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream, Result};
use syn::{parse_macro_input, Ident, LitStr, Token};

/// AST for boolean expressions written inside the macro
enum Expr {
    Variable(Ident),
    Atom(LitStr),
    Quantified {
        disjunction: bool,
        element: LitStr,
        set: LitStr,
    },
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    Implies(Box<Expr>, Box<Expr>),
    Equivalent(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Generate code building this expression with the `Expr` constructor API
    ///
    /// Identifiers are cloned so the caller keeps ownership of its sub-expressions.
    fn to_tokens(&self) -> proc_macro2::TokenStream {
        match self {
            Expr::Variable(ident) => quote! {
                ::std::clone::Clone::clone(&#ident)
            },
            Expr::Atom(lit) => quote! {
                Expr::atom(#lit)
            },
            Expr::Quantified {
                disjunction,
                element,
                set,
            } => {
                if *disjunction {
                    quote! { Expr::gen_disj(#element, #set) }
                } else {
                    quote! { Expr::gen_conj(#element, #set) }
                }
            }
            Expr::Not(inner) => {
                let inner_tokens = inner.to_tokens();
                quote! {
                    (#inner_tokens).not()
                }
            }
            Expr::And(left, right) => binary(left, right, quote!(and)),
            Expr::Or(left, right) => binary(left, right, quote!(or)),
            Expr::Implies(left, right) => binary(left, right, quote!(implies)),
            Expr::Equivalent(left, right) => binary(left, right, quote!(equivalent)),
        }
    }
}

fn binary(left: &Expr, right: &Expr, method: proc_macro2::TokenStream) -> proc_macro2::TokenStream {
    let left_tokens = left.to_tokens();
    let right_tokens = right.to_tokens();
    quote! {
        (#left_tokens).#method(#right_tokens)
    }
}

/// Parser for boolean expressions with the same precedence as the text grammar
struct ExprInput {
    expr: Expr,
}

impl Parse for ExprInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let expr = parse_implication(input)?;
        Ok(ExprInput { expr })
    }
}

/// Parse `->` and `==` chains (lowest precedence, left-associative)
fn parse_implication(input: ParseStream) -> Result<Expr> {
    let mut left = parse_binary(input)?;

    loop {
        if input.peek(Token![->]) {
            input.parse::<Token![->]>()?;
            let right = parse_binary(input)?;
            left = Expr::Implies(Box::new(left), Box::new(right));
        } else if input.peek(Token![==]) {
            input.parse::<Token![==]>()?;
            let right = parse_binary(input)?;
            left = Expr::Equivalent(Box::new(left), Box::new(right));
        } else {
            return Ok(left);
        }
    }
}

/// Parse `&` and `|` chains (same precedence, left-associative)
fn parse_binary(input: ParseStream) -> Result<Expr> {
    let mut left = parse_unary(input)?;

    loop {
        if input.peek(Token![&]) && !input.peek(Token![&&]) {
            input.parse::<Token![&]>()?;
            let right = parse_unary(input)?;
            left = Expr::And(Box::new(left), Box::new(right));
        } else if input.peek(Token![|]) && !input.peek(Token![||]) {
            input.parse::<Token![|]>()?;
            let right = parse_unary(input)?;
            left = Expr::Or(Box::new(left), Box::new(right));
        } else {
            return Ok(left);
        }
    }
}

/// Parse `!` (highest precedence)
fn parse_unary(input: ParseStream) -> Result<Expr> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
        let inner = parse_unary(input)?;
        Ok(Expr::Not(Box::new(inner)))
    } else {
        parse_primary(input)
    }
}

/// Parse atoms, quantified forms, identifiers and parenthesised expressions
fn parse_primary(input: ParseStream) -> Result<Expr> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        parse_implication(&content)
    } else if input.peek(LitStr) {
        Ok(Expr::Atom(input.parse()?))
    } else if input.peek(Ident) && input.peek2(LitStr) {
        let keyword: Ident = input.parse()?;
        let disjunction = match keyword.to_string().as_str() {
            "one" | "any" => true,
            "all" => false,
            _ => {
                return Err(syn::Error::new(
                    keyword.span(),
                    "expected `one`, `any` or `all` before an element name",
                ))
            }
        };
        let element: LitStr = input.parse()?;
        parse_in(input)?;
        let set: LitStr = input.parse()?;
        Ok(Expr::Quantified {
            disjunction,
            element,
            set,
        })
    } else {
        let ident: Ident = input.parse()?;
        Ok(Expr::Variable(ident))
    }
}

/// Parse `in`, or its synonym `of`
fn parse_in(input: ParseStream) -> Result<()> {
    if input.peek(Token![in]) {
        input.parse::<Token![in]>()?;
        return Ok(());
    }
    let ident: Ident = input.parse()?;
    if ident == "of" {
        Ok(())
    } else {
        Err(syn::Error::new(ident.span(), "expected `in` or `of`"))
    }
}

/// The `bexpr!` procedural macro for boolean expressions
///
/// Builds an `Expr` with the same syntax and precedence as the text parser.
/// `Expr` must be in scope at the call site.
///
/// # Supported Syntax
///
/// - `"a"` - String literal, becomes `Expr::atom("a")`
/// - `a` - Any `Expr` identifier in scope (cloned)
/// - `one "x" in "X"` / `any "x" of "X"` - `Expr::gen_disj("x", "X")`
/// - `all "x" in "X"` - `Expr::gen_conj("x", "X")`
/// - `!a` - NOT
/// - `a & b`, `a | b` - AND, OR (same precedence, left-associative)
/// - `a -> b`, `a == b` - implication, equivalence (lowest precedence, left-associative)
/// - `( ... )` - grouping
///
/// # Examples
///
/// ```ignore
/// use boolean_constraints::{bexpr, Expr};
///
/// let guard = bexpr!("a" & !"b");
/// let rule = bexpr!(guard -> one "x" in "X");
/// assert_eq!(rule, Expr::parse("a & !b -> one x in X").unwrap());
/// ```
#[proc_macro]
pub fn bexpr(input: TokenStream) -> TokenStream {
    let parser = parse_macro_input!(input as ExprInput);
    let tokens = parser.expr.to_tokens();
    TokenStream::from(tokens)
}

// Template module for RFC 6570-style URI templates
//
// This module provides scanning, expression parsing and expansion of URI
// templates with operator-specific prefixes, separators and escaping.

mod ast;
mod escape;
mod operator;
mod parser;
mod render;
mod value;

pub use ast::{Expression, Modifier, Template, TemplatePart, VarSpec};
pub use escape::{escape, Escaping, RESERVED_SAFE};
pub use operator::{Operator, OperatorSpec, PairFormat};
pub use parser::{parse_expression, TemplateParser};
pub use render::{render_expression, render_varspec};
pub use value::{Value, Variables};

/// Expand a URI template.
///
/// Never fails: unknown operators render as simple expressions, unbound
/// variables are skipped and unterminated braces stay literal.
///
/// ```
/// use purl::{expand, Variables};
///
/// let mut vars = Variables::new();
/// vars.insert("q".to_string(), "rust templates".into());
/// assert_eq!(expand("/search{?q}", &vars), "/search?q=rust%20templates");
/// ```
pub fn expand(template: &str, variables: &Variables) -> String {
    TemplateParser::parse(template).expand(variables)
}

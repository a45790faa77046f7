// Rendering of parsed expressions against variable bindings

use std::borrow::Cow;

use super::ast::{Expression, Template, TemplatePart, VarSpec};
use super::operator::{OperatorSpec, PairFormat};
use super::value::{Value, Variables};

impl Template {
    /// Expand every expression against `variables`; literal text passes through unchanged
    pub fn expand(&self, variables: &Variables) -> String {
        let mut result = String::new();

        for part in &self.parts {
            match part {
                TemplatePart::Literal(s) => result.push_str(s),
                TemplatePart::Expression(expr) => {
                    result.push_str(&render_expression(expr, variables))
                }
            }
        }

        result
    }
}

/// Render one expression.
///
/// Unbound variables are skipped without leaving a separator behind. The
/// operator prefix is only written when something was rendered.
pub fn render_expression(expr: &Expression, variables: &Variables) -> String {
    let spec = expr.operator.spec();

    let rendered: Vec<String> = expr
        .varspecs
        .iter()
        .filter_map(|varspec| {
            let value = variables.get(&varspec.name)?;
            Some(render_varspec(spec, varspec, value))
        })
        .collect();

    let joined = rendered.join(spec.separator);
    if joined.is_empty() {
        joined
    } else {
        format!("{}{}", spec.prefix, joined)
    }
}

/// Render a single bound variable under an operator's policy
pub fn render_varspec(spec: &OperatorSpec, varspec: &VarSpec, value: &Value) -> String {
    let value = truncate(value, varspec.prefix_len());
    let explode = varspec.is_exploded();
    let join = if explode { spec.separator } else { "," };
    let escape = |s: &str| spec.escaping.apply(s);

    match spec.format {
        PairFormat::ValueOnly => match &*value {
            Value::Scalar(s) => escape(s),
            Value::List(items) => join_escaped(items.iter().map(String::as_str), join, escape),
            Value::Pairs(pairs) if explode => join_assignments(pairs, join, escape),
            Value::Pairs(pairs) => join_escaped(flatten(pairs), ",", escape),
        },
        PairFormat::KeyValue | PairFormat::KeyValueEquals => {
            let key = varspec.name.as_str();
            if value.is_empty() {
                return match spec.format {
                    PairFormat::KeyValue => key.to_string(),
                    _ => format!("{}=", key),
                };
            }

            match &*value {
                Value::Scalar(s) => format!("{}={}", key, escape(s)),
                Value::List(items) if explode => items
                    .iter()
                    .map(|item| format!("{}={}", key, escape(item)))
                    .collect::<Vec<_>>()
                    .join(join),
                Value::List(items) => format!(
                    "{}={}",
                    key,
                    join_escaped(items.iter().map(String::as_str), ",", escape)
                ),
                Value::Pairs(pairs) if explode => join_assignments(pairs, join, escape),
                Value::Pairs(pairs) => {
                    format!("{}={}", key, join_escaped(flatten(pairs), ",", escape))
                }
            }
        }
    }
}

// Prefix modifiers only apply to scalars; lists and pairs pass through untouched
fn truncate(value: &Value, prefix_len: Option<usize>) -> Cow<'_, Value> {
    match (value, prefix_len) {
        (Value::Scalar(s), Some(len)) => Cow::Owned(Value::Scalar(s.chars().take(len).collect())),
        _ => Cow::Borrowed(value),
    }
}

fn flatten(pairs: &[(String, String)]) -> impl Iterator<Item = &str> {
    pairs
        .iter()
        .flat_map(|(k, v)| [k.as_str(), v.as_str()])
}

fn join_escaped<'a>(
    items: impl Iterator<Item = &'a str>,
    join: &str,
    escape: impl Fn(&str) -> String,
) -> String {
    items.map(escape).collect::<Vec<_>>().join(join)
}

// Keys are written as given; only values are escaped
fn join_assignments(
    pairs: &[(String, String)],
    join: &str,
    escape: impl Fn(&str) -> String,
) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, escape(v)))
        .collect::<Vec<_>>()
        .join(join)
}

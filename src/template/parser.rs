// Template scanner and expression parser

use super::ast::{Expression, Modifier, Template, TemplatePart, VarSpec};
use super::operator::Operator;

/// Splits a template into literal text and `{...}` expressions.
///
/// Scanning never fails: a `{` without a later `}` and the empty `{}` are
/// kept as literal text. The first `}` after a `{` closes the expression, so
/// `{a{b}` is one expression with body `a{b`.
pub struct TemplateParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> TemplateParser<'a> {
    pub fn parse(template: &'a str) -> Template {
        let mut parser = Self {
            input: template,
            pos: 0,
        };
        parser.parse_template()
    }

    fn parse_template(&mut self) -> Template {
        let mut parts = Vec::new();
        let mut literal_buf = String::new();

        while let Some(ch) = self.peek_char() {
            if ch == '{' {
                match self.input[self.pos + 1..].find('}') {
                    // Nothing can close from here on
                    None => {
                        literal_buf.push_str(&self.input[self.pos..]);
                        break;
                    }
                    Some(len) if len > 0 => {
                        if !literal_buf.is_empty() {
                            parts.push(TemplatePart::Literal(std::mem::take(&mut literal_buf)));
                        }
                        let body = &self.input[self.pos + 1..self.pos + 1 + len];
                        parts.push(TemplatePart::Expression(parse_expression(body)));
                        self.pos += len + 2;
                        continue;
                    }
                    // `{}` has no body and stays literal
                    Some(_) => {}
                }
            }
            literal_buf.push(ch);
            self.pos += ch.len_utf8();
        }

        if !literal_buf.is_empty() {
            parts.push(TemplatePart::Literal(literal_buf));
        }

        Template::new(parts)
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }
}

/// Parse the text between one pair of braces.
///
/// A leading `+ # . / ; ? &` selects the operator; any other first character
/// belongs to the first variable name and the expression is simple.
pub fn parse_expression(body: &str) -> Expression {
    let mut chars = body.chars();
    let (operator, rest) = match chars.next().and_then(Operator::from_char) {
        Some(op) => (op, chars.as_str()),
        None => (Operator::Simple, body),
    };

    let varspecs = rest.split(',').map(parse_varspec).collect();
    Expression::new(operator).with_varspecs(varspecs)
}

fn parse_varspec(word: &str) -> VarSpec {
    // A trailing `*` wins over a colon modifier and keeps the colon text in the name
    if let Some(name) = word.strip_suffix('*') {
        return VarSpec::new(name).with_modifier(Modifier::Explode);
    }

    let mut parts = word.splitn(3, ':');
    let name = parts.next().unwrap_or_default();
    VarSpec {
        name: name.to_string(),
        modifier: parts.next().and_then(Modifier::from_colon),
    }
}

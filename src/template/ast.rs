// Syntax tree types for URI templates

use super::operator::Operator;

/// Represents a parsed template as a list of parts
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub parts: Vec<TemplatePart>,
}

impl Template {
    pub fn new(parts: Vec<TemplatePart>) -> Self {
        Self { parts }
    }

    /// Get all variable specs in this template, in scan order
    pub fn variables(&self) -> Vec<&VarSpec> {
        self.expressions()
            .flat_map(|expr| expr.varspecs.iter())
            .collect()
    }

    pub fn expressions(&self) -> impl Iterator<Item = &Expression> {
        self.parts.iter().filter_map(|part| match part {
            TemplatePart::Expression(expr) => Some(expr),
            TemplatePart::Literal(_) => None,
        })
    }
}

/// A template consists of literal strings and `{...}` expressions
#[derive(Debug, Clone, PartialEq)]
pub enum TemplatePart {
    Literal(String),
    Expression(Expression),
}

/// One `{...}` occurrence: an operator and the variables it renders
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Expression {
    pub operator: Operator,
    pub varspecs: Vec<VarSpec>,
}

impl Expression {
    pub fn new(operator: Operator) -> Self {
        Self {
            operator,
            varspecs: Vec::new(),
        }
    }

    pub fn with_varspecs(mut self, varspecs: Vec<VarSpec>) -> Self {
        self.varspecs = varspecs;
        self
    }
}

/// A variable reference with its optional modifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarSpec {
    pub name: String,
    pub modifier: Option<Modifier>,
}

impl VarSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifier: None,
        }
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifier = Some(modifier);
        self
    }

    pub fn is_exploded(&self) -> bool {
        matches!(self.modifier, Some(Modifier::Explode))
    }

    pub fn prefix_len(&self) -> Option<usize> {
        match self.modifier {
            Some(Modifier::Prefix(len)) => Some(len),
            _ => None,
        }
    }
}

/// Per-variable modifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modifier {
    /// `*`: one item per list element or pair
    Explode,
    /// `:N`: keep the first N characters of a scalar
    Prefix(usize),
    /// Any other colon modifier; carried through and ignored when rendering
    Unrecognized(String),
}

impl Modifier {
    /// Interpret the text after a colon
    pub fn from_colon(text: &str) -> Option<Self> {
        if text.is_empty() {
            None
        } else if text.bytes().all(|b| b.is_ascii_digit()) {
            // Digit strings too long for usize still mean "keep everything"
            Some(Modifier::Prefix(text.parse().unwrap_or(usize::MAX)))
        } else {
            Some(Modifier::Unrecognized(text.to_string()))
        }
    }
}

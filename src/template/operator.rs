// Operator table: one fixed rendering policy per expression operator

use super::escape::Escaping;

/// How a single variable is laid out inside an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairFormat {
    /// Only the value is emitted
    ValueOnly,
    /// `key=value`, bare `key` when the value is empty
    KeyValue,
    /// `key=value`, `key=` when the value is empty
    KeyValueEquals,
}

/// Rendering policy for an operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorSpec {
    pub prefix: &'static str,
    pub separator: &'static str,
    pub escaping: Escaping,
    pub format: PairFormat,
}

const SIMPLE: OperatorSpec = OperatorSpec {
    prefix: "",
    separator: ",",
    escaping: Escaping::All,
    format: PairFormat::ValueOnly,
};
const RESERVED: OperatorSpec = OperatorSpec {
    prefix: "",
    separator: ",",
    escaping: Escaping::Reserved,
    format: PairFormat::ValueOnly,
};
const FRAGMENT: OperatorSpec = OperatorSpec {
    prefix: "#",
    separator: ",",
    escaping: Escaping::Reserved,
    format: PairFormat::ValueOnly,
};
const LABEL: OperatorSpec = OperatorSpec {
    prefix: ".",
    separator: ".",
    escaping: Escaping::All,
    format: PairFormat::ValueOnly,
};
const PATH: OperatorSpec = OperatorSpec {
    prefix: "/",
    separator: "/",
    escaping: Escaping::All,
    format: PairFormat::ValueOnly,
};
const PATH_PARAM: OperatorSpec = OperatorSpec {
    prefix: ";",
    separator: ";",
    escaping: Escaping::All,
    format: PairFormat::KeyValue,
};
const QUERY: OperatorSpec = OperatorSpec {
    prefix: "?",
    separator: "&",
    escaping: Escaping::All,
    format: PairFormat::KeyValueEquals,
};
const QUERY_CONTINUATION: OperatorSpec = OperatorSpec {
    prefix: "&",
    separator: "&",
    escaping: Escaping::All,
    format: PairFormat::KeyValueEquals,
};

/// Expression operator, selected by the first character inside the braces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operator {
    #[default]
    Simple,
    Reserved,
    Fragment,
    Label,
    Path,
    PathParam,
    Query,
    QueryContinuation,
}

impl Operator {
    /// Map an operator character; anything else is not an operator
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Reserved),
            '#' => Some(Operator::Fragment),
            '.' => Some(Operator::Label),
            '/' => Some(Operator::Path),
            ';' => Some(Operator::PathParam),
            '?' => Some(Operator::Query),
            '&' => Some(Operator::QueryContinuation),
            _ => None,
        }
    }

    pub fn as_char(self) -> Option<char> {
        match self {
            Operator::Simple => None,
            Operator::Reserved => Some('+'),
            Operator::Fragment => Some('#'),
            Operator::Label => Some('.'),
            Operator::Path => Some('/'),
            Operator::PathParam => Some(';'),
            Operator::Query => Some('?'),
            Operator::QueryContinuation => Some('&'),
        }
    }

    pub fn spec(self) -> &'static OperatorSpec {
        match self {
            Operator::Simple => &SIMPLE,
            Operator::Reserved => &RESERVED,
            Operator::Fragment => &FRAGMENT,
            Operator::Label => &LABEL,
            Operator::Path => &PATH,
            Operator::PathParam => &PATH_PARAM,
            Operator::Query => &QUERY,
            Operator::QueryContinuation => &QUERY_CONTINUATION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char_roundtrips_every_operator() {
        for ch in ['+', '#', '.', '/', ';', '?', '&'] {
            let op = Operator::from_char(ch).unwrap();
            assert_eq!(op.as_char(), Some(ch));
        }
    }

    #[test]
    fn test_unknown_char_is_not_an_operator() {
        assert_eq!(Operator::from_char('a'), None);
        assert_eq!(Operator::from_char('='), None);
        assert_eq!(Operator::from_char('!'), None);
        assert_eq!(Operator::Simple.as_char(), None);
    }

    #[test]
    fn test_query_operators_join_with_ampersand() {
        assert_eq!(Operator::Query.spec().prefix, "?");
        assert_eq!(Operator::Query.spec().separator, "&");
        assert_eq!(Operator::QueryContinuation.spec().prefix, "&");
        assert_eq!(Operator::Query.spec().format, PairFormat::KeyValueEquals);
    }

    #[test]
    fn test_reserved_operators_preserve_reserved_chars() {
        assert_eq!(Operator::Reserved.spec().escaping, Escaping::Reserved);
        assert_eq!(Operator::Fragment.spec().escaping, Escaping::Reserved);
        assert_eq!(Operator::Path.spec().escaping, Escaping::All);
        assert_eq!(Operator::Simple.spec().escaping, Escaping::All);
    }

    #[test]
    fn test_path_param_uses_bare_key_format() {
        let spec = Operator::PathParam.spec();
        assert_eq!((spec.prefix, spec.separator), (";", ";"));
        assert_eq!(spec.format, PairFormat::KeyValue);
    }
}

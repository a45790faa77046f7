//! Property-based tests for template expansion using proptest.

use proptest::prelude::*;
use purl::{expand, Value, Variables};

const OPERATORS: [&str; 8] = ["", "+", "#", ".", "/", ";", "?", "&"];

proptest! {
    /// Text without braces is never changed, whatever is bound.
    #[test]
    fn literal_text_is_identity(
        template in "[^{}]{0,40}",
        value in ".{0,10}",
    ) {
        let mut vars = Variables::new();
        vars.insert("var".to_string(), Value::from(value));
        prop_assert_eq!(expand(&template, &vars), template);
    }

    /// Unreserved-only scalars come out of a simple expression unchanged.
    #[test]
    fn unreserved_scalars_are_not_escaped(value in "[A-Za-z0-9._~-]{0,20}") {
        let mut vars = Variables::new();
        vars.insert("var".to_string(), Value::from(value.clone()));
        prop_assert_eq!(expand("{var}", &vars), value);
    }

    /// Unbound variables render nothing under every operator.
    #[test]
    fn unbound_variables_render_nothing(
        op in prop::sample::select(OPERATORS.to_vec()),
        names in prop::collection::vec("[a-z]{1,8}", 1..5),
    ) {
        let template = format!("{{{}{}}}", op, names.join(","));
        prop_assert_eq!(expand(&template, &Variables::new()), "");
    }

    /// Expansion output only contains unreserved characters, percent
    /// triplets and the operator's own punctuation.
    #[test]
    fn expansion_output_is_uri_safe(
        op in prop::sample::select(OPERATORS.to_vec()),
        value in "\\PC{0,20}",
    ) {
        let mut vars = Variables::new();
        vars.insert("var".to_string(), Value::from(value));
        let output = expand(&format!("{{{}var}}", op), &vars);
        prop_assert!(output
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-._~%/!,;#?&=".contains(c)));
    }

    /// Truncation never yields more characters than asked for.
    #[test]
    fn truncation_bounds_length(value in "[a-z]{0,20}", len in 0usize..25) {
        let mut vars = Variables::new();
        vars.insert("var".to_string(), Value::from(value.clone()));
        let output = expand(&format!("{{var:{}}}", len), &vars);
        prop_assert_eq!(output.len(), value.len().min(len));
    }
}

use anyhow::{bail, Context, Result};
use std::path::Path;

use crate::template::{Value, Variables};

/// Read a YAML (or JSON) mapping of variable names to values.
///
/// ```yaml
/// var: value
/// list: [red, green, blue]
/// keys: {semi: ";", dot: "."}
/// ```
pub fn load_bindings(path: impl AsRef<Path>) -> Result<Variables> {
    let path = path.as_ref();
    let yml = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read bindings file {}", path.display()))?;
    let variables = parse_yaml_bindings(&yml)
        .with_context(|| format!("Invalid bindings in {}", path.display()))?;

    tracing::debug!(path = %path.display(), count = variables.len(), "loaded bindings");
    Ok(variables)
}

pub fn parse_yaml_bindings(yml: &str) -> Result<Variables> {
    // An empty document binds nothing
    if yml.trim().is_empty() {
        return Ok(Variables::new());
    }
    Ok(serde_yaml::from_str(yml)?)
}

pub fn parse_json_bindings(json: &str) -> Result<Variables> {
    serde_json::from_str(json).context("Invalid JSON bindings")
}

/// Parse `name=value` into a scalar binding; only the first `=` splits
pub fn parse_assignment(assignment: &str) -> Result<(String, Value)> {
    let Some((name, value)) = assignment.split_once('=') else {
        bail!("Invalid assignment '{}': expected name=value", assignment);
    };
    if name.is_empty() {
        bail!("Invalid assignment '{}': variable name is empty", assignment);
    }
    Ok((name.to_string(), Value::from(value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_bindings_shapes() {
        let vars = parse_yaml_bindings(
            "var: value\nport: 8080\nlist: [red, green]\nkeys:\n  semi: ';'\n  dot: '.'\n",
        )
        .unwrap();

        assert_eq!(vars["var"], Value::from("value"));
        assert_eq!(vars["port"], Value::from("8080"));
        assert_eq!(vars["list"], Value::from(["red", "green"]));
        assert_eq!(vars["keys"], Value::from([("semi", ";"), ("dot", ".")]));
    }

    #[test]
    fn test_parse_yaml_accepts_json_documents() {
        let vars = parse_yaml_bindings(r#"{"who": "fred", "pairs": [["a", "1"], ["a", "2"]]}"#)
            .unwrap();
        assert_eq!(vars["who"], Value::from("fred"));
        assert_eq!(vars["pairs"], Value::from([("a", "1"), ("a", "2")]));
    }

    #[test]
    fn test_parse_yaml_empty_document() {
        assert!(parse_yaml_bindings("").unwrap().is_empty());
        assert!(parse_yaml_bindings("  \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_yaml_rejects_non_mapping() {
        assert!(parse_yaml_bindings("- a\n- b\n").is_err());
    }

    #[test]
    fn test_parse_json_bindings() {
        let vars = parse_json_bindings(r#"{"list": ["a", "b"], "n": 3}"#).unwrap();
        assert_eq!(vars["list"], Value::from(["a", "b"]));
        assert_eq!(vars["n"], Value::from("3"));

        let err = parse_json_bindings("{not json").unwrap_err();
        assert!(err.to_string().contains("Invalid JSON bindings"));
    }

    #[test]
    fn test_parse_assignment() {
        let (name, value) = parse_assignment("q=a=b").unwrap();
        assert_eq!(name, "q");
        assert_eq!(value, Value::from("a=b"));

        let (_, value) = parse_assignment("empty=").unwrap();
        assert_eq!(value, Value::from(""));
    }

    #[test]
    fn test_parse_assignment_errors() {
        let result = parse_assignment("novalue");
        assert!(result.unwrap_err().to_string().contains("expected name=value"));

        let result = parse_assignment("=value");
        assert!(result.unwrap_err().to_string().contains("variable name is empty"));
    }
}

// Loading variable bindings from files, inline JSON and `name=value` pairs

pub mod bindings;

pub use bindings::{load_bindings, parse_assignment, parse_json_bindings, parse_yaml_bindings};

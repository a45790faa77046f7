//! RFC 6570-style URI template expansion, plus a small URL value object.
//!
//! ```
//! use purl::{expand, Value, Variables};
//!
//! let mut vars = Variables::new();
//! vars.insert("user".to_string(), Value::from("octocat"));
//! vars.insert("tabs".to_string(), Value::from(["repos", "stars"]));
//! assert_eq!(expand("/users/{user}{/tabs*}", &vars), "/users/octocat/repos/stars");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod template;
pub mod uri;

pub use error::UrlError;
pub use template::{expand, Template, TemplateParser, Value, Variables};
pub use uri::{parse_query, Url, UrlParts};

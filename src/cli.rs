// Command-line interface for the purl binary

use anyhow::{bail, Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::config;
use crate::template::{expand, Variables};
use crate::uri::Url;

pub fn build_cli() -> Command {
    Command::new("purl")
        .about("Expand URI templates and inspect URLs")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Enable debug logging on stderr"),
        )
        .subcommand(
            Command::new("expand")
                .about("Expand a URI template")
                .arg(
                    Arg::new("template")
                        .value_name("TEMPLATE")
                        .required(true)
                        .help("Template to expand, e.g. '/search{?q}'"),
                )
                .arg(
                    Arg::new("file")
                        .short('f')
                        .long("file")
                        .value_name("FILE")
                        .help("Path to a YAML or JSON file with variable bindings"),
                )
                .arg(
                    Arg::new("json")
                        .short('j')
                        .long("json")
                        .value_name("JSON")
                        .help("Inline JSON object with variable bindings"),
                )
                .arg(
                    Arg::new("set")
                        .short('s')
                        .long("set")
                        .value_name("NAME=VALUE")
                        .action(ArgAction::Append)
                        .help("Bind a scalar variable; may be repeated"),
                ),
        )
        .subcommand(
            Command::new("url")
                .about("Show the components of a URL")
                .arg(Arg::new("url").value_name("URL").required(true))
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print components as JSON"),
                ),
        )
}

/// Run the parsed command and return what should be printed
pub fn run(matches: &ArgMatches) -> Result<String> {
    match matches.subcommand() {
        Some(("expand", sub)) => {
            let template = sub
                .get_one::<String>("template")
                .context("Missing template")?;
            let variables = collect_bindings(sub)?;
            tracing::debug!(template = %template, bound = variables.len(), "expanding template");
            Ok(expand(template, &variables))
        }
        Some(("url", sub)) => {
            let raw = sub.get_one::<String>("url").context("Missing URL")?;
            let url = Url::parse(raw)?;
            if sub.get_flag("json") {
                Ok(serde_json::to_string_pretty(&url.parts())?)
            } else {
                Ok(describe_url(&url))
            }
        }
        Some((name, _)) => bail!("Unknown command: {}", name),
        None => bail!("No command given"),
    }
}

// File bindings are overridden by inline JSON, which is overridden by --set
fn collect_bindings(matches: &ArgMatches) -> Result<Variables> {
    let mut variables = Variables::new();

    if let Some(path) = matches.get_one::<String>("file") {
        variables.extend(config::load_bindings(path)?);
    }

    if let Some(json) = matches.get_one::<String>("json") {
        variables.extend(config::parse_json_bindings(json)?);
    }

    for assignment in matches.get_many::<String>("set").into_iter().flatten() {
        let (name, value) = config::parse_assignment(assignment)?;
        if variables.insert(name.clone(), value).is_some() {
            tracing::debug!(name = %name, "binding overridden by --set");
        }
    }

    Ok(variables)
}

fn describe_url(url: &Url) -> String {
    let mut lines = vec![
        format!("scheme: {}", url.scheme()),
        format!("host: {}", url.host().unwrap_or_default()),
    ];
    if let Some(port) = url.port() {
        lines.push(format!("port: {}", port));
    }
    lines.push(format!("path: {}", url.path()));
    if let Some(query) = url.query() {
        lines.push(format!("query: {}", query));
    }
    if let Some(fragment) = url.fragment() {
        lines.push(format!("fragment: {}", fragment));
    }
    lines.join("\n")
}

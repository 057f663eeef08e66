//! Global option parsing.
//!
//! Only used when the first argument starts with a dash. Each recognized
//! option either triggers a built-in action or stores a value in
//! [`GlobalOptions`]; everything else is collected as trailing arguments.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::GlobalOptions;

/// Built-in actions that end option parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinAction {
    Help,
    Complete,
    Incomplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OptionKind {
    Action(BuiltinAction),
    GitDir,
    ShowStackTrace,
}

/// One entry of the global option table.
#[derive(Debug)]
pub struct OptionSpec {
    /// Long name first, then aliases. Single-letter names are short options.
    pub names: &'static [&'static str],
    pub value_name: Option<&'static str>,
    pub description: &'static str,
    kind: OptionKind,
}

/// Global options in the order they are shown in help.
pub const OPTIONS: &[OptionSpec] = &[
    OptionSpec {
        names: &["complete"],
        value_name: None,
        description: "display the complete commands",
        kind: OptionKind::Action(BuiltinAction::Complete),
    },
    OptionSpec {
        names: &["git-dir"],
        value_name: Some("GIT_DIR"),
        description: "set the git repository to operate on",
        kind: OptionKind::GitDir,
    },
    OptionSpec {
        names: &["help", "h"],
        value_name: None,
        description: "display this help text",
        kind: OptionKind::Action(BuiltinAction::Help),
    },
    OptionSpec {
        names: &["incomplete"],
        value_name: None,
        description: "display the incomplete commands",
        kind: OptionKind::Action(BuiltinAction::Incomplete),
    },
    OptionSpec {
        names: &["show-stack-trace"],
        value_name: None,
        description: "display the error chain on failures",
        kind: OptionKind::ShowStackTrace,
    },
];

impl OptionSpec {
    /// Spellings of every name, e.g. `--help`, `-h`, `--git-dir=GIT_DIR`.
    pub fn spellings(&self) -> impl Iterator<Item = String> + '_ {
        self.names.iter().map(|name| {
            let dashes = if name.len() == 1 { "-" } else { "--" };
            match self.value_name {
                Some(value) => format!("{dashes}{name}={value}"),
                None => format!("{dashes}{name}"),
            }
        })
    }

    fn find(name: &str) -> Option<&'static Self> {
        OPTIONS.iter().find(|spec| spec.names.contains(&name))
    }
}

/// Global option parsing failure.
///
/// Carries the trailing arguments that were collected before the bad token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    message: String,
    trailing: Vec<String>,
}

impl ParseError {
    fn new(message: String, trailing: &[String]) -> Self {
        Self {
            message,
            trailing: trailing.to_vec(),
        }
    }

    /// Arguments collected before parsing failed.
    #[must_use]
    pub fn trailing(&self) -> &[String] {
        &self.trailing
    }

    /// A parse failure only ends the run when trailing arguments had already
    /// been collected; otherwise it is ignored.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !self.trailing.is_empty()
    }
}

/// Parse global options from `argv` into `options`.
///
/// Tokens are handled left to right. Both `-name` and `--name` are accepted,
/// values may be attached with `=` or given as the next token. The first
/// action option stops parsing and is returned. Everything after a bare `--`
/// is taken as trailing arguments.
///
/// # Errors
/// Returns a [`ParseError`] for unknown options, a missing `--git-dir`
/// value, or a value attached to an option that takes none.
pub fn parse(
    options: &mut GlobalOptions,
    argv: &[String],
) -> Result<Option<BuiltinAction>, ParseError> {
    let mut tokens = argv.iter();
    while let Some(token) = tokens.next() {
        if token == "--" {
            options.arguments.extend(tokens.cloned());
            break;
        }

        let Some(flag) = token
            .strip_prefix("--")
            .or_else(|| token.strip_prefix('-'))
            .filter(|flag| !flag.is_empty())
        else {
            options.arguments.push(token.clone());
            continue;
        };

        let (name, inline_value) = match flag.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (flag, None),
        };

        let Some(spec) = OptionSpec::find(name) else {
            return Err(ParseError::new(
                format!("unknown option '{token}'"),
                &options.arguments,
            ));
        };

        match spec.kind {
            OptionKind::GitDir => {
                let value = inline_value
                    .map(str::to_owned)
                    .or_else(|| tokens.next().cloned())
                    .filter(|value| !value.is_empty())
                    .ok_or_else(|| {
                        ParseError::new(
                            format!("missing value for option '--{name}'"),
                            &options.arguments,
                        )
                    })?;
                options.git_dir = Some(PathBuf::from(value));
            }
            _ if inline_value.is_some() => {
                return Err(ParseError::new(
                    format!("option '--{name}' does not take a value"),
                    &options.arguments,
                ));
            }
            OptionKind::ShowStackTrace => options.show_stack_trace = true,
            OptionKind::Action(action) => return Ok(Some(action)),
        }
    }

    Ok(None)
}

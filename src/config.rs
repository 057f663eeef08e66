use std::path::PathBuf;

/// Global options for a single run, built once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalOptions {
    /// Print the full error chain after `fatal:` messages.
    pub show_stack_trace: bool,
    /// Repository directory override (`--git-dir` or `GIT_DIR`).
    pub git_dir: Option<PathBuf>,
    /// Arguments left over after global option parsing.
    pub arguments: Vec<String>,
}

impl GlobalOptions {
    /// Seed options from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Seed options from an arbitrary variable lookup.
    ///
    /// `GIT_DIR` provides the repository override; an empty value is ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let git_dir = lookup("GIT_DIR")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self {
            git_dir,
            ..Self::default()
        }
    }
}

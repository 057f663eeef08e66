//! Registry of subcommands known to the dispatcher.

use crate::commands::{
    Command, branch::BranchCommand, help::HelpCommand, init::InitCommand, log::LogCommand,
    ls_remote::LsRemoteCommand, rev_parse::RevParseCommand, show_ref::ShowRefCommand,
    version::VersionCommand,
};

/// Creates a fresh command instance for one invocation. Receives the catalog
/// the command was resolved from.
pub type Factory = fn(&CommandCatalog) -> Box<dyn Command>;

/// Descriptor for one subcommand.
#[derive(Debug, Clone, Copy)]
pub struct CommandRef {
    name: &'static str,
    usage: &'static str,
    common: bool,
    complete: bool,
    factory: Factory,
}

impl CommandRef {
    #[must_use]
    pub const fn new(name: &'static str, usage: &'static str, factory: Factory) -> Self {
        Self {
            name,
            usage,
            common: false,
            complete: true,
            factory,
        }
    }

    /// Show this command in the default help listing.
    #[must_use]
    pub const fn common(mut self) -> Self {
        self.common = true;
        self
    }

    /// Mark the command as only partially implemented.
    #[must_use]
    pub const fn incomplete(mut self) -> Self {
        self.complete = false;
        self
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn usage(&self) -> &'static str {
        self.usage
    }

    #[must_use]
    pub fn create(&self, catalog: &CommandCatalog) -> Box<dyn Command> {
        (self.factory)(catalog)
    }
}

/// Name-ordered collection of [`CommandRef`]s.
#[derive(Debug, Clone, Default)]
pub struct CommandCatalog {
    commands: Vec<CommandRef>,
}

impl CommandCatalog {
    #[must_use]
    pub fn new(mut commands: Vec<CommandRef>) -> Self {
        commands.sort_by_key(CommandRef::name);
        Self { commands }
    }

    /// Catalog of the commands shipped with this binary.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![
            CommandRef::new("branch", "List local branches", |_| {
                Box::new(BranchCommand::default())
            })
            .common()
            .incomplete(),
            CommandRef::new("help", "Display help for a command", |catalog| {
                Box::new(HelpCommand::new(catalog.clone()))
            }),
            CommandRef::new("init", "Create an empty git repository", |_| Box::new(InitCommand))
                .common(),
            CommandRef::new("log", "Show commit history", |_| Box::new(LogCommand::default()))
                .common()
                .incomplete(),
            CommandRef::new("ls-remote", "List references in a remote repository", |_| {
                Box::new(LsRemoteCommand)
            })
            .common(),
            CommandRef::new("rev-parse", "Resolve revisions to object ids", |_| {
                Box::new(RevParseCommand::default())
            })
            .common(),
            CommandRef::new("show-ref", "List references in a local repository", |_| {
                Box::new(ShowRefCommand::default())
            }),
            CommandRef::new("version", "Display the version of this program", |_| {
                Box::new(VersionCommand)
            }),
        ])
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CommandRef> {
        self.commands.iter().find(|c| c.name == name)
    }

    pub fn all(&self) -> impl Iterator<Item = &CommandRef> {
        self.commands.iter()
    }

    pub fn common(&self) -> impl Iterator<Item = &CommandRef> {
        self.all().filter(|c| c.common)
    }

    pub fn complete(&self) -> impl Iterator<Item = &CommandRef> {
        self.all().filter(|c| c.complete)
    }

    pub fn incomplete(&self) -> impl Iterator<Item = &CommandRef> {
        self.all().filter(|c| !c.complete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(refs: impl Iterator<Item = &'a CommandRef>) -> Vec<&'static str> {
        refs.map(CommandRef::name).collect()
    }

    #[test]
    fn get_finds_registered_command() {
        let catalog = CommandCatalog::builtin();
        let log = catalog.get("log").expect("log");
        assert_eq!(log.name(), "log");
        assert!(log.create(&catalog).requires_repository());
        assert!(catalog.get("frobnicate").is_none());
    }

    #[test]
    fn complete_and_incomplete_partition_catalog() {
        let catalog = CommandCatalog::builtin();
        let complete = names(catalog.complete());
        let incomplete = names(catalog.incomplete());
        assert_eq!(complete.len() + incomplete.len(), catalog.all().count());
        assert_eq!(incomplete, ["branch", "log"]);
        assert!(complete.iter().all(|name| !incomplete.contains(name)));
    }

    #[test]
    fn enumerations_are_sorted_by_name() {
        let catalog = CommandCatalog::new(vec![
            CommandRef::new("zeta", "", |_| Box::new(VersionCommand)).common(),
            CommandRef::new("alpha", "", |_| Box::new(VersionCommand)).common(),
        ]);
        assert_eq!(names(catalog.common()), ["alpha", "zeta"]);
    }

    #[test]
    fn repository_free_commands() {
        let catalog = CommandCatalog::builtin();
        for name in ["help", "init", "ls-remote", "version"] {
            let cmd = catalog.get(name).expect(name).create(&catalog);
            assert!(!cmd.requires_repository(), "{name}");
        }
    }
}

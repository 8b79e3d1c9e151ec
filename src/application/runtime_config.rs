use std::path::PathBuf;

use crate::application::data::Operation;
use crate::cli::{Cli, Command};

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub data: PathBuf,
    pub operation: Operation,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            data: cli.data,
            operation: cli.command.into(),
        }
    }
}

impl From<Command> for Operation {
    fn from(command: Command) -> Self {
        match command {
            Command::Orgs => Operation::ListOrganizations,
            Command::List { org } => Operation::ListFolders { org_id: org },
            Command::Children { org, name } => Operation::ChildFolders { org_id: org, name },
            Command::Move { name, destination } => Operation::MoveFolder { name, destination },
            Command::Tree { org } => Operation::Hierarchy { org_id: org },
        }
    }
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::application::data::{ColorChoice, LogLevel};
use crate::folder::OrgId;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Query and reorganize organization-scoped folder trees")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[clap(long, short, default_value = "warn", value_enum, global = true)]
    pub log_level: LogLevel,

    #[clap(long, default_value = "auto", value_enum, global = true)]
    pub color: ColorChoice,

    /// YAML file holding the folder collection
    #[clap(long, short, default_value = "folders.yaml", global = true)]
    pub data: PathBuf,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List every organization present in the dataset
    Orgs,
    /// List the folders of an organization
    List {
        #[clap(long)]
        org: OrgId,
    },
    /// List every descendant of a folder
    Children {
        #[clap(long)]
        org: OrgId,
        name: String,
    },
    /// Move a folder and its subtree under another folder
    Move { name: String, destination: String },
    /// Show the folders of an organization as a tree
    Tree {
        #[clap(long)]
        org: OrgId,
    },
}

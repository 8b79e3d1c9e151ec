use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info};

use crate::application::RuntimeConfig;
use crate::application::data::Operation;
use crate::dataset::{Dataset, DatasetError};
use crate::folder::{FolderNode, FolderStore, FolderTreeError};
use crate::output::Printer;

pub struct Application;

impl Application {
    pub async fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        debug!("Runtime config: {:?}", app_config);

        let dataset = Dataset::read(&app_config.data)
            .await
            .context(DatasetSnafu)?;
        info!("Loaded {} folders", dataset.folders().len());
        let store = FolderStore::from(dataset);

        let lines = Self::execute(&store, &app_config.operation)?;
        Printer::print(&lines);

        Ok(())
    }

    /// Runs one operation against the store and renders its result
    pub fn execute(
        store: &FolderStore,
        operation: &Operation,
    ) -> Result<Vec<String>, ApplicationError> {
        debug!("Executing {:?}", operation);
        let lines = match operation {
            Operation::ListOrganizations => Printer::org_id_lines(&store.org_ids()),
            Operation::ListFolders { org_id } => {
                Printer::folder_lines(&store.get_folders_by_org_id(*org_id))
            }
            Operation::ChildFolders { org_id, name } => {
                let children = store
                    .get_all_child_folders(*org_id, name)
                    .context(FolderOperationSnafu)?;
                Printer::folder_lines(&children)
            }
            Operation::MoveFolder { name, destination } => {
                let moved = store
                    .move_folder(name, destination)
                    .context(FolderOperationSnafu)?;
                Printer::folder_lines(&moved)
            }
            Operation::Hierarchy { org_id } => {
                let root = FolderNode::from_folders(&store.get_folders_by_org_id(*org_id));
                Printer::hierarchy_lines(&root)
            }
        };

        Ok(lines)
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while loading the folder dataset"))]
    DatasetError { source: DatasetError },
    #[snafu(display("Folder operation failed"))]
    FolderOperationError { source: FolderTreeError },
}

//! Structural operations over the path-encoded folder forest.
//!
//! Both operations work purely on path prefixes: a folder is a descendant of
//! another when its path starts with the other's path followed by the
//! delimiter, and both belong to the same organization.

use snafu::Snafu;
use tracing::{debug, info};

use crate::folder::{Folder, FolderStore, OrgId, PATH_DELIMITER};

impl FolderStore {
    /// Returns every descendant of the folder called `name` inside `org_id`,
    /// in insertion order. A folder without descendants yields an empty list.
    pub fn get_all_child_folders(
        &self,
        org_id: OrgId,
        name: &str,
    ) -> Result<Vec<Folder>, FolderTreeError> {
        let folders = self.folders();
        Ok(self
            .child_folder_indices(org_id, name)?
            .into_iter()
            .map(|index| folders[index].clone())
            .collect())
    }

    /// Moves the folder called `name`, together with its whole subtree, under
    /// the folder called `destination_name`.
    ///
    /// Returns the full updated collection; the store itself is left untouched,
    /// so a failed move never leaves a partial result behind.
    pub fn move_folder(
        &self,
        name: &str,
        destination_name: &str,
    ) -> Result<Vec<Folder>, FolderTreeError> {
        let (source_index, destination_index) = self.locate_move_endpoints(name, destination_name);
        let folders = self.folders();

        let source_index = source_index.ok_or(FolderTreeError::SourceNotFound)?;
        let destination_index = destination_index.ok_or(FolderTreeError::DestinationNotFound)?;
        let source = &folders[source_index];
        let destination = &folders[destination_index];

        if source.org_id != destination.org_id {
            return Err(FolderTreeError::CrossOrganizationMove);
        }
        if source.path == destination.path {
            return Err(FolderTreeError::SelfMove);
        }

        let mut subtree = self.child_folder_indices(source.org_id, &source.name)?;
        subtree.push(source_index);
        debug!(
            "Moving '{}' with {} descendants under '{}'",
            source.path,
            subtree.len() - 1,
            destination.path
        );

        // Everything from the source's own segment onwards is kept verbatim
        let rewrite_point = source
            .path
            .rfind(PATH_DELIMITER)
            .map_or(0, |position| position + 1);

        let moved = folders
            .iter()
            .enumerate()
            .map(|(index, folder)| {
                if !subtree.contains(&index) {
                    return folder.clone();
                }
                let suffix = folder.path.get(rewrite_point..).unwrap_or(&folder.path);
                let path = format!("{}{}{}", destination.path, PATH_DELIMITER, suffix);
                debug!("Rewriting '{}' to '{}'", folder.path, path);
                Folder {
                    path,
                    ..folder.clone()
                }
            })
            .collect();

        info!("Moved folder '{}' under '{}'", source.name, destination.name);
        Ok(moved)
    }

    /// Positions of every descendant of `name` within `org_id`.
    ///
    /// A same-organization match always wins; other organizations are only
    /// consulted to tell a missing folder apart from a foreign one.
    fn child_folder_indices(
        &self,
        org_id: OrgId,
        name: &str,
    ) -> Result<Vec<usize>, FolderTreeError> {
        let folders = self.folders();

        let parent = match folders
            .iter()
            .find(|folder| folder.name == name && folder.org_id == org_id)
        {
            Some(parent) => parent,
            None if folders.iter().any(|folder| folder.name == name) => {
                debug!("Folder '{}' exists, but not in organization {}", name, org_id);
                return Err(FolderTreeError::FolderNotInOrganization);
            }
            None => return Err(FolderTreeError::FolderNotFound),
        };

        Ok(folders
            .iter()
            .enumerate()
            .filter(|(_, folder)| folder.is_descendant_of(parent))
            .map(|(index, _)| index)
            .collect())
    }

    /// Single pass over the collection; the first folder carrying each name wins
    fn locate_move_endpoints(
        &self,
        name: &str,
        destination_name: &str,
    ) -> (Option<usize>, Option<usize>) {
        self.folders()
            .iter()
            .enumerate()
            .fold((None, None), |(source, destination), (index, folder)| {
                (
                    source.or((folder.name == name).then_some(index)),
                    destination.or((folder.name == destination_name).then_some(index)),
                )
            })
    }
}

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum FolderTreeError {
    #[snafu(display("Folder does not exist"))]
    FolderNotFound,
    #[snafu(display("Folder does not exist in the specified organization"))]
    FolderNotInOrganization,
    #[snafu(display("Source folder does not exist"))]
    SourceNotFound,
    #[snafu(display("Destination folder does not exist"))]
    DestinationNotFound,
    #[snafu(display("Cannot move a folder to a different organization"))]
    CrossOrganizationMove,
    #[snafu(display("Cannot move a folder to itself"))]
    SelfMove,
}

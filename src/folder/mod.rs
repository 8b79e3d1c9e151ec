//! Organization-scoped folder forest.
//!
//! Every folder carries its position in its tree as a dot-delimited path.
//! The [`FolderStore`] holds the flat collection; descendant lookup and
//! subtree moves are implemented on top of it purely through path prefixes.

mod folder;
mod hierarchy;
mod store;
mod tree;

pub use folder::{Folder, OrgId, PATH_DELIMITER};
pub use hierarchy::FolderNode;
pub use store::FolderStore;
pub use tree::FolderTreeError;

use tracing::debug;

use crate::folder::{Folder, OrgId};

/// Flat, order-preserving collection of every known folder.
///
/// Nothing is validated on construction: duplicate names and malformed paths
/// are accepted as-is.
#[derive(Debug, Clone, Default)]
pub struct FolderStore {
    folders: Vec<Folder>,
}

impl FolderStore {
    pub fn new(folders: Vec<Folder>) -> Self {
        debug!("Creating folder store with {} folders", folders.len());
        Self { folders }
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    /// Returns every folder owned by `org_id`, in insertion order
    pub fn get_folders_by_org_id(&self, org_id: OrgId) -> Vec<Folder> {
        self.folders
            .iter()
            .filter(|folder| folder.org_id == org_id)
            .cloned()
            .collect()
    }

    /// Distinct organizations in the order they are first seen
    pub fn org_ids(&self) -> Vec<OrgId> {
        self.folders.iter().fold(Vec::new(), |mut acc, folder| {
            if !acc.contains(&folder.org_id) {
                acc.push(folder.org_id);
            }
            acc
        })
    }
}

impl From<Vec<Folder>> for FolderStore {
    fn from(folders: Vec<Folder>) -> Self {
        Self::new(folders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    struct Orgs {
        first: OrgId,
        second: OrgId,
    }

    #[fixture]
    fn orgs() -> Orgs {
        Orgs {
            first: OrgId::new_random(),
            second: OrgId::new_random(),
        }
    }

    fn store_for(orgs: &Orgs) -> FolderStore {
        FolderStore::new(vec![
            Folder::new("alpha", "alpha", orgs.first),
            Folder::new("foxtrot", "foxtrot", orgs.second),
            Folder::new("bravo", "alpha.bravo", orgs.first),
            Folder::new("golf", "foxtrot.golf", orgs.second),
            Folder::new("echo", "echo", orgs.first),
        ])
    }

    #[rstest]
    fn get_folders_by_org_id_keeps_insertion_order(orgs: Orgs) {
        let store = store_for(&orgs);

        let names: Vec<_> = store
            .get_folders_by_org_id(orgs.first)
            .into_iter()
            .map(|folder| folder.name)
            .collect();

        assert_eq!(names, vec!["alpha", "bravo", "echo"]);
    }

    #[rstest]
    fn get_folders_by_org_id_returns_only_that_organization(orgs: Orgs) {
        let store = store_for(&orgs);

        let folders = store.get_folders_by_org_id(orgs.second);

        assert_eq!(folders.len(), 2);
        assert!(folders.iter().all(|folder| folder.org_id == orgs.second));
    }

    #[rstest]
    fn get_folders_by_org_id_for_unknown_org_is_empty(orgs: Orgs) {
        let store = store_for(&orgs);
        assert!(store.get_folders_by_org_id(OrgId::new_random()).is_empty());
    }

    #[rstest]
    fn organizations_partition_the_store(orgs: Orgs) {
        let store = store_for(&orgs);

        let total: usize = store
            .org_ids()
            .into_iter()
            .map(|org| store.get_folders_by_org_id(org).len())
            .sum();

        assert_eq!(store.org_ids(), vec![orgs.first, orgs.second]);
        assert_eq!(total, store.folders().len());
    }

    #[test]
    fn empty_store_has_no_organizations() {
        let store = FolderStore::default();
        assert!(store.org_ids().is_empty());
        assert!(store.folders().is_empty());
    }

    #[rstest]
    fn construction_accepts_duplicates_and_malformed_paths(orgs: Orgs) {
        let store: FolderStore = vec![
            Folder::new("alpha", "alpha", orgs.first),
            Folder::new("alpha", "alpha", orgs.first),
            Folder::new("bravo", "..not.a.path", orgs.first),
        ]
        .into();

        assert_eq!(store.folders().len(), 3);
    }
}

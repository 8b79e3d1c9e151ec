use crate::folder::OrgId;

/// The single folder operation requested for this run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    ListOrganizations,
    ListFolders { org_id: OrgId },
    ChildFolders { org_id: OrgId, name: String },
    MoveFolder { name: String, destination: String },
    Hierarchy { org_id: OrgId },
}

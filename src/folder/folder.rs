use derive_more::{Display, From, FromStr};
use uuid::Uuid;

/// Separator between the segments of a folder path
pub const PATH_DELIMITER: char = '.';

/// Opaque identifier of the organization owning a folder.
/// Only ever compared by equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, FromStr)]
pub struct OrgId(Uuid);

impl OrgId {
    #[cfg(test)]
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }
}

/// A single folder record.
///
/// The folder's position in its tree is encoded in `path`: the names of all of
/// its ancestors from the root down, followed by its own name, joined with
/// [`PATH_DELIMITER`]. A folder `charlie` under `alpha.bravo` has the path
/// `alpha.bravo.charlie`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub name: String,
    pub path: String,
    pub org_id: OrgId,
}

impl Folder {
    pub fn new(name: impl Into<String>, path: impl Into<String>, org_id: OrgId) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            org_id,
        }
    }

    /// The prefix every descendant's path starts with
    pub fn descendant_prefix(&self) -> String {
        format!("{}{}", self.path, PATH_DELIMITER)
    }

    pub fn is_descendant_of(&self, ancestor: &Folder) -> bool {
        self.org_id == ancestor.org_id && self.path.starts_with(&ancestor.descendant_prefix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[fixture]
    fn org() -> OrgId {
        OrgId::new_random()
    }

    #[rstest]
    fn descendant_prefix_ends_with_delimiter(org: OrgId) {
        let folder = Folder::new("bravo", "alpha.bravo", org);
        assert_eq!(folder.descendant_prefix(), "alpha.bravo.");
    }

    #[rstest]
    #[case("alpha.bravo.charlie", true)]
    #[case("alpha.bravo", false)]
    #[case("alpha.bravocharlie", false)]
    #[case("alpha.delta", false)]
    fn is_descendant_of_respects_segment_boundary(
        org: OrgId,
        #[case] path: &str,
        #[case] expected: bool,
    ) {
        let ancestor = Folder::new("bravo", "alpha.bravo", org);
        let candidate = Folder::new("charlie", path, org);
        assert_eq!(candidate.is_descendant_of(&ancestor), expected);
    }

    #[rstest]
    fn is_descendant_of_requires_same_organization(org: OrgId) {
        let ancestor = Folder::new("bravo", "alpha.bravo", org);
        let candidate = Folder::new("charlie", "alpha.bravo.charlie", OrgId::new_random());
        assert!(!candidate.is_descendant_of(&ancestor));
    }

    #[test]
    fn org_id_round_trips_through_its_display_form() {
        let text = "c1556e17-b7c0-45a3-a6ae-9546248fb17a";
        let org: OrgId = text.parse().expect("valid uuid");
        assert_eq!(org.to_string(), text);
    }

    #[test]
    fn org_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<OrgId>().is_err());
    }
}

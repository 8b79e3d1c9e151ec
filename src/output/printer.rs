use colored::Colorize;

use crate::folder::{Folder, FolderNode, OrgId};

const INDENT: &str = "  ";

/// Turns query results into terminal lines.
///
/// Coloring is decided globally through `colored`'s override, see
/// `ColorChoice::apply`.
pub struct Printer;

impl Printer {
    pub fn folder_lines(folders: &[Folder]) -> Vec<String> {
        folders
            .iter()
            .map(|folder| {
                format!(
                    "{} {} {}",
                    folder.path.bold(),
                    "@".dimmed(),
                    folder.org_id.to_string().dimmed()
                )
            })
            .collect()
    }

    pub fn org_id_lines(org_ids: &[OrgId]) -> Vec<String> {
        org_ids.iter().map(|org_id| org_id.to_string().cyan().to_string()).collect()
    }

    pub fn hierarchy_lines(root: &FolderNode) -> Vec<String> {
        root.render()
            .into_iter()
            .map(|line| {
                let indent = INDENT.repeat(line.depth);
                if line.present {
                    format!("{indent}{}", line.segment)
                } else {
                    format!("{indent}{} {}", line.segment.dimmed(), "(missing)".dimmed())
                }
            })
            .collect()
    }

    pub fn print(lines: &[String]) {
        for line in lines {
            println!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_lines_contain_path_and_org() {
        let org = OrgId::new_random();
        let folders = vec![
            Folder::new("alpha", "alpha", org),
            Folder::new("bravo", "alpha.bravo", org),
        ];

        let lines = Printer::folder_lines(&folders);

        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("alpha.bravo"));
        assert!(lines[1].contains(&org.to_string()));
    }

    #[test]
    fn test_hierarchy_lines_are_indented_by_depth() {
        let org = OrgId::new_random();
        let root = FolderNode::from_folders(&[
            Folder::new("alpha", "alpha", org),
            Folder::new("charlie", "alpha.bravo.charlie", org),
        ]);

        let lines = Printer::hierarchy_lines(&root);

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("alpha"));
        assert!(lines[1].starts_with("  "));
        assert!(lines[1].contains("(missing)"));
        assert!(lines[2].starts_with("    charlie"));
    }

    #[test]
    fn test_org_id_lines() {
        let orgs = vec![OrgId::new_random(), OrgId::new_random()];
        let lines = Printer::org_id_lines(&orgs);
        assert!(lines[0].contains(&orgs[0].to_string()));
        assert!(lines[1].contains(&orgs[1].to_string()));
    }

    #[test]
    fn test_empty_results_print_nothing() {
        assert!(Printer::folder_lines(&[]).is_empty());
        assert!(Printer::hierarchy_lines(&FolderNode::root()).is_empty());
    }
}

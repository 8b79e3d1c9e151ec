use hashlink::LinkedHashMap;
use tracing::debug;

use crate::folder::{Folder, PATH_DELIMITER};

/// Nested view of a set of folders, built from their paths.
///
/// Children are keyed by path segment and keep the order in which they were
/// first seen. Segments that appear in a path without a matching folder record
/// are created implicitly and marked as not `present`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FolderNode {
    pub present: bool,
    pub children: LinkedHashMap<String, FolderNode>,
}

/// One line of a rendered hierarchy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyLine {
    pub depth: usize,
    pub segment: String,
    pub present: bool,
}

impl FolderNode {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_folders(folders: &[Folder]) -> Self {
        let root = folders.iter().fold(Self::root(), |mut root, folder| {
            root.insert_path(&folder.path);
            root
        });
        debug!("Built hierarchy with {} roots", root.children.len());
        root
    }

    pub fn insert_path(&mut self, path: &str) {
        let mut segments = path.split(PATH_DELIMITER).peekable();
        let mut current = self;

        while let Some(segment) = segments.next() {
            current = current
                .children
                .entry(segment.to_string())
                .or_insert_with(FolderNode::default);
            if segments.peek().is_none() {
                current.present = true;
            }
        }
    }

    /// Depth-first listing of every node below this one
    pub fn render(&self) -> Vec<HierarchyLine> {
        let mut lines = Vec::new();
        self.render_into(0, &mut lines);
        lines
    }

    fn render_into(&self, depth: usize, lines: &mut Vec<HierarchyLine>) {
        for (segment, child) in &self.children {
            lines.push(HierarchyLine {
                depth,
                segment: segment.clone(),
                present: child.present,
            });
            child.render_into(depth + 1, lines);
        }
    }
}

use std::{borrow::Cow, path::Path};

use compio::fs;
use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use tracing::debug;

use crate::folder::{Folder, FolderStore, OrgId};

const FOLDERS_KEY: &str = "folders";
const NAME_KEY: &str = "name";
const PATH_KEY: &str = "paths";
const ORG_ID_KEY: &str = "org_id";

/// Folder collection as read from a YAML document.
///
/// ```yaml
/// folders:
///   - name: alpha
///     paths: alpha
///     org_id: c1556e17-b7c0-45a3-a6ae-9546248fb17a
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    folders: Vec<Folder>,
}

impl Dataset {
    pub async fn read(path: &Path) -> Result<Self, DatasetError> {
        debug!("Reading dataset file: {}", path.display());
        let bytes = fs::read(path).await.context(ReadSnafu {
            file_path: path.display().to_string(),
        })?;
        debug!("Successfully read dataset file: {} bytes", bytes.len());

        let contents = String::from_utf8(bytes).context(NotUtf8Snafu {
            file_path: path.display().to_string(),
        })?;
        contents.as_str().try_into()
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    fn parse_folder(index: usize, entry: &Yaml) -> Result<Folder, DatasetError> {
        let entry = entry
            .as_mapping()
            .context(MalformedFolderSnafu { index, field: "*" })?;

        let name = Self::string_field(entry, index, NAME_KEY)?;
        let path = Self::string_field(entry, index, PATH_KEY)?;
        let org_id = Self::string_field(entry, index, ORG_ID_KEY)?;
        let org_id = org_id
            .parse::<OrgId>()
            .context(InvalidOrgIdSnafu { index, value: org_id })?;

        Ok(Folder::new(name, path, org_id))
    }

    fn string_field<'a>(
        entry: &'a LinkedHashMap<Yaml, Yaml>,
        index: usize,
        field: &'static str,
    ) -> Result<&'a str, DatasetError> {
        entry
            .get(&Yaml::Value(Scalar::String(Cow::Borrowed(field))))
            .and_then(|value| value.as_str())
            .context(MalformedFolderSnafu { index, field })
    }
}

impl TryFrom<&str> for Dataset {
    type Error = DatasetError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let documents = Yaml::load_from_str(contents).context(ParseSnafu)?;
        let document = documents.first().context(MalformedDatasetSnafu)?;
        let top_level = document.as_mapping().context(TopLevelNotMapSnafu)?;

        let Some(entries) = top_level.get(&Yaml::Value(Scalar::String(Cow::Borrowed(FOLDERS_KEY))))
        else {
            debug!("Dataset has no '{}' section", FOLDERS_KEY);
            return Ok(Self::default());
        };

        let folders = entries
            .as_sequence()
            .context(FoldersNotSequenceSnafu)?
            .iter()
            .enumerate()
            .map(|(index, entry)| Self::parse_folder(index, entry))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Parsed {} folders from dataset", folders.len());

        Ok(Self { folders })
    }
}

impl From<Dataset> for FolderStore {
    fn from(dataset: Dataset) -> Self {
        FolderStore::new(dataset.folders)
    }
}

#[derive(Debug, Snafu)]
pub enum DatasetError {
    #[snafu(display("Failed to read the dataset file: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("Dataset file {} is not valid UTF-8", file_path))]
    NotUtf8 {
        file_path: String,
        source: std::string::FromUtf8Error,
    },
    #[snafu(display("Failed to parse the dataset"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Improperly formatted dataset"))]
    MalformedDataset,
    #[snafu(display("Top level of the dataset should be a map"))]
    TopLevelNotMap,
    #[snafu(display("Folders section should be a list"))]
    FoldersNotSequence,
    #[snafu(display("Folder #{} has a missing or invalid '{}' field", index, field))]
    MalformedFolder { index: usize, field: &'static str },
    #[snafu(display("Folder #{} has an invalid organization id '{}'", index, value))]
    InvalidOrgId {
        index: usize,
        value: String,
        source: uuid::Error,
    },
}

use shared::{ClassIndexEntry, LabelLocale};

use crate::error::StartupError;

/// The networks served here all predict over the 1000 ImageNet classes.
pub const IMAGENET_CLASSES: usize = 1000;

/// Class-index-to-display-name table, loaded once at startup and
/// read-only for the lifetime of the process.
#[derive(Debug)]
pub struct ClassLabelTable {
    names: Vec<String>,
}

impl ClassLabelTable {
    /// Loads the class-index JSON and selects one vocabulary. A missing,
    /// malformed, or wrongly sized file is fatal: the process must
    /// refuse to start rather than fail on every request.
    pub fn load(path: &str, locale: LabelLocale) -> Result<Self, StartupError> {
        let labels_err = |reason: String| StartupError::Labels {
            path: path.to_string(),
            reason,
        };

        let raw = std::fs::read_to_string(path).map_err(|e| labels_err(e.to_string()))?;
        let entries: Vec<ClassIndexEntry> =
            serde_json::from_str(&raw).map_err(|e| labels_err(e.to_string()))?;
        if entries.len() != IMAGENET_CLASSES {
            return Err(labels_err(format!(
                "expected {} classes, found {}",
                IMAGENET_CLASSES,
                entries.len()
            )));
        }

        let names = entries
            .into_iter()
            .map(|entry| match locale {
                LabelLocale::En => entry.en,
                LabelLocale::Ja => entry.ja,
            })
            .collect();
        Ok(Self { names })
    }

    /// Table with explicit names, for tests and fixtures.
    pub fn from_names(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn name(&self, class_index: usize) -> &str {
        &self.names[class_index]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

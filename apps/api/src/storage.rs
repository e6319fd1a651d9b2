//! Flat-file opportunity storage: one pretty-printed JSON record per posted
//! opportunity, filename derived from the title.

use std::fs;
use std::path::PathBuf;

use tracing::warn;

use crate::errors::AppError;
use crate::models::opportunity::Opportunity;

/// Directory-backed opportunity store. The directory listing is the
/// enumeration boundary: each `*.json` file is one serialized `Opportunity`.
#[derive(Debug, Clone)]
pub struct OpportunityStore {
    dir: PathBuf,
}

impl OpportunityStore {
    /// Opens (and creates if absent) the store directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, AppError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Filename for an opportunity title: lowercased, spaces and slashes
    /// replaced with underscores.
    pub fn filename_for_title(title: &str) -> String {
        let safe = title.to_lowercase().replace([' ', '/'], "_");
        format!("{safe}.json")
    }

    /// Writes an opportunity record, returning its filename.
    ///
    /// No locking: concurrent writers for the same title race
    /// last-writer-wins. Acceptable at the expected write frequency.
    pub fn save(&self, opportunity: &Opportunity) -> Result<String, AppError> {
        let filename = Self::filename_for_title(&opportunity.title);
        let json = serde_json::to_string_pretty(opportunity)?;
        fs::write(self.dir.join(&filename), json)?;
        Ok(filename)
    }

    /// Loads a single opportunity by filename.
    pub fn load(&self, filename: &str) -> Result<Opportunity, AppError> {
        let path = self.dir.join(filename);
        if !path.is_file() {
            return Err(AppError::NotFound(format!("Opportunity {filename} not found")));
        }
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Enumerates every stored opportunity as `(filename, record)` pairs,
    /// sorted by filename so enumeration order is deterministic (it is also
    /// the tie-break order of match ranking). Unreadable or malformed files
    /// are logged and skipped, never fatal.
    pub fn list(&self) -> Result<Vec<(String, Opportunity)>, AppError> {
        let mut filenames: Vec<String> = fs::read_dir(&self.dir)?
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| name.ends_with(".json"))
            .collect();
        filenames.sort();

        let mut opportunities = Vec::with_capacity(filenames.len());
        for filename in filenames {
            let raw = match fs::read_to_string(self.dir.join(&filename)) {
                Ok(raw) => raw,
                Err(e) => {
                    warn!("Skipping unreadable opportunity file {filename}: {e}");
                    continue;
                }
            };
            match serde_json::from_str::<Opportunity>(&raw) {
                Ok(opportunity) => opportunities.push((filename, opportunity)),
                Err(e) => warn!("Skipping malformed opportunity file {filename}: {e}"),
            }
        }
        Ok(opportunities)
    }
}

use std::collections::BTreeMap;
use std::io::{BufWriter, Write};
use std::path::Path;
use color_eyre::eyre::WrapErr;
use tempfile::NamedTempFile;
use crate::territory::model::{Utility, ZipCode};

/// The final zip -> utility table that will be written out
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Territory {
    zips: BTreeMap<ZipCode, Utility>,
    counts: BTreeMap<Utility, usize>,
}

impl Territory {
    pub fn insert(&mut self, zip: ZipCode, utility: Utility) {
        if let Some(prev) = self.zips.insert(zip, utility) {
            if let Some(count) = self.counts.get_mut(&prev) {
                *count -= 1;
            }
        }
        *self.counts.entry(utility).or_default() += 1;
    }

    pub fn get(&self, zip: &ZipCode) -> Option<Utility> {
        self.zips.get(zip).copied()
    }

    pub fn len(&self) -> usize {
        self.zips.len()
    }

    /// number of zips per utility, for reporting only
    pub fn count(&self, utility: Utility) -> usize {
        self.counts.get(&utility).copied().unwrap_or(0)
    }
}

/// write the table as a key-sorted JSON object
///
/// The file is written next to `save_path` first and renamed into place, so
/// a failed run never leaves a truncated table behind.
pub fn save_territory(territory: &Territory, save_path: impl AsRef<Path>) -> color_eyre::Result<()> {
    let save_path = save_path.as_ref();
    let parent = match save_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !parent.exists() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("cannot create directory {}", parent.display()))?;
    }

    let tmp = NamedTempFile::new_in(parent)?;
    {
        let mut wtr = BufWriter::new(tmp.as_file());
        serde_json::to_writer_pretty(&mut wtr, &territory.zips)?;
        wtr.write_all(b"\n")?;
        wtr.flush()?;
    }
    tmp.persist(save_path)
        .wrap_err_with(|| format!("cannot write {}", save_path.display()))?;
    Ok(())
}

//! Catalog store: the item name to unit price mapping
//!
//! The whole mapping is persisted as one pretty-printed JSON object and
//! rewritten on every mutation. A file that is missing or fails to
//! parse is replaced by an empty catalog rather than rejected.

pub mod suggest;

pub use suggest::{Suggestions, MAX_SUGGESTIONS};

use crate::error::{TillError, TillResult};
use crate::money;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, warn};

/// In-memory catalog backed by a single JSON file
#[derive(Debug)]
pub struct CatalogStore {
    items: BTreeMap<String, u64>,
    path: PathBuf,
}

impl CatalogStore {
    /// Load the catalog from `path`, falling back to an empty catalog
    /// when the file is missing or unreadable. The fallback is written
    /// back immediately; if even that write fails, the store still
    /// starts empty and the failure is only reported.
    pub fn load(path: PathBuf) -> Self {
        let items = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<BTreeMap<String, u64>>(&content) {
                Ok(items) => {
                    debug!("loaded {} catalog items from {}", items.len(), path.display());
                    Some(items)
                }
                Err(e) => {
                    warn!("catalog file {} is not a valid catalog ({}), starting empty", path.display(), e);
                    None
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no catalog file at {}, starting empty", path.display());
                None
            }
            Err(e) => {
                warn!("could not read catalog file {} ({}), starting empty", path.display(), e);
                None
            }
        };

        match items {
            Some(items) => Self { items, path },
            None => {
                let store = Self {
                    items: BTreeMap::new(),
                    path,
                };
                if let Err(e) = store.save() {
                    warn!("could not write empty catalog: {}", e);
                }
                store
            }
        }
    }

    /// Rewrite the whole catalog file. The in-memory mapping is kept
    /// as-is on failure; the next successful save reconciles the file.
    pub fn save(&self) -> TillResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| TillError::DirCreate {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        let content = serde_json::to_string_pretty(&self.items)?;
        fs::write(&self.path, content)
            .map_err(|e| TillError::io(format!("writing catalog file {}", self.path.display()), e))
    }

    /// Add an item or update its price, then save through immediately.
    ///
    /// The name is trimmed and title-cased; the price text may carry
    /// grouping dots or commas. Returns the normalized name and the
    /// parsed price.
    pub fn upsert(&mut self, name: &str, price_text: &str) -> TillResult<(String, u64)> {
        let name = title_case(name.trim());
        if name.is_empty() {
            return Err(TillError::EmptyItemName);
        }
        let price = money::parse_amount(price_text)
            .filter(|p| *p >= 0)
            .ok_or_else(|| TillError::InvalidPrice(price_text.trim().to_string()))?
            as u64;

        self.items.insert(name.clone(), price);
        debug!("catalog upsert: {} = {}", name, price);
        self.save()?;
        Ok((name, price))
    }

    pub fn lookup(&self, name: &str) -> Option<u64> {
        self.items.get(name).copied()
    }

    /// Price for cart lines: unknown names pass through at 0.
    pub fn price_or_zero(&self, name: &str) -> u64 {
        self.lookup(name).unwrap_or(0)
    }

    /// All entries, name-ascending.
    pub fn entries(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.items.iter().map(|(name, price)| (name.as_str(), *price))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Title-case a name the way it is normalized on entry: first letter of
/// each word upper, the rest lower.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> CatalogStore {
        CatalogStore::load(dir.path().join("catalog.json"))
    }

    #[test]
    fn load_missing_writes_empty_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.is_empty());
        let content = fs::read_to_string(dir.path().join("catalog.json")).unwrap();
        assert_eq!(content, "{}");
    }

    #[test]
    fn load_corrupt_starts_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, "not json at all {").unwrap();

        let store = CatalogStore::load(path.clone());
        assert!(store.is_empty());
        // Self-healed on disk too
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.upsert("Kopi", "15000").unwrap();
        store.upsert("Teh Manis", "5.000").unwrap();
        store.upsert("Sabun", "12,500").unwrap();

        let reloaded = store_in(&dir);
        let entries: Vec<_> = reloaded.entries().collect();
        assert_eq!(
            entries,
            vec![("Kopi", 15000), ("Sabun", 12500), ("Teh Manis", 5000)]
        );
    }

    #[test]
    fn upsert_normalizes_name() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        let (name, price) = store.upsert("  kopi susu  ", "8000").unwrap();
        assert_eq!(name, "Kopi Susu");
        assert_eq!(price, 8000);
        assert_eq!(store.lookup("Kopi Susu"), Some(8000));
    }

    #[test]
    fn upsert_rejects_empty_name() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        assert!(matches!(
            store.upsert("   ", "1000"),
            Err(TillError::EmptyItemName)
        ));
    }

    #[test]
    fn upsert_rejects_bad_price() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        assert!(matches!(
            store.upsert("Kopi", "abc"),
            Err(TillError::InvalidPrice(_))
        ));
        assert!(matches!(
            store.upsert("Kopi", "-500"),
            Err(TillError::InvalidPrice(_))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn upsert_overwrites_existing_price() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.upsert("Kopi", "15000").unwrap();
        store.upsert("kopi", "17500").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.lookup("Kopi"), Some(17500));
    }

    #[test]
    fn unknown_name_passes_through_at_zero() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.lookup("Mystery"), None);
        assert_eq!(store.price_or_zero("Mystery"), 0);
    }

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("kopi susu"), "Kopi Susu");
        assert_eq!(title_case("TEH MANIS"), "Teh Manis");
        assert_eq!(title_case("es-krim"), "Es-Krim");
    }
}

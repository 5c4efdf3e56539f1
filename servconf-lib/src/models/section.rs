use std::fmt::Display;

use crate::models::entry::IniEntry;
use crate::models::key_fold::KeyFold;

/// An ordered key-value map under one `[name]` header. Entries keep their
/// insertion order, and overwriting a key keeps its original position.
#[derive(Debug)]
pub struct IniSection {
    name: String,
    key_fold: KeyFold,
    entries: Vec<IniEntry>,
}

impl IniSection {
    pub fn new(name: impl Into<String>, key_fold: KeyFold) -> Self {
        Self {
            name: name.into(),
            key_fold,
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[IniEntry] {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        let key_fold = self.key_fold;
        self.entries
            .iter()
            .find(|entry| key_fold.matches(&entry.key, key))
            .map(|entry| entry.value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Overwrites the value in place if the key is present, appends a new
    /// entry otherwise.
    pub fn set(&mut self, key: &str, value: &str) {
        let key_fold = self.key_fold;
        match self
            .entries
            .iter_mut()
            .find(|entry| key_fold.matches(&entry.key, key))
        {
            Some(entry) => entry.value = value.to_owned(),
            None => self.entries.push(IniEntry {
                key: key_fold.apply(key.to_owned()),
                value: value.to_owned(),
            }),
        }
    }

    pub(crate) fn push_entry(&mut self, mut entry: IniEntry) {
        entry.key = self.key_fold.apply(entry.key);
        self.entries.push(entry);
    }
}

impl Display for IniSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for entry in self.entries.iter() {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

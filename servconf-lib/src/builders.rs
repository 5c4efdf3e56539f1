use crate::models::{IniDocument, IniEntry, IniSection, KeyFold};

#[derive(Debug)]
pub struct IniSectionBuilder {
    name: String,
    key_fold: KeyFold,
    entries: Vec<IniEntry>,
}

impl IniSectionBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key_fold: KeyFold::default(),
            entries: Vec::new(),
        }
    }

    pub fn key_fold(mut self, key_fold: KeyFold) -> Self {
        self.key_fold = key_fold;
        self
    }

    pub fn add_entry(mut self, entry: IniEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn add_key_value(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_entry(IniEntry {
            key: key.into(),
            value: value.into(),
        })
    }

    pub fn build(self) -> IniSection {
        let mut section = IniSection::new(self.name, self.key_fold);
        for entry in self.entries {
            section.push_entry(entry);
        }
        section
    }
}

#[derive(Debug, Default)]
pub struct IniDocumentBuilder {
    document: IniDocument,
}

impl IniDocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_section(mut self, section: IniSection) -> Self {
        self.document.push_section(section);
        self
    }

    pub fn build(self) -> IniDocument {
        self.document
    }
}

use std::fmt::Display;

use crate::models::section::IniSection;

/// A whole config file: its sections in file order. Section names are
/// case-sensitive and unique.
#[derive(Debug, Default)]
pub struct IniDocument {
    sections: Vec<IniSection>,
}

impl IniDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sections(&self) -> &[IniSection] {
        &self.sections
    }

    pub fn section(&self, name: &str) -> Option<&IniSection> {
        self.sections.iter().find(|section| section.name() == name)
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut IniSection> {
        self.sections
            .iter_mut()
            .find(|section| section.name() == name)
    }

    pub(crate) fn push_section(&mut self, section: IniSection) {
        self.sections.push(section);
    }
}

impl Display for IniDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for section in self.sections.iter() {
            writeln!(f, "[{}]", section.name())?;
            write!(f, "{section}")?;
            writeln!(f)?;
        }
        Ok(())
    }
}

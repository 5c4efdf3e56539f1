use std::fmt::Display;

use regex::Captures;

use crate::{ENTRY_KEY_GROUP_NAME, ENTRY_VALUE_GROUP_NAME, ParseError};

#[derive(Debug)]
pub struct IniEntry {
    pub key: String,
    pub value: String,
}

impl Display for IniEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

impl TryFrom<Captures<'_>> for IniEntry {
    type Error = ParseError;

    fn try_from(captures: Captures<'_>) -> Result<Self, Self::Error> {
        let key = captures
            .name(ENTRY_KEY_GROUP_NAME)
            .ok_or(ParseError::RegexCaptureGroupNotFound(ENTRY_KEY_GROUP_NAME))?
            .as_str()
            .to_owned();

        let value = captures
            .name(ENTRY_VALUE_GROUP_NAME)
            .ok_or(ParseError::RegexCaptureGroupNotFound(ENTRY_VALUE_GROUP_NAME))?
            .as_str()
            .to_owned();

        Ok(Self { key, value })
    }
}

mod document;
mod entry;
mod key_fold;
mod section;

pub use document::IniDocument;
pub use entry::IniEntry;
pub use key_fold::KeyFold;
pub use section::IniSection;

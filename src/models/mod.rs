mod entry;
mod tree;

pub use entry::EntryKind;
pub use tree::ResultTree;

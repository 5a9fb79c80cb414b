/// Classification of one directory entry, taken without following symlinks.
///
/// Only `Directory` is recursed into. `Symlink` and `Other` (sockets,
/// fifos, devices) are handed to the file processor like regular files.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    Directory,
    File,
    Symlink,
    Other,
}

/// What a child name in a listing refers to.
///
/// The store exposes no stat call, so a dot in the name is the only signal
/// available. Directory names containing a literal dot are misclassified as
/// files; engine content is authored to avoid them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    pub fn of(name: &str) -> EntryKind {
        if name.contains('.') {
            EntryKind::File
        } else {
            EntryKind::Directory
        }
    }
}

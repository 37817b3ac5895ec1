/// What happened when a value was handed to [`Tree::insert`][crate::Tree::insert].
///
/// Neither variant is an error. Inserting a value that is already present leaves the
/// tree exactly as it was.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Insert {
    /// A new leaf was created for the value.
    Inserted,
    /// A node with an equal value already existed so nothing changed.
    AlreadyExists,
}

impl Insert {
    /// Whether a new node was added.
    pub fn is_inserted(self) -> bool {
        matches!(self, Self::Inserted)
    }
}

/// Minimal interface shared by every result container
///
/// Containers are created empty by a reader and filled as the file is parsed,
/// so "is there anything in here" is the useful truth value rather than
/// identity.
pub trait NamedObject {
    /// Identifier given at construction
    fn name(&self) -> &str;

    /// True once at least one quantity has been stored
    fn has_data(&self) -> bool;
}

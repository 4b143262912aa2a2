/// A single entry of a reference string: which page was touched and whether
/// the access wrote to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    pub page: u32,
    pub dirty: bool,
}

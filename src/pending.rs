/// Represents a generated file staged in memory before writing to disk.
///
/// Preparation renders everything up front so a failure in any source leaves
/// the target directory untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFile {
    /// The target path, relative to the project directory.
    pub destination: std::path::PathBuf,
    /// The fully rendered contents to be written.
    pub content: String,
}

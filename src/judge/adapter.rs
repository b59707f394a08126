use std::path::Path;

/// Language adapter contract: how a solution file is named and launched.
pub trait LanguageAdapter: Send + Sync {
    fn language(&self) -> &'static str;
    /// File name expected inside each level directory
    fn solution_file(&self) -> &'static str;
    fn run_command(&self, source: &Path) -> Vec<String>;
    /// Extra environment for the child, on top of the inherited one
    fn environment(&self) -> Vec<(String, String)> {
        Vec::new()
    }
}

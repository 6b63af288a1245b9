/// Which panel owns the main area of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Report and marked text, command line active
    Command,
    /// Distinct unknown and NGL words
    WordList,
    Help,
    Quit,
}

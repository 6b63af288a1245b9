/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    AnalyzeText(String),
    LoadFile(String),
    LoadClipboard,
    LoadKnown(String),
    LoadNgl(String),
    DisableNgl,
    ListWords,
    Export(String),
    Quit,
    Help,
    Warning(String),
    InvalidCommand(String),
    None,
}

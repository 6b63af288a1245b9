use crate::analysis::AnalysisResult;
use crate::app::mode::AppMode;

/// One-line feedback shown under the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Info(String),
    Warning(String),
}

impl StatusMessage {
    pub fn text(&self) -> &str {
        match self {
            StatusMessage::Info(text) | StatusMessage::Warning(text) => text,
        }
    }
}

/// Render state for UI components, borrowed from the app for one frame
#[derive(Debug, Clone, Copy)]
pub struct RenderState<'a> {
    pub mode: AppMode,
    pub input: &'a str,
    pub status: Option<&'a StatusMessage>,
    pub source: Option<&'a str>,
    pub analysis: Option<&'a AnalysisResult>,
    pub known_list_size: usize,
    /// `None` when no NGL list is active
    pub ngl_list_size: Option<usize>,
    pub scroll: u16,
}

impl RenderState<'_> {
    pub fn has_ngl(&self) -> bool {
        self.ngl_list_size.is_some()
    }
}

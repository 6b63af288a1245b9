use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::{RenderState, StatusMessage};
use crate::analysis::{analyze, markup, AnalysisResult};
use crate::engine::{Config, VocabmeterError};
use crate::input::vocabulary::{load_vocabulary, Vocabularies};
use crate::input::{self, LoadError, LoadedDocument};
use crate::ui::command::{command_to_app_event, parse_command};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub struct App {
    pub mode: AppMode,
    config: Config,
    vocabularies: Vocabularies,
    document: Option<LoadedDocument>,
    analysis: Option<AnalysisResult>,
    input: String,
    status: Option<StatusMessage>,
    scroll: u16,
}

impl App {
    pub fn new(config: Config, vocabularies: Vocabularies) -> Self {
        let status = if vocabularies.known.is_empty() {
            StatusMessage::Warning(format!(
                "Could not load known list {} (check the path)",
                config.vocabulary.known_path.display()
            ))
        } else {
            StatusMessage::Info("Lists loaded. Ready to analyze!".to_string())
        };

        Self {
            mode: AppMode::Command,
            config,
            vocabularies,
            document: None,
            analysis: None,
            input: String::new(),
            status: Some(status),
            scroll: 0,
        }
    }

    /// Loads both lists from the configured paths.
    pub fn from_config(config: Config) -> Self {
        let vocabularies = Vocabularies::load(&config.vocabulary);
        Self::new(config, vocabularies)
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn analysis(&self) -> Option<&AnalysisResult> {
        self.analysis.as_ref()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn vocabularies(&self) -> &Vocabularies {
        &self.vocabularies
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::AnalyzeText(text) => {
                self.open_document(Ok(LoadedDocument::from_text(&text, "input")))
            }
            AppEvent::LoadFile(path) => self.open_document(input::load_document(&path)),
            AppEvent::LoadClipboard => self.open_document(input::clipboard::load()),
            AppEvent::LoadKnown(path) => self.load_known(PathBuf::from(path)),
            AppEvent::LoadNgl(path) => self.load_ngl(PathBuf::from(path)),
            AppEvent::DisableNgl => {
                self.vocabularies.ngl = None;
                self.config.vocabulary.ngl_path = None;
                self.reanalyze();
                self.info("NGL list disabled");
            }
            AppEvent::ListWords => self.toggle_word_list(),
            AppEvent::Export(path) => match self.export(Path::new(&path)) {
                Ok(()) => self.info(format!("Report written to {path}")),
                Err(err) => self.warning(err.to_string()),
            },
            AppEvent::Quit => self.mode = AppMode::Quit,
            AppEvent::Help => self.mode = AppMode::Help,
            AppEvent::Warning(message) => self.warning(message),
            AppEvent::InvalidCommand(input) => {
                self.warning(format!("Unknown command: {input} (:h for help)"))
            }
            AppEvent::None => {}
        }
    }

    /// Writes the HTML report of the last analysis to `path`.
    pub fn export(&self, path: &Path) -> Result<(), VocabmeterError> {
        let analysis = self.analysis.as_ref().ok_or(VocabmeterError::NoAnalysis)?;
        std::fs::write(path, markup::render_report_html(analysis)).map_err(|source| {
            VocabmeterError::Export {
                path: path.to_path_buf(),
                source,
            }
        })?;
        info!(path = %path.display(), "report exported");
        Ok(())
    }

    pub fn push_input(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_input(&mut self) {
        self.input.pop();
    }

    /// Parses the command line, clears it and handles the resulting event.
    pub fn submit_input(&mut self) {
        let line = std::mem::take(&mut self.input);
        let event = command_to_app_event(parse_command(&line));
        self.handle_event(event);
    }

    /// Leaves an overlay panel, or clears the command line when none is open.
    pub fn cancel(&mut self) {
        match self.mode {
            AppMode::WordList | AppMode::Help => self.mode = AppMode::Command,
            _ => self.input.clear(),
        }
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn get_render_state(&self) -> RenderState<'_> {
        RenderState {
            mode: self.mode,
            input: &self.input,
            status: self.status.as_ref(),
            source: self.document.as_ref().map(|d| d.source.as_str()),
            analysis: self.analysis.as_ref(),
            known_list_size: self.vocabularies.known.len(),
            ngl_list_size: self.vocabularies.ngl().map(|ngl| ngl.len()),
            scroll: self.scroll,
        }
    }

    fn open_document(&mut self, loaded: Result<LoadedDocument, LoadError>) {
        match loaded {
            Ok(document) => {
                self.document = Some(document);
                self.scroll = 0;
                self.mode = AppMode::Command;
                self.reanalyze();
                let message = self
                    .document
                    .as_ref()
                    .zip(self.analysis.as_ref())
                    .map(|(doc, result)| {
                        format!("Analyzed {}: {} words", doc.source, result.total_words)
                    });
                if let Some(message) = message {
                    self.info(message);
                }
            }
            Err(err) => {
                warn!(error = %err, "document load failed");
                self.warning(err.to_string());
            }
        }
    }

    fn load_known(&mut self, path: PathBuf) {
        let known = load_vocabulary(&path, self.config.vocabulary.delimiter);
        if known.is_empty() {
            self.warning(format!("Could not load known list {}", path.display()));
        } else {
            self.info(format!("Loaded {} known words", known.len()));
        }
        self.vocabularies.known = known;
        self.config.vocabulary.known_path = path;
        self.reanalyze();
    }

    fn load_ngl(&mut self, path: PathBuf) {
        let ngl = load_vocabulary(&path, self.config.vocabulary.delimiter);
        if ngl.is_empty() {
            self.warning(format!("Could not load NGL list {}", path.display()));
        } else {
            self.info(format!("Loaded {} NGL words", ngl.len()));
        }
        self.vocabularies.ngl = Some(ngl);
        self.config.vocabulary.ngl_path = Some(path);
        self.reanalyze();
    }

    fn toggle_word_list(&mut self) {
        if self.analysis.is_none() {
            self.warning(VocabmeterError::NoAnalysis.to_string());
            return;
        }
        self.mode = match self.mode {
            AppMode::WordList => AppMode::Command,
            _ => AppMode::WordList,
        };
    }

    fn reanalyze(&mut self) {
        if let Some(doc) = &self.document {
            self.analysis = Some(analyze(
                &doc.tokens,
                &self.vocabularies.known,
                self.vocabularies.ngl(),
            ));
        }
    }

    fn info(&mut self, message: impl Into<String>) {
        self.status = Some(StatusMessage::Info(message.into()));
    }

    fn warning(&mut self, message: impl Into<String>) {
        self.status = Some(StatusMessage::Warning(message.into()));
    }
}

use crate::analysis::report::{known_rows, ngl_rows, ReportRow};
use crate::analysis::{AnalysisResult, AnnotatedToken, WordClassification};
use crate::app::StatusMessage;
use crate::ui::theme::colors;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const HELP_LINES: &[(&str, &str)] = &[
    ("<text>", "analyze the typed text"),
    ("@file", "analyze a .txt, .pdf or .epub file"),
    ("@@", "analyze the clipboard"),
    (":l, :list", "show unknown and NGL words"),
    (":known <path>", "reload the known word list"),
    (":ngl <path>", "load an NGL list"),
    (":nongl", "analyze without an NGL list"),
    (":export <path>", "write the HTML report"),
    (":h, :help", "this help"),
    (":q, :quit", "quit"),
    ("Esc", "close panel / clear input"),
    ("Up/Down, PgUp/PgDn", "scroll"),
];

fn base_style() -> Style {
    Style::default().fg(colors::text()).bg(colors::background())
}

fn panel(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .border_style(Style::default().fg(colors::dimmed()))
}

fn row_lines(rows: Vec<ReportRow>) -> impl Iterator<Item = Line<'static>> {
    rows.into_iter().map(|row| {
        Line::from(vec![
            Span::styled(format!("{}: ", row.label), Style::default().fg(colors::dimmed())),
            Span::styled(row.value, Style::default().fg(colors::text())),
        ])
    })
}

/// Coverage numbers of the last analysis, known section then NGL section.
pub fn render_report(analysis: Option<&AnalysisResult>, source: Option<&str>) -> Paragraph<'static> {
    let mut lines = Vec::new();

    match analysis {
        Some(result) => {
            if let Some(source) = source {
                lines.push(Line::styled(
                    source.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ));
            }
            lines.extend(row_lines(known_rows(result)));
            let ngl = ngl_rows(result);
            if !ngl.is_empty() {
                lines.push(Line::default());
                lines.extend(row_lines(ngl));
            }
        }
        None => lines.push(Line::styled(
            "Type text or @file and press Enter",
            Style::default().fg(colors::dimmed()),
        )),
    }

    Paragraph::new(lines)
        .block(panel("Coverage"))
        .style(base_style())
}

fn class_span(text: String, class: WordClassification) -> Span<'static> {
    Span::styled(text, Style::default().fg(colors::classification(class)))
}

pub fn render_legend(has_ngl: bool) -> Line<'static> {
    let mut classes = vec![WordClassification::Known];
    if has_ngl {
        classes.push(WordClassification::Ngl);
    }
    classes.push(WordClassification::Unknown);

    let mut spans = vec![Span::styled("Legend: ", Style::default().fg(colors::dimmed()))];
    for class in classes {
        spans.push(class_span(class.label().to_string(), class));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

/// Splits the annotated text into display lines at the original line breaks.
pub fn annotated_lines(annotations: &[AnnotatedToken]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();

    for token in annotations {
        match token.tag {
            Some(class) => current.push(class_span(token.text.clone(), class)),
            None => {
                let mut parts = token.text.split('\n').peekable();
                while let Some(part) = parts.next() {
                    let part = part.trim_end_matches('\r');
                    if !part.is_empty() {
                        current.push(Span::raw(part.to_string()));
                    }
                    if parts.peek().is_some() {
                        lines.push(Line::from(std::mem::take(&mut current)));
                    }
                }
            }
        }
    }

    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}

pub fn render_marked_text(annotations: &[AnnotatedToken], scroll: u16) -> Paragraph<'static> {
    Paragraph::new(Text::from(annotated_lines(annotations)))
        .block(panel("Marked text"))
        .style(base_style())
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
}

/// Distinct unknown words, then NGL words, in order of first appearance.
pub fn render_word_lists(analysis: &AnalysisResult, scroll: u16) -> Paragraph<'static> {
    let mut lines = Vec::new();

    if analysis.all_words_known() {
        lines.push(Line::styled(
            "No unknown words!",
            Style::default().add_modifier(Modifier::ITALIC),
        ));
    } else {
        lines.push(Line::styled(
            format!("Unknown words ({})", analysis.unknown_words.len()),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        lines.push(word_line(&analysis.unknown_words, WordClassification::Unknown));
        if analysis.has_ngl {
            lines.push(Line::default());
            lines.push(Line::styled(
                format!("NGL words ({})", analysis.ngl_words.len()),
                Style::default().add_modifier(Modifier::BOLD),
            ));
            lines.push(word_line(&analysis.ngl_words, WordClassification::Ngl));
        }
    }

    Paragraph::new(lines)
        .block(panel("Word lists"))
        .style(base_style())
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
}

fn word_line(words: &[String], class: WordClassification) -> Line<'static> {
    let mut spans = Vec::with_capacity(words.len() * 2);
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(class_span(word.clone(), class));
    }
    Line::from(spans)
}

pub fn render_help() -> Paragraph<'static> {
    let lines: Vec<Line<'static>> = HELP_LINES
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(
                    format!("{keys:<20}"),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(*action),
            ])
        })
        .collect();

    Paragraph::new(lines).block(panel("Help")).style(base_style())
}

pub const PROMPT: &str = "> ";

pub fn render_command_line(input: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(PROMPT, Style::default().fg(colors::dimmed())),
        Span::styled(input.to_string(), Style::default().fg(colors::text())),
    ])
}

pub fn render_status(status: Option<&StatusMessage>, lists: &str) -> Line<'static> {
    let message = match status {
        Some(StatusMessage::Warning(text)) => {
            Span::styled(text.clone(), Style::default().fg(colors::warning()))
        }
        Some(StatusMessage::Info(text)) => {
            Span::styled(text.clone(), Style::default().fg(colors::text()))
        }
        None => Span::raw(""),
    };
    Line::from(vec![
        message,
        Span::styled(format!("  [{lists}]"), Style::default().fg(colors::dimmed())),
    ])
}

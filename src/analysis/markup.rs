//! HTML rendering of analysis output.
//!
//! All text taken from the analyzed input or the word lists goes through
//! [`escape_markup`] before it is embedded.

use crate::analysis::annotate::AnnotatedToken;
use crate::analysis::classify::WordClassification;
use crate::analysis::report::{known_rows, ngl_rows, ReportRow};
use crate::analysis::AnalysisResult;
use std::borrow::Cow;
use std::fmt::Write;

/// Escapes `&`, `<` and `>`, in that order, so `&` is never escaped twice.
pub fn escape_markup(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>']) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    )
}

fn tagged_span(class: WordClassification, text: &str) -> String {
    format!(
        "<span class=\"{}\">{}</span>",
        class.css_class(),
        escape_markup(text)
    )
}

/// The analyzed text with every word wrapped in a classification span.
pub fn render_annotated_html(annotations: &[AnnotatedToken]) -> String {
    let mut html = String::new();
    for token in annotations {
        match token.tag {
            Some(class) => html.push_str(&tagged_span(class, &token.text)),
            None => html.push_str(&token.escaped()),
        }
    }
    html
}

/// Unknown words, then NGL words, or a short notice when both are empty.
pub fn render_word_lists_html(result: &AnalysisResult) -> String {
    if result.all_words_known() {
        return "<i>No unknown words!</i>".to_string();
    }

    let mut html = String::from("<strong>Unknown words:</strong><br>");
    html.push_str(&tagged_list(WordClassification::Unknown, &result.unknown_words));
    if result.has_ngl {
        html.push_str("<br><br><strong>NGL words:</strong><br>");
        html.push_str(&tagged_list(WordClassification::Ngl, &result.ngl_words));
    }
    html
}

fn tagged_list(class: WordClassification, words: &[String]) -> String {
    words
        .iter()
        .map(|w| tagged_span(class, w))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_legend_html(has_ngl: bool) -> String {
    let mut classes = vec![WordClassification::Known];
    if has_ngl {
        classes.push(WordClassification::Ngl);
    }
    classes.push(WordClassification::Unknown);

    let entries: Vec<String> = classes
        .into_iter()
        .map(|class| tagged_span(class, class.label()))
        .collect();
    format!("<b>Legend:</b> {}", entries.join(" "))
}

fn render_rows(html: &mut String, rows: &[ReportRow]) {
    for row in rows {
        let _ = writeln!(
            html,
            "{}: {} <br>",
            escape_markup(row.label),
            escape_markup(&row.value)
        );
    }
}

/// Complete HTML fragment: report, legend, marked text and word lists.
pub fn render_report_html(result: &AnalysisResult) -> String {
    let mut html = String::from("<div class=\"report\">\n<b>Based on known words:</b><br>\n");
    render_rows(&mut html, &known_rows(result));

    let ngl = ngl_rows(result);
    if !ngl.is_empty() {
        html.push_str("<br>\n<b>Based on the NGL (not known):</b><br>\n");
        render_rows(&mut html, &ngl);
    }
    html.push_str("</div>\n");

    let _ = writeln!(
        html,
        "<div class=\"legend\">{}</div>",
        render_legend_html(result.has_ngl)
    );
    let _ = writeln!(
        html,
        "<div class=\"marked-text\">{}</div>",
        render_annotated_html(&result.annotations)
    );
    let _ = writeln!(
        html,
        "<div class=\"word-lists\">{}</div>",
        render_word_lists_html(result)
    );
    html
}

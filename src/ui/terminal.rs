use crate::app::{mode::AppMode, App, RenderState};
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::theme::colors;
use crate::ui::view::{
    render_command_line, render_help, render_legend, render_marked_text, render_report,
    render_status, render_word_lists, PROMPT,
};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

const POLL_INTERVAL: Duration = Duration::from_millis(250);
const PAGE: u16 = 10;

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            _guard: guard,
        })
    }

    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        loop {
            if app.mode() == AppMode::Quit {
                return Ok(());
            }

            self.render_frame(app)?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        handle_key(app, key.code, key.modifiers);
                    }
                }
            }
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let state = app.get_render_state();
        self.terminal.draw(|frame| draw(frame, &state))?;
        Ok(())
    }
}

fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.handle_event(crate::app::AppEvent::Quit)
        }
        KeyCode::Char(c) => app.push_input(c),
        KeyCode::Backspace => app.pop_input(),
        KeyCode::Enter => app.submit_input(),
        KeyCode::Esc => app.cancel(),
        KeyCode::Up => app.scroll_up(1),
        KeyCode::Down => app.scroll_down(1),
        KeyCode::PageUp => app.scroll_up(PAGE),
        KeyCode::PageDown => app.scroll_down(PAGE),
        _ => {}
    }
}

fn lists_summary(state: &RenderState<'_>) -> String {
    match state.ngl_list_size {
        Some(ngl) => format!("known {} | ngl {}", state.known_list_size, ngl),
        None => format!("known {} | no ngl", state.known_list_size),
    }
}

fn draw(frame: &mut Frame, state: &RenderState<'_>) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(colors::background())),
        area,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(38), Constraint::Min(10)])
        .split(rows[0]);

    frame.render_widget(
        render_report(state.analysis, state.source),
        columns[0],
    );
    draw_main_panel(frame, state, columns[1]);

    frame.render_widget(render_legend(state.has_ngl()), rows[1]);
    frame.render_widget(
        render_status(state.status, &lists_summary(state)),
        rows[2],
    );
    frame.render_widget(render_command_line(state.input), rows[3]);

    let cursor_x = rows[3].x + (PROMPT.width() + state.input.width()) as u16;
    frame.set_cursor_position(Position::new(
        cursor_x.min(rows[3].right().saturating_sub(1)),
        rows[3].y,
    ));
}

fn draw_main_panel(frame: &mut Frame, state: &RenderState<'_>, area: Rect) {
    match (state.mode, state.analysis) {
        (AppMode::Help, _) => frame.render_widget(render_help(), area),
        (AppMode::WordList, Some(analysis)) => {
            frame.render_widget(render_word_lists(analysis, state.scroll), area)
        }
        (_, Some(analysis)) => {
            frame.render_widget(render_marked_text(&analysis.annotations, state.scroll), area)
        }
        (_, None) => frame.render_widget(render_marked_text(&[], 0), area),
    }
}

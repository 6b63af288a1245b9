use vocabmeter::app::{App, AppEvent};
use vocabmeter::engine::{init_tracing, Config};
use vocabmeter::ui::TuiManager;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();
    init_tracing(&config);

    let mut app = App::from_config(config);

    // Optional first argument: a document to analyze right away
    if let Some(path) = std::env::args().nth(1) {
        app.handle_event(AppEvent::LoadFile(path));
    }

    let mut tui = TuiManager::new()?;
    tui.run_event_loop(&mut app)?;

    Ok(())
}

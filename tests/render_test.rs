// Rendering smoke tests against ratatui's TestBackend

use arrayviz::animation::ManualTime;
use arrayviz::config::Config;
use arrayviz::ui::App;
use ratatui::{backend::TestBackend, Terminal};
use std::rc::Rc;
use std::time::Duration;

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn app_with(array: Vec<i64>) -> (App, Rc<ManualTime>) {
    let time = Rc::new(ManualTime::new());
    (App::with_parts(Config::default(), array, time.clone()), time)
}

#[test]
fn test_idle_screen_shows_every_pane() {
    let (app, _time) = app_with(vec![42, 17, 89]);
    let mut terminal = Terminal::new(TestBackend::new(140, 32)).expect("terminal");

    terminal.draw(|f| app.render(f)).expect("draw");
    let text = screen_text(&terminal);

    for needle in ["Array", "Controls", "Memory", "linear_search", "IDLE", "89", "0x10000000"] {
        assert!(text.contains(needle), "missing {needle:?}");
    }
    assert!(text.contains("(no active frame)"));
}

#[test]
fn test_running_search_shows_progress() {
    let (mut app, time) = app_with(vec![42, 17, 89]);
    app.params.target = "89".to_string();
    app.start_operation();
    time.advance(Duration::from_secs(2));
    app.tick();

    let mut terminal = Terminal::new(TestBackend::new(140, 32)).expect("terminal");
    terminal.draw(|f| app.render(f)).expect("draw");
    let text = screen_text(&terminal);

    assert!(text.contains("PLAYING"));
    assert!(text.contains("i = 0"));
    assert!(text.contains("checking") || text.contains("Frame 0"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let (app, _time) = app_with(vec![1, 2, 3]);
    let mut terminal = Terminal::new(TestBackend::new(20, 6)).expect("terminal");
    terminal.draw(|f| app.render(f)).expect("draw");
}

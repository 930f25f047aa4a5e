//! Whole-frame tests: events in, framebuffer out.

use crossterm::event::{Event, KeyCode, KeyEvent};

use heart_box::app::App;
use heart_box::config::Config;
use heart_box::term::{palette, Cell, Viewport};
use heart_box::types::{Direction, HEART_GLYPH};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::from(code))
}

fn app(config: &Config) -> App {
    App::new(Viewport::new(80, 24), config)
}

fn find_heart(app: &App) -> Vec<(u16, u16)> {
    let fb = app.frame();
    let mut found = Vec::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            if fb.get(x, y).unwrap().ch == HEART_GLYPH {
                found.push((x, y));
            }
        }
    }
    found
}

#[test]
fn first_frame_shows_box_heart_and_help() {
    let mut app = app(&Config::default());
    app.advance();
    let fb = app.frame();

    assert_eq!(find_heart(&app), vec![(40, 12)]);
    assert_eq!(fb.get(40, 12).unwrap().style, palette::HEART);

    // Box origin (20, 4): top border row spans 19..=61.
    for x in 19..=61 {
        assert_eq!(fb.get(x, 4).unwrap().style, palette::BORDER, "x={x}");
        assert_eq!(fb.get(x, 20).unwrap().style, palette::BORDER, "x={x}");
    }
    // Interior stays blank.
    assert_eq!(fb.get(21, 5).unwrap(), Cell::default());

    assert!(fb.row_text(21).contains("Arrow keys to set direction, Space to stop/start"));
    assert!(fb.row_text(22).contains("Q to quit"));
    assert!(fb.row_text(1).contains("stopped"));
}

#[test]
fn heart_moves_and_old_cell_is_erased() {
    let mut app = app(&Config::default());
    app.advance();

    app.handle_event(key(KeyCode::Right));
    for _ in 0..4 {
        app.advance();
    }

    // 4 frames * 0.3 speed * 2.0 aspect = 2.4 columns.
    assert_eq!(find_heart(&app), vec![(42, 12)]);
    assert_eq!(app.frame().get(40, 12).unwrap().ch, ' ');
    assert!(app.frame().row_text(1).contains("moving"));
}

#[test]
fn quit_key_stops_the_app() {
    let mut app = app(&Config::default());
    assert!(app.is_running());
    app.handle_event(key(KeyCode::Char('x')));
    assert!(app.is_running());
    app.handle_event(key(KeyCode::Char('Q')));
    assert!(!app.is_running());
}

#[test]
fn status_line_can_be_disabled() {
    let config = Config {
        show_status: false,
        ..Config::default()
    };
    let mut app = app(&config);
    app.advance();
    assert_eq!(app.frame().row_text(1).trim(), "");
}

#[test]
fn resize_rebuilds_the_screen() {
    let mut app = app(&Config::default());
    app.advance();
    assert!(app.take_full_redraw());
    assert!(!app.take_full_redraw());

    app.handle_event(Event::Resize(100, 30));
    assert!(app.take_full_redraw());
    assert_eq!(app.viewport(), Viewport::new(100, 30));

    app.advance();
    let fb = app.frame();
    assert_eq!((fb.width(), fb.height()), (100, 30));
    // Layout keeps its startup geometry.
    assert_eq!(fb.get(19, 4).unwrap().style, palette::BORDER);
    assert_eq!(find_heart(&app), vec![(40, 12)]);
    assert!(fb.row_text(27).contains("Arrow keys"));
}

#[test]
fn tick_steps_once_per_frame() {
    let mut app = app(&Config::default());
    assert!(app.tick([key(KeyCode::Right)]));
    assert!(app.tick(Vec::new()));

    // 2 frames * 0.3 speed * 2.0 aspect = 1.2 columns.
    assert_eq!(find_heart(&app), vec![(41, 12)]);
}

#[test]
fn quit_ends_the_frame_before_later_keys_and_the_step() {
    let mut app = app(&Config::default());
    assert!(app.tick([key(KeyCode::Right)]));
    let before = app.demo().heart().position();
    let drawn = find_heart(&app);

    let events = [
        key(KeyCode::Right),
        key(KeyCode::Char('q')),
        key(KeyCode::Up),
    ];
    assert!(!app.tick(events));

    assert!(!app.is_running());
    assert_eq!(app.demo().heart().direction(), Direction::Right.vector());
    assert_eq!(app.demo().heart().position(), before);
    assert_eq!(find_heart(&app), drawn);

    // Once stopped, further frames do nothing.
    assert!(!app.tick([key(KeyCode::Left)]));
    assert_eq!(app.demo().heart().position(), before);
}

#[test]
fn status_line_stays_off_a_box_that_reaches_row_one() {
    // 18 rows puts the box origin at (20, 1).
    let mut app = App::new(Viewport::new(80, 18), &Config::default());
    assert_eq!(app.demo().arena().y(), 1);

    app.tick([key(KeyCode::Right)]);
    for _ in 0..5 {
        app.tick(Vec::new());
    }

    let fb = app.frame();
    for x in 19..=61 {
        assert_eq!(fb.get(x, 1).unwrap().style, palette::BORDER, "x={x}");
    }
    assert!(!fb.row_text(1).contains("moving"));
}

#[test]
fn help_text_is_drawn_over_the_box() {
    // 20 rows puts the bottom border on row 18, the second help row.
    let mut app = App::new(Viewport::new(80, 20), &Config::default());
    app.tick(Vec::new());

    let check = |app: &App| {
        let fb = app.frame();
        assert!(fb.row_text(18).contains("Q to quit, +/- aspect ratio, [/] speed"));
        assert_eq!(fb.get(19, 18).unwrap().style, palette::TEXT);
        // Past the end of the help text the border is intact.
        assert_eq!(fb.get(45, 18).unwrap().style, palette::BORDER);
    };
    check(&app);

    app.handle_event(Event::Resize(80, 20));
    app.tick(Vec::new());
    check(&app);
}

//! Drive the shell with key events and read back the rendered screen

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use cardiorehab::app::App;
use cardiorehab::core::{Context, Section};
use cardiorehab::domain::exercise::TimerState;
use cardiorehab::router::SectionView;
use cardiorehab::ui;

const WIDTH: u16 = 160;
const HEIGHT: u16 = 50;

fn app_at_demo_time(patient: &str) -> App {
    let now = NaiveDate::from_ymd_opt(2024, 1, 15)
        .and_then(|d| d.and_hms_opt(18, 0, 0))
        .expect("valid time");
    App::new(Context::new(patient, now), Section::Dashboard)
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn screen(app: &App) -> String {
    let backend = TestBackend::new(WIDTH, HEIGHT);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal.draw(|f| ui::draw(f, app)).expect("draw");
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            out.push_str(buffer.get(x, y).symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn test_dashboard_then_appointments() {
    let mut app = app_at_demo_time("Sarah");
    let text = screen(&app);
    assert!(text.contains("Welcome back, Sarah!"));
    assert!(text.contains("System Status"));

    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.active_section(), Section::Appointments);
    let text = screen(&app);
    assert!(text.contains("Dr. Meet"));
    assert!(text.contains("Hethvi Soni, RN"));
    assert!(text.contains("Dr. Riya"));
    assert!(text.contains("Completed"));
    assert!(text.contains("2:30 PM"));

    match app.router.mounted() {
        SectionView::Appointments(scheduler) => {
            assert_eq!(scheduler.upcoming().count(), 2);
            assert_eq!(scheduler.history().count(), 1);
        }
        _ => panic!("appointments should be mounted"),
    }
}

#[test]
fn test_click_appointments_in_navigation() {
    let mut app = app_at_demo_time("Sarah");
    assert_eq!(app.active_section(), Section::Dashboard);

    // Second entry: border + 3 brand rows, then two rows per entry.
    app.handle_click(ratatui::layout::Rect::new(0, 0, WIDTH, HEIGHT), 4, 6);
    assert_eq!(app.active_section(), Section::Appointments);
    let text = screen(&app);
    assert!(text.contains("Upcoming Appointments"));
    assert!(text.contains("Recent Appointments"));
}

#[test]
fn test_patient_name_in_banner() {
    let app = app_at_demo_time("Ana");
    assert!(screen(&app).contains("Welcome back, Ana!"));
}

#[test]
fn test_quick_action_navigates() {
    let mut app = app_at_demo_time("Sarah");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.active_section(), Section::Appointments);
}

#[test]
fn test_exercise_timer_replacement() {
    let mut app = app_at_demo_time("Sarah");
    press(&mut app, KeyCode::Char('3'));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('s'));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('s'));

    match app.router.mounted() {
        SectionView::Exercise(tracker) => {
            assert_eq!(tracker.timer(), TimerState::Running { exercise_id: 4 });
            assert_eq!(tracker.elapsed_secs(), 0);
        }
        _ => panic!("exercise should be mounted"),
    }
    let text = screen(&app);
    assert!(text.contains("Stop Timer"));
    assert!(text.contains("50% Complete"));
}

#[test]
fn test_exercise_mark_complete_updates_progress() {
    let mut app = app_at_demo_time("Sarah");
    press(&mut app, KeyCode::Char('3'));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('c'));
    let text = screen(&app);
    assert!(text.contains("75% Complete"));
    assert!(text.contains("3/4"));
}

#[test]
fn test_vitals_entry_captures_digits() {
    let mut app = app_at_demo_time("Sarah");
    press(&mut app, KeyCode::Char('4'));
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('7'));
    press(&mut app, KeyCode::Char('1'));
    assert_eq!(app.active_section(), Section::Vitals);

    match app.router.mounted() {
        SectionView::Vitals(monitor) => assert_eq!(monitor.inputs().heart_rate, "71"),
        _ => panic!("vitals should be mounted"),
    }

    press(&mut app, KeyCode::Enter);
    match app.router.mounted() {
        SectionView::Vitals(monitor) => {
            assert_eq!(monitor.inputs().heart_rate, "");
            assert_eq!(monitor.active_input(), None);
        }
        _ => panic!("vitals should be mounted"),
    }

    press(&mut app, KeyCode::Char('1'));
    assert_eq!(app.active_section(), Section::Dashboard);
}

/// Title row of the thread header, read two rows above the presence line
fn thread_header_title(app: &App, presence: &str) -> String {
    let backend = TestBackend::new(WIDTH, HEIGHT);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal.draw(|f| ui::draw(f, app)).expect("draw");
    let buffer = terminal.backend().buffer();
    let cells: Vec<Vec<String>> = (0..HEIGHT)
        .map(|y| (0..WIDTH).map(|x| buffer.get(x, y).symbol().to_string()).collect())
        .collect();

    for (row, line) in cells.iter().enumerate() {
        for col in 0..line.len() {
            if line[col..].concat().starts_with(presence) {
                assert!(row >= 2 && col >= 2, "presence line too close to the edge");
                let end = (col + 40).min(line.len());
                return cells[row - 2][col - 2..end].concat();
            }
        }
    }
    panic!("presence `{presence}` not rendered");
}

#[test]
fn test_messaging_header_follows_selection() {
    let mut app = app_at_demo_time("Sarah");
    press(&mut app, KeyCode::Char('5'));
    assert!(thread_header_title(&app, "Online").contains("Dr. Elena Martinez"));

    press(&mut app, KeyCode::Down);
    let title = thread_header_title(&app, "Last seen 2 hours ago");
    assert!(title.contains("Lisa Chen"));
    assert!(!title.contains("Lisa Chen, RN"));
    assert!(!title.contains("Dr. Elena Martinez"));
    assert!(screen(&app).contains("Cardiac Rehabilitation Nurse"));
}

#[test]
fn test_collapsed_nav_hides_descriptions() {
    let mut app = app_at_demo_time("Sarah");
    assert!(screen(&app).contains("Telehealth Platform"));
    press(&mut app, KeyCode::Char('m'));
    let text = screen(&app);
    assert!(!text.contains("Telehealth Platform"));
    assert!(!text.contains("System Status"));
}

#[test]
fn test_profile_placeholder() {
    let mut app = app_at_demo_time("Sarah");
    press(&mut app, KeyCode::Char('6'));
    let text = screen(&app);
    assert!(text.contains("Profile Settings"));
    assert!(text.contains("Manage your account and preferences"));
}

use chrono::{Locale, NaiveDate};
use indoc::indoc;
use pretty_assertions::{assert_eq, assert_ne};
use std::fs;
use tempfile::TempDir;

use calpad::{
    configuration::{config::Config, types::calendar_tab::CalendarTab},
    model::{category::Category, session::Session},
    shell::{Flow, Shell},
    views::calendar_page::CalendarPage,
};

fn shell_in(output_dir: &TempDir) -> Shell {
    let config = Config {
        base_dir: output_dir.path().to_path_buf(),
        calendar_today_date: "2024-05-10".into(),
        output_dir: "site".into(),
        day_view_format: "%d.%m.%Y".into(),
        ..Config::default()
    };
    let session = Session::from_config(&config).unwrap();
    let page = CalendarPage::new(config).unwrap();
    Shell::new(session, page)
}

fn run(shell: &mut Shell, script: &str) -> String {
    let mut output = Vec::new();
    shell.run(script.as_bytes(), &mut output, false).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn compose_an_event_step_by_step() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = shell_in(&dir);

    let output = run(
        &mut shell,
        indoc! {r#"
            # a comment and a blank line are skipped

            title "Team lunch"
            submit
            time 12:30
            category blue
            reminder on
            date 2024-05-11
            submit
        "#},
    );

    assert_eq!(
        output.lines().collect::<Vec<_>>(),
        vec![
            "[error] Заполните название и время события (не заполнено: время)",
            "[ok] Событие добавлено!",
        ]
    );

    let session = shell.session();
    assert_eq!(session.events().len(), 3);
    let lunch = &session.events()[2];
    assert_eq!(lunch.title(), "Team lunch");
    assert_eq!(lunch.time(), "12:30");
    assert_eq!(lunch.category(), Category::Blue);
    assert_eq!(lunch.date(), NaiveDate::from_ymd_opt(2024, 5, 11).unwrap());
    assert!(lunch.reminder());
}

#[test]
fn add_in_one_line() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = shell_in(&dir);

    let output = run(
        &mut shell,
        indoc! {r#"
            add --title Lunch --time 12:00
            add --title "No time"
            show
        "#},
    );

    assert!(output.contains("[ok] Событие добавлено!"));
    assert!(output.contains("[error] Заполните название и время события (не заполнено: время)"));
    assert!(output.contains("События на 10.05.2024:"));
    assert!(output.contains("12:00  Lunch [Работа]"));
    assert!(output.contains("Работа: 2"));
    assert!(output.contains("Важное: 1"));
    assert!(output.contains("Спорт: 0"));
}

#[test]
fn mistakes_do_not_stop_the_shell() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = shell_in(&dir);

    let output = run(
        &mut shell,
        indoc! {"
            frobnicate
            time soon
            select someday-that-is-not-a-date
            tab reminders
        "},
    );

    assert!(output.contains("frobnicate"));
    assert!(output.contains("expected a time like 09:30"));
    assert!(output.contains("Напоминания:"));
    assert!(output.contains("Встреча с командой (сегодня)"));
    assert_eq!(shell.session().active_tab(), CalendarTab::Reminders);
    assert_eq!(
        shell.session().selected_date(),
        NaiveDate::from_ymd_opt(2024, 5, 10)
    );
}

#[test]
fn selecting_dates() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = shell_in(&dir);

    let output = run(&mut shell, "select none\n");
    assert!(output.contains("Дата не выбрана"));
    assert!(output.contains("Нет событий на эту дату"));
    assert_eq!(shell.session().selected_date(), None);

    let output = run(&mut shell, "select 11.05.2024\n");
    assert!(output.contains("События на 11.05.2024:"));
    assert!(output.contains("Нет событий на эту дату"));

    run(&mut shell, "select\n");
    assert_eq!(
        shell.session().selected_date(),
        NaiveDate::from_ymd_opt(2024, 5, 10)
    );
}

#[test]
fn quit_stops_reading() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = shell_in(&dir);

    run(
        &mut shell,
        indoc! {"
            add --title Before --time 08:00
            quit
            add --title After --time 09:00
        "},
    );
    assert_eq!(shell.session().events().len(), 3);

    let mut output = Vec::new();
    assert_eq!(
        shell.execute_line("exit", &mut output).unwrap(),
        Flow::Quit
    );
}

#[test]
fn draft_shows_the_form() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = shell_in(&dir);

    let output = run(
        &mut shell,
        indoc! {"
            title Yoga
            category green
            draft
            clear
            draft
        "},
    );

    assert!(output.contains("название:    Yoga"));
    assert!(output.contains("категория:   Спорт"));
    assert!(output.contains("дата:        10.05.2024 (сегодня)"));
    assert!(output.contains("категория:   Работа"));
    assert!(output.contains("Категории: purple (Работа), orange (Важное)"));
}

#[test]
fn every_tab_renders_as_text() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = shell_in(&dir);

    for (tab, heading) in [
        ("main", "05.2024"),
        ("events", "Все события:"),
        ("planning", "Планируйте свои дела"),
        ("reminders", "Напоминания:"),
        ("settings", "Google Calendar (не подключено)"),
    ] {
        let output = run(&mut shell, &format!("show {}\n", tab));
        assert!(output.contains(heading), "{} is missing {:?}:\n{}", tab, heading, output);
    }
    assert_eq!(shell.session().active_tab(), CalendarTab::Main);
}

#[test]
fn render_writes_the_page() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = shell_in(&dir);
    fs::create_dir_all(dir.path().join("site")).unwrap();
    fs::write(dir.path().join("site").join("stale.html"), "old").unwrap();

    let output = run(
        &mut shell,
        indoc! {"
            add --title Lunch --time 12:00 --category pink
            tab events
            render
        "},
    );

    let page_path = dir.path().join("site").join("index.html");
    assert!(output.contains(&format!("страница записана: {}", page_path.display())));
    assert!(!dir.path().join("site").join("stale.html").exists());

    let page = fs::read_to_string(page_path).unwrap();
    assert!(page.contains("<title>Календарь</title>"));
    assert!(page.contains(r#"<html lang="ru">"#));
    assert!(page.contains(r#"<section id="events" class="tab-content active">"#));
    assert!(page.contains("Встреча с командой"));
    assert!(page.contains("Lunch"));
    assert!(page.contains("Встречи"));
    assert!(!page.contains("Meetings"));
    assert!(page.contains("#d946ef"));
}

#[test]
fn render_into_another_directory() {
    let dir = tempfile::tempdir().unwrap();
    let elsewhere = tempfile::tempdir().unwrap();
    let shell = shell_in(&dir);

    let file_path = shell
        .render(Some(elsewhere.path().to_path_buf()))
        .unwrap();

    assert_eq!(file_path, elsewhere.path().join("index.html"));
    assert!(file_path.exists());
    assert!(!dir.path().join("site").exists());
}

#[test]
fn render_into_a_named_directory_keeps_its_files() {
    let dir = tempfile::tempdir().unwrap();
    let documents = tempfile::tempdir().unwrap();
    fs::write(documents.path().join("thesis.docx"), "chapter one").unwrap();
    fs::create_dir(documents.path().join("photos")).unwrap();
    fs::write(documents.path().join("index.html"), "old page").unwrap();
    let mut shell = shell_in(&dir);

    run(&mut shell, &format!("render \"{}\"\n", documents.path().display()));

    let mut entries: Vec<String> = fs::read_dir(documents.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    entries.sort();
    assert_eq!(entries, vec!["index.html", "photos", "thesis.docx"]);
    assert_eq!(
        fs::read_to_string(documents.path().join("thesis.docx")).unwrap(),
        "chapter one"
    );
    assert_ne!(
        fs::read_to_string(documents.path().join("index.html")).unwrap(),
        "old page"
    );
}

#[test]
fn default_formats_use_the_configured_locale() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        base_dir: dir.path().to_path_buf(),
        calendar_today_date: "2024-05-10".into(),
        ..Config::default()
    };
    let session = Session::from_config(&config).unwrap();
    let page = CalendarPage::new(config).unwrap();
    let mut shell = Shell::new(session, page);

    let output = run(&mut shell, "show main\n");

    let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
    let heading = today
        .format_localized("%A, %-d %B %Y", Locale::ru_RU)
        .to_string();
    assert!(output.starts_with("05.2024\n"), "unexpected title:\n{}", output);
    assert!(output.contains(&format!("События на {}:", heading)));
    assert!(!output.contains("Friday"));
}

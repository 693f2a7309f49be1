//! Ratatui painters, one per trainer screen.
//!
//! Painters are pure: they read a borrowed [`Screen`] snapshot and
//! draw. All state lives in the core.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph},
};
use swiftread_core::{
    history::{HistorySummary, SessionRecord},
    metrics::SessionOutcome,
    render::{MaterialItemView, Screen},
    session::PlaybackPhase,
    settings::ReadingDrill,
    text_policy::bionic_split,
};

pub fn draw(frame: &mut Frame, screen: &Screen<'_>) {
    match screen {
        Screen::Library {
            app_title,
            items,
            cursor,
            filter,
        } => draw_library(frame, app_title, items, *cursor, *filter),
        Screen::Reading {
            title,
            chunk,
            phase,
            progress_percent,
            live_seconds,
            words_shown,
            word_total,
            wpm,
            chunk_size,
            bionic,
            drill,
            ..
        } => draw_reading(
            frame,
            ReadingView {
                title: *title,
                chunk,
                phase: *phase,
                progress_percent: *progress_percent,
                live_seconds: *live_seconds,
                words_shown: *words_shown,
                word_total: *word_total,
                wpm: *wpm,
                chunk_size: *chunk_size,
                bionic: *bionic,
                drill: *drill,
            },
        ),
        Screen::Finished {
            title,
            outcome,
            word_total,
        } => draw_finished(frame, *title, *outcome, *word_total),
        Screen::QuizLoading => draw_quiz_loading(frame),
        Screen::Quiz {
            index,
            total,
            question,
            options,
            cursor,
        } => draw_quiz(frame, *index, *total, question, options, *cursor),
        Screen::Stats { summary, records } => draw_stats(frame, *summary, records),
    }
}

struct ReadingView<'a> {
    title: Option<&'a str>,
    chunk: &'a str,
    phase: PlaybackPhase,
    progress_percent: f32,
    live_seconds: u32,
    words_shown: usize,
    word_total: usize,
    wpm: u32,
    chunk_size: usize,
    bionic: bool,
    drill: ReadingDrill,
}

fn draw_library(
    frame: &mut Frame,
    app_title: &str,
    items: &[MaterialItemView<'_>],
    cursor: usize,
    filter: Option<&str>,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let heading = match filter {
        Some(category) => format!("{app_title} — {category}"),
        None => format!("{app_title} — All texts"),
    };
    frame.render_widget(title_bar(&heading), rows[0]);

    if items.is_empty() {
        let empty = Paragraph::new("No texts in this category.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(empty, rows[1]);
    } else {
        let entries: Vec<ListItem> = items
            .iter()
            .map(|item| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(
                            item.title,
                            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            format!(
                                "  {} · {} · {} words",
                                item.category, item.difficulty, item.word_count
                            ),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]),
                    Line::from(Span::styled(
                        format!("  {}", item.preview),
                        Style::default().fg(Color::Gray),
                    )),
                ])
            })
            .collect();

        let list = List::new(entries)
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");
        let mut state = ListState::default();
        state.select(Some(cursor));
        frame.render_stateful_widget(list, rows[1], &mut state);
    }

    frame.render_widget(
        hint_line("Enter: read | f: filter | e: retag | d: delete | s: stats | q: quit"),
        rows[2],
    );
}

fn draw_reading(frame: &mut Frame, view: ReadingView<'_>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .split(frame.area());

    frame.render_widget(title_bar(view.title.unwrap_or("Practice text")), rows[0]);

    let stage = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = stage.inner(rows[1]);
    frame.render_widget(stage, rows[1]);

    let chunk_row = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1);
    let chunk = Paragraph::new(chunk_line(view.chunk, view.bionic)).alignment(Alignment::Center);
    frame.render_widget(chunk, chunk_row);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Magenta).bg(Color::DarkGray))
        .percent(view.progress_percent.round() as u16)
        .label("");
    frame.render_widget(gauge, rows[2]);

    let phase = match view.phase {
        PlaybackPhase::Idle => "Ready",
        PlaybackPhase::Playing => "Playing",
        PlaybackPhase::Paused => "Paused",
        PlaybackPhase::Finished => "Finished",
    };
    let mut status = format!(
        "{phase} | {} wpm | chunk {} | {}/{} words | {}",
        view.wpm,
        view.chunk_size,
        view.words_shown,
        view.word_total,
        format_clock(view.live_seconds),
    );
    if view.drill != ReadingDrill::None {
        status.push_str(&format!(" | drill: {}", view.drill.label()));
    }
    let footer = vec![
        Line::from(Span::styled(status, Style::default().fg(Color::Cyan))),
        Line::from(Span::styled(
            "space: play/pause | +/-: speed | [/]: chunk | b: bionic | r: reset | esc: back",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(footer).alignment(Alignment::Center), rows[3]);
}

fn draw_finished(frame: &mut Frame, title: Option<&str>, outcome: SessionOutcome, word_total: usize) {
    let lines = vec![
        Line::from(Span::styled(
            "Finished!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("{} words in {:.1} s", word_total, outcome.duration_seconds)),
        Line::from(Span::styled(
            format!("{} wpm actual", outcome.actual_wpm),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: comprehension quiz | esc: library",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(outlined(title.unwrap_or("Session complete")));
    frame.render_widget(card, frame.area());
}

fn draw_quiz_loading(frame: &mut Frame) {
    let card = Paragraph::new("Generating questions…")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(outlined("Quiz"));
    frame.render_widget(card, frame.area());
}

fn draw_quiz(
    frame: &mut Frame,
    index: usize,
    total: usize,
    question: &str,
    options: &[String],
    cursor: usize,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(frame.area());

    frame.render_widget(title_bar(&format!("Question {}/{}", index + 1, total)), rows[0]);
    frame.render_widget(
        Paragraph::new(question)
            .wrap(ratatui::widgets::Wrap { trim: true })
            .alignment(Alignment::Center),
        rows[1],
    );

    let entries: Vec<ListItem> = options
        .iter()
        .map(|option| ListItem::new(option.as_str()))
        .collect();
    let list = List::new(entries)
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(Some(cursor));
    frame.render_stateful_widget(list, rows[2], &mut state);

    frame.render_widget(hint_line("j/k: choose | Enter: answer"), rows[3]);
}

fn draw_stats(frame: &mut Frame, summary: HistorySummary, records: &[SessionRecord]) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    frame.render_widget(title_bar("Progress"), rows[0]);

    let overview = format!(
        "avg {} wpm | best {} wpm | avg score {}% | {} min total",
        summary.avg_wpm, summary.best_wpm, summary.avg_score, summary.total_minutes,
    );
    frame.render_widget(
        Paragraph::new(overview)
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center),
        rows[1],
    );

    if records.is_empty() {
        frame.render_widget(
            Paragraph::new("No sessions recorded yet.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            rows[2],
        );
    } else {
        let entries: Vec<ListItem> = records
            .iter()
            .rev()
            .map(|record| {
                ListItem::new(format!(
                    "{}  {} wpm  {}%  {:.0} s",
                    record.date, record.wpm, record.comprehension_score, record.duration_seconds,
                ))
            })
            .collect();
        frame.render_widget(List::new(entries), rows[2]);
    }

    frame.render_widget(hint_line("c: clear history | esc: back to library"), rows[3]);
}

/// Chunk text as styled spans, with per-word bionic emphasis when
/// enabled.
fn chunk_line(chunk: &str, bionic: bool) -> Line<'static> {
    if !bionic {
        return Line::from(Span::styled(
            chunk.to_owned(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
    }

    let mut spans = Vec::new();
    for (i, word) in chunk.split_whitespace().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let (prefix, suffix) = bionic_split(word);
        spans.push(Span::styled(
            prefix.to_owned(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
        if !suffix.is_empty() {
            spans.push(Span::styled(
                suffix.to_owned(),
                Style::default().fg(Color::Gray),
            ));
        }
    }
    Line::from(spans)
}

fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

fn title_bar(text: &str) -> Paragraph<'_> {
    Paragraph::new(text)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
}

fn hint_line(text: &str) -> Paragraph<'_> {
    Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
}

fn outlined(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

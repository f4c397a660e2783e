//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::{GuessResult, MatchVerdict};
use crate::game::GameState;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Gauge, List, ListItem, Paragraph, Row, Table, Wrap},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<'_, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(68), // Guess history
            Constraint::Percentage(32), // Suggestions and messages
        ])
        .split(chunks[1]);

    render_history(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🏆 CHAMPDLE - Guess the Champion")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Rounded panel with a padded title
fn panel(title: impl std::fmt::Display) -> Block<'static> {
    Block::bordered()
        .title(format!(" {title} "))
        .border_type(BorderType::Rounded)
}

const fn verdict_style(verdict: MatchVerdict) -> Style {
    match verdict {
        MatchVerdict::Exact => Style::new().fg(Color::Black).bg(Color::Green),
        MatchVerdict::Partial => Style::new().fg(Color::Black).bg(Color::Yellow),
        MatchVerdict::None => Style::new().fg(Color::White).bg(Color::Red),
    }
}

fn history_row(result: &GuessResult) -> Row<'static> {
    let guess = result.guess();
    let mut cells = vec![Cell::from(guess.display_name().to_string()).style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )];
    cells.extend(result.verdicts().iter().map(|v| {
        Cell::from(guess.display_value(&v.attribute)).style(verdict_style(v.verdict))
    }));
    Row::new(cells).bottom_margin(1)
}

fn render_history<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let schema = app.session.catalog().schema();

    let header = Row::new(
        std::iter::once("Champion".to_string())
            .chain(schema.iter().map(|a| a.label()))
            .map(|label| Cell::from(label).style(Style::default().fg(Color::Cyan))),
    )
    .style(Style::default().add_modifier(Modifier::BOLD))
    .bottom_margin(1);

    // Newest first
    let rows: Vec<Row> = app.session.history().iter().rev().map(history_row).collect();

    let widths: Vec<Constraint> = std::iter::repeat_n(Constraint::Fill(1), schema.len() + 1).collect();

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(panel(format!("Guesses ({})", app.session.history().len())));

    f.render_widget(table, area);
}

fn render_info_panel<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40), // Suggestions or hint
            Constraint::Length(3),      // Narrowing gauge
            Constraint::Min(4),         // Messages
        ])
        .split(area);

    if app.hint.is_some() && app.suggestions.is_empty() {
        render_hint(f, app, chunks[0]);
    } else {
        render_suggestions(f, app, chunks[0]);
    }
    render_narrowing(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_suggestions<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let items: Vec<ListItem> = if app.suggestions.is_empty() {
        let text = if app.input_enabled() && !app.input_buffer.is_empty() {
            "No matching champion"
        } else {
            "Start typing a name..."
        };
        vec![ListItem::new(text).style(Style::default().fg(Color::DarkGray))]
    } else {
        app.suggestions
            .iter()
            .enumerate()
            .map(|(i, entity)| {
                if i == app.selected {
                    ListItem::new(format!("▶ {}", entity.display_name())).style(
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    ListItem::new(format!("  {}", entity.display_name()))
                }
            })
            .collect()
    };

    let list = List::new(items).block(panel("Suggestions"));

    f.render_widget(list, area);
}

fn render_hint<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let Some(hint) = &app.hint else {
        return;
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(
            hint.remaining.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" champions still fit"),
    ])];
    lines.extend(
        hint.names
            .iter()
            .map(|name| Line::from(format!("  • {name}"))),
    );
    if hint.remaining > hint.names.len() {
        lines.push(Line::from(format!(
            "  … and {} more",
            hint.remaining - hint.names.len()
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(panel("Hint").style(Style::default().fg(Color::Green)))
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_narrowing<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let total = app.session.catalog().len();
    let remaining = app.session.candidates().len();
    let progress_pct = if total == 0 {
        0
    } else {
        ((total - remaining) * 100 / total) as u16
    };

    let gauge = Gauge::default()
        .block(panel("Narrowed Down"))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!("{remaining}/{total} remain"));

    f.render_widget(gauge, area);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list = List::new(messages).block(panel("Messages"));

    f.render_widget(messages_list, area);
}

fn render_input<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let (title, content, color) = if app.input_enabled() {
        (
            " Guess a Champion | ↑/↓ select, TAB complete, Enter submit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        )
    } else {
        (
            " 🎉 SOLVED! 🎉 | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        )
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let state_text = match app.session.state() {
        GameState::Solved => match app.session.solution() {
            Some(target) => format!("Solved: {}", target.display_name()),
            None => "Solved".to_string(),
        },
        state => format!("State: {state}"),
    };
    let state = Paragraph::new(state_text).alignment(Alignment::Center);
    f.render_widget(state, chunks[0]);

    let guesses = Paragraph::new(format!("Guesses: {}", app.session.history().len()))
        .alignment(Alignment::Center);
    f.render_widget(guesses, chunks[1]);

    let stats_text = format!(
        "Won: {}/{} | Avg: {:.1}",
        app.stats.games_won,
        app.stats.total_games,
        app.stats.average_guesses()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[2]);

    let help = Paragraph::new("Esc: Quit | ^N: New | ?: Hint")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

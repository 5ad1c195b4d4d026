//! TUI rendering using ratatui.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use studi_store::models::{DayEntry, TaskKind};

use super::app::{App, View};

/// Render the current view.
pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // main content
            Constraint::Length(1), // status bar
        ])
        .split(f.area());

    match &app.current_view {
        View::PlanList => render_plan_list(f, app, chunks[0]),
        View::PlanDetail(plan_id) => render_plan_detail(f, app, plan_id, chunks[0]),
        View::Help => render_help(f, chunks[0]),
    }

    render_status_bar(f, app, chunks[1]);
}

fn render_plan_list(f: &mut Frame, app: &App, area: Rect) {
    let header_cells = ["Title", "Goal", "Style", "Days", "Created"]
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow)));
    let header = Row::new(header_cells).height(1);

    let rows = app.plans.iter().enumerate().map(|(i, saved)| {
        let profile = &saved.content.profile;
        let created = saved.created_at.format("%Y-%m-%d %H:%M").to_string();

        let style = if i == app.selected_plan {
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        Row::new(vec![
            Cell::from(saved.title.clone()),
            Cell::from(profile.goal.clone()),
            Cell::from(profile.style.to_string()),
            Cell::from(format!("{}", saved.content.day_count)),
            Cell::from(created),
        ])
        .style(style)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(30),
            Constraint::Length(12),
            Constraint::Length(16),
            Constraint::Length(6),
            Constraint::Length(18),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Saved Plans "),
    );

    f.render_widget(table, area);
}

fn render_plan_detail(f: &mut Frame, app: &App, plan_id: &str, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    // Plan header.
    let plan_info = app.plans.iter().find(|saved| saved.id == plan_id);
    let header_text = if let Some(saved) = plan_info {
        let profile = &saved.content.profile;
        format!(
            " {} | {} | {} | {} hrs/week",
            saved.title, profile.goal, profile.style, profile.hours,
        )
    } else {
        format!(" {plan_id}")
    };

    let header = Paragraph::new(header_text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Plan "),
    );
    f.render_widget(header, chunks[0]);

    // Day table.
    let day_header_cells = ["Day", "Focus", "Tasks", "Hours"]
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow)));
    let day_header = Row::new(day_header_cells).height(1);

    let day_rows = app.days.iter().enumerate().map(|(i, entry)| {
        let style = if i == app.selected_day {
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let labels: Vec<&str> = entry.tasks.iter().map(|t| t.label.as_str()).collect();

        Row::new(vec![
            Cell::from(format!("{}", entry.day)),
            Cell::from(day_focus(entry)),
            Cell::from(truncate(&labels.join("; "), 60)),
            Cell::from(format!("{}", entry.hours)),
        ])
        .style(style)
    });

    let day_table = Table::new(
        day_rows,
        [
            Constraint::Length(5),
            Constraint::Length(10),
            Constraint::Percentage(70),
            Constraint::Length(6),
        ],
    )
    .header(day_header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Days "),
    );

    f.render_widget(day_table, chunks[1]);
}

fn render_help(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Navigation", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        ]),
        Line::from("    j/Down    Move down"),
        Line::from("    k/Up      Move up"),
        Line::from("    Enter     Open selected plan"),
        Line::from("    Esc/q     Back / Quit"),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Actions", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        ]),
        Line::from("    d         Delete selected plan (list view)"),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Other", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        ]),
        Line::from("    ?         Show this help"),
        Line::from(""),
    ];

    let help = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help "),
    );
    f.render_widget(help, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let view_name = match &app.current_view {
        View::PlanList => "Saved Plans",
        View::PlanDetail(_) => "Plan Detail",
        View::Help => "Help",
    };

    let plan_count = app.plans.len();

    let status_msg = app
        .status_message
        .as_deref()
        .unwrap_or("");

    let bar = Line::from(vec![
        Span::styled(
            format!(" {view_name} "),
            Style::default().bg(Color::Blue).fg(Color::White),
        ),
        Span::raw("  "),
        if plan_count > 0 {
            Span::styled(
                format!("{plan_count} saved plans"),
                Style::default().fg(Color::Yellow),
            )
        } else {
            Span::styled("no saved plans", Style::default().fg(Color::DarkGray))
        },
        Span::raw("  "),
        Span::styled(status_msg, Style::default().fg(Color::Green)),
        Span::raw("  q:quit  ?:help  d:delete"),
    ]);

    f.render_widget(Paragraph::new(bar), area);
}

// -- Helpers --

fn day_focus(entry: &DayEntry) -> Span<'static> {
    let (text, color) = match entry.tasks.first().map(|t| &t.kind) {
        Some(TaskKind::MockTest) => ("mock test", Color::Magenta),
        Some(TaskKind::Revision) => ("revision", Color::Yellow),
        Some(_) => ("study", Color::Green),
        None => ("free", Color::DarkGray),
    };
    Span::styled(text.to_string(), Style::default().fg(color))
}

fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        format!("{}...", &s[..max])
    }
}

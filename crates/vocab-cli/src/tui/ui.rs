//! UI rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame,
};

use super::app::{AddField, App, View};

/// Main UI rendering function
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_tabs(frame, app, chunks[0]);

    match app.view {
        View::CreateSet => draw_create_set(frame, app, chunks[1]),
        View::AddCards => draw_add_cards(frame, app, chunks[1]),
        View::Study => draw_study(frame, app, chunks[1]),
    }

    draw_status_bar(frame, app, chunks[2]);

    if app.show_help {
        draw_help_overlay(frame);
    }

    if let Some(msg) = &app.error_message {
        draw_error_modal(frame, msg);
    }
}

fn draw_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = View::ALL.iter().map(|v| Line::from(v.title())).collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().title(" vocab ").borders(Borders::ALL))
        .select(app.view.index())
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .add_modifier(Modifier::REVERSED),
        );

    frame.render_widget(tabs, area);
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

/// Render a one-line bordered text input and optionally place the cursor in it
fn draw_input(frame: &mut Frame, title: &str, value: &str, focused: bool, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style(focused));

    frame.render_widget(Paragraph::new(value).block(block), area);

    if focused {
        let max_x = area.x + area.width.saturating_sub(2);
        let cursor_x = (area.x + 1 + value.chars().count() as u16).min(max_x);
        frame.set_cursor_position((cursor_x, area.y + 1));
    }
}

fn draw_create_set(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    frame.render_widget(
        Paragraph::new("Name a new set and press Enter to save it."),
        chunks[0],
    );
    draw_input(frame, "Set Name", &app.set_name_input, true, chunks[1]);

    let existing = if app.set_names.is_empty() {
        "No sets yet.".to_string()
    } else {
        format!("Existing sets: {}", app.set_names.join(", "))
    };
    frame.render_widget(
        Paragraph::new(existing)
            .style(Style::default().add_modifier(Modifier::DIM))
            .wrap(Wrap { trim: true }),
        chunks[2],
    );
}

fn draw_add_cards(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let selected = match app.controller.selected_set() {
        Some(set) => format!("Selected Set: {}", set.name),
        None => "No set selected".to_string(),
    };
    frame.render_widget(
        Paragraph::new(selected).style(Style::default().add_modifier(Modifier::BOLD)),
        chunks[0],
    );

    let set_focused = app.add_field == AddField::Set;
    let selector = match app.selector_set() {
        Some(name) => Line::from(vec![
            Span::styled("◀ ", Style::default().add_modifier(Modifier::DIM)),
            Span::raw(name),
            Span::styled(" ▶", Style::default().add_modifier(Modifier::DIM)),
        ]),
        None => Line::from(Span::styled(
            "Create a set first",
            Style::default().add_modifier(Modifier::DIM),
        )),
    };
    let block = Block::default()
        .title(" Set ")
        .borders(Borders::ALL)
        .border_style(border_style(set_focused));
    frame.render_widget(Paragraph::new(selector).block(block), chunks[1]);

    draw_input(
        frame,
        "Word",
        &app.word_input,
        app.add_field == AddField::Word,
        chunks[2],
    );
    draw_input(
        frame,
        "Definition",
        &app.definition_input,
        app.add_field == AddField::Definition,
        chunks[3],
    );
}

fn draw_study(frame: &mut Frame, app: &App, area: Rect) {
    let session = app.controller.session();

    let title = match (app.controller.selected_set(), session.position()) {
        (Some(set), Some((pos, total))) => format!(" {} ({} / {}) ", set.name, pos, total),
        (Some(set), None) => format!(" {} ", set.name),
        (None, _) => " Study ".to_string(),
    };
    let block = Block::default().title(title).borders(Borders::ALL);

    let lines = match session.current_card() {
        Some(card) => {
            let definition = match session.visible_definition() {
                Some(definition) => Line::from(Span::styled(
                    definition.to_string(),
                    Style::default().fg(Color::Cyan),
                )),
                None => Line::from(Span::styled(
                    "(press space to flip)",
                    Style::default().add_modifier(Modifier::DIM),
                )),
            };
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    card.word.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                definition,
            ]
        }
        None if app.controller.selected_set().is_some() => vec![
            Line::from(""),
            Line::from("This set has no cards yet. Add some in Add Cards."),
        ],
        None => vec![
            Line::from(""),
            Line::from("No set selected. Pick one in Add Cards and press Enter."),
        ],
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

/// Draw the status bar at the bottom
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let content = if let Some(msg) = &app.status_message {
        msg.clone()
    } else {
        let hints = match app.view {
            View::CreateSet => "Enter:save",
            View::AddCards => "↑/↓:field  ←/→:set  Enter:select set / add card",
            View::Study => "space:flip  ←/→:prev/next  q:quit",
        };
        format!("{}  Tab:view  F1:help  Esc:quit", hints)
    };

    let paragraph = Paragraph::new(content).style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(paragraph, area);
}

/// Centered popup area clamped to the frame
fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(area.width.saturating_sub(4));
    let popup_height = height.min(area.height.saturating_sub(4));
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

fn draw_error_modal(frame: &mut Frame, message: &str) {
    let area = popup_area(frame.area(), 60, 7);
    frame.render_widget(Clear, area);

    let mut text: Vec<Line> = message.lines().map(Line::from).collect();
    text.push(Line::from(""));
    text.push(Line::from(Span::styled(
        "Press any key to continue",
        Style::default().add_modifier(Modifier::DIM),
    )));

    let block = Block::default()
        .title(" Error ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    frame.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

/// Draw help overlay
fn draw_help_overlay(frame: &mut Frame) {
    let area = popup_area(frame.area(), 50, 20);
    frame.render_widget(Clear, area);

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from("  Tab / S-Tab  Next / previous view"),
        Line::from("  F1           This help"),
        Line::from("  Esc, Ctrl-C  Quit"),
        Line::from(""),
        Line::from("Add Cards:"),
        Line::from("  ↑/↓          Move between fields"),
        Line::from("  ←/→          Choose set"),
        Line::from("  Enter        Select set / add card"),
        Line::from(""),
        Line::from("Study:"),
        Line::from("  space, f     Flip card"),
        Line::from("  →, l, n      Next card"),
        Line::from("  ←, h, p      Previous card"),
        Line::from("  q            Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().add_modifier(Modifier::BOLD));

    frame.render_widget(Paragraph::new(help_text).block(block), area);
}

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::tui::app::{App, InputMode};

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let input_active = !matches!(app.input_mode, InputMode::Normal);

    let mut constraints = vec![
        Constraint::Length(3), // Header
        Constraint::Min(1),    // Content
    ];
    if input_active {
        constraints.push(Constraint::Length(3)); // Input bar
    }
    constraints.push(Constraint::Length(1)); // Footer/Help

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints(constraints)
        .split(size);

    // Header
    let header = Paragraph::new("TASKPAD")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(header, main_chunks[0]);

    // Split Content into Left (List) and Right (Detail)
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(main_chunks[1]);

    draw_task_list(f, app, content_chunks[0]);
    draw_detail_view(f, app, content_chunks[1]);

    if input_active {
        draw_input_bar(f, app, main_chunks[2]);
    }

    // Footer
    let help = if input_active {
        "Enter: Save | Esc: Cancel"
    } else {
        "j/k: Navigate | Space: Toggle | a: Add | e: Edit | d: Delete | q: Quit"
    };
    let footer = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[main_chunks.len() - 1]);
}

fn draw_task_list(f: &mut Frame, app: &mut App, area: Rect) {
    let tasks = app.tasks.borrow();
    let rows: Vec<Row> = tasks
        .iter()
        .map(|task| {
            let status_icon = if task.completed { "✔" } else { "☐" };
            let title_style = if task.completed {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };

            Row::new(vec![
                Span::raw(status_icon),
                Span::styled(task.title.clone(), title_style),
                Span::raw(task.description.clone()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),  // Status
            Constraint::Min(16),    // Title
            Constraint::Min(10),    // Description
        ],
    )
    .header(Row::new(vec!["St", "Task", "Description"]).style(Style::default().fg(Color::Yellow)))
    .block(
        Block::default()
            .title(" Tasks ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    )
    .row_highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn draw_detail_view(f: &mut Frame, app: &App, area: Rect) {
    let tasks = app.tasks.borrow();
    if let Some(task) = app.state.selected().and_then(|i| tasks.get(i)) {
        let mut detail_text = vec![
            Line::from(vec![
                Span::styled("Title: ", Style::default().fg(Color::Blue)),
                Span::styled(
                    task.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("ID: ", Style::default().fg(Color::DarkGray)),
                Span::raw(task.id.clone()),
            ]),
            Line::from(vec![
                Span::styled("Status: ", Style::default().fg(Color::Blue)),
                Span::raw(if task.completed { "Completed" } else { "Pending" }),
            ]),
            Line::from(""),
        ];

        if !task.description.is_empty() {
            detail_text.push(Line::from(Span::styled(
                "Description:",
                Style::default().fg(Color::Blue),
            )));
            detail_text.push(Line::from(task.description.clone()));
        }

        let detail_block = Paragraph::new(detail_text)
            .block(
                Block::default()
                    .title(" Detail ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            )
            .wrap(Wrap { trim: true });

        f.render_widget(detail_block, area);
    } else {
        let detail_block = Block::default()
            .title(" Detail ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);
        f.render_widget(detail_block, area);
    }
}

fn draw_input_bar(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.input_mode {
        InputMode::Adding => " Add Task (title :: description) ",
        InputMode::Editing => " Edit Task (title :: description) ",
        InputMode::Normal => "",
    };

    let input = Paragraph::new(app.input.as_str())
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(input, area);

    // Put the terminal cursor where the next char will be inserted.
    f.set_cursor_position((area.x + app.cursor_position as u16 + 1, area.y + 1));
}

use ratatui::prelude::*;
use ratatui::widgets::{Block, Cell, Clear, Paragraph, Row, Table};

use crate::scoring::MAX_TOTAL;
use crate::tui::app::{App, FormField, InputMode};
use crate::tui::theme;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 10 || area.width < 40 {
        let msg = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Layout: Title(1) + Form(fill) + Result(5) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(5),
        Constraint::Length(1),
    ])
    .split(area);

    render_title(frame, chunks[0]);
    render_form(frame, chunks[1], app);
    render_result(frame, chunks[2], app);
    render_status_bar(frame, chunks[3], app);

    match app.input_mode {
        InputMode::Breakdown => render_breakdown_popup(frame, app),
        InputMode::Help => render_help_popup(frame),
        InputMode::Normal => {}
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let left = "Fertility Score Predictor";
    let right = "educational aid only - not a diagnosis";
    let padding = (area.width as usize).saturating_sub(left.len() + right.len());

    let title = Line::from(vec![
        Span::styled(left, Style::default().fg(theme::TITLE_COLOR).bold()),
        Span::raw(" ".repeat(padding)),
        Span::styled(right, Style::default().fg(theme::MUTED)),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn render_form(frame: &mut Frame, area: Rect, app: &mut App) {
    let rows: Vec<Row> = FormField::ALL
        .iter()
        .enumerate()
        .map(|(idx, field)| {
            let value = app.field_value(*field);

            // Points cell: direct factors show their sub-score; weight and
            // height point at the derived BMI factor instead.
            let points_cell = match field.factor() {
                Some(factor) => {
                    let points = app.result.points(factor);
                    Cell::from(Line::from(vec![
                        Span::styled(
                            format!("{} ", points),
                            Style::default().fg(theme::points_color(points)),
                        ),
                        points_bar(points),
                    ]))
                }
                None => Cell::from(Span::styled("> bmi", Style::default().fg(theme::MUTED))),
            };

            let row_style = if idx % 2 == 1 {
                Style::default().bg(theme::ROW_ALT_BG)
            } else {
                Style::default()
            };

            Row::new(vec![
                Cell::from(field.label()),
                Cell::from(value),
                points_cell,
            ])
            .style(row_style)
        })
        .collect();

    let widths = [
        Constraint::Length(27), // Field label
        Constraint::Fill(1),    // Value
        Constraint::Length(8),  // Points: "3 ███"
    ];

    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["Field", "Value", "Points"])
                .style(theme::header_style())
                .bottom_margin(1),
        )
        .row_highlight_style(theme::row_selected());

    frame.render_stateful_widget(table, area, &mut app.table_state);
}

fn render_result(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::bordered().title(" Result ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let band_color = theme::band_color(app.result.band);
    let gauge_width = (inner.width as usize).saturating_sub(24).clamp(10, 39);

    let lines = vec![
        Line::from(vec![
            Span::styled("BMI   ", Style::default().fg(theme::MUTED)),
            Span::raw(format!("{:.1}", app.result.bmi)),
        ]),
        Line::from(vec![
            Span::styled("Score ", Style::default().fg(theme::MUTED)),
            Span::raw(format!("{:>2} / {}  ", app.result.total, MAX_TOTAL)),
            total_gauge(app.result.total, gauge_width, band_color),
        ]),
        Line::from(vec![
            Span::styled("Band  ", Style::default().fg(theme::MUTED)),
            Span::styled(
                format!(" {} ", app.result.band.label()),
                Style::default().fg(band_color).bold().reversed(),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let text = if let Some((ref msg, _)) = app.flash_message {
        let msg_color = if msg.starts_with("Failed") || msg.starts_with("Error") {
            theme::FLASH_ERROR
        } else {
            theme::FLASH_SUCCESS
        };
        Line::from(Span::styled(msg.clone(), Style::default().fg(msg_color)))
    } else {
        let hints = [
            ("j", "/", "k", ":field "),
            ("h", "/", "l", ":adjust "),
            ("b", "", "", ":breakdown "),
            ("r", "", "", ":reset "),
            ("?", "", "", ":help "),
            ("q", "", "", ":quit"),
        ];

        let mut spans = Vec::new();
        for (i, (key1, sep, key2, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                *key1,
                Style::default().fg(theme::STATUS_KEY_COLOR),
            ));
            if !sep.is_empty() {
                spans.push(Span::raw(*sep));
                spans.push(Span::styled(
                    *key2,
                    Style::default().fg(theme::STATUS_KEY_COLOR),
                ));
            }
            spans.push(Span::raw(*label));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(theme::STATUS_BAR_BG)),
        area,
    );
}

fn points_bar(points: u8) -> Span<'static> {
    let filled = (points as usize).min(3);
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(3 - filled));
    Span::styled(bar, Style::default().fg(theme::points_color(points)))
}

fn total_gauge(total: u8, width: usize, color: Color) -> Span<'static> {
    let ratio = f64::from(total.min(MAX_TOTAL)) / f64::from(MAX_TOTAL);
    let filled = (ratio * width as f64).round() as usize;
    let bar = format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(width.saturating_sub(filled))
    );
    Span::styled(bar, Style::default().fg(color))
}

/// Render the per-factor breakdown overlay
fn render_breakdown_popup(frame: &mut Frame, app: &App) {
    let popup_area = centered_rect_fixed(48, 17, frame.area());

    frame.render_widget(Clear, popup_area);

    let block = Block::bordered().title(" Score Breakdown ");
    frame.render_widget(block.clone(), popup_area);
    let inner = block.inner(popup_area);

    let mut lines: Vec<Line> = app
        .result
        .parts
        .iter()
        .map(|part| {
            let color = theme::points_color(part.points);
            Line::from(vec![
                Span::raw(format!("{:<15}", part.factor.name())),
                Span::styled(format!("{:<22}", part.value), Style::default().fg(theme::MUTED)),
                Span::styled(format!("{}/3", part.points), Style::default().fg(color)),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc or b to close",
        Style::default().fg(theme::MUTED),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Render the help overlay popup
fn render_help_popup(frame: &mut Frame) {
    let popup_area = centered_rect_fixed(50, 13, frame.area());

    frame.render_widget(Clear, popup_area);

    let block = Block::bordered().title(" Keyboard Shortcuts ");
    frame.render_widget(block.clone(), popup_area);
    let inner = block.inner(popup_area);

    let key_style = Style::default().fg(Color::Cyan).bold();
    let help_lines = vec![
        Line::from(vec![
            Span::styled("j / Down      ", key_style),
            Span::raw("Next field"),
        ]),
        Line::from(vec![
            Span::styled("k / Up        ", key_style),
            Span::raw("Previous field"),
        ]),
        Line::from(vec![
            Span::styled("h / Left      ", key_style),
            Span::raw("Decrease / previous option"),
        ]),
        Line::from(vec![
            Span::styled("l / Right     ", key_style),
            Span::raw("Increase / next option"),
        ]),
        Line::from(vec![
            Span::styled("PgUp / PgDn   ", key_style),
            Span::raw("Adjust numbers by 5"),
        ]),
        Line::from(vec![
            Span::styled("b             ", key_style),
            Span::raw("Toggle score breakdown"),
        ]),
        Line::from(vec![
            Span::styled("r             ", key_style),
            Span::raw("Reset to defaults"),
        ]),
        Line::from(vec![
            Span::styled("q / Ctrl-c    ", key_style),
            Span::raw("Quit"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(theme::MUTED),
        )),
    ];

    frame.render_widget(Paragraph::new(help_lines), inner);
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

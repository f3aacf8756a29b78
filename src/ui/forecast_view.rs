//! Forecast screen UI
//!
//! Renders the current conditions panel next to the hourly temperature chart,
//! with a status line for refresh time and fetch errors.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Wrap},
    Frame,
};

use super::help_overlay;
use crate::app::{App, AppState};
use crate::chart::{axis_bounds, DateLabel, StepSize};
use crate::data::CurrentElements;

mod colors {
    use ratatui::style::Color;

    /// Section headers
    pub const HEADER: Color = Color::Cyan;
    /// Secondary/dimmed text
    pub const SECONDARY: Color = Color::Gray;
    /// Temperature line
    pub const TEMPERATURE: Color = Color::LightRed;
    /// Apparent temperature line
    pub const APPARENT: Color = Color::Yellow;
    /// Error text
    pub const ERROR: Color = Color::Red;
}

/// Most x-axis labels the chart will try to fit
const MAX_X_LABELS: usize = 8;

/// Renders the whole screen for the current app state
pub fn render(frame: &mut Frame, app: &App) {
    match app.state {
        AppState::Loading => render_message(frame, "Loading forecast...", colors::HEADER),
        AppState::Failed => {
            let message = format!(
                "Could not load forecast: {}\n\nPress r to retry or q to quit",
                app.last_error.as_deref().unwrap_or("unknown error")
            );
            render_message(frame, &message, colors::ERROR);
        }
        AppState::Ready => render_ready(frame, app),
    }

    if app.show_help {
        help_overlay::render(frame);
    }
}

/// Renders a single centered message
fn render_message(frame: &mut Frame, message: &str, color: Color) {
    let area = help_overlay::centered_rect(frame.area().width.min(70), 5, frame.area());
    let paragraph = Paragraph::new(message.to_string())
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_ready(frame: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(1)])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(20)])
        .split(rows[0]);

    if let Some(current) = &app.current {
        render_current(frame, columns[0], current);
    }
    render_chart(frame, columns[1], app);
    render_status(frame, rows[1], app);
}

fn render_current(frame: &mut Frame, area: Rect, current: &CurrentElements) {
    let lines = vec![
        Line::from(Span::styled(
            format!("{} {}", current.city_name, current.region_name),
            Style::default()
                .fg(colors::HEADER)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(current.wx.clone()),
        Line::from(""),
        field_line("Temp", format!("{}°C", current.temp)),
        field_line("Humidity", format!("{}%", current.rh)),
        field_line("Rain (3h)", format!("{}%", current.pop)),
        field_line("Wind", format!("{} m/s", current.ws)),
        field_line("Comfort", current.ci.clone()),
    ];

    let block = Block::default().title(" Now ").borders(Borders::ALL);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn field_line(name: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<10}", name),
            Style::default().fg(colors::SECONDARY),
        ),
        Span::raw(value),
    ])
}

fn render_chart(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().title(" Next 47 hours ").borders(Borders::ALL);

    let (Some(chart), Some(step)) = (&app.chart, app.step_size()) else {
        frame.render_widget(Paragraph::new("No chart data").block(block), area);
        return;
    };
    let Ok((lower, upper)) = axis_bounds(&app.visible_values(), step) else {
        frame.render_widget(Paragraph::new("No chart data").block(block), area);
        return;
    };

    let temp_points = to_points(&chart.temp);
    let apparent_points = to_points(&chart.apparent_temp);

    let mut datasets = Vec::new();
    if app.series.shows_temperature() {
        datasets.push(
            Dataset::default()
                .name("Temp")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(colors::TEMPERATURE))
                .data(&temp_points),
        );
    }
    if app.series.shows_apparent() {
        datasets.push(
            Dataset::default()
                .name("Feels like")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(colors::APPARENT))
                .data(&apparent_points),
        );
    }

    let last_index = chart.len().saturating_sub(1).max(1) as f64;
    let x_labels: Vec<Span> = x_axis_labels(&chart.date, MAX_X_LABELS)
        .into_iter()
        .map(Span::raw)
        .collect();
    let y_labels: Vec<Span> = y_axis_labels(lower, upper, step)
        .into_iter()
        .map(Span::raw)
        .collect();

    let widget = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(colors::SECONDARY))
                .bounds([0.0, last_index])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("°C")
                .style(Style::default().fg(colors::SECONDARY))
                .bounds([lower, upper])
                .labels(y_labels),
        );

    frame.render_widget(widget, area);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();
    if let Some(refreshed) = app.last_refresh {
        spans.push(Span::styled(
            format!("Updated {} ", refreshed.format("%H:%M")),
            Style::default().fg(colors::SECONDARY),
        ));
    }
    if let Some(error) = &app.last_error {
        spans.push(Span::styled(
            format!("Refresh failed: {} ", error),
            Style::default().fg(colors::ERROR),
        ));
    }
    spans.push(Span::styled(
        "r refresh  s series  ? help  q quit",
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn to_points(values: &[f64]) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| (i as f64, *value))
        .collect()
}

/// Text for one x-axis label: "07/16 00:00" for full labels, "15:00" otherwise
pub fn format_date_label(label: &DateLabel) -> String {
    match label.month_day() {
        Some(month_day) => format!("{} {}:00", month_day, label.hour()),
        None => format!("{}:00", label.hour()),
    }
}

/// Evenly spaced x-axis labels
///
/// Ratatui spreads axis labels evenly, so only indices that divide the axis
/// into equal parts are used. Always includes the first and last point.
/// A label that falls after a day change it would otherwise skip over
/// carries the new date.
pub fn x_axis_labels(date: &[DateLabel], max_labels: usize) -> Vec<String> {
    match date.len() {
        0 => Vec::new(),
        1 => vec![format_date_label(&date[0])],
        len => {
            let span = len - 1;
            let max_intervals = max_labels.saturating_sub(1).max(1);
            let intervals = (1..=max_intervals.min(span))
                .rev()
                .find(|n| span % n == 0)
                .unwrap_or(1);
            let stride = span / intervals;

            let mut labels = vec![format_date_label(&date[0])];
            for i in 1..=intervals {
                let index = i * stride;
                let label = &date[index];
                let rolled_over = date[index - stride + 1..=index]
                    .iter()
                    .rev()
                    .find_map(|earlier| earlier.month_day());

                let text = match (label.is_full(), rolled_over) {
                    (false, Some(month_day)) => format!("{} {}:00", month_day, label.hour()),
                    _ => format_date_label(label),
                };
                labels.push(text);
            }
            labels
        }
    }
}

/// Y-axis tick labels from `lower` to `upper` in `step` increments
pub fn y_axis_labels(lower: f64, upper: f64, step: StepSize) -> Vec<String> {
    let step_value = step.value();
    let ticks = ((upper - lower) / step_value).round() as usize;

    (0..=ticks)
        .map(|i| {
            let value = lower + i as f64 * step_value;
            match step {
                StepSize::Fine => format!("{:.1}", value),
                StepSize::Coarse => format!("{:.0}", value),
            }
        })
        .collect()
}

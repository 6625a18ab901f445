use chrono::DateTime;
use chrono_tz::Tz;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Block, Borders, Cell, Chart, Clear, Dataset, GraphType, List, ListItem, ListState,
        Paragraph, Row, Table, Wrap,
    },
};
use rust_decimal::Decimal;

use crate::{
    app::{
        dashboard::Dashboard,
        market::{clock_label, market_status},
        normalize::NOT_AVAILABLE,
    },
    models::{MarketStatus, NormalizedQuote, PriceHistory},
};

const SERIES_COLORS: [Color; 6] = [
    Color::Cyan,
    Color::Magenta,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Red,
];

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
    Searching,
}

/// Everything the renderer needs besides the dashboard itself.
#[derive(Debug, Default)]
pub struct UiState {
    pub input_mode: InputMode,
    pub symbol_input: String,
    pub search_input: String,
    pub search_state: ListState,
    pub popup_message: Option<String>,
    pub error_popup: Option<String>,
    pub status_message: Option<String>,
    pub market_status: MarketStatus,
    pub clock_label: String,
}

impl UiState {
    pub fn set_clock(&mut self, now_in_zone: &DateTime<Tz>) {
        self.market_status = market_status(now_in_zone);
        self.clock_label = clock_label(now_in_zone);
    }
}

pub fn render(frame: &mut Frame, dashboard: &Dashboard, state: &mut UiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(metrics_height(dashboard)),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let title = Paragraph::new("📈 Stock Analyzer")
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    render_input(frame, chunks[1], state);

    if dashboard.quotes().is_empty() {
        let empty_message =
            Paragraph::new("No data to display. Press '/' and enter a stock symbol (e.g. AAPL, TCS.NS).")
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty_message, chunks[2]);
    } else if dashboard.is_comparison() {
        render_comparison(frame, chunks[2], dashboard);
    } else {
        render_metrics(frame, chunks[2], &dashboard.quotes()[0]);
    }

    render_chart(frame, chunks[3], dashboard);
    render_status(frame, chunks[4], dashboard, state);

    if state.input_mode == InputMode::Searching {
        render_search_popup(frame, dashboard, state);
    }
    if let Some(message) = &state.popup_message {
        render_popup(frame, message, Color::Cyan, " Info ");
    }
    if let Some(message) = &state.error_popup {
        render_popup(frame, message, Color::Red, " Error (Enter/Esc to close) ");
    }
}

fn metrics_height(dashboard: &Dashboard) -> u16 {
    if dashboard.is_comparison() {
        (dashboard.quotes().len() as u16 + 3).max(4)
    } else {
        4
    }
}

fn change_color(quote: &NormalizedQuote) -> Color {
    match quote.is_gain() {
        Some(true) => Color::Green,
        Some(false) => Color::Red,
        None => Color::Gray,
    }
}

fn render_input(frame: &mut Frame, area: Rect, state: &UiState) {
    let editing = state.input_mode == InputMode::Editing;
    let style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let input = Paragraph::new(state.symbol_input.as_str())
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Enter stock symbol (e.g. AAPL, TCS.NS, RELIANCE.NS) "),
        );
    frame.render_widget(input, area);

    if editing {
        frame.set_cursor_position((
            area.x + state.symbol_input.chars().count() as u16 + 1,
            area.y + 1,
        ));
    }
}

fn render_metrics(frame: &mut Frame, area: Rect, quote: &NormalizedQuote) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(30),
            Constraint::Percentage(20),
        ])
        .split(area);

    let title = format!(" {} {} ", quote.region_glyph(), quote.display_name());

    let metrics = [
        ("Current Price", quote.price_label(), Color::White),
        (
            "Daily Change",
            quote.daily_change_label().clone(),
            change_color(quote),
        ),
        ("52 Week Range", quote.week52_range_label(), Color::White),
        (
            "Currency",
            format!("{} {}", quote.currency_code(), quote.region_glyph()),
            Color::White,
        ),
    ];

    for (i, (label, value, color)) in metrics.into_iter().enumerate() {
        let block = if i == 0 {
            Block::default().borders(Borders::ALL).title(title.clone())
        } else {
            Block::default().borders(Borders::ALL)
        };
        let widget = Paragraph::new(vec![
            Line::from(Span::styled(label, Style::default().fg(Color::DarkGray))),
            Line::from(Span::styled(
                value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
        ])
        .block(block);
        frame.render_widget(widget, columns[i]);
    }
}

fn render_comparison(frame: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let header_cells = ["", "Name", "Symbol", "Price", "Daily Change", "52W Range", "Period"]
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow)));
    let header = Row::new(header_cells).height(1);

    let rows = dashboard.quotes().iter().map(|quote| {
        let period_change = dashboard
            .histories()
            .iter()
            .find(|h| h.symbol() == quote.symbol())
            .and_then(PriceHistory::period_change_percent);

        let (period_str, period_color) = match period_change {
            Some(p) if p >= Decimal::ZERO => (format!("+{:.2}%", p.round_dp(2)), Color::Green),
            Some(p) => (format!("{:.2}%", p.round_dp(2)), Color::Red),
            None => (NOT_AVAILABLE.to_string(), Color::Gray),
        };

        Row::new([
            Cell::from(quote.region_glyph().clone()),
            Cell::from(quote.display_name().clone()),
            Cell::from(quote.symbol().clone()),
            Cell::from(quote.price_label()),
            Cell::from(quote.daily_change_label().clone())
                .style(Style::default().fg(change_color(quote))),
            Cell::from(quote.week52_range_label()),
            Cell::from(period_str).style(Style::default().fg(period_color)),
        ])
        .height(1)
    });

    let widths = [
        Constraint::Length(4),
        Constraint::Min(20),
        Constraint::Length(12),
        Constraint::Length(14),
        Constraint::Length(20),
        Constraint::Length(26),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title(" Comparison ").borders(Borders::ALL));

    frame.render_widget(table, area);
}

fn render_chart(frame: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let title = format!(" Price History ({}) ", dashboard.period());
    let histories: Vec<&PriceHistory> =
        dashboard.histories().iter().filter(|h| !h.is_empty()).collect();

    if histories.is_empty() {
        let no_data = Paragraph::new("No historical data available")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(no_data, area);
        return;
    }

    let data: Vec<Vec<(f64, f64)>> = histories.iter().map(|h| h.chart_data()).collect();

    let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
    let mut max_x: f64 = 1.0;
    for series in &data {
        for &(x, y) in series {
            min_y = min_y.min(y);
            max_y = max_y.max(y);
            max_x = max_x.max(x);
        }
    }
    if !min_y.is_finite() || !max_y.is_finite() {
        (min_y, max_y) = (0.0, 1.0);
    }
    let (min_y, max_y) = (min_y * 0.98, max_y * 1.02);

    let datasets: Vec<Dataset> = histories
        .iter()
        .zip(data.iter())
        .enumerate()
        .map(|(i, (history, series))| {
            Dataset::default()
                .name(history.symbol().clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(SERIES_COLORS[i % SERIES_COLORS.len()]))
                .data(series)
        })
        .collect();

    let longest = histories
        .iter()
        .max_by_key(|h| h.points().len())
        .copied()
        .unwrap_or(histories[0]);
    let x_labels = vec![
        longest
            .first()
            .map(|p| p.date().format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        longest
            .last()
            .map(|p| p.date().format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
    ];

    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title(title))
        .x_axis(
            Axis::default()
                .title("Date")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, max_x])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Close")
                .style(Style::default().fg(Color::Gray))
                .bounds([min_y, max_y])
                .labels(vec![format!("{:.1}", min_y), format!("{:.1}", max_y)]),
        );

    frame.render_widget(chart, area);
}

fn render_status(frame: &mut Frame, area: Rect, dashboard: &Dashboard, state: &UiState) {
    let market_color = if state.market_status.is_open() {
        Color::Green
    } else {
        Color::Red
    };

    let mut spans = vec![
        Span::styled(state.clock_label.clone(), Style::default().fg(market_color)),
        Span::raw(format!("  |  Period: {}", dashboard.period())),
    ];
    if let Some(message) = &state.status_message {
        spans.push(Span::raw(format!("  |  {}", message)));
    }

    let help = "/ symbols  s search  Tab period  r refresh  e export  q quit";
    let status = Paragraph::new(vec![Line::from(spans)])
        .block(Block::default().borders(Borders::ALL).title(help));
    frame.render_widget(status, area);
}

fn render_search_popup(frame: &mut Frame, dashboard: &Dashboard, state: &mut UiState) {
    let area = centered_rect(60, 60, frame.area());
    frame.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let input = Paragraph::new(state.search_input.as_str())
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search company (Enter to search, Esc to close) "),
        );
    frame.render_widget(input, chunks[0]);

    let items: Vec<ListItem> = if dashboard.search_results().is_empty() {
        vec![ListItem::new("No matches")]
    } else {
        dashboard
            .search_results()
            .iter()
            .map(|m| ListItem::new(m.label()))
            .collect()
    };

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Results "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    frame.render_stateful_widget(list, chunks[1], &mut state.search_state);
}

fn render_popup(frame: &mut Frame, message: &str, color: Color, title: &str) {
    let area = centered_rect(50, 20, frame.area());
    frame.render_widget(Clear, area);

    let popup = Paragraph::new(message.to_string())
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    frame.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

//! 页面布局：标题栏、事件列表、状态栏

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;

use super::components;
use super::pages;
use super::theme::colors;

pub fn render(app: &App, frame: &mut Frame) {
    let [title, list, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_title_bar(app, frame, title);
    render_event_list(app, frame, list);
    components::statusbar::render(app, frame, status);
}

fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let texts = t();
    let mut text = format!(" {} v{}", texts.common.app_name, env!("CARGO_PKG_VERSION"));

    let route = app.trip_events.route();
    if !route.is_empty() {
        text.push_str(&format!(
            "  │  {}  │  {} €{}",
            route.join(" → "),
            texts.events.total,
            app.trip_events.total_cost()
        ));
    }
    let title = Paragraph::new(text).style(Style::default().bg(c.accent).fg(c.on_accent));
    frame.render_widget(title, area);
}

fn render_event_list(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let border_style = if app.trip_events.is_editing() {
        Style::default().fg(c.focus)
    } else {
        Style::default().fg(c.frame)
    };

    let block = Block::default()
        .title(format!(" {} ({}) ", t().events.title, app.trip_events.len()))
        .title_style(Style::default().fg(c.text).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    pages::trip_events::render(app, frame, inner_area);
}

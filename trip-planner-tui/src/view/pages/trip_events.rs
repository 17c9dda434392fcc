//! 行程事件列表页

use std::rc::Rc;

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::component::ElementRef;
use crate::i18n::t;
use crate::model::App;
use crate::view::theme::colors;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    if app.trip_events.is_empty() {
        let message = if app.trip_events.loading {
            vec![Line::from(texts.common.loading)]
        } else {
            vec![
                Line::from(texts.events.no_events),
                Line::from(""),
                Line::styled(texts.events.no_events_hint, Style::default().fg(c.dim)),
            ]
        };
        let paragraph = Paragraph::new(message).alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    let selected = app
        .trip_events
        .presenters
        .get(app.trip_events.selected)
        .and_then(|p| p.mounted_element())
        .cloned();

    let (lines, selected_range) = collect_lines(&app.container.elements(), selected.as_ref());
    let scroll = scroll_offset(selected_range, area.height);

    let paragraph = Paragraph::new(lines).scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

/// 拼接所有挂载元素的行，选中元素加上标记；返回选中元素所占的行范围
fn collect_lines(
    elements: &[ElementRef],
    selected: Option<&ElementRef>,
) -> (Vec<Line<'static>>, Option<(usize, usize)>) {
    let c = colors();
    let mut lines = Vec::new();
    let mut selected_range = None;

    for element in elements {
        let is_selected = selected.is_some_and(|s| Rc::ptr_eq(s, element));
        let start = lines.len();
        let (marker, marker_style) = if is_selected {
            ("▌", Style::default().fg(c.accent).bg(c.marker_bg))
        } else {
            (" ", Style::default())
        };

        for line in element.borrow().lines() {
            let mut spans = vec![Span::styled(marker, marker_style)];
            spans.extend(line.spans.iter().cloned());
            lines.push(Line::from(spans));
        }
        if is_selected {
            selected_range = Some((start, lines.len()));
        }
        lines.push(Line::from(""));
    }

    (lines, selected_range)
}

/// 让选中元素尽量完整地出现在可视区域内
fn scroll_offset(selected_range: Option<(usize, usize)>, height: u16) -> u16 {
    let Some((start, end)) = selected_range else {
        return 0;
    };
    let height = usize::from(height);
    let offset = if end > height {
        (end - height).min(start)
    } else {
        0
    };
    u16::try_from(offset).unwrap_or(u16::MAX)
}

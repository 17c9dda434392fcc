//! 状态栏：左侧按键提示，右侧最近一条状态消息

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

const SEPARATOR: &str = " · ";

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let separator = Style::default().fg(colors().on_accent);

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, desc)) in get_hints(app).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(SEPARATOR, separator));
        }
        spans.push(Span::styled(key, Styles::hint_key()));
        spans.push(Span::styled(format!(" {desc}"), Styles::hint_desc()));
    }

    if let Some(msg) = app.status_message.as_deref() {
        spans.push(Span::styled("  │  ", separator));
        spans.push(Span::styled(
            msg.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Styles::statusbar()),
        area,
    );
}

fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;

    let Some(editing) = app.trip_events.editing() else {
        return vec![
            (keys.arrows_ud, actions.select),
            (keys.enter, actions.edit),
            ("Alt+r", actions.reload),
            ("q", texts.common.quit),
        ];
    };

    // 保存 / 删除请求进行中，表单不接受输入
    if editing.form_flags().is_some_and(|f| f.is_disabled) {
        return vec![(keys.esc, actions.cancel)];
    }

    vec![
        (keys.tab, actions.next_field),
        (keys.arrows_lr, actions.change_option),
        (keys.space, actions.toggle_offer),
        (keys.enter, actions.save),
        ("Alt+d", actions.delete),
        ("Alt+c", actions.close),
        (keys.esc, actions.cancel),
    ]
}

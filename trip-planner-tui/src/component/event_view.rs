//! 只读行组件
//!
//! 一行摘要（日期、类型、目的地、时间段、价格）加上已选附加项。

use std::time::{Duration, Instant};

use crossterm::event::KeyEvent;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use trip_planner_core::types::{format_duration, TripEvent};

use super::shake::Shake;
use super::{
    create_element, Component, ElementRef, EventCommon, EventComponent, EventIntent, EventViewProps,
};
use crate::event::DefaultKeymap;
use crate::i18n::t;
use crate::view::theme::colors;

/// 只读行
pub struct EventView {
    event: TripEvent,
    event_common: EventCommon,
    shake: Option<Shake>,
    shake_duration: Duration,
    element: ElementRef,
}

impl EventView {
    pub fn new(props: EventViewProps, shake_duration: Duration) -> Self {
        let mut view = Self {
            event: props.event,
            event_common: props.event_common,
            shake: None,
            shake_duration,
            element: create_element(Vec::new()),
        };
        view.rerender(Instant::now());
        view
    }

    fn rerender(&mut self, now: Instant) {
        let lines = self.template(now);
        self.element.borrow_mut().set_lines(lines);
    }

    fn template(&self, now: Instant) -> Vec<Line<'static>> {
        let c = colors();
        let texts = t();
        let event = &self.event;

        let indent = " ".repeat(usize::from(self.shake.map_or(0, |s| s.offset(now))));
        let accent = if self.shake.is_some() { c.alert } else { c.text };

        let destination = self
            .event_common
            .destination_by_id(&event.destination)
            .map_or(texts.events.unknown_destination, |d| d.name.as_str())
            .to_string();
        let available = self.event_common.offers_for(event.event_type);

        let mut summary = vec![
            Span::raw(indent.clone()),
            Span::styled(
                event.date_from.format("%b %d").to_string().to_uppercase(),
                Style::default().fg(c.dim),
            ),
            Span::raw("  "),
            Span::raw(format!("{} ", event.event_type.icon())),
            Span::styled(
                format!("{} {}", event.event_type.label(), destination),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!(
                    "{} — {}",
                    event.date_from.format("%H:%M"),
                    event.date_to.format("%H:%M")
                ),
                Style::default().fg(c.text),
            ),
            Span::styled(
                format!("  ({})", format_duration(event.duration())),
                Style::default().fg(c.dim),
            ),
            Span::styled(
                format!("  €{}", event.total_price(available)),
                Style::default().fg(c.price),
            ),
        ];
        if event.is_favorite {
            summary.push(Span::styled("  ★", Style::default().fg(c.favorite)));
        }

        let mut lines = vec![Line::from(summary)];
        lines.extend(
            available
                .iter()
                .filter(|offer| event.has_offer(&offer.id))
                .map(|offer| {
                    Line::styled(
                        format!(
                            "{indent}        {} {}  €{}",
                            texts.events.offers_prefix, offer.title, offer.price
                        ),
                        Style::default().fg(c.dim),
                    )
                }),
        );
        lines
    }
}

impl Component for EventView {
    fn element(&self) -> &ElementRef {
        &self.element
    }

    fn tick(&mut self, now: Instant) {
        let Some(shake) = self.shake else {
            return;
        };
        if shake.is_finished(now) {
            self.shake = None;
        }
        self.rerender(now);
    }
}

impl EventComponent for EventView {
    fn handle_key(&mut self, key: &KeyEvent) -> Option<EventIntent> {
        if DefaultKeymap::OPEN_EDITOR.matches(key) || DefaultKeymap::ACTION_EDIT.matches(key) {
            Some(EventIntent::EditClick)
        } else {
            None
        }
    }

    fn shake(&mut self) {
        self.shake = Some(Shake::start(self.shake_duration));
        self.rerender(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::test_support::{key, sample_common, sample_event};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn view() -> EventView {
        EventView::new(
            EventViewProps {
                event: sample_event(),
                event_common: sample_common(),
            },
            Duration::from_millis(100),
        )
    }

    fn text(view: &EventView) -> String {
        view.element()
            .borrow()
            .lines()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn renders_summary_and_selected_offers() {
        let view = view();
        let rendered = text(&view);

        assert!(rendered.contains("MAR 18"));
        assert!(rendered.contains("Flight Amsterdam"));
        assert!(rendered.contains("10:30 — 11:00"));
        assert!(rendered.contains("(30M)"));
        // 160 基础价 + 30 已选附加项
        assert!(rendered.contains("€190"));
        assert!(rendered.contains("Add luggage"));
        assert!(!rendered.contains("Switch to comfort"));
    }

    #[test]
    fn enter_and_alt_e_request_edit() {
        let mut view = view();
        assert_eq!(
            view.handle_key(&key(KeyCode::Enter, KeyModifiers::NONE)),
            Some(EventIntent::EditClick)
        );
        assert_eq!(
            view.handle_key(&key(KeyCode::Char('e'), KeyModifiers::ALT)),
            Some(EventIntent::EditClick)
        );
        assert_eq!(view.handle_key(&key(KeyCode::Char('x'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn shake_indents_until_finished() {
        let mut view = view();
        let still = text(&view);

        view.shake();
        assert!(view.shake.is_some());

        view.tick(Instant::now() + Duration::from_secs(1));
        assert!(view.shake.is_none());
        assert_eq!(text(&view), still);
    }
}

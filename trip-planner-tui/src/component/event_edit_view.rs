//! 编辑表单组件
//!
//! 字段：类型、目的地、开始 / 结束时间、价格、附加项。
//! 表单状态与事件分开保存，提交时才把文本输入解析回 `TripEvent`。

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, NaiveDateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use trip_planner_core::traits::TripDataClient;
use trip_planner_core::types::{Destination, Offer, TripEvent};
use unicode_width::UnicodeWidthStr;

use super::shake::Shake;
use super::{
    create_element, Component, ElementRef, EventCommon, EventEditComponent, EventEditProps,
    FormFlags, FormIntent, FormStatePatch, OnShakeComplete, StatefulElement,
};
use crate::event::DefaultKeymap;
use crate::i18n::t;
use crate::view::theme::{colors, Styles};

/// 表单中日期的输入格式
const DATE_INPUT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// 字段标签列宽（按显示宽度计算）
const LABEL_WIDTH: usize = 12;

/// 表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormField {
    EventType,
    Destination,
    DateFrom,
    DateTo,
    Price,
    Offers,
}

impl FormField {
    const ALL: [FormField; 6] = [
        FormField::EventType,
        FormField::Destination,
        FormField::DateFrom,
        FormField::DateTo,
        FormField::Price,
        FormField::Offers,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// 表单状态
#[derive(Debug, Clone)]
struct FormState {
    /// 类型、目的地、附加项的当前选择
    event: TripEvent,
    /// 当前类型可选的附加项
    offers: Vec<Offer>,
    destination: Option<Destination>,
    date_from_input: String,
    date_to_input: String,
    price_input: String,
    focus: FormField,
    offer_cursor: usize,
    error: Option<&'static str>,
    flags: FormFlags,
}

impl FormState {
    fn from_event(event: TripEvent, offers: Vec<Offer>, destination: Option<Destination>) -> Self {
        Self {
            date_from_input: format_date(event.date_from),
            date_to_input: format_date(event.date_to),
            price_input: event.base_price.to_string(),
            event,
            offers,
            destination,
            focus: FormField::EventType,
            offer_cursor: 0,
            error: None,
            flags: FormFlags::default(),
        }
    }

    /// 把文本输入解析回事件
    fn to_event(&self) -> Result<TripEvent, &'static str> {
        let texts = t();
        let date_from = parse_date(&self.date_from_input).ok_or(texts.form.invalid_date)?;
        let date_to = parse_date(&self.date_to_input).ok_or(texts.form.invalid_date)?;
        let base_price = self
            .price_input
            .parse::<u32>()
            .map_err(|_| texts.form.invalid_price)?;
        let destination = self
            .destination
            .as_ref()
            .ok_or(texts.form.missing_destination)?;

        Ok(TripEvent {
            destination: destination.id.clone(),
            date_from,
            date_to,
            base_price,
            ..self.event.clone()
        })
    }
}

fn format_date(date: DateTime<Utc>) -> String {
    date.format(DATE_INPUT_FORMAT).to_string()
}

fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(input.trim(), DATE_INPUT_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

/// 编辑表单
pub struct EventEditView {
    state: FormState,
    data_client: Arc<dyn TripDataClient>,
    event_common: EventCommon,
    shake: Option<Shake>,
    on_shake_complete: Vec<OnShakeComplete>,
    shake_duration: Duration,
    element: ElementRef,
}

impl EventEditView {
    pub fn new(props: EventEditProps, shake_duration: Duration) -> Self {
        let mut view = Self {
            state: FormState::from_event(props.event, props.offers, props.destination),
            data_client: props.data_client,
            event_common: props.event_common,
            shake: None,
            on_shake_complete: Vec::new(),
            shake_duration,
            element: create_element(Vec::new()),
        };
        view.rerender(Instant::now());
        view
    }

    /// 当前获得焦点的字段
    #[cfg(test)]
    fn focus(&self) -> FormField {
        self.state.focus
    }

    fn rerender(&mut self, now: Instant) {
        let lines = self.template(now);
        self.element.borrow_mut().set_lines(lines);
    }

    // ========== 输入处理 ==========

    fn handle_input(&mut self, key: &KeyEvent) -> Option<FormIntent> {
        if DefaultKeymap::FORM_SUBMIT.matches(key) {
            return self.submit();
        }
        if DefaultKeymap::FORM_CLOSE.matches(key) {
            return Some(FormIntent::Close);
        }
        if DefaultKeymap::FORM_DELETE.matches(key) {
            return Some(FormIntent::Delete(self.state.event.clone()));
        }

        match key.code {
            KeyCode::Tab => self.state.focus = self.state.focus.next(),
            KeyCode::BackTab => self.state.focus = self.state.focus.prev(),
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::Left => self.cycle(false),
            KeyCode::Right => self.cycle(true),
            KeyCode::Char(' ') if self.state.focus == FormField::Offers => self.toggle_offer(),
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::ALT | KeyModifiers::CONTROL) =>
            {
                self.input_char(ch);
            }
            KeyCode::Backspace => {
                if let Some(input) = self.focused_input() {
                    input.pop();
                }
            }
            _ => {}
        }
        None
    }

    fn submit(&mut self) -> Option<FormIntent> {
        match self.state.to_event() {
            Ok(event) => {
                self.state.error = None;
                Some(FormIntent::Submit(event))
            }
            Err(message) => {
                self.state.error = Some(message);
                None
            }
        }
    }

    fn move_up(&mut self) {
        if self.state.focus == FormField::Offers && self.state.offer_cursor > 0 {
            self.state.offer_cursor -= 1;
        } else {
            self.state.focus = self.state.focus.prev();
        }
    }

    fn move_down(&mut self) {
        if self.state.focus == FormField::Offers
            && self.state.offer_cursor + 1 < self.state.offers.len()
        {
            self.state.offer_cursor += 1;
        } else {
            self.state.focus = self.state.focus.next();
        }
    }

    /// ←→：切换类型或目的地
    fn cycle(&mut self, forward: bool) {
        match self.state.focus {
            FormField::EventType => {
                let current = self.state.event.event_type;
                let event_type = if forward { current.next() } else { current.prev() };
                self.state.event.event_type = event_type;
                self.state.event.offers.clear();
                self.state.offers = self.data_client.offers_by_type(event_type);
                self.state.offer_cursor = 0;
            }
            FormField::Destination => {
                let names: Vec<&str> = self
                    .event_common
                    .destinations
                    .iter()
                    .map(|d| d.name.as_str())
                    .collect();
                if names.is_empty() {
                    return;
                }
                let current = self
                    .state
                    .destination
                    .as_ref()
                    .and_then(|d| names.iter().position(|name| *name == d.name));
                let index = match (current, forward) {
                    (None, _) => 0,
                    (Some(i), true) => (i + 1) % names.len(),
                    (Some(i), false) => (i + names.len() - 1) % names.len(),
                };
                self.state.destination = self.data_client.destination_by_name(names[index]);
                if let Some(destination) = &self.state.destination {
                    self.state.event.destination = destination.id.clone();
                }
            }
            _ => {}
        }
    }

    fn toggle_offer(&mut self) {
        let Some(offer) = self.state.offers.get(self.state.offer_cursor) else {
            return;
        };
        let selected = &mut self.state.event.offers;
        if let Some(pos) = selected.iter().position(|id| *id == offer.id) {
            selected.remove(pos);
        } else {
            selected.push(offer.id.clone());
        }
    }

    fn input_char(&mut self, ch: char) {
        let is_price = self.state.focus == FormField::Price;
        if is_price && !ch.is_ascii_digit() {
            return;
        }
        if let Some(input) = self.focused_input() {
            input.push(ch);
        }
    }

    fn focused_input(&mut self) -> Option<&mut String> {
        match self.state.focus {
            FormField::DateFrom => Some(&mut self.state.date_from_input),
            FormField::DateTo => Some(&mut self.state.date_to_input),
            FormField::Price => Some(&mut self.state.price_input),
            _ => None,
        }
    }

    // ========== 渲染 ==========

    fn template(&self, now: Instant) -> Vec<Line<'static>> {
        let c = colors();
        let texts = t();
        let state = &self.state;
        let indent = " ".repeat(usize::from(self.shake.map_or(0, |s| s.offset(now))));

        let base = if state.flags.is_disabled {
            Style::default().fg(c.dim)
        } else {
            Style::default().fg(c.text)
        };
        let label_style = Style::default().fg(c.dim);
        let field_style = |field: FormField| {
            if state.focus == field && !state.flags.is_disabled {
                Style::default()
                    .fg(c.focus)
                    .add_modifier(Modifier::BOLD)
            } else {
                base
            }
        };
        let row = |label: &str, value: String, field: FormField| {
            let marker = if state.focus == field { "▸" } else { " " };
            // 中文标签占两列，不能按字符数对齐
            let padding = LABEL_WIDTH.saturating_sub(label.width());
            Line::from(vec![
                Span::raw(indent.clone()),
                Span::styled(
                    format!("{marker} {label}{}", " ".repeat(padding)),
                    label_style,
                ),
                Span::styled(value, field_style(field)),
            ])
        };
        let selector = |value: &str, field: FormField| {
            if state.focus == field {
                format!("◀ {value} ▶")
            } else {
                format!("  {value}")
            }
        };

        let destination_name = state
            .destination
            .as_ref()
            .map_or(texts.events.unknown_destination, |d| d.name.as_str());

        let mut lines = vec![
            Line::from(vec![
                Span::raw(indent.clone()),
                Span::styled(
                    format!(
                        "✎ {}: {} {}",
                        texts.form.title,
                        state.event.event_type.label(),
                        destination_name
                    ),
                    Style::default()
                        .fg(if self.shake.is_some() { c.alert } else { c.accent })
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            row(
                texts.form.event_type,
                selector(state.event.event_type.label(), FormField::EventType),
                FormField::EventType,
            ),
            row(
                texts.form.destination,
                selector(destination_name, FormField::Destination),
                FormField::Destination,
            ),
            row(texts.form.date_from, state.date_from_input.clone(), FormField::DateFrom),
            row(texts.form.date_to, state.date_to_input.clone(), FormField::DateTo),
            row(texts.form.price, state.price_input.clone(), FormField::Price),
        ];

        if state.offers.is_empty() {
            lines.push(row(texts.form.offers, texts.form.no_offers.to_string(), FormField::Offers));
        } else {
            for (i, offer) in state.offers.iter().enumerate() {
                let check = if state.event.has_offer(&offer.id) { "[x]" } else { "[ ]" };
                let cursor = state.focus == FormField::Offers && i == state.offer_cursor;
                let value = format!(
                    "{}{check} {} +€{}",
                    if cursor { "›" } else { " " },
                    offer.title,
                    offer.price
                );
                let label = if i == 0 { texts.form.offers } else { "" };
                lines.push(row(label, value, FormField::Offers));
            }
        }

        if let Some(destination) = &state.destination {
            if !destination.description.is_empty() {
                lines.push(Line::styled(
                    format!("{indent}  {}", destination.description),
                    label_style,
                ));
            }
            if !destination.pictures.is_empty() {
                let pictures: Vec<&str> = destination
                    .pictures
                    .iter()
                    .map(|p| p.description.as_str())
                    .collect();
                lines.push(Line::styled(
                    format!("{indent}  {}: {}", texts.form.pictures, pictures.join(", ")),
                    label_style,
                ));
            }
        }

        if let Some(error) = state.error {
            lines.push(Line::styled(
                format!("{indent}  ! {error}"),
                Style::default().fg(c.alert),
            ));
        }

        let save_label = if state.flags.is_saving {
            texts.form.saving
        } else {
            texts.form.save
        };
        let delete_label = if state.flags.is_deleting {
            texts.form.deleting
        } else {
            texts.form.delete
        };
        let button = |key: &str, label: &str| {
            vec![
                Span::styled(format!("[{key}] "), Styles::hint_key()),
                Span::styled(label.to_string(), base),
                Span::raw("   "),
            ]
        };
        let mut buttons = vec![Span::raw(format!("{indent}  "))];
        buttons.extend(button(texts.hints.keys.enter, save_label));
        buttons.extend(button("Alt+d", delete_label));
        buttons.extend(button("Alt+c", texts.form.close));
        buttons.extend(button(texts.hints.keys.esc, texts.hints.actions.cancel));
        lines.push(Line::from(buttons));

        lines
    }
}

impl Component for EventEditView {
    fn element(&self) -> &ElementRef {
        &self.element
    }

    fn tick(&mut self, now: Instant) {
        let Some(shake) = self.shake else {
            return;
        };
        if shake.is_finished(now) {
            self.shake = None;
            for on_complete in std::mem::take(&mut self.on_shake_complete) {
                on_complete(self);
            }
        }
        self.rerender(now);
    }
}

impl StatefulElement for EventEditView {
    fn update_element(&mut self, patch: FormStatePatch) {
        patch.apply(&mut self.state.flags);
        self.rerender(Instant::now());
    }
}

impl EventEditComponent for EventEditView {
    fn handle_key(&mut self, key: &KeyEvent) -> Option<FormIntent> {
        if self.state.flags.is_disabled {
            return None;
        }
        let intent = self.handle_input(key);
        self.rerender(Instant::now());
        intent
    }

    fn reset(&mut self, event: &TripEvent) {
        self.state = FormState::from_event(
            event.clone(),
            self.data_client.offers_by_type(event.event_type),
            self.data_client.destination_by_id(&event.destination),
        );
        self.rerender(Instant::now());
    }

    fn shake(&mut self, on_complete: OnShakeComplete) {
        self.shake = Some(Shake::start(self.shake_duration));
        self.on_shake_complete.push(on_complete);
        self.rerender(Instant::now());
    }

    fn flags(&self) -> FormFlags {
        self.state.flags
    }
}

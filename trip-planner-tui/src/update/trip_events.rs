//! 行程事件列表的更新逻辑
//!
//! 这里是 presenter 的上游：创建 / 销毁 presenter，按键路由，
//! 收到数据变更请求后调用后端，再把结果反映回对应的 presenter。

use std::rc::Rc;
use std::sync::Arc;

use crossterm::event::KeyEvent;
use trip_planner_core::types::{EventSnapshot, TripCatalog, TripEvent, UpdateType, UserAction};
use trip_planner_core::CoreError;

use crate::i18n::t;
use crate::message::{AppMessage, EventsMessage};
use crate::model::App;
use crate::presenter::{EventPresenter, KeyDownEvent, PresenterConfig};

/// 处理行程事件列表消息
pub fn update(app: &mut App, msg: EventsMessage) {
    match msg {
        // ========== 输入 ==========
        EventsMessage::Key(key) => route_key(app, &key),
        EventsMessage::SelectPrev => app.trip_events.select_prev(),
        EventsMessage::SelectNext => app.trip_events.select_next(),
        EventsMessage::Reload => reload(app),

        // ========== presenter 回调 ==========
        EventsMessage::ModeChanged { source } => handle_mode_changed(app, &source),
        EventsMessage::DataChange {
            action,
            update_type,
            event,
        } => handle_data_change(app, action, update_type, event),

        // ========== 后台任务结果 ==========
        EventsMessage::Loaded(result) => handle_loaded(app, result),
        EventsMessage::Saved {
            id,
            update_type,
            result,
        } => handle_saved(app, &id, update_type, result),
        EventsMessage::Deleted { id, result } => handle_deleted(app, &id, result),
    }
}

/// 按键路由
///
/// 先交给持有文档级监听的 presenter；没有被阻止默认处理时，
/// 再交给编辑中的 presenter，最后交给当前选中项。
fn route_key(app: &mut App, key: &KeyEvent) {
    let mut event = KeyDownEvent::new(*key);
    for owner in app.document.listeners() {
        if let Some(presenter) = app.trip_events.find_mut(&owner) {
            presenter.handle_key_down(&mut event);
        }
    }
    if event.is_default_prevented() {
        return;
    }

    let events = &mut app.trip_events;
    if let Some(presenter) = events.editing_mut() {
        presenter.handle_input(key);
    } else if let Some(presenter) = events.selected_mut() {
        presenter.handle_input(key);
    }
}

/// 同一时间只允许一个事件处于编辑模式
fn handle_mode_changed(app: &mut App, source: &str) {
    let events = &mut app.trip_events;
    for presenter in &mut events.presenters {
        if presenter.event_id() != Some(source) {
            presenter.reset_view();
        }
    }
    if let Some(index) = events.index_of(source) {
        events.selected = index;
    }
}

fn handle_data_change(
    app: &mut App,
    action: UserAction,
    update_type: UpdateType,
    event: TripEvent,
) {
    let Some(presenter) = app.trip_events.find_mut(&event.id) else {
        log::warn!("data change for unknown event {}", event.id);
        return;
    };

    match action {
        UserAction::UpdateEvent => {
            presenter.set_saving();
            app.set_status(t().status_bar.saving);
            app.backend.update_event(event, update_type);
        }
        UserAction::DeleteEvent => {
            presenter.set_deleting();
            app.set_status(t().status_bar.deleting);
            app.backend.delete_event(event.id);
        }
    }
}

fn reload(app: &mut App) {
    app.trip_events.loading = true;
    app.set_status(t().status_bar.reloading);
    app.backend.load();
}

fn handle_loaded(
    app: &mut App,
    result: Result<(Arc<TripCatalog>, Vec<EventSnapshot>), CoreError>,
) {
    app.trip_events.loading = false;

    let (catalog, snapshots) = match result {
        Ok(loaded) => loaded,
        Err(e) => {
            log::error!("Failed to load events: {e}");
            app.set_status(format!("{}: {e}", t().status_bar.load_failed));
            return;
        }
    };

    app.trip_events.clear();
    for snapshot in snapshots {
        let mut presenter = create_presenter(app, &catalog, &snapshot.event.id);
        presenter.init(snapshot);
        app.trip_events.presenters.push(presenter);
    }
    app.trip_events.catalog = Some(catalog);
    app.trip_events.clamp_selection();
    app.set_status(t().status_bar.ready);
}

fn handle_saved(
    app: &mut App,
    id: &str,
    update_type: UpdateType,
    result: Result<EventSnapshot, CoreError>,
) {
    match result {
        Ok(_) if update_type.reloads_list() => reload(app),
        Ok(snapshot) => {
            if let Some(presenter) = app.trip_events.find_mut(id) {
                presenter.init(snapshot);
            }
            app.set_status(t().status_bar.saved);
        }
        Err(e) => {
            log_failure("save", id, &e);
            if let Some(presenter) = app.trip_events.find_mut(id) {
                presenter.set_aborting();
            }
            app.set_status(format!("{}: {e}", t().status_bar.save_failed));
        }
    }
}

fn handle_deleted(app: &mut App, id: &str, result: Result<(), CoreError>) {
    match result {
        Ok(()) => {
            app.trip_events.remove(id);
            app.set_status(t().status_bar.deleted);
        }
        Err(e) => {
            log_failure("delete", id, &e);
            if let Some(presenter) = app.trip_events.find_mut(id) {
                presenter.set_aborting();
            }
            app.set_status(format!("{}: {e}", t().status_bar.delete_failed));
        }
    }
}

fn log_failure(operation: &str, id: &str, error: &CoreError) {
    if error.is_expected() {
        log::warn!("Failed to {operation} event {id}: {error}");
    } else {
        log::error!("Failed to {operation} event {id}: {error}");
    }
}

/// 创建一个挂载到 app 容器上的 presenter，回调把消息发进 app 的消息通道
fn create_presenter(app: &App, catalog: &Arc<TripCatalog>, id: &str) -> EventPresenter {
    let mode_tx = app.tx.clone();
    let source = id.to_string();
    let data_tx = app.tx.clone();

    EventPresenter::new(PresenterConfig {
        container: app.container.clone(),
        event_common: Arc::clone(catalog),
        on_mode_change: Box::new(move || {
            let msg = EventsMessage::ModeChanged {
                source: source.clone(),
            };
            if mode_tx.send(AppMessage::Events(msg)).is_err() {
                log::debug!("message channel closed");
            }
        }),
        on_data_change: Box::new(
            move |action: UserAction, update_type: UpdateType, event: TripEvent| {
                let msg = EventsMessage::DataChange {
                    action,
                    update_type,
                    event,
                };
                if data_tx.send(AppMessage::Events(msg)).is_err() {
                    log::debug!("message channel closed");
                }
            },
        ),
        data_client: app.backend.data_client(),
        factory: Rc::clone(&app.factory),
        document: app.document.clone(),
    })
}

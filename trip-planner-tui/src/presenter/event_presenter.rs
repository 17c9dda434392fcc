//! 单个行程事件的 presenter
//!
//! 负责一条事件的只读行 / 编辑表单互斥切换，把用户意图转成上游的
//! 数据变更请求，并把上游的保存中 / 删除中 / 失败状态反映到组件上。

use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use trip_planner_core::traits::TripDataClient;
use trip_planner_core::types::{EventSnapshot, TripEvent, UpdateType, UserAction};

use super::document::{Document, KeyDownEvent, KeyDownListener};
use crate::component::{
    ComponentFactory, Container, ElementRef, EventCommon, EventComponent, EventEditComponent,
    EventEditProps, EventIntent, EventViewProps, FormFlags, FormIntent, FormStatePatch,
    StatefulElement,
};

/// 当前挂载的是哪个组件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// 只读行
    #[default]
    Default,
    /// 编辑表单
    Editing,
}

/// 进入编辑模式时的回调
pub type OnModeChange = Box<dyn FnMut()>;

/// 请求上游持久化的回调
pub type OnDataChange = Box<dyn FnMut(UserAction, UpdateType, TripEvent)>;

/// presenter 构造参数
pub struct PresenterConfig {
    pub container: Container,
    pub event_common: EventCommon,
    pub on_mode_change: OnModeChange,
    pub on_data_change: OnDataChange,
    pub data_client: Arc<dyn TripDataClient>,
    pub factory: Rc<dyn ComponentFactory>,
    pub document: Document,
}

/// 一次 `init` 创建的一对组件
struct Components {
    item: TripEvent,
    view: Box<dyn EventComponent>,
    form: Box<dyn EventEditComponent>,
}

/// 行程事件 presenter
pub struct EventPresenter {
    container: Container,
    event_common: EventCommon,
    data_client: Arc<dyn TripDataClient>,
    factory: Rc<dyn ComponentFactory>,
    document: Document,
    on_mode_change: OnModeChange,
    on_data_change: OnDataChange,

    components: Option<Components>,
    mode: Mode,
    escape_listener: Option<KeyDownListener>,
}

impl EventPresenter {
    pub fn new(config: PresenterConfig) -> Self {
        Self {
            container: config.container,
            event_common: config.event_common,
            data_client: config.data_client,
            factory: config.factory,
            document: config.document,
            on_mode_change: config.on_mode_change,
            on_data_change: config.on_data_change,
            components: None,
            mode: Mode::Default,
            escape_listener: None,
        }
    }

    // ========== 生命周期 ==========

    /// 用新数据重建两个组件
    ///
    /// 首次调用把只读行挂到容器末尾；之后的调用原位替换当前挂载的组件。
    /// 编辑中收到新数据时直接回到只读行，未保存的修改被丢弃。
    pub fn init(&mut self, snapshot: EventSnapshot) {
        let EventSnapshot {
            event,
            offers,
            destination,
        } = snapshot;

        let view = self.factory.create_view(EventViewProps {
            event: event.clone(),
            event_common: Arc::clone(&self.event_common),
        });
        let form = self.factory.create_form(EventEditProps {
            event: event.clone(),
            offers,
            destination,
            data_client: Arc::clone(&self.data_client),
            event_common: Arc::clone(&self.event_common),
        });
        let next = Components { item: event, view, form };

        let Some(prev) = self.components.take() else {
            self.container.render(&*next.view);
            self.components = Some(next);
            return;
        };

        match self.mode {
            Mode::Default => {
                self.container.replace(&*next.view, &*prev.view);
            }
            Mode::Editing => {
                self.container.replace(&*next.view, &*prev.form);
                self.escape_listener = None;
                self.mode = Mode::Default;
            }
        }
        log::debug!("presenter {}: re-initialised", next.item.id);

        self.container.remove(&*prev.view);
        self.container.remove(&*prev.form);
        self.components = Some(next);
    }

    /// 卸载并释放两个组件
    pub fn destroy(mut self) {
        if let Some(components) = self.components.take() {
            self.container.remove(&*components.view);
            self.container.remove(&*components.form);
            log::debug!("presenter {}: destroyed", components.item.id);
        }
        self.escape_listener = None;
    }

    /// 编辑中则丢弃修改并回到只读行
    pub fn reset_view(&mut self) {
        if self.mode != Mode::Editing {
            return;
        }
        if let Some(components) = self.components.as_mut() {
            components.form.reset(&components.item);
        }
        self.replace_form_to_event();
    }

    // ========== 上游状态反馈 ==========

    pub fn set_saving(&mut self) {
        self.patch_form(FormStatePatch::SAVING);
    }

    pub fn set_deleting(&mut self) {
        self.patch_form(FormStatePatch::DELETING);
    }

    /// 上游请求失败：抖动当前组件；表单在抖动结束后才恢复可交互
    pub fn set_aborting(&mut self) {
        let Some(components) = self.components.as_mut() else {
            return;
        };
        match self.mode {
            Mode::Default => components.view.shake(),
            Mode::Editing => components.form.shake(Box::new(|element: &mut dyn StatefulElement| {
                element.update_element(FormStatePatch::IDLE);
            })),
        }
    }

    fn patch_form(&mut self, patch: FormStatePatch) {
        if self.mode != Mode::Editing {
            return;
        }
        if let Some(components) = self.components.as_mut() {
            components.form.update_element(patch);
        }
    }

    // ========== 输入 ==========

    /// 把按键交给当前挂载的组件，并处理它返回的意图
    pub fn handle_input(&mut self, key: &KeyEvent) {
        let Some(components) = self.components.as_mut() else {
            return;
        };
        match self.mode {
            Mode::Default => {
                if let Some(EventIntent::EditClick) = components.view.handle_key(key) {
                    self.replace_event_to_form();
                }
            }
            Mode::Editing => {
                if let Some(intent) = components.form.handle_key(key) {
                    self.handle_form_intent(intent);
                }
            }
        }
    }

    /// 文档级 key-down 监听：编辑中按 Esc 取消编辑
    pub fn handle_key_down(&mut self, event: &mut KeyDownEvent) {
        if self.mode != Mode::Editing || event.key().code != KeyCode::Esc {
            return;
        }
        event.prevent_default();
        if let Some(components) = self.components.as_mut() {
            components.form.reset(&components.item);
        }
        self.replace_form_to_event();
    }

    fn handle_form_intent(&mut self, intent: FormIntent) {
        match intent {
            FormIntent::Submit(event) => {
                if let Some(components) = self.components.as_mut() {
                    components.form.reset(&event);
                }
                (self.on_data_change)(UserAction::UpdateEvent, UpdateType::Minor, event);
            }
            FormIntent::Close => {
                self.replace_form_to_event();
                if let Some(components) = self.components.as_mut() {
                    components.form.reset(&components.item);
                }
            }
            FormIntent::Delete(event) => {
                (self.on_data_change)(UserAction::DeleteEvent, UpdateType::Minor, event);
            }
        }
    }

    // ========== 模式切换 ==========

    fn replace_event_to_form(&mut self) {
        let Some(components) = self.components.as_ref() else {
            return;
        };
        self.container
            .replace(&*components.form, &*components.view);
        let listener = self
            .document
            .add_key_down_listener(components.item.id.clone());
        self.escape_listener = Some(listener);
        log::debug!("presenter {}: editing", components.item.id);

        (self.on_mode_change)();
        self.mode = Mode::Editing;
    }

    fn replace_form_to_event(&mut self) {
        let Some(components) = self.components.as_ref() else {
            return;
        };
        self.container
            .replace(&*components.view, &*components.form);
        self.escape_listener = None;
        log::debug!("presenter {}: default", components.item.id);

        self.mode = Mode::Default;
    }

    // ========== 查询 ==========

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode() == Mode::Editing
    }

    /// 最近一次 `init` 的事件
    pub fn item(&self) -> Option<&TripEvent> {
        self.components.as_ref().map(|c| &c.item)
    }

    pub fn event_id(&self) -> Option<&str> {
        self.item().map(|item| item.id.as_str())
    }

    /// 当前挂载的元素
    pub fn mounted_element(&self) -> Option<&ElementRef> {
        let components = self.components.as_ref()?;
        Some(match self.mode {
            Mode::Default => components.view.element(),
            Mode::Editing => components.form.element(),
        })
    }

    pub fn form_flags(&self) -> Option<FormFlags> {
        self.components.as_ref().map(|c| c.form.flags())
    }

    /// 推进两个组件的动画
    pub fn tick(&mut self, now: Instant) {
        if let Some(components) = self.components.as_mut() {
            components.view.tick(now);
            components.form.tick(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::time::Duration;

    use crossterm::event::KeyModifiers;

    use crate::component::test_support::{
        key, press, sample_common, sample_event, sample_event_with_id,
    };
    use crate::component::{create_element, Component, OnShakeComplete, TuiComponentFactory};

    // ===== 记录型组件替身 =====

    #[derive(Default)]
    struct Recorder {
        views_created: Vec<TripEvent>,
        forms_created: Vec<TripEvent>,
        view_shakes: usize,
        form_shakes: usize,
        resets: Vec<TripEvent>,
        patches: Vec<FormStatePatch>,
        views_dropped: usize,
        forms_dropped: usize,
    }

    type SharedRecorder = Rc<RefCell<Recorder>>;

    struct FakeView {
        element: ElementRef,
        recorder: SharedRecorder,
    }

    impl Component for FakeView {
        fn element(&self) -> &ElementRef {
            &self.element
        }

        fn tick(&mut self, _now: Instant) {}
    }

    impl Drop for FakeView {
        fn drop(&mut self) {
            self.recorder.borrow_mut().views_dropped += 1;
        }
    }

    impl Drop for FakeForm {
        fn drop(&mut self) {
            self.recorder.borrow_mut().forms_dropped += 1;
        }
    }

    impl EventComponent for FakeView {
        fn handle_key(&mut self, key: &KeyEvent) -> Option<EventIntent> {
            (key.code == KeyCode::Enter).then_some(EventIntent::EditClick)
        }

        fn shake(&mut self) {
            self.recorder.borrow_mut().view_shakes += 1;
        }
    }

    struct FakeForm {
        event: TripEvent,
        flags: FormFlags,
        pending: Vec<OnShakeComplete>,
        element: ElementRef,
        recorder: SharedRecorder,
    }

    impl Component for FakeForm {
        fn element(&self) -> &ElementRef {
            &self.element
        }

        /// 任意一次 tick 都视为抖动结束
        fn tick(&mut self, _now: Instant) {
            for on_complete in std::mem::take(&mut self.pending) {
                on_complete(self);
            }
        }
    }

    impl StatefulElement for FakeForm {
        fn update_element(&mut self, patch: FormStatePatch) {
            patch.apply(&mut self.flags);
            self.recorder.borrow_mut().patches.push(patch);
        }
    }

    impl EventEditComponent for FakeForm {
        fn handle_key(&mut self, key: &KeyEvent) -> Option<FormIntent> {
            match (key.code, key.modifiers) {
                (KeyCode::Enter, _) => {
                    let mut submitted = self.event.clone();
                    submitted.base_price += 1;
                    Some(FormIntent::Submit(submitted))
                }
                (KeyCode::Char('c'), KeyModifiers::ALT) => Some(FormIntent::Close),
                (KeyCode::Char('d'), KeyModifiers::ALT) => {
                    Some(FormIntent::Delete(self.event.clone()))
                }
                _ => None,
            }
        }

        fn reset(&mut self, event: &TripEvent) {
            self.event = event.clone();
            self.recorder.borrow_mut().resets.push(event.clone());
        }

        fn shake(&mut self, on_complete: OnShakeComplete) {
            self.recorder.borrow_mut().form_shakes += 1;
            self.pending.push(on_complete);
        }

        fn flags(&self) -> FormFlags {
            self.flags
        }
    }

    struct RecordingFactory {
        recorder: SharedRecorder,
    }

    impl ComponentFactory for RecordingFactory {
        fn create_view(&self, props: EventViewProps) -> Box<dyn EventComponent> {
            self.recorder.borrow_mut().views_created.push(props.event);
            Box::new(FakeView {
                element: create_element(Vec::new()),
                recorder: Rc::clone(&self.recorder),
            })
        }

        fn create_form(&self, props: EventEditProps) -> Box<dyn EventEditComponent> {
            self.recorder.borrow_mut().forms_created.push(props.event.clone());
            Box::new(FakeForm {
                event: props.event,
                flags: FormFlags::default(),
                pending: Vec::new(),
                element: create_element(Vec::new()),
                recorder: Rc::clone(&self.recorder),
            })
        }
    }

    // ===== 测试夹具 =====

    type Dispatched = Rc<RefCell<Vec<(UserAction, UpdateType, TripEvent)>>>;

    struct Harness {
        presenter: EventPresenter,
        container: Container,
        document: Document,
        recorder: SharedRecorder,
        mode_changes: Rc<Cell<usize>>,
        dispatched: Dispatched,
    }

    fn harness_with(factory: impl FnOnce(SharedRecorder) -> Rc<dyn ComponentFactory>) -> Harness {
        let container = Container::new();
        let document = Document::new();
        let recorder = SharedRecorder::default();
        let mode_changes = Rc::new(Cell::new(0));
        let dispatched = Dispatched::default();
        let common = sample_common();

        let counter = Rc::clone(&mode_changes);
        let sink = Rc::clone(&dispatched);
        let presenter = EventPresenter::new(PresenterConfig {
            container: container.clone(),
            event_common: Arc::clone(&common),
            on_mode_change: Box::new(move || counter.set(counter.get() + 1)),
            on_data_change: Box::new(
                move |action: UserAction, update_type: UpdateType, event: TripEvent| {
                    sink.borrow_mut().push((action, update_type, event));
                },
            ),
            data_client: common,
            factory: factory(Rc::clone(&recorder)),
            document: document.clone(),
        });

        Harness {
            presenter,
            container,
            document,
            recorder,
            mode_changes,
            dispatched,
        }
    }

    fn harness() -> Harness {
        harness_with(|recorder| Rc::new(RecordingFactory { recorder }) as Rc<dyn ComponentFactory>)
    }

    fn snapshot(event: TripEvent) -> EventSnapshot {
        sample_common().snapshot(event)
    }

    fn item_b() -> TripEvent {
        TripEvent {
            base_price: 999,
            ..sample_event()
        }
    }

    fn mounted_is(h: &Harness, expected: &ElementRef) -> bool {
        let elements = h.container.elements();
        elements.len() == 1 && Rc::ptr_eq(&elements[0], expected)
    }

    fn view_element(h: &Harness) -> ElementRef {
        Rc::clone(h.presenter.components.as_ref().unwrap().view.element())
    }

    fn form_element(h: &Harness) -> ElementRef {
        Rc::clone(h.presenter.components.as_ref().unwrap().form.element())
    }

    /// (已释放的只读行数, 已释放的表单数)
    fn dropped(h: &Harness) -> (usize, usize) {
        let recorder = h.recorder.borrow();
        (recorder.views_dropped, recorder.forms_dropped)
    }

    fn escape(h: &mut Harness) -> KeyDownEvent {
        let mut event = KeyDownEvent::new(press(KeyCode::Esc));
        h.presenter.handle_key_down(&mut event);
        event
    }

    // ===== init =====

    #[test]
    fn first_init_renders_view() {
        let mut h = harness();
        h.presenter.init(snapshot(sample_event()));

        assert_eq!(h.presenter.mode(), Mode::Default);
        assert!(mounted_is(&h, &view_element(&h)));
        assert_eq!(h.recorder.borrow().views_created, vec![sample_event()]);
        assert_eq!(h.recorder.borrow().forms_created, vec![sample_event()]);
    }

    #[test]
    fn reinit_in_default_swaps_view_in_place() {
        let mut h = harness();
        // 同一个容器里还有别的行，替换后顺序不变
        h.container.render(&FakeView {
            element: create_element(Vec::new()),
            recorder: Rc::clone(&h.recorder),
        });
        h.presenter.init(snapshot(sample_event()));
        let old_view = Rc::downgrade(&view_element(&h));
        let old_form = Rc::downgrade(&form_element(&h));
        let dropped_before = dropped(&h);

        h.presenter.init(snapshot(item_b()));

        let elements = h.container.elements();
        assert_eq!(elements.len(), 2);
        assert!(Rc::ptr_eq(&elements[1], &view_element(&h)));
        assert_eq!(h.presenter.item(), Some(&item_b()));

        // 旧的一对组件被释放，且只释放这两个
        assert_eq!(dropped(&h), (dropped_before.0 + 1, dropped_before.1 + 1));
        assert!(old_view.upgrade().is_none());
        assert!(old_form.upgrade().is_none());
    }

    #[test]
    fn reinit_while_editing_returns_to_default() {
        let mut h = harness();
        h.presenter.init(snapshot(sample_event()));
        h.presenter.handle_input(&press(KeyCode::Enter));
        assert_eq!(h.presenter.mode(), Mode::Editing);
        let old_view = Rc::downgrade(&view_element(&h));
        let old_form = Rc::downgrade(&form_element(&h));

        h.presenter.init(snapshot(item_b()));

        assert_eq!(dropped(&h), (1, 1));
        assert!(old_view.upgrade().is_none());
        assert!(old_form.upgrade().is_none());
        assert_eq!(h.presenter.mode(), Mode::Default);
        assert!(mounted_is(&h, &view_element(&h)));
        assert_eq!(h.document.listener_count("evt-1"), 0);
        assert_eq!(h.recorder.borrow().views_created.len(), 2);
        assert_eq!(h.recorder.borrow().forms_created.len(), 2);
    }

    #[test]
    fn at_most_one_component_mounted_across_init_sequences() {
        let mut h = harness();
        for round in 0..4 {
            h.presenter.init(snapshot(sample_event()));
            assert_eq!(h.container.len(), 1);
            if round % 2 == 0 {
                h.presenter.handle_input(&press(KeyCode::Enter));
                assert_eq!(h.container.len(), 1);
                assert!(mounted_is(&h, &form_element(&h)));
            }
        }
    }

    #[test]
    fn destroy_unmounts_and_releases_listener() {
        let mut h = harness();
        h.presenter.init(snapshot(sample_event()));
        h.presenter.handle_input(&press(KeyCode::Enter));
        assert_eq!(h.document.listener_count("evt-1"), 1);

        h.presenter.destroy();

        assert!(h.container.is_empty());
        assert!(h.document.listeners().is_empty());
    }

    // ===== 模式切换 =====

    #[test]
    fn edit_click_mounts_form_and_registers_listener_once() {
        let mut h = harness();
        h.presenter.init(snapshot(sample_event()));

        h.presenter.handle_input(&press(KeyCode::Enter));

        assert_eq!(h.presenter.mode(), Mode::Editing);
        assert!(mounted_is(&h, &form_element(&h)));
        assert_eq!(h.document.listener_count("evt-1"), 1);
        assert_eq!(h.mode_changes.get(), 1);
    }

    #[test]
    fn reset_view_discards_edits_and_returns_to_default() {
        let mut h = harness();
        h.presenter.init(snapshot(sample_event()));
        h.presenter.reset_view();
        assert!(h.recorder.borrow().resets.is_empty());

        h.presenter.handle_input(&press(KeyCode::Enter));
        h.presenter.reset_view();

        assert_eq!(h.presenter.mode(), Mode::Default);
        assert_eq!(h.recorder.borrow().resets, vec![sample_event()]);
        assert!(mounted_is(&h, &view_element(&h)));
        assert!(h.document.listeners().is_empty());
    }

    #[test]
    fn escape_while_editing_cancels() {
        let mut h = harness();
        h.presenter.init(snapshot(sample_event()));
        h.presenter.handle_input(&press(KeyCode::Enter));

        let event = escape(&mut h);

        assert!(event.is_default_prevented());
        assert_eq!(h.recorder.borrow().resets, vec![sample_event()]);
        assert_eq!(h.presenter.mode(), Mode::Default);
        assert!(h.document.listeners().is_empty());
    }

    #[test]
    fn escape_in_default_is_ignored() {
        let mut h = harness();
        h.presenter.init(snapshot(sample_event()));

        let event = escape(&mut h);

        assert!(!event.is_default_prevented());
        assert!(h.recorder.borrow().resets.is_empty());
    }

    #[test]
    fn other_keys_do_not_trigger_escape_handling() {
        let mut h = harness();
        h.presenter.init(snapshot(sample_event()));
        h.presenter.handle_input(&press(KeyCode::Enter));

        let mut event = KeyDownEvent::new(press(KeyCode::Char('x')));
        h.presenter.handle_key_down(&mut event);

        assert!(!event.is_default_prevented());
        assert_eq!(h.presenter.mode(), Mode::Editing);
    }

    // ===== 表单意图 =====

    #[test]
    fn submit_dispatches_once_without_mode_change() {
        let mut h = harness();
        h.presenter.init(snapshot(sample_event()));
        h.presenter.handle_input(&press(KeyCode::Enter));

        h.presenter.handle_input(&press(KeyCode::Enter));

        let submitted = TripEvent {
            base_price: 161,
            ..sample_event()
        };
        assert_eq!(
            *h.dispatched.borrow(),
            vec![(UserAction::UpdateEvent, UpdateType::Minor, submitted.clone())]
        );
        assert_eq!(h.recorder.borrow().resets, vec![submitted]);
        assert_eq!(h.presenter.mode(), Mode::Editing);
        assert_eq!(h.document.listener_count("evt-1"), 1);
    }

    #[test]
    fn edit_close_delete_scenario() {
        let mut h = harness();
        h.presenter.init(snapshot(sample_event()));

        h.presenter.handle_input(&press(KeyCode::Enter));
        assert_eq!(h.presenter.mode(), Mode::Editing);
        assert_eq!(h.recorder.borrow().forms_created, vec![sample_event()]);

        h.presenter.handle_input(&key(KeyCode::Char('c'), KeyModifiers::ALT));
        assert_eq!(h.presenter.mode(), Mode::Default);
        assert_eq!(h.recorder.borrow().resets, vec![sample_event()]);
        assert!(mounted_is(&h, &view_element(&h)));

        h.presenter.handle_input(&press(KeyCode::Enter));
        h.presenter.handle_input(&key(KeyCode::Char('d'), KeyModifiers::ALT));
        assert_eq!(
            *h.dispatched.borrow(),
            vec![(UserAction::DeleteEvent, UpdateType::Minor, sample_event())]
        );
        assert_eq!(h.presenter.mode(), Mode::Editing);
    }

    // ===== 上游状态 =====

    #[test]
    fn saving_and_deleting_only_patch_while_editing() {
        let mut h = harness();
        h.presenter.init(snapshot(sample_event()));
        h.presenter.set_saving();
        h.presenter.set_deleting();
        assert!(h.recorder.borrow().patches.is_empty());

        h.presenter.handle_input(&press(KeyCode::Enter));
        h.presenter.set_saving();
        assert_eq!(
            h.presenter.form_flags(),
            Some(FormFlags {
                is_disabled: true,
                is_saving: true,
                is_deleting: false,
            })
        );

        h.presenter.set_deleting();
        assert_eq!(
            h.recorder.borrow().patches,
            vec![FormStatePatch::SAVING, FormStatePatch::DELETING]
        );
    }

    #[test]
    fn aborting_in_default_shakes_view_once() {
        let mut h = harness();
        h.presenter.init(snapshot(sample_event()));

        h.presenter.set_aborting();

        assert_eq!(h.recorder.borrow().view_shakes, 1);
        assert_eq!(h.recorder.borrow().form_shakes, 0);
        assert_eq!(h.presenter.mode(), Mode::Default);
    }

    #[test]
    fn aborting_while_editing_clears_flags_after_shake() {
        let mut h = harness();
        h.presenter.init(snapshot(sample_event()));
        h.presenter.handle_input(&press(KeyCode::Enter));
        h.presenter.set_saving();

        h.presenter.set_aborting();

        assert_eq!(h.recorder.borrow().form_shakes, 1);
        assert!(h.presenter.form_flags().is_some_and(|f| f.is_disabled && f.is_saving));

        h.presenter.tick(Instant::now());

        assert_eq!(h.presenter.form_flags(), Some(FormFlags::default()));
        assert_eq!(h.presenter.mode(), Mode::Editing);
    }

    #[test]
    fn calls_before_init_are_ignored() {
        let mut h = harness();
        h.presenter.handle_input(&press(KeyCode::Enter));
        h.presenter.set_aborting();
        h.presenter.reset_view();

        assert_eq!(h.presenter.mode(), Mode::Default);
        assert!(h.container.is_empty());
        assert_eq!(h.presenter.event_id(), None);
    }

    // ===== 真实终端组件 =====

    fn real_harness() -> Harness {
        harness_with(|_| {
            Rc::new(TuiComponentFactory::new(Duration::from_millis(10))) as Rc<dyn ComponentFactory>
        })
    }

    fn mounted_text(h: &Harness) -> String {
        h.container.elements()[0]
            .borrow()
            .lines()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn real_components_full_round_trip() {
        let mut h = real_harness();
        h.presenter.init(snapshot(sample_event_with_id("evt-7")));
        assert!(mounted_text(&h).contains("Flight Amsterdam"));

        h.presenter.handle_input(&press(KeyCode::Enter));
        assert!(h.presenter.is_editing());
        assert_eq!(h.document.listener_count("evt-7"), 1);

        h.presenter.handle_input(&press(KeyCode::Enter));
        assert_eq!(h.dispatched.borrow().len(), 1);
        assert_eq!(h.dispatched.borrow()[0].2, sample_event_with_id("evt-7"));

        h.presenter.set_saving();
        assert!(mounted_text(&h).contains(crate::i18n::t().form.saving));
        // 禁用期间 Esc 仍然可以取消编辑
        h.presenter.set_aborting();
        h.presenter.tick(Instant::now() + Duration::from_secs(1));
        assert_eq!(h.presenter.form_flags(), Some(FormFlags::default()));

        escape(&mut h);
        assert!(!h.presenter.is_editing());
        assert!(h.document.listeners().is_empty());
        assert!(mounted_is(&h, h.presenter.mounted_element().unwrap()));
    }
}

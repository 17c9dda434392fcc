//!
//! src/component/mod.rs
//! Component 层：行程事件的两个视图组件
//!
//! presenter 只通过这里定义的窄接口与组件交互：
//!
//!     EventComponent          只读行（按 Enter / Alt+e 请求编辑，可抖动）
//!     EventEditComponent      编辑表单（提交 / 收起 / 删除，reset，update_element，带回调的抖动）
//!     ComponentFactory        由 presenter 在每次 init 时调用，创建一对新组件
//!
//! 组件不回调 presenter。按键交给组件后，组件返回一个意图（`EventIntent` / `FormIntent`），
//! 由 presenter 分发给对应的处理函数。
//!
//! 有模块结构：
//!     src/component/mod.rs
//!         mod mount;              // 容器与元素（render / replace / remove）
//!         mod shake;              // 抖动动画
//!         mod event_view;         // 只读行
//!         mod event_edit_view;    // 编辑表单
//!         mod factory;            // 终端组件工厂
//!

mod event_edit_view;
mod event_view;
mod factory;
mod mount;
mod shake;
#[cfg(test)]
pub(crate) mod test_support;

use std::sync::Arc;
use std::time::Instant;

use crossterm::event::KeyEvent;
use trip_planner_core::traits::TripDataClient;
use trip_planner_core::types::{Destination, Offer, TripCatalog, TripEvent};

pub use event_edit_view::EventEditView;
pub use event_view::EventView;
pub use factory::TuiComponentFactory;
pub use mount::{create_element, Container, ElementRef};
pub use shake::SHAKE_ANIMATION_TIMEOUT;

/// 所有组件共享的只读参考上下文（目的地与附加项目录）
pub type EventCommon = Arc<TripCatalog>;

/// 可挂载组件
pub trait Component {
    /// 组件的元素（挂载到容器中的就是它）
    fn element(&self) -> &ElementRef;

    /// 推进动画；抖动结束时在这里收尾
    fn tick(&mut self, now: Instant);
}

/// 只读行发出的意图
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventIntent {
    /// 请求进入编辑模式
    EditClick,
}

/// 编辑表单发出的意图
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormIntent {
    /// 提交编辑结果
    Submit(TripEvent),
    /// 收起表单
    Close,
    /// 删除事件
    Delete(TripEvent),
}

/// 只读行组件
pub trait EventComponent: Component {
    fn handle_key(&mut self, key: &KeyEvent) -> Option<EventIntent>;

    /// 失败反馈
    fn shake(&mut self);
}

/// 表单的禁用 / 保存中 / 删除中 标志
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormFlags {
    pub is_disabled: bool,
    pub is_saving: bool,
    pub is_deleting: bool,
}

/// 对 [`FormFlags`] 的部分更新，`None` 表示保持原值
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormStatePatch {
    pub is_disabled: Option<bool>,
    pub is_saving: Option<bool>,
    pub is_deleting: Option<bool>,
}

impl FormStatePatch {
    /// 保存中
    pub const SAVING: Self = Self {
        is_disabled: Some(true),
        is_saving: Some(true),
        is_deleting: None,
    };

    /// 删除中
    pub const DELETING: Self = Self {
        is_disabled: Some(true),
        is_saving: None,
        is_deleting: Some(true),
    };

    /// 恢复可交互
    pub const IDLE: Self = Self {
        is_disabled: Some(false),
        is_saving: Some(false),
        is_deleting: Some(false),
    };

    pub fn apply(self, flags: &mut FormFlags) {
        if let Some(v) = self.is_disabled {
            flags.is_disabled = v;
        }
        if let Some(v) = self.is_saving {
            flags.is_saving = v;
        }
        if let Some(v) = self.is_deleting {
            flags.is_deleting = v;
        }
    }
}

/// 支持部分状态更新的元素
pub trait StatefulElement {
    fn update_element(&mut self, patch: FormStatePatch);
}

/// 抖动结束后的回调，参数是刚结束抖动的表单
pub type OnShakeComplete = Box<dyn FnOnce(&mut dyn StatefulElement)>;

/// 编辑表单组件
pub trait EventEditComponent: Component + StatefulElement {
    fn handle_key(&mut self, key: &KeyEvent) -> Option<FormIntent>;

    /// 把字段恢复为 `event` 的内容，丢弃未保存的修改
    fn reset(&mut self, event: &TripEvent);

    /// 失败反馈；动画结束后调用 `on_complete`
    fn shake(&mut self, on_complete: OnShakeComplete);

    fn flags(&self) -> FormFlags;
}

/// 只读行的构造参数
pub struct EventViewProps {
    pub event: TripEvent,
    pub event_common: EventCommon,
}

/// 编辑表单的构造参数
pub struct EventEditProps {
    pub event: TripEvent,
    /// 当前类型可选的附加项
    pub offers: Vec<Offer>,
    pub destination: Option<Destination>,
    pub data_client: Arc<dyn TripDataClient>,
    pub event_common: EventCommon,
}

/// 组件工厂
pub trait ComponentFactory {
    fn create_view(&self, props: EventViewProps) -> Box<dyn EventComponent>;

    fn create_form(&self, props: EventEditProps) -> Box<dyn EventEditComponent>;
}

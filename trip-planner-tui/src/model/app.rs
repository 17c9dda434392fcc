//! 应用主状态结构

use std::rc::Rc;

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use super::TripEventsState;
use crate::backend::TripBackend;
use crate::component::{ComponentFactory, Container};
use crate::message::AppMessage;
use crate::presenter::Document;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 行程事件列表状态
    pub trip_events: TripEventsState,

    /// 列表容器（所有 presenter 挂载的地方）
    pub container: Container,

    /// 文档级按键监听注册表
    pub document: Document,

    /// 组件工厂
    pub factory: Rc<dyn ComponentFactory>,

    /// 持久化后端
    pub backend: Box<dyn TripBackend>,

    /// 回调与后台任务使用的消息发送端
    pub tx: UnboundedSender<AppMessage>,
    rx: UnboundedReceiver<AppMessage>,
}

impl App {
    /// 创建新的应用实例
    ///
    /// 后端要把结果发回同一个消息通道，所以通道在这里创建后交给 `make_backend`。
    pub fn new(
        factory: Rc<dyn ComponentFactory>,
        make_backend: impl FnOnce(UnboundedSender<AppMessage>) -> Box<dyn TripBackend>,
    ) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            should_quit: false,
            status_message: None,
            trip_events: TripEventsState::new(),
            container: Container::new(),
            document: Document::new(),
            factory,
            backend: make_backend(tx.clone()),
            tx,
            rx,
        }
    }

    /// 取出一条待处理消息
    pub fn try_recv(&mut self) -> Option<AppMessage> {
        self.rx.try_recv().ok()
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

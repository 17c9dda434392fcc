//!
//! src/presenter/mod.rs
//! Presenter 层：单个列表项的视图 / 编辑切换
//!
//! 每条行程事件对应一个 `EventPresenter`，它持有该事件的只读行与编辑表单，
//! 决定哪一个挂载在容器中，并把用户意图转成上游的数据变更请求。
//!
//! 有模块结构：
//!     src/presenter/mod.rs
//!         mod document;           // 文档级 key-down 监听（守卫对象）
//!         mod event_presenter;    // EventPresenter
//!
//! 上游（update/trip_events.rs）与 presenter 的交互：
//!
//!     init(snapshot)          数据加载 / 保存成功后重建组件
//!     destroy()               删除成功后卸载
//!     reset_view()            其他事件进入编辑时收起本行
//!     set_saving()            保存请求已发出
//!     set_deleting()          删除请求已发出
//!     set_aborting()          请求失败，抖动提示
//!

mod document;
mod event_presenter;

pub use document::{Document, KeyDownEvent};
pub use event_presenter::{EventPresenter, Mode, PresenterConfig};

//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 三层布局：标题栏 + 列表 + 状态栏
//!         mod pages;          // 页面（行程事件列表）
//!         mod components;     // 公共部件（状态栏）
//!         pub mod theme;      // 主题与颜色
//!
//! View 层只读取 App。列表页直接绘制 app.container 中挂载的元素，
//! 元素的内容由各组件在状态变化时重新生成。
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;

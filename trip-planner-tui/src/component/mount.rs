//! 挂载原语
//!
//! 终端版的 "DOM"：组件把渲染好的行写进自己的 [`Element`]，
//! [`Container`] 按顺序持有当前已挂载的元素，页面视图只负责把它们画出来。
//!
//!     render(component)          // 追加到容器末尾
//!     replace(next, prev)        // 原位替换，一步完成，不存在 "零个" 或 "两个" 的中间态
//!     remove(component)          // 卸载；未挂载时什么也不做
//!
//! 元素通过 `Rc<RefCell<_>>` 共享：组件持有一份，容器挂载时再持有一份。
//! 组件状态变化后重写自己的元素内容，容器中的那份随之更新。

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::text::Line;

use super::Component;

/// 已渲染的组件内容
#[derive(Debug, Default)]
pub struct Element {
    lines: Vec<Line<'static>>,
}

impl Element {
    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn set_lines(&mut self, lines: Vec<Line<'static>>) {
        self.lines = lines;
    }
}

/// 元素的共享句柄
pub type ElementRef = Rc<RefCell<Element>>;

/// 创建元素
pub fn create_element(lines: Vec<Line<'static>>) -> ElementRef {
    Rc::new(RefCell::new(Element { lines }))
}

/// 挂载容器
///
/// 克隆得到的是同一个容器的句柄。
#[derive(Debug, Clone, Default)]
pub struct Container {
    nodes: Rc<RefCell<Vec<ElementRef>>>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// 把组件挂载到容器末尾
    pub fn render<C: Component + ?Sized>(&self, component: &C) {
        let element = component.element();
        if self.position(element).is_some() {
            log::warn!("render: element is already mounted");
            return;
        }
        self.nodes.borrow_mut().push(Rc::clone(element));
    }

    /// 用 `next` 原位替换已挂载的 `prev`
    pub fn replace<N, P>(&self, next: &N, prev: &P)
    where
        N: Component + ?Sized,
        P: Component + ?Sized,
    {
        let Some(index) = self.position(prev.element()) else {
            log::error!("replace: previous element is not mounted");
            return;
        };
        self.nodes.borrow_mut()[index] = Rc::clone(next.element());
    }

    /// 卸载组件（未挂载时为空操作）
    pub fn remove<C: Component + ?Sized>(&self, component: &C) {
        if let Some(index) = self.position(component.element()) {
            self.nodes.borrow_mut().remove(index);
        }
    }

    /// 组件当前是否已挂载
    #[cfg(test)]
    pub fn contains<C: Component + ?Sized>(&self, component: &C) -> bool {
        self.position(component.element()).is_some()
    }

    /// 已挂载元素数量
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.nodes.borrow().is_empty()
    }

    /// 按挂载顺序返回所有元素
    pub fn elements(&self) -> Vec<ElementRef> {
        self.nodes.borrow().clone()
    }

    fn position(&self, element: &ElementRef) -> Option<usize> {
        self.nodes
            .borrow()
            .iter()
            .position(|node| Rc::ptr_eq(node, element))
    }
}

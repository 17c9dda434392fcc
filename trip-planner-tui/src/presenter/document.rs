//! 文档级按键监听
//!
//! 终端里没有真正的 document，这里只记录"谁在监听 key-down"。
//! 监听以守卫对象的形式持有，守卫被丢弃时自动注销。

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crossterm::event::KeyEvent;

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    /// (监听 ID, 所有者) 按注册顺序排列
    listeners: Vec<(u64, String)>,
}

/// 文档句柄，克隆得到的是同一个注册表
#[derive(Debug, Clone, Default)]
pub struct Document {
    registry: Rc<RefCell<Registry>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册一个 key-down 监听，返回的守卫被丢弃时注销
    pub fn add_key_down_listener(&self, owner: impl Into<String>) -> KeyDownListener {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, owner.into()));

        KeyDownListener {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// 当前所有监听者，按注册顺序
    pub fn listeners(&self) -> Vec<String> {
        self.registry
            .borrow()
            .listeners
            .iter()
            .map(|(_, owner)| owner.clone())
            .collect()
    }

    #[cfg(test)]
    pub fn listener_count(&self, owner: &str) -> usize {
        self.registry
            .borrow()
            .listeners
            .iter()
            .filter(|(_, o)| o == owner)
            .count()
    }
}

/// key-down 监听守卫
#[derive(Debug)]
pub struct KeyDownListener {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Drop for KeyDownListener {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .listeners
                .retain(|(id, _)| *id != self.id);
        }
    }
}

/// 分发给监听者的按键事件
#[derive(Debug, Clone)]
pub struct KeyDownEvent {
    key: KeyEvent,
    default_prevented: bool,
}

impl KeyDownEvent {
    pub fn new(key: KeyEvent) -> Self {
        Self {
            key,
            default_prevented: false,
        }
    }

    pub fn key(&self) -> &KeyEvent {
        &self.key
    }

    /// 阻止默认处理（列表导航、退出等）
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

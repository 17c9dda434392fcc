//! 行程事件列表状态

use std::sync::Arc;

use trip_planner_core::types::TripCatalog;

use crate::presenter::{EventPresenter, Mode};

/// 行程事件列表状态
///
/// presenter 的顺序与它们挂载到容器中的顺序一致。
#[derive(Default)]
pub struct TripEventsState {
    pub presenters: Vec<EventPresenter>,
    /// 当前选中第几项
    pub selected: usize,
    /// 最近一次加载的参考目录
    pub catalog: Option<Arc<TripCatalog>>,
    /// 是否正在加载
    pub loading: bool,
}

impl TripEventsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.presenters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presenters.is_empty()
    }

    /// 是否有事件处于编辑模式
    pub fn is_editing(&self) -> bool {
        self.presenters.iter().any(|p| p.mode() == Mode::Editing)
    }

    /// 编辑中的 presenter
    pub fn editing(&self) -> Option<&EventPresenter> {
        self.presenters.iter().find(|p| p.is_editing())
    }

    pub fn editing_mut(&mut self) -> Option<&mut EventPresenter> {
        self.presenters.iter_mut().find(|p| p.is_editing())
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.presenters
            .iter()
            .position(|p| p.event_id() == Some(id))
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut EventPresenter> {
        self.presenters
            .iter_mut()
            .find(|p| p.event_id() == Some(id))
    }

    pub fn selected_mut(&mut self) -> Option<&mut EventPresenter> {
        self.presenters.get_mut(self.selected)
    }

    pub fn select_prev(&mut self) {
        if self.presenters.is_empty() {
            return;
        }
        self.selected = if self.selected == 0 {
            self.presenters.len() - 1
        } else {
            self.selected - 1
        };
    }

    pub fn select_next(&mut self) {
        if self.presenters.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.presenters.len();
    }

    /// 选中项越界时收回到最后一项
    pub fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.presenters.len().saturating_sub(1));
    }

    /// 行程路线：按事件顺序排列的目的地，相邻重复的只保留一个
    pub fn route(&self) -> Vec<&str> {
        let Some(catalog) = self.catalog.as_deref() else {
            return Vec::new();
        };
        let mut route: Vec<&str> = Vec::new();
        for item in self.presenters.iter().filter_map(|p| p.item()) {
            let Some(destination) = catalog.destination_by_id(&item.destination) else {
                continue;
            };
            if route.last() != Some(&destination.name.as_str()) {
                route.push(destination.name.as_str());
            }
        }
        route
    }

    /// 全部事件的总价（基础价加已选附加项）
    pub fn total_cost(&self) -> u32 {
        let Some(catalog) = self.catalog.as_deref() else {
            return 0;
        };
        self.presenters
            .iter()
            .filter_map(|p| p.item())
            .map(|item| item.total_price(catalog.offers_for(item.event_type)))
            .sum()
    }

    /// 移除并销毁指定事件的 presenter
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.presenters.remove(index).destroy();
        self.clamp_selection();
        true
    }

    /// 销毁全部 presenter
    pub fn clear(&mut self) {
        for presenter in self.presenters.drain(..) {
            presenter.destroy();
        }
        self.selected = 0;
    }
}

//! 终端组件工厂

use std::time::Duration;

use super::{
    ComponentFactory, EventComponent, EventEditComponent, EventEditProps, EventEditView,
    EventView, EventViewProps, SHAKE_ANIMATION_TIMEOUT,
};

/// 创建 [`EventView`] / [`EventEditView`]
#[derive(Debug, Clone, Copy)]
pub struct TuiComponentFactory {
    shake_duration: Duration,
}

impl TuiComponentFactory {
    pub fn new(shake_duration: Duration) -> Self {
        Self { shake_duration }
    }
}

impl Default for TuiComponentFactory {
    fn default() -> Self {
        Self::new(SHAKE_ANIMATION_TIMEOUT)
    }
}

impl ComponentFactory for TuiComponentFactory {
    fn create_view(&self, props: EventViewProps) -> Box<dyn EventComponent> {
        Box::new(EventView::new(props, self.shake_duration))
    }

    fn create_form(&self, props: EventEditProps) -> Box<dyn EventEditComponent> {
        Box::new(EventEditView::new(props, self.shake_duration))
    }
}

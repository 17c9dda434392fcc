//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **编辑表单归 `form.*`**：行程事件编辑表单的标签、按钮与校验提示
//! 3. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 4. **键盘提示归 `hints.*`**：按键名称和操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 行程事件列表文本
    pub events: EventsTexts,
    /// 编辑表单文本
    pub form: FormTexts,
    /// 状态栏文本
    pub status_bar: StatusBarTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub quit: &'static str,
    pub loading: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    /// 按键名称
    pub keys: KeyNames,
    /// 动作描述
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub space: &'static str,
    pub arrows_lr: &'static str, // "←→"
    pub arrows_ud: &'static str, // "↑↓"
}

/// 动作描述（用于组合提示）
pub struct ActionTexts {
    pub select: &'static str,
    pub edit: &'static str,
    pub save: &'static str,
    pub delete: &'static str,
    pub close: &'static str,
    pub cancel: &'static str,
    pub next_field: &'static str,
    pub change_option: &'static str,
    pub toggle_offer: &'static str,
    pub reload: &'static str,
}

// ============================================================================
// 页面文本
// ============================================================================

/// 行程事件列表文本
pub struct EventsTexts {
    pub title: &'static str,
    pub no_events: &'static str,
    pub no_events_hint: &'static str,
    pub offers_prefix: &'static str,
    pub unknown_destination: &'static str,
    /// 标题栏中的行程总价
    pub total: &'static str,
}

/// 编辑表单文本
pub struct FormTexts {
    pub title: &'static str,
    pub event_type: &'static str,
    pub destination: &'static str,
    pub date_from: &'static str,
    pub date_to: &'static str,
    pub price: &'static str,
    pub offers: &'static str,
    pub no_offers: &'static str,
    pub pictures: &'static str,
    pub save: &'static str,
    pub saving: &'static str,
    pub delete: &'static str,
    pub deleting: &'static str,
    pub close: &'static str,
    /// 校验提示
    pub invalid_date: &'static str,
    pub invalid_price: &'static str,
    pub missing_destination: &'static str,
}

/// 状态栏文本
pub struct StatusBarTexts {
    pub ready: &'static str,
    pub saving: &'static str,
    pub deleting: &'static str,
    pub saved: &'static str,
    pub deleted: &'static str,
    pub save_failed: &'static str,
    pub delete_failed: &'static str,
    pub reloading: &'static str,
    pub load_failed: &'static str,
}

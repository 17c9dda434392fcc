//! 简体中文翻译 (zh-CN)

use super::keys::{
    ActionTexts, CommonTexts, EventsTexts, FormTexts, HintTexts, KeyNames, StatusBarTexts,
    Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Trip Planner TUI",
        quit: "退出",
        loading: "加载中...",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            space: "空格",
            arrows_lr: "←→",
            arrows_ud: "↑↓",
        },
        actions: ActionTexts {
            select: "选择",
            edit: "编辑",
            save: "保存",
            delete: "删除",
            close: "收起",
            cancel: "取消",
            next_field: "下一字段",
            change_option: "切换",
            toggle_offer: "勾选附加项",
            reload: "重新加载",
        },
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    events: EventsTexts {
        title: "行程事件",
        no_events: "暂无行程事件",
        no_events_hint: "在数据文件中添加事件后，按 Alt+r 重新加载。",
        offers_prefix: "+",
        unknown_destination: "未知目的地",
        total: "总计",
    },

    form: FormTexts {
        title: "编辑事件",
        event_type: "类型",
        destination: "目的地",
        date_from: "开始",
        date_to: "结束",
        price: "价格（€）",
        offers: "附加项",
        no_offers: "该类型没有附加项",
        pictures: "图片",
        save: "保存",
        saving: "保存中...",
        delete: "删除",
        deleting: "删除中...",
        close: "收起",
        invalid_date: "日期格式应为 2024-03-18 10:30",
        invalid_price: "价格必须是整数",
        missing_destination: "请选择目的地",
    },

    status_bar: StatusBarTexts {
        ready: "就绪",
        saving: "保存中...",
        deleting: "删除中...",
        saved: "事件已保存",
        deleted: "事件已删除",
        save_failed: "保存事件失败",
        delete_failed: "删除事件失败",
        reloading: "重新加载中...",
        load_failed: "加载事件失败",
    },
};

//! 主题与调色板
//!
//! 组件渲染时通过 `colors()` 取当前调色板，启动时由配置决定深色或浅色。

use std::sync::atomic::{AtomicU8, Ordering};

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

static CURRENT_THEME: AtomicU8 = AtomicU8::new(Theme::Dark as u8);

/// 主题
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Theme {
    #[default]
    Dark = 0,
    Light = 1,
}

impl Theme {
    fn palette(self) -> &'static Palette {
        match self {
            Self::Dark => &DARK,
            Self::Light => &LIGHT,
        }
    }
}

/// 切换全局主题
pub fn set_theme(theme: Theme) {
    CURRENT_THEME.store(theme as u8, Ordering::Relaxed);
}

/// 当前主题的调色板
pub fn colors() -> &'static Palette {
    let theme = if CURRENT_THEME.load(Ordering::Relaxed) == Theme::Light as u8 {
        Theme::Light
    } else {
        Theme::Dark
    };
    theme.palette()
}

/// 调色板
#[derive(Debug)]
pub struct Palette {
    /// 正文
    pub text: Color,
    /// 次要信息（日期、附加项、字段标签）
    pub dim: Color,
    /// 列表边框
    pub frame: Color,
    /// 编辑中的边框与获得焦点的字段
    pub focus: Color,
    /// 标题栏、状态栏底色，表单标题
    pub accent: Color,
    /// accent 底色上的文字
    pub on_accent: Color,
    /// 选中标记底色
    pub marker_bg: Color,
    pub price: Color,
    pub favorite: Color,
    /// 失败反馈（抖动、校验错误）
    pub alert: Color,
    pub hint_key: Color,
    pub hint_desc: Color,
}

const DARK: Palette = Palette {
    text: Color::Rgb(220, 220, 215),
    dim: Color::Rgb(125, 130, 140),
    frame: Color::Rgb(60, 66, 76),
    focus: Color::Rgb(86, 182, 194),
    accent: Color::Rgb(40, 110, 170),
    on_accent: Color::White,
    marker_bg: Color::Rgb(32, 70, 104),
    price: Color::Rgb(120, 200, 140),
    favorite: Color::Rgb(240, 190, 80),
    alert: Color::Rgb(235, 110, 100),
    hint_key: Color::Yellow,
    hint_desc: Color::Rgb(185, 185, 185),
};

const LIGHT: Palette = Palette {
    text: Color::Rgb(40, 44, 52),
    dim: Color::Rgb(120, 120, 120),
    frame: Color::Rgb(200, 204, 210),
    focus: Color::Rgb(0, 120, 140),
    accent: Color::Rgb(20, 95, 160),
    on_accent: Color::White,
    marker_bg: Color::Rgb(210, 230, 250),
    price: Color::Rgb(30, 130, 60),
    favorite: Color::Rgb(190, 130, 0),
    alert: Color::Rgb(200, 50, 60),
    hint_key: Color::Rgb(150, 100, 0),
    hint_desc: Color::Rgb(60, 60, 60),
};

/// 常用样式
pub struct Styles;

impl Styles {
    pub fn statusbar() -> Style {
        let c = colors();
        Style::default().bg(c.accent).fg(c.on_accent)
    }

    /// 按键名（状态栏提示与表单按钮）
    pub fn hint_key() -> Style {
        Style::default()
            .fg(colors().hint_key)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_desc() -> Style {
        Style::default().fg(colors().hint_desc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_names_are_lowercase_in_config() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        assert_eq!(
            serde_json::from_str::<Theme>("\"dark\"").unwrap(),
            Theme::Dark
        );
    }

    #[test]
    fn each_theme_has_its_own_palette() {
        assert_ne!(Theme::Dark.palette().text, Theme::Light.palette().text);
    }
}

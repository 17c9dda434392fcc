//! 国际化（i18n）模块
//!
//! 每种语言是一张 `Translations` 静态表，缺少的键在编译期就会报错。
//! 界面各处通过 `t()` 取当前语言的表。

use std::sync::atomic::{AtomicU8, Ordering};

mod en_us;
pub mod keys;
mod zh_cn;

pub use keys::*;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Language {
    #[default]
    EnUs = 0,
    ZhCn = 1,
}

impl Language {
    const ALL: [Language; 2] = [Language::EnUs, Language::ZhCn];

    /// BCP 47 语言代码，配置文件中使用
    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::ZhCn => "zh-CN",
        }
    }

    /// 解析语言代码，也接受不带地区的 `en` / `zh`
    pub fn from_code(code: &str) -> Option<Language> {
        let primary = code.split(['-', '_']).next().unwrap_or(code);
        Self::ALL.into_iter().find(|lang| {
            lang.code().eq_ignore_ascii_case(code)
                || lang.code()[..2].eq_ignore_ascii_case(primary)
        })
    }

    fn translations(self) -> &'static Translations {
        match self {
            Language::EnUs => &en_us::TRANSLATIONS,
            Language::ZhCn => &zh_cn::TRANSLATIONS,
        }
    }
}

static CURRENT_LANGUAGE: AtomicU8 = AtomicU8::new(Language::EnUs as u8);

/// 当前语言的翻译表
pub fn t() -> &'static Translations {
    let current = CURRENT_LANGUAGE.load(Ordering::Relaxed);
    Language::ALL
        .into_iter()
        .find(|lang| *lang as u8 == current)
        .unwrap_or_default()
        .translations()
}

/// 切换界面语言
pub fn set_language(lang: Language) {
    CURRENT_LANGUAGE.store(lang as u8, Ordering::Relaxed);
}

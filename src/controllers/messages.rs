use std::borrow::Cow;
use std::str::FromStr;

use thiserror::Error;

/// Language of the default response messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    ZhCn,
}

#[derive(Debug, Error)]
#[error("unsupported locale: {0}")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            "zh" | "zh-cn" | "zh-hans" => Ok(Locale::ZhCn),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

/// Messages used when a handler does not pass its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultMessages {
    pub error: Cow<'static, str>,
    pub success: Cow<'static, str>,
    pub paginated: Cow<'static, str>,
    pub unauthorized: Cow<'static, str>,
    pub forbidden: Cow<'static, str>,
    pub not_found: Cow<'static, str>,
    pub bad_request: Cow<'static, str>,
}

impl DefaultMessages {
    pub fn english() -> Self {
        Self {
            error: Cow::Borrowed("operation failed"),
            success: Cow::Borrowed("operation succeeded"),
            paginated: Cow::Borrowed("data retrieved successfully"),
            unauthorized: Cow::Borrowed("unauthorized"),
            forbidden: Cow::Borrowed("access forbidden"),
            not_found: Cow::Borrowed("resource not found"),
            bad_request: Cow::Borrowed("invalid request parameters"),
        }
    }

    pub fn simplified_chinese() -> Self {
        Self {
            error: Cow::Borrowed("操作失败"),
            success: Cow::Borrowed("操作成功"),
            paginated: Cow::Borrowed("获取数据成功"),
            unauthorized: Cow::Borrowed("未授权"),
            forbidden: Cow::Borrowed("禁止访问"),
            not_found: Cow::Borrowed("资源不存在"),
            bad_request: Cow::Borrowed("请求参数错误"),
        }
    }

    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => Self::english(),
            Locale::ZhCn => Self::simplified_chinese(),
        }
    }
}

impl Default for DefaultMessages {
    fn default() -> Self {
        Self::english()
    }
}

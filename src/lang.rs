//! Supported language codes and their sheet header labels.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A language code. Its textual form doubles as the sheet name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[derive(ValueEnum, Deserialize, Serialize)]
pub enum Lang {
    #[default]
    #[value(name = "base")]
    #[serde(rename = "base")]
    Base,
    #[value(name = "zh_CN")]
    #[serde(rename = "zh_CN")]
    ZhCn,
    #[value(name = "zh_Hans")]
    #[serde(rename = "zh_Hans")]
    ZhHans,
    #[value(name = "en_US")]
    #[serde(rename = "en_US")]
    EnUs,
    #[value(name = "ja_JP")]
    #[serde(rename = "ja_JP")]
    JaJp,
    #[value(name = "ko_KR")]
    #[serde(rename = "ko_KR")]
    KoKr,
}

impl Lang {
    pub const ALL: [Lang; 6] = [
        Lang::Base,
        Lang::ZhCn,
        Lang::ZhHans,
        Lang::EnUs,
        Lang::JaJp,
        Lang::KoKr,
    ];

    /// Sheet name for this language.
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::Base => "base",
            Lang::ZhCn => "zh_CN",
            Lang::ZhHans => "zh_Hans",
            Lang::EnUs => "en_US",
            Lang::JaJp => "ja_JP",
            Lang::KoKr => "ko_KR",
        }
    }

    /// Directory name used when restoring a `.strings` file (`zh_CN` -> `zh_cn`).
    pub fn dir_name(&self) -> String {
        self.as_str().to_lowercase()
    }

    /// Built-in header labels for this language.
    pub fn title(&self) -> Title {
        let (keyword, value) = match self {
            Lang::Base | Lang::ZhCn => ("关键词", "翻译"),
            Lang::ZhHans => ("關鍵詞", "翻譯"),
            Lang::EnUs => ("Keyword", "Translation"),
            Lang::KoKr => ("키워드", "번역하다"),
            Lang::JaJp => ("キーワード", "翻訳"),
        };
        Title::new(keyword, value)
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Header row text: the label over the key column and the one over the value column.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Title {
    pub keyword: String,
    pub value: String,
}

impl Title {
    pub fn new(keyword: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            value: value.into(),
        }
    }
}

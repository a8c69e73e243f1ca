//! Core types for RandomWord

use crate::error::RandomWordError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Words returned by a fetch, in the order the service sent them
pub type WordList = Vec<String>;

/// Language of the returned words
///
/// The set is closed: the service only understands these codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// Service default, sent without a `lang` parameter
    #[default]
    #[serde(rename = "")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "zh")]
    Chinese,
    #[serde(rename = "pt-br")]
    BrazilianPortuguese,
}

impl Language {
    /// Every supported language, default first
    pub const ALL: [Language; 7] = [
        Language::English,
        Language::Spanish,
        Language::Italian,
        Language::German,
        Language::French,
        Language::Chinese,
        Language::BrazilianPortuguese,
    ];

    /// Wire code sent as the `lang` query parameter
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "",
            Language::Spanish => "es",
            Language::Italian => "it",
            Language::German => "de",
            Language::French => "fr",
            Language::Chinese => "zh",
            Language::BrazilianPortuguese => "pt-br",
        }
    }

    /// True for the language the service picks when none is given
    pub fn is_default(self) -> bool {
        self == Language::English
    }
}

impl FromStr for Language {
    type Err = RandomWordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == s)
            .ok_or(RandomWordError::InvalidArgument("language"))
    }
}

impl AsRef<str> for Language {
    fn as_ref(&self) -> &str {
        self.code()
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

// crates/districts-core/src/language.rs

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four languages the lookup tables are maintained in.
///
/// Hebrew is the reference language: it decides which upstream ids count as
/// new, and every record in every language carries the Hebrew label
/// alongside its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    He,
    En,
    Ru,
    Ar,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::He, Language::En, Language::Ru, Language::Ar];

    pub const REFERENCE: Language = Language::He;

    /// Short code used in the local file names (`districts.he.json`).
    pub fn code(self) -> &'static str {
        match self {
            Language::He => "he",
            Language::En => "en",
            Language::Ru => "ru",
            Language::Ar => "ar",
        }
    }

    /// Three-letter code the upstream endpoints use (`cities_heb.json`).
    pub fn remote_code(self) -> &'static str {
        match self {
            Language::He => "heb",
            Language::En => "eng",
            Language::Ru => "rus",
            Language::Ar => "arb",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

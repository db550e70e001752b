//! Culture catalog: the system cultures that may be installed as languages.
//!
//! The catalog is built once on first access and is immutable afterwards.
//! Lookups are case-insensitive and always hand back the canonical entry, so
//! `EN-gb` resolves to `en-GB`.

use std::sync::OnceLock;
use regex::Regex;

/// Metadata for a system culture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CultureInfo {
    /// Culture code, language subtag plus region (e.g. "en-GB")
    pub code: &'static str,

    /// English display name (e.g. "English (United Kingdom)")
    pub english_name: &'static str,

    /// Name of the culture in its own language
    pub native_name: &'static str,
}

/// Global culture catalog.
pub struct CultureCatalog {
    cultures: Vec<CultureInfo>,
}

static CATALOG: OnceLock<CultureCatalog> = OnceLock::new();
static CULTURE_CODE: OnceLock<Option<Regex>> = OnceLock::new();

impl CultureCatalog {
    /// Get the global catalog instance.
    pub fn get() -> &'static CultureCatalog {
        CATALOG.get_or_init(|| CultureCatalog {
            cultures: default_cultures(),
        })
    }

    /// Resolve a culture code to its canonical catalog entry.
    pub fn resolve(&self, code: &str) -> Option<&CultureInfo> {
        let code = code.trim();
        self.cultures
            .iter()
            .find(|culture| culture.code.eq_ignore_ascii_case(code))
    }

    pub fn is_known(&self, code: &str) -> bool {
        self.resolve(code).is_some()
    }

    /// All cultures, in catalog order.
    pub fn all(&self) -> &[CultureInfo] {
        &self.cultures
    }
}

/// Whether `code` has the shape of a culture code (`ll`, `ll-RR`, `lll-Scrp-RR`).
pub fn is_culture_code(code: &str) -> bool {
    let pattern = CULTURE_CODE.get_or_init(|| {
        Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z]{4})?(-([A-Za-z]{2}|[0-9]{3}))?$").ok()
    });
    pattern.as_ref().is_some_and(|re| re.is_match(code))
}

macro_rules! culture {
    ($code:expr, $english:expr, $native:expr) => {
        CultureInfo {
            code: $code,
            english_name: $english,
            native_name: $native,
        }
    };
}

fn default_cultures() -> Vec<CultureInfo> {
    vec![
        culture!("ar-SA", "Arabic (Saudi Arabia)", "العربية (المملكة العربية السعودية)"),
        culture!("bg-BG", "Bulgarian (Bulgaria)", "български (България)"),
        culture!("ca-ES", "Catalan (Spain)", "català (Espanya)"),
        culture!("cs-CZ", "Czech (Czech Republic)", "čeština (Česká republika)"),
        culture!("da-DK", "Danish (Denmark)", "dansk (Danmark)"),
        culture!("de-AT", "German (Austria)", "Deutsch (Österreich)"),
        culture!("de-CH", "German (Switzerland)", "Deutsch (Schweiz)"),
        culture!("de-DE", "German (Germany)", "Deutsch (Deutschland)"),
        culture!("el-GR", "Greek (Greece)", "Ελληνικά (Ελλάδα)"),
        culture!("en-AU", "English (Australia)", "English (Australia)"),
        culture!("en-CA", "English (Canada)", "English (Canada)"),
        culture!("en-GB", "English (United Kingdom)", "English (United Kingdom)"),
        culture!("en-IE", "English (Ireland)", "English (Ireland)"),
        culture!("en-US", "English (United States)", "English (United States)"),
        culture!("es-ES", "Spanish (Spain)", "español (España)"),
        culture!("es-MX", "Spanish (Mexico)", "español (México)"),
        culture!("et-EE", "Estonian (Estonia)", "eesti (Eesti)"),
        culture!("fa-IR", "Persian (Iran)", "فارسی (ایران)"),
        culture!("fi-FI", "Finnish (Finland)", "suomi (Suomi)"),
        culture!("fr-BE", "French (Belgium)", "français (Belgique)"),
        culture!("fr-CA", "French (Canada)", "français (Canada)"),
        culture!("fr-FR", "French (France)", "français (France)"),
        culture!("he-IL", "Hebrew (Israel)", "עברית (ישראל)"),
        culture!("hi-IN", "Hindi (India)", "हिन्दी (भारत)"),
        culture!("hr-HR", "Croatian (Croatia)", "hrvatski (Hrvatska)"),
        culture!("hu-HU", "Hungarian (Hungary)", "magyar (Magyarország)"),
        culture!("id-ID", "Indonesian (Indonesia)", "Bahasa Indonesia (Indonesia)"),
        culture!("it-IT", "Italian (Italy)", "italiano (Italia)"),
        culture!("ja-JP", "Japanese (Japan)", "日本語 (日本)"),
        culture!("ko-KR", "Korean (Korea)", "한국어 (대한민국)"),
        culture!("lt-LT", "Lithuanian (Lithuania)", "lietuvių (Lietuva)"),
        culture!("lv-LV", "Latvian (Latvia)", "latviešu (Latvija)"),
        culture!("nb-NO", "Norwegian Bokmål (Norway)", "norsk bokmål (Norge)"),
        culture!("nl-BE", "Dutch (Belgium)", "Nederlands (België)"),
        culture!("nl-NL", "Dutch (Netherlands)", "Nederlands (Nederland)"),
        culture!("pl-PL", "Polish (Poland)", "polski (Polska)"),
        culture!("pt-BR", "Portuguese (Brazil)", "português (Brasil)"),
        culture!("pt-PT", "Portuguese (Portugal)", "português (Portugal)"),
        culture!("ro-RO", "Romanian (Romania)", "română (România)"),
        culture!("ru-RU", "Russian (Russia)", "русский (Россия)"),
        culture!("sk-SK", "Slovak (Slovakia)", "slovenčina (Slovensko)"),
        culture!("sl-SI", "Slovenian (Slovenia)", "slovenščina (Slovenija)"),
        culture!("sr-Latn-RS", "Serbian (Latin, Serbia)", "srpski (Srbija)"),
        culture!("sv-SE", "Swedish (Sweden)", "svenska (Sverige)"),
        culture!("th-TH", "Thai (Thailand)", "ไทย (ไทย)"),
        culture!("tr-TR", "Turkish (Turkey)", "Türkçe (Türkiye)"),
        culture!("uk-UA", "Ukrainian (Ukraine)", "українська (Україна)"),
        culture!("vi-VN", "Vietnamese (Vietnam)", "Tiếng Việt (Việt Nam)"),
        culture!("zh-CN", "Chinese (Simplified, China)", "中文 (中国)"),
        culture!("zh-TW", "Chinese (Traditional, Taiwan)", "中文 (台灣)"),
    ]
}

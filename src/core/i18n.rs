// Locale preference and key lookup against pre-supplied dictionaries.
//
// Dictionaries are nested JSON objects flattened to dotted keys
// (`{"contact": {"title": ".."}}` -> `contact.title`). Templates may contain
// `{{name}}` placeholders. A missing key resolves to the key itself.

use serde_json::Value;
use std::cell::Cell;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Es, Locale::En];

    pub fn tag(self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
        }
    }

    /// Accepts bare tags and regioned ones (`en-US`), case-insensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        match primary.as_str() {
            "es" => Some(Locale::Es),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    /// Stored preference first, then the browser language, then the default.
    pub fn resolve(stored: Option<&str>, browser: Option<&str>) -> Self {
        stored
            .and_then(Locale::from_tag)
            .or_else(|| browser.and_then(Locale::from_tag))
            .unwrap_or_default()
    }
}

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("dictionary is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("dictionary root must be an object")]
    NotAnObject,
}

#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    pub fn from_json(src: &str) -> Result<Self, DictionaryError> {
        let root: Value = serde_json::from_str(src)?;
        if !root.is_object() {
            return Err(DictionaryError::NotAnObject);
        }
        let mut entries = HashMap::new();
        flatten("", &root, &mut entries);
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn t(&self, key: &str) -> String {
        self.t_with(key, &[])
    }

    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        match self.entries.get(key) {
            Some(template) => interpolate(template, args),
            None => key.to_string(),
        }
    }
}

/// Active locale plus one dictionary per locale. Lookups fall back to the
/// default locale's dictionary, then to the key.
#[derive(Debug, Default)]
pub struct Translator {
    locale: Cell<Locale>,
    dictionaries: HashMap<Locale, Dictionary>,
}

impl Translator {
    pub fn new(
        locale: Locale,
        dictionaries: impl IntoIterator<Item = (Locale, Dictionary)>,
    ) -> Self {
        Self {
            locale: Cell::new(locale),
            dictionaries: dictionaries.into_iter().collect(),
        }
    }

    #[inline]
    pub fn locale(&self) -> Locale {
        self.locale.get()
    }

    pub fn set_locale(&self, locale: Locale) {
        self.locale.set(locale);
    }

    pub fn t(&self, key: &str) -> String {
        self.t_with(key, &[])
    }

    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        [self.locale(), Locale::default()]
            .into_iter()
            .filter_map(|l| self.dictionaries.get(&l))
            .find(|d| d.contains(key))
            .map(|d| d.t_with(key, args))
            .unwrap_or_else(|| key.to_string())
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                let key = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{}.{}", prefix, k)
                };
                flatten(&key, v, out);
            }
        }
        Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        Value::Null => {}
        other => {
            out.insert(prefix.to_string(), other.to_string());
        }
    }
}

/// Replace `{{name}}` (whitespace inside the braces allowed) with the
/// matching argument. Unknown placeholders are left as written.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let name = after[..end].trim();
                match args.iter().find(|(k, _)| *k == name) {
                    Some((_, v)) => out.push_str(v),
                    None => out.push_str(&rest[start..start + 2 + end + 2]),
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

// Host-side tests for locale resolution and dictionary lookup.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod i18n {
    include!("../src/core/i18n.rs");
}

use i18n::*;

const ES: &str = include_str!("../locales/es.json");
const EN: &str = include_str!("../locales/en.json");

fn translator(locale: Locale) -> Translator {
    Translator::new(
        locale,
        [
            (Locale::Es, Dictionary::from_json(ES).unwrap()),
            (Locale::En, Dictionary::from_json(EN).unwrap()),
        ],
    )
}

#[test]
fn locale_resolution_order() {
    assert_eq!(Locale::resolve(Some("en"), Some("es-CO")), Locale::En);
    assert_eq!(Locale::resolve(None, Some("en-US")), Locale::En);
    assert_eq!(Locale::resolve(Some("fr"), Some("de")), Locale::Es);
    assert_eq!(Locale::resolve(None, None), Locale::Es);
    assert_eq!(Locale::from_tag("EN_gb"), Some(Locale::En));
    assert_eq!(Locale::from_tag(""), None);
}

#[test]
fn bundled_dictionaries_have_the_same_keys() {
    let es = Dictionary::from_json(ES).unwrap();
    let en = Dictionary::from_json(EN).unwrap();
    assert_eq!(es.len(), en.len());
    for key in [
        "contact.title",
        "contact.form.name",
        "contact.form.email",
        "contact.form.message",
        "contact.form.submit",
        "contact.form.validation.required",
        "contact.form.validation.email",
        "contact.form.status.sending",
        "contact.form.status.success",
        "contact.form.status.error",
    ] {
        assert!(es.contains(key), "es missing {}", key);
        assert!(en.contains(key), "en missing {}", key);
    }
}

#[test]
fn lookup_with_placeholders() {
    let tr = translator(Locale::En);
    let label = tr.t("contact.form.name");
    assert_eq!(label, "Name");
    assert_eq!(
        tr.t_with("contact.form.validation.required", &[("field", label.as_str())]),
        "The Name field is required."
    );
}

#[test]
fn switching_locale_changes_lookups() {
    let tr = translator(Locale::En);
    let en = tr.t("contact.form.submit");
    tr.set_locale(Locale::Es);
    assert_eq!(tr.locale(), Locale::Es);
    assert_ne!(tr.t("contact.form.submit"), en);
}

#[test]
fn missing_keys_fall_back() {
    let es_only = Dictionary::from_json(r#"{"only": {"es": "solo"}}"#).unwrap();
    let tr = Translator::new(
        Locale::En,
        [(Locale::Es, es_only), (Locale::En, Dictionary::default())],
    );
    assert_eq!(tr.t("only.es"), "solo");
    assert_eq!(tr.t("nowhere"), "nowhere");
}

#[test]
fn flattening_rules() {
    let d = Dictionary::from_json(r#"{"a": {"b": "x", "n": 3, "z": null}, "t": true}"#).unwrap();
    assert_eq!(d.t("a.b"), "x");
    assert_eq!(d.t("a.n"), "3");
    assert_eq!(d.t("t"), "true");
    assert!(!d.contains("a.z"));
    assert!(matches!(
        Dictionary::from_json("[1, 2]"),
        Err(DictionaryError::NotAnObject)
    ));
    assert!(matches!(
        Dictionary::from_json("{"),
        Err(DictionaryError::Json(_))
    ));
}

#[test]
fn interpolation() {
    assert_eq!(interpolate("Hi {{ who }}!", &[("who", "Ana")]), "Hi Ana!");
    assert_eq!(interpolate("{{a}}{{b}}", &[("a", "1"), ("b", "2")]), "12");
    assert_eq!(interpolate("keep {{unknown}}", &[]), "keep {{unknown}}");
    assert_eq!(interpolate("open {{ end", &[("end", "x")]), "open {{ end");
}

// Inline style helpers. Styles are written one property at a time so other
// declarations on the same element survive.

/// Split `prop:value;prop:value` into trimmed pairs. An empty value means
/// "remove this property".
pub fn declarations(css: &str) -> impl Iterator<Item = (&str, &str)> {
    css.split(';').filter_map(|decl| {
        let (prop, value) = decl.split_once(':')?;
        let prop = prop.trim();
        (!prop.is_empty()).then(|| (prop, value.trim()))
    })
}

/// Show or hide an element through `display` alone.
pub fn display_style(hidden: bool) -> &'static str {
    if hidden {
        "display:none"
    } else {
        "display:"
    }
}

//! Property name conversion between schema keys and CSS declarations.

/// `fontSize` → `font-size`
///
/// Every ASCII uppercase letter becomes `-` followed by its lowercase form.
/// No other validation is performed.
pub fn camel_to_kebab(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// `background-color` → `backgroundColor`
///
/// The first segment is kept as-is, every following segment gets its first
/// character uppercased.
pub fn kebab_to_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (index, word) in name.split('-').enumerate() {
        if index == 0 {
            out.push_str(word);
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_to_kebab() {
        assert_eq!(camel_to_kebab("fontSize"), "font-size");
        assert_eq!(camel_to_kebab("backgroundColor"), "background-color");
        assert_eq!(camel_to_kebab("borderTopLeftRadius"), "border-top-left-radius");
        assert_eq!(camel_to_kebab("padding"), "padding");
    }

    #[test]
    fn test_kebab_to_camel() {
        assert_eq!(kebab_to_camel("font-size"), "fontSize");
        assert_eq!(kebab_to_camel("background-color"), "backgroundColor");
        assert_eq!(kebab_to_camel("margin"), "margin");
    }

    #[test]
    fn test_single_hyphen_properties_round_trip() {
        for css in ["font-size", "background-color", "line-height", "max-width", "font-weight"] {
            let camel = kebab_to_camel(css);
            assert_eq!(camel_to_kebab(&camel), css);
            assert_eq!(kebab_to_camel(&camel_to_kebab(&camel)), camel);
        }
    }
}

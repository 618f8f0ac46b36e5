// src/core/sanitize.rs

const NAMED_ENTITIES: &[(&str, &str)] = &[
    ("nbsp", " "),
    ("amp", "&"),
    ("euro", "€"),
    ("pound", "£"),
    ("quot", "\""),
    ("apos", "'"),
    ("lt", "<"),
    ("gt", ">"),
    // Latin-1 letters seen in player names
    ("Aacute", "Á"), ("aacute", "á"), ("Agrave", "À"), ("agrave", "à"),
    ("Acirc", "Â"), ("acirc", "â"), ("Atilde", "Ã"), ("atilde", "ã"),
    ("Auml", "Ä"), ("auml", "ä"), ("Aring", "Å"), ("aring", "å"),
    ("AElig", "Æ"), ("aelig", "æ"), ("Ccedil", "Ç"), ("ccedil", "ç"),
    ("Eacute", "É"), ("eacute", "é"), ("Egrave", "È"), ("egrave", "è"),
    ("Ecirc", "Ê"), ("ecirc", "ê"), ("Euml", "Ë"), ("euml", "ë"),
    ("Iacute", "Í"), ("iacute", "í"), ("Igrave", "Ì"), ("igrave", "ì"),
    ("Icirc", "Î"), ("icirc", "î"), ("Iuml", "Ï"), ("iuml", "ï"),
    ("Ntilde", "Ñ"), ("ntilde", "ñ"),
    ("Oacute", "Ó"), ("oacute", "ó"), ("Ograve", "Ò"), ("ograve", "ò"),
    ("Ocirc", "Ô"), ("ocirc", "ô"), ("Otilde", "Õ"), ("otilde", "õ"),
    ("Ouml", "Ö"), ("ouml", "ö"), ("Oslash", "Ø"), ("oslash", "ø"),
    ("Uacute", "Ú"), ("uacute", "ú"), ("Ugrave", "Ù"), ("ugrave", "ù"),
    ("Ucirc", "Û"), ("ucirc", "û"), ("Uuml", "Ü"), ("uuml", "ü"),
    ("Yacute", "Ý"), ("yacute", "ý"), ("yuml", "ÿ"), ("szlig", "ß"),
];

/// Decode the named entities we meet on squad pages plus numeric
/// references (`&#8364;`, `&#x20AC;`). Unknown entities are left as-is.
pub fn decode_entities(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];

        let decoded = after
            .find(';')
            .filter(|&semi| semi > 0 && semi <= 10)
            .and_then(|semi| decode_one(&after[..semi]).map(|d| (d, semi)));

        match decoded {
            Some((text, semi)) => {
                out.push_str(&text);
                rest = &after[semi + 1..];
            }
            None => {
                out.push('&');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_one(entity: &str) -> Option<String> {
    if let Some(num) = entity.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        return char::from_u32(code).map(String::from);
    }
    NAMED_ENTITIES
        .iter()
        .find(|(name, _)| *name == entity)
        .map(|(_, text)| s!(*text))
}

/// Collapse whitespace runs (NBSP included) to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_named_and_numeric_entities() {
        assert_eq!(decode_entities("&euro;12.50m"), "€12.50m");
        assert_eq!(decode_entities("&#8364;1&#x2c;5"), "€1,5");
        assert_eq!(decode_entities("&bogus;x"), "&bogus;x");
        assert_eq!(decode_entities("R&D & co"), "R&D & co");
    }

    #[test]
    fn decodes_accented_letters_in_names() {
        assert_eq!(decode_entities("Vin&iacute;cius J&uacute;nior"), "Vinícius Júnior");
        assert_eq!(decode_entities("&Eacute;der Milit&atilde;o"), "Éder Militão");
        assert_eq!(decode_entities("M&uuml;ller &amp; Ca&ntilde;izares"), "Müller & Cañizares");
    }

    #[test]
    fn normalize_ws_collapses_and_trims() {
        assert_eq!(normalize_ws("  Jude \n\t Bellingham  "), "Jude Bellingham");
        assert_eq!(normalize_ws("\u{a0}€80.00m\u{a0}"), "€80.00m");
    }
}

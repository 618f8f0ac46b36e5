// src/core/html.rs
//! Tolerant HTML scanning over string slices.
//!
//! No DOM is built. Elements are found by scanning tags and balancing
//! open/close tags of the same name, which is enough for the table-heavy
//! pages we read. Tag and attribute names are matched case-insensitively.
//! Comments and `<script>`/`<style>` bodies are skipped. An element that is
//! never closed extends to the end of the slice it was found in.

use super::sanitize::{decode_entities, normalize_ws};

const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track", "wbr",
];
const RAW_TEXT_TAGS: &[&str] = &["script", "style"];

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Remove all tags `<...>` from the string, then collapse whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&out)
}

/* ---------- tags ---------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Tag<'a> {
    start: usize,
    end: usize, // one past '>'
    name: &'a str,
    closing: bool,
    self_closing: bool,
}

impl Tag<'_> {
    fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

struct Tags<'a> {
    s: &'a str,
    pos: usize,
}

impl<'a> Tags<'a> {
    fn new(s: &'a str, pos: usize) -> Self {
        Self { s, pos }
    }
}

impl<'a> Iterator for Tags<'a> {
    type Item = Tag<'a>;

    fn next(&mut self) -> Option<Tag<'a>> {
        let tag = next_tag(self.s, self.pos)?;
        self.pos = tag.end;

        let raw = RAW_TEXT_TAGS.iter().any(|t| tag.is(t));
        if raw && !tag.closing && !tag.self_closing {
            self.pos = match find_close_tag(&self.s[self.pos..], tag.name) {
                Some(rel) => self.pos + rel,
                None => self.s.len(),
            };
        }
        Some(tag)
    }
}

fn next_tag(s: &str, mut pos: usize) -> Option<Tag<'_>> {
    let bytes = s.as_bytes();
    while let Some(rel) = s.get(pos..)?.find('<') {
        let lt = pos + rel;
        let rest = &s[lt..];

        if rest.starts_with("<!--") {
            pos = lt + rest.find("-->")? + 3;
            continue;
        }
        if rest.starts_with("<!") || rest.starts_with("<?") {
            pos = lt + rest.find('>')? + 1;
            continue;
        }

        let closing = rest.starts_with("</");
        let name_start = lt + if closing { 2 } else { 1 };
        let name_len = bytes[name_start..]
            .iter()
            .take_while(|b| b.is_ascii_alphanumeric() || **b == b'-')
            .count();
        if name_len == 0 || !bytes[name_start].is_ascii_alphabetic() {
            // A stray '<' in text
            pos = lt + 1;
            continue;
        }

        let name = &s[name_start..name_start + name_len];
        let end = tag_end(s, name_start + name_len)?;
        let self_closing = !closing && s[..end - 1].ends_with('/');
        return Some(Tag { start: lt, end, name, closing, self_closing });
    }
    None
}

/// Offset of the first `</name` in `s`, case-insensitive.
fn find_close_tag(s: &str, name: &str) -> Option<usize> {
    let name = name.as_bytes();
    let mut from = 0;
    while let Some(rel) = s.get(from..)?.find("</") {
        let at = from + rel;
        let after = &s.as_bytes()[at + 2..];
        if after.len() >= name.len() && after[..name.len()].eq_ignore_ascii_case(name) {
            return Some(at);
        }
        from = at + 2;
    }
    None
}

/// Index one past the `>` closing a tag, skipping quoted attribute values.
fn tag_end(s: &str, from: usize) -> Option<usize> {
    let mut quote: Option<u8> = None;
    for (i, &b) in s.as_bytes()[from..].iter().enumerate() {
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None if b == b'"' || b == b'\'' => quote = Some(b),
            None if b == b'>' => return Some(from + i + 1),
            None => {}
        }
    }
    None
}

/// Value of attribute `name` inside an opening tag like `<td class="a b">`.
/// Bare attributes yield `Some("")`.
pub fn attr<'a>(open_tag: &'a str, name: &str) -> Option<&'a str> {
    let b = open_tag.as_bytes();
    let len = b.len();

    // Skip '<' and the tag name
    let mut i = 1;
    while i < len && (b[i].is_ascii_alphanumeric() || b[i] == b'-') {
        i += 1;
    }

    loop {
        while i < len && (b[i].is_ascii_whitespace() || b[i] == b'/') {
            i += 1;
        }
        if i >= len || b[i] == b'>' {
            return None;
        }

        let key_start = i;
        while i < len && !b[i].is_ascii_whitespace() && !matches!(b[i], b'=' | b'>' | b'/') {
            i += 1;
        }
        let key = &open_tag[key_start..i];

        while i < len && b[i].is_ascii_whitespace() {
            i += 1;
        }
        let mut value = "";
        if i < len && b[i] == b'=' {
            i += 1;
            while i < len && b[i].is_ascii_whitespace() {
                i += 1;
            }
            if i < len && (b[i] == b'"' || b[i] == b'\'') {
                let q = b[i];
                let v_start = i + 1;
                i = v_start;
                while i < len && b[i] != q {
                    i += 1;
                }
                value = &open_tag[v_start..i.min(len)];
                i += 1;
            } else {
                let v_start = i;
                while i < len && !b[i].is_ascii_whitespace() && b[i] != b'>' {
                    i += 1;
                }
                value = &open_tag[v_start..i];
            }
        }

        if key.eq_ignore_ascii_case(name) {
            return Some(value);
        }
        if i == key_start {
            // No progress; step over one char
            i += open_tag[i..].chars().next().map_or(1, char::len_utf8);
        }
    }
}

/* ---------- elements ---------- */

/// One element found inside some scope slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Element<'a> {
    name: &'a str,
    open: &'a str,
    inner: &'a str,
    outer: &'a str,
}

impl<'a> Element<'a> {
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// HTML between the opening and closing tag; may contain nested tags.
    pub fn inner(&self) -> &'a str {
        self.inner
    }

    pub fn outer(&self) -> &'a str {
        self.outer
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        attr(self.open, name)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|v| v.split_ascii_whitespace().any(|c| c == class))
    }

    /// Visible text: tags stripped, entities decoded, whitespace collapsed.
    pub fn text(&self) -> String {
        normalize_ws(&decode_entities(&strip_tags(self.inner)))
    }

    /// All descendants named `tag`, in document order (nested ones included).
    pub fn find_all(&self, tag: &str) -> Vec<Element<'a>> {
        find_all(self.inner, tag)
    }

    /// First descendant matching `sel`.
    pub fn find(&self, sel: &Compound) -> Option<Element<'a>> {
        find(self.inner, sel)
    }
}

fn element_at<'a>(scope: &'a str, open: Tag<'a>) -> Element<'a> {
    let open_text = &scope[open.start..open.end];
    let void = VOID_TAGS.iter().any(|t| open.is(t));
    if open.self_closing || void || open.closing {
        return Element { name: open.name, open: open_text, inner: "", outer: open_text };
    }

    let mut depth = 1usize;
    for tag in Tags::new(scope, open.end) {
        if !tag.is(open.name) {
            continue;
        }
        if tag.closing {
            depth -= 1;
            if depth == 0 {
                return Element {
                    name: open.name,
                    open: open_text,
                    inner: &scope[open.end..tag.start],
                    outer: &scope[open.start..tag.end],
                };
            }
        } else if !tag.self_closing {
            depth += 1;
        }
    }

    // Never closed
    Element {
        name: open.name,
        open: open_text,
        inner: &scope[open.end..],
        outer: &scope[open.start..],
    }
}

/// All elements named `tag` inside `scope`, in document order.
pub fn find_all<'a>(scope: &'a str, tag: &str) -> Vec<Element<'a>> {
    Tags::new(scope, 0)
        .filter(|t| !t.closing && t.is(tag))
        .map(|t| element_at(scope, t))
        .collect()
}

/// First element inside `scope` matching `sel`.
pub fn find<'a>(scope: &'a str, sel: &Compound) -> Option<Element<'a>> {
    matching(scope, sel).next()
}

fn matching<'a, 's>(scope: &'a str, sel: &'s Compound) -> impl Iterator<Item = Element<'a>> + 's
where
    'a: 's,
{
    Tags::new(scope, 0)
        .filter(move |t| !t.closing && sel.matches_open(t.name, &scope[t.start..t.end]))
        .map(move |t| element_at(scope, t))
}

/// Elements matching `sel` that are not nested inside another element of
/// the same tag within `scope`. For a tagless compound this falls back to
/// all matching descendants.
pub fn children<'a>(scope: &'a str, sel: &Compound) -> Vec<Element<'a>> {
    let Some(tag_name) = sel.tag.as_deref() else {
        return matching(scope, sel).collect();
    };

    let mut out = Vec::new();
    let mut tags = Tags::new(scope, 0);
    while let Some(tag) = tags.next() {
        if tag.closing || !tag.is(tag_name) {
            continue;
        }
        let el = element_at(scope, tag);
        if sel.matches(&el) {
            out.push(el);
        }
        // Do not descend into same-tag elements
        tags.pos = tag.start + el.outer.len();
    }
    out
}

/* ---------- selectors ---------- */

/// A compound selector such as `div.large-8.columns` or `#tm-main`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Compound {
    /// Never fails; unknown syntax is read as part of a name.
    pub fn parse(s: &str) -> Self {
        let mut out = Compound::default();
        let s = s.trim();

        let mut parts: Vec<(char, String)> = Vec::new();
        let mut kind = ' ';
        let mut cur = s!();
        for ch in s.chars() {
            if ch == '#' || ch == '.' {
                parts.push((kind, std::mem::take(&mut cur)));
                kind = ch;
            } else {
                cur.push(ch);
            }
        }
        parts.push((kind, cur));

        for (kind, name) in parts.into_iter().filter(|(_, n)| !n.is_empty()) {
            match kind {
                '#' => out.id = Some(name),
                '.' => out.classes.push(name),
                _ => out.tag = Some(to_lower(&name)),
            }
        }
        out
    }

    pub fn matches(&self, el: &Element<'_>) -> bool {
        self.matches_open(el.name, el.open)
    }

    fn matches_open(&self, name: &str, open: &str) -> bool {
        if let Some(tag) = &self.tag {
            if !name.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if attr(open, "id") != Some(id.as_str()) {
                return false;
            }
        }
        if self.classes.is_empty() {
            return true;
        }
        let Some(class_attr) = attr(open, "class") else { return false };
        self.classes
            .iter()
            .all(|c| class_attr.split_ascii_whitespace().any(|have| have == c))
    }
}

/// A chain of compounds joined by child combinators (`a > b > c`).
/// The first compound matches anywhere in the document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selector {
    steps: Vec<Compound>,
}

impl Selector {
    pub fn parse(s: &str) -> Self {
        let steps = s
            .split('>')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(Compound::parse)
            .collect();
        Self { steps }
    }
}

/// First element matching the whole selector chain, trying every candidate
/// at each level before giving up.
pub fn select<'a>(doc: &'a str, sel: &Selector) -> Option<Element<'a>> {
    let (first, rest) = sel.steps.split_first()?;
    matching(doc, first).find_map(|el| select_below(el, rest))
}

fn select_below<'a>(el: Element<'a>, steps: &[Compound]) -> Option<Element<'a>> {
    let Some((step, rest)) = steps.split_first() else {
        return Some(el);
    };
    children(el.inner, step)
        .into_iter()
        .find_map(|child| select_below(child, rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attr_handles_quote_styles_and_case() {
        let tag = r#"<TD Class="rechts hauptlink" data-x='1 2' width=50 nowrap>"#;
        assert_eq!(attr(tag, "class"), Some("rechts hauptlink"));
        assert_eq!(attr(tag, "data-x"), Some("1 2"));
        assert_eq!(attr(tag, "width"), Some("50"));
        assert_eq!(attr(tag, "nowrap"), Some(""));
        assert_eq!(attr(tag, "id"), None);
    }

    #[test]
    fn attr_survives_empty_key_before_multibyte_text() {
        assert_eq!(attr(r#"<td ="x"é class="a">"#, "class"), Some("a"));
        assert_eq!(attr(r#"<td ="x"é>"#, "class"), None);
        assert_eq!(attr("<td =é>", "class"), None);
    }

    #[test]
    fn malformed_attributes_do_not_break_extraction() {
        let html = r#"<div ="x"é class="box"><td class="rechts hauptlink">€1.00m</td></div>"#;
        let el = find(html, &Compound::parse("div.box")).unwrap();
        assert_eq!(el.find(&Compound::parse("td.rechts")).unwrap().text(), "€1.00m");
    }

    #[test]
    fn find_all_balances_nested_same_tags() {
        let html = "<table><tr><td>a<table><tr><td>x</td></tr></table></td><td>b</td></tr></table>";
        let tds = find_all(html, "td");
        assert_eq!(tds.len(), 3);
        assert_eq!(tds[0].text(), "ax");
        assert_eq!(tds[1].text(), "x");
        assert_eq!(tds[2].text(), "b");
    }

    #[test]
    fn scripts_and_comments_are_skipped() {
        let html = r#"<div><script>var s = "<td>fake</td>";</script><!-- <td>no</td> --><td>yes</td></div>"#;
        let tds = find_all(html, "td");
        assert_eq!(tds.len(), 1);
        assert_eq!(tds[0].text(), "yes");
    }

    #[test]
    fn unclosed_element_runs_to_scope_end() {
        let tds = find_all("<tr><td>one<td>two", "td");
        assert_eq!(tds.len(), 2);
        assert_eq!(tds[1].inner(), "two");
    }

    #[test]
    fn compound_parse_splits_tag_id_and_classes() {
        let c = Compound::parse("div.large-8.columns");
        assert_eq!(c.tag.as_deref(), Some("div"));
        assert_eq!(c.classes, vec!["large-8", "columns"]);

        let c = Compound::parse("#tm-main");
        assert_eq!(c.tag, None);
        assert_eq!(c.id.as_deref(), Some("tm-main"));
    }

    #[test]
    fn class_match_requires_every_class() {
        let html = r#"<td class="rechts">1</td><td class="hauptlink rechts">2</td>"#;
        let el = find(html, &Compound::parse("td.rechts.hauptlink")).unwrap();
        assert_eq!(el.text(), "2");
    }

    #[test]
    fn select_follows_child_chain_and_backtracks() {
        let html = r#"
            <main id="m">
              <div class="box"><p>first box, no table</p></div>
              <div class="box"><div class="inner"><table class="items"></table></div></div>
            </main>"#;
        let el = select(html, &Selector::parse("#m > div.box > div.inner")).unwrap();
        assert!(el.find(&Compound::parse("table.items")).is_some());
    }

    #[test]
    fn child_step_does_not_reach_into_nested_same_tag() {
        let html = r#"<section id="s"><div class="a"><div class="b">deep</div></div></section>"#;
        assert!(select(html, &Selector::parse("#s > div.b")).is_none());
        assert!(select(html, &Selector::parse("#s > div.a > div.b")).is_some());
    }
}

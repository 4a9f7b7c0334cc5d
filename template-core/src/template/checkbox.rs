use std::ops::Range;

use crate::documents::{parse_on_off, Checkbox};
use crate::reader::FromXML;
use crate::TemplateError;

const BOOKMARK_START: &str = "<w:bookmarkStart";
const CHECKBOX_OPEN: &str = "<w14:checkbox";
const CHECKBOX_CLOSE: &str = "</w14:checkbox>";
const CHECKED_OPEN: &str = "<w14:checked";
const PARAGRAPH_CLOSE: &str = "</w:p>";

/// A checkbox control resolved from a bookmark name: the parsed property
/// block, its current state, and the byte range of the `w:val` attribute
/// value inside `w14:checked`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ResolvedCheckbox {
    pub checkbox: Checkbox,
    pub checked: bool,
    pub val: Range<usize>,
}

/// Resolves `name` to the nearest checkbox control within the enclosing
/// paragraph. The marker is either a `w:bookmarkStart` whose `w:name` equals
/// `name` (bare or `${name}`), or a literal `${name}` placeholder in run
/// text. The nearest preceding `w14:checkbox` wins; if none precedes the
/// marker inside the paragraph, the nearest following one is used.
pub(crate) fn resolve(xml: &str, name: &str) -> Result<ResolvedCheckbox, TemplateError> {
    let marker =
        find_marker(xml, name).ok_or_else(|| TemplateError::CheckboxNotFound(name.to_string()))?;
    let scope = paragraph_bounds(xml, marker);
    let open = rfind_element(&xml[scope.start..marker], CHECKBOX_OPEN)
        .map(|i| scope.start + i)
        .or_else(|| find_element(&xml[marker..scope.end], CHECKBOX_OPEN).map(|i| marker + i))
        .ok_or_else(|| TemplateError::CheckboxNotFound(name.to_string()))?;
    let close = xml[open..]
        .find(CHECKBOX_CLOSE)
        .map(|i| open + i + CHECKBOX_CLOSE.len())
        .ok_or_else(|| malformed("w14:checkbox element is not closed"))?;
    let checkbox = Checkbox::from_xml(xml[open..close].as_bytes()).map_err(|e| {
        TemplateError::MalformedDocument(format!("w14:checkbox block is not well-formed: {}", e))
    })?;
    let checked_at = find_element(&xml[open..close], CHECKED_OPEN)
        .map(|i| open + i)
        .ok_or_else(|| malformed("w14:checkbox has no w14:checked child"))?;
    let tag_end = xml[checked_at..close]
        .find('>')
        .map(|i| checked_at + i)
        .ok_or_else(|| malformed("w14:checked tag is not terminated"))?;
    let val = attr_value_range(&xml[checked_at..tag_end], "w:val")
        .map(|r| checked_at + r.start..checked_at + r.end)
        .ok_or_else(|| malformed("w14:checked has no w:val attribute"))?;
    let checked = parse_on_off(&xml[val.clone()]).ok_or_else(|| {
        TemplateError::MalformedDocument(format!(
            "`{}` is not a valid w14:checked value",
            &xml[val.clone()]
        ))
    })?;
    Ok(ResolvedCheckbox {
        checkbox,
        checked,
        val,
    })
}

/// Splices `value` over `range`, leaving every other byte of `xml` intact.
pub(crate) fn replace_range(xml: &str, range: &Range<usize>, value: &str) -> String {
    let mut next = String::with_capacity(xml.len() - range.len() + value.len());
    next.push_str(&xml[..range.start]);
    next.push_str(value);
    next.push_str(&xml[range.end..]);
    next
}

fn malformed(msg: &str) -> TemplateError {
    TemplateError::MalformedDocument(msg.to_string())
}

fn find_marker(xml: &str, name: &str) -> Option<usize> {
    let placeholder = format!("${{{}}}", name);
    let mut pos = 0;
    while let Some(i) = xml[pos..].find(BOOKMARK_START) {
        let at = pos + i;
        let tag_end = match xml[at..].find('>') {
            Some(i) => at + i,
            None => break,
        };
        let tag = &xml[at..tag_end];
        if let Some(r) = attr_value_range(tag, "w:name") {
            let v = &tag[r];
            if v == name || v == placeholder {
                return Some(at);
            }
        }
        pos = tag_end + 1;
    }
    xml.find(&placeholder)
}

// Scope of the search: the paragraph enclosing `pos`, or the stretch between
// the adjacent paragraphs when `pos` lies outside any `w:p`.
fn paragraph_bounds(xml: &str, pos: usize) -> Range<usize> {
    let open = match (xml[..pos].rfind("<w:p>"), xml[..pos].rfind("<w:p ")) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (a, b) => a.or(b),
    };
    let close = xml[..pos].rfind(PARAGRAPH_CLOSE);
    let start = match (open, close) {
        (Some(o), Some(c)) if c > o => c + PARAGRAPH_CLOSE.len(),
        (Some(o), _) => o,
        (None, Some(c)) => c + PARAGRAPH_CLOSE.len(),
        (None, None) => 0,
    };
    let end = xml[pos..]
        .find(PARAGRAPH_CLOSE)
        .map(|i| pos + i + PARAGRAPH_CLOSE.len())
        .unwrap_or(xml.len());
    start..end
}

fn is_tag_boundary(b: Option<u8>) -> bool {
    matches!(b, Some(b' ' | b'\t' | b'\r' | b'\n' | b'/' | b'>'))
}

// `find`/`rfind` with a boundary check so `<w14:checked` does not match
// `<w14:checkedState`.
fn find_element(xml: &str, needle: &str) -> Option<usize> {
    let mut pos = 0;
    while let Some(i) = xml[pos..].find(needle) {
        let at = pos + i;
        if is_tag_boundary(xml.as_bytes().get(at + needle.len()).copied()) {
            return Some(at);
        }
        pos = at + needle.len();
    }
    None
}

fn rfind_element(xml: &str, needle: &str) -> Option<usize> {
    let mut end = xml.len();
    while let Some(at) = xml[..end].rfind(needle) {
        if is_tag_boundary(xml.as_bytes().get(at + needle.len()).copied()) {
            return Some(at);
        }
        end = at;
    }
    None
}

fn attr_value_range(tag: &str, name: &str) -> Option<Range<usize>> {
    let bytes = tag.as_bytes();
    let mut pos = 0;
    while let Some(i) = tag[pos..].find(name) {
        let at = pos + i;
        pos = at + name.len();
        if at == 0 || !bytes[at - 1].is_ascii_whitespace() {
            continue;
        }
        let mut cursor = at + name.len();
        while bytes.get(cursor).is_some_and(|b| b.is_ascii_whitespace()) {
            cursor += 1;
        }
        if bytes.get(cursor) != Some(&b'=') {
            continue;
        }
        cursor += 1;
        while bytes.get(cursor).is_some_and(|b| b.is_ascii_whitespace()) {
            cursor += 1;
        }
        let quote = match bytes.get(cursor).copied() {
            Some(q @ (b'"' | b'\'')) => q as char,
            _ => continue,
        };
        let start = cursor + 1;
        let end = tag[start..].find(quote)? + start;
        return Some(start..end);
    }
    None
}

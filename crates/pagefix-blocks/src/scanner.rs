//! Streaming tag scanner for a single element type.
//!
//! Yields open/close events for one element name (e.g. `div`) and ignores
//! everything else, which is what the depth scan in [`find_element_end`]
//! needs. This is not an HTML parser:
//!
//! - element names match as whole, ASCII case-insensitive tag names
//!   (`<divider>` is not a `div`)
//! - quoted attribute values may contain `>`
//! - tags inside `<!-- ... -->` comments are skipped

use std::ops::Range;

/// Whether a tag opens or closes the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Open,
    Close,
}

/// A single open or close tag of the scanned element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEvent {
    pub kind: TagKind,
    /// Byte range of the whole tag, `<` through `>`
    pub span: Range<usize>,
}

impl TagEvent {
    /// The tag's source text.
    pub fn text<'t>(&self, source: &'t str) -> &'t str {
        &source[self.span.clone()]
    }
}

/// Iterator over open/close tags of one element type.
#[derive(Debug, Clone)]
pub struct TagScanner<'a> {
    text: &'a str,
    name: String,
    pos: usize,
}

impl<'a> TagScanner<'a> {
    pub fn new(text: &'a str, element: &str) -> Self {
        Self {
            text,
            name: element.to_ascii_lowercase(),
            pos: 0,
        }
    }

    /// Start scanning at `offset`, which must be a char boundary.
    pub fn starting_at(mut self, offset: usize) -> Self {
        self.pos = offset.min(self.text.len());
        self
    }

    /// Only the opening tags.
    pub fn open_tags(self) -> impl Iterator<Item = TagEvent> + 'a {
        self.filter(|e| e.kind == TagKind::Open)
    }

    fn name_matches_at(&self, at: usize) -> bool {
        let bytes = self.text.as_bytes();
        let end = at + self.name.len();
        let Some(candidate) = bytes.get(at..end) else {
            return false;
        };
        if !candidate.eq_ignore_ascii_case(self.name.as_bytes()) {
            return false;
        }
        match bytes.get(end) {
            None => true,
            Some(b) => is_space(*b) || *b == b'>' || *b == b'/',
        }
    }
}

impl Iterator for TagScanner<'_> {
    type Item = TagEvent;

    fn next(&mut self) -> Option<TagEvent> {
        loop {
            let lt = self.pos + self.text.get(self.pos..)?.find('<')?;
            let rest = &self.text[lt..];

            if let Some(comment) = rest.strip_prefix("<!--") {
                match comment.find("-->") {
                    Some(end) => {
                        self.pos = lt + 4 + end + 3;
                        continue;
                    }
                    None => {
                        self.pos = self.text.len();
                        return None;
                    }
                }
            }

            let (kind, name_start) = if rest.starts_with("</") {
                (TagKind::Close, lt + 2)
            } else {
                (TagKind::Open, lt + 1)
            };

            if self.name_matches_at(name_start) {
                let Some(end) = tag_end(self.text, name_start + self.name.len()) else {
                    // Unterminated tag runs to end of input
                    self.pos = self.text.len();
                    return None;
                };
                self.pos = end;
                return Some(TagEvent {
                    kind,
                    span: lt..end,
                });
            }

            self.pos = lt + 1;
        }
    }
}

/// Find the end of the element whose opening tag starts at `start`.
///
/// Counts only tags of `element`: +1 per open, -1 per close, and stops when
/// the depth returns to zero. Returns the span from `start` through the
/// matching closing tag, or `None` if the document ends first.
///
/// # Example
/// ```
/// use pagefix_blocks::scanner::find_element_end;
///
/// let html = "<div a><div b></div></div><p>after</p>";
/// assert_eq!(find_element_end(html, 0, "div"), Some(0..26));
/// assert_eq!(find_element_end("<div><div></div>", 0, "div"), None);
/// ```
pub fn find_element_end(text: &str, start: usize, element: &str) -> Option<Range<usize>> {
    let mut depth = 0usize;
    for event in TagScanner::new(text, element).starting_at(start) {
        match event.kind {
            TagKind::Open => depth += 1,
            TagKind::Close => {
                if depth == 0 {
                    // Close tag before our opening tag was seen
                    continue;
                }
                depth -= 1;
                if depth == 0 {
                    return Some(start..event.span.end);
                }
            }
        }
    }
    None
}

/// Read an attribute value from a single start tag.
///
/// Returns `Some("")` for attributes without a value and `None` when the
/// attribute is absent. Attribute names compare ASCII case-insensitively.
///
/// # Example
/// ```
/// use pagefix_blocks::scanner::attribute;
///
/// let tag = r#"<div class="a b" data-block='pitch' hidden>"#;
/// assert_eq!(attribute(tag, "class"), Some("a b"));
/// assert_eq!(attribute(tag, "data-block"), Some("pitch"));
/// assert_eq!(attribute(tag, "hidden"), Some(""));
/// assert_eq!(attribute(tag, "id"), None);
/// ```
pub fn attribute<'t>(tag: &'t str, wanted: &str) -> Option<&'t str> {
    let bytes = tag.as_bytes();
    let len = bytes.len();
    if bytes.first() != Some(&b'<') || bytes.get(1) == Some(&b'/') {
        return None;
    }

    // Skip the tag name
    let mut i = 1;
    while i < len && !is_space(bytes[i]) && bytes[i] != b'>' && bytes[i] != b'/' {
        i += 1;
    }

    loop {
        while i < len && (is_space(bytes[i]) || bytes[i] == b'/') {
            i += 1;
        }
        if i >= len || bytes[i] == b'>' {
            return None;
        }

        let name_start = i;
        while i < len && !is_space(bytes[i]) && !matches!(bytes[i], b'=' | b'>' | b'/') {
            i += 1;
        }
        let name = &tag[name_start..i];

        while i < len && is_space(bytes[i]) {
            i += 1;
        }

        let mut value = "";
        if bytes.get(i) == Some(&b'=') {
            i += 1;
            while i < len && is_space(bytes[i]) {
                i += 1;
            }
            match bytes.get(i) {
                Some(&quote @ (b'"' | b'\'')) => {
                    let start = i + 1;
                    let end = tag[start..]
                        .find(char::from(quote))
                        .map_or(len, |p| start + p);
                    value = &tag[start..end];
                    i = (end + 1).min(len);
                }
                Some(_) => {
                    let start = i;
                    while i < len && !is_space(bytes[i]) && bytes[i] != b'>' {
                        i += 1;
                    }
                    value = &tag[start..i];
                }
                None => {}
            }
        }

        if name.eq_ignore_ascii_case(wanted) {
            return Some(value);
        }
    }
}

/// Index just past the `>` closing the tag, honouring quoted values.
fn tag_end(text: &str, from: usize) -> Option<usize> {
    let mut quote: Option<u8> = None;
    for (i, &b) in text.as_bytes().iter().enumerate().skip(from) {
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None if b == b'"' || b == b'\'' => quote = Some(b),
            None if b == b'>' => return Some(i + 1),
            None => {}
        }
    }
    None
}

fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0c')
}

use super::{
    cursor::Cursor,
    kinds::{DataRef, Highlight, LineBreak, Link, LocRef},
    types::InlineNode,
};

/// Scans a body into a sequence of [`InlineNode`]s in a single pass.
///
/// At each position the constructs are tried in a fixed order: highlight,
/// line break, data reference, localization reference, link. Text between
/// constructs is emitted as [`InlineNode::Text`]; an unclosed construct is
/// left as text.
///
/// Highlights pair like a lazy `<hl>(.*?)</hl>`: an `<hl>` only opens when a
/// `</hl>` follows it, and an `<hl>` inside an open highlight is plain text.
/// A pair whose closing tag ends up swallowed by a link is closed at the end
/// of the body so the output stays balanced.
pub fn parse_inline(s: &str) -> Vec<InlineNode<'_>> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();
    let mut highlight_open = false;

    fn flush_text<'a>(out: &mut Vec<InlineNode<'a>>, s: &'a str, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(&s[start..end]));
        }
    }

    while !cur.eof() {
        let start = cur.pos();
        if let Some(node) = try_parse_node(&mut cur, &mut highlight_open) {
            flush_text(&mut out, s, text_start, start);
            text_start = cur.pos();
            out.push(node);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, s, text_start, s.len());
    if highlight_open {
        out.push(InlineNode::HighlightEnd);
    }
    out
}

fn try_parse_node<'a>(cur: &mut Cursor<'a>, highlight_open: &mut bool) -> Option<InlineNode<'a>> {
    if let Some(node) = try_parse_highlight(cur, highlight_open) {
        return Some(node);
    }
    if cur.starts_with(LineBreak::ESCAPE.as_bytes()) {
        cur.bump_n(LineBreak::ESCAPE.len());
        return Some(InlineNode::LineBreak);
    }
    if let Some(path) = try_parse_enclosed(cur, DataRef::OPEN, DataRef::CLOSE) {
        return Some(InlineNode::Data(path));
    }
    if let Some(key) = try_parse_enclosed(cur, LocRef::OPEN, LocRef::CLOSE) {
        return Some(InlineNode::Loc(key));
    }
    try_parse_link(cur)
}

fn try_parse_highlight<'a>(cur: &mut Cursor<'a>, open: &mut bool) -> Option<InlineNode<'a>> {
    if !*open && cur.starts_with(Highlight::OPEN.as_bytes()) {
        let mut probe = cur.clone();
        probe.bump_n(Highlight::OPEN.len());
        probe.find(Highlight::CLOSE)?;
        cur.bump_n(Highlight::OPEN.len());
        *open = true;
        return Some(InlineNode::HighlightStart);
    }
    if *open && cur.starts_with(Highlight::CLOSE.as_bytes()) {
        cur.bump_n(Highlight::CLOSE.len());
        *open = false;
        return Some(InlineNode::HighlightEnd);
    }
    None
}

/// Parses `open … close` and returns the slice between the delimiters. The
/// first `close` after `open` ends the construct. On failure the cursor is
/// left where it was.
fn try_parse_enclosed<'a>(cur: &mut Cursor<'a>, open: &str, close: &str) -> Option<&'a str> {
    if !cur.starts_with(open.as_bytes()) {
        return None;
    }
    let mut probe = cur.clone();
    probe.bump_n(open.len());
    let inner_start = probe.pos();
    let inner_end = probe.find(close)?;

    cur.bump_n(inner_end + close.len() - cur.pos());
    Some(cur.slice(inner_start, inner_end))
}

fn try_parse_link<'a>(cur: &mut Cursor<'a>) -> Option<InlineNode<'a>> {
    let inner = try_parse_enclosed(cur, Link::OPEN, Link::CLOSE)?;
    let (path, text) = inner.split_once(Link::TEXT_DELIMITER).unwrap_or((inner, ""));
    Some(InlineNode::Link {
        path,
        text: parse_inline(text),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use InlineNode::{Data, HighlightEnd, HighlightStart, LineBreak, Link, Loc, Text};

    #[test]
    fn parse_simple_text() {
        assert_eq!(parse_inline("hello world"), vec![Text("hello world")]);
    }

    #[test]
    fn parse_empty_body() {
        assert!(parse_inline("").is_empty());
    }

    #[test]
    fn parse_highlight_pair() {
        assert_eq!(
            parse_inline("a <hl>b</hl> c"),
            vec![Text("a "), HighlightStart, Text("b"), HighlightEnd, Text(" c")]
        );
    }

    #[test]
    fn highlights_pair_lazily() {
        assert_eq!(
            parse_inline("<hl>a<hl>b</hl>c</hl>"),
            vec![
                HighlightStart,
                Text("a<hl>b"),
                HighlightEnd,
                Text("c</hl>"),
            ]
        );
    }

    #[test]
    fn unmatched_highlight_is_text() {
        assert_eq!(parse_inline("<hl>open"), vec![Text("<hl>open")]);
        assert_eq!(parse_inline("close</hl>"), vec![Text("close</hl>")]);
    }

    #[test]
    fn parse_line_break_escape() {
        assert_eq!(
            parse_inline("one\\ntwo"),
            vec![Text("one"), LineBreak, Text("two")]
        );
    }

    #[test]
    fn parse_references() {
        assert_eq!(
            parse_inline("<dt>a.b</dt> and <lc>key</lc>"),
            vec![Data("a.b"), Text(" and "), Loc("key")]
        );
    }

    #[test]
    fn adjacent_references_do_not_merge() {
        assert_eq!(
            parse_inline("<dt>a</dt><dt>b</dt>"),
            vec![Data("a"), Data("b")]
        );
    }

    #[test]
    fn unclosed_reference_is_text() {
        assert_eq!(parse_inline("<dt>a.b"), vec![Text("<dt>a.b")]);
    }

    #[test]
    fn parse_link_with_text() {
        assert_eq!(
            parse_inline("see <link=\"some-entry\">Click</link>!"),
            vec![
                Text("see "),
                Link {
                    path: "\"some-entry",
                    text: vec![Text("Click")],
                },
                Text("!"),
            ]
        );
    }

    #[test]
    fn link_text_is_scanned() {
        assert_eq!(
            parse_inline("<link=http://x.com\"><hl>Go</hl></link>"),
            vec![Link {
                path: "http://x.com",
                text: vec![HighlightStart, Text("Go"), HighlightEnd],
            }]
        );
    }

    #[test]
    fn link_without_text_delimiter() {
        assert_eq!(
            parse_inline("<link=http://x.com</link>"),
            vec![Link {
                path: "http://x.com",
                text: vec![],
            }]
        );
    }

    #[test]
    fn multibyte_text_survives() {
        assert_eq!(
            parse_inline("Größe <lc>ä</lc> ✓"),
            vec![Text("Größe "), Loc("ä"), Text(" ✓")]
        );
    }
}

/// A scanned inline token, borrowing from the body it was scanned from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode<'a> {
    /// Text outside any recognized construct, emitted verbatim.
    Text(&'a str),
    /// Opening `<hl>` of a matched pair.
    HighlightStart,
    /// Closing `</hl>` of a matched pair.
    HighlightEnd,
    /// A literal `\n` escape.
    LineBreak,
    /// `<dt>path</dt>`.
    Data(&'a str),
    /// `<lc>key</lc>`.
    Loc(&'a str),
    /// `<link=path">text</link>`. The display text is scanned on its own.
    Link {
        path: &'a str,
        text: Vec<InlineNode<'a>>,
    },
}

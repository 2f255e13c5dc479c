pub struct Highlight;

impl Highlight {
    pub const OPEN: &'static str = "<hl>";
    pub const CLOSE: &'static str = "</hl>";
    pub const HTML_OPEN: &'static str = "<b><span class='highlighted'>";
    pub const HTML_CLOSE: &'static str = "</span></b>";
}

/// The two-character escape `\n` as written in content, not a real newline.
pub struct LineBreak;

impl LineBreak {
    pub const ESCAPE: &'static str = "\\n";
    pub const HTML: &'static str = "<br>";
}

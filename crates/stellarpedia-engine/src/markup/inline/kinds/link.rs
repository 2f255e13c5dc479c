/// `<link=target">text</link>`.
pub struct Link;

impl Link {
    pub const OPEN: &'static str = "<link=";
    pub const CLOSE: &'static str = "</link>";
    /// Separates the target from the display text.
    pub const TEXT_DELIMITER: &'static str = "\">";
    pub const EXTERNAL_SCHEMES: [&'static str; 2] = ["http", "mailto"];
    pub const QUOTES: [char; 2] = ['"', '\''];

    pub fn is_external(path: &str) -> bool {
        Self::EXTERNAL_SCHEMES
            .iter()
            .any(|scheme| path.starts_with(scheme))
    }
}

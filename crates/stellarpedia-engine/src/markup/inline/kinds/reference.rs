/// `<dt>path</dt>`: a value looked up in application data.
pub struct DataRef;

impl DataRef {
    pub const OPEN: &'static str = "<dt>";
    pub const CLOSE: &'static str = "</dt>";
}

/// `<lc>key</lc>`: a localized string.
pub struct LocRef;

impl LocRef {
    pub const OPEN: &'static str = "<lc>";
    pub const CLOSE: &'static str = "</lc>";
}

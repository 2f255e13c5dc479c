use serde::Serialize;

use crate::markup::{Alignment, RowParams};

/// Structured form of a `row` element, serialized in the shape the view
/// layer expects (`isHeader`, `isLast`, …).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowData {
    pub is_header: bool,
    pub is_last: bool,
    pub layout: Vec<i32>,
    pub alignment: Vec<Alignment>,
    pub content: Vec<String>,
}

impl RowData {
    pub const CELL_SEPARATOR: &'static str = "||";

    pub fn new(params: RowParams, body: &str) -> Self {
        Self {
            is_header: params.is_header,
            is_last: params.is_last,
            layout: params.layout,
            alignment: params.alignment,
            content: body.split(Self::CELL_SEPARATOR).map(str::to_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_cells_on_double_pipe() {
        let row = RowData::new(RowParams::default(), "a||b|c||");
        assert_eq!(row.content, vec!["a", "b|c", ""]);
    }

    #[test]
    fn serializes_in_camel_case() {
        let row = RowData::new(
            RowParams {
                is_header: true,
                is_last: false,
                layout: vec![2, 1],
                alignment: vec![Alignment::Left, Alignment::Right],
            },
            "Name||Value",
        );
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "isHeader": true,
                "isLast": false,
                "layout": [2, 1],
                "alignment": ["left", "right"],
                "content": ["Name", "Value"]
            })
        );
    }
}

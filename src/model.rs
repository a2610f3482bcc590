//! Product Records
//!
//! The list endpoint returns products as positional rows `[id, name, note]`.
//! Rows are decoded into a named structure at the boundary; nothing past the
//! decode touches the wire shape by index.

use serde_json::Value;

/// One product as displayed on the list-detail screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub note: Option<String>,
}

impl Product {
    /// Decode a positional row. Rows without a numeric id and a string name
    /// are rejected; elements past the third are ignored.
    pub fn from_row(row: &Value) -> Option<Self> {
        let id = row.get(0)?.as_i64()?;
        let name = row.get(1)?.as_str()?.to_string();
        let note = match row.get(2) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        };
        Some(Self { id, name, note })
    }

    /// Decode a batch of rows, dropping any that are malformed.
    pub fn from_rows(rows: &[Value]) -> Vec<Self> {
        rows.iter().filter_map(Self::from_row).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_positional_row() {
        let row = json!([5, "Milk", "expires soon"]);
        assert_eq!(
            Product::from_row(&row),
            Some(Product {
                id: 5,
                name: "Milk".to_string(),
                note: Some("expires soon".to_string()),
            })
        );
    }

    #[test]
    fn missing_or_null_note_is_none() {
        assert_eq!(Product::from_row(&json!([1, "Eggs"])).unwrap().note, None);
        assert_eq!(Product::from_row(&json!([1, "Eggs", null])).unwrap().note, None);
    }

    #[test]
    fn non_string_note_is_rendered() {
        let product = Product::from_row(&json!([7, "Rice", 20250901])).unwrap();
        assert_eq!(product.note.as_deref(), Some("20250901"));
    }

    #[test]
    fn extra_elements_are_ignored() {
        let product = Product::from_row(&json!([2, "Tea", "loose leaf", "ignored", 42])).unwrap();
        assert_eq!(product.name, "Tea");
        assert_eq!(product.note.as_deref(), Some("loose leaf"));
    }

    // The detail screen removes a deleted product locally instead of
    // re-fetching.
    #[test]
    fn delete_filters_the_displayed_set_by_id() {
        let mut displayed =
            Product::from_rows(&[json!([1, "a", null]), json!([5, "b", null])]);
        displayed.retain(|p| p.id != 5);
        assert_eq!(displayed.len(), 1);
        assert_eq!(displayed[0].id, 1);
        assert_eq!(displayed[0].name, "a");
    }

    #[test]
    fn malformed_rows_are_dropped() {
        let rows = vec![
            json!([1, "Bread", null]),
            json!(["not-an-id", "Jam", null]),
            json!([3]),
            json!({"id": 4}),
            json!([5, "Butter", "salted"]),
        ];
        let products = Product::from_rows(&rows);
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[1].id, 5);
    }
}

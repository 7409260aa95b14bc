use crate::core::value::Value;
use serde::{Deserialize, Serialize};

/// A single column of a flat row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldValue {
    pub name: String,
    pub value: Value,
}

/// One joined, denormalized record keyed by column alias.
///
/// Column order follows the order in which the driver produced the
/// columns. Lookups are exact on the alias.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RowData {
    pub field_values: Vec<FieldValue>,
}

impl RowData {
    pub fn new(field_values: Vec<FieldValue>) -> Self {
        RowData { field_values }
    }

    /// Appends a column, replacing an earlier column with the same alias.
    pub fn with(mut self, name: &str, value: Value) -> Self {
        match self.field_values.iter_mut().find(|f| f.name == name) {
            Some(existing) => existing.value = value,
            None => self.field_values.push(FieldValue {
                name: name.to_string(),
                value,
            }),
        }
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.field_values
            .iter()
            .find(|f| f.name == field)
            .map(|f| &f.value)
    }

    /// Value of `field`, or `Null` when the column is absent.
    pub fn get_value(&self, field: &str) -> Value {
        self.get(field).cloned().unwrap_or(Value::Null)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.field_values.iter().map(|f| f.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.field_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.field_values.is_empty()
    }

    /// Builds a row from a JSON object, keeping the object's key order.
    pub fn from_json_object(object: serde_json::Map<String, serde_json::Value>) -> Self {
        object
            .into_iter()
            .map(|(name, value)| (name, Value::from(value)))
            .collect()
    }
}

impl FromIterator<(String, Value)> for RowData {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(RowData::default(), |row, (name, value)| row.with(&name, value))
    }
}

#[cfg(test)]
mod tests {
    use super::RowData;
    use crate::core::value::Value;
    use serde_json::json;

    #[test]
    fn test_get_is_exact_on_alias() {
        let row = RowData::default()
            .with("menu_item_id", Value::String("A".into()))
            .with("menu_item_image_id", Value::String("1".into()));

        assert_eq!(row.get("menu_item_id"), Some(&Value::String("A".into())));
        assert_eq!(row.get("MENU_ITEM_ID"), None);
        assert_eq!(row.get_value("missing"), Value::Null);
    }

    #[test]
    fn test_with_replaces_duplicate_alias() {
        let row = RowData::default()
            .with("t_id", Value::Int(1))
            .with("t_name", Value::String("x".into()))
            .with("t_id", Value::Int(2));

        assert_eq!(row.len(), 2);
        assert_eq!(row.get_value("t_id"), Value::Int(2));
        assert_eq!(row.columns().collect::<Vec<_>>(), vec!["t_id", "t_name"]);
    }

    #[test]
    fn test_from_json_object_keeps_key_order() {
        let json = json!({"m_id": "A", "m_name": "Pizza", "i_id": 1, "i_alt": null});
        let serde_json::Value::Object(object) = json else {
            panic!("expected object");
        };
        let row = RowData::from_json_object(object);

        assert_eq!(
            row.columns().collect::<Vec<_>>(),
            vec!["m_id", "m_name", "i_id", "i_alt"]
        );
        assert_eq!(row.get_value("m_name"), Value::String("Pizza".into()));
        assert_eq!(row.get_value("i_id"), Value::Int(1));
        assert_eq!(row.get("i_alt"), Some(&Value::Null));
    }
}

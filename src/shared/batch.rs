use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

/// One JSON body that creates, updates and deletes sub-records of a parent.
///
/// The whole batch is applied in a single transaction.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct BatchEditDto<T> {
    #[serde(default)]
    pub create_list: Vec<T>,
    #[serde(default)]
    pub update_list: Vec<BatchUpdateItem<T>>,
    #[serde(default)]
    pub delete_id_list: Vec<i32>,
}

/// Row to update inside a batch: the target id plus every field of the row
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct BatchUpdateItem<T> {
    pub id: i32,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Validate> Validate for BatchEditDto<T> {
    fn validate(&self) -> Result<(), ValidationErrors> {
        for item in &self.create_list {
            item.validate()?;
        }
        for item in &self.update_list {
            item.data.validate()?;
        }
        Ok(())
    }
}

impl<T> BatchEditDto<T> {
    pub fn is_empty(&self) -> bool {
        self.create_list.is_empty() && self.update_list.is_empty() && self.delete_id_list.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Deserialize, Validate)]
    struct Row {
        #[validate(length(min = 1, max = 5))]
        name: String,
    }

    #[test]
    fn test_lists_default_to_empty() {
        let batch: BatchEditDto<Row> = serde_json::from_str("{}").unwrap();
        assert!(batch.is_empty());
    }

    #[test]
    fn test_update_items_flatten_row_fields() {
        let batch: BatchEditDto<Row> = serde_json::from_str(
            r#"{"update_list": [{"id": 4, "name": "abc"}], "delete_id_list": [1, 2]}"#,
        )
        .unwrap();
        assert_eq!(batch.update_list[0].id, 4);
        assert_eq!(batch.update_list[0].data.name, "abc");
        assert_eq!(batch.delete_id_list, vec![1, 2]);
        assert!(batch.validate().is_ok());
    }

    #[test]
    fn test_every_row_is_validated() {
        let batch: BatchEditDto<Row> = serde_json::from_str(
            r#"{"create_list": [{"name": "ok"}], "update_list": [{"id": 1, "name": "far too long"}]}"#,
        )
        .unwrap();
        assert!(batch.validate().is_err());

        let batch: BatchEditDto<Row> =
            serde_json::from_str(r#"{"create_list": [{"name": ""}]}"#).unwrap();
        assert!(batch.validate().is_err());
    }
}

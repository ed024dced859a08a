//! Feature schema: the ordered column list the classifier was trained on.

use rustc_hash::FxHashMap;

use attrition_core::errors::SchemaError;

/// Ordered, duplicate-free list of training column names.
#[derive(Debug, Clone)]
pub struct FeatureSchema {
    columns: Vec<String>,
    index: FxHashMap<String, usize>,
}

impl FeatureSchema {
    /// Build a schema, rejecting empty lists, blank names, and duplicates.
    pub fn new(columns: Vec<String>) -> Result<Self, SchemaError> {
        if columns.is_empty() {
            return Err(SchemaError::Empty);
        }

        let mut index = FxHashMap::default();
        index.reserve(columns.len());
        for (i, column) in columns.iter().enumerate() {
            if column.trim().is_empty() {
                return Err(SchemaError::EmptyColumnName { index: i });
            }
            if index.insert(column.clone(), i).is_some() {
                return Err(SchemaError::DuplicateColumn {
                    column: column.clone(),
                });
            }
        }

        Ok(Self { columns, index })
    }

    /// Columns in training order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Position of `column`, if present.
    pub fn position(&self, column: &str) -> Option<usize> {
        self.index.get(column).copied()
    }

    /// Position of `column`, or a `MissingColumn` error.
    pub fn require(&self, column: &str) -> Result<usize, SchemaError> {
        self.position(column)
            .ok_or_else(|| SchemaError::MissingColumn {
                column: column.to_string(),
            })
    }

    /// Check that `found` lists exactly these columns, in this order.
    ///
    /// Reports the first position where the two lists disagree.
    pub fn check_order(&self, found: &[String]) -> Result<(), SchemaError> {
        if found.len() != self.columns.len() {
            return Err(SchemaError::WidthMismatch {
                expected: self.columns.len(),
                found: found.len(),
            });
        }
        match self
            .columns
            .iter()
            .zip(found)
            .enumerate()
            .find(|(_, (expected, found))| expected != found)
        {
            Some((position, (expected, found))) => Err(SchemaError::ColumnOrder {
                position,
                expected: expected.clone(),
                found: found.clone(),
            }),
            None => Ok(()),
        }
    }

    /// True when both schemas list the same columns in the same order.
    pub fn same_columns(&self, other: &FeatureSchema) -> bool {
        self.columns == other.columns
    }
}

impl PartialEq for FeatureSchema {
    fn eq(&self, other: &Self) -> bool {
        self.same_columns(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn preserves_training_order() {
        let schema = FeatureSchema::new(cols(&["Age", "OverTime", "MonthlyIncome"])).unwrap();
        assert_eq!(schema.columns(), &cols(&["Age", "OverTime", "MonthlyIncome"])[..]);
        assert_eq!(schema.position("OverTime"), Some(1));
        assert_eq!(schema.position("Incentive"), None);
    }

    #[test]
    fn rejects_duplicates() {
        let err = FeatureSchema::new(cols(&["Age", "Age"])).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateColumn { column } if column == "Age"));
    }

    #[test]
    fn rejects_blank_names_and_empty_lists() {
        assert!(matches!(
            FeatureSchema::new(cols(&["Age", " "])),
            Err(SchemaError::EmptyColumnName { index: 1 })
        ));
        assert!(matches!(FeatureSchema::new(vec![]), Err(SchemaError::Empty)));
    }

    #[test]
    fn require_names_the_missing_column() {
        let schema = FeatureSchema::new(cols(&["Age"])).unwrap();
        let err = schema.require("Incentive_Ratio").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Column 'Incentive_Ratio' is not part of the feature schema"
        );
    }

    #[test]
    fn check_order_names_the_first_disagreement() {
        let schema = FeatureSchema::new(cols(&["Age", "OverTime", "MonthlyIncome"])).unwrap();
        assert!(schema.check_order(&cols(&["Age", "OverTime", "MonthlyIncome"])).is_ok());

        let err = schema
            .check_order(&cols(&["Age", "MonthlyIncome", "OverTime"]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Column 1 is 'MonthlyIncome' where the schema has 'OverTime'"
        );

        let err = schema.check_order(&cols(&["Age"])).unwrap_err();
        assert_eq!(err.to_string(), "Expected 3 feature columns, found 1");
    }
}

/// A match condition against a single document field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Match {
    /// Field value must equal the string exactly.
    Exact(String),
    /// Field value must equal the string ignoring case (full-string match,
    /// no partial matching).
    EqualsIgnoreCase(String),
}

/// An ordered mapping of field name to match condition, used to select
/// documents from a collection.
///
/// Field names are code-supplied identifiers; condition values are passed to
/// the store as bind parameters.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    conditions: Vec<(String, Match)>,
}

impl Filter {
    pub fn new() -> Self {
        Self {
            conditions: Vec::new(),
        }
    }

    /// Require `field` to equal `value` exactly.
    pub fn eq(mut self, field: &str, value: &str) -> Self {
        self.conditions
            .push((field.to_string(), Match::Exact(value.to_string())));
        self
    }

    /// Require `field` to equal `value` ignoring case.
    pub fn eq_ignore_case(mut self, field: &str, value: &str) -> Self {
        self.conditions
            .push((field.to_string(), Match::EqualsIgnoreCase(value.to_string())));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Render the filter as a SQL WHERE fragment over a JSONB `doc` column,
    /// with positional parameters starting at `$1`. Returns the fragment
    /// (empty string when no conditions) and the parameter values in order.
    pub(crate) fn to_sql(&self) -> (String, Vec<String>) {
        if self.conditions.is_empty() {
            return (String::new(), Vec::new());
        }

        let mut clauses = Vec::with_capacity(self.conditions.len());
        let mut values = Vec::with_capacity(self.conditions.len());

        for (i, (field, condition)) in self.conditions.iter().enumerate() {
            let param = i + 1;
            match condition {
                Match::Exact(value) => {
                    clauses.push(format!("doc->>'{}' = ${}", field, param));
                    values.push(value.clone());
                }
                Match::EqualsIgnoreCase(value) => {
                    clauses.push(format!("lower(doc->>'{}') = lower(${})", field, param));
                    values.push(value.clone());
                }
            }
        }

        (format!(" WHERE {}", clauses.join(" AND ")), values)
    }
}

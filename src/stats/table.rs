use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::errors::AppError;

/// Envelope every stats endpoint wraps its tables in.
#[derive(Debug, Clone, Deserialize)]
pub struct StatsResponse {
    #[serde(rename = "resultSets", alias = "resultSet")]
    pub result_sets: Vec<ResultSet>,
}

/// A header row plus positional data rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet")]
    pub row_set: Vec<Vec<Value>>,
}

impl StatsResponse {
    pub fn into_set(self, index: usize) -> Result<ResultSet, AppError> {
        let count = self.result_sets.len();
        self.result_sets.into_iter().nth(index).ok_or_else(|| {
            AppError::MalformedResponse(format!(
                "expected result set #{index}, response has {count}"
            ))
        })
    }
}

impl ResultSet {
    /// Decodes every row into `T` by pairing values with their headers.
    pub fn rows<T: DeserializeOwned>(&self) -> Result<Vec<T>, AppError> {
        self.row_set
            .iter()
            .enumerate()
            .map(|(i, row)| {
                if row.len() != self.headers.len() {
                    return Err(AppError::MalformedResponse(format!(
                        "{}: row {i} has {} values for {} headers",
                        self.name,
                        row.len(),
                        self.headers.len()
                    )));
                }
                let record: Map<String, Value> = self
                    .headers
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect();
                Ok(serde_json::from_value(Value::Object(record))?)
            })
            .collect()
    }
}

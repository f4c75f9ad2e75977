//! JSON file record source.

use std::fs;
use std::path::PathBuf;

use budgetscope_core::prediction::{Prediction, PredictionRequest};
use budgetscope_core::records::{
    Budget, Centre, Expense, RecordError, RecordSource, Responsable, Snapshot,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

/// Reads record collections from a JSON snapshot file.
///
/// The file is an object with `centres`, `responsables`, `expenses` (or
/// `depenses`) and `budgets` arrays, plus an optional `predictions` array of
/// precomputed predictions.
#[derive(Debug, Clone)]
pub struct JsonSnapshotSource {
    path: PathBuf,
}

/// A precomputed prediction as stored in the snapshot file.
#[derive(Debug, Clone, Deserialize)]
pub struct StoredPrediction {
    /// What was predicted.
    #[serde(flatten)]
    pub request: PredictionRequest,
    /// The prediction itself.
    #[serde(flatten)]
    pub prediction: Prediction,
}

impl JsonSnapshotSource {
    /// Creates a source over the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Precomputed predictions, empty when the file has none.
    pub fn predictions(&self) -> Result<Vec<StoredPrediction>, RecordError> {
        let document = self.read()?;
        match document.get("predictions") {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(value) => decode("predictions", value),
        }
    }

    fn read(&self) -> Result<Value, RecordError> {
        let text = fs::read_to_string(&self.path).map_err(|e| {
            RecordError::SourceUnavailable(format!("{}: {e}", self.path.display()))
        })?;
        debug!(path = %self.path.display(), bytes = text.len(), "Read snapshot file");

        serde_json::from_str(&text).map_err(|e| RecordError::Malformed {
            collection: "snapshot",
            reason: e.to_string(),
        })
    }
}

/// Decodes the first of `names` present in `document`; absent means empty.
fn collection<T: for<'de> Deserialize<'de>>(
    document: &Value,
    names: &[&'static str],
) -> Result<Vec<T>, RecordError> {
    let Some((name, value)) = names
        .iter()
        .find_map(|name| document.get(name).map(|value| (*name, value)))
    else {
        return Ok(Vec::new());
    };
    decode(name, value)
}

fn decode<T: for<'de> Deserialize<'de>>(
    collection: &'static str,
    value: &Value,
) -> Result<Vec<T>, RecordError> {
    Vec::<T>::deserialize(value).map_err(|e| RecordError::Malformed {
        collection,
        reason: e.to_string(),
    })
}

impl RecordSource for JsonSnapshotSource {
    fn centres(&self) -> Result<Vec<Centre>, RecordError> {
        collection(&self.read()?, &["centres"])
    }

    fn responsables(&self) -> Result<Vec<Responsable>, RecordError> {
        collection(&self.read()?, &["responsables"])
    }

    fn expenses(&self) -> Result<Vec<Expense>, RecordError> {
        collection(&self.read()?, &["expenses", "depenses"])
    }

    fn budgets(&self) -> Result<Vec<Budget>, RecordError> {
        collection(&self.read()?, &["budgets"])
    }

    /// Reads the file once for all four collections.
    fn snapshot(&self) -> Result<Snapshot, RecordError> {
        let document = self.read()?;
        let snapshot = Snapshot {
            centres: collection(&document, &["centres"])?,
            responsables: collection(&document, &["responsables"])?,
            expenses: collection(&document, &["expenses", "depenses"])?,
            budgets: collection(&document, &["budgets"])?,
        };

        info!(
            path = %self.path.display(),
            centres = snapshot.centres.len(),
            responsables = snapshot.responsables.len(),
            expenses = snapshot.expenses.len(),
            budgets = snapshot.budgets.len(),
            "Loaded snapshot"
        );

        Ok(snapshot)
    }
}

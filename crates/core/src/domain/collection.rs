// Collection body decoding
//
// The collection endpoint answers either with a bare array of jobs or with
// an object carrying the array under `jobs`. Anything else, including a
// `jobs` field that is not an array, decodes to an empty list.

use super::job::Job;
use serde_json::Value;

/// Name of the envelope field holding the job array
pub const JOBS_FIELD: &str = "jobs";

/// Decode a successful collection response body
///
/// # Errors
/// Returns the serde error when an array (bare or enveloped) holds
/// something that is not a valid job.
pub fn decode_collection(body: Value) -> serde_json::Result<Vec<Job>> {
    match body {
        Value::Array(_) => serde_json::from_value(body),
        Value::Object(mut map) => match map.remove(JOBS_FIELD) {
            Some(jobs @ Value::Array(_)) => serde_json::from_value(jobs),
            _ => Ok(Vec::new()),
        },
        _ => Ok(Vec::new()),
    }
}

//! Request and response bodies for the Bucket Guard backend

use serde::{Deserialize, Serialize};

/// Response to `GET /buckets`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketList {
    /// Names of the buckets visible to the backend
    pub buckets: Vec<String>,
}

/// A misconfiguration detected in a bucket
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Human-readable description, also the key used to request remediation
    pub issue: String,
    /// Backend identifier of the remediation routine
    pub remediation_code: String,
    /// CIS benchmark reference for the finding
    pub cis_reference: String,
}

/// Response to `GET /detect`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionReport {
    /// Bucket that was scanned
    pub bucket: String,
    /// Issues found, empty when the bucket is clean
    pub issues: Vec<Issue>,
}

/// Acknowledgement body returned by `POST /remediate` and `POST /add-machine`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    /// Outcome description from the backend
    pub message: String,
}

/// Request body for `POST /remediate`
#[derive(Debug, Serialize)]
pub struct RemediateRequest<'a> {
    /// Bucket the issue was detected in
    pub bucket: &'a str,
    /// Issue description as reported by detection
    pub issue: &'a str,
}

/// Request body for `POST /add-machine`
#[derive(Debug, Serialize)]
pub struct AddMachineRequest<'a> {
    /// AWS access key ID
    pub access_key: &'a str,
    /// AWS secret access key
    pub secret_key: &'a str,
}

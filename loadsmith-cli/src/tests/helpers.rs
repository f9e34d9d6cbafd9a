//! Test helpers for writing optimize requests to a scratch workspace.

use camino::{Utf8Path, Utf8PathBuf};
use loadsmith_core::OptimizeRequest;
use loadsmith_core::test_support::{order, vehicle};
use tempfile::TempDir;

/// Write `contents` to `path`, panicking with a readable message on failure.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test file");
}

/// A temporary directory exposed as a UTF-8 path.
pub(super) fn scratch_dir() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// The two-order request from the reference scenario: both orders fit.
pub(super) fn two_order_request() -> OptimizeRequest {
    OptimizeRequest::new(
        vehicle(45_000, 2_500),
        vec![
            order("ORD-001", 125_000, 12_000, 600),
            order("ORD-002", 98_000, 8_500, 450),
        ],
    )
}

/// Serialise `request` as pretty JSON into `path`.
pub(super) fn write_request(path: &Utf8Path, request: &OptimizeRequest) {
    let payload = serde_json::to_string_pretty(request).expect("serialize request");
    write_utf8(path, payload.as_bytes());
}

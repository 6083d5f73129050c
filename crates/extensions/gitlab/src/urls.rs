//! URL construction for the repository files API.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use jobrelay_config::RemoteConfig;

/// Everything except the RFC 3986 unreserved characters.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a value for use as a single path segment.
///
/// `/` becomes `%2F` and spaces become `%20`, matching what GitLab expects for
/// file paths and `namespace/project` ids.
pub fn encode_path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

/// Endpoint for a single file, addressed by numeric project id.
pub(crate) fn file_endpoint(remote: &RemoteConfig, file_path: &str) -> String {
    format!(
        "{}/projects/{}/repository/files/{}",
        remote.base_url,
        remote.project_id,
        encode_path_segment(file_path)
    )
}

/// Raw-content URL for a file, addressed by the readable project path.
pub fn raw_file_url(remote: &RemoteConfig, file_path: &str) -> String {
    format!(
        "{}/projects/{}/repository/files/{}/raw?ref={}",
        remote.base_url,
        encode_path_segment(&remote.project_path),
        encode_path_segment(file_path),
        encode_path_segment(&remote.branch)
    )
}

//! Paths of the story spoiler API, relative to the backend base URL

pub const AUTHENTICATION: &str = "/api/User/Authentication";
pub const CREATE: &str = "/api/Story/Create";
pub const EDIT: &str = "/api/Story/Edit";
pub const ALL: &str = "/api/Story/All";
pub const DELETE: &str = "/api/Story/Delete";

/// Append a percent-encoded identifier segment to an endpoint path
pub fn with_id(path: &str, id: &str) -> String {
    format!("{}/{}", path, urlencoding::encode(id))
}

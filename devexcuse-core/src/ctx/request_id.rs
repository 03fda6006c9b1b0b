use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Per-request identifier, echoed back in the `x-request-id` header.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct RequestId(pub String);

impl Default for RequestId {
    fn default() -> Self {
        RequestId(Uuid::new_v4().to_string())
    }
}

impl From<&str> for RequestId {
    fn from(s: &str) -> Self {
        RequestId(s.to_owned())
    }
}

impl Display for RequestId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

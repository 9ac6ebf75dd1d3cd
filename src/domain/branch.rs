/// Characters git output may be wrapped in.
const BRANCH_TRIM_CHARS: &[char] = &[' ', '\n', '\t', '\r', '\'', '"'];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchName(pub String);

impl BranchName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unknown branch; never matches a ticket.
    pub fn unknown() -> Self {
        Self(String::new())
    }

    pub fn from_raw(raw: &str) -> Self {
        Self(raw.trim_matches(BRANCH_TRIM_CHARS).to_string())
    }
}

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'; expected one of: {expected}")]
pub struct UnknownOption {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

impl UnknownOption {
    pub fn new<'a>(
        kind: &'static str,
        value: impl Into<String>,
        expected: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            kind,
            value: value.into(),
            expected: expected.into_iter().collect::<Vec<_>>().join(", "),
        }
    }
}

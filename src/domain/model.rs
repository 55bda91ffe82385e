/// A line of input that may stand for "no value".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextInput {
    value: Option<String>,
}

impl TextInput {
    pub fn present(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    pub fn absent() -> Self {
        Self { value: None }
    }

    pub fn is_absent(&self) -> bool {
        self.value.is_none()
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl From<Option<&str>> for TextInput {
    fn from(value: Option<&str>) -> Self {
        Self {
            value: value.map(str::to_owned),
        }
    }
}

/// A labeled choice. Two answers are equal when their ids match.
#[derive(Debug, Clone, Eq)]
pub struct Answer {
    id: u32,
    text: String,
}

impl Answer {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl PartialEq for Answer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

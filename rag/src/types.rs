use serde::{Deserialize, Serialize};

/// Corpus categories the router can target.
///
/// The wire names (used as the `type` metadata field on the vector index)
/// match the section names of the corpus document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Course_Details")]
    Course,
    #[serde(rename = "International_Students_faqs")]
    Faq,
    #[serde(rename = "On_Campus_Jobs")]
    Job,
    #[serde(rename = "Addresses")]
    Address,
}

impl Category {
    /// The metadata `type` string stored alongside each vector.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Course => "Course_Details",
            Category::Faq => "International_Students_faqs",
            Category::Job => "On_Campus_Jobs",
            Category::Address => "Addresses",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A flattened corpus record ready for indexing.
///
/// Produced once at startup from the corpus document; ids are unique within
/// their category.
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusRecord {
    pub id: String,
    pub category: Category,
    pub text: String,
}

/// An entry to upsert into the vector index.
#[derive(Debug, Clone)]
pub struct IndexEntry {
    pub id: String,
    pub vector: Vec<f32>,
    pub category: Category,
    pub text: String,
}

/// A nearest-neighbor match from the vector index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryMatch {
    pub id: String,
    pub score: f32,
    pub category: Category,
    pub text: String,
}

/// Speaker role of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::System => "system",
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// A single turn in the conversation session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_names() {
        assert_eq!(Category::Course.as_str(), "Course_Details");
        assert_eq!(Category::Faq.as_str(), "International_Students_faqs");
        assert_eq!(Category::Job.as_str(), "On_Campus_Jobs");
        assert_eq!(Category::Address.as_str(), "Addresses");
    }

    #[test]
    fn test_category_serde_round_trip() {
        let json = serde_json::to_string(&Category::Faq).unwrap();
        assert_eq!(json, "\"International_Students_faqs\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::Faq);
    }

    #[test]
    fn test_chat_turn_constructors() {
        let turn = ChatTurn::user("hello");
        assert_eq!(turn.role, ChatRole::User);
        assert_eq!(turn.content, "hello");
        assert_eq!(ChatRole::Assistant.as_str(), "assistant");
    }
}

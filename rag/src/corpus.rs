//! The university corpus: courses, FAQs, on-campus jobs, and addresses.
//!
//! The dataset ships as an embedded JSON document and is immutable after
//! load. Each record is flattened into an (id, text, category) triple with
//! a fixed per-category rule:
//! - Course: id = code, text = title + " " + details
//! - Faq: id = question, text = answer
//! - Job: id = job title, text = description
//! - Address: id = name, text = name + " " + address

use serde::Deserialize;

use crate::error::RagError;
use crate::types::{Category, CorpusRecord};

const CORPUS_JSON: &str = include_str!("../data/corpus.json");
const SYSTEM_PROMPT: &str = include_str!("../data/system_prompt.md");

/// The structured corpus document, as stored in `data/corpus.json`.
#[derive(Debug, Deserialize)]
pub struct Corpus {
    #[serde(rename = "Course_Details")]
    pub courses: Vec<Course>,
    #[serde(rename = "International_Students_faqs")]
    pub faqs: Vec<Faq>,
    #[serde(rename = "On_Campus_Jobs")]
    pub jobs: Vec<Job>,
    #[serde(rename = "Addresses")]
    pub addresses: Vec<Address>,
}

#[derive(Debug, Deserialize)]
pub struct Course {
    pub code: String,
    pub title: String,
    pub details: String,
}

#[derive(Debug, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Deserialize)]
pub struct Job {
    pub job_title: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct Address {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub google_maps_link: Option<String>,
}

impl Corpus {
    /// Parse a corpus document from JSON.
    pub fn from_json(json: &str) -> Result<Self, RagError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Flatten every record into an indexable (id, text, category) triple.
    pub fn records(&self) -> Vec<CorpusRecord> {
        let mut records = Vec::new();

        for course in &self.courses {
            records.push(CorpusRecord {
                id: course.code.clone(),
                category: Category::Course,
                text: format!("{} {}", course.title, course.details),
            });
        }

        for faq in &self.faqs {
            records.push(CorpusRecord {
                id: faq.question.clone(),
                category: Category::Faq,
                text: faq.answer.clone(),
            });
        }

        for job in &self.jobs {
            records.push(CorpusRecord {
                id: job.job_title.clone(),
                category: Category::Job,
                text: job.description.clone(),
            });
        }

        for addr in &self.addresses {
            records.push(CorpusRecord {
                id: addr.name.clone(),
                category: Category::Address,
                text: format!("{} {}", addr.name, addr.address),
            });
        }

        records
    }
}

/// Load the embedded corpus and flatten it into indexable records.
pub fn load() -> Result<Vec<CorpusRecord>, RagError> {
    Ok(Corpus::from_json(CORPUS_JSON)?.records())
}

/// The assistant's operating instructions, used as the initial system turn.
pub fn system_prompt() -> &'static str {
    SYSTEM_PROMPT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_corpus_parses() {
        let corpus = Corpus::from_json(CORPUS_JSON).unwrap();
        assert_eq!(corpus.courses.len(), 6);
        assert_eq!(corpus.faqs.len(), 9);
        assert_eq!(corpus.jobs.len(), 2);
        assert_eq!(corpus.addresses.len(), 5);
    }

    #[test]
    fn test_course_flattening_rule() {
        let records = load().unwrap();
        let python = records
            .iter()
            .find(|r| r.id == "MB/CSE 600")
            .expect("Python course present");
        assert_eq!(python.category, Category::Course);
        assert!(python.text.starts_with("Python "));
        assert!(python.text.contains("Python empowers you to automate tasks"));
    }

    #[test]
    fn test_faq_uses_question_as_id() {
        let records = load().unwrap();
        let fees = records
            .iter()
            .find(|r| r.id.contains("types of fees"))
            .expect("fees FAQ present");
        assert_eq!(fees.category, Category::Faq);
        assert!(fees.text.contains("Technology Fee"));
    }

    #[test]
    fn test_address_text_includes_name_and_address() {
        let records = load().unwrap();
        let loc = records
            .iter()
            .find(|r| r.id == "University Location")
            .expect("university address present");
        assert_eq!(loc.category, Category::Address);
        assert!(loc.text.starts_with("University Location "));
        assert!(loc.text.contains("100 Innovation Way"));
    }

    #[test]
    fn test_ids_unique_within_category() {
        let records = load().unwrap();
        for record in &records {
            let same = records
                .iter()
                .filter(|r| r.category == record.category && r.id == record.id)
                .count();
            assert_eq!(same, 1, "duplicate id {} in {}", record.id, record.category);
        }
    }

    #[test]
    fn test_malformed_document_is_rejected() {
        let err = Corpus::from_json("{\"Course_Details\": 42}").unwrap_err();
        assert!(matches!(err, RagError::Serialization(_)));
    }

    #[test]
    fn test_system_prompt_not_empty() {
        assert!(system_prompt().contains("CSTU"));
    }
}

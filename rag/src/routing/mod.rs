//! Keyword routing of queries to corpus categories.
//!
//! Deterministic substring matching against fixed per-category keyword
//! sets, evaluated in priority order Course, Faq, Address, Job. First
//! match wins; no match is a valid outcome (the composer falls back to a
//! general completion), not an error. Intentionally coarse: no NLP, no
//! scoring.

use crate::types::Category;

const COURSE_KEYWORDS: [&str; 4] = ["course", "class", "module", "study"];
const FAQ_KEYWORDS: [&str; 4] = ["faq", "fees", "payment", "international student"];
const ADDRESS_KEYWORDS: [&str; 4] = ["location", "place", "map", "address"];
const JOB_KEYWORDS: [&str; 4] = ["job", "position", "work", "assistant"];

// Evaluation order is part of the contract: overlapping keywords resolve
// to the earlier category.
const ROUTES: [(Category, &[&str]); 4] = [
    (Category::Course, &COURSE_KEYWORDS),
    (Category::Faq, &FAQ_KEYWORDS),
    (Category::Address, &ADDRESS_KEYWORDS),
    (Category::Job, &JOB_KEYWORDS),
];

/// Classify a query into a corpus category, or `None` if no keyword
/// matches.
pub fn classify(query: &str) -> Option<Category> {
    let lower = query.to_lowercase();
    for (category, keywords) in ROUTES {
        if keywords.iter().any(|kw| lower.contains(kw)) {
            return Some(category);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_keywords() {
        assert_eq!(classify("Tell me about the Python class"), Some(Category::Course));
        assert_eq!(classify("which COURSES are offered?"), Some(Category::Course));
        assert_eq!(classify("I want to study deep learning"), Some(Category::Course));
    }

    #[test]
    fn test_faq_keywords() {
        assert_eq!(
            classify("How much are the fees for international students?"),
            Some(Category::Faq)
        );
        assert_eq!(classify("what payment methods do you accept"), Some(Category::Faq));
        assert_eq!(classify("where is the faq page"), Some(Category::Faq));
    }

    #[test]
    fn test_address_keywords() {
        assert_eq!(classify("Where is the university located? show me the map"), Some(Category::Address));
        assert_eq!(classify("give me the address"), Some(Category::Address));
    }

    #[test]
    fn test_job_keywords() {
        assert_eq!(classify("Are there any jobs available on campus?"), Some(Category::Job));
        assert_eq!(classify("open teaching assistant position"), Some(Category::Job));
    }

    #[test]
    fn test_unclassified() {
        assert_eq!(classify("What's the weather today?"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_priority_course_over_faq() {
        // "class" and "fees" both present; Course is evaluated first.
        assert_eq!(
            classify("what are the fees for the Python class"),
            Some(Category::Course)
        );
    }

    #[test]
    fn test_priority_faq_over_address() {
        // "international student" and "location" both present.
        assert_eq!(
            classify("international student office location"),
            Some(Category::Faq)
        );
    }

    #[test]
    fn test_priority_address_over_job() {
        assert_eq!(
            classify("map of places to work near campus"),
            Some(Category::Address)
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("ANY JOBS?"), Some(Category::Job));
    }
}

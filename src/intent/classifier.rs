//! Rule-based intent classification.
//!
//! Classification runs in two stages over the normalized (trimmed,
//! lowercased) query:
//!
//! 1. **Phrase bank.** An ordered list of literal phrases is scanned in
//!    declaration order; the first phrase contained anywhere in the query
//!    wins and the scan stops. The order is the tie-break when phrases from
//!    different metrics occur in the same query, so the bank is kept as a
//!    slice and never a map.
//! 2. **Keyword fallback.** Only when no phrase matched, keyword families
//!    are tried in a fixed priority, with the headcount family sub-divided
//!    by gender and department hints.
//!
//! # Examples
//!
//! ```
//! use peoplelens::intent::{classify, Intent};
//!
//! let classification = classify("What is the attrition rate in IT?");
//! assert_eq!(classification.intent, Some(Intent::Attrition));
//! assert_eq!(classification.filters.department.as_deref(), Some("IT"));
//!
//! let classification = classify("xyz nonsense");
//! assert_eq!(classification.intent, None);
//! ```

use log::debug;

use crate::intent::filters::extract_filters;
use crate::intent::{Classification, Intent};

/// Known question phrases in priority order. Earlier entries win when more
/// than one phrase occurs in a query.
const PHRASE_BANK: [(&str, Intent); 25] = [
    // Headcount trends
    ("headcount trend", Intent::Headcount),
    ("active employees", Intent::Headcount),
    ("employee count", Intent::Headcount),
    ("total employees", Intent::Headcount),
    ("employees over years", Intent::Headcount),
    // Gender
    ("headcount by gender", Intent::HeadcountByGender),
    ("gender ratio", Intent::HeadcountByGender),
    ("male female", Intent::HeadcountByGender),
    ("gender split", Intent::HeadcountByGender),
    // Department
    ("headcount by department", Intent::HeadcountByDepartment),
    ("employees by department", Intent::HeadcountByDepartment),
    ("department headcount", Intent::HeadcountByDepartment),
    // Attrition
    ("attrition rate", Intent::Attrition),
    ("resignation trend", Intent::Attrition),
    ("turnover", Intent::Attrition),
    ("employee exits", Intent::Attrition),
    // Salary
    ("average salary", Intent::Salary),
    ("salary trend", Intent::Salary),
    ("pay trend", Intent::Salary),
    ("compensation trend", Intent::Salary),
    // Engagement
    ("engagement score", Intent::Engagement),
    ("employee satisfaction", Intent::Engagement),
    ("employee happiness", Intent::Engagement),
    // Diversity
    ("diversity", Intent::Diversity),
    ("gender diversity", Intent::Diversity),
];

const HEADCOUNT_KEYWORDS: [&str; 3] = ["headcount", "employees", "strength"];
const GENDER_KEYWORDS: [&str; 3] = ["gender", "male", "female"];
const DEPARTMENT_KEYWORDS: [&str; 2] = ["department", "function"];
const ATTRITION_KEYWORDS: [&str; 3] = ["attrition", "resignation", "turnover"];
const SALARY_KEYWORDS: [&str; 3] = ["salary", "pay", "compensation"];
const ENGAGEMENT_KEYWORDS: [&str; 3] = ["engagement", "satisfaction", "happiness"];
const DIVERSITY_KEYWORDS: [&str; 2] = ["diversity", "ratio"];

/// Classify a raw query into an intent and filters.
///
/// Unrecognized queries yield `intent == None`; filters are extracted either
/// way.
pub fn classify(query: &str) -> Classification {
    let normalized = query.trim().to_lowercase();

    let intent = match_phrase(&normalized).or_else(|| match_keywords(&normalized));
    let filters = extract_filters(&normalized);

    Classification { intent, filters }
}

fn match_phrase(normalized: &str) -> Option<Intent> {
    for (phrase, intent) in PHRASE_BANK {
        if normalized.contains(phrase) {
            debug!("query matched phrase `{phrase}` -> {intent}");
            return Some(intent);
        }
    }
    None
}

fn contains_any(normalized: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| normalized.contains(k))
}

fn match_keywords(normalized: &str) -> Option<Intent> {
    let intent = if contains_any(normalized, &HEADCOUNT_KEYWORDS) {
        if contains_any(normalized, &GENDER_KEYWORDS) {
            Intent::HeadcountByGender
        } else if contains_any(normalized, &DEPARTMENT_KEYWORDS) {
            Intent::HeadcountByDepartment
        } else {
            Intent::Headcount
        }
    } else if contains_any(normalized, &ATTRITION_KEYWORDS) {
        Intent::Attrition
    } else if contains_any(normalized, &SALARY_KEYWORDS) {
        Intent::Salary
    } else if contains_any(normalized, &ENGAGEMENT_KEYWORDS) {
        Intent::Engagement
    } else if contains_any(normalized, &DIVERSITY_KEYWORDS) {
        Intent::Diversity
    } else {
        return None;
    };

    debug!("query matched keyword fallback -> {intent}");
    Some(intent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrase_bank_hits() {
        assert_eq!(classify("headcount trend").intent, Some(Intent::Headcount));
        assert_eq!(classify("gender ratio").intent, Some(Intent::HeadcountByGender));
        assert_eq!(
            classify("employees by department").intent,
            Some(Intent::HeadcountByDepartment)
        );
        assert_eq!(classify("show me the turnover").intent, Some(Intent::Attrition));
        assert_eq!(classify("average salary over time").intent, Some(Intent::Salary));
        assert_eq!(classify("employee satisfaction levels").intent, Some(Intent::Engagement));
        assert_eq!(classify("gender diversity").intent, Some(Intent::Diversity));
    }

    #[test]
    fn test_normalization() {
        assert_eq!(classify("  HEADCOUNT TREND  ").intent, Some(Intent::Headcount));
        assert_eq!(classify("Average Salary for Finance").intent, Some(Intent::Salary));
    }

    #[test]
    fn test_phrase_order_is_the_tie_break() {
        // Both "employee count" (headcount) and "attrition rate" (attrition)
        // occur; "employee count" is earlier in the bank, so it wins even
        // though "attrition rate" appears first in the text.
        let query = "attrition rate versus employee count";
        assert_eq!(classify(query).intent, Some(Intent::Headcount));

        // "gender diversity" never wins over "diversity": the plain
        // "diversity" entry is earlier and is a substring of every query
        // containing "gender diversity".
        assert_eq!(classify("gender diversity").intent, Some(Intent::Diversity));
    }

    #[test]
    fn test_keyword_fallback_headcount_family() {
        assert_eq!(classify("how many employees do we have").intent, Some(Intent::Headcount));
        assert_eq!(
            classify("employees split between male and female").intent,
            Some(Intent::HeadcountByGender)
        );
        assert_eq!(
            classify("employees in each function").intent,
            Some(Intent::HeadcountByDepartment)
        );
        assert_eq!(classify("current staff strength").intent, Some(Intent::Headcount));
    }

    #[test]
    fn test_keyword_fallback_priority() {
        // Headcount-family keywords outrank the attrition family.
        assert_eq!(
            classify("employees lost to resignation").intent,
            Some(Intent::Headcount)
        );
        // Attrition outranks salary.
        assert_eq!(classify("resignation versus pay").intent, Some(Intent::Attrition));
        assert_eq!(classify("pay structure").intent, Some(Intent::Salary));
        assert_eq!(classify("satisfaction overview").intent, Some(Intent::Engagement));
        assert_eq!(classify("what ratio of staff").intent, Some(Intent::Diversity));
    }

    #[test]
    fn test_unrecognized_query() {
        let classification = classify("xyz nonsense");
        assert_eq!(classification.intent, None);
        assert!(classification.filters.is_empty());
    }

    #[test]
    fn test_filters_extracted_even_without_intent() {
        let classification = classify("anything about Finance in 2021");
        assert_eq!(classification.intent, None);
        assert_eq!(classification.filters.department.as_deref(), Some("Finance"));
        assert_eq!(classification.filters.years, vec![2021]);
    }
}

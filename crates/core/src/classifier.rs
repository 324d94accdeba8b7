//! Subject inference for positions that carry no explicit subject tag.
//!
//! Classification is a case-insensitive substring search over an ordered taxonomy. The first
//! label whose keyword set has any member inside the text wins, so the order of
//! [`SUBJECT_TAXONOMY`] is the tie-break when vocabularies overlap (for example
//! "biomedical engineering" is labelled Biology, not Engineering). Text that matches nothing is
//! labelled [`DEFAULT_SUBJECT`].
//!
//! Keywords are matched as raw substrings, not words: short terms such as `"ai"` or `"ml"`
//! also match inside longer words.

use crate::constants::DEFAULT_SUBJECT;

/// A subject label together with the keywords that select it.
#[derive(Debug, Clone, Copy)]
pub struct SubjectRule {
    pub label: &'static str,
    pub keywords: &'static [&'static str],
}

/// Ordered taxonomy. Earlier rules take priority.
pub const SUBJECT_TAXONOMY: &[SubjectRule] = &[
    SubjectRule {
        label: "Computer Science",
        keywords: &[
            "computer",
            "software",
            "machine learning",
            "ml",
            "ai",
            "data",
            "robot",
            "cyber",
            "security",
            "algorithm",
        ],
    },
    SubjectRule {
        label: "Biology",
        keywords: &[
            "biology",
            "biological",
            "genomics",
            "bioinformatics",
            "molecular",
            "neuroscience",
            "biomedical",
            "biotech",
        ],
    },
    SubjectRule {
        label: "Chemistry",
        keywords: &["chemistry", "chemical", "organic", "inorganic", "spectroscopy"],
    },
    SubjectRule {
        label: "Physics",
        keywords: &["physics", "quantum", "astroph", "optics", "particle"],
    },
    SubjectRule {
        label: "Environmental Science",
        keywords: &[
            "environment",
            "climate",
            "ecology",
            "sustainability",
            "geology",
            "ocean",
            "marine",
        ],
    },
    SubjectRule {
        label: "Mathematics",
        keywords: &["mathematics", "math", "statistics", "probability", "algebra"],
    },
    SubjectRule {
        label: "Psychology",
        keywords: &["psychology", "cognitive", "behavioral", "neuropsychology"],
    },
    SubjectRule {
        label: "Economics",
        keywords: &["economics", "finance", "market", "econometric"],
    },
    SubjectRule {
        label: "Engineering",
        keywords: &[
            "engineering",
            "mechanical",
            "electrical",
            "civil",
            "materials",
            "industrial",
        ],
    },
    SubjectRule {
        label: "Astronomy",
        keywords: &["astronomy", "telescope", "cosmology"],
    },
    SubjectRule {
        label: "Health",
        keywords: &[
            "medicine",
            "medical",
            "public health",
            "clinical",
            "epidemiology",
        ],
    },
    SubjectRule {
        label: "Linguistics",
        keywords: &["linguistics", "language", "speech"],
    },
    SubjectRule {
        label: "Design",
        keywords: &["design", "ux", "ui", "visual"],
    },
    SubjectRule {
        label: "Political Science",
        keywords: &["political", "policy", "governance"],
    },
];

/// Classify free text into a subject label.
///
/// Total and deterministic: always returns a label from [`SUBJECT_TAXONOMY`] or
/// [`DEFAULT_SUBJECT`].
pub fn classify(text: &str) -> &'static str {
    let normalized = text.to_lowercase();

    SUBJECT_TAXONOMY
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| normalized.contains(kw)))
        .map(|rule| rule.label)
        .unwrap_or(DEFAULT_SUBJECT)
}

/// Infer a subject from a position's title and description.
pub fn infer_subject(title: &str, description: &str) -> &'static str {
    classify(&format!("{title} {description}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_label_keyword() {
        assert_eq!(classify("Quantum transport lab"), "Physics");
        assert_eq!(classify("Telescope operations"), "Astronomy");
        assert_eq!(classify("Econometric modelling"), "Economics");
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert_eq!(classify("GENOMICS"), "Biology");
        assert_eq!(classify("Organic Synthesis"), "Chemistry");
    }

    #[test]
    fn test_earlier_label_wins_on_overlap() {
        // "biomedical" (Biology) and "engineering" (Engineering) both occur.
        assert_eq!(classify("biomedical engineering"), "Biology");
        // "data" (Computer Science) beats "statistics" (Mathematics).
        assert_eq!(classify("statistics of data"), "Computer Science");
    }

    #[test]
    fn test_no_keyword_defaults_to_research() {
        assert_eq!(classify("history of the printing press"), DEFAULT_SUBJECT);
        assert_eq!(classify(""), "Research");
    }

    #[test]
    fn test_keywords_match_inside_words() {
        // "ai" occurs inside "sustainability"; Computer Science is listed first.
        assert_eq!(classify("sustainability"), "Computer Science");
    }

    #[test]
    fn test_infer_subject_robotics_scenario() {
        let subject = infer_subject("ML Robotics Lab", "Work on robot perception");
        assert_eq!(subject, "Computer Science");
    }

    #[test]
    fn test_every_keyword_maps_to_its_label() {
        for rule in SUBJECT_TAXONOMY {
            for &keyword in rule.keywords {
                let earlier = SUBJECT_TAXONOMY
                    .iter()
                    .take_while(|r| r.label != rule.label)
                    .any(|r| r.keywords.iter().any(|kw| keyword.contains(kw)));
                if !earlier {
                    assert_eq!(classify(keyword), rule.label, "keyword {keyword}");
                }
            }
        }
    }
}

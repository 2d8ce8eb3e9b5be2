// Test fixtures with known documents and the corpus entries they overlap
// WHY: end-to-end assertions need inputs whose matches are known in advance
#![allow(dead_code)]

/// Extends the Climate Research Journal passage by a trailing clause, so only shingles match
pub const EXTENDED_CLIMATE_SENTENCE: &str = "Scientists have documented significant alterations in terrestrial and marine environments, with many species facing potential extinction due to habitat loss and changing weather patterns.";

/// Nothing here overlaps the default corpus
pub const UNRELATED_TEXT: &str = "My cat enjoys long naps in the afternoon sun. She ignores the neighbours entirely!";

/// Original prose around one verbatim passage and one near-verbatim sentence
pub const MIXED_DOCUMENT: &str = "My essay begins here with original thoughts.\n\nThe global pandemic accelerated the adoption of remote work, creating new opportunities and challenges for organizations and workers worldwide. I also like my cat.\nRenewable energy technologies have seen dramatic cost reductions over the past decade.";

/// The Future of Work Institute passage hard-wrapped across two lines with a doubled space
pub const WRAPPED_PASSAGE: &str = "Pasted notes.\nThe global pandemic accelerated the adoption of remote work,\ncreating new opportunities and challenges for  organizations and workers worldwide.";

/// Sources `MIXED_DOCUMENT` must be attributed to
pub const MIXED_DOCUMENT_SOURCES: [&str; 2] = ["Future of Work Institute", "Renewable Energy Review"];

/// Nine characters long and a substring of the first passage
pub const SHORT_SENTENCE: &str = "Scientist";

/// The Renewable Energy Review passage with three words swapped for synonyms. Too few
/// shingles survive for a fingerprint match; only synonym normalization finds it.
pub const SYNONYM_REWRITE: &str = "Renewable energy innovations have seen remarkable cost reductions over the past decade, making them increasingly viable with fossil fuel-based electricity generation.";

/// Contains every word the paraphrase scenarios rely on
pub const PARAPHRASE_SOURCE: &str = "The impact of these alterations is profound. Many species face extinction due to habitat loss.";

/// A minimal engine configuration with a single custom passage
pub const CUSTOM_CONFIG_JSON: &str = r#"{
  "detection": { "exact_min_chars": 12 },
  "corpus": [
    {
      "id": "custom1",
      "text": "Lighthouse keepers once trimmed the wicks every evening before the storms arrived.",
      "sourceName": "Coastal History Quarterly",
      "sourceUrl": "https://coastal-history.org/keepers"
    }
  ]
}"#;

pub const CUSTOM_SENTENCE: &str = "Lighthouse keepers once trimmed the wicks every evening before the storms arrived.";

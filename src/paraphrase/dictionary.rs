use serde::{Deserialize, Serialize};

/// A source word and the alternatives a paraphrase may substitute for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionEntry {
    pub word: String,
    pub alternatives: Vec<String>,
}

impl SubstitutionEntry {
    pub fn new(word: &str, alternatives: &[&str]) -> Self {
        Self {
            word: word.to_string(),
            alternatives: alternatives.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Ordered paraphrase dictionary. Entries apply in order, so an alternative that is itself a
/// later source word gets substituted again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubstitutionTable {
    entries: Vec<SubstitutionEntry>,
}

impl SubstitutionTable {
    pub fn new(entries: Vec<SubstitutionEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[SubstitutionEntry] {
        &self.entries
    }
}

impl Default for SubstitutionTable {
    fn default() -> Self {
        Self::new(vec![
            SubstitutionEntry::new("impact", &["effect", "influence", "consequence"]),
            SubstitutionEntry::new("profound", &["deep", "significant", "substantial"]),
            SubstitutionEntry::new("far-reaching", &["widespread", "extensive", "broad"]),
            SubstitutionEntry::new("documented", &["recorded", "observed", "noted"]),
            SubstitutionEntry::new("significant", &["substantial", "considerable", "notable"]),
            SubstitutionEntry::new("alterations", &["changes", "modifications", "transformations"]),
            SubstitutionEntry::new("terrestrial", &["land", "earth", "ground"]),
            SubstitutionEntry::new("marine", &["sea", "ocean", "aquatic"]),
            SubstitutionEntry::new("environments", &["ecosystems", "habitats", "surroundings"]),
            SubstitutionEntry::new("species", &["organisms", "creatures", "lifeforms"]),
            SubstitutionEntry::new("facing", &["confronting", "experiencing", "encountering"]),
            SubstitutionEntry::new("potential", &["possible", "likely", "probable"]),
            SubstitutionEntry::new("extinction", &["disappearance", "eradication", "dying out"]),
            SubstitutionEntry::new("habitat", &["environment", "ecosystem", "natural home"]),
            SubstitutionEntry::new("loss", &["destruction", "degradation", "reduction"]),
            SubstitutionEntry::new("changing", &["shifting", "altering", "transforming"]),
            SubstitutionEntry::new("weather", &["climate", "atmospheric conditions", "meteorological"]),
            SubstitutionEntry::new("patterns", &["trends", "cycles", "systems"]),
            SubstitutionEntry::new("consistently", &["repeatedly", "regularly", "frequently"]),
            SubstitutionEntry::new("warned", &["cautioned", "alerted", "advised"]),
            SubstitutionEntry::new("consequences", &["effects", "outcomes", "results"]),
            SubstitutionEntry::new("highlighting", &["emphasizing", "stressing", "underscoring"]),
            SubstitutionEntry::new("urgent", &["critical", "pressing", "immediate"]),
            SubstitutionEntry::new("need", &["requirement", "necessity", "demand"]),
            SubstitutionEntry::new("coordinated", &["collaborative", "unified", "joint"]),
            SubstitutionEntry::new("international", &["global", "worldwide", "multinational"]),
            SubstitutionEntry::new("action", &["measures", "steps", "initiatives"]),
            SubstitutionEntry::new("mitigate", &["reduce", "decrease", "lessen"]),
            SubstitutionEntry::new("greenhouse", &["atmospheric", "heat-trapping", "warming"]),
            SubstitutionEntry::new("gas", &["emissions", "pollutants", "discharges"]),
            SubstitutionEntry::new("emissions", &["releases", "discharges", "outputs"]),
        ])
    }
}

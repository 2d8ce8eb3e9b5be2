// WHY: the reference corpus is immutable data loaded once and shared read-only by every request

use serde::{Deserialize, Serialize};

/// One reference passage that input text is compared against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferencePassage {
    pub id: String,
    pub text: String,
    pub source_name: String,
    pub source_url: String,
}

impl ReferencePassage {
    pub fn new(id: &str, text: &str, source_name: &str, source_url: &str) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            source_name: source_name.to_string(),
            source_url: source_url.to_string(),
        }
    }
}

/// Ordered list of reference passages. Iteration order is the scan order of every detector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceCorpus {
    passages: Vec<ReferencePassage>,
}

impl ReferenceCorpus {
    pub fn new(passages: Vec<ReferencePassage>) -> Self {
        Self { passages }
    }

    pub fn passages(&self) -> &[ReferencePassage] {
        &self.passages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReferencePassage> {
        self.passages.iter()
    }

    pub fn len(&self) -> usize {
        self.passages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passages.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ReferencePassage> {
        self.passages.iter().find(|p| p.id == id)
    }
}

impl Default for ReferenceCorpus {
    fn default() -> Self {
        Self::new(vec![
            ReferencePassage::new(
                "source1",
                "Scientists have documented significant alterations in terrestrial and marine environments, with many species facing potential extinction due to habitat loss.",
                "Climate Research Journal",
                "https://climate-research.org/global-impacts/2023",
            ),
            ReferencePassage::new(
                "source2",
                "The changing weather patterns are consistently linked to increased greenhouse gas emissions, highlighting the urgent need for coordinated international action.",
                "IPCC Report",
                "https://ipcc.ch/reports/ar6/summary-for-policymakers",
            ),
            ReferencePassage::new(
                "source3",
                "According to recent studies, biodiversity loss has accelerated to unprecedented levels, primarily driven by human activities including deforestation and pollution.",
                "Biodiversity Research",
                "https://biodiversity-research.org/habitat-loss",
            ),
            ReferencePassage::new(
                "source4",
                "The development of artificial intelligence has raised significant ethical concerns regarding privacy, bias, and the potential displacement of human workers.",
                "AI Ethics Institute",
                "https://ai-ethics.org/concerns/2023",
            ),
            ReferencePassage::new(
                "source5",
                "Renewable energy technologies have seen dramatic cost reductions over the past decade, making them increasingly competitive with fossil fuel-based electricity generation.",
                "Renewable Energy Review",
                "https://renewables-review.org/cost-trends",
            ),
            ReferencePassage::new(
                "source6",
                "Modern communication technologies have fundamentally transformed how people interact socially, professionally, and politically, raising questions about their long-term impact on human relationships.",
                "Journal of Communication Studies",
                "https://comm-studies.org/digital-transformation",
            ),
            ReferencePassage::new(
                "source7",
                "The global pandemic accelerated the adoption of remote work, creating new opportunities and challenges for organizations and workers worldwide.",
                "Future of Work Institute",
                "https://future-work.org/remote-trends",
            ),
            ReferencePassage::new(
                "source8",
                "Advances in genetic engineering have created unprecedented possibilities for treating diseases, while simultaneously raising ethical questions about the appropriate limits of such technologies.",
                "Bioethics Journal",
                "https://bioethics-journal.org/genetic-engineering",
            ),
        ])
    }
}

impl<'a> IntoIterator for &'a ReferenceCorpus {
    type Item = &'a ReferencePassage;
    type IntoIter = std::slice::Iter<'a, ReferencePassage>;

    fn into_iter(self) -> Self::IntoIter {
        self.passages.iter()
    }
}

//! Instant-answer response shape and normalization
//!
//! The upstream API returns an ad-hoc document where every field is
//! optional and most are empty strings. Normalization reduces it to a
//! best-effort summary and a bounded, deduplicated source list.

use serde::{Deserialize, Serialize};

use crate::InstantAnswer;

/// Hard cap on the number of sources surfaced per search
const MAX_SOURCES: usize = 5;

/// Fallback summary when the response carries nothing usable
const NO_SUMMARY_FALLBACK: &str = "No specific information found from search results.";

/// One entry of `RelatedTopics` or `Results`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TopicResult {
    pub result: String,
    #[serde(rename = "FirstURL")]
    pub first_url: String,
    pub text: String,
}

/// Instant-answer API response; absent fields default to empty
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InstantAnswerResponse {
    /// Topic summary, possibly carrying markup; `abstract_text` is the
    /// plain-text variant used for normalization
    #[serde(rename = "Abstract")]
    pub abstract_html: String,
    pub abstract_text: String,
    pub abstract_source: String,
    #[serde(rename = "AbstractURL")]
    pub abstract_url: String,
    pub answer: String,
    pub answer_type: String,
    pub definition: String,
    pub definition_source: String,
    #[serde(rename = "DefinitionURL")]
    pub definition_url: String,
    pub heading: String,
    pub image: String,
    pub infobox: serde_json::Value,
    pub redirect: String,
    pub related_topics: Vec<TopicResult>,
    pub results: Vec<TopicResult>,
    #[serde(rename = "Type")]
    pub response_type: String,
}

impl InstantAnswerResponse {
    /// Best-effort one-line summary, in fixed priority order: direct
    /// answer, abstract, definition, first related topic, first result.
    pub fn summary(&self) -> String {
        let first_topic = self
            .related_topics
            .first()
            .map(|topic| topic.text.as_str())
            .unwrap_or("");
        let first_result = self
            .results
            .first()
            .map(|result| result.text.as_str())
            .unwrap_or("");

        for candidate in [
            self.answer.as_str(),
            self.abstract_text.as_str(),
            self.definition.as_str(),
            first_topic,
            first_result,
        ] {
            if !candidate.is_empty() {
                return candidate.to_string();
            }
        }

        NO_SUMMARY_FALLBACK.to_string()
    }

    /// Collect sources in fixed order, skipping empties, deduplicating
    /// on first occurrence, and truncating to `MAX_SOURCES`.
    pub fn sources(&self) -> Vec<String> {
        let direct = [
            &self.abstract_source,
            &self.definition_source,
            &self.abstract_url,
            &self.definition_url,
        ];
        let topic_urls = self.related_topics.iter().map(|topic| &topic.first_url);
        let result_urls = self.results.iter().map(|result| &result.first_url);

        let mut sources: Vec<String> = Vec::new();
        for candidate in direct.into_iter().chain(topic_urls).chain(result_urls) {
            if candidate.is_empty() || sources.contains(candidate) {
                continue;
            }
            sources.push(candidate.clone());
        }

        sources.truncate(MAX_SOURCES);
        sources
    }

    /// Direct answer extraction for the instant-answer mode
    pub fn instant_answer(&self) -> Option<InstantAnswer> {
        if !self.answer.is_empty() {
            let answer_type = if self.answer_type.is_empty() {
                "instant".to_string()
            } else {
                self.answer_type.clone()
            };
            return Some(InstantAnswer {
                answer: self.answer.clone(),
                answer_type,
            });
        }

        if !self.abstract_text.is_empty() {
            return Some(InstantAnswer {
                answer: self.abstract_text.clone(),
                answer_type: "abstract".to_string(),
            });
        }

        None
    }
}

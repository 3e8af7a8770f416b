//! Fuzzy reconciliation of feature names against a canonical reference
//! corpus.
//!
//! Raw boundary names are noisy: diacritics stripped or intact,
//! abbreviated, reordered, or using a different convention than the
//! reference list. Matching runs in two stages: a cheap character
//! subsequence filter narrows the corpus to plausible candidates, then
//! token-overlap scoring ranks only the survivors. Accepted matches
//! rewrite the feature's `name_full`/`name_en` properties in place; a
//! feature with no surviving candidate keeps its original name.

use crate::data::display_name;
use geojson::FeatureCollection;
use serde_json::Value as JsonValue;
use std::collections::HashSet;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// A reference display name with its precomputed matching forms.
#[derive(Clone, Debug)]
pub struct NameCandidate {
    /// Original display string, written back verbatim on acceptance.
    pub display: String,
    /// Letters-only form for subsequence filtering.
    pub letters: String,
    /// Token list for similarity scoring.
    pub words: Vec<String>,
}

/// NFD-decompose and drop combining marks ("Côte" -> "Cote").
fn strip_diacritics(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Lowercased a-z characters only.
pub fn letters(s: &str) -> String {
    strip_diacritics(s)
        .chars()
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_lowercase)
        .collect()
}

/// Lowercased tokens: non-letter characters become separators.
pub fn words(s: &str) -> Vec<String> {
    strip_diacritics(s)
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c.is_ascii_lowercase() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// True if `needle`'s characters appear in `haystack` in order, not
/// necessarily contiguously. The empty needle matches everything.
pub fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut haystack = haystack.chars();
    needle.chars().all(|c| haystack.by_ref().any(|h| h == c))
}

/// Token-overlap similarity: jaccard of the token sets plus a
/// length-ratio term rewarding comparable token counts. Ranges over
/// [0, 2], higher is better.
fn similarity(a: &[String], b: &[String]) -> f64 {
    let set_a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let set_b: HashSet<&str> = b.iter().map(String::as_str).collect();
    let inter = set_a.intersection(&set_b).count() as f64;
    let union = set_a.union(&set_b).count().max(1) as f64;
    let ratio = a.len().min(b.len()) as f64 / a.len().max(b.len()).max(1) as f64;
    inter / union + ratio
}

/// Build the candidate set from reference display names, deduplicated
/// preserving first-seen order.
pub fn build_candidates<I, S>(reference: I) -> Vec<NameCandidate>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    reference
        .into_iter()
        .filter(|name| !name.as_ref().is_empty() && seen.insert(name.as_ref().to_string()))
        .map(|name| {
            let name = name.as_ref();
            NameCandidate {
                display: name.to_string(),
                letters: letters(name),
                words: words(name),
            }
        })
        .collect()
}

/// Flatten a world-countries-style JSON array (entries carrying
/// `name.common` and `name.official`) into a reference corpus.
pub fn reference_from_world_countries(json: &JsonValue) -> Vec<String> {
    let Some(entries) = json.as_array() else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for entry in entries {
        for key in ["common", "official"] {
            if let Some(name) = entry
                .get("name")
                .and_then(|n| n.get(key))
                .and_then(|v| v.as_str())
            {
                if !name.is_empty() && seen.insert(name.to_string()) {
                    out.push(name.to_string());
                }
            }
        }
    }
    out
}

/// Find the best candidate for a raw feature name, if any survives the
/// subsequence filter.
fn best_match<'a>(raw_name: &str, candidates: &'a [NameCandidate]) -> Option<&'a NameCandidate> {
    let feature_letters = letters(raw_name);
    if feature_letters.is_empty() {
        return None;
    }

    let hits: Vec<&NameCandidate> = candidates
        .iter()
        .filter(|c| is_subsequence(&c.letters, &feature_letters))
        .collect();

    match hits.len() {
        0 => None,
        1 => Some(hits[0]),
        _ => {
            let feature_words = words(raw_name);
            // Highest similarity wins; ties prefer the longer (more
            // specific) candidate, then the first encountered.
            let mut best = hits[0];
            let mut best_score = similarity(&feature_words, &best.words);
            for &c in &hits[1..] {
                let score = similarity(&feature_words, &c.words);
                if score > best_score
                    || (score == best_score && c.letters.len() > best.letters.len())
                {
                    best = c;
                    best_score = score;
                }
            }
            Some(best)
        }
    }
}

/// Reconcile every feature's name against the reference corpus, rewriting
/// the `name_full` and `name_en` properties in place with the accepted
/// candidate's display string. Unmatched or nameless features are left
/// untouched; an empty corpus makes the whole pass a no-op.
pub fn reconcile_names<I, S>(collection: &mut FeatureCollection, reference: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let candidates = build_candidates(reference);
    if candidates.is_empty() {
        return;
    }

    for feature in &mut collection.features {
        let raw = display_name(feature);
        if let Some(candidate) = best_match(&raw, &candidates) {
            let display = candidate.display.clone();
            feature.set_property("name_full", display.clone());
            feature.set_property("name_en", display);
        }
    }
}

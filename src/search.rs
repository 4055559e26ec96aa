use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::data::BusinessIdea;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Title,
    Difficulty,
    Cost,
    Time,
    Revenue,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Search and filter criteria. Unset fields match everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdeaQuery {
    pub term: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<u8>,
    pub risk_level: Option<String>,
    pub sort: Option<SortKey>,
    pub order: SortOrder,
}

impl IdeaQuery {
    pub fn is_active(&self) -> bool {
        self.term.as_deref().is_some_and(|t| !t.trim().is_empty())
            || self.category.is_some()
            || self.difficulty.is_some()
            || self.risk_level.is_some()
            || self.sort.is_some()
    }

    fn matches(&self, idea: &BusinessIdea) -> bool {
        let term_ok = match self.term.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let needle = term.to_lowercase();
                [&idea.title, &idea.description, &idea.category]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            }
        };

        term_ok
            && self.category.as_ref().map_or(true, |c| *c == idea.category)
            && self.difficulty.map_or(true, |d| d == idea.difficulty)
            && self.risk_level.as_ref().map_or(true, |r| *r == idea.risk_level)
    }
}

/// Leading amount of a range string: `"$8K - $35K monthly"` -> 8000,
/// `"$2,000 - $8,000"` -> 2000, `"3-6 months"` -> 3. Unparsable input is 0.
pub fn leading_amount(range: &str) -> f64 {
    parse_leading_amount(range).unwrap_or(0.0)
}

fn parse_leading_amount(range: &str) -> Option<f64> {
    let re = Regex::new(r"\$?(\d[\d,]*(?:\.\d+)?)([KkMm]\b)?").ok()?;
    let caps = re.captures(range)?;
    let number: f64 = caps[1].replace(',', "").parse().ok()?;

    let scale = match caps.get(2).map(|m| m.as_str()) {
        Some("K") | Some("k") => 1_000.0,
        Some("M") | Some("m") => 1_000_000.0,
        _ => 1.0,
    };
    Some(number * scale)
}

fn compare(a: &BusinessIdea, b: &BusinessIdea, key: SortKey) -> Ordering {
    match key {
        SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortKey::Difficulty => a.difficulty.cmp(&b.difficulty),
        SortKey::Cost => {
            leading_amount(&a.startup_cost).total_cmp(&leading_amount(&b.startup_cost))
        }
        SortKey::Time => {
            leading_amount(&a.time_to_market).total_cmp(&leading_amount(&b.time_to_market))
        }
        SortKey::Revenue => leading_amount(&a.potential_revenue)
            .total_cmp(&leading_amount(&b.potential_revenue)),
    }
}

/// Filter then (stably) sort. Input order is kept when no sort is set.
pub fn filter_ideas(ideas: &[BusinessIdea], query: &IdeaQuery) -> Vec<BusinessIdea> {
    let mut filtered: Vec<BusinessIdea> = ideas
        .iter()
        .filter(|idea| query.matches(idea))
        .cloned()
        .collect();

    if let Some(key) = query.sort {
        filtered.sort_by(|a, b| {
            let ord = compare(a, b, key);
            match query.order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        });
    }

    filtered
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut out: Vec<String> = values.cloned().collect();
    out.sort();
    out.dedup();
    out
}

pub fn categories(ideas: &[BusinessIdea]) -> Vec<String> {
    distinct_sorted(ideas.iter().map(|i| &i.category))
}

pub fn risk_levels(ideas: &[BusinessIdea]) -> Vec<String> {
    distinct_sorted(ideas.iter().map(|i| &i.risk_level))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archetype::FallbackGenerator;
    use crate::profile::UserProfile;

    fn ideas() -> Vec<BusinessIdea> {
        let profile = UserProfile::new(
            vec!["Education".into()],
            vec!["Marketing".into(), "Teaching".into()],
            "$1,000 - $5,000",
            "Some business knowledge",
            "Part-time (10-20 hours)",
            "Moderate - Balanced risk and reward",
        );
        FallbackGenerator::new().generate(&profile).unwrap()
    }

    #[test]
    fn test_leading_amount() {
        assert_eq!(leading_amount("$2,000 - $8,000"), 2000.0);
        assert_eq!(leading_amount("$8K - $35K monthly"), 8000.0);
        assert_eq!(leading_amount("$1.5K - $10K monthly"), 1500.0);
        assert_eq!(leading_amount("3-6 months"), 3.0);
        assert_eq!(leading_amount("$1,000+"), 1000.0);
        assert_eq!(leading_amount("TBD"), 0.0);
        assert_eq!(leading_amount("$2M+ annually"), 2_000_000.0);
        assert_eq!(leading_amount("6 months"), 6.0);
    }

    #[test]
    fn test_empty_query_keeps_everything_in_order() {
        let ideas = ideas();
        let query = IdeaQuery::default();
        assert!(!query.is_active());

        let out = filter_ideas(&ideas, &query);
        let titles: Vec<_> = out.iter().map(|i| i.title.as_str()).collect();
        let expected: Vec<_> = ideas.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, expected);
    }

    #[test]
    fn test_term_is_case_insensitive_across_fields() {
        let ideas = ideas();
        let query = IdeaQuery {
            term: Some("MARKETPLACE".into()),
            ..Default::default()
        };
        let out = filter_ideas(&ideas, &query);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "Education Digital Marketplace");

        let by_category = IdeaQuery {
            term: Some("consult".into()),
            ..Default::default()
        };
        assert_eq!(filter_ideas(&ideas, &by_category).len(), 1);
    }

    #[test]
    fn test_category_filter() {
        let ideas = ideas();
        // Marketing is automatable, so the service idea is filed under Technology.
        let query = IdeaQuery {
            category: Some("Technology".into()),
            ..Default::default()
        };
        let out = filter_ideas(&ideas, &query);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|i| i.category == "Technology"));
    }

    #[test]
    fn test_sort_by_cost_descending() {
        let ideas = ideas();
        let query = IdeaQuery {
            sort: Some(SortKey::Cost),
            order: SortOrder::Desc,
            ..Default::default()
        };
        let out = filter_ideas(&ideas, &query);
        let costs: Vec<f64> = out.iter().map(|i| leading_amount(&i.startup_cost)).collect();
        assert!(costs.windows(2).all(|w| w[0] >= w[1]), "{:?}", costs);
    }

    #[test]
    fn test_sort_by_difficulty_is_stable() {
        let ideas = ideas();
        let query = IdeaQuery {
            sort: Some(SortKey::Difficulty),
            ..Default::default()
        };
        let out = filter_ideas(&ideas, &query);
        // Consulting and education share difficulty 3 and keep their relative order.
        let consulting = out.iter().position(|i| i.category == "Consulting").unwrap();
        let education = out.iter().position(|i| i.category == "Education").unwrap();
        assert!(consulting < education);
        assert!(out.windows(2).all(|w| w[0].difficulty <= w[1].difficulty));
    }

    #[test]
    fn test_facets() {
        let ideas = ideas();
        assert_eq!(
            categories(&ideas),
            vec!["Consulting", "Education", "Technology"]
        );
        assert_eq!(risk_levels(&ideas), vec!["Low", "Low-Medium", "Medium", "Medium-High"]);
    }
}

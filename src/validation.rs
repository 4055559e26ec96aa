//! Market validation report and a rough financial projection for one idea.
//! The numbers are illustrative heuristics, not forecasts.

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::data::BusinessIdea;
use crate::profile::{Budget, Expertise, UserProfile};
use crate::search::leading_amount;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketValidation {
    pub market_size: String,
    pub competition_level: String,
    pub trend_analysis: String,
    pub barriers: Vec<String>,
    pub opportunities: Vec<String>,
    pub risk_factors: Vec<String>,
    pub success_probability: u8,
    pub time_to_breakeven: String,
    pub scalability_score: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    pub name: String,
    pub description: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub market_share: String,
    pub pricing: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedRevenue {
    pub month6: u64,
    pub year1: u64,
    pub year2: u64,
    pub year3: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Roi {
    pub year1: String,
    pub year2: String,
    pub year3: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialProjection {
    pub initial_investment: u64,
    pub monthly_expenses: u64,
    pub projected_revenue: ProjectedRevenue,
    pub break_even_point: String,
    pub roi: Roi,
}

fn market_size(category: &str) -> &'static str {
    match category {
        "Technology" => "$5.2 trillion global market, growing 8% annually",
        "Consulting" => "$160 billion market, 7% annual growth",
        "Education" => "$350 billion online education market, 15% growth",
        "Services" => "$2.4 trillion business services market",
        "E-commerce" => "$6.2 trillion global market, 12% growth",
        _ => "$50+ billion addressable market with steady growth",
    }
}

fn competition_level(category: &str) -> &'static str {
    match category {
        "Technology" => "High - Many established players, but room for innovation",
        "Consulting" => "Medium - Fragmented market with local opportunities",
        "Education" => "Medium-High - Growing market with differentiation opportunities",
        "Services" => "Medium - Local competition, relationship-based",
        "E-commerce" => "High - Dominated by major platforms, niche opportunities exist",
        _ => "Medium - Competitive but opportunities exist for differentiation",
    }
}

fn trend_analysis(category: &str) -> &'static str {
    match category {
        "Technology" => "AI/ML adoption accelerating, remote work driving digital transformation",
        "Consulting" => "Digital transformation consulting in high demand, sustainability focus growing",
        "Education" => "Microlearning and skill-based education trending, corporate training expanding",
        "Services" => "Automation creating new service categories, personalization increasingly important",
        "E-commerce" => "Social commerce growing, sustainability and local sourcing trending",
        _ => "Market showing positive growth trends with digital adoption increasing",
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn barriers(category: &str, budget: &Budget) -> Vec<String> {
    let mut out = to_strings(&[
        "Initial capital requirements",
        "Customer acquisition costs",
        "Regulatory compliance",
    ]);
    if *budget == Budget::Under1K {
        out.extend(to_strings(&["Limited marketing budget", "Bootstrap growth challenges"]));
    } else if category == "Technology" {
        out.extend(to_strings(&[
            "Technical complexity",
            "Development time",
            "Talent acquisition",
        ]));
    }
    out
}

fn opportunities(interests: &[String]) -> Vec<String> {
    let mut out = to_strings(&["Growing market demand", "Digital transformation acceleration"]);
    let has = |name: &str| interests.iter().any(|i| i == name);
    if has("Artificial Intelligence") {
        out.extend(to_strings(&["AI integration opportunities", "Automation potential"]));
    } else if has("Environmental") {
        out.extend(to_strings(&["Sustainability focus", "Green technology adoption"]));
    } else {
        out.extend(to_strings(&[
            "Niche specialization potential",
            "Partnership opportunities",
        ]));
    }
    out
}

fn risk_factors(category: &str, expertise: &Expertise) -> Vec<String> {
    let mut out = to_strings(&[
        "Market competition",
        "Economic downturns",
        "Customer acquisition challenges",
    ]);
    if *expertise == Expertise::CompleteBeginner {
        out.extend(to_strings(&[
            "Learning curve challenges",
            "Operational inexperience",
        ]));
    } else if category == "Technology" {
        out.extend(to_strings(&[
            "Technical obsolescence",
            "Security vulnerabilities",
            "Scalability challenges",
        ]));
    }
    out
}

/// Starts at 60 and is clamped to 20..=85.
pub fn success_probability(idea: &BusinessIdea, profile: &UserProfile) -> u8 {
    let mut probability: i32 = 60;

    probability += match profile.expertise.tag() {
        Expertise::SerialEntrepreneur => 15,
        Expertise::DomainExpert => 10,
        Expertise::CompleteBeginner => -10,
        _ => 0,
    };

    if idea.difficulty <= 2 && profile.skills.len() >= 3 {
        probability += 10;
    }
    if idea.difficulty >= 4 && profile.skills.len() < 2 {
        probability -= 15;
    }
    if *profile.budget.tag() == Budget::Over100K && idea.startup_cost.contains("Under") {
        probability += 5;
    }

    probability.clamp(20, 85) as u8
}

/// Tight budgets push every bound of the range out by two months.
fn time_to_breakeven(category: &str, budget: &Budget) -> String {
    let base = match category {
        "Consulting" => "3-6 months",
        "Services" => "4-8 months",
        "Technology" => "8-18 months",
        "Education" => "6-12 months",
        "E-commerce" => "6-15 months",
        _ => "6-12 months",
    };

    if *budget != Budget::Under1K {
        return base.to_string();
    }

    match Regex::new(r"\d+") {
        Ok(re) => re
            .replace_all(base, |caps: &Captures| {
                let months: u32 = caps[0].parse().unwrap_or(0);
                (months + 2).to_string()
            })
            .into_owned(),
        Err(_) => base.to_string(),
    }
}

fn scalability_score(category: &str) -> u8 {
    match category {
        "Technology" => 9,
        "Education" => 8,
        "E-commerce" => 7,
        "Consulting" => 6,
        "Services" => 5,
        _ => 6,
    }
}

pub fn validate_idea(idea: &BusinessIdea, profile: &UserProfile) -> MarketValidation {
    let category = idea.category.as_str();
    MarketValidation {
        market_size: market_size(category).into(),
        competition_level: competition_level(category).into(),
        trend_analysis: trend_analysis(category).into(),
        barriers: barriers(category, profile.budget.tag()),
        opportunities: opportunities(&profile.interests),
        risk_factors: risk_factors(category, profile.expertise.tag()),
        success_probability: success_probability(idea, profile),
        time_to_breakeven: time_to_breakeven(category, profile.budget.tag()),
        scalability_score: scalability_score(category),
    }
}

fn competitor(
    name: &str,
    description: &str,
    strengths: [&str; 3],
    weaknesses: [&str; 3],
    market_share: &str,
    pricing: &str,
) -> Competitor {
    Competitor {
        name: name.into(),
        description: description.into(),
        strengths: to_strings(&strengths),
        weaknesses: to_strings(&weaknesses),
        market_share: market_share.into(),
        pricing: pricing.into(),
    }
}

/// Sample incumbents for the category. Empty for categories without a list.
pub fn competitor_analysis(category: &str) -> Vec<Competitor> {
    match category {
        "Technology" => vec![
            competitor(
                "TechCorp Solutions",
                "Enterprise software solutions",
                ["Established brand", "Large client base", "Comprehensive features"],
                ["High pricing", "Complex setup", "Poor customer service"],
                "15%",
                "$500-2000/month",
            ),
            competitor(
                "InnovateTech",
                "Startup-focused tech solutions",
                ["Modern UI", "Competitive pricing", "Fast implementation"],
                ["Limited features", "Small team", "New to market"],
                "3%",
                "$50-300/month",
            ),
        ],
        "Consulting" => vec![competitor(
            "Big Consulting Firm",
            "Global management consulting",
            ["Brand recognition", "Extensive resources", "Proven methodologies"],
            ["Very expensive", "Slow delivery", "One-size-fits-all approach"],
            "25%",
            "$200-500/hour",
        )],
        _ => Vec::new(),
    }
}

fn percent(numerator: f64, denominator: f64) -> String {
    format!("{}%", (numerator / denominator * 100.0).round() as i64)
}

pub fn financial_projection(idea: &BusinessIdea, profile: &UserProfile) -> FinancialProjection {
    let parsed = leading_amount(&idea.startup_cost);
    let initial = if parsed > 0.0 { parsed } else { 5000.0 };
    let monthly_expenses = (initial * 0.15).round();

    let base = match idea.category.as_str() {
        "Technology" => 8000.0,
        "Consulting" => 12000.0,
        "Education" => 6000.0,
        "Services" => 10000.0,
        _ => 8000.0,
    };
    let multiplier = if profile.time_commitment.tag().is_full_time() {
        1.5
    } else {
        1.0
    };
    let monthly = base * multiplier;

    let margin = monthly * 0.7 - monthly_expenses;
    let break_even_point = if margin > 0.0 {
        format!("{} months", (initial / margin).ceil() as u64)
    } else {
        "Not reached at projected revenue".to_string()
    };

    FinancialProjection {
        initial_investment: initial.round() as u64,
        monthly_expenses: monthly_expenses as u64,
        projected_revenue: ProjectedRevenue {
            month6: (monthly * 0.3).round() as u64,
            year1: (monthly * 0.7).round() as u64,
            year2: (monthly * 1.2).round() as u64,
            year3: (monthly * 1.8).round() as u64,
        },
        break_even_point,
        roi: Roi {
            year1: percent(monthly * 0.7 * 12.0 - monthly_expenses * 12.0 - initial, initial),
            year2: percent(monthly * 1.2 * 12.0 - monthly_expenses * 12.0, initial),
            year3: percent(monthly * 1.8 * 12.0 - monthly_expenses * 12.0, initial),
        },
    }
}

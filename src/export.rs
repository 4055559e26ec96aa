use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::data::{BusinessIdea, FallbackReason, Generation, IdeaSource};

pub fn write_generation(path: &Path, generation: &Generation) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }

    let json = serde_json::to_string_pretty(generation)?;
    fs::write(path, json).with_context(|| format!("Failed to write ideas: {:?}", path))?;
    Ok(())
}

/// Reads ideas from either a saved generation or a bare JSON array of ideas.
pub fn read_ideas(path: &Path) -> Result<Vec<BusinessIdea>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read ideas: {:?}", path))?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in {:?}", path))?;

    let ideas = match value.get("ideas") {
        Some(ideas) => serde_json::from_value(ideas.clone())?,
        None => serde_json::from_value(value)?,
    };
    Ok(ideas)
}

fn source_line(source: &IdeaSource) -> String {
    match source {
        IdeaSource::Ai => "AI-generated".to_string(),
        IdeaSource::Fallback(FallbackReason::NotConfigured) => {
            "Template ideas (no API credential configured)".to_string()
        }
        IdeaSource::Fallback(FallbackReason::Upstream(reason)) => {
            format!("Template ideas (upstream unavailable: {})", reason)
        }
    }
}

pub fn render_markdown(generation: &Generation) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Business Ideas\n");
    let _ = writeln!(
        out,
        "_{} at {}_\n",
        source_line(&generation.source),
        generation.generated_at.format("%Y-%m-%d %H:%M UTC")
    );

    for (idx, idea) in generation.ideas.iter().enumerate() {
        let _ = writeln!(out, "## {}. {}\n", idx + 1, idea.title);
        let _ = writeln!(out, "{}\n", idea.description);
        let _ = writeln!(out, "**Category:** {}", idea.category);
        let _ = writeln!(out, "**Startup Cost:** {}", idea.startup_cost);
        let _ = writeln!(out, "**Difficulty:** {}/5", idea.difficulty);
        let _ = writeln!(out, "**Time to Market:** {}", idea.time_to_market);
        let _ = writeln!(out, "**Potential Revenue:** {}", idea.potential_revenue);
        let _ = writeln!(out, "**Risk Level:** {}", idea.risk_level);
        let _ = writeln!(out, "**Market Insight:** {}", idea.market_insight);
        let _ = writeln!(out, "**Unique Value:** {}", idea.unique_value);
        let _ = writeln!(out, "**Target Audience:** {}\n", idea.target_audience);
        let _ = writeln!(out, "### Key Steps\n");
        for (step_idx, step) in idea.key_steps.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", step_idx + 1, step);
        }
        let _ = writeln!(out);
    }

    out
}

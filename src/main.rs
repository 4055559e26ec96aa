use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use venturecraft::search::{self, IdeaQuery, SortKey, SortOrder};
use venturecraft::{export, validation};
use venturecraft::{Generation, IdeaRequestService, ServiceConfig, UserProfile};

#[derive(Parser)]
#[command(name = "venturecraft")]
#[command(about = "Venturecraft CLI - personalized business ideas from your interests and skills", long_about = None)]
struct Cli {
    #[command(flatten)]
    upstream: UpstreamArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct UpstreamArgs {
    /// API credential; leave unset to use template ideas only
    #[arg(long, env = "VENTURECRAFT_API_KEY", global = true, hide_env_values = true)]
    api_key: Option<String>,

    /// Text-generation endpoint
    #[arg(long, env = "VENTURECRAFT_ENDPOINT", global = true)]
    endpoint: Option<String>,

    /// Model identifier
    #[arg(long, env = "VENTURECRAFT_MODEL", global = true)]
    model: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "VENTURECRAFT_TIMEOUT_SECS", global = true, default_value_t = 30)]
    timeout_secs: u64,
}

impl UpstreamArgs {
    fn to_config(&self) -> ServiceConfig {
        let mut config = ServiceConfig::default()
            .with_timeout(Duration::from_secs(self.timeout_secs));
        if let Some(key) = &self.api_key {
            config = config.with_api_key(key);
        }
        if let Some(endpoint) = &self.endpoint {
            config = config.with_endpoint(endpoint);
        }
        if let Some(model) = &self.model {
            config = config.with_model(model);
        }
        config
    }
}

#[derive(Args)]
struct ProfileArgs {
    /// Profile JSON file (wizard format); overrides the flags below
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Interests, comma separated; the first is the primary interest
    #[arg(long, value_delimiter = ',')]
    interests: Vec<String>,

    /// Skills, comma separated; the first two are primary and secondary
    #[arg(long, value_delimiter = ',')]
    skills: Vec<String>,

    #[arg(long, default_value = "$1,000 - $5,000")]
    budget: String,

    #[arg(long, default_value = "Some business knowledge - Basic understanding")]
    expertise: String,

    #[arg(long, default_value = "Part-time (10-20 hours)")]
    time_commitment: String,

    #[arg(long, default_value = "Moderate - Balanced risk and reward")]
    risk_tolerance: String,
}

impl ProfileArgs {
    fn load(&self) -> Result<UserProfile> {
        if let Some(path) = &self.profile {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read profile: {:?}", path))?;
            let profile: UserProfile = serde_json::from_str(&content)
                .with_context(|| format!("Invalid profile JSON: {:?}", path))?;
            return Ok(profile);
        }

        Ok(UserProfile::new(
            trimmed(&self.interests),
            trimmed(&self.skills),
            self.budget.as_str(),
            self.expertise.as_str(),
            self.time_commitment.as_str(),
            self.risk_tolerance.as_str(),
        ))
    }
}

fn trimmed(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[derive(Args)]
struct SearchArgs {
    /// Keep ideas whose title, description, or category contains this text
    #[arg(long)]
    search: Option<String>,

    #[arg(long)]
    category: Option<String>,

    #[arg(long)]
    difficulty: Option<u8>,

    #[arg(long)]
    risk_level: Option<String>,

    #[arg(long, value_enum)]
    sort: Option<SortKey>,

    /// Sort descending
    #[arg(long)]
    desc: bool,
}

impl SearchArgs {
    fn to_query(&self) -> IdeaQuery {
        IdeaQuery {
            term: self.search.clone(),
            category: self.category.clone(),
            difficulty: self.difficulty,
            risk_level: self.risk_level.clone(),
            sort: self.sort,
            order: if self.desc {
                SortOrder::Desc
            } else {
                SortOrder::Asc
            },
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Md,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate business ideas for a profile
    Generate {
        #[command(flatten)]
        profile: ProfileArgs,

        #[command(flatten)]
        search: SearchArgs,

        /// Output format (json or md)
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Also save the generation as JSON to this path
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Market validation report and financial projection for a saved idea
    Validate {
        /// Saved ideas (output of `generate --output`)
        #[arg(long)]
        ideas: PathBuf,

        /// Zero-based index of the idea to validate
        #[arg(long, default_value_t = 0)]
        index: usize,

        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Check the API credential and endpoint
    Probe,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = cli.upstream.to_config();

    match cli.command {
        Commands::Generate {
            profile,
            search,
            format,
            output,
        } => {
            let profile = profile.load()?;
            tracing::info!(
                interests = ?profile.interests,
                configured = config.is_configured(),
                "Generating ideas"
            );

            let service = IdeaRequestService::new(config)?;
            let mut generation = service.generate(&profile).await?;

            if let Some(path) = &output {
                export::write_generation(path, &generation)?;
                tracing::info!(path = ?path, "Saved ideas");
            }

            let query = search.to_query();
            if query.is_active() {
                generation.ideas = search::filter_ideas(&generation.ideas, &query);
            }
            print_generation(&generation, format)?;
        }
        Commands::Validate {
            ideas,
            index,
            profile,
        } => {
            let profile = profile.load()?;
            profile.validate()?;
            let ideas = export::read_ideas(&ideas)?;
            let idea = ideas
                .get(index)
                .with_context(|| format!("No idea at index {} ({} saved)", index, ideas.len()))?;

            tracing::info!(title = %idea.title, "Validating idea");
            let report = serde_json::json!({
                "idea": idea.title,
                "validation": validation::validate_idea(idea, &profile),
                "competitors": validation::competitor_analysis(&idea.category),
                "projection": validation::financial_projection(idea, &profile),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Probe => {
            let configured = config.is_configured();
            let service = IdeaRequestService::new(config)?;
            if !configured {
                println!("No API credential configured; template ideas will be used.");
            } else if service.test_connection().await {
                println!("Connection OK ({})", service.config().model);
            } else {
                anyhow::bail!("Connection failed: {}", service.config().endpoint);
            }
        }
    }

    Ok(())
}

fn print_generation(generation: &Generation, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(generation)?),
        OutputFormat::Md => print!("{}", export::render_markdown(generation)),
    }
    Ok(())
}

//! Profile, keyword and competitor command handlers.

use brightrank_core::{BrandProfile, ProfileError};
use brightrank_dashboard::{edit_profile, load_profile, run_keyword_analysis};
use clap::Subcommand;

use crate::app::App;

/// Sub-commands available under `keywords`.
#[derive(Debug, Subcommand)]
pub enum KeywordCommands {
    /// List tracked keywords
    List,
    /// Track a new keyword
    Add { keyword: String },
    /// Stop tracking a keyword
    Remove { keyword: String },
    /// Summarize how the brand shows up for its keywords
    Analyze,
}

/// Sub-commands available under `competitors`.
#[derive(Debug, Subcommand)]
pub enum CompetitorCommands {
    /// List tracked competitors
    List,
    /// Track a competitor with its current visibility score (0-100)
    Add {
        name: String,
        #[arg(long, default_value_t = 50, allow_negative_numbers = true)]
        score: i64,
    },
    /// Stop tracking a competitor
    Remove { name: String },
}

/// Build a profile from `onboard` flags, applying the same checks as later
/// edits.
pub(crate) fn profile_from_flags(
    brand: &str,
    keywords: &str,
    competitors: &[(String, i64)],
) -> Result<BrandProfile, ProfileError> {
    let mut profile = BrandProfile::new(brand, "");
    profile.validate()?;
    for keyword in brightrank_core::profile::split_keywords(keywords) {
        // Repeated keywords collapse.
        match profile.add_keyword(&keyword) {
            Ok(()) | Err(ProfileError::DuplicateKeyword(_)) => {}
            Err(e) => return Err(e),
        }
    }
    for (name, score) in competitors {
        profile.add_competitor(name, *score)?;
    }
    Ok(profile)
}

pub(crate) fn run_show(app: &App) -> anyhow::Result<()> {
    let profile = load_profile(&app.repo)?;
    println!("Brand:       {}", profile.brand_name);
    println!("Keywords:    {}", profile.keyword_list().join(", "));
    if profile.competitors.is_empty() {
        println!("Competitors: none");
    } else {
        println!("Competitors:");
        for c in &profile.competitors {
            println!("  {:<25}{}", c.name, c.visibility);
        }
    }
    Ok(())
}

pub(crate) async fn run_keywords(app: &App, command: KeywordCommands) -> anyhow::Result<()> {
    match command {
        KeywordCommands::List => {
            let profile = load_profile(&app.repo)?;
            let keywords = profile.keyword_list();
            if keywords.is_empty() {
                println!("no keywords tracked; add one with `brightrank keywords add <KEYWORD>`");
            }
            for keyword in keywords {
                println!("{keyword}");
            }
        }
        KeywordCommands::Add { keyword } => {
            let ((), profile) = edit_profile(&app.repo, |p| p.add_keyword(&keyword))?;
            println!(
                "tracking '{}' ({} keywords)",
                keyword.trim(),
                profile.keyword_list().len()
            );
        }
        KeywordCommands::Remove { keyword } => {
            let (removed, _) = edit_profile(&app.repo, |p| Ok(p.remove_keyword(&keyword)))?;
            if removed {
                println!("stopped tracking '{}'", keyword.trim());
            } else {
                println!("'{}' was not tracked", keyword.trim());
            }
        }
        KeywordCommands::Analyze => {
            let profile = load_profile(&app.repo)?;
            let analysis = run_keyword_analysis(
                app.provider(),
                &profile.brand_name,
                &profile.keyword_list(),
            )
            .await?;
            println!("Score:     {}", analysis.score);
            println!("Sentiment: {}", analysis.sentiment);
            println!();
            println!("{}", analysis.summary);
            if !analysis.mentions.is_empty() {
                println!();
                println!("{:<10}MENTION", "SENTIMENT");
                for m in &analysis.mentions {
                    println!("{:<10}{}", m.sentiment, m.text);
                }
            }
        }
    }
    Ok(())
}

pub(crate) fn run_competitors(app: &App, command: CompetitorCommands) -> anyhow::Result<()> {
    match command {
        CompetitorCommands::List => {
            let profile = load_profile(&app.repo)?;
            if profile.competitors.is_empty() {
                println!("no competitors tracked");
                return Ok(());
            }
            println!("{:<25}VISIBILITY", "NAME");
            for c in &profile.competitors {
                println!("{:<25}{}", c.name, c.visibility);
            }
        }
        CompetitorCommands::Add { name, score } => {
            let ((), profile) = edit_profile(&app.repo, |p| p.add_competitor(&name, score))?;
            println!(
                "tracking competitor '{}' ({} total)",
                name.trim(),
                profile.competitors.len()
            );
        }
        CompetitorCommands::Remove { name } => {
            let (removed, _) = edit_profile(&app.repo, |p| Ok(p.remove_competitor(&name)))?;
            if removed {
                println!("removed competitor '{name}'");
            } else {
                println!("no competitor named '{name}'");
            }
        }
    }
    Ok(())
}

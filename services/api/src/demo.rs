use crate::infra::{parse_date, sample_programs, InMemoryCatalog};
use chrono::{Local, NaiveDate};
use clap::Args;
use policy_match::error::AppError;
use policy_match::matching::{
    EmploymentStatus, MatchingConfig, MatchingService, Profile, RankOptions, Recommendation,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct RankArgs {
    /// Applicant profile as inline JSON, e.g. '{"age":25,"region":"서울","income":3000,"employment":"job_seeker"}'
    #[arg(long, value_parser = parse_profile)]
    pub(crate) profile: Profile,
    /// Catalog export to rank (JSON array or CSV)
    #[arg(long)]
    pub(crate) catalog: PathBuf,
    /// Drop programs scoring below this threshold
    #[arg(long)]
    pub(crate) min_score: Option<f64>,
    /// Maximum number of programs to return
    #[arg(long)]
    pub(crate) max_results: Option<usize>,
    /// Reference date for deadline checks (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the recommendation as JSON instead of a text listing
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Reference date for deadline checks (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Maximum number of programs listed per applicant
    #[arg(long, default_value_t = 3)]
    pub(crate) max_results: usize,
}

fn parse_profile(raw: &str) -> Result<Profile, String> {
    let profile: Profile =
        serde_json::from_str(raw).map_err(|err| format!("invalid profile JSON ({err})"))?;
    profile.validate().map_err(|err| err.to_string())?;
    Ok(profile)
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), AppError> {
    let RankArgs {
        profile,
        catalog,
        min_score,
        max_results,
        today,
        json,
    } = args;

    let catalog = InMemoryCatalog::load(Some(&catalog))?;
    let service = MatchingService::new(Arc::new(catalog), MatchingConfig::default());

    let defaults = service.default_options();
    let options = RankOptions {
        min_score: min_score.unwrap_or(defaults.min_score),
        max_results: max_results.unwrap_or(defaults.max_results),
    };
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let recommendation = service.recommend(&profile, &options, today)?;

    if json {
        let rendered =
            serde_json::to_string_pretty(&recommendation).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        render_recommendation(&recommendation);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { today, max_results } = args;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let service = MatchingService::new(
        Arc::new(InMemoryCatalog::new(sample_programs())),
        MatchingConfig::default(),
    );
    let options = RankOptions {
        max_results,
        ..service.default_options()
    };

    println!("Policy matching demo (reference date {today})");
    for profile in demo_applicants() {
        println!();
        let recommendation = service.recommend(&profile, &options, today)?;
        render_recommendation(&recommendation);
    }

    Ok(())
}

fn demo_applicants() -> Vec<Profile> {
    vec![
        Profile {
            age: 25,
            region: "서울".to_string(),
            income: 3000,
            employment: EmploymentStatus::JobSeeker,
            interest: Some("주거".to_string()),
        },
        Profile {
            age: 31,
            region: "Busan".to_string(),
            income: 4200,
            employment: EmploymentStatus::Employed,
            interest: None,
        },
        Profile {
            age: 37,
            region: "제주".to_string(),
            income: 2400,
            employment: EmploymentStatus::SelfEmployed,
            interest: Some("금융".to_string()),
        },
    ]
}

fn render_recommendation(recommendation: &Recommendation) {
    let summary = &recommendation.summary;
    println!("Applicant: {}", summary.profile_summary);
    println!(
        "- {} (average score {:.1})",
        summary.message, summary.average_score
    );

    for (rank, result) in recommendation.results.iter().enumerate() {
        println!(
            "  {}. [{}] {} ({}) score {:.1}",
            rank + 1,
            result.program_id,
            result.title,
            result.category,
            result.score
        );
        if !result.benefit_summary.trim().is_empty() {
            println!("     Benefit: {}", result.benefit_summary);
        }
        if let Some(deadline) = &result.deadline {
            println!("     Deadline: {deadline}");
        }
        for reason in &result.reasons {
            println!("     - {reason}");
        }
    }

    if !summary.category_distribution.is_empty() {
        let mix: Vec<String> = summary
            .category_distribution
            .iter()
            .map(|(category, count)| format!("{category} {count}"))
            .collect();
        println!("  Category mix: {}", mix.join(", "));
    }
}

//! Terminal front end for the job board: browse with filters, apply for a job.

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use jobboard_api::catalog::Job;
use jobboard_api::client::{
    ApplicationForm, ClientState, HttpJobBoardClient, SessionConfig, SessionHandle,
};
use jobboard_api::filtering::FilterPatch;

#[derive(Parser)]
#[command(author, version, about = "Browse job listings and submit applications")]
struct Cli {
    /// Base URL of the API, including the `/api` prefix
    #[arg(long, env = "JOBBOARD_API_URL", default_value = "http://localhost:8080/api")]
    api_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List jobs matching the given filters
    List(ListArgs),
    /// Show the values accepted by each filter
    Facets,
    /// Apply for a job
    Apply(ApplyArgs),
}

#[derive(Args)]
struct ListArgs {
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    location: Option<String>,
    #[arg(long = "level")]
    experience_level: Option<String>,
    /// Only remote-friendly jobs
    #[arg(long)]
    remote: bool,
    /// Free-text search over title, company and description
    #[arg(long)]
    search: Option<String>,
}

#[derive(Args)]
struct ApplyArgs {
    #[arg(long)]
    job_id: u32,
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    phone: String,
    #[arg(long)]
    cover_letter: String,
    /// Resume file name (PDF); the file itself is not uploaded
    #[arg(long)]
    resume: Option<String>,
}

impl ListArgs {
    fn patch(self) -> FilterPatch {
        FilterPatch {
            category: self.category,
            location: self.location,
            experience_level: self.experience_level,
            search_term: self.search,
            remote: self.remote.then_some(true),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let client = HttpJobBoardClient::new(cli.api_url.clone())
        .context("Failed to build HTTP client")?;

    match cli.command {
        Command::Facets => {
            let facets = client.fetch_facets().await?;
            println!("Categories:        {}", facets.categories.join(" | "));
            println!("Locations:         {}", facets.locations.join(" | "));
            println!("Experience levels: {}", facets.experience_levels.join(" | "));
        }
        Command::List(args) => {
            let session = start_session(client).await?;
            let patch = args.patch();
            let state = if patch == FilterPatch::default() {
                session.snapshot()
            } else {
                session.set_filters(patch);
                session.wait_until(|s| s.applied_seq == 1).await?
            };
            print_jobs(&state);
            session.shutdown().await;
        }
        Command::Apply(args) => {
            let session = start_session(client).await?;
            let state = session.snapshot();
            let job = state
                .catalog
                .iter()
                .find(|j| j.id == args.job_id)
                .cloned()
                .with_context(|| format!("Job {} not found", args.job_id))?;

            let form = ApplicationForm {
                first_name: args.first_name,
                last_name: args.last_name,
                email: args.email,
                phone: args.phone,
                cover_letter: args.cover_letter,
                resume_file_name: args.resume,
            };
            let errors = form.validate();
            if !errors.is_empty() {
                for message in errors.values() {
                    eprintln!("  - {message}");
                }
                bail!("Application form has {} problem(s)", errors.len());
            }

            let response = session.submit(form.into_payload(&job)).await?;
            println!("{} ({})", response.message, response.application_id);
            println!("Applied for {} at {}", job.title, job.company);
            session.shutdown().await;
        }
    }

    Ok(())
}

async fn start_session(client: HttpJobBoardClient) -> Result<SessionHandle> {
    let session = SessionHandle::spawn(Arc::new(client), SessionConfig::default());
    let state = session.wait_until(|s| s.initialized).await?;
    if let Some(advisory) = &state.advisory {
        eprintln!("warning: {advisory}");
    }
    Ok(session)
}

fn print_jobs(state: &ClientState) {
    if state.jobs.is_empty() {
        println!("No jobs match the current filters.");
        return;
    }
    for job in &state.jobs {
        print_job(job);
    }
    println!("{} of {} jobs", state.jobs.len(), state.catalog.len());
}

fn print_job(job: &Job) {
    let remote = if job.remote { " (remote)" } else { "" };
    println!(
        "#{:<3} {} at {}\n     {}{} | {} | {} | {}\n     apply by {}",
        job.id,
        job.title,
        job.company,
        job.location,
        remote,
        job.category,
        job.experience_level.as_str(),
        job.salary,
        job.application_deadline
    );
}

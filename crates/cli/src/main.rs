use std::sync::Arc;

use clap::{Parser, Subcommand};
use sluglabs_core::{
    classify, CoreConfig, InMemorySubmissionStore, MongoPositionStore, PositionService,
    SubmissionFilter, SubmissionService,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sluglabs")]
#[command(about = "SlugLabs research position directory CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the subject inferred for some text
    Classify {
        /// Title and/or description text
        text: Vec<String>,
    },
    /// List positions from the document store
    Positions {
        /// Only show positions matching this text
        #[arg(long)]
        query: Option<String>,
    },
    /// Show one position as JSON
    Position {
        /// 24-character hex object id
        id: String,
    },
    /// Ping the document store
    Ping,
    /// List the sample submissions
    Submissions {
        /// drafted, sent or failed
        #[arg(long)]
        status: Option<String>,
    },
    /// Print a follow-up email for a sample submission
    FollowUp {
        /// Submission id, e.g. sub_001
        id: String,
    },
}

fn load_config() -> Result<CoreConfig, Box<dyn std::error::Error>> {
    Ok(CoreConfig::from_env_values(
        std::env::var("MONGODB_URI").ok(),
        std::env::var("MONGODB_DB").ok(),
        std::env::var("POSITIONS_COLLECTION").ok(),
    )?)
}

/// Install the log subscriber. Events go to stderr, command output to stdout.
fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sluglabs=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;
    Ok(())
}

async fn connect() -> Result<PositionService, Box<dyn std::error::Error>> {
    let cfg = load_config()?;
    let store = MongoPositionStore::connect(&cfg).await?;
    Ok(PositionService::new(Arc::new(store)))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing()?;

    let cli = Cli::parse();

    let submissions = SubmissionService::new(Arc::new(InMemorySubmissionStore::seeded()));

    match cli.command {
        Some(Commands::Classify { text }) => {
            println!("{}", classify(&text.join(" ")));
        }
        Some(Commands::Positions { query }) => {
            let positions = connect().await?.list_summaries(query.as_deref()).await?;
            if positions.is_empty() {
                println!("No positions found.");
            } else {
                for position in positions {
                    println!(
                        "ID: {}, Title: {}, Subject: {}",
                        position.id, position.title, position.subject
                    );
                }
            }
        }
        Some(Commands::Position { id }) => match connect().await?.detail(&id).await {
            Ok(position) => println!("{}", serde_json::to_string_pretty(&position)?),
            Err(e) => eprintln!("Error reading position {}: {}", id, e),
        },
        Some(Commands::Ping) => match connect().await?.ping().await {
            Ok(()) => println!("ok"),
            Err(e) => eprintln!("Error pinging document store: {}", e),
        },
        Some(Commands::Submissions { status }) => {
            let filter = SubmissionFilter::from_params(status.as_deref(), None)?;
            for submission in submissions.list(&filter).await? {
                println!(
                    "ID: {}, Opportunity: {}, To: {}, Status: {}, Date: {}",
                    submission.id,
                    submission.opportunity_name,
                    submission.professor_or_employer_name,
                    submission.status,
                    submission.date.to_rfc3339()
                );
            }
        }
        Some(Commands::FollowUp { id }) => match submissions.follow_up(&id).await {
            Ok(email) => println!("Subject: {}\n\n{}", email.subject, email.body),
            Err(e) => eprintln!("Error generating follow-up for {}: {}", id, e),
        },
        None => {
            println!("Use 'sluglabs --help' for commands");
        }
    }

    Ok(())
}

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::DateTime;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Select};
use dotenvy::dotenv;
use prism_auth::{SessionState, decode_claims};
use prism_cli::credentials::{CredentialStore, Credentials};
use prism_cli::render;
use prism_cli::session::{ActiveSession, LOGIN_HINT, open_session};
use prism_client::{BackendClient, Tokens};
use prism_config::{BackendConfig, DashboardConfig, SessionConfig};
use prism_core::PageParams;
use prism_models::{AssignmentId, AssignmentPlot, CourseId, CoursePlot, SemesterId};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "prism-cli")]
#[command(about = "PRISM CLI - Review code similarity results from the terminal", long_about = None)]
struct Cli {
    /// Backend base URL (defaults to PRISM_BACKEND_URL)
    #[arg(long, global = true)]
    backend_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with a Google ID token
    Login {
        /// Google ID token (prompted if not provided)
        #[arg(long)]
        id_token: Option<String>,
    },
    /// Sign out and forget stored tokens
    Logout,
    /// Show the stored session
    Status,
    /// List your semesters
    Semesters,
    /// List your courses in a semester
    Courses {
        #[arg(short, long)]
        semester: SemesterId,
    },
    /// List assignments of a course
    Assignments {
        #[arg(short, long)]
        course: CourseId,
    },
    /// List students enrolled in a course
    Students {
        #[arg(short, long)]
        course: CourseId,
    },
    /// Similarity pairs of an assignment, highest first
    Pairs {
        #[arg(short, long)]
        assignment: AssignmentId,

        #[arg(long, default_value = "1")]
        page: u32,

        #[arg(long, default_value = "10")]
        page_size: u32,
    },
    /// Pairs at or above a similarity threshold
    Alerts {
        #[arg(short, long)]
        assignment: AssignmentId,

        /// Percentage 0-100 (defaults to ALERT_THRESHOLD)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=100))]
        threshold: Option<u8>,
    },
    /// Students you have flagged
    Flagged,
    /// Confirmed cheating cases
    Confirmed {
        #[arg(short, long)]
        assignment: Option<AssignmentId>,
    },
    /// Download a plot as PNG
    Plot {
        /// similarity, distribution, similarity-interval, kmeans-clusters or kmeans-pairs
        kind: String,

        /// Required for assignment plots
        #[arg(short, long)]
        assignment: Option<AssignmentId>,

        /// Required for k-means plots
        #[arg(short, long)]
        course: Option<CourseId>,

        /// Required for k-means plots
        #[arg(short, long)]
        semester: Option<SemesterId>,

        #[arg(short, long)]
        out: PathBuf,
    },
    /// Run the comparison pipeline for a course offering
    Analyze {
        #[arg(short, long)]
        course: CourseId,

        #[arg(short, long)]
        semester: SemesterId,
    },
    /// Pick semester, course and assignment interactively
    Browse,
}

struct App {
    client: BackendClient,
    store: CredentialStore,
    session_config: SessionConfig,
    dashboard_config: DashboardConfig,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("\n❌ {e:#}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let mut backend = BackendConfig::from_env();
    if let Some(url) = cli.backend_url {
        backend.base_url = url;
    }

    let app = App {
        client: BackendClient::new(&backend)?,
        store: CredentialStore::from_env()?,
        session_config: SessionConfig::from_env(),
        dashboard_config: DashboardConfig::from_env(),
    };

    let command = match cli.command {
        Commands::Login { id_token } => return handle_login(&app, id_token).await,
        Commands::Logout => return handle_logout(&app).await,
        Commands::Status => return handle_status(&app),
        other => other,
    };

    let active = open_session(&app.client, &app.store, &app.session_config).await?;
    let result = dispatch(&app, &active, command).await;
    active.persist(&app.store)?;
    result
}

async fn dispatch(app: &App, active: &ActiveSession, command: Commands) -> Result<()> {
    let client = &app.client;
    let session = &active.session;

    match command {
        Commands::Semesters => {
            let semesters = client.semesters(session, active.user.user_id).await?;
            println!("{}", render::semesters(&semesters));
        }
        Commands::Courses { semester } => {
            let courses = client.courses(session, active.user.user_id, semester).await?;
            println!("{}", render::courses(&courses));
        }
        Commands::Assignments { course } => {
            let assignments = client.assignments(session, course).await?;
            println!("{}", render::assignments(&assignments));
        }
        Commands::Students { course } => {
            let students = client.students(session, course).await?;
            println!("{}", render::students(&students));
        }
        Commands::Pairs {
            assignment,
            page,
            page_size,
        } => {
            let params = PageParams {
                page: Some(page),
                page_size: Some(page_size),
            };
            let pairs = client.similarity_pairs(session, assignment, &params).await?;
            println!("{}", render::pair_page(&pairs, params.page(), params.page_size()));
        }
        Commands::Alerts {
            assignment,
            threshold,
        } => {
            let threshold = threshold.unwrap_or(app.dashboard_config.alert_threshold);
            let alerts = client.alerts(session, assignment, threshold).await?;
            println!("{}", render::pairs(&alerts));
            println!("\n{} pairs at or above {threshold}%", alerts.len());
        }
        Commands::Flagged => {
            let flagged = client
                .flagged_students(session, active.user.professor_id)
                .await?;
            println!("{}", render::flagged(&flagged));
        }
        Commands::Confirmed { assignment } => {
            let confirmed = client.confirmed_cheaters(session, assignment).await?;
            println!("{}", render::confirmed(&confirmed));
        }
        Commands::Plot {
            kind,
            assignment,
            course,
            semester,
            out,
        } => handle_plot(client, active, &kind, assignment, course, semester, out).await?,
        Commands::Analyze { course, semester } => {
            println!("Running analysis, this can take a few minutes...");
            let run = client.run_pipeline(session, course, semester).await?;
            let took = run
                .duration_s
                .map(|s| format!(" in {s:.1}s"))
                .unwrap_or_default();
            if run.succeeded() {
                println!("✅ Analysis finished{took}");
            } else {
                bail!("analysis finished with status {:?}{took}", run.status);
            }
        }
        Commands::Browse => handle_browse(app, active).await?,
        Commands::Login { .. } | Commands::Logout | Commands::Status => {}
    }

    Ok(())
}

async fn handle_login(app: &App, id_token: Option<String>) -> Result<()> {
    let id_token = match id_token {
        Some(token) => token,
        None => Input::<String>::new()
            .with_prompt("Google ID token")
            .interact_text()
            .context("reading ID token")?,
    };

    let login = app.client.google_verify(id_token.trim()).await?;
    let tokens = Tokens {
        access: Some(login.access),
        refresh: Some(login.refresh),
    };
    app.store
        .save(&Credentials::new(tokens, Some(login.user.email.clone())))?;

    println!(
        "✅ Signed in as {} {} <{}>",
        login.user.first_name, login.user.last_name, login.user.email
    );
    println!("   Credentials: {}", app.store.path().display());
    Ok(())
}

async fn handle_logout(app: &App) -> Result<()> {
    if let Some(credentials) = app.store.load()? {
        if let Some(refresh) = credentials.refresh {
            if let Err(e) = app.client.logout(&refresh).await {
                warn!(error = %e, "backend logout failed, forgetting tokens anyway");
            }
        }
    }

    app.store.clear()?;
    println!("✅ Signed out");
    Ok(())
}

fn expiry(token: Option<&str>) -> String {
    token
        .and_then(|t| decode_claims(t).ok())
        .and_then(|claims| DateTime::from_timestamp(claims.exp, 0))
        .map(|at| at.to_rfc3339())
        .unwrap_or_else(|| "-".to_string())
}

fn handle_status(app: &App) -> Result<()> {
    let Some(credentials) = app.store.load()? else {
        println!("Not signed in; {LOGIN_HINT}");
        return Ok(());
    };

    let state = SessionState::classify_now(
        credentials.access.as_deref(),
        credentials.refresh.as_deref(),
        &app.session_config,
    );

    println!("Session:   {state}");
    if let Some(email) = &credentials.email {
        println!("Email:     {email}");
    }
    println!("Access:    expires {}", expiry(credentials.access.as_deref()));
    println!("Refresh:   expires {}", expiry(credentials.refresh.as_deref()));
    println!("Saved:     {}", credentials.saved_at.to_rfc3339());
    Ok(())
}

async fn handle_plot(
    client: &BackendClient,
    active: &ActiveSession,
    kind: &str,
    assignment: Option<AssignmentId>,
    course: Option<CourseId>,
    semester: Option<SemesterId>,
    out: PathBuf,
) -> Result<()> {
    let image = if let Ok(plot) = kind.parse::<AssignmentPlot>() {
        let Some(assignment) = assignment else {
            bail!("`{kind}` needs --assignment");
        };
        client.assignment_plot(&active.session, assignment, plot).await?
    } else if let Ok(plot) = kind.parse::<CoursePlot>() {
        let (Some(course), Some(semester)) = (course, semester) else {
            bail!("`{kind}` needs --course and --semester");
        };
        client
            .course_plot(&active.session, course, semester, plot)
            .await?
    } else {
        let known: Vec<&str> = AssignmentPlot::ALL
            .iter()
            .map(|p| p.as_str())
            .chain(CoursePlot::ALL.iter().map(|p| p.as_str()))
            .collect();
        bail!("unknown plot `{kind}`, expected one of: {}", known.join(", "));
    };

    std::fs::write(&out, &image.bytes).with_context(|| format!("writing {}", out.display()))?;
    println!("✅ Saved {} ({} bytes)", out.display(), image.bytes.len());
    Ok(())
}

fn pick(prompt: &str, labels: &[String]) -> Result<Option<usize>> {
    if labels.is_empty() {
        println!("Nothing to choose from.");
        return Ok(None);
    }

    Select::new()
        .with_prompt(prompt)
        .items(labels)
        .default(0)
        .interact_opt()
        .context("reading selection")
}

async fn handle_browse(app: &App, active: &ActiveSession) -> Result<()> {
    let client = &app.client;
    let session = &active.session;

    let semesters = client.semesters(session, active.user.user_id).await?;
    let labels: Vec<String> = semesters.iter().map(|s| s.name.clone()).collect();
    let Some(index) = pick("Semester", &labels)? else {
        return Ok(());
    };
    let semester = &semesters[index];

    let courses = client
        .courses(session, active.user.user_id, semester.id)
        .await?;
    let labels: Vec<String> = courses.iter().map(|c| c.display_name()).collect();
    let Some(index) = pick("Course", &labels)? else {
        return Ok(());
    };
    let course = &courses[index];

    let assignments = client.assignments(session, course.id).await?;
    let labels: Vec<String> = assignments.iter().map(|a| a.label()).collect();
    let Some(index) = pick("Assignment", &labels)? else {
        return Ok(());
    };
    let assignment = &assignments[index];

    let params = PageParams::default();
    let pairs = client
        .similarity_pairs(session, assignment.id, &params)
        .await?;
    println!("\n{} / {}\n", course.display_name(), assignment.label());
    println!("{}", render::pair_page(&pairs, params.page(), params.page_size()));

    let threshold = app.dashboard_config.alert_threshold;
    let alerts = client.alerts(session, assignment.id, threshold).await?;
    println!("\n{} pairs at or above {threshold}%", alerts.len());
    Ok(())
}

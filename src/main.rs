//! Folio - personal portfolio showcase
//!
//! A desktop portfolio with a scroll-spy landing page, a filterable project
//! gallery and a validated contact form that delivers through EmailJS.
//!
//! # Architecture
//!
//! - `core`: Project catalog, filter engine, contact validation and the
//!   submission state machine
//! - `app`: GUI application state and event handling
//! - `mailer`: EmailJS delivery behind the `Mailer` trait
//! - `config`: Read-only start-up configuration
//!
//! # Usage
//!
//! ```bash
//! # Run the GUI application
//! folio
//!
//! # CLI commands
//! folio projects                           # List the whole catalog
//! folio projects --category "Web App"      # Only one category
//! folio projects --tag React               # Only projects using React
//! folio stats                              # Catalog statistics
//! folio contact --name Ada --email ada@example.com \
//!     --subject Hello --message "I would like a website built."
//! ```

mod app;
mod config;
mod core;
mod mailer;
mod theme;
mod utils;

use crate::app::helpers::formatting::{filter_label, tech_list};
use crate::core::catalog::{CATALOG, validate_catalog};
use crate::core::contact::{Field, ProjectType};
use crate::core::error::{Error, Result};
use crate::core::filter::{CategoryFilter, GalleryState};
use crate::core::submission::{Completion, ContactSession, SubmitDecision};
use crate::mailer::{EmailJsMailer, Mailer};
use clap::{Parser, Subcommand};
use std::process::ExitCode;

const ABOUT_WIDTH: usize = 72;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Personal portfolio with project gallery and contact form", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog projects, optionally filtered
    Projects {
        /// Category to show (All, "Web App", UI, Game)
        #[arg(short, long, default_value = "All")]
        category: CategoryFilter,
        /// Only projects that use this exact technology
        #[arg(short, long)]
        tag: Option<String>,
    },
    /// Show catalog statistics
    Stats,
    /// Validate and send a contact message
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// Kind of project (Website, UI/UX, API, Other)
        #[arg(long = "type", default_value = "Website")]
        project_type: ProjectType,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(command) = cli.command {
        tracing_subscriber::fmt().with_writer(std::io::stderr).init();

        // Create Tokio runtime only for CLI commands
        let runtime = match tokio::runtime::Runtime::new() {
            Ok(runtime) => runtime,
            Err(e) => {
                eprintln!("Error: failed to create Tokio runtime: {e}");
                return ExitCode::FAILURE;
            }
        };
        match runtime.block_on(handle_cli(command)) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        }
    } else {
        // GUI runs in normal sync context (Iced has its own async runtime)
        launch_gui()
    }
}

async fn handle_cli(command: Commands) -> Result<()> {
    match command {
        Commands::Projects { category, tag } => {
            validate_catalog(CATALOG)?;
            let mut gallery = GalleryState::new(CATALOG);
            gallery.select_category(category);
            if let Some(tag) = tag {
                gallery.select_tag(tag);
            }

            let visible = gallery.visible();
            if visible.is_empty() {
                println!("No projects found.");
            }
            for project in &visible {
                let marker = if project.featured { "*" } else { " " };
                println!(
                    "{marker} {} [{} | {}]",
                    project.title, project.category, project.status
                );
                println!("    {}", utils::truncate_string(project.about, ABOUT_WIDTH));
                println!("    {}", tech_list(project.tech));
            }

            println!();
            let labels: Vec<String> = gallery
                .counts()
                .iter()
                .map(|&(filter, count)| filter_label(filter, count))
                .collect();
            println!("Categories: {}", labels.join("  "));
        }
        Commands::Stats => {
            validate_catalog(CATALOG)?;
            let stats = GalleryState::new(CATALOG).stats();
            println!("Total projects: {}", stats.total);
            println!("Live:           {}", stats.live);
            println!("Technologies:   {}", stats.technologies);
            println!("Featured:       {}", stats.featured);
        }
        Commands::Contact {
            name,
            email,
            project_type,
            subject,
            message,
        } => {
            let mut session = ContactSession::default();
            session.form.set(Field::Name, name);
            session.form.set(Field::Email, email);
            session.form.set(Field::Subject, subject);
            session.form.set(Field::Message, message);
            session.form.project_type = project_type;

            let payload = match session.submit() {
                SubmitDecision::Send(payload) => payload,
                SubmitDecision::Blocked(errors) => {
                    for (field, error) in &errors {
                        eprintln!("  {field}: {error}");
                    }
                    return Err(Error::InvalidForm(errors.len()));
                }
                SubmitDecision::Ignored => {
                    tracing::warn!("Submission already in flight, nothing sent");
                    return Ok(());
                }
            };

            let config = config::load_config().await;
            let mailer = EmailJsMailer::from_config(&config.emailjs);
            let outcome = mailer.send(&payload).await;
            match session.complete(outcome) {
                Completion::Delivered(_) => println!("✓ Message sent."),
                Completion::Failed(err) => {
                    eprintln!("{}", err.user_message());
                    return Err(err.into());
                }
                Completion::Unexpected => {
                    tracing::warn!("Send completion arrived with no submission in flight");
                }
            }
        }
    }
    Ok(())
}

fn launch_gui() -> ExitCode {
    if let Err(e) = utils::ensure_state_dir() {
        eprintln!("Warning: could not create state directory: {e}");
    }

    // Set up logging to file
    if let Some(mut log_path) = utils::get_state_dir() {
        log_path.push("folio.log");
        if let Ok(file) = std::fs::File::create(log_path) {
            tracing_subscriber::fmt().with_writer(file).init();
        } else {
            tracing_subscriber::fmt::init();
        }
    } else {
        tracing_subscriber::fmt::init();
    }

    // Config is read once before the window opens
    let config = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime.block_on(config::load_config()),
        Err(e) => {
            tracing::warn!("No runtime for config loading, using defaults: {e}");
            config::AppConfig::default()
        }
    };

    let result = iced::application(
        move || app::State::new(config.clone()),
        app::State::update,
        app::State::view,
    )
    .subscription(app::State::subscription)
    .window(iced::window::Settings {
        size: app::WINDOW_SIZE,
        ..Default::default()
    })
    .title("Deepak Joshi | Portfolio")
    .theme(|state: &app::State| state.theme_mode.to_iced())
    .run();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

//! Riskcheck: Vendor Risk Assessment CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use riskcheck::answers::{load_answers, prompt_answers};
use riskcheck::assessment::{assess, Advisor};
use riskcheck::config::{load_config, Config, CONFIG_FILENAME};
use riskcheck::questions::{load_questions, QuestionSet, DEFAULT_QUESTIONS_FILENAME, SAMPLE_QUESTIONS};
use riskcheck::reporter::{check_renderable, ConsoleReporter, HtmlReporter, JsonReporter};
use riskcheck::{logging, AssessmentError, RiskTier};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Riskcheck: Vendor Risk Assessment Questionnaire
#[derive(Parser, Debug)]
#[command(name = "riskcheck")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Questions file or URL (default: config "questions", else ./questions.json)
    questions: Option<String>,

    /// Answers file: JSON array or object of option indices (default: ask interactively)
    #[arg(long, short)]
    answers: Option<PathBuf>,

    /// Output format as JSON
    #[arg(long, short)]
    json: bool,

    /// Also write an HTML result page to this file
    #[arg(long, value_name = "FILE")]
    html: Option<PathBuf>,

    /// Exit 1 when the overall tier is at or above this tier (low, medium, high)
    #[arg(long, value_name = "TIER")]
    fail_on: Option<RiskTier>,

    /// Quiet mode (minimal output)
    #[arg(long, short)]
    quiet: bool,

    /// Verbose output
    #[arg(long, short)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Path to config file (default: search .riskcheckrc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the questionnaire as an HTML form (or a text listing)
    Form {
        /// Questions file or URL
        questions: Option<String>,

        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Plain text listing instead of HTML
        #[arg(long, conflicts_with = "json")]
        text: bool,

        /// The validated questionnaire as JSON instead of HTML
        #[arg(long, short)]
        json: bool,

        /// Path to config file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create .riskcheckrc.json and a starter questions.json
    Init {
        /// Default tier that fails the run (low, medium, high)
        #[arg(long, value_name = "TIER")]
        fail_on: Option<RiskTier>,

        /// Directory in which to create the files (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }
    logging::init(args.verbose, !args.no_color)?;

    if let Some(cmd) = args.command {
        return match cmd {
            Commands::Form {
                questions,
                output,
                text,
                json,
                config,
            } => run_form(
                questions.as_deref(),
                output.as_deref(),
                FormFormat::from_flags(text, json),
                config.as_deref(),
            ),
            Commands::Init { fail_on, dir } => run_init(fail_on, dir.as_deref()),
        };
    }

    let work_dir = std::env::current_dir().context("Failed to get current directory")?;
    let config = load_config(&work_dir, args.config.as_deref())?
        .merge_with_cli(args.questions.as_deref(), args.fail_on);
    let questions = load_question_set(&config, &work_dir)?;
    check_renderable(&questions)?;

    let answers = match args.answers {
        Some(ref path) => load_answers(path, &questions)?,
        None => {
            let stdin = std::io::stdin();
            prompt_answers(&questions, stdin.lock(), std::io::stderr())
                .context("Failed to read answers")?
        }
    };

    let advisor = Advisor::new().with_overrides(config.advice.clone());
    let assessment = match assess(&questions, &answers, &advisor) {
        Ok(assessment) => assessment,
        Err(AssessmentError::IncompleteAnswers { missing }) => {
            let listed: Vec<String> = missing.iter().map(|i| (i + 1).to_string()).collect();
            eprintln!(
                "{}: Please answer all questions (unanswered: {})",
                "Warning".yellow(),
                listed.join(", ")
            );
            return Ok(ExitCode::from(2));
        }
        Err(e) => return Err(e.into()),
    };

    if args.json {
        println!("{}", JsonReporter::new().pretty().report(&assessment));
    } else {
        let mut reporter = ConsoleReporter::new();
        if args.no_color {
            reporter = reporter.without_colors();
        }
        if args.verbose {
            reporter = reporter.verbose();
        }
        if args.quiet {
            reporter.report_quiet(&assessment);
        } else {
            reporter.report(&assessment);
        }
    }

    if let Some(ref html_path) = args.html {
        std::fs::write(html_path, HtmlReporter::new().report(&assessment))
            .with_context(|| format!("Failed to write HTML report to {}", html_path.display()))?;
        if !args.quiet {
            eprintln!("{}: HTML report written to {}", "Info".blue(), html_path.display());
        }
    }

    if config.fails(assessment.tier) {
        if !args.quiet && !args.json {
            eprintln!(
                "\n{}: Risk level {} is at or above {}",
                "Failed".red().bold(),
                assessment.tier,
                config.fail_on.map(|t| t.to_string()).unwrap_or_default()
            );
        }
        return Ok(ExitCode::from(1));
    }

    Ok(ExitCode::SUCCESS)
}

fn load_question_set(config: &Config, work_dir: &Path) -> Result<QuestionSet> {
    let source = config.question_source(work_dir);
    Ok(load_questions(&source)?)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormFormat {
    Html,
    Text,
    Json,
}

impl FormFormat {
    fn from_flags(text: bool, json: bool) -> Self {
        if json {
            FormFormat::Json
        } else if text {
            FormFormat::Text
        } else {
            FormFormat::Html
        }
    }
}

fn run_form(
    questions: Option<&str>,
    output: Option<&Path>,
    format: FormFormat,
    config_path: Option<&Path>,
) -> Result<ExitCode> {
    let work_dir = std::env::current_dir().context("Failed to get current directory")?;
    let config = load_config(&work_dir, config_path)?.merge_with_cli(questions, None);
    let questions = load_question_set(&config, &work_dir)?;
    check_renderable(&questions)?;

    let Some(path) = output else {
        match format {
            FormFormat::Text => {
                let mut reporter = ConsoleReporter::new();
                if !std::io::stdout().is_terminal() {
                    reporter = reporter.without_colors();
                }
                reporter.report_questions(&questions)
            }
            FormFormat::Json => println!("{}", JsonReporter::new().pretty().report_questions(&questions)),
            FormFormat::Html => print!("{}", HtmlReporter::new().render_form(&questions)?),
        }
        return Ok(ExitCode::SUCCESS);
    };

    let rendered = match format {
        FormFormat::Text => ConsoleReporter::new().without_colors().render_questions(&questions),
        FormFormat::Json => JsonReporter::new().pretty().report_questions(&questions),
        FormFormat::Html => HtmlReporter::new().render_form(&questions)?,
    };
    std::fs::write(path, rendered)
        .with_context(|| format!("Failed to write form to {}", path.display()))?;
    eprintln!("{}: Form written to {}", "Info".blue(), path.display());
    Ok(ExitCode::SUCCESS)
}

fn run_init(fail_on: Option<RiskTier>, dir: Option<&Path>) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = dir.unwrap_or(&cwd);
    let config_path = dir.join(CONFIG_FILENAME);
    let questions_path = dir.join(DEFAULT_QUESTIONS_FILENAME);

    if config_path.exists() {
        eprintln!(
            "{}: {} already exists; use --dir to write elsewhere or remove it first",
            "Warning".yellow(),
            config_path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    let fail_on = fail_on.unwrap_or(RiskTier::High);
    let json = format!(
        r#"{{
  "questions": "{}",
  "failOn": "{}",
  "advice": {{}}
}}
"#,
        DEFAULT_QUESTIONS_FILENAME,
        fail_on.as_str()
    );
    std::fs::write(&config_path, json)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    if questions_path.exists() {
        eprintln!(
            "{}: keeping existing {}",
            "Info".blue(),
            questions_path.display()
        );
    } else {
        std::fs::write(&questions_path, SAMPLE_QUESTIONS).with_context(|| {
            format!("Failed to write questions to {}", questions_path.display())
        })?;
    }

    println!(
        "{}: Created {} with failOn={}",
        "Done".green().bold(),
        config_path.display(),
        fail_on.as_str()
    );
    Ok(ExitCode::SUCCESS)
}

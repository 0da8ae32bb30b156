use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["brightrank"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_onboard_with_competitors() {
    let cli = Cli::try_parse_from([
        "brightrank",
        "onboard",
        "--brand",
        "Acme",
        "--keywords",
        "tea, coffee",
        "--competitor",
        "Rival=60",
        "--competitor",
        "Other Co = 45",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::App(AppCommands::Onboard {
            brand: Some(ref b),
            ref keywords,
            ref competitors,
            from: None,
        })) if b == "Acme"
            && keywords == "tea, coffee"
            && competitors == &vec![("Rival".to_string(), 60), ("Other Co".to_string(), 45)]
    ));
}

#[test]
fn onboard_requires_brand_or_file() {
    assert!(Cli::try_parse_from(["brightrank", "onboard"]).is_err());
    let cli = Cli::try_parse_from(["brightrank", "onboard", "--from", "brand.yaml"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::App(AppCommands::Onboard { brand: None, from: Some(_), .. }))
    ));
}

#[test]
fn onboard_file_conflicts_with_brand_flag() {
    let result = Cli::try_parse_from([
        "brightrank",
        "onboard",
        "--from",
        "brand.yaml",
        "--brand",
        "Acme",
    ]);
    assert!(result.is_err());
}

#[test]
fn competitor_flag_requires_name_and_score() {
    assert!(parse_competitor("Rival").is_err());
    assert!(parse_competitor("Rival=high").is_err());
    assert_eq!(parse_competitor("A=B=7"), Ok(("A=B".to_string(), 7)));
}

#[test]
fn analyze_defaults_to_last_seven_days() {
    let cli = Cli::try_parse_from(["brightrank", "analyze"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::App(AppCommands::Analyze {
            date_range: DateRange::Last7Days
        }))
    ));
}

#[test]
fn analyze_accepts_labels_and_short_forms() {
    let cli =
        Cli::try_parse_from(["brightrank", "analyze", "--date-range", "Last 3 Months"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::App(AppCommands::Analyze {
            date_range: DateRange::Last3Months
        }))
    ));

    let cli = Cli::try_parse_from(["brightrank", "analyze", "--date-range", "month"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::App(AppCommands::Analyze {
            date_range: DateRange::ThisMonth
        }))
    ));
}

#[test]
fn analyze_rejects_unknown_range() {
    assert!(Cli::try_parse_from(["brightrank", "analyze", "--date-range", "fortnight"]).is_err());
}

#[test]
fn parses_keyword_subcommands() {
    let cli = Cli::try_parse_from(["brightrank", "keywords", "add", "green tea"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::App(AppCommands::Keywords {
            command: KeywordCommands::Add { ref keyword }
        })) if keyword == "green tea"
    ));

    let cli = Cli::try_parse_from(["brightrank", "keywords", "analyze"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::App(AppCommands::Keywords {
            command: KeywordCommands::Analyze
        }))
    ));
}

#[test]
fn competitor_add_defaults_score() {
    let cli = Cli::try_parse_from(["brightrank", "competitors", "add", "Rival"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::App(AppCommands::Competitors {
            command: CompetitorCommands::Add { ref name, score: 50 }
        })) if name == "Rival"
    ));
}

#[test]
fn parses_report_create_and_export() {
    let cli = Cli::try_parse_from(["brightrank", "report", "create", "--title", "Q3"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::App(AppCommands::Report {
            command: ReportCommands::Create {
                ref title,
                date_range: DateRange::Last30Days
            }
        })) if title == "Q3"
    ));

    let cli = Cli::try_parse_from([
        "brightrank",
        "report",
        "export",
        "rep_1",
        "--output",
        "out.csv",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::App(AppCommands::Report {
            command: ReportCommands::Export { ref id, output: Some(_) }
        })) if id == "rep_1"
    ));
}

#[test]
fn parses_extract_file() {
    let cli = Cli::try_parse_from(["brightrank", "extract", "reply.md"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Extract { ref file }) if file.as_os_str() == "reply.md"
    ));
}

#[test]
fn profile_from_flags_collapses_duplicate_keywords() {
    let profile = profile::profile_from_flags("Acme", "tea, tea, coffee", &[]).unwrap();
    assert_eq!(profile.keyword_list(), vec!["tea", "coffee"]);
}

#[test]
fn profile_from_flags_validates_competitor_score() {
    let err = profile::profile_from_flags("Acme", "tea", &[("Rival".to_string(), 101)])
        .unwrap_err();
    assert_eq!(err, brightrank_core::ProfileError::ScoreOutOfRange(101));
}

#[test]
fn extract_command_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reply.md");
    std::fs::write(&path, "## Overall Score\n64\n").unwrap();
    assert!(dashboard::run_extract(&path).is_ok());

    std::fs::write(&path, "no score here").unwrap();
    assert!(dashboard::run_extract(&path).is_err());
}

#[tokio::test]
async fn extract_ignores_broken_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reply.md");
    std::fs::write(&path, "## Overall Score\n64\n").unwrap();
    let cli = Cli::try_parse_from(["brightrank", "extract", path.to_str().unwrap()]).unwrap();

    let result = run(cli, || {
        Err(ConfigError::MissingEnvVar("GEMINI_API_KEY".to_string()))
    })
    .await;
    assert!(result.is_ok(), "extract must not load config: {result:?}");
}

#[tokio::test]
async fn app_commands_report_config_errors() {
    let cli = Cli::try_parse_from(["brightrank", "profile"]).unwrap();
    let err = run(cli, || {
        Err(ConfigError::InvalidEnvVar {
            var: "BRIGHTRANK_ENV".to_string(),
            reason: "expected development, test or production".to_string(),
        })
    })
    .await
    .unwrap_err();
    assert!(err.to_string().contains("BRIGHTRANK_ENV"), "got: {err}");
}

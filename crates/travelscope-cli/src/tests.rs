use super::*;

#[test]
fn parses_advisory_command() {
    let cli = Cli::try_parse_from(["travelscope-cli", "advisory", "south-korea"])
        .expect("expected valid cli args");

    assert!(!cli.compact);
    assert!(matches!(
        cli.command,
        Commands::Advisory { ref slug } if slug == "south-korea"
    ));
}

#[test]
fn parses_health_command_with_compact_flag() {
    let cli = Cli::try_parse_from(["travelscope-cli", "health", "myanmar", "--compact"])
        .expect("expected valid cli args");

    assert!(cli.compact);
    assert!(matches!(
        cli.command,
        Commands::Health { ref slug } if slug == "myanmar"
    ));
}

#[test]
fn missing_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["travelscope-cli"]).is_err());
}

#[test]
fn advisory_requires_slug() {
    assert!(Cli::try_parse_from(["travelscope-cli", "advisory"]).is_err());
}

#[test]
fn spelling_report_lists_publisher_spelling_and_variations() {
    let report = SpellingReport::for_slug("south-korea");
    assert_eq!(report.publisher_spelling, "KoreaSouth");
    assert_eq!(report.variations.first().map(String::as_str), Some("south-korea"));

    let json = serde_json::to_value(&report).expect("serialize");
    assert_eq!(json["publisherSpelling"], "KoreaSouth");
    assert!(json["variations"].is_array());
}

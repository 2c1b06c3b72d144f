use super::*;
use paintshop::SearchOrder;
use paintshop_test::scenarios;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("paintshop").chain(args.iter().copied()))
        .expect("arguments should parse")
}

#[test]
fn defaults_read_stdin() {
    let cli = parse(&[]);
    assert_eq!(cli.input, PathBuf::from("-"));
    assert!(cli.config.is_none());
    assert_eq!(cli.verbose, 0);
}

#[test]
fn verbose_is_counted() {
    assert_eq!(parse(&["-vv"]).verbose, 2);
}

#[test]
fn zero_candidate_limit_is_rejected() {
    let result = Cli::try_parse_from(["paintshop", "--candidate-limit", "0"]);
    assert!(result.is_err(), "a zero limit can never evaluate a candidate");
}

#[test]
fn zero_time_limit_is_rejected() {
    let result = Cli::try_parse_from(["paintshop", "--time-limit", "0"]);
    assert!(result.is_err(), "a zero time limit would silently mean no limit");
    assert_eq!(parse(&["--time-limit", "1"]).time_limit, Some(1));
}

#[test]
fn zero_time_limit_in_config_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let path = dir.path().join("paintshop.toml");
    fs::write(&path, "[termination]\nseconds_spent_limit = 0\n").expect("write should succeed");

    let cli = parse(&["--config", path.to_str().expect("utf-8 path")]);
    assert!(matches!(resolve_config(&cli), Err(PaintShopError::Config(_))));
}

#[test]
fn run_answers_every_scenario_from_file() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    for scenario in scenarios() {
        let path = dir.path().join(format!("{}.json", scenario.name));
        fs::write(&path, scenario.json()).expect("write should succeed");

        let cli = parse(&["--input", path.to_str().expect("utf-8 path")]);
        let answer = run(&cli).expect("request should decode");
        assert_eq!(answer.to_string(), scenario.expected, "scenario {}", scenario.name);
    }
}

#[test]
fn run_reports_decode_errors() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let path = dir.path().join("broken.json");
    fs::write(&path, "{\"colors\": 1").expect("write should succeed");

    let cli = parse(&["--input", path.to_str().expect("utf-8 path")]);
    assert!(matches!(run(&cli), Err(PaintShopError::Decode(_))));
}

#[test]
fn run_reports_missing_input() {
    let cli = parse(&["--input", "/nonexistent/request.json"]);
    assert!(matches!(run(&cli), Err(PaintShopError::Io(_))));
}

#[test]
fn command_line_limits_override_config_file() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let path = dir.path().join("solver.yaml");
    fs::write(
        &path,
        "search_order: lexicographic\ntermination:\n  candidate_count_limit: 10\n",
    )
    .expect("write should succeed");

    let cli = parse(&[
        "--config",
        path.to_str().expect("utf-8 path"),
        "--candidate-limit",
        "3",
        "--time-limit",
        "5",
    ]);
    let config = resolve_config(&cli).expect("config should load");
    assert_eq!(config.search_order, SearchOrder::Lexicographic);
    assert_eq!(config.candidate_count_limit(), Some(3));
    assert_eq!(config.time_limit(), Some(std::time::Duration::from_secs(5)));
}

#[test]
fn candidate_limit_can_leave_answer_undecided() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let path = dir.path().join("all_matte.json");
    let request = paintshop_test::scenario::scenario("all_matte");
    fs::write(&path, request.json()).expect("write should succeed");

    let cli = parse(&[
        "--input",
        path.to_str().expect("utf-8 path"),
        "--candidate-limit",
        "1",
    ]);
    assert_eq!(run(&cli).expect("request should decode"), Answer::Undecided);
}

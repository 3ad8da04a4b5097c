use clap::Parser;
use lorem::Args;
use lorem::cli::{DEFAULT_EFFORT, DEFAULT_MODEL, DEFAULT_VERBOSITY};

#[test]
fn test_defaults() {
    let args = Args::try_parse_from(["lorem", "hello", "world"]).unwrap();

    assert_eq!(args.model, DEFAULT_MODEL);
    assert_eq!(args.model, "gpt-5-mini");
    assert_eq!(args.effort, DEFAULT_EFFORT);
    assert_eq!(args.effort, "minimal");
    assert_eq!(args.verbosity, DEFAULT_VERBOSITY);
    assert_eq!(args.verbosity, "low");
    assert_eq!(args.verbose, 0);
    assert_eq!(args.prompt, vec!["hello", "world"]);
}

#[test]
fn test_flags_override_defaults() {
    let args = Args::try_parse_from([
        "lorem",
        "--model",
        "gpt-5",
        "--effort",
        "high",
        "--verbosity",
        "medium",
        "-vv",
        "explain",
        "lifetimes",
    ])
    .unwrap();

    assert_eq!(args.model, "gpt-5");
    assert_eq!(args.effort, "high");
    assert_eq!(args.verbosity, "medium");
    assert_eq!(args.verbose, 2);
    assert_eq!(args.prompt, vec!["explain", "lifetimes"]);
}

#[test]
fn test_levels_are_not_validated_locally() {
    let args = Args::try_parse_from(["lorem", "--effort", "turbo", "--verbosity", "loud", "hi"])
        .unwrap();

    let json = serde_json::to_value(args.request("hi")).unwrap();
    assert_eq!(json["reasoning"]["effort"], "turbo");
    assert_eq!(json["text"]["verbosity"], "loud");
}

#[test]
fn test_prompt_is_optional() {
    let args = Args::try_parse_from(["lorem"]).unwrap();
    assert!(args.prompt.is_empty());
}

#[test]
fn test_request_uses_resolved_prompt() {
    let args = Args::try_parse_from(["lorem", "--model", "gpt-5-nano", "ignored"]).unwrap();
    let request = args.request("the real prompt");

    assert_eq!(request.model, "gpt-5-nano");
    assert_eq!(request.input, "the real prompt");
    assert_eq!(request.text.verbosity, "low");
    assert_eq!(request.reasoning.effort, "minimal");
}

#[test]
fn test_unknown_flag_is_a_usage_error() {
    let err = Args::try_parse_from(["lorem", "--temperature", "0.2", "hi"]).unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

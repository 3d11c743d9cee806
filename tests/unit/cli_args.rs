fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn no_arguments_means_settings_decide() {
    assert_eq!(super::parse_args(args(&[])).unwrap(), super::CliArgs::default());
}

#[test]
fn flags_accept_separate_and_inline_values() {
    let parsed = super::parse_args(args(&[
        "--mode",
        "identity",
        "--columns=3",
        "--settings",
        "/tmp/s.json",
    ]))
    .unwrap();
    assert_eq!(parsed.mode, Some(chiplist::kernel::BoardMode::Identity));
    assert_eq!(parsed.columns, Some(3));
    assert_eq!(parsed.settings, Some(std::path::PathBuf::from("/tmp/s.json")));
    assert!(!parsed.help);
}

#[test]
fn bad_input_is_rejected() {
    assert!(super::parse_args(args(&["--verbose"])).is_err());
    assert!(super::parse_args(args(&["--mode", "grid"])).is_err());
    assert!(super::parse_args(args(&["--columns", "0"])).is_err());
    assert!(super::parse_args(args(&["--columns"])).is_err());
}

#[test]
fn help_flag_is_recognized() {
    assert!(super::parse_args(args(&["-h"])).unwrap().help);
}

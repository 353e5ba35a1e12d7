//! Tests for command-line configuration
use std::path::PathBuf;

use clap::Parser;
use elmer_sif_language_server::config::{Args, CheckArgs, Config, OutputFormat};

#[test]
fn test_server_args() {
    let args = Args::parse_from(["sif-ls", "--keywords", "extra.json", "--log-level", "debug"]);
    let config = Config::from_args(args).expect("create config");

    assert_eq!(config.keyword_files, vec![PathBuf::from("extra.json")]);
    assert_eq!(config.log_level, "debug");
}

#[test]
fn test_user_dictionary_locations() {
    let config = Config::from_args(Args::parse_from(["sif-ls"])).expect("create config");

    if let Some(config_dir) = dirs::config_dir() {
        let dir = config_dir.join("sif-ls");
        assert_eq!(
            config.user_keyword_files,
            vec![dir.join("keywords.json"), dir.join("keywords.toml")]
        );
    } else {
        assert!(config.user_keyword_files.is_empty());
    }
}

#[test]
fn test_check_args_defaults() {
    let args = CheckArgs::parse_from(["sif-check", "a.sif", "b.sif"]);
    assert_eq!(args.format, OutputFormat::Text);
    assert_eq!(args.files.len(), 2);
    assert_eq!(args.common.log_level, "info");
}

#[test]
fn test_unknown_format_is_rejected() {
    assert!(CheckArgs::try_parse_from(["sif-check", "--format", "xml", "a.sif"]).is_err());
}

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn inline_pattern_with_defaults() {
    let settings = Settings::from_args(&["--pattern=x01 xFE"], None).unwrap();
    assert_eq!(
        settings,
        Settings {
            source: PatternSource::Text("x01 xFE".to_owned()),
            input: InputKind::AsyncSerial,
            frames: None,
        }
    );
    assert_eq!(settings.source.name(), "<pattern>");
    assert_eq!(settings.source.load().unwrap(), "x01 xFE");
}

#[test]
fn file_pattern_input_and_frames() {
    let settings = Settings::from_args(
        &["--pattern-file=cmds.sift", "--input=SPI (use MISO)", "capture.jsonl"],
        None,
    )
    .unwrap();
    assert_eq!(settings.source, PatternSource::File(PathBuf::from("cmds.sift")));
    assert_eq!(settings.source.name(), "cmds.sift");
    assert_eq!(settings.input, InputKind::SpiMiso);
    assert_eq!(settings.frames, Some(PathBuf::from("capture.jsonl")));
}

#[test]
fn dash_reads_stdin() {
    let settings = Settings::from_args(&["-", "--pattern=."], None).unwrap();
    assert_eq!(settings.frames, None);
}

#[test]
fn environment_input_is_a_fallback() {
    let from_env = Settings::from_args(&["--pattern=."], Some("spi-mosi")).unwrap();
    assert_eq!(from_env.input, InputKind::SpiMosi);

    let explicit = Settings::from_args(&["--pattern=.", "--input=serial"], Some("spi-mosi")).unwrap();
    assert_eq!(explicit.input, InputKind::AsyncSerial);
}

#[test]
fn errors() {
    assert_eq!(
        Settings::from_args::<&str>(&[], None).unwrap_err(),
        SettingsError::MissingPattern
    );
    assert_eq!(
        Settings::from_args(&["--pattern=.", "--pattern-file=a"], None).unwrap_err(),
        SettingsError::ConflictingPattern
    );
    assert_eq!(
        Settings::from_args(&["--pattern=.", "--verbose"], None).unwrap_err(),
        SettingsError::UnknownOption("--verbose".to_owned())
    );
    assert_eq!(
        Settings::from_args(&["--pattern=.", "a.jsonl", "b.jsonl"], None).unwrap_err(),
        SettingsError::UnexpectedArgument("b.jsonl".to_owned())
    );
    assert_eq!(
        Settings::from_args(&["--pattern=.", "--input=uart"], None).unwrap_err(),
        SettingsError::Input(ExtractError::UnknownInputKind {
            name: "uart".to_owned()
        })
    );
    assert!(matches!(
        Settings::from_args(&["--pattern=."], Some("bogus")),
        Err(SettingsError::Input(_))
    ));
}

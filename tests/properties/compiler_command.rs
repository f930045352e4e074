//! Property tests for compiler and server command lines.

use proptest::prelude::*;

use wasmdist::{BuildMode, DeployLayout, ExternalCommand};

fn token() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_./-]{1,16}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `--release` appears in the compiler command iff release mode was asked for.
    #[test]
    fn property_release_flag_iff_release(
        tool in token(),
        target in token(),
        release in any::<bool>(),
    ) {
        prop_assume!(target != "--release");
        let cmd = ExternalCommand::compiler(&tool, &target, BuildMode::from_release_flag(release));

        prop_assert_eq!(cmd.program(), tool.as_str());
        prop_assert_eq!(&cmd.arguments()[..3], &["build".to_string(), "--target".to_string(), target.clone()][..]);
        prop_assert_eq!(cmd.has_arg("--release"), release);
        prop_assert_eq!(cmd.arguments().len(), if release { 4 } else { 3 });
    }

    /// PROPERTY: the serve port is always the last argument, after the configured line.
    #[test]
    fn property_file_server_appends_port_last(
        line in proptest::collection::vec(token(), 1..=5),
        port in any::<u16>(),
    ) {
        let cmd = ExternalCommand::file_server(&line, port).expect("non-empty line");

        prop_assert_eq!(cmd.program(), line[0].as_str());
        prop_assert_eq!(cmd.arguments().len(), line.len());
        prop_assert_eq!(cmd.arguments().last().cloned(), Some(port.to_string()));
        prop_assert_eq!(&cmd.arguments()[..line.len() - 1], &line[1..]);
    }

    /// PROPERTY: layout parsing never panics and accepts exactly the two layout names.
    #[test]
    fn property_layout_parse_never_panics(value in "(?s).{0,32}") {
        let parsed = DeployLayout::parse(&value);
        if let Some(layout) = parsed {
            prop_assert_eq!(DeployLayout::parse(layout.as_str()), Some(layout));
        }
    }
}

#[test]
fn empty_server_line_has_no_command() {
    assert!(ExternalCommand::file_server(&[], 8000).is_none());
}

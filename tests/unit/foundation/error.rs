use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        WavifyError::configuration("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(
        WavifyError::integration("x")
            .to_string()
            .contains("integration error:")
    );
    assert!(
        WavifyError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn kind_predicates_match_variants() {
    assert!(WavifyError::configuration("bones").is_configuration());
    assert!(!WavifyError::configuration("bones").is_integration());
    assert!(WavifyError::integration("c-wave-0").is_integration());
}

#[test]
fn serde_json_errors_convert() {
    let err: WavifyError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, WavifyError::Serde(_)));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = WavifyError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

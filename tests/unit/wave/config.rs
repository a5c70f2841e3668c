use super::*;

#[test]
fn defaults_match_documented_values() {
    let cfg = WaveConfig::default();
    assert_eq!(cfg.container, "body");
    assert_eq!(cfg.height, 94.0);
    assert_eq!(cfg.amplitude, 100.0);
    assert_eq!(cfg.speed, 0.15);
    assert_eq!(cfg.bones, 3);
    assert_eq!(cfg.color, DEFAULT_COLOR);
    cfg.validate().unwrap();
}

#[test]
fn validation_rejects_degenerate_settings() {
    let zero_bones = WaveConfig {
        bones: 0,
        ..WaveConfig::default()
    };
    assert!(zero_bones.validate().unwrap_err().is_configuration());

    for speed in [0.0, -0.5, f64::NAN, f64::INFINITY] {
        let cfg = WaveConfig {
            speed,
            ..WaveConfig::default()
        };
        assert!(cfg.validate().unwrap_err().is_configuration(), "{speed}");
    }

    let cfg = WaveConfig {
        amplitude: f64::NAN,
        ..WaveConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn merge_keeps_unset_fields() {
    let cfg = WaveConfig::new("#app");
    let merged = cfg
        .merged(&WaveOverrides::default().color("#fff").bones(5))
        .unwrap();
    assert_eq!(merged.color, "#fff");
    assert_eq!(merged.bones, 5);
    assert_eq!(merged.container, "#app");
    assert_eq!(merged.speed, cfg.speed);
}

#[test]
fn merge_accepts_same_container_and_rejects_a_new_one() {
    let cfg = WaveConfig::new("#app");
    assert!(
        cfg.merged(&WaveOverrides::default().container("#app"))
            .is_ok()
    );

    let err = cfg
        .merged(&WaveOverrides::default().container("#other"))
        .unwrap_err();
    assert!(err.is_configuration());
    assert_eq!(cfg.container, "#app");
}

#[test]
fn merge_validates_the_result() {
    let cfg = WaveConfig::new("#app");
    assert!(cfg.merged(&WaveOverrides::default().bones(0)).is_err());
    assert!(cfg.merged(&WaveOverrides::default().speed(0.0)).is_err());
}

#[test]
fn from_overrides_prefers_explicit_container() {
    let cfg = WaveConfig::from_overrides(&WaveOverrides::default().height(440.0), "#app").unwrap();
    assert_eq!(cfg.container, "#app");
    assert_eq!(cfg.height, 440.0);

    let cfg =
        WaveConfig::from_overrides(&WaveOverrides::default().container("#hero"), "#app").unwrap();
    assert_eq!(cfg.container, "#hero");
}

#[test]
fn batch_json_accepts_waves_setup_alias() {
    let json = r##"{
        "container": "#app",
        "wavesSetup": [
            { "height": 440, "bones": 4, "amplitude": 60, "color": "#B289EF", "speed": 0.15 },
            { "height": 430, "bones": 3, "amplitude": 40, "color": "rgba(150, 97, 255, .8)", "speed": 0.25 }
        ]
    }"##;
    let batch = WaveBatch::from_json_str(json).unwrap();
    assert_eq!(batch.container, "#app");
    assert_eq!(batch.waves.len(), 2);
    assert_eq!(batch.waves[0].bones, Some(4));
    assert_eq!(batch.waves[1].speed, Some(0.25));
    assert_eq!(batch.waves[1].container, None);
}

#[test]
fn batch_json_defaults_container_to_body() {
    let batch = WaveBatch::from_json_str(r#"{ "waves": [] }"#).unwrap();
    assert_eq!(batch.container, "body");
    assert!(WaveBatch::from_json_str(r#"{ "waves": [ { "bones": -1 } ] }"#).is_err());
}

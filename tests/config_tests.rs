// Host-side tests for configuration defaults and `data-*` overrides.

use site_core::{ConfigError, HoverPolicy, SiteConfig, CONFIG_ATTRIBUTES};

#[test]
fn defaults_match_the_shipped_page() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.hover_policy, HoverPolicy::MediaQuery);
    assert_eq!(cfg.tilt.max_tilt_deg, 15.0);
    assert_eq!(cfg.tilt.glare_cap, 0.5);
    assert_eq!(cfg.tilt.lift_scale, 1.05);
    assert!(cfg.force_reflow_on_flip);
    assert_eq!(cfg.cycler.interval_ms, 2000);
    assert_eq!(cfg.cycler.max_retries, 10);
    assert_eq!(cfg.navbar.threshold_px, 50.0);
}

#[test]
fn hover_policy_resolution() {
    // (hover media matches, touch capable)
    let probes = [(true, false), (true, true), (false, false), (false, true)];
    let expect = |p: HoverPolicy| -> Vec<bool> {
        probes
            .iter()
            .map(|&(hover, touch)| p.allows_tilt(hover, touch))
            .collect()
    };
    assert_eq!(expect(HoverPolicy::MediaQuery), vec![true, true, false, false]);
    assert_eq!(expect(HoverPolicy::TouchDetection), vec![true, false, true, false]);
    assert_eq!(expect(HoverPolicy::Always), vec![true; 4]);
    assert_eq!(expect(HoverPolicy::Never), vec![false; 4]);
}

#[test]
fn overrides_apply_in_range_values() {
    let mut cfg = SiteConfig::default();
    cfg.apply_attribute("data-tilt-detect", "touch").unwrap();
    cfg.apply_attribute("data-tilt-max", "18").unwrap();
    cfg.apply_attribute("data-glare-cap", "0.6").unwrap();
    cfg.apply_attribute("data-flip-reflow", "false").unwrap();
    cfg.apply_attribute("data-cycle-ms", "800").unwrap();
    cfg.apply_attribute("data-navbar-threshold", " 80 ").unwrap();

    assert_eq!(cfg.hover_policy, HoverPolicy::TouchDetection);
    assert_eq!(cfg.tilt.max_tilt_deg, 18.0);
    assert!((cfg.tilt.glare_cap - 0.6).abs() < 1e-6);
    assert!(!cfg.force_reflow_on_flip);
    assert_eq!(cfg.cycler.interval_ms, 800);
    assert_eq!(cfg.navbar.threshold_px, 80.0);
}

#[test]
fn rejected_overrides_leave_defaults() {
    let mut cfg = SiteConfig::default();
    assert!(matches!(
        cfg.apply_attribute("data-tilt-max", "120"),
        Err(ConfigError::OutOfRange { attr: "data-tilt-max", .. })
    ));
    assert!(matches!(
        cfg.apply_attribute("data-tilt-max", "steep"),
        Err(ConfigError::Unparsable { .. })
    ));
    assert!(matches!(
        cfg.apply_attribute("data-tilt-max", "NaN"),
        Err(ConfigError::Unparsable { .. })
    ));
    assert!(cfg.apply_attribute("data-cycle-ms", "5").is_err());
    assert!(cfg.apply_attribute("data-cycle-ms", "-100").is_err());
    assert!(cfg.apply_attribute("data-tilt-detect", "stylus").is_err());
    assert!(cfg.apply_attribute("data-flip-reflow", "maybe").is_err());
    assert_eq!(
        cfg.apply_attribute("data-color", "red"),
        Err(ConfigError::UnknownAttribute("data-color".to_string()))
    );
    assert_eq!(cfg, SiteConfig::default());
}

#[test]
fn batch_apply_skips_bad_pairs() {
    let mut cfg = SiteConfig::default();
    cfg.apply_attributes([
        ("data-tilt-max", "16"),
        ("data-glare-cap", "2"),
        ("data-tilt-detect", "never"),
    ]);
    assert_eq!(cfg.tilt.max_tilt_deg, 16.0);
    assert_eq!(cfg.tilt.glare_cap, 0.5);
    assert_eq!(cfg.hover_policy, HoverPolicy::Never);
}

#[test]
fn every_listed_attribute_is_understood() {
    for name in CONFIG_ATTRIBUTES {
        let mut cfg = SiteConfig::default();
        assert!(
            !matches!(
                cfg.apply_attribute(name, "1"),
                Err(ConfigError::UnknownAttribute(_))
            ),
            "{name} not handled"
        );
    }
}

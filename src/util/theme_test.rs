use super::*;

#[derive(Debug, Default)]
struct MemoryHost {
    stored: Option<String>,
    prefers_dark: bool,
    attribute: Option<String>,
    writes: usize,
}

impl MemoryHost {
    fn with_stored(value: &str) -> Self {
        Self {
            stored: Some(value.to_owned()),
            ..Self::default()
        }
    }

    fn in_sync(&self) -> bool {
        self.stored.is_some() && self.stored == self.attribute
    }
}

impl ThemeHost for MemoryHost {
    fn stored(&self) -> Option<String> {
        self.stored.clone()
    }

    fn store(&mut self, theme: Theme) {
        self.stored = Some(theme.as_str().to_owned());
        self.writes += 1;
    }

    fn prefers_dark(&self) -> bool {
        self.prefers_dark
    }

    fn attribute(&self) -> Option<String> {
        self.attribute.clone()
    }

    fn set_attribute(&mut self, theme: Theme) {
        self.attribute = Some(theme.as_str().to_owned());
    }
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn theme_parse_accepts_only_canonical_values() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn theme_icons_differ_per_variant() {
    assert_ne!(Theme::Light.icon_path(), Theme::Dark.icon_path());
    assert!(Theme::Dark.icon_path().starts_with("<path d=\"M12 3a9 9"));
    assert!(Theme::Light.icon_path().starts_with("<path d=\"M12 2.5a9.5"));
}

// =============================================================
// Precedence
// =============================================================

#[test]
fn stored_value_wins_over_os_preference() {
    assert_eq!(resolve_initial(Some("light"), true), Theme::Light);
    assert_eq!(resolve_initial(Some("dark"), false), Theme::Dark);
}

#[test]
fn os_preference_used_when_nothing_stored() {
    assert_eq!(resolve_initial(None, true), Theme::Dark);
    assert_eq!(resolve_initial(None, false), Theme::Light);
}

#[test]
fn unknown_stored_value_falls_through() {
    assert_eq!(resolve_initial(Some("sepia"), true), Theme::Dark);
    assert_eq!(resolve_initial(Some("sepia"), false), Theme::Light);
}

#[test]
fn next_from_attribute_only_flips_explicit_light() {
    assert_eq!(next_from_attribute(Some("light")), Theme::Dark);
    assert_eq!(next_from_attribute(Some("dark")), Theme::Light);
    assert_eq!(next_from_attribute(None), Theme::Light);
    assert_eq!(next_from_attribute(Some("bogus")), Theme::Light);
}

// =============================================================
// Controller
// =============================================================

#[test]
fn initialize_reflects_each_stored_value() {
    for theme in [Theme::Light, Theme::Dark] {
        let mut controller = ThemeController::new(MemoryHost::with_stored(theme.as_str()));
        assert_eq!(controller.initialize(), theme);
        assert_eq!(controller.host().attribute.as_deref(), Some(theme.as_str()));
        assert!(controller.host().in_sync());
    }
}

#[test]
fn initialize_uses_os_dark_preference_and_persists_it() {
    let host = MemoryHost {
        prefers_dark: true,
        ..MemoryHost::default()
    };
    let mut controller = ThemeController::new(host);
    assert_eq!(controller.initialize(), Theme::Dark);
    assert_eq!(controller.host().stored.as_deref(), Some("dark"));
    assert!(controller.host().in_sync());
}

#[test]
fn initialize_defaults_to_light() {
    let mut controller = ThemeController::new(MemoryHost::default());
    assert_eq!(controller.initialize(), Theme::Light);
    assert!(controller.host().in_sync());
}

#[test]
fn double_toggle_returns_to_start_and_stays_in_sync() {
    for start in [Theme::Light, Theme::Dark] {
        let mut controller = ThemeController::new(MemoryHost::with_stored(start.as_str()));
        controller.initialize();

        let once = controller.toggle();
        assert_eq!(once, start.toggled());
        assert!(controller.host().in_sync());

        let twice = controller.toggle();
        assert_eq!(twice, start);
        assert!(controller.host().in_sync());
    }
}

#[test]
fn toggle_reads_attribute_not_storage() {
    let host = MemoryHost {
        stored: Some("light".to_owned()),
        attribute: Some("dark".to_owned()),
        ..MemoryHost::default()
    };
    let mut controller = ThemeController::new(host);
    assert_eq!(controller.toggle(), Theme::Light);
    assert!(controller.host().in_sync());
}

#[test]
fn every_operation_persists_once() {
    let mut controller = ThemeController::new(MemoryHost::default());
    controller.initialize();
    controller.toggle();
    controller.toggle();
    assert_eq!(controller.host().writes, 3);
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_host_is_inert_without_a_browser() {
    let mut controller = ThemeController::new(BrowserTheme);
    assert_eq!(controller.initialize(), Theme::Light);
    assert_eq!(controller.toggle(), Theme::Light);
}

// SPDX-License-Identifier: MPL-2.0
use flash_cues::config::{self, Config, GeneralConfig, ToastConfig};
use flash_cues::i18n::fluent::I18n;
use flash_cues::page::{markup, Selector};
use flash_cues::ui::confirm::{confirm_delete, Prompt};
use flash_cues::ui::notifications::{DismissEvent, DismissTiming, Manager, Phase};
use std::path::Path;
use std::time::{Duration, Instant};
use tempfile::tempdir;

const PAGE: &str = r#"
<main>
  <div class="toast">
    <div class="msg success">Saved.</div>
    <div class="msg danger">Export failed.</div>
  </div>
  <p class="msg">Not a toast.</p>
</main>
"#;

struct Answer(bool, Vec<String>);

impl Prompt for Answer {
    fn ask(&mut self, message: &str) -> bool {
        self.1.push(message.to_string());
        self.0
    }
}

fn write_config(config: &Config, path: &Path) {
    let content = toml::to_string_pretty(config).expect("Failed to serialize config");
    std::fs::write(path, content).expect("Failed to write config file");
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let english = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
        },
        ..Config::default()
    };
    write_config(&english, &path);
    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let italian = Config {
        general: GeneralConfig {
            language: Some("it".to_string()),
        },
        ..Config::default()
    };
    write_config(&italian, &path);
    let loaded = config::load_from_path(&path).expect("Failed to load italian config");
    let i18n_it = I18n::new(None, &loaded);
    assert_eq!(i18n_it.current_locale().to_string(), "it");

    let mut prompt = Answer(true, Vec::new());
    assert!(confirm_delete(&mut prompt, &i18n_it, None));
    assert_eq!(prompt.1, vec!["Confermi l'eliminazione?".to_string()]);
}

#[test]
fn test_toast_timing_from_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        "[toasts]\nbase_delay_ms = 1000\nstagger_ms = 50\n",
    )
    .expect("Failed to write config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let timing = DismissTiming::from_config(&loaded.toasts);
    assert_eq!(timing.fade_delay(0), Duration::from_millis(1000));
    assert_eq!(timing.fade_delay(2), Duration::from_millis(1100));
    assert_eq!(timing.removal_delay(), Duration::from_millis(300));
}

#[test]
fn test_page_toasts_dismissed_in_order() {
    let mut document = markup::parse(PAGE).expect("page parses");
    let selector: Selector = ".toast .msg".parse().expect("selector parses");
    let mut manager = Manager::new();
    let start = Instant::now();

    assert_eq!(manager.arm(&document, &selector, start), 2);
    let loose = document.query_selector_all(&"p.msg".parse().unwrap())[0];

    let mut events = Vec::new();
    let mut elapsed = Duration::ZERO;
    while elapsed <= Duration::from_millis(3000) {
        events.extend(manager.tick(&mut document, start + elapsed));
        elapsed += Duration::from_millis(10);
    }

    let order: Vec<_> = events
        .iter()
        .map(|event| match event {
            DismissEvent::FadeStarted { index, .. } => ("fade", *index),
            DismissEvent::Removed { index, .. } => ("remove", *index),
        })
        .collect();
    assert_eq!(
        order,
        vec![("fade", 0), ("fade", 1), ("remove", 0), ("remove", 1)]
    );
    assert_eq!(manager.phase(0), Some(Phase::Removed));
    assert_eq!(manager.phase(1), Some(Phase::Removed));
    assert!(document.is_attached(loose));
    assert!(!manager.has_pending());
}

#[test]
fn test_custom_selector_and_empty_page() {
    let config = Config {
        toasts: ToastConfig {
            selector: Some("p.msg".to_string()),
            ..ToastConfig::default()
        },
        ..Config::default()
    };
    let selector = Selector::parse(config.toasts.selector.as_deref().unwrap()).unwrap();

    let document = markup::parse(PAGE).expect("page parses");
    let mut manager = Manager::with_timing(DismissTiming::from_config(&config.toasts));
    assert_eq!(manager.arm(&document, &selector, Instant::now()), 1);

    let empty = markup::parse("").expect("empty page parses");
    let mut idle = Manager::new();
    assert_eq!(idle.arm(&empty, &selector, Instant::now()), 0);
    assert!(!idle.has_pending());
}

#[test]
fn test_confirm_delete_returns_answer() {
    let i18n = I18n::new(Some("en-US".to_string()), &Config::default());

    let mut yes = Answer(true, Vec::new());
    assert!(confirm_delete(&mut yes, &i18n, Some("Delete user?")));
    assert_eq!(yes.1, vec!["Delete user?".to_string()]);

    let mut no = Answer(false, Vec::new());
    assert!(!confirm_delete(&mut no, &i18n, None));
    assert_eq!(no.1, vec!["Confirm deletion?".to_string()]);
}

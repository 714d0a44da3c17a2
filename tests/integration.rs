// SPDX-License-Identifier: MPL-2.0
use iced_gallery::api::{Author, PhotoSummary, PhotoUrls};
use iced_gallery::config::{self, ApiConfig, Config, GeneralConfig};
use iced_gallery::error::ApiError;
use iced_gallery::i18n::fluent::I18n;
use iced_gallery::ui::gallery::{Effect, Message, ScrollMetrics, State};
use iced_gallery::ui::theming::ThemeMode;
use tempfile::tempdir;

fn photo(id: &str) -> PhotoSummary {
    PhotoSummary {
        id: id.to_string(),
        alt_description: None,
        urls: PhotoUrls {
            thumb: format!("https://images.example.com/thumb/{id}"),
            full: format!("https://images.example.com/full/{id}"),
        },
        user: Author {
            name: "Jane Doe".to_string(),
        },
    }
}

fn scroll_to_bottom(state: &mut State) -> Effect {
    state.handle(Message::Scrolled(ScrollMetrics {
        offset_y: 1000.0,
        viewport_height: 600.0,
        content_height: 1600.0,
    }))
}

fn deliver(state: &mut State, result: Result<Vec<PhotoSummary>, ApiError>) -> Effect {
    let generation = state.generation();
    state.handle(Message::PageLoaded { generation, result })
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::System,
        },
        api: ApiConfig::default(),
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            theme_mode: ThemeMode::System,
        },
        api: ApiConfig::default(),
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_api_credentials_survive_config_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        general: GeneralConfig::default(),
        api: ApiConfig {
            base_url: Some("https://api.example.com".to_string()),
            access_key: Some("integration-key".to_string()),
        },
    };
    config::save_to_path(&config, &path).expect("Failed to save config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded.api.base_url.as_deref(), Some("https://api.example.com"));
    assert_eq!(loaded.api.access_key.as_deref(), Some("integration-key"));
}

// Scenario from the pagination contract: page 1 returns 10 items, the list
// shows 10 items and the cursor advances to page 2; page 2 returns 0 items,
// the listing is exhausted and further scrolling stays quiet.
#[test]
fn test_pagination_scenario_items_then_empty_page() {
    let mut state = State::new();

    match state.request_next_page() {
        Effect::FetchPage { page, .. } => assert_eq!(page, 1),
        other => panic!("expected FetchPage, got {other:?}"),
    }

    let page_one: Vec<PhotoSummary> = (0..10).map(|i| photo(&format!("p{i}"))).collect();
    deliver(&mut state, Ok(page_one));
    assert_eq!(state.cards().len(), 10);
    assert_eq!(state.next_page(), 2);

    match scroll_to_bottom(&mut state) {
        Effect::FetchPage { page, .. } => assert_eq!(page, 2),
        other => panic!("expected FetchPage, got {other:?}"),
    }

    deliver(&mut state, Ok(vec![]));
    assert!(state.is_exhausted());
    assert_eq!(state.cards().len(), 10);

    assert!(matches!(scroll_to_bottom(&mut state), Effect::None));
    assert!(!state.is_loading());
}

// Scenario: page 1 answers 403, the access-denied message is shown, the
// list stays empty and no request ever fires again.
#[test]
fn test_pagination_scenario_access_denied() {
    let mut state = State::new();
    state.request_next_page();
    deliver(&mut state, Err(ApiError::AccessDenied));

    assert!(state.cards().is_empty());
    let error = state.error().expect("error should be visible");
    assert_eq!(error.i18n_key(), "gallery-error-access-denied");

    assert!(matches!(scroll_to_bottom(&mut state), Effect::None));
}

#[test]
fn test_error_messages_are_localized() {
    let config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::System,
        },
        api: ApiConfig::default(),
    };
    let i18n = I18n::new(None, &config);

    assert_eq!(
        i18n.tr(ApiError::AccessDenied.i18n_key()),
        "Access denied. Please check your API key."
    );
    assert_eq!(i18n.tr(ApiError::NotFound.i18n_key()), "Photo not found");
}

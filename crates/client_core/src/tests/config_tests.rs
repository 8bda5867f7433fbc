use std::{
    collections::HashMap,
    env, fs,
    path::Path,
    time::{SystemTime, UNIX_EPOCH},
};

use crate::{
    config::{load_settings_from, ClientSettings, DEFAULT_API_BASE_URL},
    ResponseOrdering,
};

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

fn temp_settings_file(contents: &str) -> std::path::PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("usuarios_settings_{suffix}.toml"));
    fs::write(&path, contents).expect("write settings");
    path
}

#[test]
fn defaults_apply_without_file_or_env() {
    let settings = load_settings_from(Path::new("/nonexistent/usuarios.toml"), env_from(&[]));
    assert_eq!(settings, ClientSettings::default());
    assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(settings.response_ordering, ResponseOrdering::LastResolved);
}

#[test]
fn file_values_are_read() {
    let path = temp_settings_file(
        "api_base_url = \"http://api.internal:9000\"\nresponse_ordering = \"latest_issued\"\n",
    );

    let settings = load_settings_from(&path, env_from(&[]));

    assert_eq!(settings.api_base_url, "http://api.internal:9000");
    assert_eq!(settings.response_ordering, ResponseOrdering::LatestIssued);
    fs::remove_file(path).expect("cleanup");
}

#[test]
fn env_overrides_file_and_app_prefix_wins() {
    let path = temp_settings_file("api_base_url = \"http://from-file\"\n");

    let settings = load_settings_from(
        &path,
        env_from(&[
            ("USUARIOS_API_URL", "http://from-env"),
            ("APP__API_BASE_URL", "http://from-app-env"),
            ("APP__RESPONSE_ORDERING", "latest_issued"),
        ]),
    );

    assert_eq!(settings.api_base_url, "http://from-app-env");
    assert_eq!(settings.response_ordering, ResponseOrdering::LatestIssued);
    fs::remove_file(path).expect("cleanup");
}

#[test]
fn malformed_inputs_fall_back_to_defaults() {
    let path = temp_settings_file("api_base_url = [not toml");

    let settings = load_settings_from(&path, env_from(&[("APP__RESPONSE_ORDERING", "random")]));

    assert_eq!(settings, ClientSettings::default());
    fs::remove_file(path).expect("cleanup");
}

//! `env-key` command: show the environment variable a key resolves from.

use layered_config::SettingsStore;

pub fn run(store: &SettingsStore, key: &str) -> String {
    store.env_key(key)
}

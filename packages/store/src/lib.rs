pub mod config;
pub mod storage;
pub mod theme;

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use config::{ClipitConfig, ConfigError};
pub use storage::{KeyValueStore, ACCESS_TOKEN_KEY, CODE_THEME_KEY, USER_KEY};
pub use theme::{CodeTheme, ThemePreference};

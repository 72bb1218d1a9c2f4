use pocketlink_shortener::AllocatorSettings;
use typed_builder::TypedBuilder;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Configures an [`App`](crate::App).
#[derive(Debug, Clone, TypedBuilder)]
pub struct AppConfig {
    /// Origin short links are rendered against, e.g. `https://pl.ink`.
    #[builder(default = DEFAULT_BASE_URL.to_string(), setter(into))]
    pub base_url: String,
    #[builder(default)]
    pub allocator: AllocatorSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

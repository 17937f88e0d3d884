use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

use tracing::warn;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Groq,
    OpenRouter,
}

impl ProviderKind {
    pub fn api_key_var(&self) -> &'static str {
        match self {
            ProviderKind::Groq => "GROQ_API_KEY",
            ProviderKind::OpenRouter => "OPENROUTER_API_KEY",
        }
    }

    pub fn default_api_url(&self) -> &'static str {
        match self {
            ProviderKind::Groq => "https://api.groq.com/openai/v1/chat/completions",
            ProviderKind::OpenRouter => "https://openrouter.ai/api/v1/chat/completions",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::Groq => "llama-3.3-70b-versatile",
            ProviderKind::OpenRouter => "google/gemma-3-27b-it:free",
        }
    }

    /// Gemma on OpenRouter rejects system turns, so it defaults to injection.
    pub fn default_prompt_style(&self) -> PromptStyle {
        match self {
            ProviderKind::Groq => PromptStyle::SystemRole,
            ProviderKind::OpenRouter => PromptStyle::InjectedFirstUserTurn,
        }
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "groq" => Ok(ProviderKind::Groq),
            "openrouter" => Ok(ProviderKind::OpenRouter),
            other => Err(format!("Invalid CHAT_PROVIDER: {}. Must be 'groq' or 'openrouter'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStyle {
    SystemRole,
    InjectedFirstUserTurn,
}

impl FromStr for PromptStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "system" => Ok(PromptStyle::SystemRole),
            "inject" => Ok(PromptStyle::InjectedFirstUserTurn),
            other => Err(format!("Invalid CHAT_PROMPT_STYLE: {}. Must be 'system' or 'inject'", other)),
        }
    }
}

/// Settings for the chat proxy and its upstream provider.
#[derive(Clone)]
pub struct ChatConfig {
    pub provider: ProviderKind,
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub prompt_style: PromptStyle,
    pub site_url: Option<String>,
    pub site_name: Option<String>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_secs: u64,
    /// Most recent turns forwarded upstream; `None` forwards everything.
    pub max_history: Option<usize>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::for_provider(ProviderKind::Groq)
    }
}

impl ChatConfig {
    pub fn for_provider(provider: ProviderKind) -> Self {
        Self {
            provider,
            api_key: None,
            api_url: provider.default_api_url().to_string(),
            model: provider.default_model().to_string(),
            prompt_style: provider.default_prompt_style(),
            site_url: None,
            site_name: None,
            max_tokens: 1024,
            temperature: 0.6,
            timeout_secs: 30,
            max_history: Some(40),
        }
    }

    pub fn from_env() -> Result<Self, String> {
        let provider = match non_empty_var("CHAT_PROVIDER") {
            Some(raw) => raw.parse()?,
            None => ProviderKind::Groq,
        };
        let mut config = Self::for_provider(provider);

        config.api_key = non_empty_var(provider.api_key_var());

        if let Some(raw) = non_empty_var("CHAT_API_URL") {
            match url::Url::parse(&raw) {
                Ok(parsed) => config.api_url = parsed.to_string(),
                Err(e) => warn!("Ignoring invalid CHAT_API_URL {}: {}", raw, e),
            }
        }
        if let Some(model) = non_empty_var("CHAT_MODEL") {
            config.model = model;
        }
        if let Some(raw) = non_empty_var("CHAT_PROMPT_STYLE") {
            config.prompt_style = raw.parse()?;
        }

        config.site_url = non_empty_var("CHAT_SITE_URL");
        config.site_name = non_empty_var("CHAT_SITE_NAME");
        config.max_tokens = parse_var("CHAT_MAX_TOKENS", config.max_tokens);
        config.temperature = parse_var("CHAT_TEMPERATURE", config.temperature);
        config.timeout_secs = parse_var("CHAT_TIMEOUT_SECS", config.timeout_secs);

        if non_empty_var("CHAT_MAX_HISTORY").is_some() {
            let limit = parse_var("CHAT_MAX_HISTORY", 40usize);
            config.max_history = (limit > 0).then_some(limit);
        }

        Ok(config)
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }

    pub fn missing_key_message(&self) -> String {
        format!(
            "{} is not set. Add it to your .env file in the project root.",
            self.provider.api_key_var()
        )
    }
}

impl fmt::Debug for ChatConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatConfig")
            .field("provider", &self.provider)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("prompt_style", &self.prompt_style)
            .field("site_url", &self.site_url)
            .field("site_name", &self.site_name)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("timeout_secs", &self.timeout_secs)
            .field("max_history", &self.max_history)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub cors_allowed_origin: Option<String>,
    pub ui_dir: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, String> {
        let raw_addr = non_empty_var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse()
            .map_err(|e| format!("Invalid BIND_ADDR {}: {}", raw_addr, e))?;

        Ok(Self {
            bind_addr,
            cors_allowed_origin: non_empty_var("CORS_ALLOWED_ORIGIN"),
            ui_dir: non_empty_var("UI_DIR"),
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<T: FromStr + fmt::Display + Copy>(name: &str, default: T) -> T {
    match non_empty_var(name) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Invalid {} value {}, using default {}", name, raw, default);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_config_defaults() {
        let config = ChatConfig::default();
        assert_eq!(config.provider, ProviderKind::Groq);
        assert_eq!(config.model, "llama-3.3-70b-versatile");
        assert_eq!(config.prompt_style, PromptStyle::SystemRole);
        assert_eq!(config.max_tokens, 1024);
        assert_eq!(config.temperature, 0.6);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.max_history, Some(40));
        assert!(config.api_key().is_none());
    }

    #[test]
    fn test_openrouter_defaults_to_injection() {
        let config = ChatConfig::for_provider(ProviderKind::OpenRouter);
        assert_eq!(config.prompt_style, PromptStyle::InjectedFirstUserTurn);
        assert_eq!(config.provider.api_key_var(), "OPENROUTER_API_KEY");
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let config = ChatConfig {
            api_key: Some("   ".to_string()),
            ..ChatConfig::default()
        };
        assert!(config.api_key().is_none());
        assert!(config.missing_key_message().contains("GROQ_API_KEY"));
    }

    #[test]
    fn test_debug_output_redacts_api_key() {
        let config = ChatConfig {
            api_key: Some("gsk_super_secret".to_string()),
            ..ChatConfig::default()
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("gsk_super_secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_provider_and_style_parsing() {
        assert_eq!("Groq".parse::<ProviderKind>(), Ok(ProviderKind::Groq));
        assert_eq!(" openrouter ".parse::<ProviderKind>(), Ok(ProviderKind::OpenRouter));
        assert!("anthropic".parse::<ProviderKind>().is_err());
        assert_eq!("inject".parse::<PromptStyle>(), Ok(PromptStyle::InjectedFirstUserTurn));
        assert!("both".parse::<PromptStyle>().is_err());
    }
}

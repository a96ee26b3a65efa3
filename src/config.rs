use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MailConfig {
    pub api_url: String,
    pub api_key: String,
    pub from: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    pub completion: CompletionConfig,
    pub mail: MailConfig,
    /// Shared secret required by the reminder-dispatch trigger.
    pub operator_token: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "jobtrail".into()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "jobtrail-users".into()),
            ttl_minutes: std::env::var("JWT_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(60),
        };
        let completion = CompletionConfig {
            api_key: std::env::var("OPENAI_API_KEY")?,
            api_url: std::env::var("OPENAI_API_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1/chat/completions".into()),
            model: std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4".into()),
            timeout_secs: std::env::var("OPENAI_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(30),
        };
        let mail = MailConfig {
            api_url: std::env::var("MAIL_API_URL")?,
            api_key: std::env::var("MAIL_API_KEY")?,
            from: std::env::var("MAIL_FROM")?,
        };
        let operator_token = std::env::var("OPERATOR_TOKEN")?;
        Ok(Self {
            database_url,
            jwt,
            completion,
            mail,
            operator_token,
        })
    }
}

use once_cell::sync::Lazy;
use regex::Regex;
use schemars::JsonSchema;
use serde::Deserialize;

pub const ENV_EXAMPLE_FILE: &str = ".env.example";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum EnvType {
    Development,
    Production,
    Testing,
}

impl EnvType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        }
    }
}

pub fn env_file_name(env_type: EnvType) -> String {
    format!(".env.{}", env_type.as_str())
}

/// Default `.env.<type>` contents: `KEY=VALUE` lines grouped under comment headers.
pub fn render_env_file(env_type: EnvType) -> String {
    let env = env_type.as_str();
    let header = env.to_uppercase();
    format!(
        "# {header} Environment Variables
NODE_ENV={env}
PORT=5000
MONGODB_URI=mongodb://localhost:27017/myapp
JWT_SECRET=your-secret-key-here
CORS_ORIGIN=http://localhost:3000

# Database Configuration
DB_HOST=localhost
DB_PORT=27017
DB_NAME=myapp

# API Configuration
API_VERSION=v1
API_PREFIX=/api

# Security
BCRYPT_ROUNDS=10
JWT_EXPIRES_IN=7d

# Email Configuration (if needed)
# SMTP_HOST=smtp.gmail.com
# SMTP_PORT=587
# SMTP_USER=your-email@gmail.com
# SMTP_PASS=your-password

# File Upload
MAX_FILE_SIZE=5mb
UPLOAD_DIR=uploads/
"
    )
}

static ASSIGNED_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)=.+$").expect("valid env value pattern"));

/// Blank every value: `KEY=value` becomes `KEY=`, comments and key order are kept.
pub fn strip_env_values(content: &str) -> String {
    ASSIGNED_VALUE.replace_all(content, "=").into_owned()
}

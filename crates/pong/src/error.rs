//! Error types for the host runner

use thiserror::Error;

/// Invalid runner configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("serve must be two comma separated numbers like `1,-1`, got `{input}`")]
    ServeSyntax { input: String },

    #[error("serve component `{component}` is not a number")]
    ServeComponent { component: String },

    #[error("serve speed {speed} is not one of -2, -1, 1, 2")]
    ServeSpeed { speed: i8 },

    #[error("frame count must be at least 1")]
    NoFrames,
}

impl ConfigError {
    pub fn serve_syntax(input: impl Into<String>) -> Self {
        Self::ServeSyntax { input: input.into() }
    }

    pub fn serve_component(component: impl Into<String>) -> Self {
        Self::ServeComponent { component: component.into() }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;

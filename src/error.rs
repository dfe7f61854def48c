pub type HeatfieldResult<T> = Result<T, HeatfieldError>;

#[derive(thiserror::Error, Debug)]
pub enum HeatfieldError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("background image unreadable: {0}")]
    BackgroundNotFound(String),

    #[error("write failed: {0}")]
    WriteFailed(String),

    #[error("gradient cache read failed: {0}")]
    CacheReadFailed(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HeatfieldError {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn background_not_found(msg: impl Into<String>) -> Self {
        Self::BackgroundNotFound(msg.into())
    }

    pub fn write_failed(msg: impl Into<String>) -> Self {
        Self::WriteFailed(msg.into())
    }

    pub fn cache_read_failed(msg: impl Into<String>) -> Self {
        Self::CacheReadFailed(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            HeatfieldError::invalid_config("x")
                .to_string()
                .contains("invalid config:")
        );
        assert!(
            HeatfieldError::background_not_found("x")
                .to_string()
                .contains("background image unreadable:")
        );
        assert!(
            HeatfieldError::write_failed("x")
                .to_string()
                .contains("write failed:")
        );
        assert!(
            HeatfieldError::cache_read_failed("x")
                .to_string()
                .contains("gradient cache read failed:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = HeatfieldError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}

use parlor_infrastructure::storage::MAX_OBJECT_BYTES;

/// Runtime tunables for the service layer. All values have sensible
/// defaults; the environment only needs to override them.
#[derive(Clone, Debug)]
pub struct Config {
    /// Cap on a single message-history fetch.
    pub message_page_limit: usize,
    /// Attempts at refreshing a room's denormalized summary after the
    /// message insert succeeded. The message itself is never rolled back.
    pub summary_repair_attempts: u32,
    /// Upload cap handed to the object store's bucket configuration.
    pub max_object_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            message_page_limit: 200,
            summary_repair_attempts: 3,
            max_object_bytes: MAX_OBJECT_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Ok(Self {
            message_page_limit: match std::env::var("MESSAGE_PAGE_LIMIT") {
                Ok(v) => v.parse()?,
                Err(_) => defaults.message_page_limit,
            },
            summary_repair_attempts: match std::env::var("SUMMARY_REPAIR_ATTEMPTS") {
                // At least one attempt, or the preview silently goes stale.
                Ok(v) => v.parse::<u32>()?.max(1),
                Err(_) => defaults.summary_repair_attempts,
            },
            max_object_bytes: match std::env::var("MAX_OBJECT_BYTES") {
                Ok(v) => v.parse()?,
                Err(_) => defaults.max_object_bytes,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_observed_limits() {
        let config = Config::default();
        assert_eq!(config.message_page_limit, 200);
        assert_eq!(config.summary_repair_attempts, 3);
        assert_eq!(config.max_object_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn zero_repair_attempts_is_clamped_to_one() {
        std::env::set_var("SUMMARY_REPAIR_ATTEMPTS", "0");
        let config = Config::from_env().unwrap();
        assert_eq!(config.summary_repair_attempts, 1);
        std::env::remove_var("SUMMARY_REPAIR_ATTEMPTS");
    }
}

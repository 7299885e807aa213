use domain::ports::env::EnvProbe;

/// Process-environment probe.
pub struct SystemEnvProbe;

impl SystemEnvProbe {
    pub fn new() -> Self {
        Self
    }
}

impl EnvProbe for SystemEnvProbe {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reads_the_process_environment() {
        std::env::set_var("ENV_PHYSICIAN_PROBE_TEST", "present");

        let probe = SystemEnvProbe::new();
        assert_eq!(
            probe.get("ENV_PHYSICIAN_PROBE_TEST"),
            Some("present".to_string())
        );
        assert_eq!(probe.get("ENV_PHYSICIAN_PROBE_TEST_MISSING"), None);
    }
}

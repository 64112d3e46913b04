use error_stack::{Report, ResultExt};
use kernel::KernelError;

static APP_PORT: &str = "APP_PORT";

/// Process-level settings pulled from the environment at startup.
pub struct Config {
    port: u16,
}

impl Config {
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        let port = dotenvy::var(APP_PORT)
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable_lazy(|| "APP_PORT is not set")?;
        if port.is_empty() {
            return Err(
                Report::new(KernelError::Internal).attach_printable("APP_PORT must not be empty")
            );
        }
        let port = port
            .parse::<u16>()
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable_lazy(|| "APP_PORT must be a port number")?;
        Ok(Self { port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

#[cfg(test)]
mod test {
    use super::Config;

    #[test]
    fn port_comes_from_the_environment() {
        std::env::set_var("APP_PORT", "8080");
        assert_eq!(Config::from_env().unwrap().port(), 8080);

        std::env::set_var("APP_PORT", "");
        assert!(Config::from_env().is_err());

        std::env::set_var("APP_PORT", "not-a-port");
        assert!(Config::from_env().is_err());
    }
}

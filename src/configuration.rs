use crate::error::Error;
use std::{env, error, net::IpAddr};

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_MAX_INPUT_LENGTH: usize = 65536;

#[derive(Debug, Clone)]
pub struct Configuration {
    host: IpAddr,
    port: u16,
    max_input_length: usize,
}

fn var(key: &str, default: Option<String>) -> Result<String, String> {
    match env::var(key) {
        Ok(value) => Ok(value),
        Err(_) => default.ok_or(format!("Missing {}", key)),
    }
}

fn var_map<T, E: error::Error>(key: &str, mut f: impl FnMut(&str) -> Result<T, E>, default: Option<T>) -> Result<T, String> {
    match var(key, None) {
        Ok(value) => f(&value).map_err(|_| format!("Invalid {} {}", key, value)),
        Err(err) => default.ok_or(err),
    }
}

impl Configuration {
    /// Reads `HOST`, `PORT` and `MAX_INPUT_LENGTH`, all optional.
    pub fn from_env() -> Result<Self, Error> {
        let host = var_map("HOST", |host| host.parse(), Some(IpAddr::from([127, 0, 0, 1]))).map_err(Error::new)?;
        let port = var_map("PORT", |port| port.parse(), Some(DEFAULT_PORT)).map_err(Error::new)?;
        let max_input_length = var_map(
            "MAX_INPUT_LENGTH",
            |length| length.parse(),
            Some(DEFAULT_MAX_INPUT_LENGTH),
        )
        .map_err(Error::new)?;
        Ok(Self {
            host,
            port,
            max_input_length,
        })
    }

    pub fn host(&self) -> IpAddr {
        self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn max_input_length(&self) -> usize {
        self.max_input_length
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    #[test]
    fn var_map() {
        env::set_var("BASE_TRANSFORM_TEST_PORT", "8080");
        env::set_var("BASE_TRANSFORM_TEST_BAD_PORT", "eighty");
        assert_eq!(super::var_map("BASE_TRANSFORM_TEST_PORT", |port| port.parse::<u16>(), None), Ok(8080));
        assert_eq!(
            super::var_map("BASE_TRANSFORM_TEST_BAD_PORT", |port| port.parse::<u16>(), Some(1)),
            Err("Invalid BASE_TRANSFORM_TEST_BAD_PORT eighty".to_string())
        );
        assert_eq!(super::var_map("BASE_TRANSFORM_TEST_UNSET", |port| port.parse::<u16>(), Some(1)), Ok(1));
        assert_eq!(
            super::var_map("BASE_TRANSFORM_TEST_UNSET", |port| port.parse::<u16>(), None),
            Err("Missing BASE_TRANSFORM_TEST_UNSET".to_string())
        );
    }
}

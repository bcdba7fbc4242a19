use crate::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Departments whose employees may be assigned to flights when the
/// environment does not override the set: flight crew (1) and cabin staff (2).
const DEFAULT_FLIGHT_CREW_DEPARTMENT_IDS: [i32; 2] = [1, 2];

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub flight_crew_department_ids: Vec<i32>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());

        let flight_crew_department_ids = match std::env::var("FLIGHT_CREW_DEPARTMENT_IDS") {
            Ok(raw) => parse_department_ids(&raw)?,
            Err(_) => DEFAULT_FLIGHT_CREW_DEPARTMENT_IDS.to_vec(),
        };

        Ok(Self {
            database_url,
            bind_address,
            flight_crew_department_ids,
        })
    }
}

/// Parses a comma-separated department id list, e.g. `"1,2"`.
fn parse_department_ids(raw: &str) -> Result<Vec<i32>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i32>()
                .map_err(|_| ConfigError::InvalidEnvVar("FLIGHT_CREW_DEPARTMENT_IDS".to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::parse_department_ids;

    #[test]
    fn parses_comma_separated_ids() {
        assert_eq!(parse_department_ids("1,2").unwrap(), vec![1, 2]);
        assert_eq!(parse_department_ids(" 3 , 4 ,").unwrap(), vec![3, 4]);
    }

    #[test]
    fn rejects_non_numeric_ids() {
        assert!(parse_department_ids("1,crew").is_err());
    }
}

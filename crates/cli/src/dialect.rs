use planner::query::dialect::{Dialect, MySql, Postgres};
use std::{str::FromStr, sync::Arc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialectKind {
    MySql,
    Postgres,
}

impl FromStr for DialectKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(DialectKind::MySql),
            "pg" | "postgres" | "postgresql" => Ok(DialectKind::Postgres),
            other => Err(format!("Unknown dialect: {other}")),
        }
    }
}

impl DialectKind {
    pub fn dialect(&self) -> Arc<dyn Dialect> {
        match self {
            DialectKind::MySql => Arc::new(MySql),
            DialectKind::Postgres => Arc::new(Postgres),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DialectKind;
    use std::str::FromStr;

    #[test]
    fn test_parse_dialect() {
        assert_eq!(DialectKind::from_str("PG").unwrap(), DialectKind::Postgres);
        assert_eq!(DialectKind::from_str("mariadb").unwrap(), DialectKind::MySql);
        assert_eq!(
            DialectKind::from_str("sqlite").unwrap_err(),
            "Unknown dialect: sqlite"
        );
        assert_eq!(DialectKind::MySql.dialect().name(), "MySQL");
    }
}

#![forbid(unsafe_code)]

use bx_core::plan::PlanError;
use bx_core::version::VersionError;

#[derive(Debug)]
pub enum SchemaError {
    Io(std::io::Error),
    Sql(rusqlite::Error),
    Version(VersionError),
    Plan(PlanError),
    Irreversible { version: i64, name: &'static str },
    UnknownVersion(i64),
    NothingApplied,
}

impl std::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io: {err}"),
            Self::Sql(err) => write!(f, "sqlite: {err}"),
            Self::Version(err) => write!(f, "version: {err}"),
            Self::Plan(err) => write!(f, "plan: {err}"),
            Self::Irreversible { version, name } => {
                write!(f, "migration {version} ({name}) cannot be reverted")
            }
            Self::UnknownVersion(version) => write!(f, "unknown migration version {version}"),
            Self::NothingApplied => write!(f, "no migrations are applied"),
        }
    }
}

impl std::error::Error for SchemaError {}

impl From<std::io::Error> for SchemaError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<rusqlite::Error> for SchemaError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sql(value)
    }
}

impl From<VersionError> for SchemaError {
    fn from(value: VersionError) -> Self {
        Self::Version(value)
    }
}

impl From<PlanError> for SchemaError {
    fn from(value: PlanError) -> Self {
        Self::Plan(value)
    }
}

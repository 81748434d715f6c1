#![forbid(unsafe_code)]

use crate::SchemaError;
use crate::history::{self, Migration};
use bx_core::plan::{apply_plan, revert_plan};
use bx_core::version::MigrationVersion;
use rusqlite::{Connection, params};
use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// SQLite database plus the migration ledger (`schema_migrations`).
///
/// Every `up`/`down` body runs in the same transaction as its ledger
/// insert/delete, so a failed migration leaves neither half behind.
#[derive(Debug)]
pub struct SchemaStore {
    conn: Connection,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppliedMigration {
    pub version: i64,
    pub name: String,
    pub applied_at_ms: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MigrationStatus {
    pub version: i64,
    pub name: &'static str,
    pub applied_at_ms: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusReport {
    pub entries: Vec<MigrationStatus>,
}

impl StatusReport {
    pub fn pending(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.applied_at_ms.is_none())
            .count()
    }

    pub fn to_json(&self) -> serde_json::Value {
        let entries: Vec<serde_json::Value> = self
            .entries
            .iter()
            .map(|entry| {
                serde_json::json!({
                    "version": entry.version,
                    "name": entry.name,
                    "applied_at_ms": entry.applied_at_ms,
                })
            })
            .collect();
        serde_json::json!({
            "migrations": entries,
            "pending": self.pending(),
        })
    }
}

impl SchemaStore {
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        if let Some(parent) = db_path.as_ref().parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(db_path)?;
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self, SchemaError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, SchemaError> {
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS schema_migrations (
               version INTEGER PRIMARY KEY,
               name TEXT NOT NULL,
               applied_at_ms INTEGER NOT NULL
             );",
        )?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn applied(&self) -> Result<Vec<AppliedMigration>, SchemaError> {
        let mut stmt = self.conn.prepare(
            "SELECT version, name, applied_at_ms FROM schema_migrations ORDER BY version",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(AppliedMigration {
                version: row.get(0)?,
                name: row.get(1)?,
                applied_at_ms: row.get(2)?,
            })
        })?;
        let mut applied = Vec::new();
        for row in rows {
            applied.push(row?);
        }
        Ok(applied)
    }

    /// Applies every pending migration, oldest first. Returns the versions
    /// that ran; an empty vector means the schema was already current.
    pub fn apply_all(&mut self) -> Result<Vec<i64>, SchemaError> {
        self.apply_pending(usize::MAX)
    }

    /// Applies at most `steps` pending migrations.
    pub fn apply_steps(&mut self, steps: usize) -> Result<Vec<i64>, SchemaError> {
        self.apply_pending(steps)
    }

    fn apply_pending(&mut self, limit: usize) -> Result<Vec<i64>, SchemaError> {
        let migrations = history::all();
        let pending = {
            let registry = registry_versions(&migrations)?;
            let applied = self.applied_versions()?;
            apply_plan(&registry, &applied)?
        };
        let mut ran = Vec::new();
        for version in pending.into_iter().take(limit) {
            let migration = find(&migrations, version.as_i64())?;
            self.run_up(migration)?;
            ran.push(migration.version);
        }
        Ok(ran)
    }

    /// Reverts the newest applied migration.
    pub fn revert_last(&mut self) -> Result<i64, SchemaError> {
        let reverted = self.revert_steps(1)?;
        reverted.into_iter().next().ok_or(SchemaError::NothingApplied)
    }

    pub fn revert_steps(&mut self, steps: usize) -> Result<Vec<i64>, SchemaError> {
        let migrations = history::all();
        let mut plan = {
            let registry = registry_versions(&migrations)?;
            let applied = self.applied_versions()?;
            revert_plan(&registry, &applied, None)?
        };
        if plan.is_empty() {
            return Ok(Vec::new());
        }
        // revert_plan with no target yields exactly the newest migration;
        // extend one step at a time so each down sees a consistent ledger.
        let mut reverted = Vec::new();
        for _ in 0..steps {
            let Some(version) = plan.pop() else { break };
            let migration = find(&migrations, version.as_i64())?;
            self.run_down(migration)?;
            reverted.push(migration.version);
            let registry = registry_versions(&migrations)?;
            let applied = self.applied_versions()?;
            plan = revert_plan(&registry, &applied, None)?;
        }
        Ok(reverted)
    }

    /// Reverts until `version` is the newest applied migration.
    pub fn revert_to(&mut self, version: i64) -> Result<Vec<i64>, SchemaError> {
        let migrations = history::all();
        let target = MigrationVersion::try_new(version)?;
        let plan = {
            let registry = registry_versions(&migrations)?;
            let applied = self.applied_versions()?;
            revert_plan(&registry, &applied, Some(target))?
        };
        let mut reverted = Vec::new();
        for step in plan {
            let migration = find(&migrations, step.as_i64())?;
            self.run_down(migration)?;
            reverted.push(migration.version);
        }
        Ok(reverted)
    }

    pub fn status(&self) -> Result<StatusReport, SchemaError> {
        let applied = self.applied()?;
        let entries = history::all()
            .iter()
            .map(|migration| MigrationStatus {
                version: migration.version,
                name: migration.name,
                applied_at_ms: applied
                    .iter()
                    .find(|row| row.version == migration.version)
                    .map(|row| row.applied_at_ms),
            })
            .collect();
        Ok(StatusReport { entries })
    }

    fn applied_versions(&self) -> Result<Vec<MigrationVersion>, SchemaError> {
        self.applied()?
            .into_iter()
            .map(|row| MigrationVersion::try_new(row.version).map_err(SchemaError::from))
            .collect()
    }

    fn run_up(&mut self, migration: &Migration) -> Result<(), SchemaError> {
        let now_ms = epoch_ms();
        let tx = self.conn.transaction()?;
        (migration.up)(&tx)?;
        tx.execute(
            "INSERT INTO schema_migrations(version, name, applied_at_ms) VALUES (?1, ?2, ?3)",
            params![migration.version, migration.name, now_ms],
        )?;
        tx.commit()?;
        Ok(())
    }

    fn run_down(&mut self, migration: &Migration) -> Result<(), SchemaError> {
        let tx = self.conn.transaction()?;
        (migration.down)(&tx)?;
        tx.execute(
            "DELETE FROM schema_migrations WHERE version = ?1",
            params![migration.version],
        )?;
        tx.commit()?;
        Ok(())
    }
}

fn registry_versions(migrations: &[Migration]) -> Result<Vec<MigrationVersion>, SchemaError> {
    migrations
        .iter()
        .map(|migration| MigrationVersion::try_new(migration.version).map_err(SchemaError::from))
        .collect()
}

fn find(migrations: &[Migration], version: i64) -> Result<&Migration, SchemaError> {
    migrations
        .iter()
        .find(|migration| migration.version == version)
        .ok_or(SchemaError::UnknownVersion(version))
}

fn epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

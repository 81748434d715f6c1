#![forbid(unsafe_code)]

pub mod version {
    /// Numeric migration stamp of the form `YYYYMMDDHHMMSS` (UTC).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct MigrationVersion(i64);

    impl MigrationVersion {
        pub fn as_i64(&self) -> i64 {
            self.0
        }

        pub fn try_new(value: i64) -> Result<Self, VersionError> {
            validate_stamp(value)?;
            Ok(Self(value))
        }

        pub fn parse(text: &str) -> Result<Self, VersionError> {
            if text.len() != 14 {
                return Err(VersionError::WrongLength(text.len()));
            }
            let value = text
                .parse::<i64>()
                .map_err(|_| VersionError::NotNumeric)?;
            Self::try_new(value)
        }
    }

    impl std::fmt::Display for MigrationVersion {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:014}", self.0)
        }
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum VersionError {
        NotNumeric,
        WrongLength(usize),
        FieldOutOfRange { field: &'static str },
    }

    impl std::fmt::Display for VersionError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Self::NotNumeric => write!(f, "version stamp is not numeric"),
                Self::WrongLength(len) => {
                    write!(f, "version stamp must be 14 digits (got {len})")
                }
                Self::FieldOutOfRange { field } => {
                    write!(f, "version stamp {field} out of range")
                }
            }
        }
    }

    impl std::error::Error for VersionError {}

    fn validate_stamp(value: i64) -> Result<(), VersionError> {
        if !(10_000_000_000_000..100_000_000_000_000).contains(&value) {
            return Err(VersionError::WrongLength(digit_count(value)));
        }
        let second = value % 100;
        let minute = (value / 100) % 100;
        let hour = (value / 10_000) % 100;
        let day = (value / 1_000_000) % 100;
        let month = (value / 100_000_000) % 100;
        if !(1..=12).contains(&month) {
            return Err(VersionError::FieldOutOfRange { field: "month" });
        }
        if !(1..=31).contains(&day) {
            return Err(VersionError::FieldOutOfRange { field: "day" });
        }
        if hour > 23 {
            return Err(VersionError::FieldOutOfRange { field: "hour" });
        }
        if minute > 59 {
            return Err(VersionError::FieldOutOfRange { field: "minute" });
        }
        if second > 59 {
            return Err(VersionError::FieldOutOfRange { field: "second" });
        }
        Ok(())
    }

    fn digit_count(value: i64) -> usize {
        let mut value = value.abs();
        let mut digits = 1;
        while value >= 10 {
            value /= 10;
            digits += 1;
        }
        digits
    }
}

pub mod plan {
    use super::version::MigrationVersion;

    /// Ordered registry of known migrations plus the ledger of applied ones.
    ///
    /// The ledger must always be a prefix of the registry: an unapplied
    /// migration older than an applied one means the database was produced
    /// by a different (or edited) history and is refused rather than patched.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum PlanError {
        RegistryNotMonotonic { at: MigrationVersion },
        UnknownApplied { version: MigrationVersion },
        AppliedGap {
            missing: MigrationVersion,
            newer: MigrationVersion,
        },
        TargetNotApplied { target: MigrationVersion },
    }

    impl std::fmt::Display for PlanError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Self::RegistryNotMonotonic { at } => {
                    write!(f, "migration registry not strictly increasing at {at}")
                }
                Self::UnknownApplied { version } => {
                    write!(f, "ledger references unknown migration {version}")
                }
                Self::AppliedGap { missing, newer } => write!(
                    f,
                    "migration {missing} is unapplied but {newer} is applied"
                ),
                Self::TargetNotApplied { target } => {
                    write!(f, "revert target {target} is not applied")
                }
            }
        }
    }

    impl std::error::Error for PlanError {}

    /// Migrations to run forward, oldest first.
    pub fn apply_plan(
        registry: &[MigrationVersion],
        applied: &[MigrationVersion],
    ) -> Result<Vec<MigrationVersion>, PlanError> {
        let applied = check_prefix(registry, applied)?;
        Ok(registry[applied..].to_vec())
    }

    /// Migrations to revert, newest first, stopping after `target` would be
    /// the newest applied migration. `None` reverts only the newest one.
    pub fn revert_plan(
        registry: &[MigrationVersion],
        applied: &[MigrationVersion],
        target: Option<MigrationVersion>,
    ) -> Result<Vec<MigrationVersion>, PlanError> {
        let applied_len = check_prefix(registry, applied)?;
        if applied_len == 0 {
            return Ok(Vec::new());
        }
        let keep = match target {
            None => applied_len - 1,
            Some(target) => {
                let index = registry[..applied_len]
                    .iter()
                    .position(|version| *version == target)
                    .ok_or(PlanError::TargetNotApplied { target })?;
                index + 1
            }
        };
        let mut plan = registry[keep..applied_len].to_vec();
        plan.reverse();
        Ok(plan)
    }

    /// Verifies registry monotonicity and that `applied` is a registry
    /// prefix. Returns the prefix length.
    fn check_prefix(
        registry: &[MigrationVersion],
        applied: &[MigrationVersion],
    ) -> Result<usize, PlanError> {
        for pair in registry.windows(2) {
            if pair[1] <= pair[0] {
                return Err(PlanError::RegistryNotMonotonic { at: pair[1] });
            }
        }
        let mut applied_sorted = applied.to_vec();
        applied_sorted.sort();
        for version in &applied_sorted {
            if !registry.contains(version) {
                return Err(PlanError::UnknownApplied { version: *version });
            }
        }
        for (index, version) in applied_sorted.iter().enumerate() {
            if registry[index] != *version {
                return Err(PlanError::AppliedGap {
                    missing: registry[index],
                    newer: *version,
                });
            }
        }
        Ok(applied_sorted.len())
    }
}

#[cfg(test)]
mod tests {
    use super::plan::{PlanError, apply_plan, revert_plan};
    use super::version::{MigrationVersion, VersionError};

    fn v(raw: i64) -> MigrationVersion {
        MigrationVersion::try_new(raw).expect("test stamp must be valid")
    }

    #[test]
    fn version_round_trips_through_display() {
        let version = v(20251109080411);
        assert_eq!(version.to_string(), "20251109080411");
        assert_eq!(
            MigrationVersion::parse("20251109080411").expect("parse must succeed"),
            version
        );
    }

    #[test]
    fn version_rejects_bad_fields() {
        assert_eq!(
            MigrationVersion::try_new(20251309080411),
            Err(VersionError::FieldOutOfRange { field: "month" })
        );
        assert_eq!(
            MigrationVersion::try_new(20251100080411),
            Err(VersionError::FieldOutOfRange { field: "day" })
        );
        assert_eq!(
            MigrationVersion::try_new(2025),
            Err(VersionError::WrongLength(4))
        );
        assert_eq!(
            MigrationVersion::parse("2025-11-09 08h"),
            Err(VersionError::NotNumeric)
        );
    }

    #[test]
    fn apply_plan_returns_pending_suffix() {
        let registry = [v(20250101000000), v(20250102000000), v(20250103000000)];
        let plan = apply_plan(&registry, &[v(20250101000000)]).expect("plan must build");
        assert_eq!(plan, vec![v(20250102000000), v(20250103000000)]);

        let plan = apply_plan(&registry, &registry).expect("plan must build");
        assert!(plan.is_empty());
    }

    #[test]
    fn apply_plan_rejects_gaps_and_strangers() {
        let registry = [v(20250101000000), v(20250102000000), v(20250103000000)];
        assert_eq!(
            apply_plan(&registry, &[v(20250103000000)]),
            Err(PlanError::AppliedGap {
                missing: v(20250101000000),
                newer: v(20250103000000),
            })
        );
        assert_eq!(
            apply_plan(&registry, &[v(20240101000000)]),
            Err(PlanError::UnknownApplied {
                version: v(20240101000000)
            })
        );
    }

    #[test]
    fn revert_plan_walks_back_newest_first() {
        let registry = [v(20250101000000), v(20250102000000), v(20250103000000)];
        let plan = revert_plan(&registry, &registry, None).expect("plan must build");
        assert_eq!(plan, vec![v(20250103000000)]);

        let plan = revert_plan(&registry, &registry, Some(v(20250101000000)))
            .expect("plan must build");
        assert_eq!(plan, vec![v(20250103000000), v(20250102000000)]);

        let plan = revert_plan(&registry, &[], None).expect("plan must build");
        assert!(plan.is_empty());
    }

    #[test]
    fn revert_plan_rejects_unapplied_target() {
        let registry = [v(20250101000000), v(20250102000000), v(20250103000000)];
        assert_eq!(
            revert_plan(&registry, &registry[..1], Some(v(20250102000000))),
            Err(PlanError::TargetNotApplied {
                target: v(20250102000000)
            })
        );
    }
}

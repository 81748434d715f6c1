#![forbid(unsafe_code)]

pub(super) const SQL: &str = r#"

        CREATE TABLE departments (
          department_id TEXT PRIMARY KEY,
          department_name TEXT NOT NULL,
          code TEXT NOT NULL,
          description TEXT,
          location TEXT,
          is_active INTEGER NOT NULL DEFAULT 1,
          manager_id TEXT,
          created_at_ms INTEGER NOT NULL,
          updated_at_ms INTEGER
        );

        CREATE TABLE users (
          user_id TEXT PRIMARY KEY,
          email TEXT NOT NULL,
          password_hash TEXT,
          full_name TEXT,
          department_id TEXT NOT NULL
            REFERENCES departments(department_id) ON DELETE RESTRICT,
          is_active INTEGER NOT NULL DEFAULT 1,
          last_login_at_ms INTEGER,
          created_at_ms INTEGER NOT NULL
        );

        CREATE TABLE roles (
          role_id TEXT PRIMARY KEY,
          role_name TEXT NOT NULL,
          description TEXT,
          is_active INTEGER NOT NULL DEFAULT 1,
          created_at_ms INTEGER NOT NULL
        );

        CREATE TABLE groups (
          group_id TEXT PRIMARY KEY,
          group_name TEXT NOT NULL,
          description TEXT,
          is_active INTEGER NOT NULL DEFAULT 1,
          created_at_ms INTEGER NOT NULL
        );

        CREATE TABLE user_roles (
          user_role_id TEXT PRIMARY KEY,
          user_id TEXT NOT NULL REFERENCES users(user_id) ON DELETE CASCADE,
          role_id TEXT NOT NULL REFERENCES roles(role_id) ON DELETE CASCADE,
          assigned_at_ms INTEGER NOT NULL
        );

        CREATE TABLE user_groups (
          user_group_id TEXT PRIMARY KEY,
          user_id TEXT NOT NULL REFERENCES users(user_id) ON DELETE CASCADE,
          group_id TEXT NOT NULL REFERENCES groups(group_id) ON DELETE CASCADE,
          joined_at_ms INTEGER NOT NULL
        );

        CREATE TABLE group_roles (
          group_role_id TEXT PRIMARY KEY,
          group_id TEXT NOT NULL REFERENCES groups(group_id) ON DELETE CASCADE,
          role_id TEXT NOT NULL REFERENCES roles(role_id) ON DELETE CASCADE,
          assigned_at_ms INTEGER NOT NULL
        );

        CREATE TABLE teams (
          team_id TEXT PRIMARY KEY,
          team_code TEXT NOT NULL,
          team_name TEXT NOT NULL,
          department_id TEXT NOT NULL
            REFERENCES departments(department_id) ON DELETE RESTRICT,
          trade TEXT,
          team_leader_name TEXT,
          is_active INTEGER NOT NULL DEFAULT 1,
          created_at_ms INTEGER NOT NULL
        );

        -- Member rows start denormalized (department/email copied in); the
        -- team_structure migration replaces that with a team FK.
        CREATE TABLE team_members (
          team_member_id TEXT PRIMARY KEY,
          user_id TEXT NOT NULL REFERENCES users(user_id) ON DELETE CASCADE,
          employee_code TEXT NOT NULL,
          employee_name TEXT NOT NULL,
          department TEXT,
          email TEXT,
          mobile_number TEXT,
          is_active INTEGER NOT NULL DEFAULT 1
        );
"#;

#![forbid(unsafe_code)]

use super::Migration;
use crate::SchemaError;
use rusqlite::Transaction;

pub(super) fn migration() -> Migration {
    Migration {
        version: 20260119175902,
        name: "issue_comments",
        up,
        down,
    }
}

// Threaded discussion per quality issue, with soft deletes and automatic
// status-change entries. Notifications are rebuilt around it: a recipient
// FK, links to the issue and comment that triggered them, and a direct
// route into the app.
fn up(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        CREATE TABLE issue_comments (
          comment_id INTEGER PRIMARY KEY AUTOINCREMENT,
          quality_issue_id INTEGER NOT NULL
            REFERENCES quality_issues(quality_issue_id) ON DELETE CASCADE,
          parent_comment_id INTEGER
            REFERENCES issue_comments(comment_id) ON DELETE CASCADE,
          author_id TEXT REFERENCES users(user_id) ON DELETE SET NULL,
          body TEXT NOT NULL,
          is_deleted INTEGER NOT NULL DEFAULT 0,
          is_status_update INTEGER NOT NULL DEFAULT 0,
          related_status TEXT,
          created_at_ms INTEGER NOT NULL,
          updated_at_ms INTEGER
        );
        CREATE INDEX ix_issue_comments_issue ON issue_comments(quality_issue_id);

        CREATE TABLE notifications_new (
          notification_id INTEGER PRIMARY KEY AUTOINCREMENT,
          recipient_id TEXT NOT NULL
            REFERENCES users(user_id) ON DELETE CASCADE,
          title TEXT NOT NULL,
          body TEXT,
          notification_type TEXT,
          related_issue_id INTEGER
            REFERENCES quality_issues(quality_issue_id) ON DELETE SET NULL,
          related_comment_id INTEGER
            REFERENCES issue_comments(comment_id) ON DELETE SET NULL,
          link TEXT,
          is_read INTEGER NOT NULL DEFAULT 0,
          created_at_ms INTEGER NOT NULL
        );
        INSERT INTO notifications_new
          (notification_id, recipient_id, title, body, notification_type,
           is_read, created_at_ms)
        SELECT notification_id, user_id, title, body, notification_type,
               is_read, created_at_ms
        FROM notifications;
        DROP TABLE notifications;
        ALTER TABLE notifications_new RENAME TO notifications;
        CREATE INDEX ix_notifications_recipient ON notifications(recipient_id);
"#,
    )?;
    Ok(())
}

fn down(tx: &Transaction<'_>) -> Result<(), SchemaError> {
    tx.execute_batch(
        r#"
        CREATE TABLE notifications_old (
          notification_id INTEGER PRIMARY KEY AUTOINCREMENT,
          user_id TEXT NOT NULL REFERENCES users(user_id) ON DELETE CASCADE,
          title TEXT NOT NULL,
          body TEXT,
          notification_type TEXT,
          reference_id TEXT,
          is_read INTEGER NOT NULL DEFAULT 0,
          created_at_ms INTEGER NOT NULL
        );
        INSERT INTO notifications_old
          (notification_id, user_id, title, body, notification_type,
           is_read, created_at_ms)
        SELECT notification_id, recipient_id, title, body, notification_type,
               is_read, created_at_ms
        FROM notifications;
        DROP TABLE notifications;
        ALTER TABLE notifications_old RENAME TO notifications;
        CREATE INDEX ix_notifications_user ON notifications(user_id);

        DROP TABLE issue_comments;
"#,
    )?;
    Ok(())
}

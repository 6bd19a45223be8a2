// Settings repository
// Key-value persistence backing the stored client state

use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use super::models::Setting;
use super::DatabaseManager;

impl DatabaseManager {
    /// Get a single setting by key
    pub fn get_setting(&self, key: &str) -> Result<Option<String>> {
        self.with_connection(|conn| get_setting_impl(conn, key))
    }

    /// Full row for a key, including its type tag and update time
    pub fn get_setting_entry(&self, key: &str) -> Result<Option<Setting>> {
        self.with_connection(|conn| get_setting_entry_impl(conn, key))
    }

    /// Set a single setting
    pub fn set_setting(&self, key: &str, value: &str, value_type: &str) -> Result<()> {
        self.with_connection(|conn| set_setting_impl(conn, key, value, value_type))
    }

    /// Delete a setting by key. Missing keys are ignored.
    pub fn delete_setting(&self, key: &str) -> Result<()> {
        self.with_connection(|conn| delete_settings_impl(conn, &[key]))
    }

    /// Delete several keys in one transaction
    pub fn delete_settings(&self, keys: &[&str]) -> Result<()> {
        self.with_connection(|conn| delete_settings_impl(conn, keys))
    }
}

fn get_setting_impl(conn: &Connection, key: &str) -> Result<Option<String>> {
    let mut stmt = conn.prepare(
        "SELECT value FROM settings WHERE key = ?"
    ).context("Failed to prepare get_setting query")?;

    let result = stmt.query_row(params![key], |row| row.get(0));

    match result {
        Ok(value) => Ok(Some(value)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e).context("Failed to get setting"),
    }
}

fn get_setting_entry_impl(conn: &Connection, key: &str) -> Result<Option<Setting>> {
    let mut stmt = conn.prepare(
        "SELECT key, value, value_type, updated_at FROM settings WHERE key = ?"
    ).context("Failed to prepare get_setting_entry query")?;

    let result = stmt.query_row(params![key], |row| {
        Ok(Setting {
            key: row.get(0)?,
            value: row.get(1)?,
            value_type: row.get(2)?,
            updated_at: row.get(3)?,
        })
    });

    match result {
        Ok(setting) => Ok(Some(setting)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e).context("Failed to get setting entry"),
    }
}

fn set_setting_impl(conn: &Connection, key: &str, value: &str, value_type: &str) -> Result<()> {
    conn.execute(
        r#"
        INSERT INTO settings (key, value, value_type, updated_at)
        VALUES (?1, ?2, ?3, datetime('now'))
        ON CONFLICT(key) DO UPDATE SET
            value = excluded.value,
            value_type = excluded.value_type,
            updated_at = datetime('now')
        "#,
        params![key, value, value_type],
    ).context("Failed to set setting")?;

    Ok(())
}

fn delete_settings_impl(conn: &Connection, keys: &[&str]) -> Result<()> {
    let tx = conn.unchecked_transaction()
        .context("Failed to begin transaction")?;

    for key in keys {
        tx.execute("DELETE FROM settings WHERE key = ?", params![key])
            .context("Failed to delete setting")?;
    }

    tx.commit().context("Failed to commit settings deletion")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    fn create_test_db() -> (TempDir, DatabaseManager) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = DatabaseManager::new(db_path).unwrap();
        (dir, db)
    }

    #[test]
    fn test_set_and_get_setting() {
        let (_dir, db) = create_test_db();

        db.set_setting("test_key", "test_value", "string").unwrap();
        let value = db.get_setting("test_key").unwrap();
        assert_eq!(value, Some("test_value".to_string()));

        db.set_setting("test_key", "{}", "json").unwrap();
        let entry = db.get_setting_entry("test_key").unwrap().unwrap();
        assert_eq!(entry.value, "{}");
        assert_eq!(entry.value_type, "json");
    }

    #[test]
    fn test_delete_settings() {
        let (_dir, db) = create_test_db();

        db.set_setting("a", "1", "string").unwrap();
        db.set_setting("b", "2", "string").unwrap();
        db.set_setting("c", "3", "string").unwrap();

        db.delete_settings(&["a", "b", "missing"]).unwrap();
        db.delete_setting("missing").unwrap();

        assert!(db.get_setting("a").unwrap().is_none());
        assert!(db.get_setting("b").unwrap().is_none());
        assert_eq!(db.get_setting("c").unwrap().as_deref(), Some("3"));
    }
}

use rusqlite::{params, Connection};

use crate::db::DatabaseError;

/// Get a setting by key. Returns None if not set.
pub fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>, DatabaseError> {
    let mut stmt = conn.prepare("SELECT value FROM settings WHERE key = ?1")?;
    match stmt.query_row([key], |row| row.get::<_, String>(0)) {
        Ok(val) => Ok(Some(val)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(DatabaseError::from(e)),
    }
}

/// Set a setting (upsert).
pub fn put_setting(conn: &Connection, key: &str, value: &str) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO settings (key, value, updated_at)
         VALUES (?1, ?2, datetime('now'))
         ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
        params![key, value],
    )?;
    Ok(())
}

/// Delete a setting.
pub fn delete_setting(conn: &Connection, key: &str) -> Result<(), DatabaseError> {
    conn.execute("DELETE FROM settings WHERE key = ?1", [key])?;
    Ok(())
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::sqlite::open_memory_database;

    fn setup_db() -> Connection {
        open_memory_database().expect("in-memory DB should open")
    }

    #[test]
    fn get_unset_key_returns_none() {
        let conn = setup_db();
        assert!(get_setting(&conn, "clinicName").unwrap().is_none());
    }

    #[test]
    fn put_and_get_setting() {
        let conn = setup_db();
        put_setting(&conn, "clinicName", "Abdullah Dental Care").unwrap();
        assert_eq!(
            get_setting(&conn, "clinicName").unwrap().as_deref(),
            Some("Abdullah Dental Care")
        );
    }

    #[test]
    fn put_overwrites_existing_value() {
        let conn = setup_db();
        put_setting(&conn, "exchangeRate", "278").unwrap();
        put_setting(&conn, "exchangeRate", "285.5").unwrap();
        assert_eq!(
            get_setting(&conn, "exchangeRate").unwrap().as_deref(),
            Some("285.5")
        );
    }

    #[test]
    fn delete_removes_key() {
        let conn = setup_db();
        put_setting(&conn, "exchangeRateManual", "true").unwrap();
        delete_setting(&conn, "exchangeRateManual").unwrap();
        assert!(get_setting(&conn, "exchangeRateManual").unwrap().is_none());
    }

    #[test]
    fn rate_triple_round_trips() {
        let conn = setup_db();
        put_setting(&conn, "exchangeRate", "281.47").unwrap();
        put_setting(&conn, "exchangeRateUpdated", "2026-08-08T09:30:00+00:00").unwrap();
        put_setting(&conn, "exchangeRateManual", "false").unwrap();

        assert_eq!(
            get_setting(&conn, "exchangeRate").unwrap().as_deref(),
            Some("281.47")
        );
        assert_eq!(
            get_setting(&conn, "exchangeRateUpdated").unwrap().as_deref(),
            Some("2026-08-08T09:30:00+00:00")
        );
        assert_eq!(
            get_setting(&conn, "exchangeRateManual").unwrap().as_deref(),
            Some("false")
        );
    }
}

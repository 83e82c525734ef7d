use std::time::Duration;

use crate::models::{hash_password, Shift, User};
use sqlx::{sqlite::SqlitePoolOptions, Result, SqlitePool};

/// The fixed list of regional branch codes; each doubles as the shared
/// login username for that branch.
pub const BRANCH_CODES: [&str; 15] = [
    "RFT", "DCN", "TVK", "LAL", "MCR", "TMF", "CNT", "MNP", "TKI", "PBR", "JKM", "ALR", "UPM",
    "TRR", "KNM",
];

/// Connects to the SQLite database at `db_url`, returning a connection pool
/// for accessing it. The pool replaces the per-operation open/close of the
/// original single-user model.
pub async fn connect_sqlx(db_url: &str) -> SqlitePool {
    SqlitePoolOptions::new()
        .acquire_timeout(Duration::from_secs(2))
        .idle_timeout(Duration::from_secs(30))
        .max_connections(8)
        .connect(db_url)
        .await
        .expect("Could not connect to the database")
}

pub struct ShiftDatabase {
    sqlx_db: SqlitePool,
}

impl ShiftDatabase {
    pub fn new(sqlx_db: SqlitePool) -> Self {
        ShiftDatabase { sqlx_db }
    }

    /// Creates both tables if absent and seeds the fixed credential list:
    /// one "user" account per branch code plus the "admin" account, each
    /// with its seed-convention password digest. Safe to re-run: existing
    /// usernames are skipped, never surfaced as errors.
    pub async fn bootstrap(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT UNIQUE,
                password TEXT,
                role TEXT
            )
            "#,
        )
        .execute(&self.sqlx_db)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS shifts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT,
                branch TEXT,
                staff_name TEXT,
                staff_number TEXT,
                mobile_phone TEXT,
                shift_timing TEXT,
                timestamp DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&self.sqlx_db)
        .await?;

        for branch in BRANCH_CODES {
            let seed = format!("{}123", branch.to_lowercase());
            self.seed_user(branch, &hash_password(&seed), "user").await?;
        }
        self.seed_user("admin", &hash_password("admin123"), "admin")
            .await?;
        Ok(())
    }

    // INSERT OR IGNORE keeps bootstrap idempotent: a username that already
    // exists is left untouched instead of raising a constraint violation.
    async fn seed_user(&self, username: &str, password: &str, role: &str) -> Result<()> {
        sqlx::query("INSERT OR IGNORE INTO users (username, password, role) VALUES (?, ?, ?)")
            .bind(username)
            .bind(password)
            .bind(role)
            .execute(&self.sqlx_db)
            .await?;
        Ok(())
    }

    /// Exact, case-sensitive credential lookup by username and password
    /// digest. Absence means the credentials do not match; it is not an
    /// error.
    pub async fn find_user(&self, username: &str, password_hash: &str) -> Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password, role
            FROM users
            WHERE username = ? AND password = ?
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .fetch_optional(&self.sqlx_db)
        .await
    }

    pub async fn count_users(&self) -> Result<i64> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.sqlx_db)
            .await?;
        Ok(row.0)
    }

    /// Persists one shift row; `timestamp` is assigned by the database.
    /// No uniqueness constraint applies: identical submissions become
    /// distinct rows.
    pub async fn insert_shift(
        &self,
        date: &str,
        branch: &str,
        staff_name: &str,
        staff_number: &str,
        mobile_phone: &str,
        shift_timing: &str,
    ) -> Result<Shift> {
        sqlx::query_as::<_, Shift>(
            r#"
            INSERT INTO shifts (date, branch, staff_name, staff_number, mobile_phone, shift_timing)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, date, branch, staff_name, staff_number, mobile_phone, shift_timing, timestamp
            "#,
        )
        .bind(date)
        .bind(branch)
        .bind(staff_name)
        .bind(staff_number)
        .bind(mobile_phone)
        .bind(shift_timing)
        .fetch_one(&self.sqlx_db)
        .await
    }

    /// Every stored shift, ordered by date then branch, both ascending.
    /// Dates are ISO strings so lexicographic order is chronological.
    pub async fn list_shifts(&self) -> Result<Vec<Shift>> {
        sqlx::query_as::<_, Shift>(
            r#"
            SELECT id, date, branch, staff_name, staff_number, mobile_phone, shift_timing, timestamp
            FROM shifts
            ORDER BY date, branch
            "#,
        )
        .fetch_all(&self.sqlx_db)
        .await
    }
}

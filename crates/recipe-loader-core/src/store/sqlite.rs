// crates/recipe-loader-core/src/store/sqlite.rs
use super::value::{nutrients_from_row, nutrients_to_sql};
use super::{RecipeStore, RECIPES_TABLE};
use crate::error::Result;
use crate::model::{Recipe, StoredRecipe};
use rusqlite::{params, Connection};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

// `serves` has no declared type so SQLite keeps text and numbers as given.
const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS recipes (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    cuisine     TEXT,
    title       TEXT,
    rating      REAL,
    prep_time   REAL,
    cook_time   REAL,
    total_time  REAL,
    description TEXT,
    nutrients   TEXT,
    serves
)";

const INSERT: &str = "INSERT INTO recipes
    (cuisine, title, rating, prep_time, cook_time, total_time, description, nutrients, serves)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";

const SELECT_ALL: &str = "SELECT
    id, cuisine, title, rating, prep_time, cook_time, total_time, description, nutrients, serves
    FROM recipes ORDER BY id";

#[derive(Debug)]
enum Location {
    File(PathBuf),
    InMemory,
}

/// [`RecipeStore`] backed by a SQLite database.
pub struct SqliteStore {
    connection: Connection,
    location: Location,
}

impl SqliteStore {
    /// Open (or create) a SQLite database at the specified file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let connection = Connection::open(path)?;
        Ok(Self {
            connection,
            location: Location::File(path.to_path_buf()),
        })
    }

    /// Create an in-memory SQLite database. Its contents vanish with the store.
    pub fn in_memory() -> Result<Self> {
        let connection = Connection::open_in_memory()?;
        Ok(Self {
            connection,
            location: Location::InMemory,
        })
    }

    pub fn url(&self) -> String {
        match &self.location {
            Location::InMemory => "sqlite::memory:".to_string(),
            Location::File(path) => format!("sqlite:{}", path.display()),
        }
    }
}

impl fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteStore")
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}

impl RecipeStore for SqliteStore {
    fn ensure_schema(&mut self) -> Result<()> {
        self.connection.execute(CREATE_TABLE, [])?;
        debug!(table = RECIPES_TABLE, url = %self.url(), "schema ensured");
        Ok(())
    }

    fn insert_batch(&mut self, recipes: &[Recipe]) -> Result<usize> {
        // Rolled back on drop unless committed below.
        let tx = self.connection.transaction()?;
        let mut inserted = 0;
        {
            let mut stmt = tx.prepare_cached(INSERT)?;
            for r in recipes {
                let nutrients = nutrients_to_sql(r.nutrients.as_ref())?;
                inserted += stmt.execute(params![
                    r.cuisine,
                    r.title,
                    r.rating,
                    r.prep_time,
                    r.cook_time,
                    r.total_time,
                    r.description,
                    nutrients,
                    r.serves,
                ])?;
            }
        }
        tx.commit()?;
        debug!(rows = inserted, "transaction committed");
        Ok(inserted)
    }

    fn count(&self) -> Result<usize> {
        let n: i64 = self
            .connection
            .query_row("SELECT COUNT(*) FROM recipes", [], |row| row.get(0))?;
        Ok(n as usize)
    }

    fn fetch_all(&self) -> Result<Vec<StoredRecipe>> {
        let mut stmt = self.connection.prepare(SELECT_ALL)?;
        let rows = stmt.query_map([], |row| {
            Ok(StoredRecipe {
                id: row.get(0)?,
                recipe: Recipe {
                    cuisine: row.get(1)?,
                    title: row.get(2)?,
                    rating: row.get(3)?,
                    prep_time: row.get(4)?,
                    cook_time: row.get(5)?,
                    total_time: row.get(6)?,
                    description: row.get(7)?,
                    nutrients: nutrients_from_row(row, 8)?,
                    serves: row.get(9)?,
                },
            })
        })?;
        let out = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(out)
    }
}

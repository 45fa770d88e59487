use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use log::{debug, warn};

use crate::error::{Result, ScoreError};

const MAGIC: &[u8; 4] = b"SIS1";
pub const NAME_LEN: usize = 3;
// Each entry: 3 bytes name + 4 bytes score = 7 bytes
const ENTRY_SIZE: usize = NAME_LEN + 4;
// Header: 4 magic + 1 entry count
const HEADER_SIZE: usize = MAGIC.len() + 1;

/// Three uppercase-style characters identifying a leaderboard entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Name([u8; NAME_LEN]);

impl Name {
    pub const DEFAULT: Name = Name(*b"AAA");

    /// Accepts any printable ASCII, since older files may hold names not typed on this screen.
    pub fn from_bytes(bytes: [u8; NAME_LEN]) -> Option<Self> {
        bytes.iter().all(u8::is_ascii_graphic).then_some(Name(bytes))
    }

    pub fn get(&self, idx: usize) -> Option<u8> {
        self.0.get(idx).copied()
    }

    pub fn set(&mut self, idx: usize, c: u8) {
        if let Some(slot) = self.0.get_mut(idx) {
            *slot = c;
        }
    }

    pub fn as_bytes(&self) -> &[u8; NAME_LEN] {
        &self.0
    }
}

impl Default for Name {
    fn default() -> Self {
        Name::DEFAULT
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreRecord {
    pub name: Name,
    pub score: u32,
}

impl ScoreRecord {
    pub fn new(name: Name, score: u32) -> Self {
        ScoreRecord { name, score }
    }
}

/// Leaderboard of at most [`HighScoreTable::CAPACITY`] records, best first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HighScoreTable {
    entries: Vec<ScoreRecord>,
}

impl HighScoreTable {
    pub const CAPACITY: usize = 7;

    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from records in any order, keeping the best ones.
    pub fn from_records(records: Vec<ScoreRecord>) -> Self {
        let mut table = HighScoreTable { entries: records };
        table.normalize();
        table
    }

    pub fn entries(&self) -> &[ScoreRecord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lowest(&self) -> Option<&ScoreRecord> {
        self.entries.last()
    }

    /// Whether any of `scores` earns a place on the board.
    ///
    /// A board with free slots accepts everything, zero included. A full board
    /// needs a score strictly above its current lowest.
    pub fn is_new_record(&self, scores: impl IntoIterator<Item = u32>) -> bool {
        if self.entries.len() < Self::CAPACITY {
            return true;
        }
        match self.lowest() {
            Some(lowest) => scores.into_iter().any(|s| s > lowest.score),
            None => true,
        }
    }

    /// Adds the records and drops whatever falls off the bottom.
    pub fn commit(&mut self, records: impl IntoIterator<Item = ScoreRecord>) {
        self.entries.extend(records);
        self.normalize();
    }

    fn normalize(&mut self) {
        // Stable: ties keep insertion order
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(Self::CAPACITY);
    }

    fn decode(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_SIZE {
            return Err(ScoreError::Truncated { expected: HEADER_SIZE, found: data.len() });
        }
        if &data[0..4] != MAGIC {
            return Err(ScoreError::BadMagic);
        }
        let count = data[4] as usize;
        let expected = HEADER_SIZE + count * ENTRY_SIZE;
        if data.len() < expected {
            return Err(ScoreError::Truncated { expected, found: data.len() });
        }

        let mut records = Vec::with_capacity(count);
        for chunk in data[HEADER_SIZE..expected].chunks_exact(ENTRY_SIZE) {
            let name_bytes = [chunk[0], chunk[1], chunk[2]];
            let name = Name::from_bytes(name_bytes).ok_or(ScoreError::InvalidName(name_bytes))?;
            let score = u32::from_le_bytes([chunk[3], chunk[4], chunk[5], chunk[6]]);
            records.push(ScoreRecord { name, score });
        }
        Ok(Self::from_records(records))
    }

    fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(HEADER_SIZE + self.entries.len() * ENTRY_SIZE);
        buf.extend_from_slice(MAGIC);
        buf.push(self.entries.len() as u8);
        for entry in &self.entries {
            buf.extend_from_slice(entry.name.as_bytes());
            buf.extend_from_slice(&entry.score.to_le_bytes());
        }
        buf
    }
}

/// Where the leaderboard lives between sessions.
pub trait ScoreStore {
    fn load(&self) -> Result<HighScoreTable>;
    fn save(&self, table: &HighScoreTable) -> Result<()>;
}

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }
}

impl ScoreStore for FileStore {
    fn load(&self) -> Result<HighScoreTable> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            // First run: nothing saved yet
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(HighScoreTable::new()),
            Err(e) => return Err(e.into()),
        };
        HighScoreTable::decode(&data)
    }

    fn save(&self, table: &HighScoreTable) -> Result<()> {
        fs::write(&self.path, table.encode())?;
        debug!("saved {} high scores to {}", table.len(), self.path.display());
        Ok(())
    }
}

/// Loads the board, falling back to an empty one when the store fails.
pub fn load_or_empty(store: &dyn ScoreStore) -> HighScoreTable {
    store.load().unwrap_or_else(|e| {
        warn!("Couldn't load high scores: {e}");
        HighScoreTable::new()
    })
}

/// Saves the board; a failed write is logged and the in-memory board is kept as is.
pub fn persist(store: &dyn ScoreStore, table: &HighScoreTable) {
    if let Err(e) = store.save(table) {
        warn!("Couldn't save high scores: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> Name {
        let b = s.as_bytes();
        Name::from_bytes([b[0], b[1], b[2]]).unwrap()
    }

    fn full_table() -> HighScoreTable {
        let scores = [500, 450, 400, 350, 300, 250, 200];
        HighScoreTable::from_records(
            scores.iter().map(|&s| ScoreRecord::new(name("AAA"), s)).collect(),
        )
    }

    fn assert_sorted(table: &HighScoreTable) {
        assert!(table.entries().windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn partial_table_accepts_any_score() {
        let mut table = HighScoreTable::new();
        assert!(table.is_new_record([0]));
        for s in [900, 800, 700, 600, 500, 400] {
            table.commit([ScoreRecord::new(name("XYZ"), s)]);
            assert!(table.is_new_record([0, 0]));
        }
        assert_eq!(table.len(), 6);
    }

    #[test]
    fn full_table_needs_strictly_higher_score() {
        let table = full_table();
        assert!(!table.is_new_record([150]));
        assert!(!table.is_new_record([200]));
        assert!(table.is_new_record([201]));
        // Either player qualifying is enough
        assert!(table.is_new_record([10, 225]));
    }

    #[test]
    fn commit_into_empty_table() {
        let mut table = HighScoreTable::new();
        assert!(table.is_new_record([100, 50]));
        table.commit([
            ScoreRecord::new(name("ANN"), 50),
            ScoreRecord::new(name("BOB"), 100),
        ]);
        assert_eq!(
            table.entries(),
            &[ScoreRecord::new(name("BOB"), 100), ScoreRecord::new(name("ANN"), 50)]
        );
    }

    #[test]
    fn commit_drops_lowest_when_full() {
        let mut table = full_table();
        table.commit([ScoreRecord::new(name("ZZZ"), 225)]);
        assert_eq!(table.len(), HighScoreTable::CAPACITY);
        assert!(table.entries().contains(&ScoreRecord::new(name("ZZZ"), 225)));
        assert!(table.entries().iter().all(|e| e.score != 200));
        assert_sorted(&table);
    }

    #[test]
    fn commit_two_records_into_full_table_trims_both() {
        let mut table = full_table();
        table.commit([
            ScoreRecord::new(name("ZZZ"), 225),
            ScoreRecord::new(name("YYY"), 10),
        ]);
        assert_eq!(table.len(), HighScoreTable::CAPACITY);
        assert_eq!(table.lowest().map(|e| e.score), Some(225));
    }

    #[test]
    fn repeated_commits_keep_invariants() {
        let mut table = HighScoreTable::new();
        for i in 0..40u32 {
            let score = (i * 7919) % 1000;
            table.commit([ScoreRecord::new(name("QRS"), score), ScoreRecord::new(name("TUV"), i)]);
            assert!(table.len() <= HighScoreTable::CAPACITY);
            assert_sorted(&table);
        }
    }

    #[test]
    fn ties_keep_insertion_order() {
        let mut table = HighScoreTable::new();
        table.commit([ScoreRecord::new(name("ONE"), 10)]);
        table.commit([ScoreRecord::new(name("TWO"), 10)]);
        assert_eq!(table.entries()[0].name, name("ONE"));
        assert_eq!(table.entries()[1].name, name("TWO"));
    }

    #[test]
    fn file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("scores.bin"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn file_store_saves_and_loads() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("scores.bin"));
        let table = full_table();
        store.save(&table).unwrap();
        assert_eq!(store.load().unwrap(), table);
    }

    #[test]
    fn file_store_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.bin");
        let store = FileStore::new(&path);

        fs::write(&path, b"NOPE\x00").unwrap();
        assert!(matches!(store.load(), Err(ScoreError::BadMagic)));

        fs::write(&path, b"SIS1\x02ABC").unwrap();
        assert!(matches!(store.load(), Err(ScoreError::Truncated { expected: 19, found: 8 })));

        fs::write(&path, b"SIS1\x01A\nC\x01\x00\x00\x00").unwrap();
        assert!(matches!(store.load(), Err(ScoreError::InvalidName(_))));

        // Broken file is treated as an empty board
        assert!(load_or_empty(&store).is_empty());
    }

    #[test]
    fn oversized_file_is_trimmed_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.bin");
        let mut data = b"SIS1\x09".to_vec();
        for s in 1..=9u32 {
            data.extend_from_slice(b"KLM");
            data.extend_from_slice(&s.to_le_bytes());
        }
        fs::write(&path, data).unwrap();

        let table = FileStore::new(&path).load().unwrap();
        assert_eq!(table.len(), HighScoreTable::CAPACITY);
        assert_eq!(table.entries()[0].score, 9);
        assert_eq!(table.lowest().map(|e| e.score), Some(3));
    }

    #[test]
    fn persist_swallows_write_errors() {
        let dir = tempfile::tempdir().unwrap();
        // A directory can't be written as a file
        let store = FileStore::new(dir.path());
        persist(&store, &full_table());
    }
}

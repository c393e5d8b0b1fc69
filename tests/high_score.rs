//! High score persistence tests.

use std::fs;
use std::io;
use std::sync::{Arc, Mutex};

use bjtable::{
    Card, FileStore, HighScore, HighScoreStore, StackedSource, StoreError, Suit, Table,
    TableOptions,
};
use tempfile::TempDir;

fn winning_round() -> StackedSource {
    StackedSource::new(
        vec![
            Card::new(Suit::Hearts, 10),
            Card::new(Suit::Clubs, 9),
            Card::new(Suit::Spades, 10),
            Card::new(Suit::Diamonds, 8),
        ],
        11,
    )
}

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn missing_file_reads_as_no_record() {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::new(dir.path().join("highscore.txt"));

    assert!(store.read().unwrap().is_none());
    assert_eq!(HighScore::load(store, 1000).value(), 1000);
}

#[test]
fn record_is_trimmed_and_parsed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("highscore.txt");
    fs::write(&path, "  2500\n").unwrap();

    let store = FileStore::new(&path);
    assert_eq!(HighScore::load(store, 1000).value(), 2500);
}

#[test]
fn malformed_record_falls_back_to_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("highscore.txt");
    fs::write(&path, "lots of money").unwrap();

    let mut store = FileStore::new(&path);
    assert!(matches!(store.read(), Err(StoreError::Malformed(_))));
    assert_eq!(HighScore::load(store, 1000).value(), 1000);

    fs::write(&path, "-40").unwrap();
    assert_eq!(HighScore::load(FileStore::new(&path), 1000).value(), 1000);
}

#[test]
fn unreadable_record_falls_back_to_default() {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::new(dir.path());

    assert!(matches!(store.read(), Err(StoreError::Io(_))));
    assert_eq!(HighScore::load(store, 1000).value(), 1000);
}

#[test]
fn new_record_is_written_through() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("highscore.txt");
    let mut high_score = HighScore::load(FileStore::new(&path), 1000);

    assert!(!high_score.record_if_higher(900));
    assert!(!path.exists());

    assert!(high_score.record_if_higher(1200));
    assert_eq!(fs::read_to_string(&path).unwrap(), "1200");

    assert!(!high_score.record_if_higher(1100));
    assert_eq!(high_score.value(), 1200);
    assert_eq!(fs::read_to_string(&path).unwrap(), "1200");
}

#[test]
fn high_score_carries_across_sessions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("highscore.txt");

    let mut first = Table::new(
        TableOptions::default(),
        winning_round(),
        FileStore::new(&path),
    );
    first.deal().unwrap();
    first.stand().unwrap();
    assert_eq!(first.high_score(), 1100);
    drop(first);

    let second = Table::new(
        TableOptions::default(),
        winning_round(),
        FileStore::new(&path),
    );
    assert_eq!(second.bankroll().amount(), 1000);
    assert_eq!(second.high_score(), 1100);
}

#[test]
fn failed_write_is_logged_and_play_continues() {
    let dir = TempDir::new().unwrap();
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut table = Table::new(
            TableOptions::default(),
            winning_round(),
            FileStore::new(dir.path()),
        );
        table.deal().unwrap();
        table.stand().unwrap();

        assert_eq!(table.bankroll().amount(), 1100);
        assert_eq!(table.high_score(), 1100);
        table.continue_round().unwrap();
    });

    let logs = buffer.contents();
    assert!(logs.contains("could not read high score"));
    assert!(logs.contains("could not persist high score"));
}

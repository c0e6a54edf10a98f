//! Integration tests for a lobby across open/drop cycles.

use std::fs;

use lobby_core::{BufferSink, Lobby, LobbyConfig, SortMode};

fn config(dir: &std::path::Path) -> LobbyConfig {
    LobbyConfig::builder().data_dir(dir).build()
}

fn snapshot(lobby: &Lobby<BufferSink>) -> Vec<(String, i64, u64)> {
    lobby
        .store()
        .iter()
        .map(|p| (p.name().to_string(), p.score(), p.unique_id()))
        .collect()
}

#[test]
fn queue_survives_restart_in_order() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut lobby = Lobby::open("host", config(dir.path()), BufferSink::new());
        for name in ["carol", "amy", "bob", "amy"] {
            lobby.append_player(name);
        }
        lobby.add_score("amy", 25);
        lobby.add_score("bob", -5);
        lobby.remove_head();
    }

    let lobby = Lobby::open("host", config(dir.path()), BufferSink::new());
    let pairs: Vec<(String, i64)> = snapshot(&lobby)
        .into_iter()
        .map(|(name, score, _)| (name, score))
        .collect();
    assert_eq!(
        pairs,
        [
            ("amy".to_string(), 25),
            ("bob".to_string(), -5),
            ("amy".to_string(), 0)
        ]
    );
}

#[test]
fn score_only_sort_keeps_positions() {
    let dir = tempfile::tempdir().unwrap();
    let mut lobby = Lobby::open(
        "host",
        LobbyConfig::builder()
            .data_dir(dir.path())
            .sort_mode(SortMode::ScoresOnly)
            .build(),
        BufferSink::new(),
    );
    for (name, score) in [("A", 30), ("B", 10), ("C", 20)] {
        lobby.append_player(name);
        lobby.add_score(name, score);
    }
    let before = snapshot(&lobby);

    lobby.sort_by_score();

    let after = snapshot(&lobby);
    let scores: Vec<i64> = after.iter().map(|(_, score, _)| *score).collect();
    assert_eq!(scores, [10, 20, 30]);
    for (old, new) in before.iter().zip(&after) {
        assert_eq!(old.0, new.0);
        assert_eq!(old.2, new.2);
    }
}

#[test]
fn other_owners_are_independent() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut lobby = Lobby::open("alice", config(dir.path()), BufferSink::new());
        lobby.append_player("x");
    }
    {
        let lobby = Lobby::open("bob", config(dir.path()), BufferSink::new());
        assert!(lobby.store().is_empty());
    }
    assert_eq!(fs::read_to_string(dir.path().join("alice.txt")).unwrap(), "x 0\n");
    assert_eq!(fs::read_to_string(dir.path().join("bob.txt")).unwrap(), "");
}

#[test]
fn windows_1251_files_load() {
    let dir = tempfile::tempdir().unwrap();
    // "Иван 3" in windows-1251
    fs::write(
        dir.path().join("host.txt"),
        [0xC8, 0xE2, 0xE0, 0xED, b' ', b'3', b'\n'],
    )
    .unwrap();

    let lobby = Lobby::open(
        "host",
        LobbyConfig::builder()
            .data_dir(dir.path())
            .encoding("windows-1251")
            .build(),
        BufferSink::new(),
    );
    let player = lobby.store().get(0).unwrap();
    assert_eq!(player.name(), "Иван");
    assert_eq!(player.score(), 3);
}

#[test]
fn blank_lines_do_not_drop_later_players() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("host.txt");
    fs::write(&path, "amy 1\n\nbob 2\ncarol 3\n").unwrap();

    {
        let lobby = Lobby::open("host", config(dir.path()), BufferSink::new());
        assert_eq!(lobby.store().len(), 3);
    }

    assert_eq!(fs::read_to_string(&path).unwrap(), "amy 1\nbob 2\ncarol 3\n");
}

#[test]
fn wrongly_encoded_owner_file_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("host.txt");
    // "Иван 3" in windows-1251, opened with the default UTF-8 setting
    let legacy = [0xC8, 0xE2, 0xE0, 0xED, b' ', b'3', b'\n'];
    fs::write(&path, legacy).unwrap();

    {
        let lobby = Lobby::open("host", config(dir.path()), BufferSink::new());
        assert!(lobby.store().is_empty());
        assert!(lobby.sink().contains("unable to load data"));
    }

    assert_eq!(fs::read(&path).unwrap(), legacy);
}

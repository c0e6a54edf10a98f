//! Interactive lobby session.
//!
//! Reads menu numbers and their arguments as whitespace tokens and
//! dispatches them to the [`Lobby`]. End of input behaves like choosing
//! Exit, so the lobby is always saved.

use std::io::BufRead;

use lobby_core::{AdminGate, Lobby, LobbyConfig, OutputSink, TextCodec};
use tracing::{debug, error, info};

use crate::instructions::INSTRUCTIONS;
use crate::menu::MenuCommand;
use crate::prompter::TokenReader;

pub struct Session<R, S: OutputSink> {
    lobby: Lobby<S>,
    input: TokenReader<R>,
    admin: AdminGate,
    is_admin: bool,
}

impl<R: BufRead, S: OutputSink> Session<R, S> {
    /// Ask for the owner name, open that owner's lobby and check the admin
    /// password.
    ///
    /// Returns `None` if input ends before an owner name is given.
    pub fn start(config: LobbyConfig, input: R, mut sink: S) -> Option<Self> {
        let mut input = TokenReader::new(input);

        sink.write_prompt("Enter your player name: ");
        let owner = input.next_token()?;

        let codec = TextCodec::for_label(&config.encoding).unwrap_or_default();
        let admin = AdminGate::new(config.password_path(), codec);
        let mut lobby = Lobby::open(owner.as_str(), config, sink);
        lobby
            .sink_mut()
            .write_line(&format!("Welcome {} to the waiting lobby", owner));

        lobby.sink_mut().write_prompt("Enter the admin password: ");
        let is_admin = match input.next_token() {
            Some(password) => admin.verify(&password),
            None => false,
        };
        info!(
            "Session started for {} ({})",
            owner,
            if is_admin { "admin" } else { "user" }
        );

        Some(Self {
            lobby,
            input,
            admin,
            is_admin,
        })
    }

    /// Run the menu loop until Exit or end of input. The lobby is saved when
    /// the session is dropped.
    pub fn run(mut self) {
        while self.step() {}
        debug!("Session for {} finished", self.lobby.owner());
    }

    /// Show the lobby and menu, then read and execute one command.
    ///
    /// Returns `false` once the session should end.
    pub fn step(&mut self) -> bool {
        self.show_menu();

        let Some(choice) = self.input.next_parsed::<i32>() else {
            return false;
        };
        match choice.and_then(|code| MenuCommand::from_code(code, self.is_admin)) {
            Some(command) => self.execute(command),
            None => {
                self.input.discard_pending();
                self.lobby
                    .sink_mut()
                    .write_notice("Error. There is no such option");
                true
            }
        }
    }

    fn show_menu(&mut self) {
        self.lobby.display_players();
        let sink = self.lobby.sink_mut();
        sink.write_line("");
        sink.write_line("Waiting lobby");
        for line in MenuCommand::menu_lines(self.is_admin) {
            sink.write_line(&line);
        }
        sink.write_line("");
        sink.write_prompt("Choose: ");
    }

    fn execute(&mut self, command: MenuCommand) -> bool {
        debug!("Executing {:?}", command);
        match command {
            MenuCommand::ShowInstructions => {
                for line in INSTRUCTIONS {
                    self.lobby.sink_mut().write_line(line);
                }
            }
            MenuCommand::Exit => {
                self.lobby.sink_mut().write_line("See you next time");
                return false;
            }
            MenuCommand::AddPlayer => {
                let Some(name) = self.prompt_token("Name the new player: ") else {
                    return false;
                };
                self.lobby.append_player(&name);
            }
            MenuCommand::SendToGame => {
                self.lobby.remove_head();
            }
            MenuCommand::ClearLobby => {
                self.lobby.clear();
            }
            MenuCommand::ShowStatistics => {
                self.lobby.show_statistics();
            }
            MenuCommand::SortByScore => self.lobby.sort_by_score(),
            MenuCommand::FindPlayer => {
                let Some(name) = self.prompt_token("Enter the player name: ") else {
                    return false;
                };
                self.lobby.find_by_name(&name);
            }
            MenuCommand::AddScore => {
                let Some(name) =
                    self.prompt_token("Enter the player name and the number of points: ")
                else {
                    return false;
                };
                match self.input.next_parsed::<i64>() {
                    None => return false,
                    Some(None) => {
                        self.input.discard_pending();
                        self.lobby
                            .sink_mut()
                            .write_notice("Error. The number of points must be an integer");
                    }
                    Some(Some(points)) => {
                        self.lobby.add_score(&name, points);
                    }
                }
            }
            MenuCommand::RemovePlayer => {
                let Some(name) = self.prompt_token("Enter the player name: ") else {
                    return false;
                };
                self.lobby.remove_by_name(&name);
            }
            MenuCommand::SaveToFile => {
                let Some(file_name) = self.prompt_token("Enter a file name to save the lobby to: ")
                else {
                    return false;
                };
                self.lobby.save_to_file(&file_name);
            }
            MenuCommand::LoadFromFile => {
                let Some(file_name) =
                    self.prompt_token("Enter a file name to load the lobby from: ")
                else {
                    return false;
                };
                self.lobby.load_from_file(&file_name);
            }
            MenuCommand::ChangePassword => {
                let Some(password) = self.prompt_token("Enter the new admin password: ") else {
                    return false;
                };
                match self.admin.change_password(&password) {
                    Ok(()) => self.lobby.sink_mut().write_line("Admin password changed"),
                    Err(e) => {
                        error!("Failed to change admin password: {}", e);
                        self.lobby
                            .sink_mut()
                            .write_notice("Failed to change the admin password");
                    }
                }
            }
        }
        true
    }

    fn prompt_token(&mut self, prompt: &str) -> Option<String> {
        self.lobby.sink_mut().write_prompt(prompt);
        self.input.next_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lobby_core::BufferSink;
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;

    fn run_script(dir: &Path, script: &str) -> BufferSink {
        let mut sink = BufferSink::new();
        let config = LobbyConfig::builder().data_dir(dir).build();
        if let Some(session) = Session::start(config, Cursor::new(script.to_string()), &mut sink) {
            session.run();
        }
        sink
    }

    #[test]
    fn test_admin_session_sorts_scores_only() {
        let dir = tempfile::tempdir().unwrap();
        let sink = run_script(
            dir.path(),
            "owner\nadmin\n1\nbob\n1 amy\n7 bob 40\n5\n9 backup\n0\n",
        );

        assert!(sink.contains("Score of bob updated to 40"));
        assert!(sink.contains("Lobby saved to backup.txt"));
        assert!(sink.contains("See you next time"));
        assert_eq!(
            fs::read_to_string(dir.path().join("backup.txt")).unwrap(),
            "bob 0\namy 40\n"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("owner.txt")).unwrap(),
            "bob 0\namy 40\n"
        );
    }

    #[test]
    fn test_user_cannot_run_admin_commands() {
        let dir = tempfile::tempdir().unwrap();
        let sink = run_script(dir.path(), "owner\nwrong\n1 amy\n8 amy\n0\n");

        assert!(sink.contains("There is no such option"));
        assert!(!sink.lines().iter().any(|l| l.starts_with("5 - ")));
        // the rest of the rejected line is dropped, so "amy" is not read as a command
        assert_eq!(
            fs::read_to_string(dir.path().join("owner.txt")).unwrap(),
            "amy 0\n"
        );
    }

    #[test]
    fn test_admin_menu_is_listed() {
        let dir = tempfile::tempdir().unwrap();
        let sink = run_script(dir.path(), "owner admin 0");
        assert!(sink.contains("11 - Change the admin password"));
    }

    #[test]
    fn test_end_of_input_saves() {
        let dir = tempfile::tempdir().unwrap();
        run_script(dir.path(), "owner\nadmin\n1 amy\n1 bob\n2\n");
        assert_eq!(
            fs::read_to_string(dir.path().join("owner.txt")).unwrap(),
            "bob 0\n"
        );
    }

    #[test]
    fn test_lobby_is_listed_before_each_menu() {
        let dir = tempfile::tempdir().unwrap();
        let sink = run_script(dir.path(), "owner admin 1 amy 1 bob 7 amy 5 0");

        let position = |line: &str| sink.lines().iter().position(|l| l == line).unwrap();
        assert!(position("Nobody is in the lobby") < position("amy - 0"));
        assert!(position("amy - 0") < position("bob - 0"));
        assert!(position("bob - 0") < position("amy - 5"));
        assert_eq!(
            sink.lines().iter().filter(|l| *l == "Currently in the lobby:").count(),
            4
        );
    }

    #[test]
    fn test_no_owner_name_does_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let sink = run_script(dir.path(), "");
        assert_eq!(sink.lines(), ["Enter your player name: "]);
        assert!(!dir.path().join("admin_password.txt").exists());
    }

    #[test]
    fn test_notices_for_empty_lobby_and_missing_player() {
        let dir = tempfile::tempdir().unwrap();
        let sink = run_script(dir.path(), "owner admin 2 8 zed 1 amy 6 zed 6 amy 0");
        assert!(sink.contains("The lobby is empty!"));
        assert!(sink.contains("Player zed not found"));
        assert!(sink.contains("Player amy found!"));
    }

    #[test]
    fn test_invalid_points() {
        let dir = tempfile::tempdir().unwrap();
        let sink = run_script(dir.path(), "owner\nadmin\n1 amy\n7 amy lots\n0\n");
        assert!(sink.contains("must be an integer"));
        assert_eq!(
            fs::read_to_string(dir.path().join("owner.txt")).unwrap(),
            "amy 0\n"
        );
    }

    #[test]
    fn test_change_password() {
        let dir = tempfile::tempdir().unwrap();
        run_script(dir.path(), "owner admin 11 s3cret 0");
        assert_eq!(
            fs::read_to_string(dir.path().join("admin_password.txt")).unwrap(),
            "s3cret"
        );

        let sink = run_script(dir.path(), "owner admin 5 0");
        assert!(sink.contains("There is no such option"));
    }

    #[test]
    fn test_statistics_and_load() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("saved.txt"), "zed 3\nyan 1\n").unwrap();
        let sink = run_script(dir.path(), "owner admin 1 amy 10 saved 4 3 0");

        assert!(sink.contains("Lobby loaded from saved.txt"));
        assert!(sink.contains("Players: 2"));
        assert_eq!(
            fs::read_to_string(dir.path().join("owner.stats")).unwrap(),
            "2\n0\n0\n0\n"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("owner.txt")).unwrap(),
            ""
        );
    }

    #[test]
    fn test_instructions() {
        let dir = tempfile::tempdir().unwrap();
        let sink = run_script(dir.path(), "owner x -1 0");
        assert!(sink.contains("Have a good game!"));
    }
}

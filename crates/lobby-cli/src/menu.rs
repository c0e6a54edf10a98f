//! Numbered menu of lobby commands.

use strum::{EnumIter, FromRepr, IntoEnumIterator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, EnumIter)]
#[repr(i8)]
pub enum MenuCommand {
    ShowInstructions = -1,
    Exit = 0,
    AddPlayer = 1,
    SendToGame = 2,
    ClearLobby = 3,
    ShowStatistics = 4,
    SortByScore = 5,
    FindPlayer = 6,
    AddScore = 7,
    RemovePlayer = 8,
    SaveToFile = 9,
    LoadFromFile = 10,
    ChangePassword = 11,
}

impl MenuCommand {
    pub fn code(self) -> i8 {
        self as i8
    }

    /// Resolve a typed menu number. Admin-only entries resolve only for admins.
    pub fn from_code(code: i32, is_admin: bool) -> Option<Self> {
        let code = i8::try_from(code).ok()?;
        Self::from_repr(code).filter(|command| is_admin || !command.requires_admin())
    }

    pub fn requires_admin(self) -> bool {
        self.code() >= Self::SortByScore.code()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ShowInstructions => "Short instructions",
            Self::Exit => "Exit",
            Self::AddPlayer => "Add a player to the queue",
            Self::SendToGame => "Send the first player into the game",
            Self::ClearLobby => "Clear the lobby",
            Self::ShowStatistics => "Show lobby statistics",
            Self::SortByScore => "Sort players by score",
            Self::FindPlayer => "Find a player by name",
            Self::AddScore => "Give points to a player",
            Self::RemovePlayer => "Remove a player by name",
            Self::SaveToFile => "Save the lobby to a file",
            Self::LoadFromFile => "Load the lobby from a file",
            Self::ChangePassword => "Change the admin password",
        }
    }

    /// Menu lines visible to a user with the given rights.
    pub fn menu_lines(is_admin: bool) -> Vec<String> {
        Self::iter()
            .filter(|command| is_admin || !command.requires_admin())
            .map(|command| format!("{} - {}", command.code(), command.label()))
            .collect()
    }
}

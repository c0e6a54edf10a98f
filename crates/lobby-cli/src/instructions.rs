/// Help text for menu entry -1.
pub const INSTRUCTIONS: &[&str] = &[
    "This program simulates players waiting in a game lobby.",
    "A user can add players to the lobby, send them into the game or clear the lobby completely.",
    "An admin can also give players bonus points, find a player, sort players by score,",
    "remove a player by name, save or load the lobby and change the admin password.",
    "To get admin rights, enter the admin password at startup.",
    "Leave with 0 so your data is saved; closing the window skips saving.",
    "Your lobby is saved in a file named after your player name, so remember it.",
    "Entry 1 adds a new player at the end of the queue, entry 2 sends the first player into the game.",
    "Entry 7 (admin) gives points: first the player name, then the number of points.",
    "Have a good game!",
];

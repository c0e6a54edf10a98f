use crate::player::Player;

/// Parse `name score` lines.
///
/// Blank lines are skipped. Stops at the first other line that is not
/// exactly a name followed by a signed integer; records before it are kept.
pub fn parse_records(content: &str) -> Vec<(String, i64)> {
    let mut records = Vec::new();
    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let (Some(name), Some(score), None) = (fields.next(), fields.next(), fields.next()) else {
            break;
        };
        let Ok(score) = score.parse::<i64>() else {
            break;
        };
        records.push((name.to_string(), score));
    }
    records
}

/// One `name score` line per player, each newline-terminated.
pub fn format_records<'a>(players: impl IntoIterator<Item = &'a Player>) -> String {
    players
        .into_iter()
        .map(|p| format!("{} {}\n", p.name(), p.score()))
        .collect()
}

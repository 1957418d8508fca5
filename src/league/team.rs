#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub name: String,
    pub players: Vec<String>,
}

impl Team {
    pub fn new(name: impl Into<String>, players: Vec<String>) -> Self {
        Self {
            name: name.into(),
            players,
        }
    }

    /// A team with `count` players named `Player1`..`PlayerN`
    pub fn with_numbered_players(name: impl Into<String>, count: usize) -> Self {
        let players = (1..=count).map(|i| format!("Player{}", i)).collect();
        Self::new(name, players)
    }
}

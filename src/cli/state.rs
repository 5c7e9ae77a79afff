/// States of the menu loop. Every action returns to `Menu`; `Exit` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Menu,
    AddTransaction,
    SetBudget,
    Summary,
    Report,
    Exit,
}

/// Numbered menu entries, in display order.
pub const MENU_ITEMS: [(&str, &str); 5] = [
    ("1", "Add a transaction (Income/Expense)"),
    ("2", "Set monthly budget"),
    ("3", "View financial summary"),
    ("4", "Generate visual report (Charts)"),
    ("5", "Exit"),
];

impl MenuState {
    /// Maps a menu choice to its state; `None` for anything else.
    pub fn from_choice(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuState::AddTransaction),
            "2" => Some(MenuState::SetBudget),
            "3" => Some(MenuState::Summary),
            "4" => Some(MenuState::Report),
            "5" => Some(MenuState::Exit),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, MenuState::Exit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choices_map_to_states() {
        assert_eq!(MenuState::from_choice("1"), Some(MenuState::AddTransaction));
        assert_eq!(MenuState::from_choice(" 2 "), Some(MenuState::SetBudget));
        assert_eq!(MenuState::from_choice("3"), Some(MenuState::Summary));
        assert_eq!(MenuState::from_choice("4"), Some(MenuState::Report));
        assert_eq!(MenuState::from_choice("5"), Some(MenuState::Exit));
    }

    #[test]
    fn anything_else_is_invalid() {
        for raw in ["", "0", "6", "one", "1 2", "exit"] {
            assert_eq!(MenuState::from_choice(raw), None, "input {raw:?}");
        }
    }

    #[test]
    fn only_exit_is_terminal() {
        assert!(MenuState::Exit.is_terminal());
        assert!(!MenuState::Menu.is_terminal());
        assert!(!MenuState::Report.is_terminal());
    }
}

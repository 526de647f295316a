//! Menu mapping from console lines to supply commands.

use crate::types::{SupplyAction, Variant};

/// What the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Quit,
    Act(SupplyAction),
}

/// One menu line: the key to type, its label and the command it triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub key: u8,
    pub label: &'static str,
    pub command: MenuCommand,
}

const BASIC_MENU: [MenuEntry; 3] = [
    MenuEntry {
        key: 1,
        label: "Play piece (take from the front of the queue)",
        command: MenuCommand::Act(SupplyAction::Play),
    },
    MenuEntry {
        key: 2,
        label: "Insert new piece (append to the back of the queue)",
        command: MenuCommand::Act(SupplyAction::Insert),
    },
    MenuEntry {
        key: 0,
        label: "Quit",
        command: MenuCommand::Quit,
    },
];

const ADVANCED_MENU: [MenuEntry; 4] = [
    MenuEntry {
        key: 1,
        label: "Play piece (take from the front of the queue)",
        command: MenuCommand::Act(SupplyAction::Play),
    },
    MenuEntry {
        key: 2,
        label: "Reserve piece (queue -> reserve stack)",
        command: MenuCommand::Act(SupplyAction::Reserve),
    },
    MenuEntry {
        key: 3,
        label: "Use reserved piece (take from the reserve stack)",
        command: MenuCommand::Act(SupplyAction::UseReserved),
    },
    MenuEntry {
        key: 0,
        label: "Quit",
        command: MenuCommand::Quit,
    },
];

/// Menu for a variant, in display order.
pub fn menu_entries(variant: Variant) -> &'static [MenuEntry] {
    match variant {
        Variant::Basic => &BASIC_MENU,
        Variant::Advanced => &ADVANCED_MENU,
    }
}

/// Map one input line to a command.
///
/// Surrounding whitespace is ignored. Returns `None` for anything that is not
/// one of the variant's menu keys; the caller should report an invalid entry
/// and show the menu again.
pub fn parse_command(line: &str, variant: Variant) -> Option<MenuCommand> {
    let key: u8 = line.trim().parse().ok()?;
    menu_entries(variant)
        .iter()
        .find(|entry| entry.key == key)
        .map(|entry| entry.command)
}

/// The valid keys for a variant, ascending, e.g. `"0, 1, 2 or 3"`.
pub fn valid_keys_hint(variant: Variant) -> String {
    let mut keys: Vec<u8> = menu_entries(variant).iter().map(|e| e.key).collect();
    keys.sort_unstable();
    match keys.split_last() {
        Some((last, [])) => last.to_string(),
        Some((last, rest)) => {
            let head: Vec<String> = rest.iter().map(u8::to_string).collect();
            format!("{} or {}", head.join(", "), last)
        }
        None => String::new(),
    }
}

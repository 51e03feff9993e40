use crate::controller::SupplyMode;
use crate::errors::ControllerError;
use crate::piece::Piece;
use std::fmt;

/// A state transition requested by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play,
    Reserve,
    UseReserved,
    ManualEnqueue,
    ManualDequeue,
    Quit,
}

impl Command {
    /// Maps a raw menu choice to a command under the given mode.
    ///
    /// The two modes keep the original menus: supply mode offers
    /// 1 play / 2 reserve / 3 use reserved / 0 quit, manual mode offers
    /// 1 dequeue / 2 enqueue / 0 quit. Anything else — including non-numeric
    /// input — is rejected without touching any state, so the driver can
    /// simply re-prompt.
    pub fn parse_menu_choice(mode: SupplyMode, input: &str) -> Result<Self, ControllerError> {
        let choice = input.trim();
        let command = match (mode, choice) {
            (_, "0") => Command::Quit,
            (SupplyMode::Supply, "1") => Command::Play,
            (SupplyMode::Supply, "2") => Command::Reserve,
            (SupplyMode::Supply, "3") => Command::UseReserved,
            (SupplyMode::Manual, "1") => Command::ManualDequeue,
            (SupplyMode::Manual, "2") => Command::ManualEnqueue,
            _ => return Err(ControllerError::InvalidCommand(choice.to_owned())),
        };
        Ok(command)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Command::Play => "play",
            Command::Reserve => "reserve",
            Command::UseReserved => "use reserved",
            Command::ManualEnqueue => "enqueue",
            Command::ManualDequeue => "dequeue",
            Command::Quit => "quit",
        };
        f.write_str(name)
    }
}

/// What a successfully dispatched command did, for the driver to render.
///
/// Every removed, added, and displaced piece is reported so the driver can
/// echo the transition the way the original menu did (piece out, refill in).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Front of the queue was played; `refill` was appended at the tail.
    Played { piece: Piece, refill: Piece },

    /// Front of the queue moved to the reserve stack; `refill` was appended.
    Reserved { piece: Piece, refill: Piece },

    /// Top of the stack was consumed; `refill` was appended to the queue,
    /// displacing the queue front when the queue was already full.
    UsedReserve {
        piece: Piece,
        refill: Piece,
        displaced: Option<Piece>,
    },

    /// Manual mode: a freshly generated piece was appended.
    Enqueued { piece: Piece },

    /// Manual mode: the front piece was removed, with no refill.
    Dequeued { piece: Piece },

    /// No state change; the driver should end its loop.
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supply_menu_mapping() {
        let mode = SupplyMode::Supply;
        assert_eq!(Command::parse_menu_choice(mode, "1"), Ok(Command::Play));
        assert_eq!(Command::parse_menu_choice(mode, "2"), Ok(Command::Reserve));
        assert_eq!(Command::parse_menu_choice(mode, "3"), Ok(Command::UseReserved));
        assert_eq!(Command::parse_menu_choice(mode, "0"), Ok(Command::Quit));
    }

    #[test]
    fn test_manual_menu_mapping() {
        let mode = SupplyMode::Manual;
        assert_eq!(Command::parse_menu_choice(mode, "1"), Ok(Command::ManualDequeue));
        assert_eq!(Command::parse_menu_choice(mode, "2"), Ok(Command::ManualEnqueue));
        assert_eq!(Command::parse_menu_choice(mode, "0"), Ok(Command::Quit));

        // Option 3 only exists on the supply menu.
        assert_eq!(
            Command::parse_menu_choice(mode, "3"),
            Err(ControllerError::InvalidCommand("3".into()))
        );
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(
            Command::parse_menu_choice(SupplyMode::Supply, " 1\n"),
            Ok(Command::Play)
        );
    }

    #[test]
    fn test_garbage_is_rejected() {
        for garbage in ["", "abc", "-1", "10", "1 2", "²"] {
            let result = Command::parse_menu_choice(SupplyMode::Supply, garbage);
            assert_eq!(
                result,
                Err(ControllerError::InvalidCommand(garbage.trim().to_owned()))
            );
        }
    }
}

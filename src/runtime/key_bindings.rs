use crate::runtime::command::Command;
use crate::state::Direction;
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

#[derive(Default)]
pub struct KeyBindings {
    bindings: HashMap<KeyBinding, Command>,
}

impl KeyBindings {
    pub fn new() -> Self {
        let mut manager = Self::default();
        manager.install_defaults();
        manager
    }

    pub fn bind(&mut self, key: KeyBinding, command: Command) {
        self.bindings.insert(key, command);
    }

    pub fn unbind(&mut self, key: &KeyBinding) {
        self.bindings.remove(key);
    }

    pub fn resolve(&self, event: KeyEvent) -> Option<Command> {
        self.bindings.get(&KeyBinding::from_event(event)).copied()
    }

    fn install_defaults(&mut self) {
        self.bind(KeyBinding::ctrl(KeyCode::Char('c')), Command::Exit);
        self.bind(KeyBinding::key(KeyCode::Char('q')), Command::Exit);

        self.bind(KeyBinding::key(KeyCode::Up), Command::Navigate(Direction::Up));
        self.bind(
            KeyBinding::key(KeyCode::Down),
            Command::Navigate(Direction::Down),
        );
        self.bind(
            KeyBinding::key(KeyCode::Left),
            Command::Navigate(Direction::Left),
        );
        self.bind(
            KeyBinding::key(KeyCode::Right),
            Command::Navigate(Direction::Right),
        );
        self.bind(KeyBinding::key(KeyCode::Enter), Command::Confirm);
        self.bind(KeyBinding::key(KeyCode::Char(' ')), Command::Confirm);
        self.bind(KeyBinding::key(KeyCode::Esc), Command::Back);
        self.bind(KeyBinding::key(KeyCode::Backspace), Command::Back);

        self.bind(KeyBinding::key(KeyCode::Char('p')), Command::TogglePause);
        self.bind(KeyBinding::key(KeyCode::Char('s')), Command::ToggleStandard);
        self.bind(KeyBinding::key(KeyCode::Char('f')), Command::ToggleBlessing);
        self.bind(
            KeyBinding::key(KeyCode::Char('c')),
            Command::ToggleConstruction,
        );
        self.bind(KeyBinding::key(KeyCode::Char('n')), Command::NextSettlement);
        self.bind(KeyBinding::key(KeyCode::Char('u')), Command::NextUnit);
        self.bind(KeyBinding::key(KeyCode::Char('e')), Command::EndTurn);
        self.bind(KeyBinding::key(KeyCode::Char('a')), Command::Attack);
        self.bind(KeyBinding::key(KeyCode::Char('x')), Command::ClickSettlement);
        self.bind(KeyBinding::key(KeyCode::Char('i')), Command::Investigate);
        self.bind(KeyBinding::ctrl(KeyCode::Char('d')), Command::DumpSnapshot);
    }
}

use eframe::egui::{Key, Modifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    // File Menu
    NewProject,
    OpenProject,
    SaveProject,
    CloseProject,
    OpenFile,
    Quit,

    // Edit Menu
    Settings,

    // Game Menu
    RunGame,

    // View Menu
    ResetLayout,

    // Windows Menu
    CloseAllEditors,
}

pub struct Command {
    pub id: CommandId,
    pub text: &'static str,
    pub shortcut: Option<(Modifiers, Key)>,
    pub shortcut_text: &'static str,
}

pub struct CommandRegistry {
    pub commands: Vec<Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        let commands = vec![
            // File Menu
            Command {
                id: CommandId::NewProject,
                text: "New Project...",
                shortcut: Some((Modifiers::COMMAND, Key::N)),
                shortcut_text: "Ctrl+N",
            },
            Command {
                id: CommandId::OpenProject,
                text: "Open Project...",
                shortcut: Some((Modifiers::COMMAND, Key::O)),
                shortcut_text: "Ctrl+O",
            },
            Command {
                id: CommandId::SaveProject,
                text: "Save Project",
                shortcut: Some((Modifiers::COMMAND, Key::S)),
                shortcut_text: "Ctrl+S",
            },
            Command {
                id: CommandId::CloseProject,
                text: "Close Project",
                shortcut: None,
                shortcut_text: "",
            },
            Command {
                id: CommandId::OpenFile,
                text: "Open File...",
                shortcut: Some((Modifiers::COMMAND | Modifiers::SHIFT, Key::O)),
                shortcut_text: "Ctrl+Shift+O",
            },
            Command {
                id: CommandId::Quit,
                text: "Quit",
                shortcut: Some((Modifiers::COMMAND, Key::Q)),
                shortcut_text: "Ctrl+Q",
            },
            // Edit Menu
            Command {
                id: CommandId::Settings,
                text: "Settings...",
                shortcut: None,
                shortcut_text: "",
            },
            // Game Menu
            Command {
                id: CommandId::RunGame,
                text: "Run Game",
                shortcut: Some((Modifiers::NONE, Key::F5)),
                shortcut_text: "F5",
            },
            // View Menu
            Command {
                id: CommandId::ResetLayout,
                text: "Reset Layout",
                shortcut: None,
                shortcut_text: "",
            },
            // Windows Menu
            Command {
                id: CommandId::CloseAllEditors,
                text: "Close All",
                shortcut: Some((Modifiers::COMMAND | Modifiers::SHIFT, Key::W)),
                shortcut_text: "Ctrl+Shift+W",
            },
        ];
        Self { commands }
    }

    pub fn find(&self, id: CommandId) -> Option<&Command> {
        self.commands.iter().find(|&cmd| cmd.id == id)
    }
}

use std::collections::HashMap;
use std::sync::Arc;

use eframe::egui::{Pos2, Vec2};
use hscommon::error::CommonError;
use hscommon::files::FileKind;

use super::editor::EditorWindow;
use super::editors;

/// Everything an editor constructor receives: the asset identity and bytes,
/// the previously serialized UI state (layout restore only), and where the
/// window should appear.
pub struct EditorArgs {
    pub path: String,
    pub bytes: Vec<u8>,
    pub state: Option<Vec<u8>>,
    pub position: Pos2,
    pub size: Option<Vec2>,
}

pub type EditorConstructor =
    Box<dyn Fn(EditorArgs) -> Result<Box<dyn EditorWindow>, CommonError> + Send + Sync>;

/// Mapping from asset kind to editor constructor, populated once during
/// application setup and treated as an immutable lookup table afterwards.
#[derive(Default)]
pub struct EditorRegistry {
    constructors: HashMap<FileKind, EditorConstructor>,
}

impl EditorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, kind: FileKind, constructor: EditorConstructor) {
        self.constructors.insert(kind, constructor);
    }

    pub fn constructor(&self, kind: FileKind) -> Option<&EditorConstructor> {
        self.constructors.get(&kind)
    }

    /// The full built-in editor set.
    pub fn with_builtin() -> Arc<Self> {
        fn boxed<E, F>(build: F) -> EditorConstructor
        where
            E: EditorWindow + 'static,
            F: Fn(EditorArgs) -> Result<E, CommonError> + Send + Sync + 'static,
        {
            Box::new(move |args| Ok(Box::new(build(args)?) as Box<dyn EditorWindow>))
        }

        let mut registry = Self::new();
        registry.register(FileKind::Text, boxed(editors::text::TextEditor::new));
        registry.register(FileKind::Audio, boxed(editors::audio::AudioEditor::new));
        registry.register(FileKind::Palette, boxed(editors::palette::PaletteEditor::new));
        registry.register(
            FileKind::PaletteMap,
            boxed(editors::palette_map::PaletteMapEditor::new),
        );
        registry.register(FileKind::Dc6, boxed(editors::dc6::Dc6Editor::new));
        registry.register(FileKind::Dcc, boxed(editors::dcc::DccEditor::new));
        registry.register(FileKind::Cof, boxed(editors::cof::CofEditor::new));
        registry.register(FileKind::Dt1, boxed(editors::dt1::Dt1Editor::new));
        registry.register(FileKind::Ds1, boxed(editors::ds1::Ds1Editor::new));
        registry.register(FileKind::Font, boxed(editors::font::FontEditor::new));
        registry.register(
            FileKind::StringTable,
            boxed(editors::string_table::StringTableEditor::new),
        );
        registry.register(
            FileKind::FontTable,
            boxed(editors::font_table::FontTableEditor::new),
        );
        Arc::new(registry)
    }
}

use std::path::Path;
use std::sync::{Arc, Mutex};
use std::thread;

use eframe::egui::{Context, Pos2, Vec2};
use log::{info, warn};

use hscommon::error::CommonError;
use hscommon::files::{classify, FileSource};
use hscommon::project::{WindowSnapshot, WorkspaceLayout};

use super::editor::EditorWindow;
use super::registry::{EditorArgs, EditorRegistry};
use crate::shortcut::ShortcutDispatcher;

type EditorList = Arc<Mutex<Vec<Box<dyn EditorWindow>>>>;

/// Owns the open editor windows: dedupes opens by asset path, drives the
/// per-frame build/cleanup pass, tracks which editor has focus, and keeps
/// the shortcut dispatcher's window scope in sync with focus changes.
///
/// The editor sequence is shared with background restore workers; the lock
/// is held only around append/remove/snapshot, never across an editor's
/// build, so a build step may re-enter the manager through the app's
/// deferred command queue without deadlocking.
pub struct WindowManager {
    editors: EditorList,
    focused: Option<String>,
    registry: Arc<EditorRegistry>,
    source: Arc<dyn FileSource>,
    errors: Mutex<Vec<String>>,
}

impl WindowManager {
    pub fn new(registry: Arc<EditorRegistry>, source: Arc<dyn FileSource>) -> Self {
        Self {
            editors: Arc::new(Mutex::new(Vec::new())),
            focused: None,
            registry,
            source,
            errors: Mutex::new(Vec::new()),
        }
    }

    /// Opens an editor for `path`, or brings the already open one to the
    /// front. Every failure is queued as a user-visible message and leaves
    /// the open set unchanged.
    pub fn open_editor(&self, path: &Path, position: Pos2) {
        let key = path.to_string_lossy().into_owned();
        {
            let mut editors = self.editors.lock().unwrap();
            if let Some(editor) = editors.iter_mut().find(|editor| editor.path() == key) {
                editor.bring_to_front();
                return;
            }
        }

        match construct_editor(&self.registry, &self.source, &key, None, position, None) {
            Ok(editor) => {
                info!("opened editor for {key}");
                self.editors.lock().unwrap().push(editor);
            }
            Err(err) => self.report(format!("Cannot open {key}: {err}")),
        }
    }

    /// Reconstructs editors from a persisted layout. Construction can be
    /// slow, so each entry is built off-thread and appended when ready; the
    /// first frame renders without waiting. Only used on a freshly emptied
    /// manager, so there is no dedupe here. An entry that fails to restore
    /// is logged and skipped; the rest proceed.
    pub fn restore_layout(&self, layout: &WorkspaceLayout, ctx: &Context) {
        for snapshot in layout.windows.clone() {
            let registry = Arc::clone(&self.registry);
            let source = Arc::clone(&self.source);
            let editors = Arc::clone(&self.editors);
            let ctx = ctx.clone();
            thread::spawn(move || {
                let state = (!snapshot.state.is_empty()).then(|| snapshot.state.clone());
                let position = Pos2::new(snapshot.x, snapshot.y);
                let size = Vec2::new(snapshot.width, snapshot.height);
                match construct_editor(&registry, &source, &snapshot.path, state, position, Some(size))
                {
                    Ok(editor) => {
                        editors.lock().unwrap().push(editor);
                        ctx.request_repaint();
                    }
                    Err(err) => warn!("skipping window restore for {}: {err}", snapshot.path),
                }
            });
        }
    }

    /// Builds every open editor once. Editors that reported themselves
    /// closed since the last pass are cleaned up and dropped here — the only
    /// removal path. The first editor observed gaining focus wins the
    /// handover: the dispatcher's window scope is cleared, the editor
    /// registers its own shortcuts, and every other editor's focus flag is
    /// reset.
    pub fn render_frame(&mut self, ctx: &Context, shortcuts: &ShortcutDispatcher) {
        let taken = std::mem::take(&mut *self.editors.lock().unwrap());
        let mut kept: Vec<Box<dyn EditorWindow>> = Vec::with_capacity(taken.len());
        let mut newly_focused: Option<String> = None;

        for mut editor in taken {
            if !editor.is_visible() {
                editor.cleanup();
                info!("closed editor for {}", editor.path());
                if self.focused.as_deref() == Some(editor.path()) {
                    self.focused = None;
                }
                continue;
            }

            let had_focus = editor.has_focus();
            editor.show(ctx);
            if newly_focused.is_none() && !had_focus && editor.has_focus() {
                shortcuts.unregister_window_shortcuts();
                editor.register_shortcuts(shortcuts);
                newly_focused = Some(editor.path().to_owned());
            }
            kept.push(editor);
        }

        if let Some(path) = newly_focused {
            for editor in &mut kept {
                if editor.path() != path {
                    editor.defocus();
                }
            }
            self.focused = Some(path);
        }

        // Editors appended while the sequence was taken out (background
        // layout restore) land after the survivors, preserving order.
        let mut editors = self.editors.lock().unwrap();
        let appended = std::mem::take(&mut *editors);
        *editors = kept;
        editors.extend(appended);
    }

    /// Cleans up and drops every open editor. Persisted layout is untouched;
    /// callers snapshot first if they want to keep it.
    pub fn close_all(&mut self) {
        let mut editors = self.editors.lock().unwrap();
        for editor in editors.iter_mut() {
            editor.cleanup();
        }
        editors.clear();
        drop(editors);
        self.focused = None;
    }

    /// Ordered (path, state, position, size) tuples for every open editor.
    pub fn snapshot_layout(&self) -> WorkspaceLayout {
        let editors = self.editors.lock().unwrap();
        WorkspaceLayout {
            windows: editors
                .iter()
                .map(|editor| {
                    let (position, size) = editor.window_rect();
                    WindowSnapshot {
                        path: editor.path().to_owned(),
                        state: editor.serialize_state(),
                        x: position.x,
                        y: position.y,
                        width: size.x,
                        height: size.y,
                    }
                })
                .collect(),
        }
    }

    pub fn bring_to_front(&self, path: &str) {
        if let Some(editor) = self
            .editors
            .lock()
            .unwrap()
            .iter_mut()
            .find(|editor| editor.path() == path)
        {
            editor.bring_to_front();
        }
    }

    /// Ordered (title, path) pairs for the windows menu.
    pub fn open_list(&self) -> Vec<(String, String)> {
        self.editors
            .lock()
            .unwrap()
            .iter()
            .map(|editor| (editor.title().to_owned(), editor.path().to_owned()))
            .collect()
    }

    pub fn focused_path(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    pub fn len(&self) -> usize {
        self.editors.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drains the queued user-visible failure messages.
    pub fn take_errors(&self) -> Vec<String> {
        std::mem::take(&mut *self.errors.lock().unwrap())
    }

    fn report(&self, message: String) {
        warn!("{message}");
        self.errors.lock().unwrap().push(message);
    }

    #[cfg(test)]
    fn push_editor(&self, editor: Box<dyn EditorWindow>) {
        self.editors.lock().unwrap().push(editor);
    }
}

fn construct_editor(
    registry: &EditorRegistry,
    source: &Arc<dyn FileSource>,
    path: &str,
    state: Option<Vec<u8>>,
    position: Pos2,
    size: Option<Vec2>,
) -> Result<Box<dyn EditorWindow>, CommonError> {
    let path_ref = Path::new(path);
    let bytes = source.load(path_ref)?;
    let kind = classify(path_ref, &bytes)?;
    let constructor = registry
        .constructor(kind)
        .ok_or_else(|| CommonError::NoEditor(kind.name().to_string()))?;
    constructor(EditorArgs {
        path: path.to_owned(),
        bytes,
        state,
        position,
        size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortcut::KeyAction;
    use eframe::egui::{Key, Modifiers};
    use hscommon::files::MemoryFileSource;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::{Duration, Instant};

    struct StubHandles {
        visible: Arc<AtomicBool>,
        focused: Arc<AtomicBool>,
        /// Makes the stub report a focus gain during its next `show`, the
        /// way a real window picks up a pointer press mid-build.
        gain_focus: Arc<AtomicBool>,
        cleanups: Arc<AtomicUsize>,
        shortcut_fired: Arc<AtomicUsize>,
    }

    struct StubEditor {
        path: String,
        visible: Arc<AtomicBool>,
        focused: Arc<AtomicBool>,
        gain_focus: Arc<AtomicBool>,
        cleanups: Arc<AtomicUsize>,
        shortcut_key: Option<Key>,
        shortcut_fired: Arc<AtomicUsize>,
    }

    impl StubEditor {
        fn new(path: &str, shortcut_key: Option<Key>) -> (Self, StubHandles) {
            let handles = StubHandles {
                visible: Arc::new(AtomicBool::new(true)),
                focused: Arc::new(AtomicBool::new(false)),
                gain_focus: Arc::new(AtomicBool::new(false)),
                cleanups: Arc::new(AtomicUsize::new(0)),
                shortcut_fired: Arc::new(AtomicUsize::new(0)),
            };
            let stub = Self {
                path: path.to_string(),
                visible: Arc::clone(&handles.visible),
                focused: Arc::clone(&handles.focused),
                gain_focus: Arc::clone(&handles.gain_focus),
                cleanups: Arc::clone(&handles.cleanups),
                shortcut_key,
                shortcut_fired: Arc::clone(&handles.shortcut_fired),
            };
            (stub, handles)
        }
    }

    impl EditorWindow for StubEditor {
        fn path(&self) -> &str {
            &self.path
        }

        fn title(&self) -> &str {
            &self.path
        }

        fn show(&mut self, _ctx: &Context) {
            if self.gain_focus.swap(false, Ordering::SeqCst) {
                self.focused.store(true, Ordering::SeqCst);
            }
        }

        fn is_visible(&self) -> bool {
            self.visible.load(Ordering::SeqCst)
        }

        fn has_focus(&self) -> bool {
            self.focused.load(Ordering::SeqCst)
        }

        fn defocus(&mut self) {
            self.focused.store(false, Ordering::SeqCst);
        }

        fn bring_to_front(&mut self) {}

        fn register_shortcuts(&self, shortcuts: &ShortcutDispatcher) {
            if let Some(key) = self.shortcut_key {
                let fired = Arc::clone(&self.shortcut_fired);
                shortcuts.register_shortcut(
                    move || {
                        fired.fetch_add(1, Ordering::SeqCst);
                    },
                    key,
                    Modifiers::NONE,
                    false,
                );
            }
        }

        fn window_rect(&self) -> (Pos2, Vec2) {
            (Pos2::ZERO, Vec2::new(100.0, 100.0))
        }

        fn cleanup(&mut self) {
            self.cleanups.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn text_source(paths: &[&str]) -> Arc<dyn FileSource> {
        let mut source = MemoryFileSource::new();
        for path in paths {
            source.insert(*path, b"hello".to_vec());
        }
        Arc::new(source)
    }

    fn manager_with(paths: &[&str]) -> WindowManager {
        WindowManager::new(EditorRegistry::with_builtin(), text_source(paths))
    }

    #[test]
    fn open_editor_dedupes_by_path() {
        let manager = manager_with(&["notes.txt"]);
        manager.open_editor(Path::new("notes.txt"), Pos2::ZERO);
        manager.open_editor(Path::new("notes.txt"), Pos2::new(50.0, 50.0));

        assert_eq!(manager.len(), 1);
        assert!(manager.take_errors().is_empty());
    }

    #[test]
    fn distinct_paths_open_distinct_editors() {
        let manager = manager_with(&["a.txt", "b.txt"]);
        manager.open_editor(Path::new("a.txt"), Pos2::ZERO);
        manager.open_editor(Path::new("b.txt"), Pos2::ZERO);

        let open: Vec<String> = manager.open_list().into_iter().map(|(_, p)| p).collect();
        assert_eq!(open, vec!["a.txt".to_string(), "b.txt".to_string()]);
    }

    #[test]
    fn missing_file_reports_and_leaves_sequence_unchanged() {
        let manager = manager_with(&[]);
        manager.open_editor(Path::new("ghost.txt"), Pos2::ZERO);

        assert!(manager.is_empty());
        let errors = manager.take_errors();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("ghost.txt"));
    }

    #[test]
    fn unknown_extension_reports() {
        let mut source = MemoryFileSource::new();
        source.insert("archive.mpq", vec![0u8; 8]);
        let manager = WindowManager::new(EditorRegistry::with_builtin(), Arc::new(source));
        manager.open_editor(Path::new("archive.mpq"), Pos2::ZERO);

        assert!(manager.is_empty());
        assert_eq!(manager.take_errors().len(), 1);
    }

    #[test]
    fn missing_constructor_reports() {
        let manager = WindowManager::new(
            Arc::new(EditorRegistry::new()),
            text_source(&["notes.txt"]),
        );
        manager.open_editor(Path::new("notes.txt"), Pos2::ZERO);

        assert!(manager.is_empty());
        let errors = manager.take_errors();
        assert!(errors[0].contains("no editor"), "{}", errors[0]);
    }

    #[test]
    fn malformed_asset_reports() {
        let mut source = MemoryFileSource::new();
        source.insert("pal.dat", vec![0u8; 10]);
        let manager = WindowManager::new(EditorRegistry::with_builtin(), Arc::new(source));
        manager.open_editor(Path::new("pal.dat"), Pos2::ZERO);

        assert!(manager.is_empty());
        let errors = manager.take_errors();
        assert!(errors[0].contains("malformed"), "{}", errors[0]);
    }

    #[test]
    fn render_frame_removes_invisible_editor_and_cleans_up_once() {
        let mut manager = manager_with(&[]);
        let (a, a_handles) = StubEditor::new("a.txt", None);
        let (b, b_handles) = StubEditor::new("b.txt", None);
        manager.push_editor(Box::new(a));
        manager.push_editor(Box::new(b));

        a_handles.visible.store(false, Ordering::SeqCst);
        let ctx = Context::default();
        let shortcuts = ShortcutDispatcher::new();
        manager.render_frame(&ctx, &shortcuts);

        let open: Vec<String> = manager.open_list().into_iter().map(|(_, p)| p).collect();
        assert_eq!(open, vec!["b.txt".to_string()]);
        assert_eq!(a_handles.cleanups.load(Ordering::SeqCst), 1);
        assert_eq!(b_handles.cleanups.load(Ordering::SeqCst), 0);

        manager.render_frame(&ctx, &shortcuts);
        assert_eq!(a_handles.cleanups.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn closing_the_focused_editor_clears_the_focus_reference() {
        let mut manager = manager_with(&[]);
        let (a, a_handles) = StubEditor::new("a.txt", None);
        a_handles.gain_focus.store(true, Ordering::SeqCst);
        manager.push_editor(Box::new(a));

        let ctx = Context::default();
        let shortcuts = ShortcutDispatcher::new();
        manager.render_frame(&ctx, &shortcuts);
        assert_eq!(manager.focused_path(), Some("a.txt"));

        a_handles.visible.store(false, Ordering::SeqCst);
        manager.render_frame(&ctx, &shortcuts);
        assert!(manager.focused_path().is_none());
        assert!(manager.is_empty());
    }

    #[test]
    fn focus_handover_swaps_window_shortcuts() {
        let mut manager = manager_with(&[]);
        let (a, a_handles) = StubEditor::new("a.txt", Some(Key::F1));
        a_handles.gain_focus.store(true, Ordering::SeqCst);
        let (b, b_handles) = StubEditor::new("b.txt", Some(Key::F2));
        manager.push_editor(Box::new(a));
        manager.push_editor(Box::new(b));

        let ctx = Context::default();
        let shortcuts = ShortcutDispatcher::new();
        manager.render_frame(&ctx, &shortcuts);
        assert_eq!(manager.focused_path(), Some("a.txt"));
        shortcuts.handle_input(Key::F1, Modifiers::NONE, KeyAction::Pressed);
        assert_eq!(a_handles.shortcut_fired.load(Ordering::SeqCst), 1);

        // The user clicks editor B: it reports the focus gain during the
        // next build pass.
        b_handles.gain_focus.store(true, Ordering::SeqCst);
        manager.render_frame(&ctx, &shortcuts);
        assert_eq!(manager.focused_path(), Some("b.txt"));
        assert!(!a_handles.focused.load(Ordering::SeqCst));

        shortcuts.handle_input(Key::F1, Modifiers::NONE, KeyAction::Pressed);
        shortcuts.handle_input(Key::F2, Modifiers::NONE, KeyAction::Pressed);
        assert_eq!(a_handles.shortcut_fired.load(Ordering::SeqCst), 1);
        assert_eq!(b_handles.shortcut_fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn close_all_cleans_up_everything() {
        let mut manager = manager_with(&[]);
        let (a, a_handles) = StubEditor::new("a.txt", None);
        let (b, b_handles) = StubEditor::new("b.txt", None);
        manager.push_editor(Box::new(a));
        manager.push_editor(Box::new(b));

        manager.close_all();
        assert!(manager.is_empty());
        assert!(manager.focused_path().is_none());
        assert_eq!(a_handles.cleanups.load(Ordering::SeqCst), 1);
        assert_eq!(b_handles.cleanups.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn snapshot_then_restore_recreates_the_same_windows() {
        let source = text_source(&["a.txt", "b.txt"]);
        let manager = WindowManager::new(EditorRegistry::with_builtin(), Arc::clone(&source));
        manager.open_editor(Path::new("a.txt"), Pos2::new(10.0, 20.0));
        manager.open_editor(Path::new("b.txt"), Pos2::new(30.0, 40.0));
        let layout = manager.snapshot_layout();
        assert_eq!(layout.windows.len(), 2);

        let restored = WindowManager::new(EditorRegistry::with_builtin(), source);
        let ctx = Context::default();
        restored.restore_layout(&layout, &ctx);

        let deadline = Instant::now() + Duration::from_secs(5);
        while restored.len() < 2 && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(10));
        }
        assert_eq!(restored.len(), 2);

        let mut paths: Vec<String> =
            restored.open_list().into_iter().map(|(_, p)| p).collect();
        paths.sort();
        assert_eq!(paths, vec!["a.txt".to_string(), "b.txt".to_string()]);

        let mut restored_layout = restored.snapshot_layout();
        restored_layout.windows.sort_by(|a, b| a.path.cmp(&b.path));
        let mut expected = layout.clone();
        expected.windows.sort_by(|a, b| a.path.cmp(&b.path));
        assert_eq!(restored_layout, expected);
    }

    #[test]
    fn restore_skips_entries_that_fail_to_build() {
        let layout = WorkspaceLayout {
            windows: vec![
                WindowSnapshot {
                    path: "gone.txt".to_string(),
                    state: Vec::new(),
                    x: 0.0,
                    y: 0.0,
                    width: 100.0,
                    height: 100.0,
                },
                WindowSnapshot {
                    path: "a.txt".to_string(),
                    state: Vec::new(),
                    x: 0.0,
                    y: 0.0,
                    width: 100.0,
                    height: 100.0,
                },
            ],
        };
        let manager = manager_with(&["a.txt"]);
        let ctx = Context::default();
        manager.restore_layout(&layout, &ctx);

        let deadline = Instant::now() + Duration::from_secs(5);
        while manager.len() < 1 && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(10));
        }
        // Give the failing entry's worker a moment too.
        std::thread::sleep(Duration::from_millis(50));
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.open_list()[0].1, "a.txt");
    }
}

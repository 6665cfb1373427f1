//! Keyboard shortcut dispatch.
//!
//! Two registration channels share one combo table: global shortcuts survive
//! focus changes, window-scoped shortcuts belong to whichever editor window
//! currently has focus and are cleared in bulk on every focus handover. A
//! window-scoped entry shadows the global entry for the same combo, so a
//! combo like Ctrl+S can mean "save project" in general but "save this file"
//! while a text editor has focus.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use eframe::egui::{Key, Modifiers};

pub type ShortcutCallback = Arc<dyn Fn() + Send + Sync>;

/// Key plus modifier mask, used as the registry key.
///
/// The constructor folds the physical ctrl/cmd distinction into egui's
/// `command` abstraction so a combo registered as `Modifiers::COMMAND`
/// matches the event modifiers delivered on every platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    key: Key,
    modifiers: Modifiers,
}

impl KeyCombo {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self {
            key,
            modifiers: normalize(modifiers),
        }
    }
}

fn normalize(modifiers: Modifiers) -> Modifiers {
    Modifiers {
        alt: modifiers.alt,
        shift: modifiers.shift,
        ctrl: false,
        mac_cmd: false,
        command: modifiers.command || modifiers.ctrl || modifiers.mac_cmd,
    }
}

/// What the windowing layer reported for a key event. Held repeats are
/// distinct from the initial press and never dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Pressed,
    Released,
    Held,
}

#[derive(Default)]
struct CallbackGroup {
    global: Option<ShortcutCallback>,
    window: Option<ShortcutCallback>,
}

/// The combo table. Constructed once by the application; all methods take
/// `&self` so registration and dispatch can be driven from anywhere in the
/// render pass without exclusive access. The lock is never held while a
/// callback runs, so callbacks may themselves register or clear shortcuts.
#[derive(Default)]
pub struct ShortcutDispatcher {
    registry: Mutex<HashMap<KeyCombo, CallbackGroup>>,
}

impl ShortcutDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` under (key, modifiers). The global and window
    /// slots are independent; re-registering a slot silently overwrites it.
    pub fn register_shortcut(
        &self,
        callback: impl Fn() + Send + Sync + 'static,
        key: Key,
        modifiers: Modifiers,
        global: bool,
    ) {
        let mut registry = self.registry.lock().unwrap();
        let group = registry.entry(KeyCombo::new(key, modifiers)).or_default();
        let slot = if global {
            &mut group.global
        } else {
            &mut group.window
        };
        *slot = Some(Arc::new(callback));
    }

    /// Clears every window slot; global slots are untouched. Groups stay in
    /// the table — an emptied group is inert.
    pub fn unregister_window_shortcuts(&self) {
        let mut registry = self.registry.lock().unwrap();
        for group in registry.values_mut() {
            group.window = None;
        }
    }

    /// Resolves one key event to at most one callback. Only the initial
    /// press fires; the window slot shadows the global slot; unregistered
    /// combos are a no-op.
    pub fn handle_input(&self, key: Key, modifiers: Modifiers, action: KeyAction) {
        if action != KeyAction::Pressed {
            return;
        }
        let callback = {
            let registry = self.registry.lock().unwrap();
            registry
                .get(&KeyCombo::new(key, modifiers))
                .and_then(|group| group.window.clone().or_else(|| group.global.clone()))
        };
        if let Some(callback) = callback {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let handle = Arc::clone(&count);
        (count, move || {
            handle.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn global_shortcut_fires_exactly_once_per_press() {
        let dispatcher = ShortcutDispatcher::new();
        let (fired, callback) = counter();
        dispatcher.register_shortcut(callback, Key::Q, Modifiers::COMMAND, true);

        dispatcher.handle_input(Key::Q, Modifiers::COMMAND, KeyAction::Pressed);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn other_combos_do_not_fire() {
        let dispatcher = ShortcutDispatcher::new();
        let (fired, callback) = counter();
        dispatcher.register_shortcut(callback, Key::Q, Modifiers::COMMAND, true);

        dispatcher.handle_input(Key::Q, Modifiers::NONE, KeyAction::Pressed);
        dispatcher.handle_input(Key::W, Modifiers::COMMAND, KeyAction::Pressed);
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn window_slot_shadows_global_slot() {
        let dispatcher = ShortcutDispatcher::new();
        let (global_fired, global_callback) = counter();
        let (window_fired, window_callback) = counter();
        dispatcher.register_shortcut(global_callback, Key::W, Modifiers::COMMAND, true);
        dispatcher.register_shortcut(window_callback, Key::W, Modifiers::COMMAND, false);

        dispatcher.handle_input(Key::W, Modifiers::COMMAND, KeyAction::Pressed);
        assert_eq!(global_fired.load(Ordering::SeqCst), 0);
        assert_eq!(window_fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unregister_window_shortcuts_restores_global() {
        let dispatcher = ShortcutDispatcher::new();
        let (global_fired, global_callback) = counter();
        let (window_fired, window_callback) = counter();
        dispatcher.register_shortcut(global_callback, Key::W, Modifiers::COMMAND, true);
        dispatcher.register_shortcut(window_callback, Key::W, Modifiers::COMMAND, false);

        dispatcher.unregister_window_shortcuts();
        dispatcher.handle_input(Key::W, Modifiers::COMMAND, KeyAction::Pressed);
        assert_eq!(global_fired.load(Ordering::SeqCst), 1);
        assert_eq!(window_fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn unregister_without_global_leaves_nothing() {
        let dispatcher = ShortcutDispatcher::new();
        let (window_fired, window_callback) = counter();
        dispatcher.register_shortcut(window_callback, Key::S, Modifiers::COMMAND, false);

        dispatcher.unregister_window_shortcuts();
        dispatcher.handle_input(Key::S, Modifiers::COMMAND, KeyAction::Pressed);
        assert_eq!(window_fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn release_and_repeat_never_dispatch() {
        let dispatcher = ShortcutDispatcher::new();
        let (fired, callback) = counter();
        dispatcher.register_shortcut(callback, Key::Q, Modifiers::COMMAND, true);

        dispatcher.handle_input(Key::Q, Modifiers::COMMAND, KeyAction::Released);
        dispatcher.handle_input(Key::Q, Modifiers::COMMAND, KeyAction::Held);
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn re_registering_overwrites_the_slot() {
        let dispatcher = ShortcutDispatcher::new();
        let (first_fired, first_callback) = counter();
        let (second_fired, second_callback) = counter();
        dispatcher.register_shortcut(first_callback, Key::N, Modifiers::COMMAND, true);
        dispatcher.register_shortcut(second_callback, Key::N, Modifiers::COMMAND, true);

        dispatcher.handle_input(Key::N, Modifiers::COMMAND, KeyAction::Pressed);
        assert_eq!(first_fired.load(Ordering::SeqCst), 0);
        assert_eq!(second_fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn ctrl_and_command_reach_the_same_combo() {
        // Events on non-mac platforms carry both ctrl and command set.
        let dispatcher = ShortcutDispatcher::new();
        let (fired, callback) = counter();
        dispatcher.register_shortcut(callback, Key::O, Modifiers::COMMAND, true);

        let event_modifiers = Modifiers {
            ctrl: true,
            command: true,
            ..Default::default()
        };
        dispatcher.handle_input(Key::O, event_modifiers, KeyAction::Pressed);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn quit_scenario_ignores_unrelated_window_shortcuts() {
        // Global Ctrl+Q quit; the focused window claims only Ctrl+W.
        let dispatcher = ShortcutDispatcher::new();
        let (quit_fired, quit_callback) = counter();
        let (close_fired, close_callback) = counter();
        dispatcher.register_shortcut(quit_callback, Key::Q, Modifiers::COMMAND, true);
        dispatcher.register_shortcut(close_callback, Key::W, Modifiers::COMMAND, false);

        dispatcher.handle_input(Key::Q, Modifiers::COMMAND, KeyAction::Pressed);
        assert_eq!(quit_fired.load(Ordering::SeqCst), 1);
        assert_eq!(close_fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn callback_may_register_more_shortcuts() {
        let dispatcher = Arc::new(ShortcutDispatcher::new());
        let inner = Arc::clone(&dispatcher);
        let chained_fired = Arc::new(AtomicUsize::new(0));
        let chained = Arc::clone(&chained_fired);
        dispatcher.register_shortcut(
            move || {
                let fired = Arc::clone(&chained);
                inner.register_shortcut(
                    move || {
                        fired.fetch_add(1, Ordering::SeqCst);
                    },
                    Key::Z,
                    Modifiers::NONE,
                    true,
                );
            },
            Key::A,
            Modifiers::NONE,
            true,
        );

        dispatcher.handle_input(Key::A, Modifiers::NONE, KeyAction::Pressed);
        dispatcher.handle_input(Key::Z, Modifiers::NONE, KeyAction::Pressed);
        assert_eq!(chained_fired.load(Ordering::SeqCst), 1);
    }
}

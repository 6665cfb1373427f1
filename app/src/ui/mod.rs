pub(crate) mod dialogs;
pub(crate) mod menu;
pub(crate) mod panels;
pub(crate) mod tab_viewer;
pub(crate) mod theme;
pub(crate) mod widgets;

pub(crate) mod hex_view;
pub(crate) mod palette_grid;

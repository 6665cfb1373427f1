//! One editor implementation per asset kind. Each composes an
//! [`EditorBase`](super::editor::EditorBase) for the shared window
//! bookkeeping and keeps its own UI state, serialized as a bincode blob
//! whose layout the editor alone owns.

pub(crate) mod audio;
pub(crate) mod cof;
pub(crate) mod dc6;
pub(crate) mod dcc;
pub(crate) mod ds1;
pub(crate) mod dt1;
pub(crate) mod font;
pub(crate) mod font_table;
pub(crate) mod palette;
pub(crate) mod palette_map;
pub(crate) mod string_table;
pub(crate) mod text;

use hscommon::error::CommonError;

pub(crate) fn decode_state<T: bincode::Decode<()>>(bytes: &[u8]) -> Result<T, CommonError> {
    bincode::decode_from_slice(bytes, bincode::config::standard())
        .map(|(state, _)| state)
        .map_err(|e| CommonError::WindowState(e.to_string()))
}

pub(crate) fn encode_state<T: bincode::Encode>(state: &T) -> Vec<u8> {
    bincode::encode_to_vec(state, bincode::config::standard()).unwrap_or_default()
}

pub(crate) fn u16_le(bytes: &[u8], offset: usize) -> Option<u16> {
    let slice = bytes.get(offset..offset + 2)?;
    Some(u16::from_le_bytes([slice[0], slice[1]]))
}

pub(crate) fn u32_le(bytes: &[u8], offset: usize) -> Option<u32> {
    let slice = bytes.get(offset..offset + 4)?;
    Some(u32::from_le_bytes([slice[0], slice[1], slice[2], slice[3]]))
}

pub(crate) fn i32_le(bytes: &[u8], offset: usize) -> Option<i32> {
    u32_le(bytes, offset).map(|value| value as i32)
}

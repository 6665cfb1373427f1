use std::path::Path;

use crate::error::CommonError;

/// Font tables share the `.tbl` extension with string tables and are told
/// apart by this signature at the start of the file.
const FONT_TABLE_MAGIC: &[u8] = b"Woo!\x01";

/// Asset kinds the toolset knows how to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Text,
    Audio,
    Palette,
    PaletteMap,
    Dc6,
    Dcc,
    Cof,
    Dt1,
    Ds1,
    Font,
    StringTable,
    FontTable,
}

impl FileKind {
    pub fn name(self) -> &'static str {
        match self {
            FileKind::Text => "text",
            FileKind::Audio => "audio",
            FileKind::Palette => "palette",
            FileKind::PaletteMap => "palette map",
            FileKind::Dc6 => "DC6 sprite",
            FileKind::Dcc => "DCC sprite",
            FileKind::Cof => "COF animation",
            FileKind::Dt1 => "DT1 tileset",
            FileKind::Ds1 => "DS1 map",
            FileKind::Font => "font",
            FileKind::StringTable => "string table",
            FileKind::FontTable => "font table",
        }
    }
}

/// Determines the asset kind from the file extension plus a sample of the
/// leading bytes. Extensions are matched case-insensitively.
pub fn classify(path: &Path, sample: &[u8]) -> Result<FileKind, CommonError> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "txt" => Ok(FileKind::Text),
        "wav" => Ok(FileKind::Audio),
        "dat" => Ok(FileKind::Palette),
        "pl2" => Ok(FileKind::PaletteMap),
        "dc6" => Ok(FileKind::Dc6),
        "dcc" => Ok(FileKind::Dcc),
        "cof" => Ok(FileKind::Cof),
        "dt1" => Ok(FileKind::Dt1),
        "ds1" => Ok(FileKind::Ds1),
        "hsf" => Ok(FileKind::Font),
        "tbl" => {
            if sample.starts_with(FONT_TABLE_MAGIC) {
                Ok(FileKind::FontTable)
            } else {
                Ok(FileKind::StringTable)
            }
        }
        other => Err(CommonError::UnknownExtension(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_by_extension() {
        assert_eq!(
            classify(Path::new("data/readme.txt"), &[]).unwrap(),
            FileKind::Text
        );
        assert_eq!(
            classify(Path::new("units/act1.DC6"), &[]).unwrap(),
            FileKind::Dc6
        );
        assert_eq!(
            classify(Path::new("pal.dat"), &[0u8; 16]).unwrap(),
            FileKind::Palette
        );
    }

    #[test]
    fn tbl_disambiguation_uses_magic() {
        let mut font = b"Woo!\x01".to_vec();
        font.extend_from_slice(&[0u8; 16]);
        assert_eq!(
            classify(Path::new("font16.tbl"), &font).unwrap(),
            FileKind::FontTable
        );
        assert_eq!(
            classify(Path::new("string.tbl"), &[0u8; 16]).unwrap(),
            FileKind::StringTable
        );
    }

    #[test]
    fn unknown_extension_is_an_error() {
        let err = classify(Path::new("archive.mpq"), &[]).unwrap_err();
        assert!(matches!(err, CommonError::UnknownExtension(ext) if ext == "mpq"));
    }
}

use chrono::NaiveDateTime;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub fn extract_date(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let mut bufreader = BufReader::new(file);
    let exif_reader = exif::Reader::new();
    let exif = exif_reader.read_from_container(&mut bufreader)?;

    // DateTimeOriginal を探す
    if let Some(field) = exif.get_field(exif::Tag::DateTimeOriginal, exif::In::PRIMARY) {
        return Ok(normalize_date(&field.display_value().to_string()));
    }

    // DateTime を探す
    if let Some(field) = exif.get_field(exif::Tag::DateTime, exif::In::PRIMARY) {
        return Ok(normalize_date(&field.display_value().to_string()));
    }

    Err("No date found in EXIF".into())
}

/// EXIF日時表記（"2026:01:18 10:30:00"等）をISO風に揃える
///
/// パースできない表記はそのまま返す。
fn normalize_date(raw: &str) -> String {
    for format in ["%Y:%m:%d %H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(raw.trim(), format) {
            return datetime.format("%Y-%m-%d %H:%M:%S").to_string();
        }
    }
    raw.trim().to_string()
}

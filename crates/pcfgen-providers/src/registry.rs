#[derive(Debug, Clone)]
pub struct SourceMetadata {
    pub name: &'static str,
    pub description: &'static str,
}

const SOURCES: &[SourceMetadata] = &[
    SourceMetadata {
        name: "csv",
        description: "CSV export of a spreadsheet (first record is the header)",
    },
    SourceMetadata {
        name: "sheet-json",
        description: "Saved Smartsheet sheet payload (GET /sheets/{id})",
    },
    SourceMetadata {
        name: "smartsheet",
        description: "Live Smartsheet sheet via the REST API",
    },
];

pub fn get_all_sources() -> &'static [SourceMetadata] {
    SOURCES
}

/// Guess a file-based source kind from a path's extension.
pub fn source_kind_for_path(path: &std::path::Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "csv" => Some("csv"),
        "json" => Some("sheet-json"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_every_kind_listed() {
        let names: Vec<_> = get_all_sources().iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["csv", "sheet-json", "smartsheet"]);
    }

    #[test]
    fn test_kind_from_extension() {
        assert_eq!(source_kind_for_path(Path::new("data/p.CSV")), Some("csv"));
        assert_eq!(source_kind_for_path(Path::new("sheet.json")), Some("sheet-json"));
        assert_eq!(source_kind_for_path(Path::new("people.xlsx")), None);
        assert_eq!(source_kind_for_path(Path::new("noext")), None);
    }
}

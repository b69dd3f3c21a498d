//! Field extraction from the default local asset bundle

use crate::asset::AssetContainer;
use crate::output::{ensure_dir, write_json};
use crate::{Error, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Text asset holding the home screen board master list
pub const HOME_BOARD_LIST_SUFFIX: &str = "HomeBoardList.txt";

/// Number of boards kept in the excerpt
pub const HOME_BOARD_EXCERPT_LIMIT: usize = 10;

pub const HOME_BOARD_EXCERPT_FILE: &str = "home_board_list_excerpt.json";

/// Board sizes with a piece setting asset
pub const PIECE_SIZES: &[&str] = &["3x3", "4x4", "5x5"];

#[derive(Debug, Clone, PartialEq)]
pub struct HomeBoardExcerpt {
    pub source: String,
    pub output: PathBuf,
    /// Length of the full `Lists` array
    pub total: usize,
    pub boards: Vec<Value>,
}

/// Extract the first `limit` boards of `HomeBoardList.txt`
pub fn extract_home_board_list(
    container: &dyn AssetContainer,
    analysis_dir: &Path,
    limit: usize,
) -> Result<HomeBoardExcerpt> {
    let source = container
        .find_suffix(HOME_BOARD_LIST_SUFFIX)
        .ok_or_else(|| Error::MissingEntry(HOME_BOARD_LIST_SUFFIX.to_string()))?;

    let script = container.read_script(&source)?;
    let mut root: Value = serde_json::from_str(&script).map_err(|e| Error::json(&source, e))?;

    let lists = match root.get_mut("Lists").map(Value::take) {
        Some(Value::Array(lists)) => lists,
        _ => {
            return Err(Error::MissingField {
                field: "Lists",
                expected: "an array",
                context: source,
            })
        }
    };

    let total = lists.len();
    let boards: Vec<Value> = lists.into_iter().take(limit).collect();

    ensure_dir(analysis_dir)?;
    let output = analysis_dir.join(HOME_BOARD_EXCERPT_FILE);
    write_json(&output, &boards)?;

    tracing::info!(source = %source, total, kept = boards.len(), "extracted home board list");

    Ok(HomeBoardExcerpt {
        source,
        output,
        total,
        boards,
    })
}

/// Which piece setting files were written
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PieceSettingsReport {
    /// (size, container path, output file)
    pub written: Vec<(String, String, PathBuf)>,
    pub missing: Vec<String>,
}

/// Dump the type tree of every `{size}.asset` piece setting
///
/// Sizes without a matching asset are skipped.
pub fn extract_piece_settings(
    container: &dyn AssetContainer,
    analysis_dir: &Path,
    sizes: &[&str],
) -> Result<PieceSettingsReport> {
    ensure_dir(analysis_dir)?;
    let mut report = PieceSettingsReport::default();

    for size in sizes {
        let suffix = format!("{}.asset", size);
        let Some(source) = container.find_suffix(&suffix) else {
            tracing::warn!(size, "no asset path ends with '{}'", suffix);
            report.missing.push(size.to_string());
            continue;
        };

        let tree = container.read_type_tree(&source)?;
        let output = analysis_dir.join(format!("piece_setting_{}.json", size));
        write_json(&output, &tree)?;

        tracing::debug!(size, source = %source, "wrote piece setting");
        report.written.push((size.to_string(), source, output));
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::ExportedBundle;
    use serde_json::json;
    use tempfile::TempDir;

    fn export(files: &[(&str, String)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (rel, content) in files {
            let path = dir.path().join(rel);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, content).unwrap();
        }
        dir
    }

    fn board_list(n: usize) -> String {
        let lists: Vec<Value> = (0..n)
            .map(|i| json!({"Id": i, "Size": "4x4", "Image": format!("home_{}", i)}))
            .collect();
        json!({"Version": 3, "Lists": lists}).to_string()
    }

    #[test]
    fn test_home_board_excerpt_truncates() {
        let export = export(&[(
            "assets/game/data/HomeBoardList.txt",
            json!({"m_Name": "HomeBoardList", "m_Script": board_list(25)}).to_string(),
        )]);
        let out = TempDir::new().unwrap();
        let analysis = out.path().join("analysis");

        let bundle = ExportedBundle::open(export.path()).unwrap();
        let excerpt =
            extract_home_board_list(&bundle, &analysis, HOME_BOARD_EXCERPT_LIMIT).unwrap();

        assert_eq!(excerpt.total, 25);
        assert_eq!(excerpt.boards.len(), 10);
        assert_eq!(excerpt.boards[0]["Id"], 0);
        assert_eq!(excerpt.boards[9]["Id"], 9);

        let written: Value =
            serde_json::from_str(&std::fs::read_to_string(&excerpt.output).unwrap()).unwrap();
        assert_eq!(written, Value::Array(excerpt.boards.clone()));
    }

    #[test]
    fn test_home_board_short_list() {
        let export = export(&[("HomeBoardList.txt", board_list(3))]);
        let out = TempDir::new().unwrap();

        let bundle = ExportedBundle::open(export.path()).unwrap();
        let excerpt = extract_home_board_list(&bundle, out.path(), 10).unwrap();
        assert_eq!(excerpt.boards.len(), 3);
    }

    #[test]
    fn test_home_board_missing_entry() {
        let export = export(&[("Other.txt", board_list(1))]);
        let out = TempDir::new().unwrap();

        let bundle = ExportedBundle::open(export.path()).unwrap();
        let err = extract_home_board_list(&bundle, out.path(), 10).unwrap_err();
        assert!(matches!(err, Error::MissingEntry(_)));
        assert!(!out.path().join(HOME_BOARD_EXCERPT_FILE).exists());
    }

    #[test]
    fn test_home_board_without_lists() {
        let export = export(&[("HomeBoardList.txt", json!({"Boards": []}).to_string())]);
        let out = TempDir::new().unwrap();

        let bundle = ExportedBundle::open(export.path()).unwrap();
        let err = extract_home_board_list(&bundle, out.path(), 10).unwrap_err();
        assert!(matches!(err, Error::MissingField { field: "Lists", .. }));
    }

    #[test]
    fn test_home_board_invalid_json() {
        let export = export(&[("HomeBoardList.txt", "Lists: none".to_string())]);
        let out = TempDir::new().unwrap();

        let bundle = ExportedBundle::open(export.path()).unwrap();
        let err = extract_home_board_list(&bundle, out.path(), 10).unwrap_err();
        assert!(matches!(err, Error::Json { .. }));
    }

    #[test]
    fn test_piece_settings() {
        let export = export(&[
            (
                "assets/piecesetting/3x3.asset",
                json!({"m_Name": "3x3", "Columns": 3, "PieceScale": 1.0}).to_string(),
            ),
            (
                "assets/piecesetting/5x5.asset",
                json!({"m_Name": "5x5", "Columns": 5, "PieceScale": 0.6}).to_string(),
            ),
        ]);
        let out = TempDir::new().unwrap();

        let bundle = ExportedBundle::open(export.path()).unwrap();
        let report = extract_piece_settings(&bundle, out.path(), PIECE_SIZES).unwrap();

        let sizes: Vec<&str> = report.written.iter().map(|(s, _, _)| s.as_str()).collect();
        assert_eq!(sizes, vec!["3x3", "5x5"]);
        assert_eq!(report.missing, vec!["4x4"]);

        let tree: Value = serde_json::from_str(
            &std::fs::read_to_string(out.path().join("piece_setting_5x5.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(tree["Columns"], 5);
        assert!(!out.path().join("piece_setting_4x4.json").exists());
    }

    #[test]
    fn test_piece_settings_first_match_wins() {
        let export = export(&[
            ("a/3x3.asset", json!({"pick": "a"}).to_string()),
            ("b/3x3.asset", json!({"pick": "b"}).to_string()),
        ]);
        let out = TempDir::new().unwrap();

        let bundle = ExportedBundle::open(export.path()).unwrap();
        let report = extract_piece_settings(&bundle, out.path(), &["3x3"]).unwrap();
        assert_eq!(report.written[0].1, "a/3x3.asset");
    }
}

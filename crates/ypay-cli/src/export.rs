//! CSV export with Korean display headers, written as UTF-8 with a BOM so
//! spreadsheet tools pick the right encoding.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use ypay_client::MerchantRecord;

const BOM: &str = "\u{FEFF}";
const HEADERS: [&str; 5] = ["가맹점명", "분야", "소분류", "주소", "우편번호"];
const FILE_PREFIX: &str = "ypay_가맹점";

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

fn write_row<W: Write>(w: &mut W, row: &[&str]) -> io::Result<()> {
    for (i, field) in row.iter().enumerate() {
        if i > 0 {
            w.write_all(b",")?;
        }
        if needs_quotes(field) {
            write!(w, "\"{}\"", field.replace('"', "\"\""))?;
        } else {
            w.write_all(field.as_bytes())?;
        }
    }
    w.write_all(b"\n")
}

/// Writes the BOM, the header row, and one row per record. Missing values
/// become empty cells.
pub(crate) fn write_csv<'a, W: Write>(
    w: &mut W,
    records: impl IntoIterator<Item = &'a MerchantRecord>,
) -> io::Result<()> {
    w.write_all(BOM.as_bytes())?;
    write_row(w, &HEADERS)?;
    for r in records {
        write_row(
            w,
            &[
                r.name.as_deref().unwrap_or_default(),
                r.category.as_deref().unwrap_or_default(),
                r.subcategory.as_deref().unwrap_or_default(),
                r.address.as_deref().unwrap_or_default(),
                r.postal_code.as_deref().unwrap_or_default(),
            ],
        )?;
    }
    Ok(())
}

/// Writes records to `path`, creating or truncating the file.
pub(crate) fn export_csv<'a>(
    path: &Path,
    records: impl IntoIterator<Item = &'a MerchantRecord>,
) -> anyhow::Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_csv(&mut writer, records)
        .and_then(|()| writer.flush())
        .with_context(|| format!("failed to write {}", path.display()))
}

/// Replaces characters that cannot appear in a file name component.
fn file_component(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_whitespace() => '_',
            c => c,
        })
        .collect()
}

pub(crate) fn lookup_file_name(name: &str) -> PathBuf {
    PathBuf::from(format!("{FILE_PREFIX}_{}.csv", file_component(name)))
}

pub(crate) fn region_file_name(district: &str, area: &str) -> PathBuf {
    PathBuf::from(format!(
        "{FILE_PREFIX}_{}_{}.csv",
        file_component(district),
        file_component(area)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, address: Option<&str>) -> MerchantRecord {
        MerchantRecord {
            seq: Some(1),
            category: Some("음식점".to_string()),
            subcategory: Some("한식".to_string()),
            name: Some(name.to_string()),
            postal_code: Some("17036".to_string()),
            address: address.map(str::to_string),
        }
    }

    fn render(records: &[MerchantRecord]) -> String {
        let mut buf = Vec::new();
        write_csv(&mut buf, records).expect("writing to a Vec cannot fail");
        String::from_utf8(buf).expect("csv output is utf-8")
    }

    #[test]
    fn starts_with_bom_and_display_headers() {
        let out = render(&[]);
        assert!(out.starts_with(BOM));
        assert_eq!(out.trim_start_matches(BOM), "가맹점명,분야,소분류,주소,우편번호\n");
    }

    #[test]
    fn rows_follow_display_column_order() {
        let out = render(&[record("맛있는집", Some("처인구 김량장동 1"))]);
        let row = out.lines().nth(1).expect("data row");
        assert_eq!(row, "맛있는집,음식점,한식,처인구 김량장동 1,17036");
    }

    #[test]
    fn quotes_fields_with_commas_and_quotes() {
        let out = render(&[record("\"진짜\" 맛집", Some("김량장동 1, 2층"))]);
        let row = out.lines().nth(1).expect("data row");
        assert_eq!(
            row,
            "\"\"\"진짜\"\" 맛집\",음식점,한식,\"김량장동 1, 2층\",17036"
        );
    }

    #[test]
    fn missing_address_is_empty_cell() {
        let out = render(&[record("가게", None)]);
        let row = out.lines().nth(1).expect("data row");
        assert_eq!(row, "가게,음식점,한식,,17036");
    }

    #[test]
    fn default_file_names() {
        assert_eq!(
            lookup_file_name("맛있는집"),
            PathBuf::from("ypay_가맹점_맛있는집.csv")
        );
        assert_eq!(
            region_file_name("처인구", "김량장동"),
            PathBuf::from("ypay_가맹점_처인구_김량장동.csv")
        );
    }

    #[test]
    fn file_names_drop_path_separators() {
        assert_eq!(
            lookup_file_name("a/b c"),
            PathBuf::from("ypay_가맹점_a_b_c.csv")
        );
    }

    #[test]
    fn export_csv_writes_file() {
        let dir = std::env::temp_dir().join(format!("ypay-export-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("out.csv");

        export_csv(&path, &[record("맛있는집", Some("김량장동"))]).expect("export");
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with(BOM));
        assert_eq!(written.lines().count(), 2);

        std::fs::remove_dir_all(&dir).ok();
    }
}

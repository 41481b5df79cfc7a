//! Terminal tables and bar charts for merchant results.

use tabled::settings::Style;
use tabled::{Table, Tabled};
use unicode_width::UnicodeWidthStr;
use ypay_client::{CategoryCount, MerchantRecord};

const CHART_WIDTH: usize = 40;
const EMPTY_CELL: &str = "\u{2014}";

#[derive(Tabled)]
struct MerchantRow {
    #[tabled(rename = "가맹점명")]
    name: String,
    #[tabled(rename = "분야")]
    category: String,
    #[tabled(rename = "소분류")]
    subcategory: String,
    #[tabled(rename = "우편번호")]
    postal_code: String,
    #[tabled(rename = "주소")]
    address: String,
}

fn cell(value: Option<&str>) -> String {
    value.unwrap_or(EMPTY_CELL).to_string()
}

impl From<&MerchantRecord> for MerchantRow {
    fn from(r: &MerchantRecord) -> Self {
        Self {
            name: cell(r.name.as_deref()),
            category: cell(r.category.as_deref()),
            subcategory: cell(r.subcategory.as_deref()),
            postal_code: cell(r.postal_code.as_deref()),
            address: cell(r.address.as_deref()),
        }
    }
}

/// Renders merchants in display column order: name, category, subcategory,
/// postal code, address.
pub(crate) fn merchant_table<'a>(records: impl IntoIterator<Item = &'a MerchantRecord>) -> String {
    let rows: Vec<MerchantRow> = records.into_iter().map(MerchantRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{table}\n")
}

/// Left-aligns `s` in a column of `width` terminal columns.
fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(fill))
}

/// Horizontal bar chart of category counts, scaled so the largest bar is
/// `CHART_WIDTH` blocks wide.
pub(crate) fn category_chart(counts: &[CategoryCount]) -> String {
    let Some(max) = counts.iter().map(|c| c.count).max() else {
        return String::new();
    };
    let label_width = counts
        .iter()
        .map(|c| c.category.width())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for c in counts {
        let blocks = (c.count * CHART_WIDTH).div_ceil(max.max(1));
        out.push_str(&format!(
            "{} {} {}개\n",
            pad(&c.category, label_width),
            "\u{2588}".repeat(blocks),
            c.count
        ));
    }
    out
}

use std::path::PathBuf;

use ypay_client::{category_counts, filter_by_categories, ScanEnd, ScanOptions, YpayClient};
use ypay_core::RegionCatalog;

use crate::{export, render};

/// Options for a `region` run beyond the selected area.
#[derive(Debug, Default)]
pub(crate) struct RegionArgs {
    /// Categories to keep; empty keeps all.
    pub fields: Vec<String>,
    pub csv: Option<Option<PathBuf>>,
}

/// List merchants whose address falls in `district` / `area`.
///
/// Scans every page of the merchant list, prints per-category counts and a
/// bar chart, then the (optionally category-filtered) table.
///
/// # Errors
///
/// Returns an error if the selection is not in the catalog or the CSV file
/// cannot be written. Fetch failures are not errors here: the scan stops and
/// whatever was collected is shown.
pub(crate) async fn run_region(
    client: &YpayClient,
    catalog: &RegionCatalog,
    options: ScanOptions,
    district: &str,
    area: &str,
    args: RegionArgs,
) -> anyhow::Result<()> {
    let term = catalog.resolve(district, area)?;

    eprintln!("searching merchants in {district} {area}...");
    let scan = client.scan_region(term, options).await;

    if let ScanEnd::Failed(reason) = &scan.end {
        tracing::warn!(
            pages_fetched = scan.pages_fetched,
            reason = %reason,
            "region scan ended early; results may be incomplete"
        );
    }

    if scan.records.is_empty() {
        println!("no merchants found in {district} {area}");
        return Ok(());
    }

    println!(
        "{district} {area}: {} merchant(s) found",
        scan.records.len()
    );
    println!();
    println!("## by category");
    print!("{}", render::category_chart(&category_counts(&scan.records)));
    println!();

    let shown = filter_by_categories(&scan.records, &args.fields);
    println!("showing {} merchant(s)", shown.len());
    print!("{}", render::merchant_table(shown.iter().copied()));

    if let Some(path) = args.csv {
        let path = path.unwrap_or_else(|| export::region_file_name(district, area));
        export::export_csv(&path, shown.iter().copied())?;
        println!();
        println!("wrote {} rows to {}", shown.len(), path.display());
    }

    Ok(())
}

/// Print the district / sub-district catalog.
pub(crate) fn run_regions(catalog: &RegionCatalog) {
    for district in catalog.districts() {
        println!("{}", district.name);
        for area in &district.areas {
            println!("  {area}");
        }
    }
}

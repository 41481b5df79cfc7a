use std::path::PathBuf;

use anyhow::Context;
use ypay_client::YpayClient;

use crate::{export, render};

/// Check whether a merchant is enrolled, by exact name.
///
/// Prints the match count and a table of matches; with `csv` set, also writes
/// them to a CSV file.
///
/// # Errors
///
/// Returns an error if the name is blank, the API call fails, or the CSV file
/// cannot be written.
pub(crate) async fn run_lookup(
    client: &YpayClient,
    name: &str,
    csv: Option<Option<PathBuf>>,
) -> anyhow::Result<()> {
    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("merchant name must not be empty");
    }

    let (records, total_count) = client
        .lookup_by_name(name)
        .await
        .with_context(|| format!("lookup for '{name}' failed"))?;

    if total_count == 0 {
        println!("no Y-Pay merchant named '{name}'");
        return Ok(());
    }

    println!("'{name}': {total_count} merchant(s) found");
    if let Some(direction) = count_mismatch(records.len(), total_count) {
        tracing::warn!(
            returned = records.len(),
            total_count,
            "name lookup returned {direction} rows than the declared total"
        );
    }
    println!();
    print!("{}", render::merchant_table(&records));

    if let Some(path) = csv {
        let path = path.unwrap_or_else(|| export::lookup_file_name(name));
        export::export_csv(&path, &records)?;
        println!();
        println!("wrote {} rows to {}", records.len(), path.display());
    }

    Ok(())
}

/// Which way the returned row count is off from the declared total, if at all.
fn count_mismatch(returned: usize, total_count: u64) -> Option<&'static str> {
    match (returned as u64).cmp(&total_count) {
        std::cmp::Ordering::Less => Some("fewer"),
        std::cmp::Ordering::Greater => Some("more"),
        std::cmp::Ordering::Equal => None,
    }
}

#[cfg(test)]
mod tests {
    use super::count_mismatch;

    #[test]
    fn count_mismatch_names_the_direction() {
        assert_eq!(count_mismatch(2, 2), None);
        assert_eq!(count_mismatch(1000, 1200), Some("fewer"));
        assert_eq!(count_mismatch(3, 2), Some("more"));
    }
}

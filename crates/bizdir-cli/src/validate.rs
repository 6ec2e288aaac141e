use std::fmt::Write as _;
use std::path::Path;

use bizdir_core::{Catalog, CatalogProvider, FileCatalogProvider};

pub(crate) fn run(path: &Path) -> anyhow::Result<()> {
    let catalog = FileCatalogProvider::new(path).load()?;
    tracing::info!(path = %path.display(), businesses = catalog.len(), "catalog valid");
    print!("{}", summarize(&catalog));
    Ok(())
}

pub(crate) fn summarize(catalog: &Catalog) -> String {
    let mut out = format!(
        "{} businesses across {} locations\n",
        catalog.len(),
        catalog.locations().len()
    );
    for (category, count) in catalog.category_counts() {
        if count > 0 {
            let _ = writeln!(out, "  {:<24} {count}", category.label());
        }
    }
    out
}

use crate::config::ReportConfig;
use crate::core::{ProductDocument, ProductRecord, Storage, Task};
use crate::domain::model::{display_field, ListingMeta};
use crate::utils::error::Result;
use std::collections::BTreeSet;
use std::io::Write;

/// Case-folded substrings the keyword scan looks for in product names.
pub const NAME_KEYWORDS: [&str; 2] = ["chaussure", "chaussur"];

const OLDEST_COUNT: usize = 5;
const NEWEST_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellerCount {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordMatch {
    pub id: String,
    pub name: String,
}

/// One record rendered for the first/last listings; absent fields are already `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordLine {
    pub id: String,
    pub name: String,
    pub seller: String,
    pub created: String,
}

impl From<&ProductRecord> for RecordLine {
    fn from(record: &ProductRecord) -> Self {
        Self {
            id: display_field(record.id.as_ref()),
            name: display_field(record.name.as_ref()),
            seller: display_field(record.seller_name.as_ref()),
            created: display_field(record.created_at.as_ref()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaLine {
    pub has_more: String,
    pub limit: String,
    pub offset: String,
}

impl From<&ListingMeta> for MetaLine {
    fn from(meta: &ListingMeta) -> Self {
        Self {
            has_more: display_field(meta.has_more.as_ref()),
            limit: display_field(meta.limit.as_ref()),
            offset: display_field(meta.offset.as_ref()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductReport {
    pub total: usize,
    /// Present only when the input was a wrapped listing.
    pub meta: Option<MetaLine>,
    /// Sorted ascending by label.
    pub sellers: Vec<SellerCount>,
    /// Encounter order.
    pub keyword_matches: Vec<KeywordMatch>,
    /// Last five records, in list order.
    pub oldest: Vec<RecordLine>,
    /// First three records, in list order.
    pub newest: Vec<RecordLine>,
}

impl ProductReport {
    pub fn build(document: &ProductDocument) -> Self {
        let records = document.records();

        Self {
            total: records.len(),
            meta: document.listing_meta().map(MetaLine::from),
            sellers: seller_counts(records),
            keyword_matches: keyword_matches(records, &NAME_KEYWORDS),
            oldest: last_n(records, OLDEST_COUNT)
                .iter()
                .map(RecordLine::from)
                .collect(),
            newest: first_n(records, NEWEST_COUNT)
                .iter()
                .map(RecordLine::from)
                .collect(),
        }
    }

    pub fn render<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "Total products returned: {}", self.total)?;
        if let Some(meta) = &self.meta {
            writeln!(out, "hasMore: {}", meta.has_more)?;
            writeln!(out, "limit: {}", meta.limit)?;
            writeln!(out, "offset: {}", meta.offset)?;
        }

        writeln!(out, "\nUnique sellers ({}):", self.sellers.len())?;
        for seller in &self.sellers {
            writeln!(out, "  {} ({} products)", seller.label, seller.count)?;
        }

        writeln!(out, "\nSearching for chaussure...")?;
        for found in &self.keyword_matches {
            writeln!(out, "  FOUND: id={} name={}", found.id, found.name)?;
        }

        writeln!(out, "\nLast {} products (oldest):", OLDEST_COUNT)?;
        for line in &self.oldest {
            write_record_line(out, line)?;
        }

        writeln!(out, "\nFirst {} products (newest):", NEWEST_COUNT)?;
        for line in &self.newest {
            write_record_line(out, line)?;
        }

        Ok(())
    }

    pub fn to_text(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.render(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

fn write_record_line<W: Write>(out: &mut W, line: &RecordLine) -> std::io::Result<()> {
    writeln!(
        out,
        "  id={} name={} seller={} created={}",
        line.id, line.name, line.seller, line.created
    )
}

/// Distinct seller labels with their record counts. Each count is a fresh scan over `records`.
pub fn seller_counts(records: &[ProductRecord]) -> Vec<SellerCount> {
    let labels: BTreeSet<String> = records.iter().map(ProductRecord::seller_label).collect();

    labels
        .into_iter()
        .map(|label| {
            let count = records
                .iter()
                .filter(|record| record.seller_label() == label)
                .count();
            SellerCount { label, count }
        })
        .collect()
}

pub fn keyword_matches(records: &[ProductRecord], keywords: &[&str]) -> Vec<KeywordMatch> {
    records
        .iter()
        .filter(|record| record.matches_any(keywords))
        .map(|record| KeywordMatch {
            id: display_field(record.id.as_ref()),
            name: display_field(record.name.as_ref()),
        })
        .collect()
}

pub fn last_n(records: &[ProductRecord], n: usize) -> &[ProductRecord] {
    &records[records.len().saturating_sub(n)..]
}

pub fn first_n(records: &[ProductRecord], n: usize) -> &[ProductRecord] {
    &records[..records.len().min(n)]
}

/// Reads the saved listing and renders every summary. Never writes to storage.
pub struct ReportTask<S: Storage> {
    storage: S,
    config: ReportConfig,
}

impl<S: Storage> ReportTask<S> {
    pub fn new(storage: S, config: ReportConfig) -> Self {
        Self { storage, config }
    }

    pub async fn load_document(&self) -> Result<ProductDocument> {
        tracing::debug!("Loading products from: {}", self.config.input_path.display());
        let bytes = self.storage.read_file(&self.config.input_path).await?;
        ProductDocument::from_slice(&bytes)
    }
}

#[async_trait::async_trait]
impl<S: Storage> Task for ReportTask<S> {
    fn name(&self) -> &str {
        "product-report"
    }

    async fn execute(&self) -> Result<String> {
        let document = self.load_document().await?;
        let report = ProductReport::build(&document);

        tracing::debug!(
            "Report built: {} records, {} sellers, {} keyword matches",
            report.total,
            report.sellers.len(),
            report.keyword_matches.len()
        );

        report.to_text()
    }
}

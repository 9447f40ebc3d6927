pub mod export;
pub mod filesystem;

use crate::error::{Result, ScorecardError};
use crate::types::article::{Article, ArticleDocument};
use crate::types::config::ScorecardConfig;
use crate::types::taxonomy::{AlignedExport, ReferenceTaxonomy, VendorExport};
use filesystem::{list_json_files, read_json};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Everything the dashboard renders from, read once from the data root.
#[derive(Debug, Clone)]
pub struct DataSet {
    #[allow(dead_code)]
    pub root: PathBuf,
    pub reference: ReferenceTaxonomy,
    pub entities: Vec<String>,
    /// Aligned vendor export per entity name.
    pub exports: BTreeMap<String, AlignedExport>,
    pub articles: Vec<Article>,
}

pub fn discover(root: &Path, config: &ScorecardConfig) -> Result<DataSet> {
    let reference_path = root.join(&config.taxonomy.reference);
    let reference: ReferenceTaxonomy = read_json(&reference_path)?;
    let entities = reference.entities();
    if reference.categories.is_empty() || entities.is_empty() {
        return Err(ScorecardError::EmptyTaxonomy(
            reference_path.display().to_string(),
        ));
    }
    tracing::info!(
        path = %reference_path.display(),
        categories = reference.categories.len(),
        cells = reference.cell_count(),
        entities = entities.len(),
        "loaded reference taxonomy"
    );

    let mut exports = BTreeMap::new();
    for source in &config.sources {
        let entity = source.entity.trim();
        if !entities.iter().any(|known| known == entity) {
            return Err(ScorecardError::UnknownEntity(entity.to_string()));
        }
        let export: VendorExport = read_json(&root.join(&source.document))?;
        let aligned = export::align(&source.document, entity, &reference, &export)?;
        tracing::info!(entity, document = %source.document, "loaded vendor export");
        exports.insert(entity.to_string(), aligned);
    }
    for entity in &entities {
        if !exports.contains_key(entity) {
            tracing::warn!(entity = %entity, "no vendor export declared; AI scores default to 0");
        }
    }

    let articles = load_articles(&root.join(&config.articles.dir), &config.articles.models)?;

    Ok(DataSet {
        root: root.to_path_buf(),
        reference,
        entities,
        exports,
        articles,
    })
}

fn load_articles(dir: &Path, models: &[String]) -> Result<Vec<Article>> {
    let files = list_json_files(dir);
    let mut articles = Vec::with_capacity(files.len());
    for path in files {
        let Some(id) = path.file_stem().map(|stem| stem.to_string_lossy().to_string()) else {
            continue;
        };
        let document: ArticleDocument = read_json(&path)?;
        articles.push(Article::from_document(&id, document, models));
    }
    tracing::info!(dir = %dir.display(), count = articles.len(), "loaded articles");
    Ok(articles)
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config() -> ScorecardConfig {
        toml::from_str(fixtures::CONFIG).expect("fixture config should parse")
    }

    #[test]
    fn discover_loads_reference_exports_and_articles() {
        let dir = TempDir::new().expect("temp dir should be created");
        fixtures::write_data_root(dir.path());

        let data = discover(dir.path(), &config()).expect("discover should succeed");
        assert_eq!(data.entities, vec!["Meta".to_string(), "OpenAI".to_string()]);
        assert_eq!(data.exports.len(), 2);
        assert_eq!(data.exports["OpenAI"].overall, Some(66.0));
        assert!(data.exports["Meta"].categories[1].is_none());
        assert_eq!(data.articles.len(), 1);
        assert_eq!(data.articles[0].id, "openai");
    }

    #[test]
    fn discover_rejects_source_for_unknown_entity() {
        let dir = TempDir::new().expect("temp dir should be created");
        fixtures::write_data_root(dir.path());
        let mut cfg = config();
        cfg.sources[1].entity = "Mistral".to_string();

        let err = discover(dir.path(), &cfg).expect_err("unknown entity should fail");
        assert!(err.to_string().contains("Mistral"));
    }

    #[test]
    fn discover_rejects_empty_reference() {
        let dir = TempDir::new().expect("temp dir should be created");
        fixtures::write_data_root(dir.path());
        fs::write(dir.path().join("human.json"), "[]").expect("reference should write");

        let err = discover(dir.path(), &config()).expect_err("empty reference should fail");
        assert!(err.to_string().contains("reference taxonomy is empty"));
    }

    #[test]
    fn discover_reports_missing_vendor_document() {
        let dir = TempDir::new().expect("temp dir should be created");
        fixtures::write_data_root(dir.path());
        fs::remove_file(dir.path().join("ai/meta.json")).expect("export should delete");

        let err = discover(dir.path(), &config()).expect_err("missing export should fail");
        assert!(err.to_string().contains("path does not exist"));
    }
}

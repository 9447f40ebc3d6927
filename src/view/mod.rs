pub mod route;
pub mod selector;
pub mod state;

use crate::analyze::analyze;
use crate::load::DataSet;
use crate::types::article::Article;
use crate::types::config::ScorecardConfig;
use crate::types::report::Dashboard;
use route::Route;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleListItem {
    pub id: String,
    pub title: String,
    pub photo: Option<String>,
    pub score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleDetail {
    pub id: String,
    pub title: String,
    pub photo: Option<String>,
    pub model: Option<String>,
    /// Empty when the article has no entry for `model`.
    pub paragraphs: Vec<String>,
    pub review: Option<String>,
    pub score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    List {
        model: Option<String>,
        articles: Vec<ArticleListItem>,
    },
    Detail(ArticleDetail),
    Scorecard(Box<Dashboard>),
    NotFound {
        path: String,
    },
}

pub enum ArticleLookup<'a> {
    Found(&'a Article),
    NotFound,
}

pub fn find_article<'a>(articles: &'a [Article], id: &str) -> ArticleLookup<'a> {
    articles
        .iter()
        .find(|article| article.id == id)
        .map_or(ArticleLookup::NotFound, ArticleLookup::Found)
}

/// Articles with an entry for `model`; every article when no model is selected.
pub fn article_list(articles: &[Article], model: Option<&str>) -> Vec<ArticleListItem> {
    articles
        .iter()
        .filter_map(|article| {
            let score = match model {
                Some(model) => article.entry(model)?.score,
                None => None,
            };
            Some(ArticleListItem {
                id: article.id.clone(),
                title: article.title.clone(),
                photo: article.photo.clone(),
                score,
            })
        })
        .collect()
}

pub fn article_detail(article: &Article, model: Option<&str>, delimiter: &str) -> ArticleDetail {
    let entry = model.and_then(|model| article.entry(model));
    ArticleDetail {
        id: article.id.clone(),
        title: article.title.clone(),
        photo: article.photo.clone(),
        model: model.map(str::to_string),
        paragraphs: entry
            .map(|entry| entry.paragraphs(delimiter))
            .unwrap_or_default(),
        review: entry.and_then(|entry| entry.review.clone()),
        score: entry.and_then(|entry| entry.score),
    }
}

pub fn render_view(
    route: &Route,
    model: Option<&str>,
    data: &DataSet,
    config: &ScorecardConfig,
) -> View {
    match route {
        Route::List => View::List {
            model: model.map(str::to_string),
            articles: article_list(&data.articles, model),
        },
        Route::Detail(id) => match find_article(&data.articles, id) {
            ArticleLookup::Found(article) => View::Detail(article_detail(
                article,
                model,
                &config.articles.paragraph_delimiter,
            )),
            ArticleLookup::NotFound => {
                tracing::warn!(id = %id, "article not found");
                View::NotFound {
                    path: format!("/article/{id}"),
                }
            }
        },
        Route::Scorecard => View::Scorecard(Box::new(analyze(data, config))),
        Route::NotFound(path) => View::NotFound { path: path.clone() },
    }
}

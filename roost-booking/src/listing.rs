use crate::BookingError;
use roost_core::PropertyRepository;
use roost_shared::Property;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

/// How many properties are shown before the user asks for more.
pub const PAGE_SIZE: usize = 5;

/// Category tabs above the property list. `Villa` is the landing tab and
/// shows every property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Villa,
    Hotel,
    Apart,
    Resort,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Villa,
        Category::Hotel,
        Category::Apart,
        Category::Resort,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Villa => "Villa",
            Category::Hotel => "Hotel",
            Category::Apart => "Apart",
            Category::Resort => "Resort",
        }
    }

    fn admits(self, property: &Property) -> bool {
        match self {
            Category::Villa => true,
            other => property
                .kind
                .as_deref()
                .is_some_and(|kind| kind.eq_ignore_ascii_case(other.label())),
        }
    }
}

fn matches_query(property: &Property, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let contains = |field: Option<&str>| field.is_some_and(|f| f.to_lowercase().contains(query));
    contains(property.title.as_deref()) || contains(property.kind.as_deref())
}

/// The browsable property catalogue: search, category tab and paging over
/// the last successful fetch.
pub struct PropertyList {
    repo: Arc<dyn PropertyRepository>,
    properties: Vec<Property>,
    query: String,
    category: Category,
    display_count: usize,
}

impl PropertyList {
    pub fn new(repo: Arc<dyn PropertyRepository>) -> Self {
        Self {
            repo,
            properties: Vec::new(),
            query: String::new(),
            category: Category::default(),
            display_count: PAGE_SIZE,
        }
    }

    /// Fetch the catalogue again and go back to the first page. On failure
    /// the previous catalogue is kept.
    pub async fn refresh(&mut self) -> Result<usize, BookingError> {
        self.display_count = PAGE_SIZE;
        match self.repo.list_properties().await {
            Ok(properties) => {
                info!(count = properties.len(), "Loaded properties");
                self.properties = properties;
                Ok(self.properties.len())
            }
            Err(e) => {
                error!("Error refreshing properties: {}", e);
                Err(BookingError::PropertiesUnavailable(e.to_string()))
            }
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn select_category(&mut self, category: Category) {
        self.category = category;
    }

    /// Reveal the next page.
    pub fn show_more(&mut self) {
        self.display_count += PAGE_SIZE;
    }

    /// Every property passing the search and the selected tab.
    pub fn filtered(&self) -> impl Iterator<Item = &Property> + '_ {
        let query = self.query.trim().to_lowercase();
        let category = self.category;
        self.properties
            .iter()
            .filter(move |p| matches_query(p, &query) && category.admits(p))
    }

    pub fn visible(&self) -> Vec<&Property> {
        self.filtered().take(self.display_count).collect()
    }

    pub fn has_more(&self) -> bool {
        self.filtered().nth(self.display_count).is_some()
    }

    pub fn find(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use roost_core::RepoResult;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Catalogue {
        properties: Mutex<Vec<Property>>,
        down: Mutex<bool>,
    }

    #[async_trait]
    impl PropertyRepository for Catalogue {
        async fn list_properties(&self) -> RepoResult<Vec<Property>> {
            if *self.down.lock().unwrap() {
                return Err("connection refused".into());
            }
            Ok(self.properties.lock().unwrap().clone())
        }

        async fn get_property(&self, id: &str) -> RepoResult<Option<Property>> {
            Ok(self.properties.lock().unwrap().iter().find(|p| p.id == id).cloned())
        }
    }

    fn property(id: &str, title: &str, kind: Option<&str>) -> Property {
        Property {
            id: id.to_string(),
            title: Some(title.to_string()),
            kind: kind.map(str::to_string),
            price: None,
            location: None,
            features: vec![],
            images: vec![],
        }
    }

    async fn loaded(properties: Vec<Property>) -> (PropertyList, Arc<Catalogue>) {
        let repo = Arc::new(Catalogue::default());
        *repo.properties.lock().unwrap() = properties;
        let mut list = PropertyList::new(repo.clone());
        list.refresh().await.unwrap();
        (list, repo)
    }

    fn ids(list: &PropertyList) -> Vec<&str> {
        list.visible().iter().map(|p| p.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_search_matches_title_or_type_ignoring_case() {
        let (mut list, _) = loaded(vec![
            property("1", "Harbour View Hotel", Some("Hotel")),
            property("2", "Cliffside Villa", Some("Villa")),
            property("3", "Garden Flat", Some("Apart")),
            property("4", "Untyped Cabin", None),
        ])
        .await;

        list.set_query("VILLA");
        assert_eq!(ids(&list), vec!["2"]);

        list.set_query("apart");
        assert_eq!(ids(&list), vec!["3"]);

        list.set_query("cabin");
        assert_eq!(ids(&list), vec!["4"]);

        list.clear_query();
        assert_eq!(list.visible().len(), 4);
    }

    #[tokio::test]
    async fn test_category_tabs() {
        let (mut list, _) = loaded(vec![
            property("1", "Harbour View Hotel", Some("hotel")),
            property("2", "Cliffside Villa", Some("Villa")),
            property("3", "Untyped Cabin", None),
        ])
        .await;

        assert_eq!(list.category(), Category::Villa);
        assert_eq!(ids(&list), vec!["1", "2", "3"]);

        list.select_category(Category::Hotel);
        assert_eq!(ids(&list), vec!["1"]);

        list.select_category(Category::Resort);
        assert!(list.visible().is_empty());

        list.select_category(Category::Hotel);
        list.set_query("villa");
        assert!(list.visible().is_empty());
    }

    #[tokio::test]
    async fn test_paging_resets_on_refresh() {
        let (mut list, _) = loaded(
            (1..=12)
                .map(|i| property(&i.to_string(), &format!("Stay {}", i), None))
                .collect(),
        )
        .await;

        assert_eq!(list.visible().len(), PAGE_SIZE);
        assert!(list.has_more());

        list.show_more();
        list.show_more();
        assert_eq!(list.visible().len(), 12);
        assert!(!list.has_more());

        list.refresh().await.unwrap();
        assert_eq!(list.visible().len(), PAGE_SIZE);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_catalogue() {
        let (mut list, repo) = loaded(vec![property("1", "Harbour View Hotel", None)]).await;
        *repo.down.lock().unwrap() = true;

        let err = list.refresh().await.unwrap_err();
        assert_eq!(err, BookingError::PropertiesUnavailable("connection refused".to_string()));
        assert!(list.find("1").is_some());
        assert_eq!(list.visible().len(), 1);
    }
}

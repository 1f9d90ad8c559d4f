//! Storefront session: the owned state a presentation layer renders from.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;

use foodie_cart::{Cart, CartEntry};
use foodie_catalog::{CatalogStore, FilterCriteria, Product, filter};
use foodie_core::{ProductId, SessionId};

use crate::config::ClientConfig;
use crate::preferences::{FilePreferenceStore, PreferenceStore, Theme};
use crate::source::{CatalogError, CatalogSource, HttpCatalogSource, fetch_catalog};

/// What a call to [`Storefront::load`] did.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The catalog was fetched and installed.
    Loaded { products: usize, categories: usize },
    /// A fetch failed; the catalog was left as it was.
    Failed(CatalogError),
    /// This session already attempted its load; nothing was fetched.
    AlreadyAttempted,
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. })
    }
}

/// One shopper's session.
///
/// All mutation goes through `&mut self`, so the session has a single owner
/// and needs no locking.
pub struct Storefront {
    session_id: SessionId,
    source: Arc<dyn CatalogSource>,
    preferences: Box<dyn PreferenceStore>,
    catalog: CatalogStore,
    criteria: FilterCriteria,
    visible: Vec<Product>,
    cart: Cart,
    cart_open: bool,
    loading: bool,
    load_attempted: bool,
    theme: Theme,
}

impl std::fmt::Debug for Storefront {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storefront")
            .field("session_id", &self.session_id)
            .field("catalog", &self.catalog)
            .field("criteria", &self.criteria)
            .field("cart", &self.cart)
            .field("cart_open", &self.cart_open)
            .field("loading", &self.loading)
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

impl Storefront {
    /// Start a session. The theme is read from `preferences` immediately; the
    /// catalog stays empty (and `is_loading()` true) until [`Storefront::load`].
    pub fn new(source: Arc<dyn CatalogSource>, preferences: Box<dyn PreferenceStore>) -> Self {
        let theme = Theme::load(preferences.as_ref());
        let session_id = SessionId::new();
        tracing::info!(%session_id, %theme, "storefront session started");

        Self {
            session_id,
            source,
            preferences,
            catalog: CatalogStore::new(),
            criteria: FilterCriteria::all(),
            visible: Vec::new(),
            cart: Cart::new(),
            cart_open: false,
            loading: true,
            load_attempted: false,
            theme,
        }
    }

    /// Session against the HTTP backend, with file-backed preferences.
    pub fn from_config(config: &ClientConfig) -> anyhow::Result<Self> {
        let source = Arc::new(HttpCatalogSource::new(config.backend_url.clone()));
        let preferences = match &config.prefs_path {
            Some(path) => FilePreferenceStore::new(path.clone()),
            None => FilePreferenceStore::open_default()?,
        };
        Ok(Self::new(source, Box::new(preferences)))
    }

    /// Fetch the catalog once.
    ///
    /// Failures are logged and leave the catalog untouched; the session stays
    /// usable either way. Later calls are no-ops.
    pub async fn load(&mut self) -> LoadOutcome {
        if self.load_attempted {
            tracing::debug!(session_id = %self.session_id, "catalog load already attempted; skipping");
            return LoadOutcome::AlreadyAttempted;
        }
        self.load_attempted = true;
        self.loading = true;

        let outcome = match fetch_catalog(self.source.as_ref()).await {
            Ok(fetched) => {
                self.catalog
                    .replace(fetched.products, fetched.categories, Utc::now());
                self.criteria = FilterCriteria::all();
                self.visible = self.catalog.products().to_vec();

                tracing::info!(
                    session_id = %self.session_id,
                    products = self.catalog.len(),
                    categories = self.catalog.categories().len(),
                    "catalog loaded"
                );
                LoadOutcome::Loaded {
                    products: self.catalog.len(),
                    categories: self.catalog.categories().len(),
                }
            }
            Err(err) => {
                tracing::error!(session_id = %self.session_id, "catalog load failed: {err}");
                LoadOutcome::Failed(err)
            }
        };

        self.loading = false;
        outcome
    }

    /// Search titles and descriptions. Resets the category to "All".
    pub fn search(&mut self, query: &str) {
        self.apply(FilterCriteria::search(query));
    }

    /// Show one category ("All" shows everything).
    pub fn select_category(&mut self, category: &str) {
        self.apply(FilterCriteria::category(category));
    }

    /// Clear search and category.
    pub fn view_all(&mut self) {
        self.search("");
    }

    fn apply(&mut self, criteria: FilterCriteria) {
        self.visible = filter(self.catalog.products(), &criteria);
        tracing::debug!(
            category = criteria.active_category(),
            query = criteria.query(),
            visible = self.visible.len(),
            "filter applied"
        );
        self.criteria = criteria;
    }

    /// Add one unit and open the cart drawer.
    pub fn add_to_cart(&mut self, product: &Product) {
        self.cart.add(product);
        self.cart_open = true;
    }

    /// Add a catalog product by id. Returns `false` for ids not in the catalog.
    pub fn add_to_cart_by_id(&mut self, product_id: &ProductId) -> bool {
        match self.catalog.get(product_id).cloned() {
            Some(product) => {
                self.add_to_cart(&product);
                true
            }
            None => {
                tracing::warn!(%product_id, "add to cart ignored: product not in catalog");
                false
            }
        }
    }

    pub fn remove_from_cart(&mut self, product_id: &ProductId) {
        self.cart.remove(product_id);
    }

    pub fn open_cart(&mut self) {
        self.cart_open = true;
    }

    pub fn close_cart(&mut self) {
        self.cart_open = false;
    }

    /// Flip light/dark and persist the choice.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme.save(self.preferences.as_mut());
        self.theme
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn categories(&self) -> &[String] {
        self.catalog.categories()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Products currently shown in the grid.
    pub fn visible(&self) -> &[Product] {
        &self.visible
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_entries(&self) -> &[CartEntry] {
        self.cart.entries()
    }

    pub fn cart_count(&self) -> u64 {
        self.cart.count()
    }

    pub fn subtotal(&self) -> Decimal {
        self.cart.subtotal()
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }
}

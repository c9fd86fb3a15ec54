// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search service: the public entry point over a Catalog Store.
//!
//! ```text
//! RawSearchParams ──normalize──► SearchRequest ──fetch──► CandidateRows
//!                                                            │
//!                                        score (relevance + query only)
//!                                                            │
//!                                                            ▼
//!                                         rank + paginate ──► SearchResult
//! ```
//!
//! The service holds nothing but its store handle and config. Every call
//! recomputes from the store's current rows.

use crate::catalog::CatalogStore;
use crate::config::SearchConfig;
use crate::error::{SearchError, StoreError};
use crate::query::{normalize_request, RawSearchParams, SearchRequest};
use crate::search::autocomplete::autocomplete;
use crate::search::cancel::CancellationToken;
use crate::search::fetcher::fetch_candidates;
use crate::search::rank::rank;
use crate::types::{AutocompleteEntry, Candidate, Category, SearchResult, StartupId, StartupProfile};
use tracing::{debug, instrument, warn};

/// Search, autocomplete and lookups over a [`CatalogStore`].
#[derive(Debug, Clone)]
pub struct SearchService<S> {
    store: S,
    config: SearchConfig,
}

impl<S: CatalogStore> SearchService<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, SearchConfig::default())
    }

    pub fn with_config(store: S, config: SearchConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run a search that cannot be cancelled.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResult, SearchError> {
        self.search_with_cancel(request, &CancellationToken::new())
    }

    /// Run a search, giving up with `Cancelled` once `cancel` is set.
    #[instrument(
        skip_all,
        fields(
            query = request.query().unwrap_or(""),
            sort = %request.sort(),
            skip = request.pagination().skip(),
            limit = request.pagination().limit(),
        )
    )]
    pub fn search_with_cancel(
        &self,
        request: &SearchRequest,
        cancel: &CancellationToken,
    ) -> Result<SearchResult, SearchError> {
        let fetched = fetch_candidates(&self.store, request)?;
        let result = rank(request, fetched, cancel, &self.config)?;
        debug!(
            returned = result.results.len(),
            total = result.total,
            total_pages = result.total_pages,
            "search complete"
        );
        Ok(result)
    }

    /// Validate raw parameters, then search. Invalid parameters fail before
    /// the store is touched.
    pub fn search_params(&self, params: &RawSearchParams) -> Result<SearchResult, SearchError> {
        let request = normalize_request(params, &self.config)?;
        self.search(&request)
    }

    /// Suggestions whose name contains `query`. `limit` defaults to
    /// `config.default_autocomplete_limit`.
    #[instrument(skip_all, fields(query = query, limit = ?limit))]
    pub fn autocomplete(
        &self,
        query: &str,
        limit: Option<i64>,
    ) -> Result<Vec<AutocompleteEntry>, SearchError> {
        autocomplete(&self.store, query, limit, &self.config)
    }

    /// A single startup with its aggregates.
    #[instrument(skip_all, fields(id = %id))]
    pub fn get_detail(&self, id: StartupId) -> Result<Candidate, SearchError> {
        self.store
            .get_by_id(id)
            .map_err(|e| self.unavailable("detail lookup", e))?
            .ok_or(SearchError::NotFound(id))
    }

    /// Detail plus the category name and owner display name.
    #[instrument(skip_all, fields(id = %id))]
    pub fn get_profile(&self, id: StartupId) -> Result<StartupProfile, SearchError> {
        let candidate = self.get_detail(id)?;

        let category = match candidate.category_id {
            Some(category_id) => self
                .store
                .category(category_id)
                .map_err(|e| self.unavailable("category lookup", e))?,
            None => None,
        };
        let owner = self
            .store
            .owner(candidate.owner_id)
            .map_err(|e| self.unavailable("owner lookup", e))?;

        Ok(StartupProfile::project(
            candidate,
            category.as_ref(),
            owner.as_ref(),
        ))
    }

    /// All categories, ordered by id.
    pub fn list_categories(&self) -> Result<Vec<Category>, SearchError> {
        let mut categories = self
            .store
            .categories()
            .map_err(|e| self.unavailable("category listing", e))?;
        categories.sort_by_key(|c| c.id);
        Ok(categories)
    }

    fn unavailable(&self, operation: &str, error: StoreError) -> SearchError {
        warn!(operation, error = %error, "catalog store failed");
        SearchError::StoreUnavailable(error)
    }
}

//! Research position access.
//!
//! Positions live in a document-store collection owned by another system. This module provides:
//!
//! - [`PositionStore`], the data-access seam, which yields canonical [`Position`] records
//! - [`MongoPositionStore`], reading the configured MongoDB collection with projections
//! - [`InMemoryPositionStore`], holding raw documents in memory (tests and offline runs)
//! - [`PositionService`], which shapes canonical records into directory and detail views
//!
//! ## Pure Data Operations
//!
//! No HTTP concerns live here. Status codes and envelopes belong in `api-rest`.

use crate::config::CoreConfig;
use crate::constants::{DETAIL_PROJECTION_FIELDS, LIST_PROJECTION_FIELDS};
use crate::error::{CoreError, CoreResult};
use crate::position::{summary_matches, Position};
use api_shared::{PositionDetail, PositionSummary};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use mongodb::{Client, Collection};
use std::sync::Arc;

/// Read access to position records.
///
/// Implementations normalize raw documents with [`Position::from_document`] before returning
/// them.
#[async_trait]
pub trait PositionStore: Send + Sync {
    /// Every position, in store order.
    async fn list(&self) -> CoreResult<Vec<Position>>;

    /// The position whose `_id` is `id`, if any.
    async fn find(&self, id: &ObjectId) -> CoreResult<Option<Position>>;

    /// Round-trip to the backing store.
    async fn ping(&self) -> CoreResult<()>;
}

// ============================================================================
// MONGODB STORE
// ============================================================================

/// Position store backed by a MongoDB collection.
#[derive(Clone, Debug)]
pub struct MongoPositionStore {
    client: Client,
    database: String,
    collection: String,
}

impl MongoPositionStore {
    /// Creates a client for the configured deployment.
    ///
    /// The driver connects lazily, so an unreachable server surfaces on first use rather than
    /// here. A malformed URI fails immediately.
    pub async fn connect(cfg: &CoreConfig) -> CoreResult<Self> {
        let client = Client::with_uri_str(cfg.mongodb_uri()).await?;

        tracing::info!(
            "position store: database={} collection={}",
            cfg.database_name(),
            cfg.positions_collection()
        );

        Ok(Self::with_client(
            client,
            cfg.database_name(),
            cfg.positions_collection(),
        ))
    }

    pub fn with_client(client: Client, database: &str, collection: &str) -> Self {
        Self {
            client,
            database: database.to_string(),
            collection: collection.to_string(),
        }
    }

    fn collection(&self) -> Collection<Document> {
        self.client
            .database(&self.database)
            .collection::<Document>(&self.collection)
    }
}

#[async_trait]
impl PositionStore for MongoPositionStore {
    async fn list(&self) -> CoreResult<Vec<Position>> {
        let cursor = self
            .collection()
            .find(doc! {})
            .projection(projection(LIST_PROJECTION_FIELDS))
            .await?;
        let documents: Vec<Document> = cursor.try_collect().await?;

        tracing::debug!("fetched {} position documents", documents.len());
        Ok(documents.iter().map(Position::from_document).collect())
    }

    async fn find(&self, id: &ObjectId) -> CoreResult<Option<Position>> {
        let document = self
            .collection()
            .find_one(doc! { "_id": *id })
            .projection(projection(DETAIL_PROJECTION_FIELDS))
            .await?;

        Ok(document.as_ref().map(Position::from_document))
    }

    async fn ping(&self) -> CoreResult<()> {
        self.client
            .database(&self.database)
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }
}

/// Inclusion projection over `fields`. `_id` is always returned by the server.
fn projection(fields: &[&str]) -> Document {
    fields.iter().fold(Document::new(), |mut projection, field| {
        projection.insert(*field, 1);
        projection
    })
}

// ============================================================================
// IN-MEMORY STORE
// ============================================================================

/// Position store over raw documents held in memory.
///
/// Documents go through the same normalization as those read from MongoDB, so it behaves like
/// the real collection for any document shape.
#[derive(Clone, Debug, Default)]
pub struct InMemoryPositionStore {
    documents: Vec<Document>,
}

impl InMemoryPositionStore {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }
}

#[async_trait]
impl PositionStore for InMemoryPositionStore {
    async fn list(&self) -> CoreResult<Vec<Position>> {
        Ok(self.documents.iter().map(Position::from_document).collect())
    }

    async fn find(&self, id: &ObjectId) -> CoreResult<Option<Position>> {
        let wanted = Bson::ObjectId(*id);
        Ok(self
            .documents
            .iter()
            .find(|document| document.get("_id") == Some(&wanted))
            .map(Position::from_document))
    }

    async fn ping(&self) -> CoreResult<()> {
        Ok(())
    }
}

// ============================================================================
// POSITION SERVICE
// ============================================================================

/// Parse a client-supplied position identifier.
///
/// Only the 24-hex-character object id form is accepted.
pub fn parse_position_id(id: &str) -> CoreResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| CoreError::InvalidId(id.to_string()))
}

/// Directory and detail views over a [`PositionStore`].
#[derive(Clone)]
pub struct PositionService {
    store: Arc<dyn PositionStore>,
}

impl PositionService {
    pub fn new(store: Arc<dyn PositionStore>) -> Self {
        Self { store }
    }

    /// Directory listing, optionally filtered by a free-text query.
    ///
    /// # Errors
    /// Returns [`CoreError::Upstream`] if the store cannot be read. Individual records never
    /// fail; they are shaped with defaults.
    pub async fn list_summaries(&self, query: Option<&str>) -> CoreResult<Vec<PositionSummary>> {
        let summaries = self
            .store
            .list()
            .await?
            .iter()
            .map(Position::summary)
            .filter(|summary| query.map_or(true, |q| summary_matches(summary, q)))
            .collect();

        Ok(summaries)
    }

    /// The position presented to the student as their match.
    ///
    /// There is no matching algorithm: this is the first listed position.
    pub async fn first_match(&self) -> CoreResult<Option<PositionSummary>> {
        Ok(self.store.list().await?.first().map(Position::summary))
    }

    /// Full view of one position.
    ///
    /// # Errors
    /// - [`CoreError::InvalidId`] if `id` is not an object id.
    /// - [`CoreError::NotFound`] if no position has that id.
    /// - [`CoreError::Upstream`] if the store cannot be read.
    pub async fn detail(&self, id: &str) -> CoreResult<PositionDetail> {
        let oid = parse_position_id(id)?;

        match self.store.find(&oid).await? {
            Some(position) => Ok(position.detail()),
            None => {
                tracing::debug!("position {} not found", id);
                Err(CoreError::NotFound("Not found".into()))
            }
        }
    }

    pub async fn ping(&self) -> CoreResult<()> {
        self.store.ping().await
    }
}

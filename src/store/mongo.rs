//! MongoDB document store
//!
//! Thin wrapper over the official driver. Connections are lazy, so
//! `connect` only fails on a malformed connection string; an
//! unreachable server surfaces on the first operation as
//! [`StorageError::Unavailable`].

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};
use mongodb::error::ErrorKind;
use mongodb::{Client, Database};
use serde_json::{Map, Value};

use crate::schema::ResourceKind;
use crate::store::config::StoreConfig;
use crate::store::errors::{StorageError, StorageResult};
use crate::store::filter::ExactMatch;
use crate::store::{DocumentStore, StoreDiagnostics, INTERNAL_ID};

/// Maximum collection names reported by diagnostics.
const DIAGNOSTIC_COLLECTION_LIMIT: usize = 10;

/// Backend persisting documents in a MongoDB database, one collection
/// per resource kind.
#[derive(Debug, Clone)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Connect using `config`. Requires a connection URL; the database
    /// name falls back to the default when unset.
    pub async fn connect(config: &StoreConfig) -> StorageResult<Self> {
        let url = config
            .url
            .as_deref()
            .ok_or_else(|| StorageError::Unavailable("no database URL configured".into()))?;

        let client = Client::with_uri_str(url).await.map_err(classify)?;
        Ok(Self {
            database: client.database(config.database_or_default()),
        })
    }

    fn collection(&self, kind: ResourceKind) -> mongodb::Collection<Document> {
        self.database.collection::<Document>(kind.as_str())
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert(
        &self,
        kind: ResourceKind,
        fields: Map<String, Value>,
    ) -> StorageResult<String> {
        let document = mongodb::bson::to_document(&Value::Object(fields))
            .map_err(|e| StorageError::Rejected(format!("record not representable: {}", e)))?;

        let result = self
            .collection(kind)
            .insert_one(document)
            .await
            .map_err(classify)?;

        Ok(id_string(result.inserted_id))
    }

    async fn query(
        &self,
        kind: ResourceKind,
        filter: Option<&ExactMatch>,
    ) -> StorageResult<Vec<Value>> {
        let mut cursor = self
            .collection(kind)
            .find(filter_document(filter))
            .await
            .map_err(classify)?;

        let mut documents = Vec::new();
        while let Some(document) = cursor.try_next().await.map_err(classify)? {
            documents.push(document_to_json(document));
        }
        Ok(documents)
    }

    async fn diagnostics(&self) -> StoreDiagnostics {
        let database = Some(self.database.name().to_string());

        if let Err(error) = self.database.run_command(doc! {"ping": 1}).await {
            return StoreDiagnostics {
                backend: "mongodb",
                connected: false,
                database,
                collections: Vec::new(),
                error: Some(error.to_string()),
            };
        }

        match self.database.list_collection_names().await {
            Ok(mut collections) => {
                collections.sort();
                collections.truncate(DIAGNOSTIC_COLLECTION_LIMIT);
                StoreDiagnostics {
                    backend: "mongodb",
                    connected: true,
                    database,
                    collections,
                    error: None,
                }
            }
            Err(error) => StoreDiagnostics {
                backend: "mongodb",
                connected: true,
                database,
                collections: Vec::new(),
                error: Some(error.to_string()),
            },
        }
    }
}

/// Build the find filter; no filter means match everything.
fn filter_document(filter: Option<&ExactMatch>) -> Document {
    let mut document = Document::new();
    if let Some(filter) = filter {
        document.insert(filter.field.clone(), filter.value.clone());
    }
    document
}

/// Convert a stored document to JSON with its identifier stringified
/// under the store-native key.
fn document_to_json(mut document: Document) -> Value {
    let id = document.remove(INTERNAL_ID);
    let mut value = Bson::Document(document).into_relaxed_extjson();
    if let (Some(id), Some(object)) = (id, value.as_object_mut()) {
        object.insert(INTERNAL_ID.to_string(), Value::String(id_string(id)));
    }
    value
}

/// Render an identifier the way clients expect: ObjectIds as their hex
/// form, strings as-is.
fn id_string(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        other => other.to_string(),
    }
}

/// Map driver failures onto the two storage error classes.
fn classify(error: mongodb::error::Error) -> StorageError {
    match error.kind.as_ref() {
        ErrorKind::ServerSelection { .. } | ErrorKind::Io(_) => {
            StorageError::Unavailable(error.to_string())
        }
        _ => StorageError::Rejected(error.to_string()),
    }
}

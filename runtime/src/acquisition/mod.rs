//! Network acquisition: fetching remote documents and pages over HTTP.

pub mod http_client;

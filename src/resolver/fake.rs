//! Deterministic in-memory resolver for unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use super::NameResolver;
use crate::error_handling::ResolverError;

/// Serves canned transcripts keyed by query and records every call.
///
/// Keys: `"<name> <TYPE>"` for forward lookups (`"<name> TXT"` for text
/// lookups) and `"-x <ip>"` for reverse lookups.
#[derive(Default)]
pub(crate) struct FakeResolver {
    replies: HashMap<String, String>,
    failing: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl FakeResolver {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_reply(mut self, key: &str, text: impl Into<String>) -> Self {
        self.replies.insert(key.to_string(), text.into());
        self
    }

    pub(crate) fn with_failure(mut self, key: &str) -> Self {
        self.failing.insert(key.to_string());
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn answer(&self, key: String) -> Result<String, ResolverError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(key.clone());
        }
        if self.failing.contains(&key) {
            return Err(ResolverError::Unavailable(format!("injected failure for {key}")));
        }
        self.replies
            .get(&key)
            .cloned()
            .ok_or_else(|| ResolverError::Unavailable(format!("no canned reply for {key}")))
    }
}

#[async_trait]
impl NameResolver for FakeResolver {
    async fn lookup(
        &self,
        name: &str,
        record_type: &str,
        _server: Option<&str>,
    ) -> Result<String, ResolverError> {
        self.answer(format!("{name} {record_type}"))
    }

    async fn reverse_lookup(
        &self,
        ip: &str,
        _server: Option<&str>,
    ) -> Result<String, ResolverError> {
        self.answer(format!("-x {ip}"))
    }

    async fn text_lookup(&self, name: &str) -> Result<String, ResolverError> {
        self.answer(format!("{name} TXT"))
    }
}

/// Builds a minimal transcript whose answer section holds `records`.
pub(crate) fn transcript(records: &[&str]) -> String {
    let mut text = String::from(
        ";; ->>HEADER<<- opcode: QUERY, status: NOERROR, id: 1\n\
         ;; flags: qr rd ra; QUERY: 1, ANSWER: 0, AUTHORITY: 0, ADDITIONAL: 0\n\
         ;; ANSWER SECTION:\n",
    );
    for record in records {
        text.push_str(record);
        text.push('\n');
    }
    text
}

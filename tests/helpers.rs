// Shared test helpers: transcript fixtures and a scripted resolver.
//
// Each integration test file pulls this in with `mod helpers;`.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use dig_inspect::{NameResolver, ResolverError};

/// Loads a transcript from `tests/data`.
#[allow(dead_code)] // Used by other test files
pub fn fixture(name: &str) -> String {
    let path = format!("{}/tests/data/{}", env!("CARGO_MANIFEST_DIR"), name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path}: {e}"))
}

/// Builds a minimal transcript whose answer section holds `records`.
#[allow(dead_code)]
pub fn answer_transcript(records: &[&str]) -> String {
    let mut text = String::from(
        ";; ->>HEADER<<- opcode: QUERY, status: NOERROR, id: 4000\n\
         ;; flags: qr rd ra; QUERY: 1, ANSWER: 0, AUTHORITY: 0, ADDITIONAL: 0\n\
         ;; ANSWER SECTION:\n",
    );
    for record in records {
        text.push_str(record);
        text.push('\n');
    }
    text
}

/// Resolver that answers from a fixed script and records every query.
///
/// Query keys: `"<name> <TYPE>"` for forward and text lookups,
/// `"-x <ip> @<server>"` (or `"-x <ip>"`) for reverse lookups. Unscripted
/// queries fail with `ResolverError::Unavailable`.
#[derive(Default)]
pub struct ScriptedResolver {
    script: HashMap<String, String>,
    queries: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl ScriptedResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, query: &str, text: impl Into<String>) -> Self {
        self.script.insert(query.to_string(), text.into());
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    fn answer(&self, query: String) -> Result<String, ResolverError> {
        self.queries.lock().unwrap().push(query.clone());
        self.script
            .get(&query)
            .cloned()
            .ok_or(ResolverError::Unavailable(query))
    }
}

#[async_trait]
impl NameResolver for ScriptedResolver {
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
        server: Option<&str>,
    ) -> Result<String, ResolverError> {
        match server {
            Some(server) => self.answer(format!("-x {ip} @{server}")),
            None => self.answer(format!("-x {ip}")),
        }
    }

    async fn text_lookup(&self, name: &str) -> Result<String, ResolverError> {
        self.answer(format!("{name} TXT"))
    }
}

//! Shared fixtures for emporium-update integration tests
#![allow(dead_code)]

use emporium_core::{Error, InstalledExtension, Result};
use emporium_update::{Activator, HostStore};
use std::collections::BTreeMap;

/// In-memory host store recording every interaction
#[derive(Debug, Default)]
pub struct FakeStore {
    pub records: BTreeMap<String, InstalledExtension>,
    pub dirty_count: usize,
    pub notifications: Vec<String>,
    pub stamped: Vec<(String, String)>,
}

impl FakeStore {
    pub fn with_record(record: InstalledExtension) -> Self {
        let mut store = Self::default();
        store.records.insert(record.title.clone(), record);
        store
    }
}

impl HostStore for FakeStore {
    fn fetch(&self, title: &str) -> Option<InstalledExtension> {
        self.records.get(title).cloned()
    }

    fn add(&mut self, record: InstalledExtension) {
        self.records.insert(record.title.clone(), record);
    }

    fn replace_body(&mut self, title: &str, body: &str) -> bool {
        match self.records.get_mut(title) {
            Some(record) => {
                record.text = body.to_string();
                true
            }
            None => false,
        }
    }

    fn stamp_source_url(&mut self, title: &str, url: &str) {
        self.stamped.push((title.to_string(), url.to_string()));
        if let Some(record) = self.records.get_mut(title) {
            record.source_url = Some(url.to_string());
        }
    }

    fn set_dirty(&mut self) {
        self.dirty_count += 1;
    }

    fn notify(&mut self, title: &str) {
        self.notifications.push(title.to_string());
    }
}

/// Activator that records activated code and can be told to reject it
#[derive(Debug, Default)]
pub struct RecordingActivator {
    pub activated: Vec<String>,
    pub reject_with: Option<String>,
}

impl RecordingActivator {
    pub fn rejecting(message: &str) -> Self {
        Self {
            activated: Vec::new(),
            reject_with: Some(message.to_string()),
        }
    }
}

impl Activator for RecordingActivator {
    fn activate(&mut self, code: &str) -> Result<()> {
        if let Some(message) = &self.reject_with {
            return Err(Error::activation(message.clone()));
        }
        self.activated.push(code.to_string());
        Ok(())
    }
}

/// A plugin body carrying the standard header slices
pub fn plugin_text(version: &str, source_url: &str) -> String {
    format!(
        "/***\n|Description|a test plugin|\n|Version    |{version}|\n|Source     |{source_url}|\n***/\nsetup();\n"
    )
}

/// A container export holding the given (title, body) records
pub fn container_export(records: &[(&str, &str)]) -> String {
    let mut body = String::from("<html><body>\n<div id=\"storeArea\">\n");
    for (title, text) in records {
        let escaped = text
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;");
        body.push_str(&format!(
            "<div title=\"{title}\" modifier=\"tester\">\n<pre>{escaped}</pre>\n</div>\n"
        ));
    }
    body.push_str("</div>\n</body></html>");
    body
}

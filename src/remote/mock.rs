//! In-memory remote for unit tests
//!
//! Records every issued command so tests can assert on count and order,
//! and can be told to answer or fail specific commands.

use crate::error::{KioskError, KioskResult};
use crate::remote::Remote;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// One command as it hit the mock
#[derive(Debug, Clone)]
pub struct IssuedCommand {
    pub sudo: bool,
    pub command: String,
    pub input: Option<String>,
}

/// A `Remote` that never leaves the process
#[derive(Default)]
pub struct MockRemote {
    issued: Mutex<Vec<IssuedCommand>>,
    replies: Mutex<HashMap<String, String>>,
    fail_on: Mutex<Option<String>>,
}

impl MockRemote {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `command` with `stdout` instead of the default empty string
    pub fn reply(&self, command: &str, stdout: &str) {
        self.replies
            .lock()
            .unwrap()
            .insert(command.to_string(), stdout.to_string());
    }

    /// Fail any command containing `fragment`; pass `None` to clear
    pub fn fail_on(&self, fragment: Option<&str>) {
        *self.fail_on.lock().unwrap() = fragment.map(str::to_string);
    }

    /// Everything issued so far, in order
    pub fn issued(&self) -> Vec<IssuedCommand> {
        self.issued.lock().unwrap().clone()
    }

    /// How many issued commands contain `fragment`
    pub fn count_containing(&self, fragment: &str) -> usize {
        self.issued
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.command.contains(fragment))
            .count()
    }

    fn record(&self, sudo: bool, command: &str, input: Option<&str>) -> KioskResult<String> {
        self.issued.lock().unwrap().push(IssuedCommand {
            sudo,
            command: command.to_string(),
            input: input.map(str::to_string),
        });

        if let Some(ref fragment) = *self.fail_on.lock().unwrap() {
            if command.contains(fragment.as_str()) {
                return Err(KioskError::remote(command, 1, "mock failure"));
            }
        }

        Ok(self
            .replies
            .lock()
            .unwrap()
            .get(command)
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl Remote for MockRemote {
    async fn run(&self, command: &str) -> KioskResult<String> {
        self.record(false, command, None)
    }

    async fn run_with_input(&self, command: &str, input: &str) -> KioskResult<String> {
        self.record(false, command, Some(input))
    }

    async fn sudo(&self, command: &str) -> KioskResult<String> {
        self.record(true, command, None)
    }

    fn target(&self) -> String {
        "pi@mock".to_string()
    }
}

// Command tests box a clone into the Context and keep the Arc for asserts
#[async_trait]
impl Remote for std::sync::Arc<MockRemote> {
    async fn run(&self, command: &str) -> KioskResult<String> {
        self.as_ref().run(command).await
    }

    async fn run_with_input(&self, command: &str, input: &str) -> KioskResult<String> {
        self.as_ref().run_with_input(command, input).await
    }

    async fn sudo(&self, command: &str) -> KioskResult<String> {
        self.as_ref().sudo(command).await
    }

    fn target(&self) -> String {
        self.as_ref().target()
    }
}

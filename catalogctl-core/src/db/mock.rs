//! Scripted [`Database`] for unit tests

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::db::database::{Database, DbError, JsonRow, SqlParam};

/// One canned engine response.
#[derive(Debug, Clone)]
enum Scripted {
    Rows(Vec<JsonRow>),
    RowCount(u64),
    Fail(String),
}

/// A statement the code under test issued.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecordedCall {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

/// Answers queries from a FIFO of scripted responses and records every call.
#[derive(Debug, Default)]
pub(crate) struct ScriptedDatabase {
    responses: Mutex<VecDeque<Scripted>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedDatabase {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_rows(&self, rows: Vec<JsonRow>) {
        self.push(Scripted::Rows(rows));
    }

    pub fn push_row_count(&self, count: u64) {
        self.push(Scripted::RowCount(count));
    }

    pub fn push_error(&self, message: &str) {
        self.push(Scripted::Fail(message.to_owned()));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn push(&self, response: Scripted) {
        self.responses.lock().unwrap().push_back(response);
    }

    fn next(&self, sql: &str, params: &[SqlParam]) -> Scripted {
        self.calls.lock().unwrap().push(RecordedCall {
            sql: sql.to_owned(),
            params: params.to_vec(),
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Scripted::Fail("no scripted response".into()))
    }
}

fn engine_error(message: String) -> DbError {
    DbError::Sqlx(sqlx::Error::Protocol(message))
}

#[async_trait]
impl Database for ScriptedDatabase {
    async fn fetch_rows(&self, sql: &str, params: &[SqlParam]) -> Result<Vec<JsonRow>, DbError> {
        match self.next(sql, params) {
            Scripted::Rows(rows) => Ok(rows),
            Scripted::RowCount(_) => Ok(Vec::new()),
            Scripted::Fail(message) => Err(engine_error(message)),
        }
    }

    async fn execute(&self, sql: &str, params: &[SqlParam]) -> Result<u64, DbError> {
        match self.next(sql, params) {
            Scripted::Rows(rows) => Ok(rows.len() as u64),
            Scripted::RowCount(count) => Ok(count),
            Scripted::Fail(message) => Err(engine_error(message)),
        }
    }
}

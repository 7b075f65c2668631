#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use api::{Difficulty, Profile, ResultsStore, StoreError, StoreHandle, TestResultRecord};
use dioxus::dioxus_core::NoOpMutations;
use dioxus::prelude::*;
use futures::channel::oneshot;
use futures::future::{self, LocalBoxFuture};

pub type StoreReply = Result<Vec<TestResultRecord>, StoreError>;

enum Reply {
    Records(Vec<TestResultRecord>),
    Denied,
    Never,
    Deferred(RefCell<Option<oneshot::Receiver<StoreReply>>>),
}

/// In-memory store that counts calls.
pub struct FakeStore {
    calls: Rc<Cell<usize>>,
    reply: Reply,
}

impl FakeStore {
    fn with(reply: Reply) -> (StoreHandle, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        let store = FakeStore {
            calls: calls.clone(),
            reply,
        };
        (StoreHandle::new(store), calls)
    }

    pub fn records(records: Vec<TestResultRecord>) -> (StoreHandle, Rc<Cell<usize>>) {
        Self::with(Reply::Records(records))
    }

    pub fn denied() -> (StoreHandle, Rc<Cell<usize>>) {
        Self::with(Reply::Denied)
    }

    pub fn never() -> (StoreHandle, Rc<Cell<usize>>) {
        Self::with(Reply::Never)
    }

    /// Resolves whenever the returned sender fires.
    pub fn deferred() -> (StoreHandle, Rc<Cell<usize>>, oneshot::Sender<StoreReply>) {
        let (tx, rx) = oneshot::channel();
        let (handle, calls) = Self::with(Reply::Deferred(RefCell::new(Some(rx))));
        (handle, calls, tx)
    }
}

impl ResultsStore for FakeStore {
    fn fetch_results(&self) -> LocalBoxFuture<'_, StoreReply> {
        self.calls.set(self.calls.get() + 1);
        match &self.reply {
            Reply::Records(records) => Box::pin(future::ready(Ok(records.clone()))),
            Reply::Denied => Box::pin(future::ready(Err(StoreError::Api {
                status: 403,
                code: Some("42501".into()),
                message: "permission denied for table typing_test_results".into(),
            }))),
            Reply::Never => Box::pin(future::pending()),
            Reply::Deferred(slot) => {
                let rx = slot.borrow_mut().take();
                Box::pin(async move {
                    match rx {
                        Some(rx) => rx
                            .await
                            .unwrap_or_else(|_| Err(StoreError::Config("sender dropped".into()))),
                        None => Err(StoreError::Config("already fetched".into())),
                    }
                })
            }
        }
    }
}

pub fn record(id: &str, created_at: &str, difficulty: &str, profile: Option<Profile>) -> TestResultRecord {
    TestResultRecord {
        id: id.into(),
        created_at: created_at.into(),
        test_type: "texto".into(),
        difficulty: Difficulty::from(difficulty),
        wpm: 40,
        accuracy: 90.0,
        errors_count: 4,
        duration_seconds: 60,
        profile,
    }
}

/// Let spawned tasks run, then apply the resulting renders.
pub async fn settle(dom: &mut VirtualDom) {
    tokio::time::timeout(Duration::from_secs(5), dom.wait_for_work())
        .await
        .expect("view never produced work");
    dom.render_immediate(&mut NoOpMutations);
}

/// SSR output with the entities the renderer may emit turned back into text.
pub fn html(dom: &VirtualDom) -> String {
    unescape(&dioxus_ssr::render(dom))
}

pub fn unescape(raw: &str) -> String {
    raw.replace("&#x2f;", "/")
        .replace("&#47;", "/")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}

pub fn data_rows(html: &str) -> usize {
    html.matches("class=\"admin-table__row\"").count()
}

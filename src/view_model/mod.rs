//! Token list view model — turns fetches into render state and signals.
//!
//! Inputs: [`TokenListInputs::load_tokens`]. Outputs: the current
//! [`TokenListState`] plus three [`Signal`]s (loading, error message,
//! render changed). Observers read; only the view model writes.
//!
//! `loading = true` is emitted on the calling thread before `load_tokens`
//! returns. The fetch itself runs as a task on the caller's tokio runtime and
//! every later state write and signal emission happens on that task. Observers
//! that need a specific thread (e.g. a UI thread) must re-dispatch themselves.
//!
//! Overlapping `load_tokens` calls are not coalesced: each starts its own fetch
//! and the one that completes last determines the stored tokens and state.

pub mod signal;
pub mod state;

pub use signal::{Signal, DEFAULT_SIGNAL_CAPACITY};
pub use state::{Item, Section, SectionId, TokenListState, TokenRow};

use crate::domain::token::{Token, TokenSource};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Commands the presentation layer may issue.
pub trait TokenListInputs {
    /// Start a fresh fetch. `loading = true` is emitted before this returns.
    ///
    /// Must be called within a tokio runtime. Returns the fetch task; dropping
    /// it detaches.
    fn load_tokens(&self) -> JoinHandle<()>;
}

/// Read-only view of the view model's outputs.
pub trait TokenListOutputs {
    /// Current render state, `None` until the first successful fetch.
    fn state(&self) -> Option<Arc<TokenListState>>;
    fn loading(&self) -> &Signal<bool>;
    fn errors(&self) -> &Signal<String>;
    fn render_changed(&self) -> &Signal<()>;
}

struct Outputs {
    tokens: watch::Sender<Option<Arc<[Token]>>>,
    state: watch::Sender<Option<Arc<TokenListState>>>,
    loading: Signal<bool>,
    errors: Signal<String>,
    render_changed: Signal<()>,
}

impl Outputs {
    fn new(capacity: usize) -> Self {
        Self {
            tokens: watch::channel(None).0,
            state: watch::channel(None).0,
            loading: Signal::new(capacity),
            errors: Signal::new(capacity),
            render_changed: Signal::new(capacity),
        }
    }

    fn apply_tokens(&self, tokens: Vec<Token>) {
        let state = TokenListState::from_tokens(&tokens);
        tracing::debug!(items = state.item_count(0), "Replacing token list state");
        self.tokens.send_replace(Some(tokens.into()));
        self.set_state(state);
    }

    /// Every assignment fires `render_changed`, identical or not.
    fn set_state(&self, state: TokenListState) {
        self.state.send_replace(Some(Arc::new(state)));
        tracing::trace!("render_changed");
        self.render_changed.emit(());
    }
}

/// Emits `loading = true` on creation and `loading = false` when dropped,
/// however the fetch ends.
struct LoadingGuard {
    outputs: Arc<Outputs>,
}

impl LoadingGuard {
    fn start(outputs: Arc<Outputs>) -> Self {
        tracing::trace!(loading = true);
        outputs.loading.emit(true);
        Self { outputs }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        tracing::trace!(loading = false);
        self.outputs.loading.emit(false);
    }
}

/// View model for the token list screen.
pub struct TokenListViewModel<S: TokenSource> {
    source: Arc<S>,
    outputs: Arc<Outputs>,
}

impl<S: TokenSource> TokenListViewModel<S> {
    pub fn new(source: S) -> Self {
        Self::with_capacity(source, DEFAULT_SIGNAL_CAPACITY)
    }

    /// `capacity` bounds how far a signal subscriber may fall behind.
    pub fn with_capacity(source: S, capacity: usize) -> Self {
        Self {
            source: Arc::new(source),
            outputs: Arc::new(Outputs::new(capacity)),
        }
    }

    pub fn inputs(&self) -> &dyn TokenListInputs {
        self
    }

    pub fn outputs(&self) -> &dyn TokenListOutputs {
        self
    }

    /// Tokens from the last successful fetch.
    pub fn tokens(&self) -> Option<Arc<[Token]>> {
        self.outputs.tokens.borrow().clone()
    }

    /// Watch the render state directly.
    pub fn watch_state(&self) -> watch::Receiver<Option<Arc<TokenListState>>> {
        self.outputs.state.subscribe()
    }
}

async fn run_fetch<S: TokenSource>(
    source: Arc<S>,
    outputs: Arc<Outputs>,
    loading: LoadingGuard,
) {
    let result = {
        let _loading = loading;
        match source.load_tokens().await {
            Ok(tokens) => {
                outputs.apply_tokens(tokens);
                Ok(())
            }
            Err(e) => Err(e),
        }
    };

    // Existing state stays as it was.
    if let Err(e) = result {
        tracing::warn!(error = %e, "Token list fetch failed");
        outputs.errors.emit(e.display_message());
    }
}

impl<S: TokenSource> TokenListInputs for TokenListViewModel<S> {
    fn load_tokens(&self) -> JoinHandle<()> {
        let loading = LoadingGuard::start(self.outputs.clone());
        tokio::spawn(run_fetch(self.source.clone(), self.outputs.clone(), loading))
    }
}

impl<S: TokenSource> TokenListOutputs for TokenListViewModel<S> {
    fn state(&self) -> Option<Arc<TokenListState>> {
        self.outputs.state.borrow().clone()
    }

    fn loading(&self) -> &Signal<bool> {
        &self.outputs.loading
    }

    fn errors(&self) -> &Signal<String> {
        &self.outputs.errors
    }

    fn render_changed(&self) -> &Signal<()> {
        &self.outputs.render_changed
    }
}

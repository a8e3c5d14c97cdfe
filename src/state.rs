use dashmap::DashMap;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::models::quote::IssuedQuote;
use crate::observability::metrics::Metrics;
use crate::pricing::store::PlanStore;
use crate::pricing::token::QuoteSigner;

pub struct AppState {
    pub plans: PlanStore,
    pub quotes: DashMap<Uuid, IssuedQuote>,
    pub quote_events_tx: broadcast::Sender<IssuedQuote>,
    pub signer: QuoteSigner,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(signer: QuoteSigner, event_buffer_size: usize) -> Self {
        let (quote_events_tx, _unused_rx) = broadcast::channel(event_buffer_size);

        Self {
            plans: PlanStore::new(),
            quotes: DashMap::new(),
            quote_events_tx,
            signer,
            metrics: Metrics::new(),
        }
    }
}

//! Session and configuration contexts

use hct_shared::config::ContractConfig;
use hct_shared::session::SessionState;
use hct_shared::Address;
use leptos::prelude::*;

/// Global wallet session, mirrored from whichever page connected last
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub session: RwSignal<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(SessionState::Disconnected),
        }
    }

    pub fn account(&self) -> Option<Address> {
        self.session.with(|state| state.account())
    }

    pub fn set_connecting(&self) {
        self.session.set(SessionState::Connecting);
    }

    pub fn set(&self, state: SessionState) {
        self.session.set(state);
    }
}

pub fn provide_session_context() -> SessionContext {
    let context = SessionContext::new();
    provide_context(context);
    context
}

pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}

pub fn use_contract_config() -> ContractConfig {
    expect_context::<ContractConfig>()
}

//! Landing page: connected account, profile or registration form, balance.

use log::error;

use crate::address::Address;
use crate::config::ContractConfig;
use crate::contract::HealthcareContract;
use crate::error::HctError;
use crate::model::{Registration, RegistrationForm, UserProfile};
use crate::provider::EthereumProvider;
use crate::session::{self, SessionState};
use crate::units::format_units;
use crate::view_model::Notice;

pub const REGISTRATION_SUCCEEDED: &str = "Registration successful!";
pub const REGISTRATION_FAILED: &str = "Registration failed. See console for details.";

/// Balance shown before any successful fetch.
pub const DEFAULT_BALANCE: &str = "0";

#[derive(Clone, Debug)]
pub struct LandingModel<P> {
    contract_address: Address,
    token_symbol: String,
    token_decimals: u32,
    contract: Option<HealthcareContract<P>>,
    pub session: SessionState,
    pub profile: Option<UserProfile>,
    balance: String,
    /// True until [`init`](Self::init) finishes, whatever the outcome.
    pub loading: bool,
    pub form: RegistrationForm,
}

impl<P: EthereumProvider + Clone> LandingModel<P> {
    pub fn new(config: &ContractConfig) -> Self {
        Self {
            contract_address: config.contract_address,
            token_symbol: config.token_symbol.clone(),
            token_decimals: config.token_decimals,
            contract: None,
            session: SessionState::Disconnected,
            profile: None,
            balance: DEFAULT_BALANCE.to_string(),
            loading: true,
            form: RegistrationForm::default(),
        }
    }

    /// Connect, then fetch profile and balance. `None` means no injected wallet.
    pub async fn init(&mut self, provider: Option<P>) {
        self.session = SessionState::Connecting;
        self.session = session::establish(provider.as_ref()).await;

        if let (Some(account), Some(provider)) = (self.session.account(), provider) {
            self.contract = Some(HealthcareContract::new(provider, self.contract_address, account));
            self.refresh_profile().await;
            self.refresh_balance().await;
        }

        self.loading = false;
    }

    pub async fn refresh_profile(&mut self) {
        let Some(contract) = &self.contract else {
            return;
        };
        match contract.fetch_profile(&contract.signer()).await {
            Ok(profile) => self.profile = profile,
            Err(e) => error!("Error fetching user profile: {}", e),
        }
    }

    pub async fn refresh_balance(&mut self) {
        let Some(contract) = &self.contract else {
            return;
        };
        match contract.fetch_balance(&contract.signer()).await {
            Ok(raw) => self.balance = format_units(raw, self.token_decimals),
            Err(e) => error!("Error fetching balance: {}", e),
        }
    }

    /// Validate the form, submit `registerUser`, wait, then re-fetch the profile.
    pub async fn register(&mut self) -> Notice {
        match self.registration_task() {
            Ok(task) => {
                let outcome = task.run().await;
                self.apply_registration(outcome)
            }
            Err(notice) => notice,
        }
    }

    /// Validated registration and the contract to send it with. Taking this
    /// out first lets the page await the wallet without holding the model,
    /// so form input typed meanwhile is kept.
    pub fn registration_task(&self) -> std::result::Result<RegistrationTask<P>, Notice> {
        let registration = self
            .form
            .validate()
            .map_err(|e| Notice::failure(e.user_message()))?;
        let contract = self
            .contract
            .clone()
            .ok_or_else(|| Notice::failure(HctError::NotConnected.user_message()))?;
        Ok(RegistrationTask {
            contract,
            registration,
        })
    }

    /// Store what a finished [`RegistrationTask`] produced. Only the profile changes.
    pub fn apply_registration(&mut self, outcome: RegistrationOutcome) -> Notice {
        if let Some(profile) = outcome.profile {
            self.profile = profile;
        }
        outcome.notice
    }

    /// Take the state a finished [`init`](Self::init) produced, keeping the
    /// form input currently on screen.
    pub fn adopt_loaded(&mut self, loaded: Self) {
        let form = std::mem::take(&mut self.form);
        *self = loaded;
        self.form = form;
    }

    pub fn account(&self) -> Option<Address> {
        self.session.account()
    }

    pub fn account_label(&self) -> String {
        self.session.account_label()
    }

    /// Most recently fetched balance, `"0"` until a fetch succeeds.
    pub fn balance(&self) -> &str {
        &self.balance
    }

    pub fn balance_label(&self) -> String {
        format!("{} {}", self.balance, self.token_symbol)
    }
}

/// A registration ready to submit, detached from the page model.
#[derive(Clone, Debug)]
pub struct RegistrationTask<P> {
    contract: HealthcareContract<P>,
    registration: Registration,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationOutcome {
    pub notice: Notice,
    /// Re-fetched profile; `None` when the transaction failed or the re-fetch did.
    pub profile: Option<Option<UserProfile>>,
}

impl<P: EthereumProvider> RegistrationTask<P> {
    pub async fn run(self) -> RegistrationOutcome {
        if let Err(e) = self.contract.register(&self.registration).await {
            error!("Error registering: {}", e);
            return RegistrationOutcome {
                notice: Notice::failure(REGISTRATION_FAILED),
                profile: None,
            };
        }

        let profile = match self.contract.fetch_profile(&self.contract.signer()).await {
            Ok(profile) => Some(profile),
            Err(e) => {
                error!("Error fetching user profile: {}", e);
                None
            }
        };
        RegistrationOutcome {
            notice: Notice::success(REGISTRATION_SUCCEEDED),
            profile,
        }
    }
}

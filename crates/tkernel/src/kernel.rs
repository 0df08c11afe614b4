use crate::context::ThemeContext;
use crate::environment::Environment;
use crate::error::{KernelError, KernelErrorExt};
use serde_json::Value;
use std::sync::Arc;
use tkernel_config::{ConfigSchema, ConfigVersionPolicy, ValidatedConfig};
use tkernel_events::{EventDispatcher, Payload};
use tracing::info;

/// Version checked against config compatibility windows.
pub const KERNEL_VERSION: &str = "0.1.0";

/// Dispatched once the config passed validation. Payload: `theme`,
/// `config_version`, `validation_mode`.
pub const EVENT_CONFIG_VALIDATED: &str = "kernel.config.validated";

/// Dispatched last during boot. Payload: `theme`, `environment`, `kernel_version`.
pub const EVENT_BOOTED: &str = "kernel.booted";

#[derive(Debug)]
struct KernelInner {
    context: ThemeContext,
    config: ValidatedConfig,
    events: EventDispatcher,
}

/// A booted theme kernel.
///
/// Owned by the host and passed where needed; clones share the same state.
#[derive(Debug, Clone)]
pub struct Kernel {
    inner: Arc<KernelInner>,
}

impl Kernel {
    #[must_use]
    pub fn builder() -> KernelBuilder {
        KernelBuilder::default()
    }

    /// Boots with the default policy and a fresh dispatcher.
    ///
    /// # Errors
    /// See [`KernelBuilder::boot`].
    pub fn boot(raw: &Value, environment: impl Into<String>) -> Result<Self, KernelError> {
        Self::builder().environment(environment).boot(raw)
    }

    #[must_use]
    pub const fn version(&self) -> &'static str {
        KERNEL_VERSION
    }

    #[must_use]
    pub fn context(&self) -> &ThemeContext {
        &self.inner.context
    }

    #[must_use]
    pub fn config(&self) -> &ValidatedConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn events(&self) -> &EventDispatcher {
        &self.inner.events
    }
}

#[derive(Debug, Default)]
pub struct KernelBuilder {
    environment: Option<String>,
    policy: Option<ConfigVersionPolicy>,
    dispatcher: Option<EventDispatcher>,
}

impl KernelBuilder {
    /// Environment name; detected from `KERNEL_ENV` when not given.
    #[must_use]
    pub fn environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    #[must_use]
    pub fn policy(mut self, policy: ConfigVersionPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Dispatcher to boot with, typically one that already carries listeners for
    /// the boot events.
    #[must_use]
    pub fn dispatcher(mut self, dispatcher: EventDispatcher) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    /// Validates `raw` and runs the boot events.
    ///
    /// # Errors
    /// * [`KernelError::Environment`] if no usable environment is available.
    /// * [`KernelError::Config`] if the config is rejected.
    /// * [`KernelError::Event`] if a boot listener fails.
    pub fn boot(self, raw: &Value) -> Result<Kernel, KernelError> {
        let environment = match self.environment {
            Some(value) => Environment::from_value(value)?,
            None => Environment::detect()?,
        };
        let schema = ConfigSchema::with_policy(self.policy.unwrap_or_default());
        let events = self.dispatcher.unwrap_or_default();

        let config = schema
            .validate(raw, KERNEL_VERSION, environment.as_str())
            .context("Validating theme config")?;

        let mut validated = Payload::new();
        validated.insert("theme".to_owned(), config.theme().into());
        validated.insert("config_version".to_owned(), config.config_version().into());
        validated.insert("validation_mode".to_owned(), config.validation_mode().as_ref().into());
        events.dispatch(EVENT_CONFIG_VALIDATED, validated)?;

        let context = ThemeContext::new(&config, environment);

        let mut booted = Payload::new();
        booted.insert("theme".to_owned(), context.theme().into());
        booted.insert("environment".to_owned(), context.environment().as_str().into());
        booted.insert("kernel_version".to_owned(), KERNEL_VERSION.into());
        events.dispatch(EVENT_BOOTED, booted)?;

        info!(
            theme = context.theme(),
            environment = %context.environment(),
            config_version = context.config_version(),
            kernel_version = KERNEL_VERSION,
            "Theme kernel booted"
        );

        Ok(Kernel { inner: Arc::new(KernelInner { context, config, events }) })
    }
}

use std::borrow::Cow;
use tkernel_config::ConfigError;
use tkernel_events::EventError;

#[tkernel_derive::tkernel_error]
pub enum KernelError {
    #[error("Kernel config rejected{}: {source}", format_context(.context))]
    Config { source: ConfigError, context: Option<Cow<'static, str>> },

    #[error("Kernel event failed{}: {source}", format_context(.context))]
    Event { source: EventError, context: Option<Cow<'static, str>> },

    #[error("Kernel environment error{}: {message}", format_context(.context))]
    Environment { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

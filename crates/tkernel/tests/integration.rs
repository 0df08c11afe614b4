pub mod fixtures;

#[cfg(test)]
mod boot {
    use super::fixtures::*;
    use serde_json::json;
    use tkernel::config::ConfigVersionPolicy;
    use tkernel::domain::{CompatibilityRecord, ValidationMode};
    use tkernel::events::{EventDispatcher, EventError, Listener};
    use tkernel::*;

    fn dispatcher_with(captured: &Captured) -> EventDispatcher {
        let events = EventDispatcher::new();
        events.on(EVENT_CONFIG_VALIDATED, captured.listener());
        events.on(EVENT_BOOTED, captured.listener());
        events
    }

    #[test]
    fn boot_dispatches_validated_then_booted() {
        let captured = Captured::default();

        let kernel = Kernel::builder()
            .environment("development")
            .dispatcher(dispatcher_with(&captured))
            .boot(&theme_config())
            .unwrap();

        assert_eq!(captured.names(), [EVENT_CONFIG_VALIDATED, EVENT_BOOTED]);

        let validated = captured.get(0);
        assert_eq!(validated.get("theme"), Some(&json!("aurora")));
        assert_eq!(validated.get("config_version"), Some(&json!("1.0")));
        assert_eq!(validated.get("validation_mode"), Some(&json!("strict")));

        let booted = captured.get(1);
        assert_eq!(booted.get("environment"), Some(&json!("development")));
        assert_eq!(booted.get("kernel_version"), Some(&json!(KERNEL_VERSION)));

        assert_eq!(kernel.version(), "0.1.0");
        assert!(kernel.events().has_listeners(EVENT_BOOTED));
    }

    #[test]
    fn context_reflects_config_and_environment() {
        let kernel = Kernel::boot(&theme_config(), "prod").unwrap();

        let ctx = kernel.context();
        assert_eq!(ctx.theme(), "aurora");
        assert!(ctx.is_enabled("dark_mode"));
        assert_eq!(ctx.path("assets"), Some("dist/assets"));
        assert_eq!(ctx.environment().as_str(), "prod");
        assert!(ctx.is_production());
        assert_eq!(kernel.config().validation_mode(), ValidationMode::Strict);
    }

    #[test]
    fn rejected_config_dispatches_nothing() {
        let captured = Captured::default();
        let mut raw = theme_config();
        raw["config_version"] = json!("0.9");
        raw["validation_mode"] = json!("tolerant");

        let err = Kernel::builder()
            .environment("production")
            .dispatcher(dispatcher_with(&captured))
            .boot(&raw)
            .unwrap_err();

        let KernelError::Config { source, .. } = &err else {
            panic!("expected a config error, got {err}");
        };
        assert!(source.is_version_error());
        assert!(captured.names().is_empty());
    }

    #[test]
    fn custom_policy_reaches_validation() {
        let policy = ConfigVersionPolicy::default().with_entry("1.0", CompatibilityRecord::removed());

        let err = Kernel::builder()
            .environment("development")
            .policy(policy)
            .boot(&theme_config())
            .unwrap_err();

        assert!(matches!(err, KernelError::Config { .. }));
    }

    #[test]
    fn failing_boot_listener_aborts_boot() {
        let captured = Captured::default();
        let events = dispatcher_with(&captured);
        events.on_with_priority(
            EVENT_CONFIG_VALIDATED,
            Listener::new(|_| Err("theme requires a child theme".into())),
            100,
        );

        let err = Kernel::builder()
            .environment("development")
            .dispatcher(events)
            .boot(&theme_config())
            .unwrap_err();

        assert!(matches!(err, KernelError::Event { source: EventError::Listener { .. }, .. }));
        assert!(err.to_string().contains("theme requires a child theme"), "{err}");
        assert!(captured.names().is_empty());
    }

    #[test]
    fn empty_environment_is_rejected() {
        let err = Kernel::boot(&theme_config(), "").unwrap_err();

        assert_eq!(err.kind(), "Environment");
    }

    #[test]
    fn clones_share_the_dispatcher() {
        let kernel = Kernel::boot(&theme_config(), "development").unwrap();
        let clone = kernel.clone();

        clone.events().on("theme.ready", Listener::without_event(|| {}));

        assert!(kernel.events().has_listeners("theme.ready"));
    }
}
